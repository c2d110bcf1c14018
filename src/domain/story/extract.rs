//! 模型回复 JSON 提取
//!
//! 模型回复不保证是合法 JSON：可能夹带说明文字、在字符串值中直接换行、或使用弯引号。
//!
//! 提取步骤:
//! 1. 截取第一个 `{` 到最后一个 `}`（含两端）
//! 2. 删除所有 `\n` 与 `\r`
//! 3. 弯引号替换为 ASCII 引号
//! 4. 按 JSON 对象解析
//!
//! 截取只看字符位置，不理解字符串内部的花括号：对象之后的说明文字里若还有 `}`，解析会失败。

use serde_json::{Map, Value};

use super::{Story, StoryError, DEFAULT_TITLE};

/// 截取第一个 `{` 与最后一个 `}` 之间的文本（含两端）
pub fn extract_json_object(text: &str) -> Result<&str, StoryError> {
    let start = text.find('{').ok_or(StoryError::MissingJsonObject)?;
    let end = text.rfind('}').ok_or(StoryError::MissingJsonObject)?;
    if end < start {
        return Err(StoryError::MissingJsonObject);
    }
    Ok(&text[start..=end])
}

/// 删除换行并把弯引号替换为 ASCII 引号
pub fn normalize_json_text(text: &str) -> String {
    text.chars()
        .filter(|ch| !matches!(ch, '\n' | '\r'))
        .map(normalize_quote)
        .collect()
}

#[inline]
fn normalize_quote(ch: char) -> char {
    match ch {
        '\u{201C}' | '\u{201D}' => '"',
        '\u{2018}' | '\u{2019}' => '\'',
        other => other,
    }
}

/// 读取字符串字段，缺失或 null 视为 None
fn string_field<'a>(object: &'a Map<String, Value>, key: &str) -> Result<Option<&'a str>, StoryError> {
    match object.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.as_str())),
        Some(other) => Err(StoryError::InvalidJson(format!(
            "field `{}` must be a string, got {}",
            key, other
        ))),
    }
}

/// 解析模型原始回复为 Story
///
/// `title` 缺失时为 "untitled"，`story` 缺失时为空串，两者都会去除首尾空白。
pub fn parse_story(raw: &str) -> Result<Story, StoryError> {
    let json = normalize_json_text(extract_json_object(raw)?);
    let object: Map<String, Value> = serde_json::from_str(&json)?;

    let title = string_field(&object, "title")?.unwrap_or(DEFAULT_TITLE);
    let body = string_field(&object, "story")?.unwrap_or_default();

    Ok(Story::new(title, body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_ignores_surrounding_prose() {
        let text = "Sure! Here is your story:\n{\"title\": \"T\"}\nHope you like it.";
        assert_eq!(extract_json_object(text).unwrap(), "{\"title\": \"T\"}");
    }

    #[test]
    fn test_extract_without_braces_fails() {
        assert!(matches!(
            extract_json_object("Sorry, I cannot help."),
            Err(StoryError::MissingJsonObject)
        ));
        assert!(matches!(
            extract_json_object("only an opening {"),
            Err(StoryError::MissingJsonObject)
        ));
        assert!(matches!(
            extract_json_object("only a closing }"),
            Err(StoryError::MissingJsonObject)
        ));
    }

    #[test]
    fn test_extract_reversed_braces_fails() {
        assert!(matches!(
            extract_json_object("} backwards {"),
            Err(StoryError::MissingJsonObject)
        ));
    }

    #[test]
    fn test_normalize_strips_newlines_and_quotes() {
        let text = "{\r\n\u{201C}title\u{201D}: \u{201C}It\u{2019}s \u{2018}fine\u{2019}\u{201D}\n}";
        assert_eq!(normalize_json_text(text), "{\"title\": \"It's 'fine'\"}");
    }

    #[test]
    fn test_parse_canned_response() {
        let raw = "Here you go:\n{\n  \"title\": \"The Painting Robot\",\n  \"story\": \"Once upon a time...\"\n}";
        let story = parse_story(raw).unwrap();
        assert_eq!(story.title(), "The Painting Robot");
        assert_eq!(story.body(), "Once upon a time...");
    }

    #[test]
    fn test_parse_raw_newlines_inside_values() {
        // 字符串值里的裸换行是非法 JSON，删除后才能解析
        let raw = "{\"title\": \"Night\nShift\", \"story\": \"Line one.\nLine two.\"}";
        let story = parse_story(raw).unwrap();
        assert_eq!(story.title(), "NightShift");
        assert_eq!(story.body(), "Line one.Line two.");
    }

    #[test]
    fn test_parse_curly_quote_delimiters() {
        let raw = "{\u{201C}title\u{201D}: \u{201C}The Lost Key\u{201D}, \u{201C}story\u{201D}: \u{201C}Anna\u{2019}s key was gone.\u{201D}}";
        let story = parse_story(raw).unwrap();
        assert_eq!(story.title(), "The Lost Key");
        assert_eq!(story.body(), "Anna's key was gone.");
    }

    #[test]
    fn test_parse_defaults_missing_fields() {
        let story = parse_story("{}").unwrap();
        assert_eq!(story.title(), "untitled");
        assert_eq!(story.body(), "");

        let story = parse_story(r#"{"title": null, "story": "  body  "}"#).unwrap();
        assert_eq!(story.title(), "untitled");
        assert_eq!(story.body(), "body");
    }

    #[test]
    fn test_parse_trims_fields() {
        let story = parse_story(r#"{"title": "  Spaced Out ", "story": " text "}"#).unwrap();
        assert_eq!(story.title(), "Spaced Out");
        assert_eq!(story.body(), "text");
    }

    #[test]
    fn test_parse_inner_braces_inside_object() {
        let story = parse_story(r#"{"title": "Sets", "story": "A set {1, 2} is small."}"#).unwrap();
        assert_eq!(story.body(), "A set {1, 2} is small.");
    }

    #[test]
    fn test_parse_trailing_brace_in_prose_fails() {
        let raw = r#"{"title": "T", "story": "S"} and a wink ;}"#;
        assert!(matches!(parse_story(raw), Err(StoryError::InvalidJson(_))));
    }

    #[test]
    fn test_parse_invalid_json_carries_parser_message() {
        let err = parse_story("{title: T}").unwrap_err();
        match err {
            StoryError::InvalidJson(message) => assert!(message.contains("line 1")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_parse_non_string_field_fails() {
        assert!(matches!(
            parse_story(r#"{"title": 42, "story": "S"}"#),
            Err(StoryError::InvalidJson(_))
        ));
    }
}
