//! 故事生成提示词与采样参数

use serde::Serialize;

/// 对话模型
pub const CHAT_MODEL: &str = "gpt-4";

/// 最大输出 token 数
pub const MAX_TOKENS: u32 = 2000;

/// 采样温度
pub const TEMPERATURE: f32 = 0.7;

pub const SYSTEM_PROMPT: &str = "You are a creative story writer.";

/// 消息角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
}

/// 对话消息
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

fn user_prompt(prompt: &str) -> String {
    format!(
        r#"You are a creative story writer. Given the following prompt, write a story and provide the title and the story in a JSON object format.

Prompt: "{}"

Respond strictly in the following format:
{{
    "title": "Title of the Story",
    "story": "The complete story text"
}}"#,
        prompt
    )
}

/// 构造 system + user 两条消息
pub fn build_messages(prompt: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(SYSTEM_PROMPT),
        ChatMessage::user(user_prompt(prompt)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_messages() {
        let messages = build_messages("a robot learns to paint");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, ChatRole::System);
        assert_eq!(messages[0].content, SYSTEM_PROMPT);
        assert_eq!(messages[1].role, ChatRole::User);
        assert!(messages[1].content.contains("Prompt: \"a robot learns to paint\""));
        assert!(messages[1].content.contains("\"story\": \"The complete story text\""));
    }

    #[test]
    fn test_role_serialization() {
        let json = serde_json::to_string(&ChatMessage::user("hi")).unwrap();
        assert_eq!(json, r#"{"role":"user","content":"hi"}"#);
    }
}
