//! Story Context - Entity

use serde::Serialize;

use super::extract::parse_story;
use super::StoryError;

/// 模型未给出标题时使用的标题
pub const DEFAULT_TITLE: &str = "untitled";

/// 一次生成得到的故事
///
/// 不变量:
/// - title 与 body 均已去除首尾空白
/// - 只存活于一次运行内，落盘的只有 body 与派生文件名
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Story {
    title: String,
    body: String,
}

impl Story {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into().trim().to_string(),
            body: body.into().trim().to_string(),
        }
    }

    /// 从模型原始回复构造故事
    pub fn from_response(raw: &str) -> Result<Self, StoryError> {
        parse_story(raw)
    }

    // Getters
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}
