//! Story Context - 故事限界上下文
//!
//! 职责:
//! - 故事实体 (title + body)
//! - 模型请求提示词
//! - 从模型回复中提取 JSON

mod aggregate;
mod errors;
mod extract;
mod prompt;

pub use aggregate::{Story, DEFAULT_TITLE};
pub use errors::StoryError;
pub use extract::{extract_json_object, normalize_json_text, parse_story};
pub use prompt::{
    build_messages, ChatMessage, ChatRole, CHAT_MODEL, MAX_TOKENS, SYSTEM_PROMPT, TEMPERATURE,
};
