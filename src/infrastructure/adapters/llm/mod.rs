//! LLM Adapter - 对话补全客户端实现

mod fake_story_client;
mod openai_chat_client;

pub use fake_story_client::FakeStoryClient;
pub use openai_chat_client::*;
