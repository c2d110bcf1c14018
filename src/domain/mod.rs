//! Domain Layer - 领域层
//!
//! - Story Context: 故事、提示词与模型回复解析
//! - 输出文件名派生

pub mod story;

mod filename;

pub use filename::{sanitize_title, BaseFilename, AUDIO_EXTENSION, SUFFIX_BYTES, TEXT_EXTENSION};
pub use story::{Story, StoryError};
