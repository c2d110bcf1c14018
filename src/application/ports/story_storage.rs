//! Story Storage Port - 输出文件存储
//!
//! 文本与音频按同一个基础文件名写入，只有扩展名不同

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

use crate::domain::BaseFilename;

/// 存储错误
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    IoError(String),
}

/// Story Storage Port
#[async_trait]
pub trait StoryStoragePort: Send + Sync {
    /// 故事文本路径
    fn text_path(&self, base: &BaseFilename) -> PathBuf;

    /// 音频路径
    fn audio_path(&self, base: &BaseFilename) -> PathBuf;

    /// 写入故事文本（已存在则覆盖）
    async fn save_text(&self, base: &BaseFilename, text: &str) -> Result<PathBuf, StorageError>;

    /// 写入音频（已存在则覆盖）
    async fn save_audio(&self, base: &BaseFilename, data: &[u8]) -> Result<PathBuf, StorageError>;
}
