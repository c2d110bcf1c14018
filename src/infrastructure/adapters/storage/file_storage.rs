//! File Storage - 文件系统故事存储实现
//!
//! 实现 StoryStoragePort trait

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::application::ports::{StorageError, StoryStoragePort};
use crate::domain::BaseFilename;

/// 文件系统故事存储
///
/// 文本与音频并排写在同一目录下
pub struct FileStoryStorage {
    /// 输出目录
    base_dir: PathBuf,
}

impl FileStoryStorage {
    /// 创建新的文件存储
    pub async fn new(base_dir: impl AsRef<Path>) -> Result<Self, StorageError> {
        let base_dir = base_dir.as_ref().to_path_buf();

        // 确保目录存在
        fs::create_dir_all(&base_dir)
            .await
            .map_err(|e| StorageError::IoError(format!("{}: {}", base_dir.display(), e)))?;

        Ok(Self { base_dir })
    }

    /// 获取输出目录
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    async fn write(&self, path: PathBuf, data: &[u8]) -> Result<PathBuf, StorageError> {
        fs::write(&path, data)
            .await
            .map_err(|e| StorageError::IoError(format!("{}: {}", path.display(), e)))?;

        tracing::debug!(path = %path.display(), size = data.len(), "File written");

        Ok(path)
    }
}

#[async_trait]
impl StoryStoragePort for FileStoryStorage {
    fn text_path(&self, base: &BaseFilename) -> PathBuf {
        base.text_path(&self.base_dir)
    }

    fn audio_path(&self, base: &BaseFilename) -> PathBuf {
        base.audio_path(&self.base_dir)
    }

    async fn save_text(&self, base: &BaseFilename, text: &str) -> Result<PathBuf, StorageError> {
        self.write(self.text_path(base), text.as_bytes()).await
    }

    async fn save_audio(&self, base: &BaseFilename, data: &[u8]) -> Result<PathBuf, StorageError> {
        self.write(self.audio_path(base), data).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn base() -> BaseFilename {
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        BaseFilename::derive("The Lost Key", date, [0xab, 0xcd, 0xef, 0x01])
    }

    #[tokio::test]
    async fn test_save_text_and_audio() {
        let temp_dir = tempdir().unwrap();
        let storage = FileStoryStorage::new(temp_dir.path()).await.unwrap();

        let text_path = storage.save_text(&base(), "Once upon a time...").await.unwrap();
        let audio_path = storage.save_audio(&base(), b"fake mp3 data").await.unwrap();

        assert_eq!(
            text_path,
            temp_dir.path().join("the_lost_key-20240102-abcdef01.txt")
        );
        assert_eq!(
            audio_path,
            temp_dir.path().join("the_lost_key-20240102-abcdef01.mp3")
        );
        assert_eq!(std::fs::read_to_string(&text_path).unwrap(), "Once upon a time...");
        assert_eq!(std::fs::read(&audio_path).unwrap(), b"fake mp3 data");
    }

    #[tokio::test]
    async fn test_save_text_overwrites() {
        let temp_dir = tempdir().unwrap();
        let storage = FileStoryStorage::new(temp_dir.path()).await.unwrap();

        storage.save_text(&base(), "first version").await.unwrap();
        let path = storage.save_text(&base(), "second").await.unwrap();

        assert_eq!(std::fs::read_to_string(path).unwrap(), "second");
    }

    #[tokio::test]
    async fn test_creates_missing_directory() {
        let temp_dir = tempdir().unwrap();
        let nested = temp_dir.path().join("stories").join("today");
        let storage = FileStoryStorage::new(&nested).await.unwrap();

        assert!(nested.is_dir());
        assert_eq!(storage.base_dir(), nested.as_path());
    }
}
