//! Storage Adapter - 文件系统存储实现

mod file_storage;

pub use file_storage::FileStoryStorage;
