//! 输出文件名派生
//!
//! 文本与音频共用同一个基础文件名 `{title}-{YYYYMMDD}-{8位十六进制}`，只有扩展名不同。
//! 唯一性依赖随机后缀，不检查文件是否已存在。

use chrono::{Local, NaiveDate};
use std::path::{Path, PathBuf};

/// 故事文本扩展名
pub const TEXT_EXTENSION: &str = "txt";

/// 音频扩展名
pub const AUDIO_EXTENSION: &str = "mp3";

/// 随机后缀字节数（编码后 8 个十六进制字符）
pub const SUFFIX_BYTES: usize = 4;

/// 标题规整：空白串替换为下划线并转小写
///
/// 路径分隔符同样替换为下划线，输出不会落到输出目录之外。
pub fn sanitize_title(title: &str) -> String {
    title
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .replace(['/', '\\'], "_")
        .to_lowercase()
}

fn hex_suffix(bytes: &[u8; SUFFIX_BYTES]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

/// 基础文件名
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BaseFilename(String);

impl BaseFilename {
    /// 由标题、日期和随机字节派生
    pub fn derive(title: &str, date: NaiveDate, suffix: [u8; SUFFIX_BYTES]) -> Self {
        Self(format!(
            "{}-{}-{}",
            sanitize_title(title),
            date.format("%Y%m%d"),
            hex_suffix(&suffix)
        ))
    }

    /// 使用本地日期和随机后缀生成
    pub fn generate(title: &str) -> Self {
        Self::derive(title, Local::now().date_naive(), rand::random())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `{base}.txt`
    pub fn text_file_name(&self) -> String {
        format!("{}.{}", self.0, TEXT_EXTENSION)
    }

    /// `{base}.mp3`
    pub fn audio_file_name(&self) -> String {
        format!("{}.{}", self.0, AUDIO_EXTENSION)
    }

    pub fn text_path(&self, dir: &Path) -> PathBuf {
        dir.join(self.text_file_name())
    }

    pub fn audio_path(&self, dir: &Path) -> PathBuf {
        dir.join(self.audio_file_name())
    }
}

impl std::fmt::Display for BaseFilename {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
