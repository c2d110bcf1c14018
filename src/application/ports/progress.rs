//! Progress Port - 阶段进度通知
//!
//! 只用于观察，不参与数据流

use std::path::PathBuf;

/// 流水线阶段事件
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    /// 开始请求故事
    GeneratingStory,
    /// 模型原始回复（解析前）
    RawResponse(String),
    /// 开始写入文本
    SavingText,
    /// 开始语音合成
    SynthesizingSpeech,
    /// 全部完成
    Completed {
        audio_path: PathBuf,
        text_path: PathBuf,
    },
}

/// Progress Port
pub trait ProgressPort: Send + Sync {
    fn report(&self, event: &ProgressEvent);
}
