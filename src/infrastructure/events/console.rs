//! Console Progress Reporter
//!
//! 把流水线阶段事件打印到标准输出

use std::io::Write;

use crate::application::ports::{ProgressEvent, ProgressPort};

/// 渲染事件为面向用户的文本
pub fn render_event(event: &ProgressEvent) -> String {
    match event {
        ProgressEvent::GeneratingStory => "Generating story...".to_string(),
        ProgressEvent::RawResponse(raw) => format!("Raw API response:\n{}", raw),
        ProgressEvent::SavingText => "Saving story to text file...".to_string(),
        ProgressEvent::SynthesizingSpeech => "Converting text to speech...".to_string(),
        ProgressEvent::Completed {
            audio_path,
            text_path,
        } => format!(
            "Audiobook saved as {}\nText file saved as {}",
            audio_path.display(),
            text_path.display()
        ),
    }
}

/// 标准输出进度报告
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleProgress;

impl ConsoleProgress {
    pub fn new() -> Self {
        Self
    }
}

impl ProgressPort for ConsoleProgress {
    fn report(&self, event: &ProgressEvent) {
        let mut stdout = std::io::stdout().lock();
        // 标准输出关闭时忽略，进度只是观察用途
        let _ = writeln!(stdout, "{}", render_event(event));
        let _ = stdout.flush();
    }
}
