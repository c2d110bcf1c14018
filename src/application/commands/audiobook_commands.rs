//! Audiobook Commands

/// 由提示词生成有声故事
#[derive(Debug, Clone)]
pub struct CreateAudiobook {
    pub prompt: String,
}

impl CreateAudiobook {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }
}
