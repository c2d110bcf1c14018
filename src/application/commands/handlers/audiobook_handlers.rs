//! Audiobook Command Handlers
//!
//! 顺序执行: 生成故事 -> 解析 -> 写文本 -> 合成语音 -> 写音频
//! 任何一步失败即终止，已写入的文件不回滚

use std::path::PathBuf;
use std::sync::Arc;

use crate::application::commands::CreateAudiobook;
use crate::application::error::ApplicationError;
use crate::application::ports::{
    CompletionRequest, ProgressEvent, ProgressPort, SpeechRequest, StoryGeneratorPort,
    StoryStoragePort, TtsEnginePort,
};
use crate::domain::{BaseFilename, Story};

/// 生成结果
#[derive(Debug, Clone)]
pub struct AudiobookResponse {
    pub story: Story,
    pub base_filename: BaseFilename,
    pub text_path: PathBuf,
    pub audio_path: PathBuf,
}

/// CreateAudiobook Handler
pub struct CreateAudiobookHandler {
    story_generator: Arc<dyn StoryGeneratorPort>,
    tts_engine: Arc<dyn TtsEnginePort>,
    storage: Arc<dyn StoryStoragePort>,
    progress: Arc<dyn ProgressPort>,
}

impl CreateAudiobookHandler {
    pub fn new(
        story_generator: Arc<dyn StoryGeneratorPort>,
        tts_engine: Arc<dyn TtsEnginePort>,
        storage: Arc<dyn StoryStoragePort>,
        progress: Arc<dyn ProgressPort>,
    ) -> Self {
        Self {
            story_generator,
            tts_engine,
            storage,
            progress,
        }
    }

    /// 请求模型并解析故事
    async fn generate_story(&self, prompt: &str) -> Result<Story, ApplicationError> {
        self.progress.report(&ProgressEvent::GeneratingStory);

        let raw = self
            .story_generator
            .complete(CompletionRequest::for_story(prompt))
            .await?;

        self.progress.report(&ProgressEvent::RawResponse(raw.clone()));

        let story = Story::from_response(&raw).map_err(|e| {
            tracing::warn!(error = %e, "Model response could not be parsed");
            ApplicationError::from(e)
        })?;

        tracing::info!(
            title = %story.title(),
            body_len = story.body().len(),
            "Story generated"
        );

        Ok(story)
    }

    pub async fn handle(
        &self,
        command: CreateAudiobook,
    ) -> Result<AudiobookResponse, ApplicationError> {
        let story = self.generate_story(&command.prompt).await?;

        let base = BaseFilename::generate(story.title());

        self.progress.report(&ProgressEvent::SavingText);
        let text_path = self.storage.save_text(&base, story.body()).await?;

        self.progress.report(&ProgressEvent::SynthesizingSpeech);
        let speech = self
            .tts_engine
            .synthesize(SpeechRequest::new(story.body()))
            .await?;
        let audio_path = self.storage.save_audio(&base, &speech.audio_data).await?;

        tracing::info!(
            base = %base,
            audio_size = speech.audio_data.len(),
            "Audiobook created"
        );

        self.progress.report(&ProgressEvent::Completed {
            audio_path: audio_path.clone(),
            text_path: text_path.clone(),
        });

        Ok(AudiobookResponse {
            story,
            base_filename: base,
            text_path,
            audio_path,
        })
    }
}
