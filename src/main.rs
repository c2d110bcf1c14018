//! Fabler - 提示词生成故事并朗读为音频
//!
//! 流程: 读取提示词 -> 请求故事 -> 写入文本 -> 语音合成 -> 写入音频
//! 任何失败都以退出码 1 结束

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use fabler::application::{ApplicationError, CreateAudiobook, CreateAudiobookHandler};
use fabler::cli::{parse_args, Invocation};
use fabler::config::{load_config, print_config, require_api_key, AppConfig};
use fabler::infrastructure::adapters::{
    FileStoryStorage, HttpTtsClient, HttpTtsClientConfig, OpenAiChatClient, OpenAiChatClientConfig,
};
use fabler::infrastructure::events::ConsoleProgress;

fn init_tracing(config: &AppConfig) {
    let log_filter = format!("{},fabler={}", config.log.level, config.log.level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    // 标准输出留给进度信息，日志写到标准错误
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.log.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn run() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > OPENAI_API_KEY > 默认值）
    let config = load_config()
        .map_err(|e| ApplicationError::configuration(e.to_string()))
        .context("Failed to load config")?;

    init_tracing(&config);
    print_config(&config);

    // 凭证缺失时在任何其他工作之前退出
    let api_key = require_api_key(&config)
        .map_err(|e| ApplicationError::configuration(e.to_string()))?
        .to_string();

    let cli = match parse_args(std::env::args_os())? {
        Invocation::Run(cli) => cli,
        Invocation::Info(text) => {
            print!("{}", text);
            return Ok(());
        }
    };

    let chat_config = OpenAiChatClientConfig::new(api_key)
        .with_base_url(config.llm.base_url.clone())
        .with_timeout(config.llm.timeout_secs);
    let story_generator = Arc::new(
        OpenAiChatClient::new(chat_config).map_err(ApplicationError::from)?,
    );

    let tts_key = config.tts_api_key().unwrap_or_default().to_string();
    let tts_config = HttpTtsClientConfig::new(tts_key)
        .with_base_url(config.tts.base_url.clone())
        .with_timeout(config.tts.timeout_secs);
    let tts_engine = Arc::new(HttpTtsClient::new(tts_config).map_err(ApplicationError::from)?);

    let storage = Arc::new(
        FileStoryStorage::new(&config.output.dir)
            .await
            .map_err(ApplicationError::from)?,
    );

    let handler = CreateAudiobookHandler::new(
        story_generator,
        tts_engine,
        storage,
        Arc::new(ConsoleProgress::new()),
    );

    let response = handler.handle(CreateAudiobook::new(cli.prompt)).await?;

    tracing::info!(
        text = %response.text_path.display(),
        audio = %response.audio_path.display(),
        "Done"
    );

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<ApplicationError>() {
                Some(ApplicationError::Usage(usage)) => eprint!("{}", usage),
                _ => eprintln!("Error: {:#}", err),
            }
            ExitCode::FAILURE
        }
    }
}
