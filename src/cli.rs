//! 命令行参数

use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;

use crate::application::ApplicationError;

/// Generate a short story from a prompt and narrate it to an MP3 file.
#[derive(Debug, Parser)]
#[command(name = "fabler", version, about)]
pub struct Cli {
    /// Free-text story prompt
    #[arg(value_name = "PROMPT", allow_hyphen_values = true)]
    pub prompt: String,
}

/// 参数解析结果
#[derive(Debug)]
pub enum Invocation {
    /// 正常运行
    Run(Cli),
    /// `--help` / `--version`，原样输出后成功退出
    Info(String),
}

/// 解析命令行参数，缺少提示词时返回 Usage 错误
pub fn parse_args<I, T>(args: I) -> Result<Invocation, ApplicationError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Ok(Invocation::Run(cli)),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                Ok(Invocation::Info(err.render().to_string()))
            }
            _ => Err(ApplicationError::usage(err.render().to_string())),
        },
    }
}
