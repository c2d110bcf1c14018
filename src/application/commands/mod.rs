//! 应用层 - 命令

mod audiobook_commands;

pub mod handlers;

pub use audiobook_commands::*;
