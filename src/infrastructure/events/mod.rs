//! Progress Events - 进度事件输出

mod console;

pub use console::{render_event, ConsoleProgress};
