//! Command Handlers

mod audiobook_handlers;

pub use audiobook_handlers::{AudiobookResponse, CreateAudiobookHandler};
