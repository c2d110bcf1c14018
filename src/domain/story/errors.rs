//! Story Context - Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoryError {
    #[error("no JSON object found in model response")]
    MissingJsonObject,

    #[error("invalid story JSON: {0}")]
    InvalidJson(String),
}

impl From<serde_json::Error> for StoryError {
    fn from(err: serde_json::Error) -> Self {
        StoryError::InvalidJson(err.to_string())
    }
}
