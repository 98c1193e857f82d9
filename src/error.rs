// src/error.rs

use thiserror::Error;

/// Errors raised by the quiz engine itself.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("unknown risk category: {0:?}")]
    UnknownCategory(String),

    #[error("question bank is invalid: {0}")]
    InvalidQuestionBank(String),
}

/// Failures writing to the durable key-value slot.
///
/// Reads never produce one of these: a missing or unreadable result is "absent".
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not encode quiz result: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("browser storage unavailable: {0}")]
    Unavailable(String),
}

/// Errors from the remote content store or the admin forms feeding it.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("request to content store failed: {0}")]
    Transport(String),

    #[error("content store responded with HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid response from content store: {0}")]
    Decode(String),

    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: String },

    #[error("field `{0}` is required")]
    MissingField(&'static str),
}

#[cfg(not(target_arch = "wasm32"))]
impl From<reqwest::Error> for ContentError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ContentError::Decode(err.to_string())
        } else {
            ContentError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ContentError {
    fn from(err: serde_json::Error) -> Self {
        ContentError::Decode(err.to_string())
    }
}
