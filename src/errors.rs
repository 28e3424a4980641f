// src/errors.rs

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatError {
    /// The outbound chat call did not produce a usable reply: error status,
    /// transport failure or an undecodable body.
    #[error("chat call failed: {0}")]
    CallFailed(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ChatResult<T> = Result<T, ChatError>;

impl ChatError {
    pub fn call_failed(msg: impl Into<String>) -> Self {
        ChatError::CallFailed(msg.into())
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        ChatError::Config(msg.into())
    }
}

impl From<reqwest::Error> for ChatError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            ChatError::CallFailed(format!("HTTP {}: {}", status, err))
        } else if err.is_timeout() {
            ChatError::CallFailed(format!("request timed out: {}", err))
        } else if err.is_connect() {
            ChatError::CallFailed(format!("could not connect: {}", err))
        } else {
            ChatError::CallFailed(err.to_string())
        }
    }
}
