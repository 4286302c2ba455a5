//! Error types shared across the concierge crates

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Speech recognition error: {0}")]
    Stt(String),

    #[error("Language model error: {0}")]
    Llm(String),

    #[error("Speech synthesis error: {0}")]
    Tts(String),

    #[error("Integration error: {0}")]
    Integration(String),

    #[error("Model unavailable: {0}")]
    ModelUnavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result alias using the core error
pub type Result<T> = std::result::Result<T, Error>;
