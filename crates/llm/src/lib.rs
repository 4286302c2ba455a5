//! LLM Integration
//!
//! Features:
//! - Ollama backend for raw-prompt completion
//! - Adapter onto the core `LanguageModel` trait

pub mod adapter;
pub mod backend;

pub use adapter::LanguageModelAdapter;
pub use backend::{FinishReason, GenerationResult, LlmBackend, LlmConfig, OllamaBackend};

use thiserror::Error;

/// LLM errors
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("API error: {0}")]
    Api(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,

    #[error("Model not found: {0}")]
    ModelNotFound(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LlmError::Timeout
        } else {
            LlmError::Network(err.to_string())
        }
    }
}

impl From<LlmError> for concierge_core::Error {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::ModelNotFound(model) => concierge_core::Error::ModelUnavailable(model),
            other => concierge_core::Error::Llm(other.to_string()),
        }
    }
}
