//! Concierge request handling
//!
//! Features:
//! - Text commands: intent extraction, then task creation when a request
//!   needs staff (`Concierge`)
//! - Voice commands: transcription, the same text path, then synthesis
//!   (`SpeechPipeline`)
//! - Startup construction of the STT/LLM/TTS backends (`Models`)

pub mod concierge;
pub mod models;
pub mod voice;

pub use concierge::{Concierge, TextReply};
pub use models::Models;
pub use voice::{SpeechPipeline, StageTimings, VoiceReply};

use thiserror::Error;

/// Agent errors
#[derive(Error, Debug)]
pub enum AgentError {
    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Pipeline error: {0}")]
    Pipeline(String),

    #[error("Model unavailable: {0}")]
    Unavailable(String),
}

impl From<concierge_pipeline::PipelineError> for AgentError {
    fn from(err: concierge_pipeline::PipelineError) -> Self {
        AgentError::Pipeline(err.to_string())
    }
}

impl From<concierge_llm::LlmError> for AgentError {
    fn from(err: concierge_llm::LlmError) -> Self {
        AgentError::Llm(err.to_string())
    }
}

impl From<AgentError> for concierge_core::Error {
    fn from(err: AgentError) -> Self {
        concierge_core::Error::ModelUnavailable(err.to_string())
    }
}
