//! Speech backends for the concierge
//!
//! Features:
//! - Whisper transcription over HTTP (`stt`)
//! - Coqui-style speech synthesis over HTTP (`tts`)
//! - WAV inspection and encoding (`wav`)

pub mod stt;
pub mod tts;
pub mod wav;

pub use stt::{HttpSttBackend, HttpSttConfig};
pub use tts::{HttpTtsBackend, HttpTtsConfig};
pub use wav::{encode_pcm16, inspect_wav, WavInfo};

use thiserror::Error;

/// Pipeline errors
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("STT error: {0}")]
    Stt(String),

    #[error("TTS error: {0}")]
    Tts(String),

    #[error("Model error: {0}")]
    Model(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Timeout")]
    Timeout,

    #[error("Audio error: {0}")]
    Audio(String),
}

impl From<reqwest::Error> for PipelineError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            PipelineError::Timeout
        } else {
            PipelineError::Network(err.to_string())
        }
    }
}

impl From<hound::Error> for PipelineError {
    fn from(err: hound::Error) -> Self {
        PipelineError::Audio(err.to_string())
    }
}

impl From<PipelineError> for concierge_core::Error {
    fn from(err: PipelineError) -> Self {
        match err {
            PipelineError::Stt(msg) => concierge_core::Error::Stt(msg),
            PipelineError::Tts(msg) | PipelineError::Audio(msg) => concierge_core::Error::Tts(msg),
            PipelineError::Model(msg) => concierge_core::Error::ModelUnavailable(msg),
            other => concierge_core::Error::Internal(other.to_string()),
        }
    }
}
