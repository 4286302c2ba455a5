//! Speech-to-Text
//!
//! Transcription is delegated to a Whisper service over HTTP.

mod http_backend;

pub use http_backend::{HttpSttBackend, HttpSttConfig};
