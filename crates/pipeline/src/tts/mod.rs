//! Text-to-Speech
//!
//! Synthesis is delegated to a Coqui TTS server over HTTP.

mod http_backend;

pub use http_backend::{HttpTtsBackend, HttpTtsConfig};
