//! Centralized constants for the concierge
//!
//! Default values used by the settings tree and the model backends. Anything
//! an operator may want to change is also exposed through `Settings`.

/// Application identity
pub mod app {
    pub const NAME: &str = "Conci AI Assistant";
    pub const VERSION: &str = "1.0.0";
    pub const DESCRIPTION: &str = "API for voice-controlled AI assistant for hotel operations.";
}

/// Service endpoints (defaults for local development)
pub mod endpoints {
    /// Whisper transcription service
    pub const STT_DEFAULT: &str = "http://127.0.0.1:8091";

    /// Ollama LLM endpoint
    pub const OLLAMA_DEFAULT: &str = "http://localhost:11434";

    /// Coqui TTS server
    pub const TTS_DEFAULT: &str = "http://127.0.0.1:5002";
}

/// Pretrained model identifiers
pub mod models {
    pub const WHISPER_SIZE: &str = "small";
    pub const MISTRAL_ID: &str = "mistral-7b-instruct";
    pub const COQUI_TTS_NAME: &str = "tts_models/en/ljspeech/fast_pitch";
}

/// Text generation defaults
pub mod generation {
    pub const MAX_NEW_TOKENS: usize = 100;
    pub const TEMPERATURE: f32 = 0.7;
    /// Upper bound accepted by validation
    pub const MAX_TEMPERATURE: f32 = 2.0;
}

/// Timeouts
pub mod timeouts {
    /// Model HTTP calls (seconds)
    pub const MODEL_REQUEST_SECS: u64 = 60;
    /// Whole HTTP request handling (seconds)
    pub const SERVER_REQUEST_SECS: u64 = 120;
}

/// Mock PMS/POS integration
pub mod integrations {
    /// Simulated round-trip to the external system (milliseconds)
    pub const MOCK_LATENCY_MS: u64 = 200;
}

/// Frontend origins allowed by default
pub const DEFAULT_CORS_ORIGINS: &[&str] = &[
    "http://localhost",
    "http://localhost:5173",
    "http://127.0.0.1:5173",
];
