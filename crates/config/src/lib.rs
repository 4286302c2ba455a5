//! Configuration management for the concierge
//!
//! Supports loading configuration from:
//! - YAML/TOML files under `config/`
//! - Environment variables (CONCIERGE__ prefix, `__` between sections)

pub mod constants;
pub mod settings;

pub use settings::{
    load_settings, load_settings_from, AppInfo, IntegrationsConfig, LlmSettings, ModelsConfig,
    ObservabilityConfig, RuntimeEnvironment, ServerConfig, Settings, SttConfig, TtsConfig,
    ENV_PREFIX,
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
