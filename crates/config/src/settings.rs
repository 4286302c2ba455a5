//! Main settings module

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::{app, endpoints, generation, integrations, models, timeouts};
use crate::ConfigError;

/// Environment variable prefix, e.g. `CONCIERGE__SERVER__PORT=9000`
pub const ENV_PREFIX: &str = "CONCIERGE";

/// Runtime environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeEnvironment {
    /// Development mode - unreachable models are tolerated
    #[default]
    Development,
    Staging,
    Production,
}

impl RuntimeEnvironment {
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub environment: RuntimeEnvironment,

    /// Application identity shown in the API root and logs
    #[serde(default)]
    pub app: AppInfo,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Model backends (STT, LLM, TTS)
    #[serde(default)]
    pub models: ModelsConfig,

    /// External system integrations
    #[serde(default)]
    pub integrations: IntegrationsConfig,

    /// Observability configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Settings {
    /// Create default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_server()?;
        self.validate_models()?;
        Ok(())
    }

    fn validate_server(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.port".to_string(),
                message: "Port cannot be 0".to_string(),
            });
        }

        if self.server.timeout_seconds == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.timeout_seconds".to_string(),
                message: "Timeout must be at least 1 second".to_string(),
            });
        }

        if self.server.cors_origins.is_empty() {
            tracing::warn!("No CORS origins configured; browser clients will be rejected");
        }

        Ok(())
    }

    fn validate_models(&self) -> Result<(), ConfigError> {
        let endpoints = [
            ("models.stt.endpoint", &self.models.stt.endpoint),
            ("models.llm.endpoint", &self.models.llm.endpoint),
            ("models.tts.endpoint", &self.models.tts.endpoint),
        ];
        for (field, endpoint) in endpoints {
            if endpoint.trim().is_empty() {
                return Err(ConfigError::MissingField(field.to_string()));
            }
            if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    message: format!("Expected an http(s) URL, got '{}'", endpoint),
                });
            }
        }

        let llm = &self.models.llm;
        if llm.max_new_tokens == 0 {
            return Err(ConfigError::InvalidValue {
                field: "models.llm.max_new_tokens".to_string(),
                message: "Must be at least 1".to_string(),
            });
        }

        if !(0.0..=generation::MAX_TEMPERATURE).contains(&llm.temperature) {
            return Err(ConfigError::InvalidValue {
                field: "models.llm.temperature".to_string(),
                message: format!(
                    "Must be between 0.0 and {}, got {}",
                    generation::MAX_TEMPERATURE,
                    llm.temperature
                ),
            });
        }

        if self.models.timeout_seconds == 0 {
            return Err(ConfigError::InvalidValue {
                field: "models.timeout_seconds".to_string(),
                message: "Timeout must be at least 1 second".to_string(),
            });
        }

        Ok(())
    }
}

/// Application identity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppInfo {
    #[serde(default = "default_app_name")]
    pub name: String,

    #[serde(default = "default_app_version")]
    pub version: String,

    #[serde(default = "default_app_description")]
    pub description: String,
}

fn default_app_name() -> String {
    app::NAME.to_string()
}
fn default_app_version() -> String {
    app::VERSION.to_string()
}
fn default_app_description() -> String {
    app::DESCRIPTION.to_string()
}

impl Default for AppInfo {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            version: default_app_version(),
            description: default_app_description(),
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP server host
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Request timeout in seconds
    #[serde(default = "default_server_timeout")]
    pub timeout_seconds: u64,

    /// CORS allowed origins
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8000
}
fn default_server_timeout() -> u64 {
    timeouts::SERVER_REQUEST_SECS
}
fn default_cors_origins() -> Vec<String> {
    crate::constants::DEFAULT_CORS_ORIGINS
        .iter()
        .map(|o| o.to_string())
        .collect()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            timeout_seconds: default_server_timeout(),
            cors_origins: default_cors_origins(),
        }
    }
}

/// Model backends
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelsConfig {
    #[serde(default)]
    pub stt: SttConfig,

    #[serde(default)]
    pub llm: LlmSettings,

    #[serde(default)]
    pub tts: TtsConfig,

    /// Per-call HTTP timeout for every model backend
    #[serde(default = "default_model_timeout")]
    pub timeout_seconds: u64,

    /// Probe every backend at startup and refuse to start if one is down
    #[serde(default)]
    pub require_available: bool,
}

fn default_model_timeout() -> u64 {
    timeouts::MODEL_REQUEST_SECS
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            stt: SttConfig::default(),
            llm: LlmSettings::default(),
            tts: TtsConfig::default(),
            timeout_seconds: default_model_timeout(),
            require_available: false,
        }
    }
}

/// Whisper transcription service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SttConfig {
    #[serde(default = "default_stt_endpoint")]
    pub endpoint: String,

    /// Whisper model size ("base", "small", "medium", ...)
    #[serde(default = "default_whisper_size")]
    pub model: String,

    /// Spoken language hint
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_stt_endpoint() -> String {
    endpoints::STT_DEFAULT.to_string()
}
fn default_whisper_size() -> String {
    models::WHISPER_SIZE.to_string()
}
fn default_language() -> String {
    "en".to_string()
}

impl Default for SttConfig {
    fn default() -> Self {
        Self {
            endpoint: default_stt_endpoint(),
            model: default_whisper_size(),
            language: default_language(),
        }
    }
}

/// Text generation backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmSettings {
    #[serde(default = "default_llm_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_llm_model")]
    pub model: String,

    #[serde(default = "default_max_new_tokens")]
    pub max_new_tokens: usize,

    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

fn default_llm_endpoint() -> String {
    endpoints::OLLAMA_DEFAULT.to_string()
}
fn default_llm_model() -> String {
    models::MISTRAL_ID.to_string()
}
fn default_max_new_tokens() -> usize {
    generation::MAX_NEW_TOKENS
}
fn default_temperature() -> f32 {
    generation::TEMPERATURE
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            endpoint: default_llm_endpoint(),
            model: default_llm_model(),
            max_new_tokens: default_max_new_tokens(),
            temperature: default_temperature(),
        }
    }
}

/// Speech synthesis service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TtsConfig {
    #[serde(default = "default_tts_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_tts_model")]
    pub model: String,
}

fn default_tts_endpoint() -> String {
    endpoints::TTS_DEFAULT.to_string()
}
fn default_tts_model() -> String {
    models::COQUI_TTS_NAME.to_string()
}

impl Default for TtsConfig {
    fn default() -> Self {
        Self {
            endpoint: default_tts_endpoint(),
            model: default_tts_model(),
        }
    }
}

/// External system integrations (PMS/POS)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntegrationsConfig {
    /// Simulated latency of the mock PMS/POS in milliseconds
    #[serde(default = "default_mock_latency")]
    pub latency_ms: u64,
}

fn default_mock_latency() -> u64 {
    integrations::MOCK_LATENCY_MS
}

impl Default for IntegrationsConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_mock_latency(),
        }
    }
}

/// Observability configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Enable JSON logging
    #[serde(default)]
    pub log_json: bool,

    /// Enable the Prometheus exporter
    #[serde(default = "default_true")]
    pub metrics_enabled: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}
fn default_true() -> bool {
    true
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_json: false,
            metrics_enabled: true,
        }
    }
}

/// Load settings from `config/` and the environment
///
/// Priority (highest to lowest):
/// 1. Environment variables (CONCIERGE__ prefix)
/// 2. config/{env}.yaml (if env specified)
/// 3. config/default.yaml
pub fn load_settings(env: Option<&str>) -> Result<Settings, ConfigError> {
    load_settings_from(Path::new("config"), env)
}

/// Load settings with an explicit configuration directory
pub fn load_settings_from(config_dir: &Path, env: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder();

    let default_path = config_dir.join("default");
    builder = builder.add_source(File::with_name(&path_str(&default_path)?).required(false));

    if let Some(env_name) = env {
        let env_path = config_dir.join(env_name);
        builder = builder.add_source(File::with_name(&path_str(&env_path)?).required(false));
    }

    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;
    let settings: Settings = config.try_deserialize()?;

    settings.validate()?;

    Ok(settings)
}

fn path_str(path: &Path) -> Result<String, ConfigError> {
    path.to_str()
        .map(str::to_string)
        .ok_or_else(|| ConfigError::FileNotFound(path.display().to_string()))
}
