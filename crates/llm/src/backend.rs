//! LLM Backend implementations
//!
//! Single-shot completion against a local Ollama server. Prompts are sent raw
//! (no chat template); the caller owns the prompt format.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use concierge_config::LlmSettings;
use concierge_core::GenerationOptions;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::LlmError;

/// LLM configuration
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Model name/ID
    pub model: String,
    /// API endpoint
    pub endpoint: String,
    /// Request timeout
    pub timeout: Duration,
    /// Keep model loaded in memory between calls ("5m", "-1", ...)
    pub keep_alive: String,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: concierge_config::constants::models::MISTRAL_ID.to_string(),
            endpoint: concierge_config::constants::endpoints::OLLAMA_DEFAULT.to_string(),
            timeout: Duration::from_secs(concierge_config::constants::timeouts::MODEL_REQUEST_SECS),
            keep_alive: "5m".to_string(),
        }
    }
}

impl LlmConfig {
    pub fn from_settings(settings: &LlmSettings, timeout: Duration) -> Self {
        Self {
            model: settings.model.clone(),
            endpoint: settings.endpoint.trim_end_matches('/').to_string(),
            timeout,
            ..Default::default()
        }
    }
}

/// LLM generation result
#[derive(Debug, Clone)]
pub struct GenerationResult {
    /// Generated text
    pub text: String,
    /// Tokens generated
    pub tokens: usize,
    /// Total generation time (ms)
    pub total_time_ms: u64,
    /// Finish reason
    pub finish_reason: FinishReason,
}

/// Finish reason
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    Stop,
    Length,
}

/// LLM Backend trait
#[async_trait]
pub trait LlmBackend: Send + Sync {
    /// Complete a raw prompt
    async fn generate(
        &self,
        prompt: &str,
        options: &GenerationOptions,
    ) -> Result<GenerationResult, LlmError>;

    /// Check if model is available
    async fn is_available(&self) -> bool;

    /// Get model name
    fn model_name(&self) -> &str;
}

/// Ollama backend
#[derive(Clone)]
pub struct OllamaBackend {
    client: Client,
    config: LlmConfig,
}

impl OllamaBackend {
    pub fn new(config: LlmConfig) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| LlmError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Build the API URL
    fn api_url(&self, path: &str) -> String {
        format!("{}/api{}", self.config.endpoint, path)
    }

    fn build_request(&self, prompt: &str, options: &GenerationOptions) -> OllamaGenerateRequest {
        OllamaGenerateRequest {
            model: self.config.model.clone(),
            prompt: prompt.to_string(),
            raw: true,
            stream: false,
            options: OllamaOptions {
                // Greedy decoding is temperature zero
                temperature: if options.do_sample { options.temperature } else { 0.0 },
                num_predict: options.max_new_tokens as i32,
            },
            keep_alive: Some(self.config.keep_alive.clone()),
        }
    }
}

#[async_trait]
impl LlmBackend for OllamaBackend {
    async fn generate(
        &self,
        prompt: &str,
        options: &GenerationOptions,
    ) -> Result<GenerationResult, LlmError> {
        let start = Instant::now();
        let request = self.build_request(prompt, options);

        let response = self
            .client
            .post(self.api_url("/generate"))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error = response.text().await.unwrap_or_default();
            if status == reqwest::StatusCode::NOT_FOUND {
                return Err(LlmError::ModelNotFound(self.config.model.clone()));
            }
            return Err(LlmError::Api(format!("{}: {}", status, error)));
        }

        let body: OllamaGenerateResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

        let tokens = body.eval_count.unwrap_or(0) as usize;
        let finish_reason = match body.done_reason.as_deref() {
            Some("length") => FinishReason::Length,
            _ => FinishReason::Stop,
        };

        tracing::debug!(
            model = %self.config.model,
            tokens,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "LLM generation complete"
        );

        Ok(GenerationResult {
            text: body.response,
            tokens,
            total_time_ms: start.elapsed().as_millis() as u64,
            finish_reason,
        })
    }

    async fn is_available(&self) -> bool {
        self.client
            .get(self.api_url("/tags"))
            .send()
            .await
            .map(|r| r.status().is_success())
            .unwrap_or(false)
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}

// Ollama API types
#[derive(Debug, Serialize)]
struct OllamaGenerateRequest {
    model: String,
    prompt: String,
    raw: bool,
    stream: bool,
    options: OllamaOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    keep_alive: Option<String>,
}

#[derive(Debug, Serialize)]
struct OllamaOptions {
    temperature: f32,
    num_predict: i32,
}

#[derive(Debug, Deserialize)]
struct OllamaGenerateResponse {
    response: String,
    #[serde(default)]
    done_reason: Option<String>,
    #[serde(default)]
    eval_count: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = LlmConfig::default();
        assert_eq!(config.model, "mistral-7b-instruct");
        assert_eq!(config.keep_alive, "5m");
    }

    #[test]
    fn test_from_settings_trims_slash() {
        let settings = LlmSettings {
            endpoint: "http://ollama:11434/".to_string(),
            ..Default::default()
        };
        let config = LlmConfig::from_settings(&settings, Duration::from_secs(5));
        assert_eq!(config.endpoint, "http://ollama:11434");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_request_body() {
        let backend = OllamaBackend::new(LlmConfig::default()).unwrap();
        let request = backend.build_request("### Instruction:\nhi", &GenerationOptions::default());
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["prompt"], "### Instruction:\nhi");
        assert_eq!(json["raw"], true);
        assert_eq!(json["stream"], false);
        assert_eq!(json["options"]["num_predict"], 100);
        assert!((json["options"]["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_greedy_is_zero_temperature() {
        let backend = OllamaBackend::new(LlmConfig::default()).unwrap();
        let options = GenerationOptions {
            do_sample: false,
            ..Default::default()
        };
        let request = backend.build_request("x", &options);
        assert_eq!(request.options.temperature, 0.0);
    }

    #[test]
    fn test_response_parsing() {
        let body: OllamaGenerateResponse = serde_json::from_str(
            r#"{"model":"m","response":"Hello","done":true,"done_reason":"length","eval_count":12}"#,
        )
        .unwrap();
        assert_eq!(body.response, "Hello");
        assert_eq!(body.done_reason.as_deref(), Some("length"));
        assert_eq!(body.eval_count, Some(12));
    }

    #[tokio::test]
    async fn test_unreachable_server() {
        let config = LlmConfig {
            endpoint: "http://127.0.0.1:1".to_string(),
            timeout: Duration::from_secs(2),
            ..Default::default()
        };
        let backend = OllamaBackend::new(config).unwrap();

        assert!(!backend.is_available().await);
        let err = backend.generate("hi", &GenerationOptions::default()).await.unwrap_err();
        assert!(matches!(err, LlmError::Network(_)));
    }
}
