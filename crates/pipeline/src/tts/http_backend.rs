//! HTTP TTS Backend - Calls a Coqui TTS server
//!
//! `GET {url}/api/tts?text=...` returns a WAV file. The payload is inspected
//! before being handed back; anything that is not a WAV is an error.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use concierge_config::TtsConfig;
use concierge_core::{AudioClip, Result as CoreResult, TextToSpeech};

use crate::wav::{inspect_wav, WavInfo};
use crate::PipelineError;

/// HTTP TTS Backend configuration
#[derive(Debug, Clone)]
pub struct HttpTtsConfig {
    /// Base URL of the synthesis server
    pub url: String,
    /// Model the server was started with (for logging)
    pub model: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for HttpTtsConfig {
    fn default() -> Self {
        Self::from_settings(
            &TtsConfig::default(),
            Duration::from_secs(concierge_config::constants::timeouts::MODEL_REQUEST_SECS),
        )
    }
}

impl HttpTtsConfig {
    pub fn from_settings(settings: &TtsConfig, timeout: Duration) -> Self {
        Self {
            url: settings.endpoint.trim_end_matches('/').to_string(),
            model: settings.model.clone(),
            timeout,
        }
    }
}

/// HTTP TTS Backend
pub struct HttpTtsBackend {
    config: HttpTtsConfig,
    client: reqwest::Client,
}

impl HttpTtsBackend {
    pub fn new(config: HttpTtsConfig) -> Result<Self, PipelineError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| PipelineError::Model(format!("Failed to create HTTP client: {}", e)))?;

        tracing::info!(url = %config.url, model = %config.model, "HTTP TTS backend configured");

        Ok(Self { config, client })
    }

    /// Synthesize `text` and return the WAV bytes with their header facts
    pub async fn synthesize_wav(&self, text: &str) -> Result<(Vec<u8>, WavInfo), PipelineError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(PipelineError::Tts("Nothing to synthesize".to_string()));
        }

        let start = Instant::now();
        let response = self
            .client
            .get(format!("{}/api/tts", self.config.url))
            .query(&[("text", text)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(PipelineError::Tts(format!(
                "TTS server returned error: {}",
                response.status()
            )));
        }

        let bytes = response.bytes().await?.to_vec();
        let info = inspect_wav(&bytes)?;

        tracing::debug!(
            chars = text.len(),
            sample_rate = info.sample_rate,
            duration_ms = info.duration_ms(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Synthesis complete"
        );

        Ok((bytes, info))
    }
}

#[async_trait]
impl TextToSpeech for HttpTtsBackend {
    async fn synthesize(&self, text: &str) -> CoreResult<AudioClip> {
        let (bytes, _) = self.synthesize_wav(text).await?;
        Ok(AudioClip::wav(bytes))
    }

    async fn is_available(&self) -> bool {
        // Coqui's server has no health route; its index page answers GET /
        self.client
            .get(format!("{}/", self.config.url))
            .send()
            .await
            .map(|r| r.status().is_success())
            .unwrap_or(false)
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}
