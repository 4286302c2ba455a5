//! HTTP STT Backend - Calls an external Whisper service
//!
//! The uploaded clip is forwarded as-is (base64 in a JSON body) together with
//! its content type; decoding WebM/MP3/WAV is the service's job.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use concierge_config::SttConfig;
use concierge_core::{AudioClip, Result as CoreResult, SpeechToText};
use serde::{Deserialize, Serialize};

use crate::PipelineError;

/// HTTP STT Backend configuration
#[derive(Debug, Clone)]
pub struct HttpSttConfig {
    /// Base URL of the transcription service
    pub url: String,
    /// Whisper model size, forwarded to the service
    pub model: String,
    /// Language code (e.g., "en")
    pub language: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for HttpSttConfig {
    fn default() -> Self {
        Self::from_settings(
            &SttConfig::default(),
            Duration::from_secs(concierge_config::constants::timeouts::MODEL_REQUEST_SECS),
        )
    }
}

impl HttpSttConfig {
    pub fn from_settings(settings: &SttConfig, timeout: Duration) -> Self {
        Self {
            url: settings.endpoint.trim_end_matches('/').to_string(),
            model: settings.model.clone(),
            language: settings.language.clone(),
            timeout,
        }
    }
}

#[derive(Debug, Serialize)]
struct SttRequest<'a> {
    /// Base64-encoded clip
    audio: String,
    content_type: &'a str,
    language: &'a str,
    model: &'a str,
}

/// Response from the transcription service
#[derive(Debug, Deserialize)]
struct SttResponse {
    text: String,
    #[serde(default)]
    error: Option<String>,
}

/// HTTP STT Backend
pub struct HttpSttBackend {
    config: HttpSttConfig,
    client: reqwest::Client,
}

impl HttpSttBackend {
    pub fn new(config: HttpSttConfig) -> Result<Self, PipelineError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| PipelineError::Model(format!("Failed to create HTTP client: {}", e)))?;

        tracing::info!(
            url = %config.url,
            model = %config.model,
            language = %config.language,
            "HTTP STT backend configured"
        );

        Ok(Self { config, client })
    }

    /// Send a clip to the service and return the transcript
    pub async fn transcribe_clip(&self, clip: &AudioClip) -> Result<String, PipelineError> {
        if clip.is_empty() {
            return Err(PipelineError::Stt("Empty audio payload".to_string()));
        }

        let start = Instant::now();
        let request = SttRequest {
            audio: STANDARD.encode(&clip.bytes),
            content_type: &clip.content_type,
            language: &self.config.language,
            model: &self.config.model,
        };

        let response = self
            .client
            .post(format!("{}/transcribe", self.config.url))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(PipelineError::Stt(format!(
                "HTTP STT service returned error: {}",
                response.status()
            )));
        }

        let result: SttResponse = response
            .json()
            .await
            .map_err(|e| PipelineError::Stt(format!("Failed to parse STT response: {}", e)))?;

        if let Some(error) = result.error {
            return Err(PipelineError::Stt(error));
        }

        let text = result.text.trim().to_string();
        tracing::debug!(
            bytes = clip.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Transcription complete"
        );

        Ok(text)
    }
}

#[async_trait]
impl SpeechToText for HttpSttBackend {
    async fn transcribe(&self, audio: &AudioClip) -> CoreResult<String> {
        Ok(self.transcribe_clip(audio).await?)
    }

    async fn is_available(&self) -> bool {
        self.client
            .get(format!("{}/health", self.config.url))
            .send()
            .await
            .map(|r| r.status().is_success())
            .unwrap_or(false)
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}
