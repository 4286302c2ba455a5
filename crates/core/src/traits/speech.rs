//! Speech processing traits

use crate::{AudioClip, Result};
use async_trait::async_trait;

/// Speech-to-Text interface
///
/// # Example
///
/// ```ignore
/// let stt: Arc<dyn SpeechToText> = Arc::new(HttpSttBackend::new(config)?);
/// let text = stt.transcribe(&clip).await?;
/// ```
#[async_trait]
pub trait SpeechToText: Send + Sync + 'static {
    /// Transcribe an encoded audio clip to text
    async fn transcribe(&self, audio: &AudioClip) -> Result<String>;

    /// Whether the backend can currently serve requests
    async fn is_available(&self) -> bool {
        true
    }

    /// Get model name for logging
    fn model_name(&self) -> &str;
}

/// Text-to-Speech interface
#[async_trait]
pub trait TextToSpeech: Send + Sync + 'static {
    /// Synthesize text to an encoded audio clip
    async fn synthesize(&self, text: &str) -> Result<AudioClip>;

    /// Whether the backend can currently serve requests
    async fn is_available(&self) -> bool {
        true
    }

    /// Get model name for logging
    fn model_name(&self) -> &str;
}
