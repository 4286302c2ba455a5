//! Model backends, built once at startup

use std::sync::Arc;
use std::time::Duration;

use concierge_config::ModelsConfig;
use concierge_core::{LanguageModel, SpeechToText, TextToSpeech};
use concierge_llm::{LanguageModelAdapter, LlmConfig, OllamaBackend};
use concierge_pipeline::{HttpSttBackend, HttpSttConfig, HttpTtsBackend, HttpTtsConfig};

use crate::AgentError;

/// The three model backends shared by every request
#[derive(Clone)]
pub struct Models {
    pub stt: Arc<dyn SpeechToText>,
    pub llm: Arc<dyn LanguageModel>,
    pub tts: Arc<dyn TextToSpeech>,
}

impl Models {
    pub fn new(
        stt: Arc<dyn SpeechToText>,
        llm: Arc<dyn LanguageModel>,
        tts: Arc<dyn TextToSpeech>,
    ) -> Self {
        Self { stt, llm, tts }
    }

    /// Build the HTTP backends described by `config`
    pub fn from_config(config: &ModelsConfig) -> Result<Self, AgentError> {
        let timeout = Duration::from_secs(config.timeout_seconds);

        let stt = HttpSttBackend::new(HttpSttConfig::from_settings(&config.stt, timeout))?;
        let llm = OllamaBackend::new(LlmConfig::from_settings(&config.llm, timeout))?;
        let tts = HttpTtsBackend::new(HttpTtsConfig::from_settings(&config.tts, timeout))?;

        tracing::info!(
            stt = %config.stt.model,
            llm = %config.llm.model,
            tts = %config.tts.model,
            "Model backends initialized"
        );

        Ok(Self::new(
            Arc::new(stt),
            Arc::new(LanguageModelAdapter::new(llm)),
            Arc::new(tts),
        ))
    }

    /// Probe every backend; error names each one that is down
    pub async fn ensure_available(&self) -> Result<(), AgentError> {
        let (stt, llm, tts) = futures::join!(
            self.stt.is_available(),
            self.llm.is_available(),
            self.tts.is_available()
        );

        let down: Vec<String> = [
            (stt, self.stt.model_name()),
            (llm, self.llm.model_name()),
            (tts, self.tts.model_name()),
        ]
        .into_iter()
        .filter(|(up, _)| !up)
        .map(|(_, name)| name.to_string())
        .collect();

        if down.is_empty() {
            tracing::info!("All model backends available");
            Ok(())
        } else {
            Err(AgentError::Unavailable(down.join(", ")))
        }
    }
}
