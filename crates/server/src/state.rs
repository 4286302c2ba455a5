//! Application State
//!
//! Shared state across all handlers.

use std::sync::Arc;
use std::time::Duration;

use concierge_agent::{Concierge, Models, SpeechPipeline};
use concierge_config::Settings;
use concierge_core::GenerationOptions;
use concierge_persistence::{InMemoryTaskStore, TaskStore};
use concierge_text_processing::IntentExtractor;
use concierge_tools::{MockPmsPos, PmsPosIntegration};

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Settings>,
    pub models: Models,
    pub store: Arc<dyn TaskStore>,
    pub concierge: Arc<Concierge>,
    pub speech: Arc<SpeechPipeline>,
    pub pms_pos: Arc<dyn PmsPosIntegration>,
}

impl AppState {
    /// In-memory task store and the mock PMS/POS
    pub fn new(config: Settings, models: Models) -> Self {
        let latency = Duration::from_millis(config.integrations.latency_ms);
        Self::with_backends(
            config,
            models,
            Arc::new(InMemoryTaskStore::new()),
            Arc::new(MockPmsPos::new(latency)),
        )
    }

    pub fn with_backends(
        config: Settings,
        models: Models,
        store: Arc<dyn TaskStore>,
        pms_pos: Arc<dyn PmsPosIntegration>,
    ) -> Self {
        let llm = &config.models.llm;
        let options = GenerationOptions {
            max_new_tokens: llm.max_new_tokens,
            temperature: llm.temperature,
            ..Default::default()
        };

        let extractor = IntentExtractor::new(models.llm.clone()).with_options(options);
        let concierge = Arc::new(Concierge::new(extractor, store.clone()));
        let speech = Arc::new(SpeechPipeline::new(
            models.stt.clone(),
            models.tts.clone(),
            concierge.clone(),
        ));

        Self {
            config: Arc::new(config),
            models,
            store,
            concierge,
            speech,
            pms_pos,
        }
    }
}
