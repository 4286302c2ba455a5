//! Language Model adapter
//!
//! Bridges the LlmBackend trait to the core LanguageModel trait,
//! allowing LLM backends to be used where LanguageModel is expected.

use std::sync::Arc;

use async_trait::async_trait;
use concierge_core::{GenerationOptions, LanguageModel, Result};

use crate::backend::LlmBackend;

/// Adapter that wraps an LlmBackend to implement the core LanguageModel trait.
///
/// ```ignore
/// let backend = OllamaBackend::new(config)?;
/// let llm: Arc<dyn LanguageModel> = Arc::new(LanguageModelAdapter::new(backend));
/// ```
pub struct LanguageModelAdapter {
    backend: Arc<dyn LlmBackend>,
    model_name: String,
}

impl LanguageModelAdapter {
    pub fn new<B: LlmBackend + 'static>(backend: B) -> Self {
        let model_name = backend.model_name().to_string();
        Self {
            backend: Arc::new(backend),
            model_name,
        }
    }
}

#[async_trait]
impl LanguageModel for LanguageModelAdapter {
    async fn generate(&self, prompt: &str, options: &GenerationOptions) -> Result<String> {
        let result = self.backend.generate(prompt, options).await?;
        Ok(result.text)
    }

    async fn is_available(&self) -> bool {
        self.backend.is_available().await
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{FinishReason, GenerationResult};
    use crate::LlmError;
    use concierge_core::Error;

    struct FixedBackend {
        reply: Option<&'static str>,
    }

    #[async_trait]
    impl LlmBackend for FixedBackend {
        async fn generate(
            &self,
            _prompt: &str,
            _options: &GenerationOptions,
        ) -> std::result::Result<GenerationResult, LlmError> {
            match self.reply {
                Some(text) => Ok(GenerationResult {
                    text: text.to_string(),
                    tokens: 3,
                    total_time_ms: 1,
                    finish_reason: FinishReason::Stop,
                }),
                None => Err(LlmError::ModelNotFound("mistral".to_string())),
            }
        }

        async fn is_available(&self) -> bool {
            self.reply.is_some()
        }

        fn model_name(&self) -> &str {
            "fixed"
        }
    }

    #[tokio::test]
    async fn test_adapter_passes_text() {
        let adapter = LanguageModelAdapter::new(FixedBackend { reply: Some("Good evening") });
        let text = adapter.generate("hi", &GenerationOptions::default()).await.unwrap();

        assert_eq!(text, "Good evening");
        assert_eq!(adapter.model_name(), "fixed");
        assert!(adapter.is_available().await);
    }

    #[tokio::test]
    async fn test_adapter_maps_errors() {
        let adapter = LanguageModelAdapter::new(FixedBackend { reply: None });
        let err = adapter.generate("hi", &GenerationOptions::default()).await.unwrap_err();

        assert!(matches!(err, Error::ModelUnavailable(_)));
        assert!(!adapter.is_available().await);
    }
}
