//! Language model trait

use crate::Result;
use async_trait::async_trait;

/// Sampling parameters for a single generation call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationOptions {
    /// Maximum number of new tokens
    pub max_new_tokens: usize,
    /// Sampling temperature
    pub temperature: f32,
    /// Sample instead of greedy decoding
    pub do_sample: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            max_new_tokens: 100,
            temperature: 0.7,
            do_sample: true,
        }
    }
}

/// Free-text generation interface
///
/// Returns the raw completion. Backends that echo the prompt return it
/// echoed; callers strip it.
#[async_trait]
pub trait LanguageModel: Send + Sync + 'static {
    async fn generate(&self, prompt: &str, options: &GenerationOptions) -> Result<String>;

    /// Whether the backend can currently serve requests
    async fn is_available(&self) -> bool {
        true
    }

    /// Get model name for logging
    fn model_name(&self) -> &str;
}
