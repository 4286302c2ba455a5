//! Text command handling
//!
//! A guest utterance becomes a reply and, when it needs staff action, a stored
//! task on the dashboard.

use std::sync::Arc;

use concierge_core::{Result, Task};
use concierge_persistence::TaskStore;
use concierge_text_processing::{ExtractionSource, IntentExtractor};

/// Reply to a text command
#[derive(Debug, Clone)]
pub struct TextReply {
    pub response_text: String,
    /// Task created for the request, if any
    pub task: Option<Task>,
    pub source: ExtractionSource,
}

/// Intent extraction plus task creation
pub struct Concierge {
    extractor: IntentExtractor,
    store: Arc<dyn TaskStore>,
}

impl Concierge {
    pub fn new(extractor: IntentExtractor, store: Arc<dyn TaskStore>) -> Self {
        Self { extractor, store }
    }

    pub fn store(&self) -> &Arc<dyn TaskStore> {
        &self.store
    }

    /// Answer `text`, storing a task when the request calls for one
    pub async fn handle_text(&self, text: &str) -> Result<TextReply> {
        let extraction = self.extractor.extract(text).await;

        let task = match extraction.draft {
            Some(draft) => {
                let task = self.store.create(draft).await?;
                tracing::info!(task_id = %task.id, category = %task.category, "Task created from request");
                Some(task)
            },
            None => None,
        };

        Ok(TextReply {
            response_text: extraction.response,
            task,
            source: extraction.source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use concierge_core::{Error, GenerationOptions, LanguageModel, TaskCategory, TaskStatus};
    use concierge_persistence::InMemoryTaskStore;

    struct Offline;

    #[async_trait]
    impl LanguageModel for Offline {
        async fn generate(&self, _prompt: &str, _options: &GenerationOptions) -> Result<String> {
            Err(Error::Llm("offline".to_string()))
        }
        fn model_name(&self) -> &str {
            "offline"
        }
    }

    fn concierge() -> Concierge {
        Concierge::new(
            IntentExtractor::new(Arc::new(Offline)),
            Arc::new(InMemoryTaskStore::new()),
        )
    }

    #[tokio::test]
    async fn test_request_creates_task() {
        let concierge = concierge();
        let reply = concierge.handle_text("Can I get fresh towels for room 204").await.unwrap();

        let task = reply.task.expect("task stored");
        assert_eq!(task.status, TaskStatus::Pending);
        assert_eq!(task.category, TaskCategory::Housekeeping);

        let stored = concierge.store().get(&task.id).await.unwrap();
        assert_eq!(stored, Some(task));
    }

    #[tokio::test]
    async fn test_smalltalk_creates_nothing() {
        let concierge = concierge();
        let reply = concierge.handle_text("hello there").await.unwrap();

        assert!(reply.task.is_none());
        assert_eq!(reply.source, ExtractionSource::Fallback);
        assert_eq!(concierge.store().count().await.unwrap(), 0);
    }
}
