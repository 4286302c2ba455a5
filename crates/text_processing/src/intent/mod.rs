//! Intent extraction for guest requests
//!
//! Maps free text to a spoken reply and, for requests that need staff action,
//! a task draft. Known request types are recognized by the ordered keyword
//! rules in [`rules`]; anything else is answered by the language model with no
//! task.
//!
//! # Example
//!
//! ```ignore
//! let extractor = IntentExtractor::new(llm);
//! let extraction = extractor.extract("Can I get fresh towels for room 204").await;
//!
//! assert_eq!(extraction.draft.unwrap().room_number.as_deref(), Some("204"));
//! ```

pub mod rules;

use std::sync::Arc;

use concierge_core::{GenerationOptions, LanguageModel, TaskDraft};

use crate::slot_extraction::extract_room_number;
pub use rules::{default_rules, IntentRule, RuleContext};

/// Reply used when generation fails
pub const APOLOGY: &str = "I apologize, I'm having trouble understanding that request right now.";

/// Where a reply came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionSource {
    /// A keyword rule, by name
    Rule(&'static str),
    /// Language model output
    Generated,
    /// Generation failed
    Fallback,
}

impl ExtractionSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rule(name) => name,
            Self::Generated => "generated",
            Self::Fallback => "fallback",
        }
    }
}

/// Reply text plus an optional task to create
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    pub response: String,
    pub draft: Option<TaskDraft>,
    pub source: ExtractionSource,
}

impl Extraction {
    pub(crate) fn with_task(response: String, draft: TaskDraft) -> Self {
        Self {
            response,
            draft: Some(draft),
            source: ExtractionSource::Generated,
        }
    }

    pub(crate) fn reply(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            draft: None,
            source: ExtractionSource::Generated,
        }
    }

    fn tagged(mut self, rule: &IntentRule) -> Self {
        self.source = ExtractionSource::Rule(rule.name);
        self
    }

    fn apology() -> Self {
        Self {
            response: APOLOGY.to_string(),
            draft: None,
            source: ExtractionSource::Fallback,
        }
    }
}

/// Instruction-style prompt for the generation fallback
pub fn build_prompt(text: &str) -> String {
    format!("### Instruction:\n{}\n\n### Response:\n", text)
}

/// Keyword-rule intent extractor with a language-model fallback
pub struct IntentExtractor {
    rules: Vec<IntentRule>,
    llm: Arc<dyn LanguageModel>,
    options: GenerationOptions,
}

impl IntentExtractor {
    pub fn new(llm: Arc<dyn LanguageModel>) -> Self {
        Self::with_rules(llm, default_rules())
    }

    pub fn with_rules(llm: Arc<dyn LanguageModel>, rules: Vec<IntentRule>) -> Self {
        Self {
            rules,
            llm,
            options: GenerationOptions::default(),
        }
    }

    pub fn with_options(mut self, options: GenerationOptions) -> Self {
        self.options = options;
        self
    }

    pub fn rules(&self) -> &[IntentRule] {
        &self.rules
    }

    /// Evaluate the keyword rules only
    pub fn match_rules(&self, text: &str) -> Option<Extraction> {
        let lowered = text.to_lowercase();
        let room_number = extract_room_number(&lowered);
        let ctx = RuleContext {
            original: text,
            lowered: &lowered,
            room_number: room_number.as_deref(),
        };

        self.rules
            .iter()
            .find(|rule| rule.matches(&lowered))
            .map(|rule| rule.apply(&ctx).tagged(rule))
    }

    /// Produce a reply and optional task draft. Never fails.
    pub async fn extract(&self, text: &str) -> Extraction {
        let extraction = match self.match_rules(text) {
            Some(extraction) => extraction,
            None => self.generate(text).await,
        };

        tracing::info!(
            source = extraction.source.as_str(),
            has_task = extraction.draft.is_some(),
            "Intent extracted"
        );

        extraction
    }

    async fn generate(&self, text: &str) -> Extraction {
        let prompt = build_prompt(text);

        match self.llm.generate(&prompt, &self.options).await {
            Ok(output) => {
                let response = output.replace(&prompt, "").trim().to_string();
                tracing::debug!(response = %response, "Generated reply");
                Extraction::reply(response)
            },
            Err(e) => {
                tracing::error!(error = %e, model = self.llm.model_name(), "Generation failed");
                Extraction::apology()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use concierge_core::{Error, Result, TaskCategory, TaskPriority};
    use parking_lot::Mutex;

    /// Echoes the prompt back before its reply, as text-generation pipelines do
    struct EchoModel {
        reply: String,
        prompts: Mutex<Vec<String>>,
    }

    impl EchoModel {
        fn new(reply: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: reply.to_string(),
                prompts: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl LanguageModel for EchoModel {
        async fn generate(&self, prompt: &str, _options: &GenerationOptions) -> Result<String> {
            self.prompts.lock().push(prompt.to_string());
            Ok(format!("{}{}", prompt, self.reply))
        }

        fn model_name(&self) -> &str {
            "echo"
        }
    }

    struct FailingModel;

    #[async_trait]
    impl LanguageModel for FailingModel {
        async fn generate(&self, _prompt: &str, _options: &GenerationOptions) -> Result<String> {
            Err(Error::Llm("model offline".to_string()))
        }

        fn model_name(&self) -> &str {
            "failing"
        }
    }

    fn extractor() -> IntentExtractor {
        IntentExtractor::new(Arc::new(FailingModel))
    }

    #[tokio::test]
    async fn test_towels_for_room() {
        let out = extractor().extract("Can I get fresh towels for room 204").await;
        let draft = out.draft.expect("housekeeping draft");

        assert_eq!(draft.category, TaskCategory::Housekeeping);
        assert_eq!(draft.priority, TaskPriority::Medium);
        assert_eq!(draft.room_number.as_deref(), Some("204"));
        assert_eq!(draft.guest_request, "Can I get fresh towels for room 204");
        assert_eq!(
            out.response,
            "Certainly, I'll send fresh towels to room 204. Is there anything else?"
        );
        assert_eq!(out.source, ExtractionSource::Rule("housekeeping"));
    }

    #[tokio::test]
    async fn test_urgent_maintenance() {
        let out = extractor().extract("The AC is broken in room 12, it's urgent").await;
        let draft = out.draft.expect("maintenance draft");

        assert_eq!(draft.category, TaskCategory::Maintenance);
        assert_eq!(draft.priority, TaskPriority::High);
        assert_eq!(draft.room_number.as_deref(), Some("12"));
    }

    #[tokio::test]
    async fn test_maintenance_without_room() {
        let out = extractor().extract("Can someone fix the shower").await;
        let draft = out.draft.unwrap();

        assert_eq!(draft.priority, TaskPriority::Medium);
        assert!(draft.room_number.is_none());
        assert_eq!(
            out.response,
            "I've noted a maintenance request for room your room. Could you describe the issue briefly?"
        );
    }

    #[tokio::test]
    async fn test_first_match_wins() {
        // Both housekeeping and maintenance triggers; housekeeping is checked first
        let out = extractor().extract("The towel rack is broken in rm 3").await;
        assert_eq!(out.draft.unwrap().category, TaskCategory::Housekeeping);
    }

    #[tokio::test]
    async fn test_room_service() {
        let out = extractor().extract("I'd like some Room Service in room 310").await;
        let draft = out.draft.unwrap();
        assert_eq!(draft.category, TaskCategory::RoomService);
        assert_eq!(draft.room_number.as_deref(), Some("310"));
    }

    #[tokio::test]
    async fn test_spa_and_hotsos_have_no_draft() {
        let spa = extractor().extract("I want a spa appointment tomorrow").await;
        assert!(spa.draft.is_none());
        assert!(spa.response.starts_with("Certainly, I can help with a spa booking."));

        let hotsos = extractor().extract("please create task for the lobby").await;
        assert!(hotsos.draft.is_none());
        assert_eq!(hotsos.response, "I can create a HotSOS task. Please describe the task.");
    }

    #[tokio::test]
    async fn test_generation_fallback_strips_prompt() {
        let model = EchoModel::new("  The pool opens at 7am.  ");
        let extractor = IntentExtractor::new(model.clone());

        let out = extractor.extract("When does the pool open?").await;

        assert!(out.draft.is_none());
        assert_eq!(out.response, "The pool opens at 7am.");
        assert_eq!(out.source, ExtractionSource::Generated);
        assert_eq!(
            model.prompts.lock().as_slice(),
            &["### Instruction:\nWhen does the pool open?\n\n### Response:\n".to_string()]
        );
    }

    #[tokio::test]
    async fn test_generation_failure_apologizes() {
        let out = extractor().extract("What's the wifi password?").await;

        assert!(out.draft.is_none());
        assert_eq!(out.response, APOLOGY);
        assert_eq!(out.source, ExtractionSource::Fallback);
    }

    #[tokio::test]
    async fn test_rules_skip_model() {
        let model = EchoModel::new("unused");
        let extractor = IntentExtractor::new(model.clone());
        extractor.extract("more linens please").await;
        assert!(model.prompts.lock().is_empty());
    }
}
