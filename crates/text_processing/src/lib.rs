//! Text processing for guest requests
//!
//! This crate provides:
//! - **Slot Extraction**: room numbers mentioned in an utterance
//! - **Intent Extraction**: ordered keyword rules that turn a request into a
//!   reply and an optional task draft, with a language-model fallback

pub mod intent;
pub mod slot_extraction;

pub use intent::{
    build_prompt, default_rules, Extraction, ExtractionSource, IntentExtractor, IntentRule,
    RuleContext, APOLOGY,
};
pub use slot_extraction::{extract_room_number, UNKNOWN_ROOM};
