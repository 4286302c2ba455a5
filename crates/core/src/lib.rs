//! Core traits and types for the hotel concierge
//!
//! This crate provides foundational types used across all other crates:
//! - Task and staff records for the operations dashboard
//! - Audio payload type
//! - Backend traits for STT, LLM and TTS
//! - Error types

pub mod audio;
pub mod error;
pub mod task;
pub mod traits;

pub use audio::{AudioClip, DEFAULT_CONTENT_TYPE, WAV_CONTENT_TYPE};
pub use error::{Error, Result};
pub use task::{
    StaffMember, Task, TaskCategory, TaskDraft, TaskPriority, TaskStatus, TaskUpdate,
};
pub use traits::{GenerationOptions, LanguageModel, SpeechToText, TextToSpeech};
