//! Backend traits for the model stages
//!
//! The concierge treats its pretrained models as opaque functions:
//!
//! ```text
//! SpeechToText:  audio -> transcript
//! LanguageModel: prompt -> generated text
//! TextToSpeech:  text -> audio
//! ```
//!
//! Every stage is a trait object so backends can be swapped by configuration
//! and replaced with mocks in tests.

mod llm;
mod speech;

pub use llm::{GenerationOptions, LanguageModel};
pub use speech::{SpeechToText, TextToSpeech};
