//! Voice command pipeline
//!
//! ```text
//! audio ──▶ STT ──▶ Concierge (intent + task) ──▶ TTS ──▶ audio
//! ```
//!
//! Stages run in order within the request. Any stage failure aborts the whole
//! command; a task stored before a later stage fails stays stored.

use std::sync::Arc;
use std::time::{Duration, Instant};

use concierge_core::{AudioClip, Result, SpeechToText, Task, TextToSpeech};

use crate::concierge::Concierge;

/// Wall-clock time spent in each stage
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StageTimings {
    pub stt: Duration,
    /// Intent extraction, generation and task creation
    pub llm: Duration,
    pub tts: Duration,
    pub total: Duration,
}

/// Result of a voice command
#[derive(Debug, Clone)]
pub struct VoiceReply {
    pub transcript: String,
    pub response_text: String,
    pub audio: AudioClip,
    pub task: Option<Task>,
    pub timings: StageTimings,
}

/// STT → concierge → TTS
pub struct SpeechPipeline {
    stt: Arc<dyn SpeechToText>,
    tts: Arc<dyn TextToSpeech>,
    concierge: Arc<Concierge>,
}

impl SpeechPipeline {
    pub fn new(
        stt: Arc<dyn SpeechToText>,
        tts: Arc<dyn TextToSpeech>,
        concierge: Arc<Concierge>,
    ) -> Self {
        Self {
            stt,
            tts,
            concierge,
        }
    }

    pub async fn process(&self, clip: &AudioClip) -> Result<VoiceReply> {
        let start = Instant::now();
        let mut timings = StageTimings::default();

        let stage = Instant::now();
        let transcript = self.stt.transcribe(clip).await.map_err(|e| {
            tracing::error!(error = %e, content_type = %clip.content_type, "Transcription failed");
            e
        })?;
        timings.stt = stage.elapsed();
        tracing::info!(transcript = %transcript, "Transcribed voice command");

        let stage = Instant::now();
        let reply = self.concierge.handle_text(&transcript).await?;
        timings.llm = stage.elapsed();

        let stage = Instant::now();
        let audio = self.tts.synthesize(&reply.response_text).await.map_err(|e| {
            tracing::error!(error = %e, "Speech synthesis failed");
            e
        })?;
        timings.tts = stage.elapsed();
        timings.total = start.elapsed();

        tracing::info!(
            stt_ms = timings.stt.as_millis() as u64,
            llm_ms = timings.llm.as_millis() as u64,
            tts_ms = timings.tts.as_millis() as u64,
            total_ms = timings.total.as_millis() as u64,
            task_created = reply.task.is_some(),
            "Voice command processed"
        );

        Ok(VoiceReply {
            transcript,
            response_text: reply.response_text,
            audio,
            task: reply.task,
            timings,
        })
    }
}
