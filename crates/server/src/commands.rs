//! Voice and text command endpoints

use axum::{
    extract::{
        multipart::MultipartRejection,
        rejection::JsonRejection,
        Multipart, State,
    },
    Json,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

use concierge_core::AudioClip;

use crate::metrics;
use crate::state::AppState;
use crate::ServerError;

/// Multipart field carrying the recording
pub const AUDIO_FIELD: &str = "audio_file";

const INVALID_FILE_TYPE: &str = "Invalid file type. Please upload an audio file.";

#[derive(Debug, Serialize, Deserialize)]
pub struct VoiceCommandResponse {
    pub transcribed_text: String,
    pub llm_response_text: String,
    /// Synthesized reply, base64 encoded
    pub audio_response_b64: String,
}

#[derive(Debug, Deserialize)]
pub struct TextCommandRequest {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TextCommandResponse {
    pub input_text: String,
    pub llm_response_text: String,
}

/// `POST /api/v1/voice_command/`
pub async fn voice_command(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<VoiceCommandResponse>, ServerError> {
    let clip = match read_audio_upload(multipart).await {
        Ok(clip) => clip,
        Err(e) => {
            metrics::record_request("voice_command", "rejected");
            return Err(e);
        },
    };

    tracing::info!(
        content_type = %clip.content_type,
        bytes = clip.len(),
        "Received voice command"
    );

    let reply = state.speech.process(&clip).await.map_err(|e| {
        metrics::record_request("voice_command", "error");
        metrics::record_error("voice_command", "pipeline");
        ServerError::during("voice command processing", e)
    })?;

    metrics::record_stt_latency(reply.timings.stt);
    metrics::record_llm_latency(reply.timings.llm);
    metrics::record_tts_latency(reply.timings.tts);
    metrics::record_total_latency(reply.timings.total);
    if let Some(task) = &reply.task {
        metrics::record_task_created(task.category.as_str());
    }
    metrics::record_request("voice_command", "ok");

    Ok(Json(VoiceCommandResponse {
        transcribed_text: reply.transcript,
        llm_response_text: reply.response_text,
        audio_response_b64: STANDARD.encode(&reply.audio.bytes),
    }))
}

/// Pull the `audio_file` part out of the upload
async fn read_audio_upload(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<AudioClip, ServerError> {
    let mut multipart = multipart?;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ServerError::BadRequest(e.body_text()))?
    {
        if field.name() != Some(AUDIO_FIELD) {
            continue;
        }

        let content_type = field.content_type().unwrap_or_default().to_string();
        if !content_type.starts_with("audio/") {
            return Err(ServerError::BadRequest(INVALID_FILE_TYPE.to_string()));
        }

        let bytes = field
            .bytes()
            .await
            .map_err(|e| ServerError::BadRequest(e.body_text()))?;
        return Ok(AudioClip::new(bytes.to_vec(), content_type));
    }

    Err(ServerError::BadRequest(format!(
        "Missing '{}' field in upload.",
        AUDIO_FIELD
    )))
}

/// `POST /api/v1/text_command/`
pub async fn text_command(
    State(state): State<AppState>,
    payload: Result<Json<TextCommandRequest>, JsonRejection>,
) -> Result<Json<TextCommandResponse>, ServerError> {
    let Json(request) = payload.map_err(|e| {
        metrics::record_request("text_command", "rejected");
        ServerError::from(e)
    })?;
    tracing::info!(text = %request.text, "Received text command");

    let reply = state.concierge.handle_text(&request.text).await.map_err(|e| {
        metrics::record_request("text_command", "error");
        metrics::record_error("text_command", "concierge");
        ServerError::during("text command processing", e)
    })?;

    if let Some(task) = &reply.task {
        metrics::record_task_created(task.category.as_str());
    }
    metrics::record_request("text_command", "ok");

    Ok(Json(TextCommandResponse {
        input_text: request.text,
        llm_response_text: reply.response_text,
    }))
}
