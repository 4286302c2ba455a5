//! Concierge HTTP server
//!
//! Exposes the voice and text command endpoints, the mock PMS/POS endpoints
//! and the operations dashboard (tasks, staff) over a JSON API.

pub mod commands;
pub mod dashboard;
pub mod http;
pub mod integrations;
pub mod metrics;
pub mod state;

pub use http::create_router;
pub use metrics::{
    init_metrics, record_error, record_llm_latency, record_request, record_stt_latency,
    record_task_created, record_total_latency, record_tts_latency,
};
pub use state::AppState;

use axum::{
    extract::{multipart::MultipartRejection, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Server errors, rendered as `{"detail": ...}`
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Internal(String),

    #[error("{0}")]
    Unavailable(String),
}

impl ServerError {
    /// Catch-all failure while carrying out `operation`
    pub fn internal(operation: &str, cause: impl std::fmt::Display) -> Self {
        ServerError::Internal(format!(
            "An internal server error occurred during {}: {}",
            operation, cause
        ))
    }

    /// Map a core error raised while carrying out `operation`
    ///
    /// Not-found and bad-input keep their own status; anything else becomes
    /// the catch-all internal failure.
    pub fn during(operation: &str, err: concierge_core::Error) -> Self {
        match err {
            client @ (concierge_core::Error::NotFound(_)
            | concierge_core::Error::InvalidInput(_)) => client.into(),
            other => Self::internal(operation, other),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::NotFound(_) => StatusCode::NOT_FOUND,
            ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ServerError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "Request failed");
        }
        (status, Json(serde_json::json!({ "detail": self.to_string() }))).into_response()
    }
}

impl From<concierge_core::Error> for ServerError {
    fn from(err: concierge_core::Error) -> Self {
        match err {
            concierge_core::Error::NotFound(msg) => ServerError::NotFound(msg),
            concierge_core::Error::InvalidInput(msg) => ServerError::BadRequest(msg),
            other => ServerError::Internal(other.to_string()),
        }
    }
}

impl From<JsonRejection> for ServerError {
    fn from(rejection: JsonRejection) -> Self {
        ServerError::BadRequest(rejection.body_text())
    }
}

impl From<MultipartRejection> for ServerError {
    fn from(rejection: MultipartRejection) -> Self {
        ServerError::BadRequest(rejection.body_text())
    }
}
