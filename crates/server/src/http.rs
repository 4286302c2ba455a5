//! HTTP Endpoints
//!
//! Router, CORS policy and the service-level routes (root, health,
//! readiness, metrics). Feature handlers live in `commands`, `dashboard` and
//! `integrations`.

use std::time::Duration;

use axum::{
    extract::State,
    http::{HeaderValue, StatusCode},
    routing::{get, post},
    Json, Router,
};
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::commands::{text_command, voice_command};
use crate::dashboard::{get_task, list_staff, list_tasks, update_task};
use crate::integrations::{book_spa_slot, create_hotsos_task};
use crate::metrics::metrics_handler;
use crate::state::AppState;
use crate::ServerError;

/// Prefix shared by every API route
pub const API_PREFIX: &str = "/api/v1";

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let cors_layer = build_cors_layer(&state.config.server.cors_origins);
    let timeout = Duration::from_secs(state.config.server.timeout_seconds);

    let api = Router::new()
        .route("/voice_command/", post(voice_command))
        .route("/text_command/", post(text_command))
        .route("/book_spa_slot/", post(book_spa_slot))
        .route("/create_hotsos_task/", post(create_hotsos_task))
        .route("/tasks/", get(list_tasks))
        .route("/tasks/:task_id", get(get_task).put(update_task))
        .route("/staff/", get(list_staff));

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .route("/metrics", get(metrics_handler))
        .nest(API_PREFIX, api)
        .layer(TimeoutLayer::new(timeout))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(state)
}

/// Allow-list of origins with credentials
///
/// Methods and headers mirror the preflight request; a wildcard is not
/// permitted alongside credentials.
fn build_cors_layer(origins: &[String]) -> CorsLayer {
    let parsed_origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| {
            origin.parse::<HeaderValue>().ok().or_else(|| {
                tracing::warn!("Invalid CORS origin: {}", origin);
                None
            })
        })
        .collect();

    tracing::info!("CORS configured with {} origins", parsed_origins.len());
    CorsLayer::new()
        .allow_origin(parsed_origins)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// `GET /`
async fn root(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": format!("{} is running!", state.config.app.name),
    }))
}

/// Liveness plus a task store check
async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<serde_json::Value>) {
    let (store_check, healthy) = match state.store.count().await {
        Ok(count) => (serde_json::json!({ "status": "ok", "tasks": count }), true),
        Err(e) => (
            serde_json::json!({ "status": "error", "error": e.to_string() }),
            false,
        ),
    };

    let status_code = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status_code,
        Json(serde_json::json!({
            "status": if healthy { "healthy" } else { "degraded" },
            "version": state.config.app.version,
            "checks": {
                "task_store": store_check,
                "models": {
                    "stt": state.models.stt.model_name(),
                    "llm": state.models.llm.model_name(),
                    "tts": state.models.tts.model_name(),
                },
            },
        })),
    )
}

/// Readiness: every model backend answers its probe
async fn readiness_check(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ServerError> {
    state
        .models
        .ensure_available()
        .await
        .map_err(|e| ServerError::Unavailable(e.to_string()))?;

    Ok(Json(serde_json::json!({ "status": "ready" })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_skips_invalid_origins() {
        let origins = vec![
            "http://localhost:5173".to_string(),
            "not a\nheader".to_string(),
        ];
        let _ = build_cors_layer(&origins);
    }
}
