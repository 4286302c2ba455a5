//! Prometheus metrics
//!
//! Counters and latency histograms recorded through the `metrics` facade and
//! rendered by the Prometheus exporter at `/metrics`.

use std::time::Duration;

use axum::{http::StatusCode, response::IntoResponse};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;

static HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();

/// Install the global Prometheus recorder
///
/// Safe to call more than once; later calls return the installed handle.
pub fn init_metrics() -> Option<PrometheusHandle> {
    HANDLE
        .get_or_try_init(|| PrometheusBuilder::new().install_recorder())
        .map(Clone::clone)
        .map_err(|e| tracing::warn!(error = %e, "Failed to install Prometheus recorder"))
        .ok()
}

/// `GET /metrics`
pub async fn metrics_handler() -> impl IntoResponse {
    match HANDLE.get() {
        Some(handle) => (StatusCode::OK, handle.render()),
        None => (
            StatusCode::SERVICE_UNAVAILABLE,
            "metrics recorder not installed".to_string(),
        ),
    }
}

pub fn record_request(endpoint: &'static str, outcome: &'static str) {
    metrics::counter!("concierge_requests_total", "endpoint" => endpoint, "outcome" => outcome)
        .increment(1);
}

pub fn record_error(endpoint: &'static str, kind: &'static str) {
    metrics::counter!("concierge_errors_total", "endpoint" => endpoint, "kind" => kind)
        .increment(1);
}

pub fn record_stt_latency(elapsed: Duration) {
    metrics::histogram!("concierge_stt_latency_seconds").record(elapsed.as_secs_f64());
}

pub fn record_llm_latency(elapsed: Duration) {
    metrics::histogram!("concierge_llm_latency_seconds").record(elapsed.as_secs_f64());
}

pub fn record_tts_latency(elapsed: Duration) {
    metrics::histogram!("concierge_tts_latency_seconds").record(elapsed.as_secs_f64());
}

pub fn record_total_latency(elapsed: Duration) {
    metrics::histogram!("concierge_voice_latency_seconds").record(elapsed.as_secs_f64());
}

pub fn record_task_created(category: &str) {
    metrics::counter!("concierge_tasks_created_total", "category" => category.to_string())
        .increment(1);
}
