//! Mock PMS/POS endpoints

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};

use concierge_tools::{HotSosTicket, SpaBooking};

use crate::metrics;
use crate::state::AppState;
use crate::ServerError;

/// Confirmation returned by the external systems
#[derive(Debug, Serialize, Deserialize)]
pub struct ConfirmationResponse {
    pub status: String,
    pub message: String,
}

impl ConfirmationResponse {
    fn success(message: String) -> Self {
        Self {
            status: "success".to_string(),
            message,
        }
    }
}

/// `POST /api/v1/book_spa_slot/`
pub async fn book_spa_slot(
    State(state): State<AppState>,
    payload: Result<Json<SpaBooking>, JsonRejection>,
) -> Result<Json<ConfirmationResponse>, ServerError> {
    let Json(booking) = payload?;
    let message = state.pms_pos.book_spa_slot(&booking).await.map_err(|e| {
        metrics::record_error("book_spa_slot", "integration");
        ServerError::during("spa slot booking", e.into())
    })?;
    metrics::record_request("book_spa_slot", "ok");
    Ok(Json(ConfirmationResponse::success(message)))
}

/// `POST /api/v1/create_hotsos_task/`
pub async fn create_hotsos_task(
    State(state): State<AppState>,
    payload: Result<Json<HotSosTicket>, JsonRejection>,
) -> Result<Json<ConfirmationResponse>, ServerError> {
    let Json(ticket) = payload?;
    let message = state.pms_pos.create_hotsos_task(&ticket).await.map_err(|e| {
        metrics::record_error("create_hotsos_task", "integration");
        ServerError::during("HotSOS task creation", e.into())
    })?;
    metrics::record_request("create_hotsos_task", "ok");
    Ok(Json(ConfirmationResponse::success(message)))
}
