//! Proxy handlers forwarding to the record store

use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use boxdesk_core::UiConfig;
use boxdesk_sync::{RecordStore, SyncResult};
use boxdesk_types::{AssigneeUpdate, BoxId, BoxStatusUpdate, TicketUpdate};
use std::sync::Arc;
use tracing::{error, info};

/// Box snapshot - proxies `GET /boxes`
///
/// Failures answer 502 with an object body, which clients reject as a
/// snapshot because it is not an array.
pub async fn list_boxes(State(state): State<Arc<AppState>>) -> Response {
    match state.api_client.fetch_boxes().await {
        Ok(boxes) => {
            info!(boxes = boxes.len(), "served box snapshot");
            Json(boxes).into_response()
        }
        Err(e) => {
            error!("Failed to fetch boxes from record store: {}", e);
            (
                StatusCode::BAD_GATEWAY,
                Json(serde_json::json!({
                    "error": "Failed to fetch boxes",
                    "message": e.to_string(),
                    "boxes": []
                })),
            )
                .into_response()
        }
    }
}

/// Dashboard settings for the browser bundle
pub async fn ui_config(State(state): State<Arc<AppState>>) -> Json<UiConfig> {
    Json(state.config.ui.clone())
}

/// Device ticket update - proxies `PATCH /update_service_ticket`
pub async fn update_service_ticket(
    State(state): State<Arc<AppState>>,
    Json(update): Json<TicketUpdate>,
) -> Response {
    settle("ticket", state.api_client.update_ticket(&update).await)
}

/// Box status update - proxies `PATCH /update_box/{boxId}`
pub async fn update_box(
    State(state): State<Arc<AppState>>,
    Path(box_id): Path<String>,
    Json(update): Json<BoxStatusUpdate>,
) -> Response {
    let box_id = BoxId::from(box_id);
    let result = state.api_client.update_box_status(&box_id, &update).await;
    settle("box status", result)
}

/// Technician assignment - proxies `PATCH /update_service_box`
pub async fn update_service_box(
    State(state): State<Arc<AppState>>,
    Json(update): Json<AssigneeUpdate>,
) -> Response {
    let result = state.api_client.update_box_assignee(&update).await;
    settle("assignee", result)
}

fn settle(what: &str, result: SyncResult<()>) -> Response {
    match result {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            error!("Failed to update {}: {}", what, e);
            (
                StatusCode::BAD_GATEWAY,
                Json(serde_json::json!({
                    "error": format!("Failed to update {what}"),
                    "message": e.to_string()
                })),
            )
                .into_response()
        }
    }
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "OK"
}
