//! Route definitions for the web interface

use crate::{
    api_client::UI_CONFIG_PATH,
    handlers::{api, pages},
    state::AppState,
};
use axum::{
    Router,
    routing::{get, patch},
};
use std::sync::Arc;

/// Build the complete web application router
pub fn build_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Page routes
        .route("/", get(pages::dashboard))
        // Record store proxy routes
        .route("/api/boxes", get(api::list_boxes))
        .route(UI_CONFIG_PATH, get(api::ui_config))
        .route("/api/update_service_ticket", patch(api::update_service_ticket))
        .route("/api/update_box/:box_id", patch(api::update_box))
        .route("/api/update_service_box", patch(api::update_service_box))
        // Health check
        .route("/health", get(api::health_check))
}
