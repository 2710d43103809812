//! Web server setup and configuration

use crate::{routes::build_routes, state::AppState};
use axum::Router;
use boxdesk_core::Config;
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};

/// Build the complete web application with all routes and state
pub fn build_app(config: Config) -> Router {
    let assets = ServeDir::new(&config.server.assets_dir);
    let state = Arc::new(AppState::new(config));

    build_routes()
        .nest_service("/pkg", assets)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
