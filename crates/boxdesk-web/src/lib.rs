//! Boxdesk web interface
//!
//! Leptos components for the technician dashboard, the HTTP record store
//! client, and (outside the browser) the axum host server that serves the
//! shell page and proxies the record store.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]
#![allow(clippy::must_use_candidate, clippy::needless_pass_by_value)]

pub mod api_client;
pub mod app;
pub mod components;
pub mod edits;
pub mod pages;

#[cfg(not(target_arch = "wasm32"))]
pub mod handlers;
#[cfg(not(target_arch = "wasm32"))]
pub mod routes;
#[cfg(not(target_arch = "wasm32"))]
pub mod server;
#[cfg(not(target_arch = "wasm32"))]
pub mod state;

// Re-export the main entry points
pub use api_client::ApiClient;
pub use app::App;
#[cfg(not(target_arch = "wasm32"))]
pub use server::build_app;
#[cfg(not(target_arch = "wasm32"))]
pub use state::AppState;
