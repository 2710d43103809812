//! Application state management

use crate::api_client::ApiClient;
use boxdesk_core::Config;

/// Application state holding configuration and clients
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Config,
    /// Client for the record store behind the proxy
    pub api_client: ApiClient,
}

impl AppState {
    /// Create new application state
    pub fn new(config: Config) -> Self {
        let api_client = ApiClient::from_config(&config.api);

        Self { config, api_client }
    }
}
