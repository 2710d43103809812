//! HTTP client for the record store
//!
//! The same client runs natively (behind the host server's proxy) and in the
//! browser, where reqwest uses `fetch`.

use async_trait::async_trait;
use boxdesk_core::{ApiConfig, UiConfig};
use boxdesk_sync::{RecordStore, SyncError, SyncResult, endpoints};
use boxdesk_types::{AssigneeUpdate, BoxId, BoxRecord, BoxStatusUpdate, TicketUpdate};
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

/// Host server route serving the `ui` configuration section
pub const UI_CONFIG_PATH: &str = "/api/ui-config";

/// API client for the records and tickets endpoints
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    records_url: String,
    tickets_url: String,
}

impl ApiClient {
    /// Create a client serving records and tickets from one base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self::with_urls(base_url.clone(), base_url)
    }

    /// Create a client with separate records and tickets base URLs
    pub fn with_urls(records_url: impl Into<String>, tickets_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            records_url: trim_base(records_url.into()),
            tickets_url: trim_base(tickets_url.into()),
        }
    }

    /// Create a client from the `api` configuration section
    pub fn from_config(config: &ApiConfig) -> Self {
        Self::with_urls(config.records_url.clone(), config.tickets_url.clone())
    }

    /// Base URL of `GET /boxes`
    pub fn records_url(&self) -> &str {
        &self.records_url
    }

    /// Base URL of the update endpoints
    pub fn tickets_url(&self) -> &str {
        &self.tickets_url
    }

    /// Fetch the dashboard settings published by the host server at `url`
    pub async fn fetch_ui_config(&self, url: &str) -> SyncResult<UiConfig> {
        debug!(%url, "fetching ui config");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SyncError::transport(UI_CONFIG_PATH, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SyncError::rejected(UI_CONFIG_PATH, status.as_u16()));
        }

        response
            .json()
            .await
            .map_err(|e| SyncError::malformed(UI_CONFIG_PATH, e))
    }

    async fn patch<B>(&self, path: &str, body: &B) -> SyncResult<()>
    where
        B: Serialize + Sync + ?Sized,
    {
        let url = format!("{}{path}", self.tickets_url);
        debug!(%url, "sending update");

        let response = self
            .client
            .patch(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| SyncError::transport(path, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SyncError::rejected(path, status.as_u16()));
        }
        Ok(())
    }
}

fn trim_base(url: String) -> String {
    match url.strip_suffix('/') {
        Some(trimmed) => trimmed.to_string(),
        None => url,
    }
}

/// Classify a `GET /boxes` body
///
/// Anything but a JSON array is a shape error, even when it parses.
pub fn parse_boxes(body: &str) -> SyncResult<Vec<BoxRecord>> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| SyncError::malformed(endpoints::BOXES, e))?;

    if !value.is_array() {
        return Err(SyncError::unexpected_shape(endpoints::BOXES, "a JSON array of boxes"));
    }

    serde_json::from_value(value).map_err(|e| {
        SyncError::unexpected_shape(endpoints::BOXES, format!("an array of boxes ({e})"))
    })
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl RecordStore for ApiClient {
    async fn fetch_boxes(&self) -> SyncResult<Vec<BoxRecord>> {
        let url = format!("{}{}", self.records_url, endpoints::BOXES);
        debug!(%url, "fetching boxes");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SyncError::transport(endpoints::BOXES, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SyncError::rejected(endpoints::BOXES, status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SyncError::transport(endpoints::BOXES, e))?;
        parse_boxes(&body)
    }

    async fn update_ticket(&self, update: &TicketUpdate) -> SyncResult<()> {
        self.patch(endpoints::SERVICE_TICKET, update).await
    }

    async fn update_box_status(&self, box_id: &BoxId, update: &BoxStatusUpdate) -> SyncResult<()> {
        let path = endpoints::box_status(box_id.as_str());
        self.patch(&path, update).await
    }

    async fn update_box_assignee(&self, update: &AssigneeUpdate) -> SyncResult<()> {
        self.patch(endpoints::SERVICE_BOX, update).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_base_urls_are_trimmed() {
        let client = ApiClient::with_urls("http://records:8000/", "http://tickets:8500");
        assert_eq!(client.records_url(), "http://records:8000");
        assert_eq!(client.tickets_url(), "http://tickets:8500");

        let client = ApiClient::from_config(&ApiConfig::default());
        assert_eq!(client.records_url(), "http://127.0.0.1:8000");
    }

    #[test]
    fn test_parse_boxes_classification() {
        assert_eq!(parse_boxes("[]").unwrap(), vec![]);

        let boxes = parse_boxes(r#"[{"id": 1, "boxNumber": 12, "status": "New"}]"#).unwrap();
        assert_eq!(boxes[0].box_number, "12");

        assert!(matches!(
            parse_boxes("<html>"),
            Err(SyncError::MalformedBody { .. })
        ));
        assert!(matches!(
            parse_boxes(r#"{"error": "boom", "boxes": []}"#),
            Err(SyncError::UnexpectedShape { .. })
        ));
        assert!(matches!(
            parse_boxes(r#"[{"boxNumber": 12}]"#),
            Err(SyncError::UnexpectedShape { .. })
        ));
    }
}
