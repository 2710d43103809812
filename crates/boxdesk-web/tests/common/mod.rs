//! Shared helpers for the web integration tests

#![allow(dead_code)]

use serde_json::{Value, json};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize test logging
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init();
    });
}

/// Snapshot as the record store serves it, using the legacy field names
pub fn snapshot_json() -> Value {
    json!([
        {
            "id": "b-1",
            "boxNumber": 12,
            "deviceType": "Speaker",
            "status": "New",
            "assignedTechnician": null,
            "salesforceId": "SF-BOX-1",
            "devices": [
                {
                    "id": "d-1",
                    "serialNumber": "SN-001",
                    "warrantyUntil": "2026-05-01",
                    "customerReportedIssue": "No sound",
                    "status": "New",
                    "salesforceId": "T-1"
                },
                {
                    "id": "d-2",
                    "serialNumber": "SN-002",
                    "status": "In Progress",
                    "salesforceId": "T-2"
                }
            ]
        },
        {
            "id": "b-2",
            "boxNumber": "34",
            "deviceType": "Amp",
            "status": "On Hold",
            "assignedTechnician": "Magnus",
            "devices": []
        }
    ])
}
