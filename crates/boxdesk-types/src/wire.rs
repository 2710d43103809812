//! Request bodies sent to the ticketing backend

use crate::model::{Assignee, BoxRecord, Device, Status};
use serde::{Deserialize, Serialize};

/// Body of `PATCH /update_service_ticket`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketUpdate {
    /// Ticket id of the device, or its local id when it has none
    pub record_key: String,

    /// Repair status
    pub status: Status,

    /// Error reason as shown to the customer
    pub error_message_customer: String,

    /// Point of error
    pub error_location: String,

    /// Error reason
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_reason: Option<String>,

    /// Error analysis
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_analysis: Option<String>,

    /// Internal comments
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_comments: Option<String>,
}

impl TicketUpdate {
    /// Build the update for an already merged device
    #[must_use]
    pub fn for_device(device: &Device) -> Self {
        Self {
            record_key: device.record_key().to_string(),
            status: device.status,
            error_message_customer: device.error_reason.clone().unwrap_or_default(),
            error_location: device.point_of_error.clone().unwrap_or_default(),
            error_reason: device.error_reason.clone(),
            error_analysis: device.error_analysis.clone(),
            internal_comments: device.internal_comments.clone(),
        }
    }
}

impl From<&Device> for TicketUpdate {
    fn from(device: &Device) -> Self {
        Self::for_device(device)
    }
}

/// Body of `PATCH /update_box/{boxId}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxStatusUpdate {
    /// New box status
    pub status: Status,
}

/// Body of `PATCH /update_service_box`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssigneeUpdate {
    /// External record key of the box
    pub record_key: String,

    /// Technician name, `null` when unassigned
    pub assignee: Option<String>,
}

impl AssigneeUpdate {
    /// Build the update for `record` with the given assignment
    #[must_use]
    pub fn new(record: &BoxRecord, assignee: &Assignee) -> Self {
        Self {
            record_key: record.record_key().to_string(),
            assignee: assignee.technician().map(str::to_string),
        }
    }
}
