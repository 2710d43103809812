//! The remote record store seam

use crate::error::SyncResult;
use async_trait::async_trait;
use boxdesk_types::{AssigneeUpdate, BoxId, BoxRecord, BoxStatusUpdate, TicketUpdate};

/// Paths of the record store endpoints, relative to their base URL
pub mod endpoints {
    /// `GET`, full box and device snapshot
    pub const BOXES: &str = "/boxes";

    /// `PATCH`, partial update of one device's service ticket
    pub const SERVICE_TICKET: &str = "/update_service_ticket";

    /// `PATCH` prefix, followed by `/{boxId}`
    pub const BOX: &str = "/update_box";

    /// `PATCH`, technician assignment of a box
    pub const SERVICE_BOX: &str = "/update_service_box";

    /// Path of the status update for one box
    pub fn box_status(box_id: &str) -> String {
        format!("{BOX}/{box_id}")
    }
}

/// Canonical owner of box, device and ticket state
///
/// Implementations report every failure as a [`crate::SyncError`]; callers
/// treat all remote kinds the same way.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait RecordStore {
    /// Fetch every box with its devices
    async fn fetch_boxes(&self) -> SyncResult<Vec<BoxRecord>>;

    /// Write the merged fields of one device to its service ticket
    async fn update_ticket(&self, update: &TicketUpdate) -> SyncResult<()>;

    /// Change the status of a box
    async fn update_box_status(&self, box_id: &BoxId, update: &BoxStatusUpdate)
    -> SyncResult<()>;

    /// Change the technician assigned to a box
    async fn update_box_assignee(&self, update: &AssigneeUpdate) -> SyncResult<()>;
}

#[cfg(test)]
mod tests {
    use super::endpoints;

    #[test]
    fn test_box_status_path() {
        assert_eq!(endpoints::box_status("b-1"), "/update_box/b-1");
    }
}
