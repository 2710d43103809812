//! In-memory record store for testing

use crate::error::{SyncError, SyncResult};
use crate::store::{RecordStore, endpoints};
use async_trait::async_trait;
use boxdesk_types::{AssigneeUpdate, BoxId, BoxRecord, BoxStatusUpdate, TicketUpdate};
use parking_lot::Mutex;
use std::collections::HashSet;

/// A request received by [`MockRecordStore`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    /// `GET /boxes`
    FetchBoxes,
    /// `PATCH /update_service_ticket`
    Ticket(TicketUpdate),
    /// `PATCH /update_box/{boxId}`
    BoxStatus(BoxId, BoxStatusUpdate),
    /// `PATCH /update_service_box`
    Assignee(AssigneeUpdate),
}

/// Record store backed by a `Vec`, with scripted failures
///
/// Successful updates are written into the stored snapshot so a later
/// fetch sees them. Every call is recorded, failed or not.
#[derive(Debug, Default)]
pub struct MockRecordStore {
    /// Current snapshot
    boxes: Mutex<Vec<BoxRecord>>,

    /// Error returned by `fetch_boxes` instead of the snapshot
    fetch_error: Mutex<Option<SyncError>>,

    /// Ticket record keys whose updates are rejected
    failing_tickets: Mutex<HashSet<String>>,

    /// Box ids whose status updates are rejected
    failing_boxes: Mutex<HashSet<BoxId>>,

    /// Box record keys whose assignee updates are rejected
    failing_assignees: Mutex<HashSet<String>>,

    /// Call log in arrival order
    calls: Mutex<Vec<StoreCall>>,
}

impl MockRecordStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store serving `boxes`
    pub fn with_boxes(boxes: Vec<BoxRecord>) -> Self {
        let store = Self::new();
        *store.boxes.lock() = boxes;
        store
    }

    /// Make `fetch_boxes` fail with `error`
    #[must_use]
    pub fn with_fetch_error(self, error: SyncError) -> Self {
        *self.fetch_error.lock() = Some(error);
        self
    }

    /// Reject ticket updates for `record_key` with a 500
    pub fn fail_ticket(&self, record_key: impl Into<String>) {
        self.failing_tickets.lock().insert(record_key.into());
    }

    /// Reject status updates for `box_id` with a 500
    pub fn fail_box_status(&self, box_id: impl Into<BoxId>) {
        self.failing_boxes.lock().insert(box_id.into());
    }

    /// Reject assignee updates for `record_key` with a 500
    pub fn fail_assignee(&self, record_key: impl Into<String>) {
        self.failing_assignees.lock().insert(record_key.into());
    }

    /// Stop rejecting anything
    pub fn clear_failures(&self) {
        self.failing_tickets.lock().clear();
        self.failing_boxes.lock().clear();
        self.failing_assignees.lock().clear();
        *self.fetch_error.lock() = None;
    }

    /// Every call received so far
    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().clone()
    }

    /// Ticket updates received so far
    pub fn ticket_updates(&self) -> Vec<TicketUpdate> {
        self.calls
            .lock()
            .iter()
            .filter_map(|call| match call {
                StoreCall::Ticket(update) => Some(update.clone()),
                _ => None,
            })
            .collect()
    }

    /// Current snapshot, including applied updates
    pub fn boxes(&self) -> Vec<BoxRecord> {
        self.boxes.lock().clone()
    }

    fn record(&self, call: StoreCall) {
        self.calls.lock().push(call);
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl RecordStore for MockRecordStore {
    async fn fetch_boxes(&self) -> SyncResult<Vec<BoxRecord>> {
        self.record(StoreCall::FetchBoxes);
        if let Some(error) = self.fetch_error.lock().clone() {
            return Err(error);
        }
        Ok(self.boxes())
    }

    async fn update_ticket(&self, update: &TicketUpdate) -> SyncResult<()> {
        self.record(StoreCall::Ticket(update.clone()));
        if self.failing_tickets.lock().contains(&update.record_key) {
            return Err(SyncError::rejected(endpoints::SERVICE_TICKET, 500));
        }

        let mut boxes = self.boxes.lock();
        let device = boxes
            .iter_mut()
            .flat_map(|record| record.devices.iter_mut())
            .find(|device| device.record_key() == update.record_key);
        if let Some(device) = device {
            device.status = update.status;
            device.point_of_error = Some(update.error_location.clone());
            device.error_reason.clone_from(&update.error_reason);
            device.error_analysis.clone_from(&update.error_analysis);
            device.internal_comments.clone_from(&update.internal_comments);
        }
        Ok(())
    }

    async fn update_box_status(
        &self,
        box_id: &BoxId,
        update: &BoxStatusUpdate,
    ) -> SyncResult<()> {
        self.record(StoreCall::BoxStatus(box_id.clone(), *update));
        if self.failing_boxes.lock().contains(box_id) {
            return Err(SyncError::rejected(endpoints::box_status(box_id.as_str()), 500));
        }

        if let Some(record) = self.boxes.lock().iter_mut().find(|r| &r.id == box_id) {
            record.status = update.status;
        }
        Ok(())
    }

    async fn update_box_assignee(&self, update: &AssigneeUpdate) -> SyncResult<()> {
        self.record(StoreCall::Assignee(update.clone()));
        if self.failing_assignees.lock().contains(&update.record_key) {
            return Err(SyncError::rejected(endpoints::SERVICE_BOX, 500));
        }

        if let Some(record) = self
            .boxes
            .lock()
            .iter_mut()
            .find(|r| r.record_key() == update.record_key)
        {
            record.assigned_technician = update.assignee.clone().into();
        }
        Ok(())
    }
}
