//! Optimistic editing of one box
//!
//! A [`BoxSession`] owns three independent optimistic values: the device
//! collection, the box status and the technician assignment. Each edit kind
//! comes as `begin_*` (apply locally, get the request), a submit step against
//! a [`RecordStore`], and `finish_*` (confirm or roll back). The async
//! `update_*` methods run all three steps; UIs that cannot hold the session
//! across an await use the split form.

use crate::error::{SyncError, SyncResult};
use crate::optimistic::{EditId, EditOutcome, EditStatus, Optimistic, PendingEdit};
use crate::store::RecordStore;
use boxdesk_types::{
    Assignee, AssigneeUpdate, BoxId, BoxRecord, BoxStatusUpdate, Device, DeviceId, DevicePatch,
    Status, TicketUpdate,
};
use futures::future::join_all;
use tracing::{debug, info, warn};

/// Pending device batch: snapshot of the whole collection plus one ticket
/// update per targeted device
pub type DeviceEdit = PendingEdit<Vec<Device>, Vec<TicketUpdate>>;

/// Pending box status change
pub type StatusEdit = PendingEdit<Status, BoxStatusUpdate>;

/// Pending technician assignment
pub type AssigneeEdit = PendingEdit<Assignee, AssigneeUpdate>;

/// Local editing state of one box
#[derive(Debug, Clone)]
pub struct BoxSession {
    record: BoxRecord,
    devices: Optimistic<Vec<Device>>,
    status: Optimistic<Status>,
    assignee: Optimistic<Assignee>,
}

impl BoxSession {
    /// Start editing `record`
    pub fn new(mut record: BoxRecord) -> Self {
        let devices = Optimistic::new(std::mem::take(&mut record.devices));
        let status = Optimistic::new(record.status);
        let assignee = Optimistic::new(record.assigned_technician.clone());
        Self {
            record,
            devices,
            status,
            assignee,
        }
    }

    /// Box identifier
    pub const fn id(&self) -> &BoxId {
        &self.record.id
    }

    /// Current devices, pending edits included
    pub fn devices(&self) -> &[Device] {
        self.devices.get()
    }

    /// Current box status
    pub const fn status(&self) -> Status {
        *self.status.get()
    }

    /// Current technician assignment
    pub const fn assignee(&self) -> &Assignee {
        self.assignee.get()
    }

    /// The box as currently shown, pending edits included
    pub fn record(&self) -> BoxRecord {
        BoxRecord {
            devices: self.devices.get().clone(),
            status: *self.status.get(),
            assigned_technician: self.assignee.get().clone(),
            ..self.record.clone()
        }
    }

    /// Status of any edit made through this session
    pub fn edit_status(&self, id: EditId) -> Option<EditStatus> {
        self.devices
            .status(id)
            .or_else(|| self.status.status(id))
            .or_else(|| self.assignee.status(id))
    }

    /// Whether any edit is still waiting for the record store
    pub fn has_pending(&self) -> bool {
        self.devices.has_pending() || self.status.has_pending() || self.assignee.has_pending()
    }

    /// Merge `patch` into the devices named by `device_ids`
    ///
    /// Fails without touching anything when `device_ids` is empty or names a
    /// device outside this box.
    pub fn begin_devices(
        &mut self,
        patch: &DevicePatch,
        device_ids: &[DeviceId],
    ) -> SyncResult<DeviceEdit> {
        if device_ids.is_empty() {
            return Err(SyncError::validation("no devices selected"));
        }
        let current = self.devices.get();
        if let Some(unknown) = device_ids
            .iter()
            .find(|id| !current.iter().any(|device| &device.id == *id))
        {
            return Err(SyncError::UnknownDevice(unknown.clone()));
        }

        let merged = patch.apply(current, device_ids);
        let requests: Vec<TicketUpdate> = merged
            .iter()
            .filter(|device| device_ids.contains(&device.id))
            .map(TicketUpdate::for_device)
            .collect();

        let edit = self.devices.begin(merged, requests);
        debug!(
            box_id = %self.record.id,
            edit = %edit.id(),
            devices = edit.request().len(),
            "applied device edit"
        );
        Ok(edit)
    }

    /// Settle a device batch
    pub fn finish_devices(&mut self, edit: DeviceEdit, result: SyncResult<()>) -> EditOutcome {
        let outcome = self.devices.finish(edit, result);
        self.log_outcome("devices", &outcome);
        outcome
    }

    /// Set the box status
    pub fn begin_status(&mut self, status: Status) -> StatusEdit {
        let edit = self.status.begin(status, BoxStatusUpdate { status });
        debug!(box_id = %self.record.id, edit = %edit.id(), %status, "applied status edit");
        edit
    }

    /// Settle a status change
    pub fn finish_status(&mut self, edit: StatusEdit, result: SyncResult<()>) -> EditOutcome {
        let outcome = self.status.finish(edit, result);
        self.log_outcome("status", &outcome);
        outcome
    }

    /// Assign a technician, or nobody
    pub fn begin_assignee(&mut self, assignee: Assignee) -> AssigneeEdit {
        let request = AssigneeUpdate::new(&self.record, &assignee);
        let edit = self.assignee.begin(assignee, request);
        debug!(
            box_id = %self.record.id,
            edit = %edit.id(),
            assignee = ?edit.request().assignee,
            "applied assignee edit"
        );
        edit
    }

    /// Settle an assignment
    pub fn finish_assignee(&mut self, edit: AssigneeEdit, result: SyncResult<()>) -> EditOutcome {
        let outcome = self.assignee.finish(edit, result);
        self.log_outcome("assignee", &outcome);
        outcome
    }

    /// Apply `patch` to `device_ids`, persist it and reconcile
    ///
    /// `on_change` sees the merged devices before any request is sent, and
    /// the restored devices again if the batch is rolled back. Validation
    /// errors are returned before anything changes; remote errors end up in
    /// the outcome.
    pub async fn update_devices<S, F>(
        &mut self,
        store: &S,
        patch: &DevicePatch,
        device_ids: &[DeviceId],
        mut on_change: F,
    ) -> SyncResult<EditOutcome>
    where
        S: RecordStore + ?Sized,
        F: FnMut(&[Device]),
    {
        let edit = self.begin_devices(patch, device_ids)?;
        on_change(self.devices());

        let result = submit_tickets(store, edit.request()).await;
        let outcome = self.finish_devices(edit, result);
        if outcome.is_rolled_back() {
            on_change(self.devices());
        }
        Ok(outcome)
    }

    /// Set the box status, persist it and reconcile
    pub async fn update_box_status<S, F>(
        &mut self,
        store: &S,
        status: Status,
        mut on_change: F,
    ) -> EditOutcome
    where
        S: RecordStore + ?Sized,
        F: FnMut(Status),
    {
        let edit = self.begin_status(status);
        on_change(self.status());

        let result = store.update_box_status(self.id(), edit.request()).await;
        let outcome = self.finish_status(edit, result);
        if outcome.is_rolled_back() {
            on_change(self.status());
        }
        outcome
    }

    /// Assign a technician, persist it and reconcile
    ///
    /// [`Assignee::Unassigned`] is sent as a `null` assignee.
    pub async fn update_assigned_technician<S, F>(
        &mut self,
        store: &S,
        assignee: Assignee,
        mut on_change: F,
    ) -> EditOutcome
    where
        S: RecordStore + ?Sized,
        F: FnMut(&Assignee),
    {
        let edit = self.begin_assignee(assignee);
        on_change(self.assignee());

        let result = store.update_box_assignee(edit.request()).await;
        let outcome = self.finish_assignee(edit, result);
        if outcome.is_rolled_back() {
            on_change(self.assignee());
        }
        outcome
    }

    fn log_outcome(&self, kind: &str, outcome: &EditOutcome) {
        match outcome {
            EditOutcome::Confirmed { id } => {
                info!(box_id = %self.record.id, edit = %id, kind, "edit confirmed");
            }
            EditOutcome::RolledBack {
                id,
                error,
                superseded,
                discarded,
            } => {
                warn!(
                    box_id = %self.record.id,
                    edit = %id,
                    kind,
                    %error,
                    superseded = superseded.len(),
                    discarded = discarded.len(),
                    "edit rolled back"
                );
            }
            EditOutcome::Superseded { id } => {
                debug!(box_id = %self.record.id, edit = %id, kind, "edit already superseded");
            }
        }
    }
}

/// Send every ticket update concurrently and wait for all of them
///
/// Returns the first failure in request order, after every request has
/// completed.
pub async fn submit_tickets<S>(store: &S, requests: &[TicketUpdate]) -> SyncResult<()>
where
    S: RecordStore + ?Sized,
{
    let results = join_all(requests.iter().map(|request| store.update_ticket(request))).await;

    let mut first_error = None;
    for (request, result) in requests.iter().zip(results) {
        if let Err(error) = result {
            warn!(record_key = %request.record_key, %error, "ticket update failed");
            first_error.get_or_insert(error);
        }
    }

    first_error.map_or(Ok(()), Err)
}
