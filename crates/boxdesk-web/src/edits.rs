//! Optimistic edits driven from components
//!
//! The session lives in a signal, so it cannot be borrowed across the remote
//! call. Each helper applies the edit inside the signal, awaits the record
//! store with the detached request, and settles it in the signal again. The
//! helpers return `None` when the view owning the session went away first.

use crate::api_client::ApiClient;
use boxdesk_core::MessageKey;
use boxdesk_sync::{BoxSession, EditOutcome, RecordStore, SyncResult, submit_tickets};
use boxdesk_types::{Assignee, DeviceId, DevicePatch, Status};
use leptos::prelude::*;

/// Message to show for a settled edit, `None` when it went through
///
/// `failure` names what the edit was about. A superseded edit counts as
/// failed, since an older rollback already dropped it locally.
pub fn outcome_message(outcome: &EditOutcome, failure: MessageKey) -> Option<MessageKey> {
    if outcome.undid_other_edits() {
        Some(MessageKey::BoxEditsUndone)
    } else if outcome.is_lost() {
        Some(failure)
    } else {
        None
    }
}

/// Merge `patch` into the devices in `ids` and persist it
///
/// Validation errors are returned before anything changes.
pub async fn edit_devices(
    session: RwSignal<BoxSession>,
    client: &ApiClient,
    patch: &DevicePatch,
    ids: &[DeviceId],
) -> SyncResult<Option<EditOutcome>> {
    let Some(edit) = session.try_update(|s| s.begin_devices(patch, ids)) else {
        return Ok(None);
    };
    let edit = edit?;

    let result = submit_tickets(client, edit.request()).await;
    Ok(session.try_update(|s| s.finish_devices(edit, result)))
}

/// Set the box status and persist it
pub async fn edit_status(
    session: RwSignal<BoxSession>,
    client: &ApiClient,
    status: Status,
) -> Option<EditOutcome> {
    let (box_id, edit) = session.try_update(|s| (s.id().clone(), s.begin_status(status)))?;

    let result = client.update_box_status(&box_id, edit.request()).await;
    session.try_update(|s| s.finish_status(edit, result))
}

/// Assign a technician and persist it
pub async fn edit_assignee(
    session: RwSignal<BoxSession>,
    client: &ApiClient,
    assignee: Assignee,
) -> Option<EditOutcome> {
    let edit = session.try_update(|s| s.begin_assignee(assignee))?;

    let result = client.update_box_assignee(edit.request()).await;
    session.try_update(|s| s.finish_assignee(edit, result))
}
