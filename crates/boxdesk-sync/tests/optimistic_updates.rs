//! End-to-end tests of optimistic edits against the in-memory store

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use boxdesk_sync::{
    BoxSession, EditOutcome, EditStatus, LoadState, MockRecordStore, StoreCall, SyncError,
    load_snapshot, submit_tickets,
};
use boxdesk_types::{
    Assignee, BoxId, BoxRecord, BoxStatusUpdate, Device, DeviceId, DevicePatch, Status,
    UNASSIGNED,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn device(id: &str, ticket: Option<&str>) -> Device {
    let mut device = Device::new(id, format!("SN-{id}"));
    device.ticket_id = ticket.map(str::to_string);
    device.error_analysis = Some(format!("analysis of {id}"));
    device
}

fn sample_box() -> BoxRecord {
    let mut record = BoxRecord::new("b-1", "12");
    record.device_type = Some("Speaker".to_string());
    record.record_key = Some("SF-BOX-1".to_string());
    record.devices = vec![
        device("d-1", Some("T-1")),
        device("d-2", Some("T-2")),
        device("d-3", None),
    ];
    record
}

fn ids(ids: &[&str]) -> Vec<DeviceId> {
    ids.iter().copied().map(DeviceId::from).collect()
}

#[tokio::test]
async fn test_devices_change_before_any_request() {
    let store = MockRecordStore::with_boxes(vec![sample_box()]);
    let mut session = BoxSession::new(sample_box());
    let mut notifications = Vec::new();

    let outcome = session
        .update_devices(
            &store,
            &DevicePatch::status(Status::Completed),
            &ids(&["d-1", "d-3"]),
            |devices| notifications.push((devices.to_vec(), store.calls().len())),
        )
        .await
        .unwrap();

    assert!(matches!(outcome, EditOutcome::Confirmed { .. }));
    assert_eq!(notifications.len(), 1);
    let (devices, calls_seen) = &notifications[0];
    assert_eq!(*calls_seen, 0);
    assert_eq!(devices[0].status, Status::Completed);
    assert_eq!(devices[1].status, Status::New);
    assert_eq!(devices[2].status, Status::Completed);
}

#[tokio::test]
async fn test_requests_use_ticket_key_and_merged_values() {
    let store = MockRecordStore::with_boxes(vec![sample_box()]);
    let mut session = BoxSession::new(sample_box());
    let patch = DevicePatch::status(Status::InProgress).with_error_reason("dropped in transit");

    session
        .update_devices(&store, &patch, &ids(&["d-1", "d-3"]), |_| {})
        .await
        .unwrap();

    let updates = store.ticket_updates();
    assert_eq!(updates.len(), 2);
    assert_eq!(updates[0].record_key, "T-1");
    assert_eq!(updates[1].record_key, "d-3");
    for update in &updates {
        assert_eq!(update.status, Status::InProgress);
        assert_eq!(update.error_message_customer, "dropped in transit");
        assert_eq!(update.error_location, "");
        assert!(update.error_analysis.as_deref().unwrap().starts_with("analysis of"));
    }

    let stored = &store.boxes()[0];
    assert_eq!(stored.devices[0].status, Status::InProgress);
    assert_eq!(stored.devices[1].status, Status::New);
}

#[tokio::test]
async fn test_one_failure_rolls_back_whole_batch() {
    let store = MockRecordStore::with_boxes(vec![sample_box()]);
    store.fail_ticket("T-2");
    let mut session = BoxSession::new(sample_box());
    let before = session.devices().to_vec();
    let mut notifications = Vec::new();

    let outcome = session
        .update_devices(
            &store,
            &DevicePatch::status(Status::OnHold).with_internal_comments("waiting for parts"),
            &ids(&["d-1", "d-2", "d-3"]),
            |devices| notifications.push(devices.to_vec()),
        )
        .await
        .unwrap();

    // Every request ran, even after the failing one
    assert_eq!(store.ticket_updates().len(), 3);
    assert_eq!(
        outcome.error(),
        Some(&SyncError::rejected("/update_service_ticket", 500))
    );
    assert_eq!(session.devices(), before.as_slice());
    assert_eq!(notifications.len(), 2);
    assert_eq!(notifications[1], before);
    assert_eq!(session.edit_status(outcome.id()), None);
    assert!(!session.has_pending());
}

#[rstest]
#[case(vec![])]
#[case(vec!["d-1", "d-404"])]
#[tokio::test]
async fn test_invalid_selection_changes_nothing(#[case] selection: Vec<&str>) {
    let store = MockRecordStore::new();
    let mut session = BoxSession::new(sample_box());
    let mut notified = false;

    let result = session
        .update_devices(
            &store,
            &DevicePatch::status(Status::Completed),
            &ids(&selection),
            |_| notified = true,
        )
        .await;

    assert!(result.is_err());
    assert!(!notified);
    assert!(store.calls().is_empty());
    assert_eq!(session.record(), sample_box());
}

#[tokio::test]
async fn test_box_status_update_and_rollback() {
    let store = MockRecordStore::with_boxes(vec![sample_box()]);
    let mut session = BoxSession::new(sample_box());
    let mut seen = Vec::new();

    let outcome = session
        .update_box_status(&store, Status::InProgress, |status| seen.push(status))
        .await;
    assert!(matches!(outcome, EditOutcome::Confirmed { .. }));
    assert_eq!(session.status(), Status::InProgress);
    assert_eq!(
        store.calls(),
        vec![StoreCall::BoxStatus(
            BoxId::from("b-1"),
            BoxStatusUpdate {
                status: Status::InProgress
            }
        )]
    );

    store.fail_box_status("b-1");
    let outcome = session
        .update_box_status(&store, Status::Completed, |status| seen.push(status))
        .await;
    assert!(outcome.is_rolled_back());
    assert_eq!(session.status(), Status::InProgress);
    assert_eq!(
        seen,
        vec![Status::InProgress, Status::Completed, Status::InProgress]
    );
}

#[tokio::test]
async fn test_unassigned_sentinel_is_sent_as_null() {
    let mut record = sample_box();
    record.assigned_technician = Assignee::from_selection("Magnus");
    let store = MockRecordStore::with_boxes(vec![record.clone()]);
    let mut session = BoxSession::new(record);

    let outcome = session
        .update_assigned_technician(&store, Assignee::from_selection(UNASSIGNED), |_| {})
        .await;

    assert!(matches!(outcome, EditOutcome::Confirmed { .. }));
    assert!(session.assignee().is_unassigned());
    match &store.calls()[0] {
        StoreCall::Assignee(update) => {
            assert_eq!(update.record_key, "SF-BOX-1");
            assert_eq!(update.assignee, None);
            let body = serde_json::to_value(update).unwrap();
            assert!(body["assignee"].is_null());
        }
        other => panic!("unexpected call {other:?}"),
    }
    assert!(store.boxes()[0].assigned_technician.is_unassigned());
}

#[tokio::test]
async fn test_assignee_rollback_restores_previous_technician() {
    let mut record = sample_box();
    record.assigned_technician = Assignee::from_selection("Magnus");
    let store = MockRecordStore::with_boxes(vec![record.clone()]);
    store.fail_assignee("SF-BOX-1");
    let mut session = BoxSession::new(record);
    let mut seen = Vec::new();

    let outcome = session
        .update_assigned_technician(&store, Assignee::from_selection("Freja"), |assignee| {
            seen.push(assignee.as_selection().to_string());
        })
        .await;

    assert!(outcome.is_rolled_back());
    assert_eq!(session.assignee().technician(), Some("Magnus"));
    assert_eq!(seen, vec!["Freja", "Magnus"]);
}

#[tokio::test]
async fn test_rollback_reports_superseded_device_edit() {
    let store = MockRecordStore::with_boxes(vec![sample_box()]);
    store.fail_ticket("T-1");
    let mut session = BoxSession::new(sample_box());
    let original = session.devices().to_vec();

    let first = session
        .begin_devices(&DevicePatch::status(Status::InProgress), &ids(&["d-1"]))
        .unwrap();
    let second = session
        .begin_devices(&DevicePatch::status(Status::Completed), &ids(&["d-2"]))
        .unwrap();
    let second_id = second.id();

    let first_result = submit_tickets(&store, first.request()).await;
    let second_result = submit_tickets(&store, second.request()).await;
    assert!(second_result.is_ok());

    match session.finish_devices(first, first_result) {
        EditOutcome::RolledBack { superseded, .. } => assert_eq!(superseded, vec![second_id]),
        other => panic!("expected rollback, got {other:?}"),
    }
    assert_eq!(session.devices(), original.as_slice());

    assert_eq!(
        session.finish_devices(second, second_result),
        EditOutcome::Superseded { id: second_id }
    );
    assert_eq!(session.edit_status(second_id), None);
    assert_eq!(session.devices(), original.as_slice());
    assert!(!session.has_pending());
}

#[tokio::test]
async fn test_rollback_reports_confirmed_newer_device_edit() {
    let store = MockRecordStore::with_boxes(vec![sample_box()]);
    store.fail_ticket("T-1");
    let mut session = BoxSession::new(sample_box());

    let older = session
        .begin_devices(&DevicePatch::status(Status::InProgress), &ids(&["d-1"]))
        .unwrap();
    let newer = session
        .begin_devices(&DevicePatch::status(Status::Completed), &ids(&["d-2"]))
        .unwrap();
    let newer_id = newer.id();

    let newer_result = submit_tickets(&store, newer.request()).await;
    assert_eq!(
        session.finish_devices(newer, newer_result),
        EditOutcome::Confirmed { id: newer_id }
    );
    assert_eq!(session.edit_status(newer_id), Some(EditStatus::Confirmed));

    let older_result = submit_tickets(&store, older.request()).await;
    let outcome = session.finish_devices(older, older_result);

    // The store kept d-2's change; the local restore dropped it and says so
    match &outcome {
        EditOutcome::RolledBack {
            superseded,
            discarded,
            ..
        } => {
            assert!(superseded.is_empty());
            assert_eq!(discarded, &vec![newer_id]);
        }
        other => panic!("expected rollback, got {other:?}"),
    }
    assert!(outcome.undid_other_edits());
    assert_eq!(session.devices()[1].status, Status::New);
    assert_eq!(store.boxes()[0].devices[1].status, Status::Completed);
    assert_eq!(session.edit_status(newer_id), None);
}

#[tokio::test]
async fn test_load_states() {
    let store = MockRecordStore::with_boxes(vec![sample_box()]);
    match load_snapshot(&store).await {
        LoadState::Loaded { boxes } => assert_eq!(boxes, vec![sample_box()]),
        other => panic!("expected loaded, got {other:?}"),
    }

    assert_eq!(load_snapshot(&MockRecordStore::new()).await, LoadState::Empty);

    let store = MockRecordStore::new()
        .with_fetch_error(SyncError::malformed("/boxes", "expected value at line 1"));
    let state = load_snapshot(&store).await;
    assert!(state.boxes().is_empty());
    assert!(state.error().unwrap().contains("Malformed"));
}
