//! Optimistic values with snapshot rollback
//!
//! [`Optimistic::begin`] swaps in the new value at once and hands back a
//! [`PendingEdit`] carrying the snapshot it replaced. [`Optimistic::finish`]
//! settles the edit: success keeps the value, failure restores the snapshot.
//!
//! Edits are not serialized. Restoring a snapshot also throws away every
//! newer edit: those still in flight are listed in the outcome as superseded,
//! and those the store already accepted are listed as discarded, since the
//! local value no longer shows them. When a superseded edit settles later it
//! leaves the value alone.
//!
//! Settled edits are forgotten once no older edit is still pending; nothing
//! can restore a snapshot from before them after that.

use crate::error::{SyncError, SyncResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_EDIT_ID: AtomicU64 = AtomicU64::new(1);

/// Identifier of one optimistic edit, unique within the process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EditId(u64);

impl EditId {
    fn next() -> Self {
        Self(NEXT_EDIT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw counter value
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EditId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "edit-{}", self.0)
    }
}

/// Lifecycle of an edit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EditStatus {
    /// Applied locally, remote call outstanding
    Pending,
    /// The remote store accepted it
    Confirmed,
    /// Its snapshot, or an older one, was restored before the store
    /// accepted it
    RolledBack,
    /// The store accepted it, then an older rollback restored a value from
    /// before it, so the local value no longer matches the store
    Discarded,
}

/// An applied edit waiting for its remote result
///
/// Holds the value it replaced and the wire request that persists it.
#[derive(Debug, Clone)]
pub struct PendingEdit<T, R> {
    id: EditId,
    snapshot: T,
    request: R,
}

impl<T, R> PendingEdit<T, R> {
    /// Edit identifier
    pub const fn id(&self) -> EditId {
        self.id
    }

    /// Request to send to the record store
    pub const fn request(&self) -> &R {
        &self.request
    }

    /// Value in place before the edit
    pub const fn snapshot(&self) -> &T {
        &self.snapshot
    }
}

/// How an edit settled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// The edit is now canonical
    Confirmed {
        /// Settled edit
        id: EditId,
    },
    /// The snapshot was restored
    RolledBack {
        /// Settled edit
        id: EditId,
        /// Why the remote call failed
        error: SyncError,
        /// Newer pending edits discarded by the restore, oldest first
        superseded: Vec<EditId>,
        /// Newer confirmed edits undone locally by the restore, oldest first
        discarded: Vec<EditId>,
    },
    /// An older rollback already discarded this edit; the value was left
    /// alone whatever the remote result
    Superseded {
        /// Settled edit
        id: EditId,
    },
}

impl EditOutcome {
    /// Edit this outcome belongs to
    pub const fn id(&self) -> EditId {
        match self {
            Self::Confirmed { id } | Self::RolledBack { id, .. } | Self::Superseded { id } => *id,
        }
    }

    /// Whether the local value changed back
    pub const fn is_rolled_back(&self) -> bool {
        matches!(self, Self::RolledBack { .. })
    }

    /// Whether the edit's value is gone from the local state, either rolled
    /// back or superseded by an older rollback
    pub const fn is_lost(&self) -> bool {
        !matches!(self, Self::Confirmed { .. })
    }

    /// Whether a rollback also undid newer edits, pending or confirmed
    pub fn undid_other_edits(&self) -> bool {
        match self {
            Self::RolledBack {
                superseded,
                discarded,
                ..
            } => !superseded.is_empty() || !discarded.is_empty(),
            _ => false,
        }
    }

    /// Remote error behind a rollback
    pub const fn error(&self) -> Option<&SyncError> {
        match self {
            Self::RolledBack { error, .. } => Some(error),
            _ => None,
        }
    }
}

/// A value edited optimistically
#[derive(Debug, Clone)]
pub struct Optimistic<T> {
    value: T,
    edits: Vec<(EditId, EditStatus)>,
}

impl<T> Optimistic<T> {
    /// Wrap a confirmed value
    pub const fn new(value: T) -> Self {
        Self {
            value,
            edits: Vec::new(),
        }
    }

    /// Current value, including pending edits
    pub const fn get(&self) -> &T {
        &self.value
    }

    /// Unwrap the current value
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Status of an edit made through this value
    ///
    /// `None` once the edit has settled and been forgotten.
    pub fn status(&self, id: EditId) -> Option<EditStatus> {
        self.edits
            .iter()
            .find(|(candidate, _)| *candidate == id)
            .map(|(_, status)| *status)
    }

    /// Edits still waiting for their remote result, oldest first
    pub fn pending(&self) -> Vec<EditId> {
        self.edits
            .iter()
            .filter(|(_, status)| *status == EditStatus::Pending)
            .map(|(id, _)| *id)
            .collect()
    }

    /// Whether any edit is in flight
    pub fn has_pending(&self) -> bool {
        self.edits
            .iter()
            .any(|(_, status)| *status == EditStatus::Pending)
    }

    /// Replace the value with `next` and record the edit as pending
    pub fn begin<R>(&mut self, next: T, request: R) -> PendingEdit<T, R> {
        let id = EditId::next();
        let snapshot = std::mem::replace(&mut self.value, next);
        self.edits.push((id, EditStatus::Pending));
        PendingEdit {
            id,
            snapshot,
            request,
        }
    }

    /// Settle `edit` with the result of its remote call
    pub fn finish<R>(&mut self, edit: PendingEdit<T, R>, result: SyncResult<()>) -> EditOutcome {
        let PendingEdit { id, snapshot, .. } = edit;
        if self.status(id) != Some(EditStatus::Pending) {
            return EditOutcome::Superseded { id };
        }

        let outcome = match result {
            Ok(()) => {
                self.set_status(id, EditStatus::Confirmed);
                EditOutcome::Confirmed { id }
            }
            Err(error) => {
                self.value = snapshot;
                self.set_status(id, EditStatus::RolledBack);

                let mut superseded = Vec::new();
                let mut discarded = Vec::new();
                for (other, status) in self.edits.iter_mut().filter(|(other, _)| *other > id) {
                    match *status {
                        EditStatus::Pending => {
                            *status = EditStatus::RolledBack;
                            superseded.push(*other);
                        }
                        EditStatus::Confirmed => {
                            *status = EditStatus::Discarded;
                            discarded.push(*other);
                        }
                        EditStatus::RolledBack | EditStatus::Discarded => {}
                    }
                }

                EditOutcome::RolledBack {
                    id,
                    error,
                    superseded,
                    discarded,
                }
            }
        };

        self.prune();
        outcome
    }

    /// Number of edits still tracked, settled ones included
    pub fn tracked(&self) -> usize {
        self.edits.len()
    }

    // Entries are in begin order; everything before the oldest pending edit
    // has settled and can no longer be undone by a rollback.
    fn prune(&mut self) {
        match self
            .edits
            .iter()
            .position(|(_, status)| *status == EditStatus::Pending)
        {
            Some(oldest_pending) => {
                self.edits.drain(..oldest_pending);
            }
            None => self.edits.clear(),
        }
    }

    fn set_status(&mut self, id: EditId, status: EditStatus) {
        if let Some(entry) = self.edits.iter_mut().find(|(candidate, _)| *candidate == id) {
            entry.1 = status;
        }
    }
}

impl<T: Default> Default for Optimistic<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn failure() -> SyncError {
        SyncError::rejected("/update_box/b-1", 500)
    }

    #[test]
    fn test_begin_applies_immediately() {
        let mut value = Optimistic::new(1);
        let edit = value.begin(2, "req");

        assert_eq!(*value.get(), 2);
        assert_eq!(*edit.snapshot(), 1);
        assert_eq!(*edit.request(), "req");
        assert_eq!(value.status(edit.id()), Some(EditStatus::Pending));
        assert!(value.has_pending());
    }

    #[test]
    fn test_confirm_keeps_value() {
        let mut value = Optimistic::new("old".to_string());
        let edit = value.begin("new".to_string(), ());
        let id = edit.id();

        assert_eq!(value.finish(edit, Ok(())), EditOutcome::Confirmed { id });
        assert_eq!(value.get(), "new");
        assert_eq!(value.status(id), None);
        assert!(!value.has_pending());
    }

    #[test]
    fn test_failure_restores_snapshot() {
        let mut value = Optimistic::new(vec![1, 2, 3]);
        let edit = value.begin(vec![9], ());
        let id = edit.id();

        let outcome = value.finish(edit, Err(failure()));
        assert_eq!(
            outcome,
            EditOutcome::RolledBack {
                id,
                error: failure(),
                superseded: vec![],
                discarded: vec![],
            }
        );
        assert!(!outcome.undid_other_edits());
        assert_eq!(*value.get(), vec![1, 2, 3]);
        assert_eq!(value.tracked(), 0);
    }

    #[test]
    fn test_rollback_reports_superseded_edits() {
        let mut value = Optimistic::new('a');
        let first = value.begin('b', ());
        let second = value.begin('c', ());
        let (first_id, second_id) = (first.id(), second.id());

        let outcome = value.finish(first, Err(failure()));
        assert_eq!(value.get(), &'a');
        assert!(outcome.undid_other_edits());
        match outcome {
            EditOutcome::RolledBack { superseded, .. } => assert_eq!(superseded, vec![second_id]),
            other => panic!("expected rollback, got {other:?}"),
        }
        assert_eq!(value.status(first_id), None);
        assert_eq!(value.status(second_id), None);

        // The newer edit's own result no longer touches the value
        assert_eq!(
            value.finish(second, Ok(())),
            EditOutcome::Superseded { id: second_id }
        );
        assert_eq!(value.get(), &'a');
    }

    #[test]
    fn test_newer_rollback_keeps_older_pending_edit() {
        let mut value = Optimistic::new(0);
        let older = value.begin(1, ());
        let newer = value.begin(2, ());
        let older_id = older.id();

        let outcome = value.finish(newer, Err(failure()));
        assert!(outcome.is_rolled_back());
        assert_eq!(*value.get(), 1);
        assert_eq!(value.pending(), vec![older_id]);

        assert_eq!(
            value.finish(older, Ok(())),
            EditOutcome::Confirmed { id: older_id }
        );
        assert_eq!(*value.get(), 1);
        assert!(!value.has_pending());
    }

    #[test]
    fn test_rollback_reports_confirmed_newer_edit() {
        let mut value = Optimistic::new(0);
        let older = value.begin(1, ());
        let newer = value.begin(2, ());
        let (older_id, newer_id) = (older.id(), newer.id());

        assert_eq!(
            value.finish(newer, Ok(())),
            EditOutcome::Confirmed { id: newer_id }
        );
        // Kept while an older edit could still undo it
        assert_eq!(value.status(newer_id), Some(EditStatus::Confirmed));

        let outcome = value.finish(older, Err(failure()));
        assert_eq!(
            outcome,
            EditOutcome::RolledBack {
                id: older_id,
                error: failure(),
                superseded: vec![],
                discarded: vec![newer_id],
            }
        );
        assert_eq!(*value.get(), 0);
    }

    #[test]
    fn test_settled_edits_are_pruned() {
        let mut value = Optimistic::new(0);
        let first = value.begin(1, ());
        let second = value.begin(2, ());
        let third = value.begin(3, ());
        let (first_id, third_id) = (first.id(), third.id());

        value.finish(second, Ok(()));
        value.finish(third, Err(failure()));
        assert_eq!(value.tracked(), 3);
        assert_eq!(value.status(third_id), Some(EditStatus::RolledBack));

        value.finish(first, Ok(()));
        assert_eq!(value.tracked(), 0);
        assert_eq!(value.status(first_id), None);

        for n in 0..100 {
            let edit = value.begin(n, ());
            value.finish(edit, Ok(()));
        }
        assert_eq!(value.tracked(), 0);
    }

    #[test]
    fn test_superseded_outcome_is_lost() {
        let id = EditId::next();
        assert!(EditOutcome::Superseded { id }.is_lost());
        assert!(!EditOutcome::Superseded { id }.undid_other_edits());
        assert!(!EditOutcome::Confirmed { id }.is_lost());
    }

    #[test]
    fn test_edit_ids_increase() {
        let mut value = Optimistic::new(());
        let a = value.begin((), ());
        let b = value.begin((), ());
        assert!(b.id() > a.id());
        assert!(a.id().to_string().starts_with("edit-"));
    }
}
