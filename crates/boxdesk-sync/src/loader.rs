//! Initial snapshot load

use crate::error::SyncResult;
use crate::store::RecordStore;
use boxdesk_types::{BoxId, BoxRecord};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

/// Result of the one-time snapshot fetch
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum LoadState {
    /// No response yet
    #[default]
    Loading,
    /// At least one box
    Loaded {
        /// Snapshot in backend order
        boxes: Vec<BoxRecord>,
    },
    /// The backend has no boxes
    Empty,
    /// The fetch failed; the dashboard shows no boxes
    Failed {
        /// What went wrong
        message: String,
    },
}

impl LoadState {
    /// Classify a fetch result
    pub fn from_result(result: SyncResult<Vec<BoxRecord>>) -> Self {
        match result {
            Ok(boxes) if boxes.is_empty() => Self::Empty,
            Ok(boxes) => Self::Loaded { boxes },
            Err(error) => Self::Failed {
                message: error.to_string(),
            },
        }
    }

    /// Boxes to display; empty unless loaded
    pub fn boxes(&self) -> &[BoxRecord] {
        match self {
            Self::Loaded { boxes } => boxes,
            _ => &[],
        }
    }

    /// Whether the fetch is still outstanding
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Failure message, if the fetch failed
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed { message } => Some(message),
            _ => None,
        }
    }

    /// Look up a box by id
    pub fn find(&self, id: &BoxId) -> Option<&BoxRecord> {
        self.boxes().iter().find(|record| &record.id == id)
    }

    /// Write `record` over the box with the same id; returns whether one
    /// was found
    pub fn replace_box(&mut self, record: BoxRecord) -> bool {
        let Self::Loaded { boxes } = self else {
            return false;
        };
        match boxes.iter_mut().find(|existing| existing.id == record.id) {
            Some(existing) => {
                *existing = record;
                true
            }
            None => false,
        }
    }
}

impl From<SyncResult<Vec<BoxRecord>>> for LoadState {
    fn from(result: SyncResult<Vec<BoxRecord>>) -> Self {
        Self::from_result(result)
    }
}

/// Fetch the snapshot once
///
/// Never fails: every remote error becomes [`LoadState::Failed`].
pub async fn load_snapshot<S>(store: &S) -> LoadState
where
    S: RecordStore + ?Sized,
{
    let state = LoadState::from_result(store.fetch_boxes().await);
    match &state {
        LoadState::Loaded { boxes } => info!(boxes = boxes.len(), "box snapshot loaded"),
        LoadState::Empty => info!("box snapshot is empty"),
        LoadState::Failed { message } => error!(error = %message, "failed to load box snapshot"),
        LoadState::Loading => {}
    }
    state
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::error::SyncError;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_classification() {
        assert_eq!(LoadState::from_result(Ok(vec![])), LoadState::Empty);

        let state = LoadState::from(Ok(vec![BoxRecord::new("b-1", "12")]));
        assert_eq!(state.boxes().len(), 1);
        assert!(state.error().is_none());

        let shape_error = SyncError::unexpected_shape("/boxes", "a JSON array");
        let state = LoadState::from_result(Err(shape_error));
        assert!(state.boxes().is_empty());
        assert!(state.error().unwrap().contains("/boxes"));
        assert!(!state.is_loading());
    }

    #[test]
    fn test_replace_box() {
        let mut state = LoadState::from_result(Ok(vec![
            BoxRecord::new("b-1", "12"),
            BoxRecord::new("b-2", "34"),
        ]));

        let mut edited = BoxRecord::new("b-2", "34");
        edited.device_type = Some("Amp".to_string());
        assert!(state.replace_box(edited.clone()));
        assert_eq!(state.find(&BoxId::from("b-2")), Some(&edited));

        assert!(!state.replace_box(BoxRecord::new("b-9", "99")));
        assert!(!LoadState::Empty.replace_box(edited));
    }
}
