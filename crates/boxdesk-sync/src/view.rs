//! Dashboard view state

use crate::loader::LoadState;
use boxdesk_core::filter::{TechnicianFilter, filter_boxes};
use boxdesk_types::{BoxId, BoxRecord};
use std::collections::BTreeSet;

/// Everything the dashboard view keeps between renders
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardState {
    /// Snapshot load result
    pub load: LoadState,
    /// Free text search term
    pub search: String,
    /// Technician filter
    pub technician: TechnicianFilter,
    selected: Option<BoxId>,
}

impl DashboardState {
    /// State before the snapshot arrives
    pub fn new() -> Self {
        Self::default()
    }

    /// Boxes passing the current search and technician filter
    pub fn visible_boxes(&self) -> Vec<&BoxRecord> {
        filter_boxes(self.load.boxes(), &self.search, &self.technician)
    }

    /// Open the detail view of `id`; unknown ids are ignored
    pub fn select_box(&mut self, id: &BoxId) -> bool {
        if self.load.find(id).is_none() {
            return false;
        }
        self.selected = Some(id.clone());
        true
    }

    /// Return to the list
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Box shown in the detail view
    pub fn selected_box(&self) -> Option<&BoxRecord> {
        self.selected.as_ref().and_then(|id| self.load.find(id))
    }

    /// Write a settled box back into the snapshot
    pub fn replace_box(&mut self, record: BoxRecord) -> bool {
        self.load.replace_box(record)
    }

    /// Technician names for the filter: `configured` plus every name
    /// assigned in the snapshot, sorted without duplicates
    pub fn technicians(&self, configured: &[String]) -> Vec<String> {
        configured
            .iter()
            .map(String::as_str)
            .chain(
                self.load
                    .boxes()
                    .iter()
                    .filter_map(|record| record.assigned_technician.technician()),
            )
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}
