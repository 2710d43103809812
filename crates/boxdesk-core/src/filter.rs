//! Search and technician filtering over the box snapshot

use boxdesk_types::{Assignee, BoxRecord};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Filter value matching every box
pub const ALL_TECHNICIANS: &str = "all";

/// Filter value matching boxes without a technician
pub const UNASSIGNED_FILTER: &str = "unassigned";

/// Technician part of the dashboard filter
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TechnicianFilter {
    /// Every box
    #[default]
    All,
    /// Boxes with no technician
    Unassigned,
    /// Boxes assigned to exactly this technician
    Technician(String),
}

impl TechnicianFilter {
    /// Interpret a filter selection. `all` and `unassigned` are sentinels,
    /// anything else names a technician verbatim.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "" | ALL_TECHNICIANS => Self::All,
            UNASSIGNED_FILTER => Self::Unassigned,
            name => Self::Technician(name.to_string()),
        }
    }

    /// Selection value for this filter
    #[must_use]
    pub fn as_value(&self) -> &str {
        match self {
            Self::All => ALL_TECHNICIANS,
            Self::Unassigned => UNASSIGNED_FILTER,
            Self::Technician(name) => name,
        }
    }

    /// Whether a box with this assignment passes the filter
    #[must_use]
    pub fn matches(&self, assignee: &Assignee) -> bool {
        match self {
            Self::All => true,
            Self::Unassigned => assignee.is_unassigned(),
            Self::Technician(name) => assignee.technician() == Some(name.as_str()),
        }
    }
}

impl From<&str> for TechnicianFilter {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<String> for TechnicianFilter {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<TechnicianFilter> for String {
    fn from(value: TechnicianFilter) -> Self {
        value.as_value().to_string()
    }
}

impl fmt::Display for TechnicianFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_value())
    }
}

/// Search term plus technician filter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxFilter {
    /// Free text matched against box number and device type
    pub search: String,
    /// Technician restriction
    pub technician: TechnicianFilter,
}

impl BoxFilter {
    /// Create a filter
    #[must_use]
    pub fn new(search: impl Into<String>, technician: TechnicianFilter) -> Self {
        Self {
            search: search.into(),
            technician,
        }
    }

    /// Whether `record` passes both the search term and the technician filter
    #[must_use]
    pub fn matches(&self, record: &BoxRecord) -> bool {
        matches_search(record, &self.search.to_lowercase())
            && self.technician.matches(&record.assigned_technician)
    }

    /// Boxes that pass the filter, in snapshot order
    #[must_use]
    pub fn apply<'a>(&self, boxes: &'a [BoxRecord]) -> Vec<&'a BoxRecord> {
        filter_boxes(boxes, &self.search, &self.technician)
    }
}

fn matches_search(record: &BoxRecord, needle: &str) -> bool {
    record.box_number.to_lowercase().contains(needle)
        || record
            .device_type
            .as_deref()
            .is_some_and(|label| label.to_lowercase().contains(needle))
}

/// Boxes whose number or device type contains `search` (case-insensitive)
/// and whose assignment passes `technician`, in snapshot order
#[must_use]
pub fn filter_boxes<'a>(
    boxes: &'a [BoxRecord],
    search: &str,
    technician: &TechnicianFilter,
) -> Vec<&'a BoxRecord> {
    let needle = search.to_lowercase();
    boxes
        .iter()
        .filter(|record| {
            matches_search(record, &needle) && technician.matches(&record.assigned_technician)
        })
        .collect()
}
