//! Box and device records

use serde::{Deserialize, Deserializer, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Selection value meaning "no technician".
pub const UNASSIGNED: &str = "Unassigned";

/// Identifiers and box numbers arrive as either JSON strings or integers.
fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Signed(i64),
        Unsigned(u64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Signed(n) => n.to_string(),
        Raw::Unsigned(n) => n.to_string(),
    })
}

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Borrow the identifier text
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                text_or_number(deserializer).map(Self)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

record_id!(
    /// Local identifier of a box
    BoxId
);

record_id!(
    /// Local identifier of a device, unique within its box
    DeviceId
);

/// Lifecycle status shared by boxes and devices
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Not yet looked at
    #[default]
    New,
    /// A technician is working on it
    #[serde(rename = "In Progress", alias = "InProgress", alias = "in_progress")]
    InProgress,
    /// Work finished
    Completed,
    /// Waiting on something external
    #[serde(rename = "On Hold", alias = "OnHold", alias = "on_hold")]
    OnHold,
}

impl Status {
    /// Every status in display order
    pub const ALL: [Self; 4] = [Self::New, Self::InProgress, Self::Completed, Self::OnHold];

    /// Wire and form representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::OnHold => "On Hold",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a form value does not name a status
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown status: {0}")]
pub struct ParseStatusError(pub String);

impl FromStr for Status {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "new" => Ok(Self::New),
            "inprogress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "onhold" => Ok(Self::OnHold),
            _ => Err(ParseStatusError(s.to_string())),
        }
    }
}

/// Technician assignment of a box
///
/// On the wire this is a nullable string. The [`UNASSIGNED`] selection value
/// never leaves the client: it always becomes `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum Assignee {
    /// Nobody is assigned
    #[default]
    Unassigned,
    /// Assigned to the named technician
    Technician(String),
}

impl Assignee {
    /// Interpret a technician selection, mapping the sentinel and blanks to
    /// [`Assignee::Unassigned`]
    #[must_use]
    pub fn from_selection(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value == UNASSIGNED {
            Self::Unassigned
        } else {
            Self::Technician(value.to_string())
        }
    }

    /// Value to preselect in a technician picker
    #[must_use]
    pub fn as_selection(&self) -> &str {
        match self {
            Self::Unassigned => UNASSIGNED,
            Self::Technician(name) => name,
        }
    }

    /// Name of the assigned technician, if any
    #[must_use]
    pub fn technician(&self) -> Option<&str> {
        match self {
            Self::Unassigned => None,
            Self::Technician(name) => Some(name),
        }
    }

    /// Whether nobody is assigned
    #[must_use]
    pub const fn is_unassigned(&self) -> bool {
        matches!(self, Self::Unassigned)
    }
}

impl From<Option<String>> for Assignee {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::Unassigned, |name| Self::from_selection(&name))
    }
}

impl From<Assignee> for Option<String> {
    fn from(value: Assignee) -> Self {
        match value {
            Assignee::Unassigned => None,
            Assignee::Technician(name) => Some(name),
        }
    }
}

/// A single unit inside a box, with its service ticket fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    /// Local identifier
    pub id: DeviceId,

    /// Serial number printed on the unit
    #[serde(default)]
    pub serial_number: String,

    /// Warranty end date as reported by the backend
    #[serde(default, alias = "warrantyUntil")]
    pub warranty_date: Option<String>,

    /// Issue reported by the customer
    #[serde(default, alias = "customerReportedIssue")]
    pub customer_issue: Option<String>,

    /// Repair status
    #[serde(default)]
    pub status: Status,

    /// Where the fault was found
    #[serde(default)]
    pub point_of_error: Option<String>,

    /// Why the fault happened
    #[serde(default)]
    pub error_reason: Option<String>,

    /// Technician's analysis
    #[serde(default)]
    pub error_analysis: Option<String>,

    /// Comments not shown to the customer
    #[serde(default)]
    pub internal_comments: Option<String>,

    /// External ticket identifier
    #[serde(default, alias = "salesforceId")]
    pub ticket_id: Option<String>,
}

impl Device {
    /// Create a device with only an identifier and serial number set
    #[must_use]
    pub fn new(id: impl Into<DeviceId>, serial_number: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            serial_number: serial_number.into(),
            warranty_date: None,
            customer_issue: None,
            status: Status::New,
            point_of_error: None,
            error_reason: None,
            error_analysis: None,
            internal_comments: None,
            ticket_id: None,
        }
    }

    /// Key used for remote updates: the ticket id when present, otherwise
    /// the local id
    #[must_use]
    pub fn record_key(&self) -> &str {
        match self.ticket_id.as_deref() {
            Some(ticket) if !ticket.is_empty() => ticket,
            _ => self.id.as_str(),
        }
    }
}

/// A shipped container of devices tracked as one unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxRecord {
    /// Local identifier
    pub id: BoxId,

    /// Sequential box number
    #[serde(deserialize_with = "text_or_number")]
    pub box_number: String,

    /// Device type label
    #[serde(default)]
    pub device_type: Option<String>,

    /// Lifecycle status
    #[serde(default)]
    pub status: Status,

    /// Assigned technician
    #[serde(default)]
    pub assigned_technician: Assignee,

    /// Devices in shipping order
    #[serde(default)]
    pub devices: Vec<Device>,

    /// External record key for box-level updates
    #[serde(default, alias = "salesforceId")]
    pub record_key: Option<String>,
}

impl BoxRecord {
    /// Create an empty, unassigned box
    #[must_use]
    pub fn new(id: impl Into<BoxId>, box_number: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            box_number: box_number.into(),
            device_type: None,
            status: Status::New,
            assigned_technician: Assignee::Unassigned,
            devices: Vec::new(),
            record_key: None,
        }
    }

    /// Key used for box-level remote updates
    #[must_use]
    pub fn record_key(&self) -> &str {
        match self.record_key.as_deref() {
            Some(key) if !key.is_empty() => key,
            _ => self.id.as_str(),
        }
    }

    /// Look up a device by local id
    #[must_use]
    pub fn device(&self, id: &DeviceId) -> Option<&Device> {
        self.devices.iter().find(|device| &device.id == id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sample_box_json() -> serde_json::Value {
        json!({
            "id": "b-1",
            "boxNumber": 12,
            "deviceType": "Speaker",
            "status": "In Progress",
            "assignedTechnician": null,
            "salesforceId": "SF-BOX-1",
            "devices": [
                {
                    "id": 7,
                    "serialNumber": "SN-001",
                    "warrantyUntil": "2026-01-31",
                    "customerIssue": "No sound",
                    "status": "On Hold",
                    "pointOfError": "Amplifier",
                    "salesforceId": "SF-7"
                },
                {
                    "id": "d-2",
                    "serialNumber": "SN-002",
                    "status": "New"
                }
            ]
        })
    }

    #[test]
    fn test_box_deserializes_wire_format() {
        let record: BoxRecord = serde_json::from_value(sample_box_json()).unwrap();

        assert_eq!(record.id, BoxId::from("b-1"));
        assert_eq!(record.box_number, "12");
        assert_eq!(record.device_type.as_deref(), Some("Speaker"));
        assert_eq!(record.status, Status::InProgress);
        assert_eq!(record.assigned_technician, Assignee::Unassigned);
        assert_eq!(record.record_key(), "SF-BOX-1");
        assert_eq!(record.devices.len(), 2);

        let first = &record.devices[0];
        assert_eq!(first.id, DeviceId::from("7"));
        assert_eq!(first.warranty_date.as_deref(), Some("2026-01-31"));
        assert_eq!(first.status, Status::OnHold);
        assert_eq!(first.record_key(), "SF-7");

        let second = &record.devices[1];
        assert!(second.ticket_id.is_none());
        assert!(second.error_reason.is_none());
    }

    #[test]
    fn test_record_key_falls_back_to_local_id() {
        let mut device = Device::new("d-9", "SN-9");
        assert_eq!(device.record_key(), "d-9");

        device.ticket_id = Some(String::new());
        assert_eq!(device.record_key(), "d-9");

        device.ticket_id = Some("T-9".to_string());
        assert_eq!(device.record_key(), "T-9");

        let record = BoxRecord::new("b-2", "34");
        assert_eq!(record.record_key(), "b-2");
    }

    #[test]
    fn test_status_wire_names() {
        for status in Status::ALL {
            let encoded = serde_json::to_value(status).unwrap();
            assert_eq!(encoded, json!(status.as_str()));
            let decoded: Status = serde_json::from_value(encoded).unwrap();
            assert_eq!(decoded, status);
        }
    }

    #[test]
    fn test_status_from_form_value() {
        assert_eq!("In Progress".parse::<Status>().unwrap(), Status::InProgress);
        assert_eq!("on_hold".parse::<Status>().unwrap(), Status::OnHold);
        assert_eq!(" completed ".parse::<Status>().unwrap(), Status::Completed);
        assert_eq!(
            "Open".parse::<Status>().unwrap_err(),
            ParseStatusError("Open".to_string())
        );
    }

    #[test]
    fn test_assignee_sentinel_never_reaches_wire() {
        assert_eq!(Assignee::from_selection(UNASSIGNED), Assignee::Unassigned);
        assert_eq!(Assignee::from_selection("  "), Assignee::Unassigned);
        assert_eq!(
            Assignee::from_selection("Magnus"),
            Assignee::Technician("Magnus".to_string())
        );

        let encoded = serde_json::to_value(Assignee::from_selection(UNASSIGNED)).unwrap();
        assert_eq!(encoded, serde_json::Value::Null);

        let decoded: Assignee = serde_json::from_value(json!("Unassigned")).unwrap();
        assert!(decoded.is_unassigned());
        assert_eq!(decoded.as_selection(), UNASSIGNED);
    }

    #[test]
    fn test_box_lookup_device() {
        let record: BoxRecord = serde_json::from_value(sample_box_json()).unwrap();
        assert!(record.device(&DeviceId::from("d-2")).is_some());
        assert!(record.device(&DeviceId::from("missing")).is_none());
    }
}
