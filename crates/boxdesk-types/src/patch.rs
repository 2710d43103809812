//! Partial device edits

use crate::model::{Device, DeviceId, Status};
use serde::{Deserialize, Serialize};

/// Field changes for one or more devices
///
/// Every `Some` field overwrites the device's value; `None` leaves it alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevicePatch {
    /// New repair status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,

    /// New point of error
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point_of_error: Option<String>,

    /// New error reason
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_reason: Option<String>,

    /// New error analysis
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_analysis: Option<String>,

    /// New internal comments
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_comments: Option<String>,
}

impl DevicePatch {
    /// Patch that only changes the status
    #[must_use]
    pub fn status(status: Status) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    /// Set the point of error
    #[must_use]
    pub fn with_point_of_error(mut self, value: impl Into<String>) -> Self {
        self.point_of_error = Some(value.into());
        self
    }

    /// Set the error reason
    #[must_use]
    pub fn with_error_reason(mut self, value: impl Into<String>) -> Self {
        self.error_reason = Some(value.into());
        self
    }

    /// Set the error analysis
    #[must_use]
    pub fn with_error_analysis(mut self, value: impl Into<String>) -> Self {
        self.error_analysis = Some(value.into());
        self
    }

    /// Set the internal comments
    #[must_use]
    pub fn with_internal_comments(mut self, value: impl Into<String>) -> Self {
        self.internal_comments = Some(value.into());
        self
    }

    /// Whether the patch changes nothing
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.point_of_error.is_none()
            && self.error_reason.is_none()
            && self.error_analysis.is_none()
            && self.internal_comments.is_none()
    }

    /// Merge the patch into a copy of `device`
    #[must_use]
    pub fn apply_to(&self, device: &Device) -> Device {
        let mut merged = device.clone();
        if let Some(status) = self.status {
            merged.status = status;
        }
        if let Some(value) = &self.point_of_error {
            merged.point_of_error = Some(value.clone());
        }
        if let Some(value) = &self.error_reason {
            merged.error_reason = Some(value.clone());
        }
        if let Some(value) = &self.error_analysis {
            merged.error_analysis = Some(value.clone());
        }
        if let Some(value) = &self.internal_comments {
            merged.internal_comments = Some(value.clone());
        }
        merged
    }

    /// New collection where the targeted devices carry the patch and every
    /// other device is an untouched copy
    #[must_use]
    pub fn apply(&self, devices: &[Device], targets: &[DeviceId]) -> Vec<Device> {
        devices
            .iter()
            .map(|device| {
                if targets.contains(&device.id) {
                    self.apply_to(device)
                } else {
                    device.clone()
                }
            })
            .collect()
    }
}
