//! Error types for record store access and edit validation

use boxdesk_types::DeviceId;
use thiserror::Error;

/// Result type alias for sync operations
pub type SyncResult<T> = Result<T, SyncError>;

/// Errors raised while talking to the record store or validating an edit
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyncError {
    /// The request never produced a response
    #[error("Request to {endpoint} failed: {message}")]
    Transport {
        /// Endpoint path
        endpoint: String,
        /// Underlying error message
        message: String,
    },

    /// The response body was not valid JSON
    #[error("Malformed response body from {endpoint}: {message}")]
    MalformedBody {
        /// Endpoint path
        endpoint: String,
        /// Parser message
        message: String,
    },

    /// The response was JSON of the wrong shape
    #[error("Unexpected response shape from {endpoint}: expected {expected}")]
    UnexpectedShape {
        /// Endpoint path
        endpoint: String,
        /// What the endpoint should have returned
        expected: String,
    },

    /// The backend answered with a non-success status
    #[error("{endpoint} rejected the update with status {status}")]
    Rejected {
        /// Endpoint path
        endpoint: String,
        /// HTTP status code
        status: u16,
    },

    /// The edit was refused before anything changed
    #[error("Validation error: {message}")]
    Validation {
        /// Error message
        message: String,
    },

    /// A targeted device is not part of the box
    #[error("Device {0} does not belong to this box")]
    UnknownDevice(DeviceId),
}

impl SyncError {
    /// Create a transport error
    pub fn transport(endpoint: impl Into<String>, message: impl std::fmt::Display) -> Self {
        Self::Transport {
            endpoint: endpoint.into(),
            message: message.to_string(),
        }
    }

    /// Create a malformed body error
    pub fn malformed(endpoint: impl Into<String>, message: impl std::fmt::Display) -> Self {
        Self::MalformedBody {
            endpoint: endpoint.into(),
            message: message.to_string(),
        }
    }

    /// Create an unexpected shape error
    pub fn unexpected_shape(endpoint: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::UnexpectedShape {
            endpoint: endpoint.into(),
            expected: expected.into(),
        }
    }

    /// Create a rejection error
    pub fn rejected(endpoint: impl Into<String>, status: u16) -> Self {
        Self::Rejected {
            endpoint: endpoint.into(),
            status,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Whether the error came from the remote side rather than from the edit
    pub const fn is_remote(&self) -> bool {
        matches!(
            self,
            Self::Transport { .. }
                | Self::MalformedBody { .. }
                | Self::UnexpectedShape { .. }
                | Self::Rejected { .. }
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = SyncError::rejected("/update_service_ticket", 500);
        assert_eq!(
            error.to_string(),
            "/update_service_ticket rejected the update with status 500"
        );

        let error = SyncError::unexpected_shape("/boxes", "a JSON array");
        assert!(error.to_string().contains("expected a JSON array"));

        let error = SyncError::UnknownDevice(DeviceId::from("d-9"));
        assert_eq!(error.to_string(), "Device d-9 does not belong to this box");
    }

    #[test]
    fn test_remote_classification() {
        assert!(SyncError::transport("/boxes", "connection refused").is_remote());
        assert!(SyncError::malformed("/boxes", "EOF").is_remote());
        assert!(!SyncError::validation("no devices selected").is_remote());
        assert!(!SyncError::UnknownDevice(DeviceId::from("x")).is_remote());
    }
}
