//! Error types for Secure Eye camera record management

use crate::camera::{ApprovalStatus, CameraId};
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for camera record management
#[derive(Error, Debug)]
pub enum Error {
    /// No record with the given id exists in the store
    #[error("Camera not found: {id}")]
    RecordNotFound {
        /// Id that was looked up
        id: CameraId,
    },

    /// A field failed validation
    #[error("Validation failed: {field} - {message}")]
    ValidationFailed {
        /// Field that failed validation
        field: String,
        /// Validation error message
        message: String,
    },

    /// The record changed after the draft was opened
    #[error("Camera {id} was modified concurrently (expected revision {expected}, found {found})")]
    ConcurrentModification {
        /// Id of the contested record
        id: CameraId,
        /// Revision the draft was based on
        expected: u64,
        /// Revision currently stored
        found: u64,
    },

    /// A record with this id is already stored
    #[error("Camera already exists: {id}")]
    DuplicateId {
        /// Id that collided
        id: CameraId,
    },

    /// A status action is not allowed from the current status
    #[error("Camera {id} cannot be {action} while {status}")]
    InvalidTransition {
        /// Id of the record
        id: CameraId,
        /// Current status
        status: ApprovalStatus,
        /// Attempted action, in past tense
        action: &'static str,
    },

    /// An edit or commit arrived with no record selected
    #[error("No camera is selected")]
    NothingSelected,

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Error message
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Create a new not-found error
    #[must_use]
    pub fn not_found<I: Into<CameraId>>(id: I) -> Self {
        Self::RecordNotFound { id: id.into() }
    }

    /// Create a new validation error
    #[must_use]
    pub fn validation<F: Into<String>, S: Into<String>>(field: F, message: S) -> Self {
        Self::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new configuration error
    #[must_use]
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Whether the error leaves the view usable with nothing lost.
    ///
    /// Missing records and rejected transitions are warnings; everything else
    /// is reported as an error notice.
    #[must_use]
    pub const fn is_benign(&self) -> bool {
        matches!(
            self,
            Self::RecordNotFound { .. } | Self::InvalidTransition { .. } | Self::NothingSelected
        )
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(errors: validator::ValidationErrors) -> Self {
        // Report the first failing field by name so the message is stable.
        let mut fields: Vec<(String, String)> = errors
            .field_errors()
            .iter()
            .map(|(field, errs)| {
                let message = errs
                    .first()
                    .and_then(|e| e.message.as_ref())
                    .map_or_else(|| "is invalid".to_string(), ToString::to_string);
                (field.to_string(), message)
            })
            .collect();
        fields.sort();

        fields.into_iter().next().map_or_else(
            || Self::validation("record", "is invalid"),
            |(field, message)| Self::ValidationFailed { field, message },
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic, clippy::uninlined_format_args)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::error::Error as StdError;
    use std::io;

    #[test]
    fn test_not_found_display() {
        let error = Error::not_found("CAM0009");
        assert_eq!(format!("{}", error), "Camera not found: CAM0009");
    }

    #[test]
    fn test_validation_display() {
        let error = Error::validation("name", "must not be empty");
        assert_eq!(
            format!("{}", error),
            "Validation failed: name - must not be empty"
        );
    }

    #[test]
    fn test_concurrent_modification_display() {
        let error = Error::ConcurrentModification {
            id: CameraId::from(2),
            expected: 1,
            found: 3,
        };
        assert_eq!(
            format!("{}", error),
            "Camera 2 was modified concurrently (expected revision 1, found 3)"
        );
    }

    #[test]
    fn test_invalid_transition_display() {
        let error = Error::InvalidTransition {
            id: CameraId::from("CAM0002"),
            status: ApprovalStatus::Approved,
            action: "declined",
        };
        assert_eq!(
            format!("{}", error),
            "Camera CAM0002 cannot be declined while approved"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "seed.json");
        let error = Error::from(io_error);

        assert!(matches!(error, Error::Io(_)));
        assert!(error.source().is_some());
        assert!(format!("{}", error).contains("I/O error"));
    }

    #[test]
    fn test_serialization_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{broken").unwrap_err();
        let error = Error::from(json_error);

        assert!(matches!(error, Error::Serialization(_)));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_benign_classification() {
        assert!(Error::not_found("x").is_benign());
        assert!(Error::NothingSelected.is_benign());
        assert!(!Error::validation("name", "empty").is_benign());
        assert!(!Error::configuration("bad").is_benign());
        assert!(
            !Error::DuplicateId {
                id: CameraId::from(1)
            }
            .is_benign()
        );
    }

    #[test]
    fn test_source_is_none_for_domain_errors() {
        assert!(Error::not_found("x").source().is_none());
        assert!(Error::NothingSelected.source().is_none());
    }
}
