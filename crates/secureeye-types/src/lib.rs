//! Validated camera record types for Secure Eye
//!
//! No I/O happens here: these are the shapes the record store, the dashboards
//! and the console all agree on.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod camera;
pub mod error;

// Re-export commonly used types
pub use camera::{ApprovalStatus, CameraDraft, CameraId, CameraRecord, CameraType, FieldChange};
pub use error::{Error, Result};
