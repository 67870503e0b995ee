//! Seed data for the record store
//!
//! Built-in fixtures for both dashboards, plus loading a JSON array of camera
//! records in the camelCase shape the dashboards exchange.

use chrono::NaiveDate;
use secureeye_protocol::RecordStore;
use secureeye_types::{ApprovalStatus, CameraRecord, CameraType, Error, Result};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

use crate::config::DashboardConfig;

/// Which dashboard's fixtures to use
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SeedSet {
    /// Four cameras awaiting or past admin review
    #[default]
    Admin,
    /// Three cameras owned by one user
    User,
}

impl SeedSet {
    /// The built-in records of this set
    #[must_use]
    pub fn records(self) -> Vec<CameraRecord> {
        match self {
            Self::Admin => admin_cameras(),
            Self::User => user_cameras(),
        }
    }
}

impl fmt::Display for SeedSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::User => write!(f, "user"),
        }
    }
}

impl FromStr for SeedSet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "user" => Ok(Self::User),
            other => Err(Error::configuration(format!("unknown seed set '{other}'"))),
        }
    }
}

fn may_2023(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 5, day).unwrap_or_default()
}

/// The admin approval queue fixtures
#[must_use]
pub fn admin_cameras() -> Vec<CameraRecord> {
    [
        ("CAM0001", "Front Door Camera", "123 Main St", ApprovalStatus::Pending, "user@example.com", 15),
        ("CAM0002", "Backyard Camera", "456 Elm St", ApprovalStatus::Approved, "user2@example.com", 16),
        ("CAM0003", "Garage Camera", "789 Oak St", ApprovalStatus::Pending, "user3@example.com", 17),
        ("CAM0004", "Side Entrance Camera", "101 Pine St", ApprovalStatus::Approved, "user4@example.com", 18),
    ]
    .into_iter()
    .map(|(id, name, location, status, added_by, day)| {
        CameraRecord::new(id, name, location)
            .with_status(status)
            .with_provenance(added_by, may_2023(day))
    })
    .collect()
}

/// The user camera panel fixtures
#[must_use]
pub fn user_cameras() -> Vec<CameraRecord> {
    [
        (1, "Front Door Camera", "SecureTech", CameraType::Private, "ST-100", "ST12345", "50m", "123 Main St", true, true),
        (2, "Back Yard Camera", "SafeView", CameraType::Private, "SV-200", "SV67890", "30m", "123 Main St", false, false),
        (3, "Shop Entrance", "CityWatch", CameraType::Public, "CW-300", "CW11111", "100m", "456 Market St", true, true),
    ]
    .into_iter()
    .map(
        |(id, name, company, camera_type, model, serial_no, range, location, sharing, verified)| {
            let mut record = CameraRecord::new(id, name, location);
            record.number = Some(id);
            record.company_name = company.to_string();
            record.camera_type = camera_type;
            record.model = model.to_string();
            record.serial_no = serial_no.to_string();
            record.range = range.to_string();
            record.sharing = sharing;
            record.is_verified = verified;
            record
        },
    )
    .collect()
}

/// Read a JSON array of camera records
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read, [`Error::Serialization`]
/// if it is not a list of records, or [`Error::ValidationFailed`] if a record
/// has a blank required field.
pub fn load_seed_file(path: &Path) -> Result<Vec<CameraRecord>> {
    let content = std::fs::read_to_string(path)?;
    let records: Vec<CameraRecord> = serde_json::from_str(&content)?;
    for record in &records {
        record.check()?;
    }
    debug!(path = %path.display(), count = records.len(), "Loaded seed file");
    Ok(records)
}

/// Build the store a dashboard starts with: the configured seed file if any,
/// otherwise the built-in fixtures of `set`
///
/// # Errors
///
/// Propagates seed file errors, and [`Error::DuplicateId`] if two seed records
/// share an id.
pub fn seed_store(config: &DashboardConfig, set: SeedSet) -> Result<RecordStore> {
    let records = match &config.seed_file {
        Some(path) => load_seed_file(path)?,
        None => set.records(),
    };
    let store = RecordStore::with_records(records)?;
    info!(seed = %set, count = store.len(), "Record store ready");
    Ok(store)
}
