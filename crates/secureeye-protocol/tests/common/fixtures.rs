//! Test fixtures and sample data

use chrono::NaiveDate;
use secureeye_protocol::RecordStore;
use secureeye_types::{ApprovalStatus, CameraRecord, CameraType};

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 5, day).unwrap()
}

/// The two-camera admin queue used by the approval scenarios
pub fn admin_queue() -> Vec<CameraRecord> {
    vec![
        CameraRecord::new("CAM0001", "Front Door Camera", "123 Main St")
            .with_provenance("john.doe@example.com", date(15)),
        CameraRecord::new("CAM0002", "Backyard Camera", "456 Elm St")
            .with_provenance("jane.smith@example.com", date(16))
            .with_status(ApprovalStatus::Approved),
    ]
}

/// A user-owned camera with every descriptive field filled in
pub fn user_camera(
    id: u32,
    name: &str,
    camera_type: CameraType,
    company: &str,
    location: &str,
) -> CameraRecord {
    let mut record = CameraRecord::new(id, name, location);
    record.number = Some(id);
    record.camera_type = camera_type;
    record.company_name = company.to_string();
    record.model = format!("{}-{id}00", company.get(..2).unwrap_or(company).to_uppercase());
    record.range = "50m".to_string();
    record
}

/// The three-camera user panel
pub fn user_cameras() -> Vec<CameraRecord> {
    vec![
        user_camera(1, "Front Door Camera", CameraType::Private, "SecureTech", "123 Main St"),
        user_camera(2, "Back Yard Camera", CameraType::Private, "SafeView", "123 Main St"),
        user_camera(3, "Shop Entrance", CameraType::Public, "CityWatch", "456 Market St"),
    ]
}

/// Store seeded with `records`
pub fn store_of(records: Vec<CameraRecord>) -> RecordStore {
    RecordStore::with_records(records).unwrap()
}
