//! Test helper functions and utilities

use secureeye_protocol::{RecordStore, StoreEvent};
use secureeye_types::{ApprovalStatus, CameraId, CameraRecord};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize test logging (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init();
    });
}

/// Ids in store order
pub fn ids(store: &RecordStore) -> Vec<String> {
    store.iter().map(|record| record.id.to_string()).collect()
}

/// Every field except status, for comparing records across a decision
pub fn without_status(record: &CameraRecord) -> CameraRecord {
    CameraRecord {
        status: ApprovalStatus::default(),
        ..record.clone()
    }
}

/// Ids of removal events
pub fn removed_ids(events: &[StoreEvent]) -> Vec<CameraId> {
    events
        .iter()
        .filter(|event| matches!(event, StoreEvent::Removed { .. }))
        .map(|event| event.id().clone())
        .collect()
}
