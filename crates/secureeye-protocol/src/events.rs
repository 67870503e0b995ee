//! Store change notifications
//!
//! Every successful mutation of a [`RecordStore`](crate::RecordStore) is
//! broadcast to its subscribers. Dashboards drain their subscription after
//! each update and re-derive their view from the store.

use secureeye_types::{ApprovalStatus, CameraId};
use std::sync::mpsc::Receiver;

use crate::store::Revision;

/// A change that was applied to the record store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// A record was appended
    Inserted {
        /// Id of the new record
        id: CameraId,
    },

    /// A record was replaced in place
    Replaced {
        /// Id of the replaced record
        id: CameraId,
        /// Revision after the replacement
        revision: Revision,
    },

    /// Only the approval status changed
    StatusChanged {
        /// Id of the record
        id: CameraId,
        /// Previous status
        from: ApprovalStatus,
        /// New status
        to: ApprovalStatus,
    },

    /// A record was removed
    Removed {
        /// Id of the removed record
        id: CameraId,
    },
}

impl StoreEvent {
    /// Id of the record the event is about
    #[must_use]
    pub const fn id(&self) -> &CameraId {
        match self {
            Self::Inserted { id }
            | Self::Replaced { id, .. }
            | Self::StatusChanged { id, .. }
            | Self::Removed { id } => id,
        }
    }
}

/// Receiving end of a store subscription
#[derive(Debug)]
pub struct Subscription {
    rx: Receiver<StoreEvent>,
}

impl Subscription {
    pub(crate) const fn new(rx: Receiver<StoreEvent>) -> Self {
        Self { rx }
    }

    /// Take every event published since the last drain, oldest first
    #[must_use]
    pub fn drain(&self) -> Vec<StoreEvent> {
        self.rx.try_iter().collect()
    }
}
