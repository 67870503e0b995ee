//! Admin approval queue
//!
//! A searchable camera table with a read-only detail surface. Pending cameras
//! can be approved or declined; there is no delete.

use chrono::NaiveDate;
use secureeye_types::{ApprovalStatus, CameraId, CameraRecord, Error, Result};
use tracing::{info, warn};

use crate::dispatcher::Mutation;
use crate::events::{StoreEvent, Subscription};
use crate::filter::{SearchQuery, filter_records};
use crate::notice::Notice;
use crate::selection::{SelectedCamera, Selection};
use crate::store::RecordStore;

/// Input events of the admin dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminMessage {
    /// Search box contents changed
    SearchChanged(String),
    /// "Details" clicked on a row
    OpenDetails(CameraId),
    /// Detail surface closed
    CloseDetails,
    /// "Approve" clicked
    Approve(CameraId),
    /// "Decline" clicked
    Decline(CameraId),
    /// Notice dismissed
    DismissNotice,
}

/// Outcome an administrator can give a pending camera
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// Accept the camera
    Approve,
    /// Reject the camera
    Decline,
}

impl Decision {
    /// Status the camera ends up with
    #[must_use]
    pub const fn status(self) -> ApprovalStatus {
        match self {
            Self::Approve => ApprovalStatus::Approved,
            Self::Decline => ApprovalStatus::Declined,
        }
    }

    /// Past-tense verb used in messages
    #[must_use]
    pub const fn verb(self) -> &'static str {
        match self {
            Self::Approve => "approved",
            Self::Decline => "declined",
        }
    }
}

/// One table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminRow {
    /// Camera id
    pub id: CameraId,
    /// Camera name
    pub name: String,
    /// Camera location
    pub location: String,
    /// Who registered it
    pub added_by: String,
    /// When it was registered
    pub date_added: NaiveDate,
    /// Approval status badge
    pub status: ApprovalStatus,
}

impl From<&CameraRecord> for AdminRow {
    fn from(record: &CameraRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            location: record.location.clone(),
            added_by: record.added_by.clone(),
            date_added: record.date_added,
            status: record.status,
        }
    }
}

/// Contents of the open detail surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminDetail {
    /// The selected camera as last read from the store
    pub record: CameraRecord,
    /// Whether approve/decline are offered
    pub can_decide: bool,
}

/// Everything needed to render the admin dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminView {
    /// Search box contents
    pub search: String,
    /// Matching rows in store order
    pub rows: Vec<AdminRow>,
    /// Detail surface, when open
    pub detail: Option<AdminDetail>,
    /// Message from the last action
    pub notice: Option<Notice>,
}

/// Controller for the admin approval queue
#[derive(Debug)]
pub struct AdminDashboard {
    store: RecordStore,
    events: Subscription,
    search: SearchQuery,
    selection: Selection,
    notice: Option<Notice>,
}

impl AdminDashboard {
    /// Take ownership of a seeded store
    #[must_use]
    pub fn new(mut store: RecordStore) -> Self {
        let events = store.subscribe();
        Self {
            store,
            events,
            search: SearchQuery::default(),
            selection: Selection::default(),
            notice: None,
        }
    }

    /// Handle one input event and return the store changes it caused
    pub fn update(&mut self, message: AdminMessage) -> Vec<StoreEvent> {
        match message {
            AdminMessage::SearchChanged(text) => self.search = SearchQuery::new(text),
            AdminMessage::OpenDetails(id) => self.open(&id),
            AdminMessage::CloseDetails => {
                self.selection.cancel();
            }
            AdminMessage::Approve(id) => self.decide(&id, Decision::Approve),
            AdminMessage::Decline(id) => self.decide(&id, Decision::Decline),
            AdminMessage::DismissNotice => self.notice = None,
        }
        self.sync()
    }

    fn open(&mut self, id: &CameraId) {
        match (self.store.get(id), self.store.revision(id)) {
            (Some(record), Some(revision)) => {
                self.selection.open(record, revision);
            }
            _ => self.reject(&Error::not_found(id.clone())),
        }
    }

    fn decide(&mut self, id: &CameraId, decision: Decision) {
        match self.try_decide(id, decision) {
            Ok(()) => {
                info!(camera_id = %id, status = %decision.status(), "Camera decision recorded");
                self.notice = Some(Notice::info(format!("Camera {id} {}", decision.verb())));
                self.selection.cancel();
            }
            Err(err) => {
                // A conflicting or missing target makes the open detail stale.
                if matches!(
                    err,
                    Error::RecordNotFound { .. } | Error::ConcurrentModification { .. }
                ) {
                    self.selection.clear_if_target(id);
                }
                self.reject(&err);
            }
        }
    }

    fn try_decide(&mut self, id: &CameraId, decision: Decision) -> Result<()> {
        let current = self
            .store
            .get(id)
            .map(|record| record.status)
            .ok_or_else(|| Error::not_found(id.clone()))?;
        if !current.is_pending() {
            return Err(Error::InvalidTransition {
                id: id.clone(),
                status: current,
                action: decision.verb(),
            });
        }

        let expected = self
            .selection
            .selected()
            .filter(|selected| selected.target() == id)
            .map(SelectedCamera::base_revision);
        self.store.apply(Mutation::SetStatus {
            id: id.clone(),
            status: decision.status(),
            expected,
        })?;
        Ok(())
    }

    fn reject(&mut self, err: &Error) {
        warn!(error = %err, "Admin action rejected");
        self.notice = Some(Notice::from_error(err));
    }

    fn sync(&mut self) -> Vec<StoreEvent> {
        let events = self.events.drain();
        for event in &events {
            if let StoreEvent::Removed { id } = event {
                self.selection.clear_if_target(id);
            }
        }
        events
    }

    /// Records matching the current search, in store order
    #[must_use]
    pub fn visible(&self) -> Vec<&CameraRecord> {
        filter_records(self.store.iter(), &self.search)
    }

    /// Derive the current view
    #[must_use]
    pub fn view(&self) -> AdminView {
        let detail = self.selection.target().and_then(|id| {
            self.store.get(id).map(|record| AdminDetail {
                record: record.clone(),
                can_decide: record.status.is_pending(),
            })
        });

        AdminView {
            search: self.search.as_str().to_string(),
            rows: self.visible().into_iter().map(AdminRow::from).collect(),
            detail,
            notice: self.notice.clone(),
        }
    }

    /// The underlying store
    #[must_use]
    pub const fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Mutable access to the store, for changes made outside this view
    pub const fn store_mut(&mut self) -> &mut RecordStore {
        &mut self.store
    }

    /// Current selection
    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Current search query
    #[must_use]
    pub const fn search(&self) -> &SearchQuery {
        &self.search
    }

    /// Message from the last action
    #[must_use]
    pub const fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Give the store back
    #[must_use]
    pub fn into_store(self) -> RecordStore {
        self.store
    }
}
