//! User camera panel
//!
//! Camera cards with an editable detail surface. Edits go into a draft and
//! reach the store only on save; cameras can be deleted outright.

use secureeye_types::{CameraDraft, CameraId, CameraRecord, Error, FieldChange};
use tracing::{debug, info, warn};

use crate::dispatcher::{Change, Mutation};
use crate::events::{StoreEvent, Subscription};
use crate::navigation::{Navigator, Route};
use crate::notice::Notice;
use crate::selection::Selection;
use crate::store::RecordStore;

/// Input events of the user dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserMessage {
    /// "Details" clicked on a card
    OpenDetails(CameraId),
    /// A field of the open draft changed
    EditField(FieldChange),
    /// "Save Changes" clicked
    SaveChanges,
    /// "Cancel" clicked or the surface was dismissed
    Cancel,
    /// "Delete" clicked on a card
    Delete(CameraId),
    /// The add-camera form produced a new camera
    CameraAdded(Box<CameraRecord>),
    /// "Add New Camera" clicked
    AddCamera,
    /// "Apply for Subsidy" clicked
    ApplyForSubsidy,
    /// Notice dismissed
    DismissNotice,
}

/// One camera card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCard {
    /// Camera id
    pub id: CameraId,
    /// Card title
    pub name: String,
    /// `"{type} Camera - {company}"`
    pub subtitle: String,
    /// Camera location
    pub location: String,
    /// Hardware model
    pub model: String,
    /// Coverage range
    pub range: String,
    /// Sharing switch
    pub sharing: bool,
    /// Verified badge
    pub verified: bool,
}

impl From<&CameraRecord> for UserCard {
    fn from(record: &CameraRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            subtitle: format!("{} Camera - {}", record.camera_type, record.company_name),
            location: record.location.clone(),
            model: record.model.clone(),
            range: record.range.clone(),
            sharing: record.sharing,
            verified: record.is_verified,
        }
    }
}

/// Contents of the open edit surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDetail {
    /// Record the draft belongs to
    pub target: CameraId,
    /// Working copy shown in the form
    pub draft: CameraDraft,
    /// Whether the draft has unsaved edits
    pub dirty: bool,
}

/// Everything needed to render the user dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserView {
    /// One card per camera, in store order
    pub cards: Vec<UserCard>,
    /// Edit surface, when open
    pub detail: Option<UserDetail>,
    /// Message from the last action
    pub notice: Option<Notice>,
}

impl UserView {
    /// Whether the "No Cameras Found" state applies
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Controller for the user camera panel
#[derive(Debug)]
pub struct UserDashboard<N> {
    store: RecordStore,
    events: Subscription,
    selection: Selection,
    notice: Option<Notice>,
    navigator: N,
}

impl<N: Navigator> UserDashboard<N> {
    /// Take ownership of a seeded store and a navigator
    #[must_use]
    pub fn new(mut store: RecordStore, navigator: N) -> Self {
        let events = store.subscribe();
        Self {
            store,
            events,
            selection: Selection::default(),
            notice: None,
            navigator,
        }
    }

    /// Handle one input event and return the store changes it caused
    pub fn update(&mut self, message: UserMessage) -> Vec<StoreEvent> {
        match message {
            UserMessage::OpenDetails(id) => self.open(&id),
            UserMessage::EditField(change) => {
                let field = change.field_name();
                match self.selection.edit(change) {
                    Ok(()) => debug!(field, "Draft field edited"),
                    Err(err) => self.reject(&err),
                }
            }
            UserMessage::SaveChanges => self.save(),
            UserMessage::Cancel => {
                if let Some(id) = self.selection.cancel() {
                    debug!(camera_id = %id, "Draft discarded");
                }
            }
            UserMessage::Delete(id) => self.dispatch(Mutation::Remove { id }),
            UserMessage::CameraAdded(record) => self.dispatch(Mutation::Insert(*record)),
            UserMessage::AddCamera => self.navigator.navigate(Route::AddCamera),
            UserMessage::ApplyForSubsidy => self.navigator.navigate(Route::SubsidyForm),
            UserMessage::DismissNotice => self.notice = None,
        }
        self.sync()
    }

    fn open(&mut self, id: &CameraId) {
        match (self.store.get(id), self.store.revision(id)) {
            (Some(record), Some(revision)) => {
                if let Some(previous) = self.selection.open(record, revision) {
                    debug!(camera_id = %previous, "Draft replaced by another selection");
                }
            }
            _ => self.reject(&Error::not_found(id.clone())),
        }
    }

    fn save(&mut self) {
        let mutation = self
            .selection
            .commit()
            .and_then(|commit| Mutation::from_commit(commit, &self.store));
        match mutation {
            Ok(mutation) => self.dispatch(mutation),
            Err(err) => self.reject(&err),
        }
    }

    fn dispatch(&mut self, mutation: Mutation) {
        match self.store.apply(mutation) {
            Ok(outcome) => {
                let verb = match outcome.change {
                    Change::Inserted => "added",
                    Change::Replaced | Change::StatusChanged { .. } => "updated",
                    Change::Removed => "deleted",
                };
                info!(camera_id = %outcome.id, action = verb, "Camera change saved");
                self.notice = Some(Notice::info(format!("Camera {} {verb}", outcome.id)));
            }
            Err(err) => self.reject(&err),
        }
    }

    fn reject(&mut self, err: &Error) {
        warn!(error = %err, "User action rejected");
        self.notice = Some(Notice::from_error(err));
    }

    fn sync(&mut self) -> Vec<StoreEvent> {
        let events = self.events.drain();
        for event in &events {
            if let StoreEvent::Removed { id } = event
                && self.selection.clear_if_target(id)
            {
                debug!(camera_id = %id, "Selection cleared after removal");
            }
        }
        events
    }

    /// Derive the current view
    #[must_use]
    pub fn view(&self) -> UserView {
        let detail = self.selection.selected().map(|selected| UserDetail {
            target: selected.target().clone(),
            draft: selected.draft().clone(),
            dirty: selected.is_dirty(),
        });

        UserView {
            cards: self.store.iter().map(UserCard::from).collect(),
            detail,
            notice: self.notice.clone(),
        }
    }

    /// The underlying store
    #[must_use]
    pub const fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Current selection
    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Message from the last action
    #[must_use]
    pub const fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// The navigator handed in at construction
    #[must_use]
    pub const fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Mutable access to the navigator
    pub const fn navigator_mut(&mut self) -> &mut N {
        &mut self.navigator
    }

    /// Give the store back
    #[must_use]
    pub fn into_store(self) -> RecordStore {
        self.store
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::navigation::RecordingNavigator;
    use crate::notice::NoticeLevel;
    use pretty_assertions::assert_eq;
    use secureeye_types::CameraType;

    fn dashboard() -> UserDashboard<RecordingNavigator> {
        let mut first = CameraRecord::new(1, "Front Door Camera", "123 Main St");
        first.company_name = "SecureTech".to_string();
        let store = RecordStore::with_records([
            first,
            CameraRecord::new(2, "Back Yard Camera", "123 Main St"),
            CameraRecord::new(3, "Shop Entrance", "456 Market St"),
        ])
        .unwrap();
        UserDashboard::new(store, RecordingNavigator::new())
    }

    #[test]
    fn test_delete_removes_one_card() {
        let mut user = dashboard();
        let events = user.update(UserMessage::Delete(CameraId::from(2)));

        assert_eq!(events, vec![StoreEvent::Removed { id: CameraId::from(2) }]);
        let ids: Vec<&str> = user.store().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
        assert_eq!(user.notice().unwrap().message, "Camera 2 deleted");
    }

    #[test]
    fn test_delete_twice_matches_once() {
        let mut user = dashboard();
        user.update(UserMessage::Delete(CameraId::from(2)));
        let events = user.update(UserMessage::Delete(CameraId::from(2)));

        assert!(events.is_empty());
        assert_eq!(user.store().len(), 2);
        assert_eq!(user.notice().unwrap().level, NoticeLevel::Warning);
    }

    #[test]
    fn test_edit_then_save() {
        let mut user = dashboard();
        user.update(UserMessage::OpenDetails(CameraId::from(1)));
        user.update(UserMessage::EditField(FieldChange::Name(
            "Porch Camera".to_string(),
        )));
        user.update(UserMessage::EditField(FieldChange::CameraType(
            CameraType::Public,
        )));

        assert!(user.view().detail.unwrap().dirty);
        assert_eq!(
            user.store().get(&CameraId::from(1)).unwrap().name,
            "Front Door Camera"
        );

        let events = user.update(UserMessage::SaveChanges);

        assert_eq!(events.len(), 1);
        assert!(!user.selection().is_open());
        let saved = user.store().get(&CameraId::from(1)).unwrap();
        assert_eq!(saved.name, "Porch Camera");
        assert_eq!(saved.camera_type, CameraType::Public);
    }

    #[test]
    fn test_cancel_discards_edits() {
        let mut user = dashboard();
        user.update(UserMessage::OpenDetails(CameraId::from(3)));
        user.update(UserMessage::EditField(FieldChange::Sharing(true)));
        let events = user.update(UserMessage::Cancel);

        assert!(events.is_empty());
        assert!(!user.selection().is_open());
        assert!(!user.store().get(&CameraId::from(3)).unwrap().sharing);
    }

    #[test]
    fn test_blank_name_keeps_draft_open() {
        let mut user = dashboard();
        user.update(UserMessage::OpenDetails(CameraId::from(1)));
        user.update(UserMessage::EditField(FieldChange::Name("  ".to_string())));
        let events = user.update(UserMessage::SaveChanges);

        assert!(events.is_empty());
        assert!(user.selection().is_open());
        let notice = user.notice().unwrap();
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.message, "Validation failed: name - must not be empty");
    }

    #[test]
    fn test_edit_without_selection_warns() {
        let mut user = dashboard();
        user.update(UserMessage::EditField(FieldChange::Range("5m".to_string())));

        assert_eq!(user.notice().unwrap().message, "No camera is selected");
    }

    #[test]
    fn test_deleting_open_camera_clears_selection() {
        let mut user = dashboard();
        user.update(UserMessage::OpenDetails(CameraId::from(2)));
        user.update(UserMessage::Delete(CameraId::from(2)));

        assert!(!user.selection().is_open());
        assert!(user.view().detail.is_none());
    }

    #[test]
    fn test_camera_added_appends_card() {
        let mut user = dashboard();
        let record = CameraRecord::new(4, "Garage Camera", "9 Side St");
        user.update(UserMessage::CameraAdded(Box::new(record)));

        let view = user.view();
        assert_eq!(view.cards.len(), 4);
        assert_eq!(view.cards[3].name, "Garage Camera");
    }

    #[test]
    fn test_card_subtitle() {
        let view = dashboard().view();
        assert_eq!(view.cards[0].subtitle, "Private Camera - SecureTech");
    }

    #[test]
    fn test_navigation_buttons() {
        let mut user = dashboard();
        user.update(UserMessage::AddCamera);
        user.update(UserMessage::ApplyForSubsidy);

        assert_eq!(
            user.navigator().visited(),
            &[Route::AddCamera, Route::SubsidyForm]
        );
    }

    #[test]
    fn test_empty_store_view() {
        let user = UserDashboard::new(RecordStore::new(), RecordingNavigator::new());
        assert!(user.view().is_empty());
    }
}
