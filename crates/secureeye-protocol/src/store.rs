//! In-memory camera record store
//!
//! Holds the ordered list of camera records for one dashboard session. Ids are
//! unique at all times and a record's id never changes. Every insert and every
//! change stamps the record with the next value of one store-wide revision
//! counter, so a draft opened against an older revision can be detected when it
//! is committed. Revisions are never reused, even when a removed id is added
//! again.

use secureeye_types::{ApprovalStatus, CameraId, CameraRecord, Error, Result};
use std::fmt;
use std::sync::mpsc::{self, Sender};
use tracing::debug;

use crate::events::{StoreEvent, Subscription};

/// Store-wide change counter, stamped on a record each time it changes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Revision(u64);

impl Revision {
    /// Counter value before any record has been stamped
    pub const INITIAL: Self = Self(0);

    /// Raw counter value
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone)]
struct Entry {
    record: CameraRecord,
    revision: Revision,
}

/// Ordered, id-unique collection of camera records
#[derive(Debug, Default)]
pub struct RecordStore {
    entries: Vec<Entry>,
    last_revision: Revision,
    subscribers: Vec<Sender<StoreEvent>>,
}

impl RecordStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with `records`, in order
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateId`] if two records share an id, or
    /// [`Error::ValidationFailed`] if a record has a blank required field.
    pub fn with_records<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = CameraRecord>,
    {
        let mut store = Self::new();
        for record in records {
            store.insert(record)?;
        }
        debug!(count = store.len(), "Seeded record store");
        Ok(store)
    }

    /// Number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether a record with `id` exists
    #[must_use]
    pub fn contains(&self, id: &CameraId) -> bool {
        self.position(id).is_some()
    }

    /// Look up a record by id
    #[must_use]
    pub fn get(&self, id: &CameraId) -> Option<&CameraRecord> {
        self.entries
            .iter()
            .find(|entry| &entry.record.id == id)
            .map(|entry| &entry.record)
    }

    /// Current revision of a record
    #[must_use]
    pub fn revision(&self, id: &CameraId) -> Option<Revision> {
        self.entries
            .iter()
            .find(|entry| &entry.record.id == id)
            .map(|entry| entry.revision)
    }

    /// Records in store order
    pub fn iter(&self) -> impl Iterator<Item = &CameraRecord> + '_ {
        self.entries.iter().map(|entry| &entry.record)
    }

    /// Owned copy of all records in store order
    #[must_use]
    pub fn to_vec(&self) -> Vec<CameraRecord> {
        self.iter().cloned().collect()
    }

    /// Register for change notifications
    pub fn subscribe(&mut self) -> Subscription {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        Subscription::new(rx)
    }

    /// Append a new record
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateId`] if the id is taken, or
    /// [`Error::ValidationFailed`] if a required field is blank. The store is
    /// unchanged on error.
    pub fn insert(&mut self, record: CameraRecord) -> Result<Revision> {
        if self.contains(&record.id) {
            return Err(Error::DuplicateId { id: record.id });
        }
        record.check()?;

        let id = record.id.clone();
        let revision = self.next_revision();
        self.entries.push(Entry { record, revision });
        debug!(camera_id = %id, %revision, "Inserted camera record");
        self.emit(&StoreEvent::Inserted { id });
        Ok(revision)
    }

    /// Replace the record matching `id` without reordering the list
    ///
    /// # Errors
    ///
    /// Returns [`Error::RecordNotFound`] if no record matches, or
    /// [`Error::ValidationFailed`] if `updated` changes the id or provenance or
    /// has a blank required field. The store is unchanged on error.
    pub fn replace(&mut self, id: &CameraId, updated: CameraRecord) -> Result<Revision> {
        self.replace_checked(id, updated, None)
    }

    /// Replace the record matching `id` only if it is still at `expected`
    ///
    /// # Errors
    ///
    /// Everything [`RecordStore::replace`] returns, plus
    /// [`Error::ConcurrentModification`] when the stored revision moved on.
    pub fn replace_if_current(
        &mut self,
        id: &CameraId,
        updated: CameraRecord,
        expected: Revision,
    ) -> Result<Revision> {
        self.replace_checked(id, updated, Some(expected))
    }

    fn replace_checked(
        &mut self,
        id: &CameraId,
        updated: CameraRecord,
        expected: Option<Revision>,
    ) -> Result<Revision> {
        let entry = self.entry(id)?;
        check_revision(id, entry.revision, expected)?;
        if &updated.id != id {
            return Err(Error::validation("id", "cannot change"));
        }
        if !entry.record.same_origin(&updated) {
            return Err(Error::validation("addedBy", "provenance cannot change"));
        }
        updated.check()?;

        if entry.record == updated {
            return Ok(entry.revision);
        }

        let revision = self.next_revision();
        let entry = self.entry_mut(id)?;
        entry.record = updated;
        entry.revision = revision;

        debug!(camera_id = %id, %revision, "Replaced camera record");
        self.emit(&StoreEvent::Replaced {
            id: id.clone(),
            revision,
        });
        Ok(revision)
    }

    /// Change only the approval status of a record
    ///
    /// Returns the previous status. Setting the status a record already has
    /// changes nothing and publishes no event.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RecordNotFound`] if no record matches.
    pub fn set_status(&mut self, id: &CameraId, status: ApprovalStatus) -> Result<ApprovalStatus> {
        self.set_status_checked(id, status, None)
    }

    pub(crate) fn set_status_checked(
        &mut self,
        id: &CameraId,
        status: ApprovalStatus,
        expected: Option<Revision>,
    ) -> Result<ApprovalStatus> {
        let entry = self.entry(id)?;
        check_revision(id, entry.revision, expected)?;

        let previous = entry.record.status;
        if previous == status {
            return Ok(previous);
        }
        let revision = self.next_revision();
        let entry = self.entry_mut(id)?;
        entry.record.status = status;
        entry.revision = revision;

        debug!(camera_id = %id, from = %previous, to = %status, "Changed camera status");
        self.emit(&StoreEvent::StatusChanged {
            id: id.clone(),
            from: previous,
            to: status,
        });
        Ok(previous)
    }

    /// Remove the record matching `id`
    ///
    /// # Errors
    ///
    /// Returns [`Error::RecordNotFound`] if no record matches; the store is
    /// unchanged, so removing twice ends in the same state as removing once.
    pub fn remove_by_id(&mut self, id: &CameraId) -> Result<CameraRecord> {
        let index = self.position(id).ok_or_else(|| Error::not_found(id.clone()))?;
        let entry = self.entries.remove(index);

        debug!(camera_id = %id, remaining = self.entries.len(), "Removed camera record");
        self.emit(&StoreEvent::Removed { id: id.clone() });
        Ok(entry.record)
    }

    fn next_revision(&mut self) -> Revision {
        self.last_revision = self.last_revision.next();
        self.last_revision
    }

    fn position(&self, id: &CameraId) -> Option<usize> {
        self.entries.iter().position(|entry| &entry.record.id == id)
    }

    fn entry(&self, id: &CameraId) -> Result<&Entry> {
        self.entries
            .iter()
            .find(|entry| &entry.record.id == id)
            .ok_or_else(|| Error::not_found(id.clone()))
    }

    fn entry_mut(&mut self, id: &CameraId) -> Result<&mut Entry> {
        self.entries
            .iter_mut()
            .find(|entry| &entry.record.id == id)
            .ok_or_else(|| Error::not_found(id.clone()))
    }

    fn emit(&mut self, event: &StoreEvent) {
        // Dropped subscriptions are pruned on the next send.
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}

fn check_revision(id: &CameraId, current: Revision, expected: Option<Revision>) -> Result<()> {
    match expected {
        Some(expected) if expected != current => Err(Error::ConcurrentModification {
            id: id.clone(),
            expected: expected.get(),
            found: current.get(),
        }),
        _ => Ok(()),
    }
}
