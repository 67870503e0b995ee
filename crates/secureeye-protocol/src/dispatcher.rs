//! Mutation dispatch into the record store
//!
//! Every dashboard action that changes data goes through [`RecordStore::apply`]
//! as a single [`Mutation`] keyed by camera id.

use secureeye_types::{ApprovalStatus, CameraId, CameraRecord, Error, Result};

use crate::selection::Commit;
use crate::store::{RecordStore, Revision};

/// A single-record change
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    /// Append a new record
    Insert(CameraRecord),

    /// Replace a record in place
    Replace {
        /// Record to replace
        id: CameraId,
        /// Full replacement
        record: CameraRecord,
        /// Required current revision, if the change was drafted
        expected: Option<Revision>,
    },

    /// Change only the approval status
    SetStatus {
        /// Record to change
        id: CameraId,
        /// New status
        status: ApprovalStatus,
        /// Required current revision, if the change was drafted
        expected: Option<Revision>,
    },

    /// Remove a record
    Remove {
        /// Record to remove
        id: CameraId,
    },
}

impl Mutation {
    /// Turn a committed draft into a checked replacement of its target.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RecordNotFound`] if the target is gone.
    pub fn from_commit(commit: Commit, store: &RecordStore) -> Result<Self> {
        let current = store
            .get(&commit.target)
            .ok_or_else(|| Error::not_found(commit.target.clone()))?;
        let record = commit.draft.merge_into(current);

        Ok(Self::Replace {
            id: commit.target,
            record,
            expected: Some(commit.base_revision),
        })
    }

    /// Id of the record this mutation targets
    #[must_use]
    pub const fn target(&self) -> &CameraId {
        match self {
            Self::Insert(record) => &record.id,
            Self::Replace { id, .. } | Self::SetStatus { id, .. } | Self::Remove { id } => id,
        }
    }
}

/// What a dispatched mutation did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    /// A record was appended
    Inserted,
    /// A record was replaced
    Replaced,
    /// A status moved between two values
    StatusChanged {
        /// Previous status
        from: ApprovalStatus,
        /// New status
        to: ApprovalStatus,
    },
    /// A record was removed
    Removed,
}

/// Result of a successful dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Id of the affected record
    pub id: CameraId,
    /// Record revision after the change; `None` once removed
    pub revision: Option<Revision>,
    /// Kind of change
    pub change: Change,
}

impl RecordStore {
    /// Apply one mutation by identity match
    ///
    /// # Errors
    ///
    /// Propagates the store error for the mutation kind; the store is
    /// unchanged on error.
    pub fn apply(&mut self, mutation: Mutation) -> Result<Outcome> {
        match mutation {
            Mutation::Insert(record) => {
                let id = record.id.clone();
                let revision = self.insert(record)?;
                Ok(Outcome {
                    id,
                    revision: Some(revision),
                    change: Change::Inserted,
                })
            }
            Mutation::Replace {
                id,
                record,
                expected,
            } => {
                let revision = match expected {
                    Some(expected) => self.replace_if_current(&id, record, expected)?,
                    None => self.replace(&id, record)?,
                };
                Ok(Outcome {
                    id,
                    revision: Some(revision),
                    change: Change::Replaced,
                })
            }
            Mutation::SetStatus {
                id,
                status,
                expected,
            } => {
                let from = self.set_status_checked(&id, status, expected)?;
                let revision = self.revision(&id);
                Ok(Outcome {
                    id,
                    revision,
                    change: Change::StatusChanged { from, to: status },
                })
            }
            Mutation::Remove { id } => {
                self.remove_by_id(&id)?;
                Ok(Outcome {
                    id,
                    revision: None,
                    change: Change::Removed,
                })
            }
        }
    }
}
