//! Detail surface selection state
//!
//! `Closed → Open(draft) → Closed` via commit or cancel. Opening another
//! record while one is open replaces both the draft and its target.

use secureeye_types::{CameraDraft, CameraId, CameraRecord, Error, FieldChange, Result};
use std::mem;

use crate::store::Revision;

/// The record bound to an open detail surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedCamera {
    snapshot: CameraRecord,
    base_revision: Revision,
    draft: CameraDraft,
}

impl SelectedCamera {
    /// Id the draft will be committed against
    #[must_use]
    pub const fn target(&self) -> &CameraId {
        &self.snapshot.id
    }

    /// Record as it was when the surface opened
    #[must_use]
    pub const fn record(&self) -> &CameraRecord {
        &self.snapshot
    }

    /// Store revision the draft is based on
    #[must_use]
    pub const fn base_revision(&self) -> Revision {
        self.base_revision
    }

    /// Working copy of the editable fields
    #[must_use]
    pub const fn draft(&self) -> &CameraDraft {
        &self.draft
    }

    /// Whether the draft differs from the snapshot
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.draft != CameraDraft::from_record(&self.snapshot)
    }
}

/// A draft handed over for dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    /// Record the draft applies to
    pub target: CameraId,
    /// Revision the draft was opened at
    pub base_revision: Revision,
    /// Edited fields
    pub draft: CameraDraft,
}

/// At most one selected record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    /// Detail surface closed
    #[default]
    None,
    /// Detail surface open on one record
    Selected(Box<SelectedCamera>),
}

impl Selection {
    /// Open the detail surface on `record`.
    ///
    /// Returns the id of a previously open record whose draft was discarded.
    pub fn open(&mut self, record: &CameraRecord, revision: Revision) -> Option<CameraId> {
        let selected = SelectedCamera {
            snapshot: record.clone(),
            base_revision: revision,
            draft: CameraDraft::from_record(record),
        };
        match mem::replace(self, Self::Selected(Box::new(selected))) {
            Self::None => None,
            Self::Selected(previous) => Some(previous.snapshot.id),
        }
    }

    /// Apply a field change to the draft
    ///
    /// # Errors
    ///
    /// Returns [`Error::NothingSelected`] if the surface is closed.
    pub fn edit(&mut self, change: FieldChange) -> Result<()> {
        match self {
            Self::None => Err(Error::NothingSelected),
            Self::Selected(selected) => {
                selected.draft.apply_change(change);
                Ok(())
            }
        }
    }

    /// Close the surface and hand over the draft.
    ///
    /// The draft is validated first; an invalid draft stays open so the user
    /// can correct it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NothingSelected`] if the surface is closed, or
    /// [`Error::ValidationFailed`] if a required draft field is blank.
    pub fn commit(&mut self) -> Result<Commit> {
        match self {
            Self::None => return Err(Error::NothingSelected),
            Self::Selected(selected) => selected.draft.check()?,
        }

        let selected = self.take().ok_or(Error::NothingSelected)?;
        Ok(Commit {
            target: selected.snapshot.id,
            base_revision: selected.base_revision,
            draft: selected.draft,
        })
    }

    /// Close the surface, discarding any draft.
    ///
    /// Returns the id that was open, if any.
    pub fn cancel(&mut self) -> Option<CameraId> {
        self.take().map(|selected| selected.snapshot.id)
    }

    /// Close the surface and return its contents
    pub fn take(&mut self) -> Option<SelectedCamera> {
        match mem::take(self) {
            Self::None => None,
            Self::Selected(selected) => Some(*selected),
        }
    }

    /// Close the surface if it is open on `id`
    pub fn clear_if_target(&mut self, id: &CameraId) -> bool {
        if self.target() == Some(id) {
            *self = Self::None;
            return true;
        }
        false
    }

    /// Whether a record is selected
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Selected(_))
    }

    /// The open record, if any
    #[must_use]
    pub fn selected(&self) -> Option<&SelectedCamera> {
        match self {
            Self::None => None,
            Self::Selected(selected) => Some(selected.as_ref()),
        }
    }

    /// Id of the open record, if any
    #[must_use]
    pub fn target(&self) -> Option<&CameraId> {
        self.selected().map(SelectedCamera::target)
    }
}
