//! Camera record types shared by the admin and user dashboards

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize, Serializer};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use validator::{Validate, ValidationError};

use crate::error::{Error, Result};

/// Unique camera identifier.
///
/// The admin queue uses string ids (`CAM0001`), the user panel uses integers.
/// Ids compare by their text, so `"2"` typed at a prompt finds the camera with
/// integer id `2`. Integer ids serialize back as integers.
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "RawCameraId")]
pub struct CameraId {
    text: String,
    kind: IdKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IdKind {
    Text,
    Number(u64),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCameraId {
    Text(String),
    Number(u64),
}

impl From<RawCameraId> for CameraId {
    fn from(raw: RawCameraId) -> Self {
        match raw {
            RawCameraId::Text(text) => Self::from(text),
            RawCameraId::Number(number) => Self::number(number),
        }
    }
}

impl CameraId {
    fn number(number: u64) -> Self {
        Self {
            text: number.to_string(),
            kind: IdKind::Number(number),
        }
    }

    /// Borrow the id as text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether the id came from an integer
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self.kind, IdKind::Number(_))
    }
}

impl PartialEq for CameraId {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for CameraId {}

impl Hash for CameraId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl PartialOrd for CameraId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CameraId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.text.cmp(&other.text)
    }
}

impl Serialize for CameraId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self.kind {
            IdKind::Number(number) => serializer.serialize_u64(number),
            IdKind::Text => serializer.serialize_str(&self.text),
        }
    }
}

impl fmt::Display for CameraId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for CameraId {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl From<&str> for CameraId {
    fn from(id: &str) -> Self {
        Self::from(id.to_string())
    }
}

impl From<String> for CameraId {
    fn from(text: String) -> Self {
        Self {
            text,
            kind: IdKind::Text,
        }
    }
}

impl From<u32> for CameraId {
    fn from(id: u32) -> Self {
        Self::number(u64::from(id))
    }
}

/// Approval status of a camera in the admin queue
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalStatus {
    /// Waiting for an administrator decision
    #[default]
    Pending,
    /// Accepted by an administrator
    Approved,
    /// Rejected by an administrator
    Declined,
}

impl ApprovalStatus {
    /// Whether approve/decline actions are still available
    #[must_use]
    pub const fn is_pending(self) -> bool {
        matches!(self, Self::Pending)
    }
}

impl fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Approved => write!(f, "approved"),
            Self::Declined => write!(f, "declined"),
        }
    }
}

/// Camera ownership type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CameraType {
    /// Privately owned camera
    #[default]
    Private,
    /// Publicly owned camera
    Public,
}

impl fmt::Display for CameraType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Private => write!(f, "Private"),
            Self::Public => write!(f, "Public"),
        }
    }
}

impl FromStr for CameraType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("private") {
            Ok(Self::Private)
        } else if s.eq_ignore_ascii_case("public") {
            Ok(Self::Public)
        } else {
            Err(Error::validation("type", format!("unknown camera type '{s}'")))
        }
    }
}

fn not_blank(value: &str) -> std::result::Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message(Cow::Borrowed("must not be empty")));
    }
    Ok(())
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// A camera record as held by a record store.
///
/// Serialized in the camelCase shape used by the dashboards' fixture data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CameraRecord {
    /// Unique identifier, immutable after creation
    pub id: CameraId,

    /// Display number on the user panel
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,

    /// Camera name
    #[validate(custom(function = "not_blank"))]
    pub name: String,

    /// Street address or site description
    #[validate(custom(function = "not_blank"))]
    pub location: String,

    /// Hardware model
    #[serde(default)]
    pub model: String,

    /// Manufacturer or installer
    #[serde(default)]
    pub company_name: String,

    /// Ownership type
    #[serde(rename = "type", default)]
    pub camera_type: CameraType,

    /// Hardware serial number
    #[serde(default)]
    pub serial_no: String,

    /// Coverage range, e.g. `50m`
    #[serde(default)]
    pub range: String,

    /// Admin approval status
    #[serde(default)]
    pub status: ApprovalStatus,

    /// Whether the owner shares the feed
    #[serde(default)]
    pub sharing: bool,

    /// Whether the camera has been verified
    #[serde(default)]
    pub is_verified: bool,

    /// Who registered the camera
    #[serde(default)]
    pub added_by: String,

    /// When the camera was registered
    #[serde(default = "today")]
    pub date_added: NaiveDate,
}

impl CameraRecord {
    /// Create a pending record dated today with empty descriptive fields
    #[must_use]
    pub fn new<I, N, L>(id: I, name: N, location: L) -> Self
    where
        I: Into<CameraId>,
        N: Into<String>,
        L: Into<String>,
    {
        Self {
            id: id.into(),
            number: None,
            name: name.into(),
            location: location.into(),
            model: String::new(),
            company_name: String::new(),
            camera_type: CameraType::default(),
            serial_no: String::new(),
            range: String::new(),
            status: ApprovalStatus::default(),
            sharing: false,
            is_verified: false,
            added_by: String::new(),
            date_added: today(),
        }
    }

    /// Set the approval status
    #[must_use]
    pub const fn with_status(mut self, status: ApprovalStatus) -> Self {
        self.status = status;
        self
    }

    /// Set who added the camera and when
    #[must_use]
    pub fn with_provenance<S: Into<String>>(mut self, added_by: S, date_added: NaiveDate) -> Self {
        self.added_by = added_by.into();
        self.date_added = date_added;
        self
    }

    /// Check required fields
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValidationFailed`] naming the first blank field.
    pub fn check(&self) -> Result<()> {
        self.validate().map_err(Error::from)
    }

    /// Whether `other` carries the same identity and provenance
    #[must_use]
    pub fn same_origin(&self, other: &Self) -> bool {
        self.id == other.id
            && self.added_by == other.added_by
            && self.date_added == other.date_added
    }
}

/// Editable copy of a record's descriptive fields.
///
/// Identity, status, verification and provenance are not part of a draft, so
/// committing one can never change them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CameraDraft {
    /// Camera name
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    /// Street address or site description
    #[validate(custom(function = "not_blank"))]
    pub location: String,
    /// Hardware model
    pub model: String,
    /// Manufacturer or installer
    pub company_name: String,
    /// Ownership type
    #[serde(rename = "type")]
    pub camera_type: CameraType,
    /// Hardware serial number
    pub serial_no: String,
    /// Coverage range
    pub range: String,
    /// Whether the owner shares the feed
    pub sharing: bool,
}

impl CameraDraft {
    /// Copy the editable fields of a record
    #[must_use]
    pub fn from_record(record: &CameraRecord) -> Self {
        Self {
            name: record.name.clone(),
            location: record.location.clone(),
            model: record.model.clone(),
            company_name: record.company_name.clone(),
            camera_type: record.camera_type,
            serial_no: record.serial_no.clone(),
            range: record.range.clone(),
            sharing: record.sharing,
        }
    }

    /// Apply a single field change
    pub fn apply_change(&mut self, change: FieldChange) {
        match change {
            FieldChange::Name(value) => self.name = value,
            FieldChange::Location(value) => self.location = value,
            FieldChange::Model(value) => self.model = value,
            FieldChange::CompanyName(value) => self.company_name = value,
            FieldChange::CameraType(value) => self.camera_type = value,
            FieldChange::SerialNo(value) => self.serial_no = value,
            FieldChange::Range(value) => self.range = value,
            FieldChange::Sharing(value) => self.sharing = value,
        }
    }

    /// Produce the record that results from committing this draft onto `base`
    #[must_use]
    pub fn merge_into(&self, base: &CameraRecord) -> CameraRecord {
        CameraRecord {
            name: self.name.clone(),
            location: self.location.clone(),
            model: self.model.clone(),
            company_name: self.company_name.clone(),
            camera_type: self.camera_type,
            serial_no: self.serial_no.clone(),
            range: self.range.clone(),
            sharing: self.sharing,
            ..base.clone()
        }
    }

    /// Check required fields
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValidationFailed`] naming the first blank field.
    pub fn check(&self) -> Result<()> {
        self.validate().map_err(Error::from)
    }
}

/// A single field-change event emitted by an edit surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldChange {
    /// New name
    Name(String),
    /// New location
    Location(String),
    /// New model
    Model(String),
    /// New company name
    CompanyName(String),
    /// New ownership type
    CameraType(CameraType),
    /// New serial number
    SerialNo(String),
    /// New coverage range
    Range(String),
    /// Sharing switch toggled
    Sharing(bool),
}

impl FieldChange {
    /// Build a change from a field key and its raw input value.
    ///
    /// Keys match the serialized field names, ignoring case and underscores
    /// (`companyName`, `company_name` and `COMPANYNAME` are the same key).
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValidationFailed`] for unknown or read-only fields and
    /// for values that do not parse.
    pub fn parse(field: &str, value: &str) -> Result<Self> {
        let key: String = field
            .chars()
            .filter(|c| *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        let change = match key.as_str() {
            "name" => Self::Name(value.to_string()),
            "location" => Self::Location(value.to_string()),
            "model" => Self::Model(value.to_string()),
            "companyname" | "company" => Self::CompanyName(value.to_string()),
            "type" | "cameratype" => Self::CameraType(value.parse()?),
            "serialno" | "serial" => Self::SerialNo(value.to_string()),
            "range" => Self::Range(value.to_string()),
            "sharing" => Self::Sharing(parse_switch(value)?),
            "id" | "status" | "isverified" | "addedby" | "dateadded" | "number" => {
                return Err(Error::validation(field, "is read-only"));
            }
            _ => return Err(Error::validation(field, "unknown field")),
        };

        Ok(change)
    }

    /// Serialized name of the field this change targets
    #[must_use]
    pub const fn field_name(&self) -> &'static str {
        match self {
            Self::Name(_) => "name",
            Self::Location(_) => "location",
            Self::Model(_) => "model",
            Self::CompanyName(_) => "companyName",
            Self::CameraType(_) => "type",
            Self::SerialNo(_) => "serialNo",
            Self::Range(_) => "range",
            Self::Sharing(_) => "sharing",
        }
    }
}

fn parse_switch(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        _ => Err(Error::validation("sharing", format!("expected on/off, got '{value}'"))),
    }
}
