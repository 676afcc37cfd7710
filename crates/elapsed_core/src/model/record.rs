//! Registered date record.
//!
//! # Responsibility
//! - Define the `(id, title, date)` triple stored in the record slot.
//! - Keep the wire shape (`id`, `title`, `date`) stable across releases.
//!
//! # Invariants
//! - `id` is non-nil and never reused for another record.
//! - `title` is not blank.
//! - `date` is stored with millisecond precision so that it survives the
//!   textual round-trip unchanged.

use chrono::{DateTime, Datelike, SecondsFormat, SubsecRound, Utc};
use serde::{Deserialize, Serialize, Serializer};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::ops::RangeInclusive;
use uuid::Uuid;

/// UTC years whose timestamps fit the four-digit `YYYY-MM-DDTHH:MM:SS.sssZ` text.
///
/// chrono writes other years with a sign and extra digits, which the slot
/// reader rejects, so such a record would make the whole slot unreadable.
pub const STORABLE_YEARS: RangeInclusive<i32> = 0..=9999;

/// Stable identifier of one registered date.
pub type RecordId = Uuid;

/// Invariant violations for `DateRecord`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValidationError {
    /// `id` is the nil UUID.
    NilId,
    /// `title` is empty or whitespace only.
    EmptyTitle,
    /// `date` text is not an RFC 3339 timestamp.
    InvalidDate(String),
    /// `date` falls in a UTC year outside `STORABLE_YEARS`.
    YearOutOfRange(i32),
}

impl Display for RecordValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "record id must not be nil"),
            Self::EmptyTitle => write!(f, "record title must not be empty"),
            Self::InvalidDate(value) => write!(f, "invalid record date `{value}`"),
            Self::YearOutOfRange(year) => write!(
                f,
                "record year {year} is outside {}..={}",
                STORABLE_YEARS.start(),
                STORABLE_YEARS.end()
            ),
        }
    }
}

impl Error for RecordValidationError {}

/// One tracked date, as persisted in the record slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DateRecordWire")]
pub struct DateRecord {
    pub id: RecordId,
    /// Display title, e.g. "結婚記念日".
    pub title: String,
    /// Serialized as `2023-03-01T12:00:00.000Z`.
    #[serde(serialize_with = "serialize_date")]
    pub date: DateTime<Utc>,
}

impl DateRecord {
    /// Creates a record with a freshly generated v4 id.
    pub fn new(
        title: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Result<Self, RecordValidationError> {
        Self::with_id(Uuid::new_v4(), title, date)
    }

    /// Creates a record with a caller-provided id.
    ///
    /// Sub-millisecond precision in `date` is dropped.
    pub fn with_id(
        id: RecordId,
        title: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Result<Self, RecordValidationError> {
        let record = Self {
            id,
            title: title.into(),
            date: date.trunc_subsecs(3),
        };
        record.validate()?;
        Ok(record)
    }

    /// Checks record invariants.
    pub fn validate(&self) -> Result<(), RecordValidationError> {
        if self.id.is_nil() {
            return Err(RecordValidationError::NilId);
        }
        if self.title.trim().is_empty() {
            return Err(RecordValidationError::EmptyTitle);
        }
        if !STORABLE_YEARS.contains(&self.date.year()) {
            return Err(RecordValidationError::YearOutOfRange(self.date.year()));
        }
        Ok(())
    }
}

#[derive(Deserialize)]
struct DateRecordWire {
    id: RecordId,
    title: String,
    date: String,
}

impl TryFrom<DateRecordWire> for DateRecord {
    type Error = RecordValidationError;

    fn try_from(wire: DateRecordWire) -> Result<Self, Self::Error> {
        let date = DateTime::parse_from_rfc3339(wire.date.trim())
            .map_err(|_| RecordValidationError::InvalidDate(wire.date.clone()))?
            .with_timezone(&Utc);
        Self::with_id(wire.id, wire.title, date)
    }
}

fn serialize_date<S: Serializer>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&date.to_rfc3339_opts(SecondsFormat::Millis, true))
}
