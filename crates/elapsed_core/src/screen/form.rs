//! Form screen: registers one new date record.
//!
//! # Responsibility
//! - Validate the title and the six date/time fields in a fixed order.
//! - Compose a local date/time into an absolute instant.
//! - Persist the new record through `RecordStore::append`.
//!
//! # Invariants
//! - The first failing rule wins; nothing is persisted on rejection.
//! - Out-of-range components are rejected, never rolled over
//!   (day 31 in a 30-day month is invalid, not the 1st of the next month).
//! - Numbers too large for an integer are invalid dates, not non-numbers.
//! - The composed instant must fall in a storable UTC year.
//! - Field values survive a rejection so the user can retry.

use crate::model::record::{DateRecord, RecordId, RecordValidationError, STORABLE_YEARS};
use crate::repo::record_store::RecordStore;
use crate::screen::Route;
use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, TimeZone, Utc};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::num::{IntErrorKind, ParseIntError};

pub const FORM_HEADER: &str = "登録";
pub const REGISTER_LABEL: &str = "登録";
pub const CANCEL_LABEL: &str = "キャンセル";
/// Title shown on every rejection alert.
pub const ALERT_TITLE: &str = "エラー";

/// User-facing rejection reasons, in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    EmptyTitle,
    MissingDateTime,
    NotANumber,
    InvalidDate,
    /// The store refused or failed the write.
    RegistrationFailed,
}

impl FormError {
    pub fn message(self) -> &'static str {
        match self {
            Self::EmptyTitle => "タイトルを入力してください。",
            Self::MissingDateTime => "年/月/日、時/分/秒 をすべて入力してください。",
            Self::NotANumber => "数値を正しく入力してください。",
            Self::InvalidDate => "有効な日付を入力してください。",
            Self::RegistrationFailed => "登録に失敗しました。",
        }
    }
}

impl Display for FormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl Error for FormError {}

/// Raw text of the form inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub title: String,
    pub year: String,
    pub month: String,
    pub day: String,
    pub hour: String,
    pub minute: String,
    pub second: String,
}

impl FormFields {
    fn date_time_parts(&self) -> [&str; 6] {
        [
            &self.year,
            &self.month,
            &self.day,
            &self.hour,
            &self.minute,
            &self.second,
        ]
    }
}

/// Where the form is in its `editing -> validating -> rejected | accepted` cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Editing,
    /// Submission failed; fields are kept and remain editable.
    Rejected(FormError),
    /// The record with this id was persisted.
    Accepted(RecordId),
}

#[derive(Debug, Clone, Default)]
pub struct FormScreen {
    fields: FormFields,
    state: FormState,
}

impl FormScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    /// Gives mutable access to the inputs and returns the form to `Editing`.
    pub fn edit(&mut self) -> &mut FormFields {
        self.state = FormState::Editing;
        &mut self.fields
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    /// Runs every validation rule and returns the composed instant.
    ///
    /// `zone` is the clock the six components are read on.
    pub fn validate<Tz: TimeZone>(&self, zone: &Tz) -> Result<DateTime<Utc>, FormError> {
        if self.fields.title.trim().is_empty() {
            return Err(FormError::EmptyTitle);
        }

        let parts = self.fields.date_time_parts();
        if parts.iter().any(|part| part.trim().is_empty()) {
            return Err(FormError::MissingDateTime);
        }

        let parsed = parts.map(|part| part.trim().parse::<i64>());
        if parsed.iter().any(|result| matches!(result, Err(err) if !is_overflow(err))) {
            return Err(FormError::NotANumber);
        }
        // Only overflow errors remain; a number that large is never a valid component.
        let mut numbers = [0_i64; 6];
        for (slot, result) in numbers.iter_mut().zip(parsed) {
            *slot = result.map_err(|_| FormError::InvalidDate)?;
        }

        let [year, month, day, hour, minute, second] = numbers;
        compose_local(zone, year, month, day, hour, minute, second)
    }

    /// Validates, persists and navigates back to the list on success.
    ///
    /// # Errors
    /// - A validation `FormError` when a rule fails.
    /// - `FormError::RegistrationFailed` when the store write fails.
    pub fn submit<S, Tz>(&mut self, store: &S, zone: &Tz) -> Result<Route, FormError>
    where
        S: RecordStore + ?Sized,
        Tz: TimeZone,
    {
        let date = self.validate(zone).map_err(|err| self.reject(err))?;

        let record = DateRecord::new(self.fields.title.clone(), date).map_err(|err| {
            self.reject(match err {
                RecordValidationError::EmptyTitle => FormError::EmptyTitle,
                RecordValidationError::YearOutOfRange(_) => FormError::InvalidDate,
                _ => FormError::RegistrationFailed,
            })
        })?;

        if let Err(err) = store.append(&record) {
            error!("event=record_register module=screen status=error error={err}");
            return Err(self.reject(FormError::RegistrationFailed));
        }

        info!(
            "event=record_register module=screen status=ok record_id={}",
            record.id
        );
        self.state = FormState::Accepted(record.id);
        Ok(Route::List)
    }

    /// Discards the inputs without persisting anything.
    pub fn cancel(&mut self) -> Route {
        self.fields = FormFields::default();
        self.state = FormState::Editing;
        Route::List
    }

    fn reject(&mut self, err: FormError) -> FormError {
        info!("event=record_register module=screen status=rejected reason={err:?}");
        self.state = FormState::Rejected(err);
        err
    }
}

fn is_overflow(err: &ParseIntError) -> bool {
    matches!(
        err.kind(),
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow
    )
}

/// Builds an instant from local wall-clock components.
///
/// Ambiguous local times resolve to the earlier instant; times skipped by a
/// clock change are invalid. So is any instant whose UTC year is outside
/// `STORABLE_YEARS`, including local 9999-12-31 in a zone behind UTC.
fn compose_local<Tz: TimeZone>(
    zone: &Tz,
    year: i64,
    month: i64,
    day: i64,
    hour: i64,
    minute: i64,
    second: i64,
) -> Result<DateTime<Utc>, FormError> {
    let component = |value: i64| u32::try_from(value).map_err(|_| FormError::InvalidDate);

    let year = i32::try_from(year).map_err(|_| FormError::InvalidDate)?;
    let date = NaiveDate::from_ymd_opt(year, component(month)?, component(day)?)
        .ok_or(FormError::InvalidDate)?;
    let time = NaiveTime::from_hms_opt(component(hour)?, component(minute)?, component(second)?)
        .ok_or(FormError::InvalidDate)?;

    zone.from_local_datetime(&date.and_time(time))
        .earliest()
        .map(|local| local.with_timezone(&Utc))
        .filter(|instant| STORABLE_YEARS.contains(&instant.year()))
        .ok_or(FormError::InvalidDate)
}
