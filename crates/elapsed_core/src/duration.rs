//! Elapsed-time computation for display.
//!
//! # Responsibility
//! - Compute the signed, truncated distance between "now" and a target
//!   instant in one `DisplayUnit`.
//! - Pair the value with its unit label for rendering.
//!
//! # Invariants
//! - Results truncate toward zero; the sign is negative when the target
//!   lies after the reference.
//! - Days, months and years are measured on the wall clock of the
//!   instants' time zone, not as fixed-length spans.
//! - Nothing is cached; callers pass a fresh reference per render.

use crate::model::unit::DisplayUnit;
use chrono::{DateTime, Datelike, Months, NaiveDateTime, TimeZone};
use std::fmt::{Display, Formatter};

/// A computed elapsed value and the unit it is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Elapsed {
    pub value: i64,
    pub unit: DisplayUnit,
}

impl Elapsed {
    /// Computes the elapsed value from `target` up to `reference`.
    pub fn between<Tz: TimeZone>(
        reference: &DateTime<Tz>,
        target: &DateTime<Tz>,
        unit: DisplayUnit,
    ) -> Self {
        Self {
            value: compute(reference, target, unit),
            unit,
        }
    }
}

impl Display for Elapsed {
    /// Renders as `<value><label> 経過`, e.g. `2年 経過`.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{} 経過", self.value, self.unit.label())
    }
}

/// Returns `reference - target` in whole `unit`s, truncated toward zero.
pub fn compute<Tz: TimeZone>(
    reference: &DateTime<Tz>,
    target: &DateTime<Tz>,
    unit: DisplayUnit,
) -> i64 {
    let exact = reference
        .naive_utc()
        .signed_duration_since(target.naive_utc());
    match unit {
        DisplayUnit::Seconds => exact.num_seconds(),
        DisplayUnit::Minutes => exact.num_minutes(),
        DisplayUnit::Hours => exact.num_hours(),
        DisplayUnit::Days => reference
            .naive_local()
            .signed_duration_since(target.naive_local())
            .num_days(),
        DisplayUnit::Months => calendar_months(reference.naive_local(), target.naive_local()),
        DisplayUnit::Years => calendar_years(reference.naive_local(), target.naive_local()),
    }
}

fn ordered(reference: NaiveDateTime, target: NaiveDateTime) -> (NaiveDateTime, NaiveDateTime, i64) {
    if reference >= target {
        (target, reference, 1)
    } else {
        (reference, target, -1)
    }
}

/// A month counts once adding it to the earlier instant (with the day
/// clamped to the end of the month) does not pass the later one.
fn calendar_months(reference: NaiveDateTime, target: NaiveDateTime) -> i64 {
    let (earlier, later, sign) = ordered(reference, target);
    let mut months = i64::from(later.year() - earlier.year()) * 12 + i64::from(later.month())
        - i64::from(earlier.month());

    if months > 0 {
        let overshoots = u32::try_from(months)
            .ok()
            .and_then(|count| earlier.checked_add_months(Months::new(count)))
            .map_or(true, |shifted| shifted > later);
        if overshoots {
            months -= 1;
        }
    }

    sign * months
}

fn calendar_years(reference: NaiveDateTime, target: NaiveDateTime) -> i64 {
    let (earlier, later, sign) = ordered(reference, target);
    let mut years = i64::from(later.year() - earlier.year());

    let later_in_year = (later.month(), later.day(), later.time());
    let earlier_in_year = (earlier.month(), earlier.day(), earlier.time());
    if years > 0 && later_in_year < earlier_in_year {
        years -= 1;
    }

    sign * years
}
