//! List screen: registered dates with elapsed time.

use crate::duration::Elapsed;
use crate::model::record::{DateRecord, RecordId};
use crate::model::unit::DisplayUnit;
use crate::repo::record_store::RecordStore;
use crate::screen::Route;
use chrono::{DateTime, TimeZone};
use log::{debug, info};

pub const LIST_HEADER: &str = "登録日時一覧";
pub const NEW_RECORD_LABEL: &str = "新規登録";

/// One rendered list entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    pub id: RecordId,
    pub title: String,
    pub elapsed: Elapsed,
}

/// View state of the list screen.
///
/// Records are cached at activation; a record added afterwards shows up
/// only after the next `activate`.
#[derive(Debug, Clone, Default)]
pub struct ListScreen {
    records: Vec<DateRecord>,
    unit: DisplayUnit,
}

impl ListScreen {
    pub fn new(unit: DisplayUnit) -> Self {
        Self {
            records: Vec::new(),
            unit,
        }
    }

    /// Reads the record sequence once and caches it as view state.
    pub fn activate<S: RecordStore + ?Sized>(&mut self, store: &S) {
        self.records = store.read_all();
        info!(
            "event=list_activate module=screen status=ok count={}",
            self.records.len()
        );
    }

    pub fn records(&self) -> &[DateRecord] {
        &self.records
    }

    pub fn unit(&self) -> DisplayUnit {
        self.unit
    }

    /// Advances the display unit. Storage is not re-read.
    pub fn cycle_unit(&mut self) -> DisplayUnit {
        self.unit = self.unit.next();
        debug!("event=unit_cycle module=screen unit={}", self.unit);
        self.unit
    }

    /// Computes rows against `now` in the caller's time zone.
    pub fn rows<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Vec<ListRow> {
        let zone = now.timezone();
        self.records
            .iter()
            .map(|record| ListRow {
                id: record.id,
                title: record.title.clone(),
                elapsed: Elapsed::between(now, &record.date.with_timezone(&zone), self.unit),
            })
            .collect()
    }

    /// Label of the unit toggle, e.g. `表示切替 (年)`.
    pub fn toggle_label(&self) -> String {
        format!("表示切替 ({})", self.unit.label())
    }

    pub fn open_form(&self) -> Route {
        Route::Form
    }
}
