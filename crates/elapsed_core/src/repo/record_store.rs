//! Record store over a single storage slot.
//!
//! # Responsibility
//! - Load the full registered-date sequence from the `@registeredDates` slot.
//! - Append one record by rewriting the whole sequence.
//!
//! # Invariants
//! - `read_all` never fails and never writes; unreadable data reads as empty.
//! - `append` validates the record and rejects duplicate ids.
//! - Insertion order is display order.

use crate::model::record::DateRecord;
use crate::repo::slot_repo::{RepoError, RepoResult, SlotRepository, SqliteSlotRepository};
use log::{error, info, warn};
use rusqlite::Connection;

/// Slot key holding the JSON-encoded record sequence.
pub const RECORDS_SLOT_KEY: &str = "@registeredDates";

/// Read-all/append contract used by the screens.
pub trait RecordStore {
    /// Loads the stored sequence, surfacing decode and storage failures.
    fn try_read_all(&self) -> RepoResult<Vec<DateRecord>>;

    /// Appends one record and persists the full sequence.
    fn append(&self, record: &DateRecord) -> RepoResult<()>;

    /// Loads the stored sequence; failures are logged and read as "no records yet".
    fn read_all(&self) -> Vec<DateRecord> {
        match self.try_read_all() {
            Ok(records) => records,
            Err(err) => {
                warn!("event=records_read module=repo status=error fallback=empty error={err}");
                Vec::new()
            }
        }
    }
}

/// Record store that keeps the sequence in one slot of any `SlotRepository`.
pub struct SlotRecordStore<S: SlotRepository> {
    slots: S,
}

/// Record store over the SQLite `kv_slots` table.
pub type SqliteRecordStore<'conn> = SlotRecordStore<SqliteSlotRepository<'conn>>;

impl<S: SlotRepository> SlotRecordStore<S> {
    pub fn new(slots: S) -> Self {
        Self { slots }
    }
}

impl<'conn> SlotRecordStore<SqliteSlotRepository<'conn>> {
    /// Constructs a store from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        Ok(Self::new(SqliteSlotRepository::try_new(conn)?))
    }
}

impl<S: SlotRepository> RecordStore for SlotRecordStore<S> {
    fn try_read_all(&self) -> RepoResult<Vec<DateRecord>> {
        match self.slots.read_slot(RECORDS_SLOT_KEY)? {
            Some(payload) => Ok(serde_json::from_str(&payload)?),
            None => Ok(Vec::new()),
        }
    }

    fn append(&self, record: &DateRecord) -> RepoResult<()> {
        record.validate()?;

        // An unreadable slot is overwritten by the new sequence.
        let mut records = match self.try_read_all() {
            Ok(records) => records,
            Err(err) => {
                warn!(
                    "event=record_append module=repo status=degraded reason=unreadable_slot error={err}"
                );
                Vec::new()
            }
        };

        if records.iter().any(|existing| existing.id == record.id) {
            return Err(RepoError::DuplicateId(record.id));
        }

        records.push(record.clone());
        let payload = serde_json::to_string(&records)?;
        if let Err(err) = self.slots.write_slot(RECORDS_SLOT_KEY, &payload) {
            error!("event=record_append module=repo status=error error={err}");
            return Err(err);
        }

        info!(
            "event=record_append module=repo status=ok record_id={} count={}",
            record.id,
            records.len()
        );
        Ok(())
    }
}
