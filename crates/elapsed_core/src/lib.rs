//! Core logic for tracking how long ago (or until) registered dates are.
//! This crate owns the record invariants; front-ends only drive the screens.

pub mod config;
pub mod db;
pub mod duration;
pub mod logging;
pub mod model;
pub mod repo;
pub mod screen;

pub use config::{AppConfig, ConfigError};
pub use duration::{compute, Elapsed};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::record::{DateRecord, RecordId, RecordValidationError};
pub use model::unit::{DisplayUnit, UnknownUnitError};
pub use repo::record_store::{RecordStore, SlotRecordStore, SqliteRecordStore, RECORDS_SLOT_KEY};
pub use repo::slot_repo::{RepoError, RepoResult, SlotRepository, SqliteSlotRepository};
pub use screen::form::{FormError, FormFields, FormScreen, FormState};
pub use screen::list::{ListRow, ListScreen};
pub use screen::Route;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
