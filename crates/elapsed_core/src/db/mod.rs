//! SQLite storage bootstrap and schema migration entry points.
//!
//! # Responsibility
//! - Open and configure the SQLite connection that backs the storage slots.
//! - Apply schema migrations in deterministic order.
//!
//! # Invariants
//! - Migration version is tracked via `PRAGMA user_version`.
//! - No slot is read or written before migrations succeed.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

/// Failures of the slot database, split by the stage that failed.
#[derive(Debug)]
pub enum DbError {
    /// The database file could not be opened or created.
    Open {
        location: String,
        source: rusqlite::Error,
    },
    /// The connection opened but could not be configured or inspected,
    /// e.g. the file is not a SQLite database.
    Configure(rusqlite::Error),
    /// Migration to `version` failed; nothing from the batch was kept.
    Migration {
        version: u32,
        source: rusqlite::Error,
    },
    /// The file was written by a newer build with a schema we cannot read.
    SchemaTooNew { found: u32, supported: u32 },
    /// A slot read or write failed on an open, migrated connection.
    Statement(rusqlite::Error),
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open { location, source } => {
                write!(f, "cannot open slot database at {location}: {source}")
            }
            Self::Configure(err) => write!(f, "slot database is not usable: {err}"),
            Self::Migration { version, source } => {
                write!(f, "slot schema migration {version} failed: {source}")
            }
            Self::SchemaTooNew { found, supported } => write!(
                f,
                "slot database has schema version {found}; this build reads up to {supported}"
            ),
            Self::Statement(err) => write!(f, "slot statement failed: {err}"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Open { source, .. } | Self::Migration { source, .. } => Some(source),
            Self::Configure(err) | Self::Statement(err) => Some(err),
            Self::SchemaTooNew { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Statement(value)
    }
}
