//! SQLite migration registry and executor.
//!
//! # Invariants
//! - `version` values must remain monotonic.
//! - Applied migration version is mirrored to `PRAGMA user_version`.

use crate::db::{DbError, DbResult};
use log::{error, info};
use rusqlite::Connection;

#[derive(Debug, Clone, Copy)]
struct Migration {
    version: u32,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    sql: include_str!("0001_kv_slots.sql"),
}];

/// Returns the latest migration version known by this binary.
pub fn latest_version() -> u32 {
    MIGRATIONS.last().map_or(0, |migration| migration.version)
}

/// Brings the slot schema up to `latest_version()` in one transaction.
///
/// # Errors
/// - `DbError::Configure` when the version cannot be read.
/// - `DbError::SchemaTooNew` for files from a newer build; they are left untouched.
/// - `DbError::Migration` naming the step that failed; earlier steps roll back too.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let found = current_user_version(conn)?;
    let supported = latest_version();

    if found > supported {
        return Err(DbError::SchemaTooNew { found, supported });
    }
    if found == supported {
        return Ok(());
    }

    let migration_failed = |version: u32| {
        move |source: rusqlite::Error| {
            error!("event=db_migrate module=db status=error version={version} error={source}");
            DbError::Migration { version, source }
        }
    };

    let tx = conn.transaction().map_err(migration_failed(found + 1))?;
    for migration in MIGRATIONS.iter().filter(|migration| migration.version > found) {
        tx.execute_batch(migration.sql)
            .and_then(|()| tx.pragma_update(None, "user_version", migration.version))
            .map_err(migration_failed(migration.version))?;
    }
    tx.commit().map_err(migration_failed(supported))?;

    info!("event=db_migrate module=db status=ok from={found} to={supported}");
    Ok(())
}

/// Reads the schema version mirrored in `PRAGMA user_version`.
pub fn current_user_version(conn: &Connection) -> DbResult<u32> {
    conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))
        .map_err(DbError::Configure)
}
