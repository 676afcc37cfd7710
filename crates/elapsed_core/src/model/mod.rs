//! Domain model for tracked dates.
//!
//! # Responsibility
//! - Define the persisted record shape and its invariants.
//! - Define the display unit used when presenting elapsed time.
//!
//! # Invariants
//! - Every record is identified by a stable, non-nil `RecordId`.
//! - Records are immutable once persisted.

pub mod record;
pub mod unit;
