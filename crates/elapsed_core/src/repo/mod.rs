//! Repository layer over named storage slots.
//!
//! # Responsibility
//! - Provide raw slot read/replace access (`slot_repo`).
//! - Provide the record store contract on top of one slot (`record_store`).
//!
//! # Invariants
//! - Every write replaces a slot value wholesale.
//! - Record writes enforce `DateRecord::validate()` before persistence.

pub mod record_store;
pub mod slot_repo;
