//! Screen state machines for the list and form views.
//!
//! # Responsibility
//! - Hold per-screen UI state explicitly, without process-wide globals.
//! - Return navigation intents as `Route` values for the front-end to act on.
//!
//! # Invariants
//! - Screens touch storage only through `RecordStore`.
//! - The list screen reads storage only on `activate`.

pub mod form;
pub mod list;

/// Navigation target requested by a screen action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    List,
    Form,
}
