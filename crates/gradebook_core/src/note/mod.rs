//! Note filtering and agenda day selection.
//!
//! # Responsibility
//! - Filter notes by free text, category and selected calendar day.
//! - Track the day strip shown by the agenda view.
//!
//! # Invariants
//! - Filtering is stable; it never reorders its input.
//! - A non-empty search query bypasses the day predicate entirely.

pub mod agenda;
pub mod filter;
