//! Grade engine: pure aggregation and validation over courses.
//!
//! # Responsibility
//! - Compute a course grade from its partial grades.
//! - Compute credit-weighted averages over any subset of courses.
//! - Validate a course at save time and clamp live edits.
//!
//! # Invariants
//! - Every function here is pure; callers own all mutation.
//! - Course grades use a fixed divisor of 100, never the total weight.

pub mod engine;
pub mod summary;
pub mod validation;
