//! Domain model for the academic tracker.
//!
//! # Responsibility
//! - Define the course, partial grade, note and student records.
//! - Keep derived course state consistent with its source data.
//!
//! # Invariants
//! - Every course and note is identified by a stable UUID.
//! - `Course::grade` is derived from `partial_grades` and never set directly.
//! - A course always owns at least one partial grade.

pub mod course;
pub mod note;
pub mod palette;
pub mod student;
