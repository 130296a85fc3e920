//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Run save-time validation and emit structured log events.
//! - Keep the presentation layer decoupled from collection details.

pub mod course_service;
pub mod note_service;
