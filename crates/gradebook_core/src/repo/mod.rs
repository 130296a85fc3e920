//! Repository contracts and in-memory implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts for courses and notes.
//! - Keep collection bookkeeping out of the service layer.
//!
//! # Invariants
//! - Records are replaced whole; there is no partial write.
//! - Ids are unique inside a repository.
//! - Repositories do not validate business rules; services do.

use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub mod course_repo;
pub mod note_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository-level error shared by course and note stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    NotFound(Uuid),
    DuplicateId(Uuid),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "record not found: {id}"),
            Self::DuplicateId(id) => write!(f, "record id already exists: {id}"),
        }
    }
}

impl Error for RepoError {}
