//! Note use-case service.
//!
//! # Responsibility
//! - Provide create/update/delete/list APIs for agenda notes.
//! - Assign round-robin display colors on create.
//! - Expose the agenda filter over the stored notes.
//!
//! # Invariants
//! - New notes are prepended, so store order is newest first.
//! - Note color is `palette[current note count mod 8]` at creation time.
//! - Update uses full record replacement semantics.

use crate::model::note::{CategoryFilter, Note, NoteCategory, NoteId};
use crate::model::palette::palette_color;
use crate::note::filter::filter_notes;
use crate::repo::note_repo::NoteRepository;
use crate::repo::RepoError;
use chrono::{NaiveDate, NaiveDateTime};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for note use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteServiceError {
    /// Target note does not exist.
    NoteNotFound(NoteId),
    Repo(RepoError),
}

impl Display for NoteServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoteNotFound(id) => write!(f, "note not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for NoteServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::NoteNotFound(_) => None,
        }
    }
}

impl From<RepoError> for NoteServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::NoteNotFound(id),
            other => Self::Repo(other),
        }
    }
}

/// Note service facade over repository implementations.
pub struct NoteService<R: NoteRepository> {
    repo: R,
}

impl<R: NoteRepository> NoteService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a note dated `date` and puts it at the front of the store.
    pub fn create_note(
        &mut self,
        title: impl Into<String>,
        content: impl Into<String>,
        category: NoteCategory,
        date: NaiveDateTime,
    ) -> Result<Note, NoteServiceError> {
        let color = palette_color(self.repo.count_notes());
        let note = Note::new(title, content, category, date, color);
        self.repo.prepend_note(note.clone())?;
        info!(
            "event=note_create module=note status=ok note_id={} category={}",
            note.id,
            note.category.as_str()
        );
        Ok(note)
    }

    /// Replaces the stored note with the same id.
    pub fn update_note(&mut self, note: Note) -> Result<Note, NoteServiceError> {
        self.repo.replace_note(note.clone())?;
        info!("event=note_update module=note status=ok note_id={}", note.id);
        Ok(note)
    }

    /// Removes a note unconditionally.
    ///
    /// Returns whether a note with `id` existed.
    pub fn delete_note(&mut self, id: NoteId) -> bool {
        let removed = self.repo.remove_note(id).is_some();
        info!("event=note_delete module=note status=ok note_id={id} removed={removed}");
        removed
    }

    pub fn get_note(&self, id: NoteId) -> Option<Note> {
        self.repo.get_note(id)
    }

    /// All notes, newest first.
    pub fn list_notes(&self) -> Vec<Note> {
        self.repo.list_notes()
    }

    /// Applies the agenda filter over the stored notes.
    pub fn filter_notes(
        &self,
        query: &str,
        category: CategoryFilter,
        selected_date: NaiveDate,
    ) -> Vec<Note> {
        filter_notes(&self.repo.list_notes(), query, category, selected_date)
    }
}
