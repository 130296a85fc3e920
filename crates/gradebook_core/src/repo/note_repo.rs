//! Note repository contract and in-memory implementation.

use crate::model::note::{Note, NoteId};
use crate::repo::{RepoError, RepoResult};

/// Repository interface for agenda notes.
pub trait NoteRepository {
    /// Inserts a note at the front, so newest notes list first.
    fn prepend_note(&mut self, note: Note) -> RepoResult<NoteId>;
    /// Replaces the stored note with the same id, keeping its position.
    fn replace_note(&mut self, note: Note) -> RepoResult<()>;
    fn get_note(&self, id: NoteId) -> Option<Note>;
    /// All notes in store order.
    fn list_notes(&self) -> Vec<Note>;
    fn count_notes(&self) -> usize;
    /// Removes a note; returns `None` when the id is unknown.
    fn remove_note(&mut self, id: NoteId) -> Option<Note>;
}

/// `Vec`-backed note store, newest first.
#[derive(Debug, Default, Clone)]
pub struct InMemoryNoteRepository {
    notes: Vec<Note>,
}

impl InMemoryNoteRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: NoteId) -> Option<usize> {
        self.notes.iter().position(|note| note.id == id)
    }
}

impl NoteRepository for InMemoryNoteRepository {
    fn prepend_note(&mut self, note: Note) -> RepoResult<NoteId> {
        if self.position(note.id).is_some() {
            return Err(RepoError::DuplicateId(note.id));
        }
        let id = note.id;
        self.notes.insert(0, note);
        Ok(id)
    }

    fn replace_note(&mut self, note: Note) -> RepoResult<()> {
        let index = self.position(note.id).ok_or(RepoError::NotFound(note.id))?;
        self.notes[index] = note;
        Ok(())
    }

    fn get_note(&self, id: NoteId) -> Option<Note> {
        self.notes.iter().find(|note| note.id == id).cloned()
    }

    fn list_notes(&self) -> Vec<Note> {
        self.notes.clone()
    }

    fn count_notes(&self) -> usize {
        self.notes.len()
    }

    fn remove_note(&mut self, id: NoteId) -> Option<Note> {
        let index = self.position(id)?;
        Some(self.notes.remove(index))
    }
}
