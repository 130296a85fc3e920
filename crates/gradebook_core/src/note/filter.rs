//! Note list filtering.

use crate::model::note::{CategoryFilter, Note};
use chrono::NaiveDate;

/// Filter inputs collected from the agenda view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteFilter {
    /// Free-text search; empty means "no search".
    pub query: String,
    pub category: CategoryFilter,
    /// Only consulted while `query` is empty.
    pub selected_date: NaiveDate,
}

impl NoteFilter {
    /// Filter for one day with no search and every category.
    pub fn for_day(selected_date: NaiveDate) -> Self {
        Self {
            query: String::new(),
            category: CategoryFilter::All,
            selected_date,
        }
    }

    pub fn apply(&self, notes: &[Note]) -> Vec<Note> {
        filter_notes(notes, &self.query, self.category, self.selected_date)
    }
}

/// Returns the notes matching `query`, `category` and `selected_date`, in
/// input order.
///
/// Rules:
/// - `query` matches a case-insensitive substring of title or content; an
///   empty query matches every note.
/// - `category` matches when it is `All` or equals the note category.
/// - The day predicate applies only when `query` is empty. A non-empty query
///   searches across all dates. The query is not trimmed, so whitespace
///   counts as a search.
pub fn filter_notes(
    notes: &[Note],
    query: &str,
    category: CategoryFilter,
    selected_date: NaiveDate,
) -> Vec<Note> {
    let needle = query.to_lowercase();
    let searching = !needle.is_empty();

    notes
        .iter()
        .filter(|note| {
            let matches_search = note.contains_text(&needle);
            let matches_category = category.matches(note.category);
            let matches_date = searching || note.day() == selected_date;
            matches_search && matches_category && matches_date
        })
        .cloned()
        .collect()
}
