//! Note domain model.
//!
//! # Responsibility
//! - Define the agenda note record and its category.
//! - Expose day-granularity and text matching helpers used by filters.
//!
//! # Invariants
//! - `id` is stable and never reused for another note.
//! - Notes have no relationship to courses.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Stable identifier of a note.
pub type NoteId = Uuid;

/// Category assigned to every note.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteCategory {
    Important,
    #[default]
    Casual,
}

impl NoteCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Important => "important",
            Self::Casual => "casual",
        }
    }
}

/// Category predicate used when listing notes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(NoteCategory),
}

impl CategoryFilter {
    pub fn matches(self, category: NoteCategory) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == category,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(category) => category.as_str(),
        }
    }
}

/// Unknown category string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCategoryError(String);

impl Display for ParseCategoryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unsupported note category `{}`; expected all|important|casual",
            self.0
        )
    }
}

impl Error for ParseCategoryError {}

impl FromStr for NoteCategory {
    type Err = ParseCategoryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "important" => Ok(Self::Important),
            "casual" => Ok(Self::Casual),
            other => Err(ParseCategoryError(other.to_string())),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = ParseCategoryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        value.parse().map(Self::Only)
    }
}

/// Agenda note pinned to a point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub category: NoteCategory,
    /// Only the calendar day matters for agenda filtering.
    pub date: NaiveDateTime,
    /// Opaque display tag.
    pub color: String,
}

impl Note {
    /// Creates a note with a generated id.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        category: NoteCategory,
        date: NaiveDateTime,
        color: impl Into<String>,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), title, content, category, date, color)
    }

    /// Creates a note with a caller-provided id.
    pub fn with_id(
        id: NoteId,
        title: impl Into<String>,
        content: impl Into<String>,
        category: NoteCategory,
        date: NaiveDateTime,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            category,
            date,
            color: color.into(),
        }
    }

    /// Calendar day of the note, time-of-day dropped.
    pub fn day(&self) -> NaiveDate {
        self.date.date()
    }

    /// Whether `lowered_needle` occurs in the lowercased title or content.
    ///
    /// The caller lowercases the needle once per filter pass.
    pub fn contains_text(&self, lowered_needle: &str) -> bool {
        self.title.to_lowercase().contains(lowered_needle)
            || self.content.to_lowercase().contains(lowered_needle)
    }
}
