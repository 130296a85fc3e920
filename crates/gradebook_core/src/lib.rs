//! Core domain logic for the gradebook academic tracker.
//! This crate is the single source of truth for grade and agenda invariants.

pub mod grade;
pub mod logging;
pub mod model;
pub mod note;
pub mod repo;
pub mod service;
pub mod session;

pub use grade::engine::{
    clamp_credits, clamp_partial_grade_field, compute_course_grade, compute_weighted_average,
    compute_weighted_average_iter, GradeField,
};
pub use grade::summary::{
    semester_label, summarize_semesters, GpaOverview, GradeBand, SemesterSummary,
};
pub use grade::validation::{validate_course, CourseValidationError};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::course::{
    Course, CourseEditError, CourseId, PartialGrade, PartialGradeEdit, PartialGradeId,
};
pub use model::note::{CategoryFilter, Note, NoteCategory, NoteId, ParseCategoryError};
pub use model::palette::{palette_color, PASTEL_PALETTE};
pub use model::student::Student;
pub use note::agenda::AgendaCursor;
pub use note::filter::{filter_notes, NoteFilter};
pub use repo::course_repo::{CourseRepository, CourseScope, InMemoryCourseRepository};
pub use repo::note_repo::{InMemoryNoteRepository, NoteRepository};
pub use repo::{RepoError, RepoResult};
pub use service::course_service::{CourseService, CourseServiceError, NewCourse};
pub use service::note_service::{NoteService, NoteServiceError};
pub use session::AcademicSession;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
