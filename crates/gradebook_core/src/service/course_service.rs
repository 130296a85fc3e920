//! Course use-case service.
//!
//! # Responsibility
//! - Create courses with defaults, derived grade and palette color.
//! - Hand out edit drafts and commit them only after validation.
//! - Serve per-semester listings and the weighted average views.
//!
//! # Invariants
//! - A save either replaces the whole record or leaves it untouched.
//! - Create and save both run `validate_course`.
//! - New course color is `palette[courses in that semester mod 8]`.

use crate::grade::engine::compute_weighted_average;
use crate::grade::summary::{summarize_semesters, GpaOverview, SemesterSummary};
use crate::grade::validation::CourseValidationError;
use crate::model::course::{
    Course, CourseEditError, CourseId, PartialGrade, DEFAULT_CREDITS, MIN_SEMESTER,
};
use crate::model::palette::palette_color;
use crate::repo::course_repo::{CourseRepository, CourseScope};
use crate::repo::RepoError;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for course use-cases.
#[derive(Debug, Clone, PartialEq)]
pub enum CourseServiceError {
    /// Save-time validation failed; nothing was committed.
    Validation(CourseValidationError),
    /// Course input could not be turned into a course record.
    Edit(CourseEditError),
    /// Target course does not exist.
    CourseNotFound(CourseId),
    Repo(RepoError),
}

impl Display for CourseServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Edit(err) => write!(f, "{err}"),
            Self::CourseNotFound(id) => write!(f, "course not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CourseServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Edit(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::CourseNotFound(_) => None,
        }
    }
}

impl From<CourseValidationError> for CourseServiceError {
    fn from(value: CourseValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<CourseEditError> for CourseServiceError {
    fn from(value: CourseEditError) -> Self {
        Self::Edit(value)
    }
}

impl From<RepoError> for CourseServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::CourseNotFound(id),
            other => Self::Repo(other),
        }
    }
}

/// Input collected by the "add course" form.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCourse {
    pub name: String,
    /// Clamped to `1..=10` on create.
    pub credits: i64,
    pub partial_grades: Vec<PartialGrade>,
}

impl NewCourse {
    /// Form defaults: 3 credits and one partial grade weighing 100%.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            credits: i64::from(DEFAULT_CREDITS),
            partial_grades: vec![PartialGrade::new(PartialGrade::default_name(1), 100.0, 0.0)],
        }
    }
}

impl Default for NewCourse {
    fn default() -> Self {
        Self::new("")
    }
}

/// Course service facade over repository implementations.
pub struct CourseService<R: CourseRepository> {
    repo: R,
}

impl<R: CourseRepository> CourseService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a course in `semester` from form input.
    ///
    /// # Errors
    /// - `Edit(NoPartialGrades)` when the form has no partial grade.
    /// - `Validation` when weights exceed 100 or a grade is out of range.
    pub fn create_course(
        &mut self,
        new_course: NewCourse,
        semester: u32,
    ) -> Result<Course, CourseServiceError> {
        let semester = semester.max(MIN_SEMESTER);
        let color = palette_color(self.repo.count_courses(CourseScope::Semester(semester)));
        let course = Course::new(
            new_course.name,
            new_course.credits,
            semester,
            color,
            new_course.partial_grades,
        )?;

        if let Err(err) = course.validate() {
            warn!(
                "event=course_create module=course status=rejected error_code={}",
                err.code()
            );
            return Err(err.into());
        }

        self.repo.insert_course(course.clone())?;
        info!(
            "event=course_create module=course status=ok course_id={} semester={} grade={}",
            course.id,
            course.semester(),
            course.grade()
        );
        Ok(course)
    }

    /// Returns a detached copy of a stored course.
    ///
    /// Also serves read-only lookups. Edits on the draft are invisible until
    /// `save_course` succeeds.
    pub fn edit_course(&self, id: CourseId) -> Result<Course, CourseServiceError> {
        self.repo
            .get_course(id)
            .ok_or(CourseServiceError::CourseNotFound(id))
    }

    /// Validates `draft` and, on success, replaces the committed record.
    ///
    /// On failure the committed record is left untouched and the validation
    /// error carries the user-visible message.
    pub fn save_course(&mut self, draft: &Course) -> Result<Course, CourseServiceError> {
        if let Err(err) = draft.validate() {
            warn!(
                "event=course_save module=course status=rejected course_id={} error_code={}",
                draft.id,
                err.code()
            );
            return Err(err.into());
        }

        self.repo.replace_course(draft.clone())?;
        info!(
            "event=course_save module=course status=ok course_id={} grade={}",
            draft.id,
            draft.grade()
        );
        Ok(draft.clone())
    }

    /// Deletes a course and every partial grade it owns.
    pub fn delete_course(&mut self, id: CourseId) -> Result<Course, CourseServiceError> {
        let removed = self.repo.delete_course(id)?;
        info!("event=course_delete module=course status=ok course_id={id}");
        Ok(removed)
    }

    pub fn list_courses(&self, scope: CourseScope) -> Vec<Course> {
        self.repo.list_courses(scope)
    }

    /// Weighted average over the courses in `scope`.
    pub fn weighted_average(&self, scope: CourseScope) -> String {
        compute_weighted_average(&self.repo.list_courses(scope))
    }

    /// Current-semester, cumulative and overall averages.
    pub fn gpa_overview(&self, current_semester: u32) -> GpaOverview {
        GpaOverview::compute(&self.repo.list_courses(CourseScope::All), current_semester)
    }

    /// Per-semester summaries, ascending by semester.
    pub fn semester_summaries(&self) -> Vec<SemesterSummary> {
        summarize_semesters(&self.repo.list_courses(CourseScope::All))
    }
}

#[cfg(test)]
mod tests {
    use super::NewCourse;

    #[test]
    fn new_course_defaults_match_add_form() {
        let form = NewCourse::default();
        assert_eq!(form.credits, 3);
        assert_eq!(form.partial_grades.len(), 1);
        assert_eq!(form.partial_grades[0].name, "Partial 1");
        assert_eq!(form.partial_grades[0].weight, 100.0);
        assert_eq!(form.partial_grades[0].grade, 0.0);
    }
}
