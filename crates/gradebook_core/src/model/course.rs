//! Course and partial grade domain model.
//!
//! # Responsibility
//! - Define the course record and its owned, ordered partial grades.
//! - Provide edit helpers that clamp values live and keep `grade` derived.
//!
//! # Invariants
//! - `grade` equals `compute_course_grade(partial_grades)` after every mutation.
//! - `partial_grades` is never empty.
//! - `credits` stays within `CREDITS_MIN..=CREDITS_MAX`, `semester` >= 1.
//! - Partial weights stay within `0..=100` and grades within `0..=20`, on
//!   construction and deserialization as well as on live edits.
//! - Cross-field rules (total weight) are checked at save time, not here.

use crate::grade::engine::{
    clamp_credits, clamp_partial_grade_field, compute_course_grade, GradeField,
};
use crate::grade::validation::{validate_course, CourseValidationError};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier of a course.
pub type CourseId = Uuid;
/// Stable identifier of a partial grade inside its course.
pub type PartialGradeId = Uuid;

pub const GRADE_MIN: f64 = 0.0;
pub const GRADE_MAX: f64 = 20.0;
pub const WEIGHT_MIN: f64 = 0.0;
pub const WEIGHT_MAX: f64 = 100.0;
pub const CREDITS_MIN: u8 = 1;
pub const CREDITS_MAX: u8 = 10;
pub const DEFAULT_CREDITS: u8 = 3;
pub const MIN_SEMESTER: u32 = 1;
pub const MAX_SEMESTER: u32 = 10;

/// One weighted graded component of a course (exam, assignment, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartialGrade {
    pub id: PartialGradeId,
    pub name: String,
    /// Percentage points, `0..=100`.
    pub weight: f64,
    /// Grade on the `0..=20` scale.
    pub grade: f64,
}

impl PartialGrade {
    /// Creates a partial grade with a generated id.
    pub fn new(name: impl Into<String>, weight: f64, grade: f64) -> Self {
        Self::with_id(Uuid::new_v4(), name, weight, grade)
    }

    /// Creates a partial grade with a caller-provided id.
    pub fn with_id(id: PartialGradeId, name: impl Into<String>, weight: f64, grade: f64) -> Self {
        Self {
            id,
            name: name.into(),
            weight,
            grade,
        }
    }

    /// Default name for the `position`-th partial grade (1-based).
    pub fn default_name(position: usize) -> String {
        format!("Partial {position}")
    }

    /// `grade × weight`, before the fixed division by 100.
    pub fn contribution(&self) -> f64 {
        self.grade * self.weight
    }
}

/// Single-field edit applied to a partial grade from an edit form.
#[derive(Debug, Clone, PartialEq)]
pub enum PartialGradeEdit {
    Name(String),
    /// Clamped to `0..=100` when applied.
    Weight(f64),
    /// Clamped to `0..=20` when applied.
    Grade(f64),
}

/// Rejected structural edit on a course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CourseEditError {
    /// No partial grade with this id belongs to the course.
    PartialGradeNotFound(PartialGradeId),
    /// Removing the partial grade would leave the course without any.
    LastPartialGrade(PartialGradeId),
    /// A course cannot be built from an empty partial grade list.
    NoPartialGrades,
}

impl Display for CourseEditError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PartialGradeNotFound(id) => write!(f, "partial grade not found: {id}"),
            Self::LastPartialGrade(id) => write!(
                f,
                "partial grade {id} is the last one; a course needs at least one partial grade"
            ),
            Self::NoPartialGrades => write!(f, "a course needs at least one partial grade"),
        }
    }
}

impl Error for CourseEditError {}

/// Course record with its owned partial grades.
///
/// `grade` and `credits` are private so that the derived grade cannot be set
/// directly and credits cannot leave their bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CourseRecord")]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    credits: u8,
    grade: u8,
    /// Opaque display tag.
    pub color: String,
    semester: u32,
    partial_grades: Vec<PartialGrade>,
}

impl Course {
    /// Creates a course with a generated id.
    ///
    /// `credits` and every partial weight and grade are clamped, and
    /// `semester` is raised to at least 1.
    ///
    /// # Errors
    /// - `CourseEditError::NoPartialGrades` when `partial_grades` is empty.
    pub fn new(
        name: impl Into<String>,
        credits: i64,
        semester: u32,
        color: impl Into<String>,
        partial_grades: Vec<PartialGrade>,
    ) -> Result<Self, CourseEditError> {
        Self::with_id(
            Uuid::new_v4(),
            name,
            credits,
            semester,
            color,
            partial_grades,
        )
    }

    /// Creates a course with a caller-provided id.
    ///
    /// Used by import paths where identity already exists externally.
    pub fn with_id(
        id: CourseId,
        name: impl Into<String>,
        credits: i64,
        semester: u32,
        color: impl Into<String>,
        partial_grades: Vec<PartialGrade>,
    ) -> Result<Self, CourseEditError> {
        if partial_grades.is_empty() {
            return Err(CourseEditError::NoPartialGrades);
        }

        let partial_grades: Vec<PartialGrade> = partial_grades
            .into_iter()
            .map(|partial| PartialGrade {
                weight: clamp_partial_grade_field(GradeField::Weight, partial.weight),
                grade: clamp_partial_grade_field(GradeField::Grade, partial.grade),
                ..partial
            })
            .collect();
        let grade = compute_course_grade(&partial_grades);
        Ok(Self {
            id,
            name: name.into(),
            credits: clamp_credits(credits),
            grade,
            color: color.into(),
            semester: semester.max(MIN_SEMESTER),
            partial_grades,
        })
    }

    /// Derived course grade on the `0..=20` scale.
    pub fn grade(&self) -> u8 {
        self.grade
    }

    pub fn credits(&self) -> u8 {
        self.credits
    }

    /// 1-based semester the course belongs to.
    pub fn semester(&self) -> u32 {
        self.semester
    }

    pub fn partial_grades(&self) -> &[PartialGrade] {
        &self.partial_grades
    }

    /// Sum of all partial weights, in percentage points.
    pub fn total_weight(&self) -> f64 {
        self.partial_grades.iter().map(|partial| partial.weight).sum()
    }

    /// Runs the save-time checks against this course.
    pub fn validate(&self) -> Result<(), CourseValidationError> {
        validate_course(self)
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Sets credits, clamped to `CREDITS_MIN..=CREDITS_MAX`.
    pub fn set_credits(&mut self, credits: i64) {
        self.credits = clamp_credits(credits);
    }

    /// Appends a zero-weight partial grade named after its position.
    pub fn add_partial_grade(&mut self) -> PartialGradeId {
        let partial = PartialGrade::new(
            PartialGrade::default_name(self.partial_grades.len() + 1),
            0.0,
            0.0,
        );
        let id = partial.id;
        self.partial_grades.push(partial);
        self.recompute_grade();
        id
    }

    /// Applies one field edit to a partial grade and recomputes the course grade.
    ///
    /// Numeric fields are clamped to their own range. The total weight may
    /// still exceed 100 afterwards; that is reported by `validate`.
    pub fn update_partial_grade(
        &mut self,
        id: PartialGradeId,
        edit: PartialGradeEdit,
    ) -> Result<(), CourseEditError> {
        let partial = self
            .partial_grades
            .iter_mut()
            .find(|partial| partial.id == id)
            .ok_or(CourseEditError::PartialGradeNotFound(id))?;

        match edit {
            PartialGradeEdit::Name(name) => partial.name = name,
            PartialGradeEdit::Weight(value) => {
                partial.weight = clamp_partial_grade_field(GradeField::Weight, value);
            }
            PartialGradeEdit::Grade(value) => {
                partial.grade = clamp_partial_grade_field(GradeField::Grade, value);
            }
        }

        self.recompute_grade();
        Ok(())
    }

    /// Removes one partial grade.
    ///
    /// # Errors
    /// - `PartialGradeNotFound` when `id` is unknown.
    /// - `LastPartialGrade` when it is the only remaining partial grade; the
    ///   course is left unchanged.
    pub fn remove_partial_grade(
        &mut self,
        id: PartialGradeId,
    ) -> Result<PartialGrade, CourseEditError> {
        let index = self
            .partial_grades
            .iter()
            .position(|partial| partial.id == id)
            .ok_or(CourseEditError::PartialGradeNotFound(id))?;

        if self.partial_grades.len() == 1 {
            return Err(CourseEditError::LastPartialGrade(id));
        }

        let removed = self.partial_grades.remove(index);
        self.recompute_grade();
        Ok(removed)
    }

    fn recompute_grade(&mut self) {
        self.grade = compute_course_grade(&self.partial_grades);
    }

    /// Installs partial grades without clamping, to exercise save-time checks.
    #[cfg(test)]
    pub(crate) fn set_unclamped_partial_grades(&mut self, partial_grades: Vec<PartialGrade>) {
        self.partial_grades = partial_grades;
        self.recompute_grade();
    }
}

/// Wire shape accepted on deserialization.
///
/// A serialized `grade` is ignored and derived again from `partial_grades`.
#[derive(Debug, Deserialize)]
struct CourseRecord {
    id: CourseId,
    name: String,
    credits: i64,
    color: String,
    semester: u32,
    partial_grades: Vec<PartialGrade>,
}

impl TryFrom<CourseRecord> for Course {
    type Error = CourseEditError;

    fn try_from(value: CourseRecord) -> Result<Self, Self::Error> {
        Self::with_id(
            value.id,
            value.name,
            value.credits,
            value.semester,
            value.color,
            value.partial_grades,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{Course, CourseEditError, PartialGrade, PartialGradeEdit};

    fn course_with(partials: Vec<PartialGrade>) -> Course {
        Course::new("Calculus", 4, 1, "bg-pastel-pink", partials).unwrap()
    }

    #[test]
    fn new_rejects_empty_partial_list() {
        let err = Course::new("Empty", 3, 1, "c", Vec::new()).unwrap_err();
        assert_eq!(err, CourseEditError::NoPartialGrades);
    }

    #[test]
    fn new_clamps_credits_and_semester() {
        let course = Course::new("X", 40, 0, "c", vec![PartialGrade::new("P", 100.0, 10.0)])
            .unwrap();
        assert_eq!(course.credits(), 10);
        assert_eq!(course.semester(), 1);
        assert_eq!(course.grade(), 10);
    }

    #[test]
    fn new_clamps_incoming_partial_weights_and_grades() {
        let course = course_with(vec![
            PartialGrade::new("A", 150.0, 25.0),
            PartialGrade::new("B", -60.0, -4.0),
            PartialGrade::new("C", f64::NAN, f64::NAN),
        ]);
        let weights: Vec<f64> = course.partial_grades().iter().map(|p| p.weight).collect();
        let grades: Vec<f64> = course.partial_grades().iter().map(|p| p.grade).collect();
        assert_eq!(weights, vec![100.0, 0.0, 0.0]);
        assert_eq!(grades, vec![20.0, 0.0, 0.0]);
        assert_eq!(course.grade(), 20);
    }

    #[test]
    fn update_clamps_and_recomputes_grade() {
        let mut course = course_with(vec![PartialGrade::new("Exam", 100.0, 10.0)]);
        let id = course.partial_grades()[0].id;

        course
            .update_partial_grade(id, PartialGradeEdit::Grade(35.0))
            .unwrap();
        assert_eq!(course.partial_grades()[0].grade, 20.0);
        assert_eq!(course.grade(), 20);

        course
            .update_partial_grade(id, PartialGradeEdit::Weight(-5.0))
            .unwrap();
        assert_eq!(course.partial_grades()[0].weight, 0.0);
        assert_eq!(course.grade(), 0);
    }

    #[test]
    fn add_partial_uses_positional_name() {
        let mut course = course_with(vec![PartialGrade::new("Partial 1", 100.0, 0.0)]);
        let id = course.add_partial_grade();
        let added = course.partial_grades().last().unwrap();
        assert_eq!(added.id, id);
        assert_eq!(added.name, "Partial 2");
        assert_eq!(added.weight, 0.0);
    }

    #[test]
    fn remove_recomputes_grade() {
        let mut course = course_with(vec![
            PartialGrade::new("A", 50.0, 20.0),
            PartialGrade::new("B", 50.0, 10.0),
        ]);
        assert_eq!(course.grade(), 15);
        let second = course.partial_grades()[1].id;
        course.remove_partial_grade(second).unwrap();
        assert_eq!(course.grade(), 10);
    }
}
