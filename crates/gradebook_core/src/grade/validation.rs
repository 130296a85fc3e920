//! Save-time course validation.

use crate::model::course::{
    Course, PartialGradeId, GRADE_MAX, GRADE_MIN, WEIGHT_MAX, WEIGHT_MIN,
};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Holistic course check failure, surfaced to the user on save.
#[derive(Debug, Clone, PartialEq)]
pub enum CourseValidationError {
    /// Sum of partial weights is strictly greater than 100, or some weight
    /// lies outside `0..=100` or is not a number.
    WeightExceeded { total_weight: f64 },
    /// A partial grade lies outside `0..=20`.
    GradeOutOfRange {
        partial_id: PartialGradeId,
        grade: f64,
    },
}

impl CourseValidationError {
    /// User-facing message shown next to the edit form.
    pub fn message(&self) -> &'static str {
        match self {
            Self::WeightExceeded { .. } => "Total weight cannot exceed 100%",
            Self::GradeOutOfRange { .. } => "Grades must be between 0 and 20",
        }
    }

    /// Stable machine-readable code for logs.
    pub fn code(&self) -> &'static str {
        match self {
            Self::WeightExceeded { .. } => "weight_exceeded",
            Self::GradeOutOfRange { .. } => "grade_out_of_range",
        }
    }
}

impl Display for CourseValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WeightExceeded { total_weight } => {
                write!(f, "{} (total weight {total_weight})", self.message())
            }
            Self::GradeOutOfRange { partial_id, grade } => {
                write!(f, "{} (partial {partial_id} has {grade})", self.message())
            }
        }
    }
}

impl Error for CourseValidationError {}

/// Validates a course before it replaces the committed record.
///
/// The weight check runs first, so a course failing both rules reports
/// `WeightExceeded`. Exactly 100 is accepted. A single weight outside
/// `0..=100` fails even when the total looks fine.
pub fn validate_course(course: &Course) -> Result<(), CourseValidationError> {
    let total_weight = course.total_weight();
    // `contains` is false for NaN.
    let weights_in_range = course
        .partial_grades()
        .iter()
        .all(|partial| (WEIGHT_MIN..=WEIGHT_MAX).contains(&partial.weight));
    if !weights_in_range || total_weight > WEIGHT_MAX {
        return Err(CourseValidationError::WeightExceeded { total_weight });
    }

    if let Some(partial) = course
        .partial_grades()
        .iter()
        .find(|partial| !(GRADE_MIN..=GRADE_MAX).contains(&partial.grade))
    {
        return Err(CourseValidationError::GradeOutOfRange {
            partial_id: partial.id,
            grade: partial.grade,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{validate_course, CourseValidationError};
    use crate::model::course::{Course, PartialGrade};

    fn course(partials: Vec<PartialGrade>) -> Course {
        Course::new("Algebra", 3, 1, "c", partials).unwrap()
    }

    fn unclamped(partials: Vec<PartialGrade>) -> Course {
        let mut course = course(vec![PartialGrade::new("Seed", 0.0, 0.0)]);
        course.set_unclamped_partial_grades(partials);
        course
    }

    #[test]
    fn exactly_one_hundred_is_valid() {
        let course = course(vec![
            PartialGrade::new("A", 40.0, 12.0),
            PartialGrade::new("B", 60.0, 18.0),
        ]);
        assert_eq!(validate_course(&course), Ok(()));
    }

    #[test]
    fn weights_over_one_hundred_fail_regardless_of_grades() {
        let course = course(vec![
            PartialGrade::new("A", 60.0, 20.0),
            PartialGrade::new("B", 50.0, 20.0),
        ]);
        let err = validate_course(&course).unwrap_err();
        assert!(matches!(
            err,
            CourseValidationError::WeightExceeded { total_weight } if total_weight == 110.0
        ));
        assert_eq!(err.code(), "weight_exceeded");
    }

    #[test]
    fn grade_out_of_range_is_reported_with_partial_id() {
        let bad = PartialGrade::new("B", 50.0, 25.0);
        let bad_id = bad.id;
        let course = unclamped(vec![PartialGrade::new("A", 50.0, 10.0), bad]);
        assert_eq!(
            validate_course(&course),
            Err(CourseValidationError::GradeOutOfRange {
                partial_id: bad_id,
                grade: 25.0,
            })
        );
    }

    #[test]
    fn weight_check_wins_over_grade_check() {
        let course = unclamped(vec![PartialGrade::new("A", 120.0, -1.0)]);
        assert!(matches!(
            validate_course(&course),
            Err(CourseValidationError::WeightExceeded { .. })
        ));
    }

    #[test]
    fn negative_weight_cannot_offset_an_oversized_one() {
        let course = unclamped(vec![
            PartialGrade::new("A", 150.0, 20.0),
            PartialGrade::new("B", -60.0, 20.0),
        ]);
        assert!(matches!(
            validate_course(&course),
            Err(CourseValidationError::WeightExceeded { total_weight }) if total_weight == 90.0
        ));
    }

    #[test]
    fn nan_weight_is_rejected() {
        let course = unclamped(vec![
            PartialGrade::new("A", f64::NAN, 10.0),
            PartialGrade::new("B", 50.0, 10.0),
        ]);
        assert!(matches!(
            validate_course(&course),
            Err(CourseValidationError::WeightExceeded { .. })
        ));
    }
}
