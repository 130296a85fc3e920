//! Course grade and weighted average computation.

use crate::model::course::{
    Course, PartialGrade, CREDITS_MAX, CREDITS_MIN, GRADE_MAX, GRADE_MIN, WEIGHT_MAX, WEIGHT_MIN,
};

const EMPTY_AVERAGE: &str = "0.0";

/// Numeric partial grade field that is clamped on every edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeField {
    /// `0..=20`
    Grade,
    /// `0..=100`
    Weight,
}

impl GradeField {
    /// Inclusive `(min, max)` bounds of this field.
    pub fn bounds(self) -> (f64, f64) {
        match self {
            Self::Grade => (GRADE_MIN, GRADE_MAX),
            Self::Weight => (WEIGHT_MIN, WEIGHT_MAX),
        }
    }
}

/// Computes a course grade from its partial grades.
///
/// Returns 0 when the total weight is 0. Otherwise returns
/// `round_half_up(Σ(grade × weight) / 100)`. Partial sets weighing less than
/// 100% are not normalized and yield a proportionally lower grade.
///
/// The result is clamped into `0..=20` for drafts that were not validated yet.
pub fn compute_course_grade(partial_grades: &[PartialGrade]) -> u8 {
    let total_weight: f64 = partial_grades.iter().map(|partial| partial.weight).sum();
    if total_weight == 0.0 {
        return 0;
    }

    let weighted: f64 = partial_grades.iter().map(PartialGrade::contribution).sum();
    // NaN saturates to 0 in the cast.
    round_half_up(weighted / 100.0).clamp(GRADE_MIN, GRADE_MAX) as u8
}

/// Clamps a live-edited numeric field into its own range.
///
/// NaN input maps to the lower bound. This does not replace the cross-field
/// total weight check done by `validate_course`.
pub fn clamp_partial_grade_field(field: GradeField, value: f64) -> f64 {
    let (min, max) = field.bounds();
    if value.is_nan() {
        return min;
    }
    value.clamp(min, max)
}

/// Clamps credits into `1..=10`.
pub fn clamp_credits(value: i64) -> u8 {
    value.clamp(i64::from(CREDITS_MIN), i64::from(CREDITS_MAX)) as u8
}

/// Credit-weighted average course grade, formatted with one decimal.
///
/// Returns `"0.0"` for an empty set or zero total credits. Scope filtering
/// (current semester, prior semesters, all) is the caller's concern.
pub fn compute_weighted_average(courses: &[Course]) -> String {
    compute_weighted_average_iter(courses)
}

/// Same as `compute_weighted_average`, over any iterator of course refs.
pub fn compute_weighted_average_iter<'a, I>(courses: I) -> String
where
    I: IntoIterator<Item = &'a Course>,
{
    let (weighted_sum, total_credits) =
        courses
            .into_iter()
            .fold((0_u64, 0_u64), |(weighted, credits), course| {
                (
                    weighted + u64::from(course.grade()) * u64::from(course.credits()),
                    credits + u64::from(course.credits()),
                )
            });

    if total_credits == 0 {
        return EMPTY_AVERAGE.to_string();
    }

    format_one_decimal(weighted_sum as f64 / total_credits as f64)
}

/// Formats with exactly one decimal, rounding ties upward.
pub fn format_one_decimal(value: f64) -> String {
    let tenths = round_half_up(value * 10.0);
    format!("{:.1}", tenths / 10.0)
}

fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::{
        clamp_credits, clamp_partial_grade_field, compute_course_grade, format_one_decimal,
        GradeField,
    };
    use crate::model::course::PartialGrade;

    fn partial(weight: f64, grade: f64) -> PartialGrade {
        PartialGrade::new("p", weight, grade)
    }

    #[test]
    fn zero_total_weight_yields_zero() {
        assert_eq!(compute_course_grade(&[]), 0);
        assert_eq!(compute_course_grade(&[partial(0.0, 20.0), partial(0.0, 15.0)]), 0);
    }

    #[test]
    fn full_weight_perfect_grades_yield_twenty() {
        assert_eq!(compute_course_grade(&[partial(50.0, 20.0), partial(50.0, 20.0)]), 20);
    }

    #[test]
    fn divisor_is_fixed_at_one_hundred() {
        // (30*10 + 30*20) / 100 = 9, not 15.
        assert_eq!(compute_course_grade(&[partial(30.0, 10.0), partial(30.0, 20.0)]), 9);
    }

    #[test]
    fn rounds_half_up() {
        // 50 * 13 / 100 = 6.5
        assert_eq!(compute_course_grade(&[partial(50.0, 13.0)]), 7);
        // 50 * 12.9 / 100 = 6.45
        assert_eq!(compute_course_grade(&[partial(50.0, 12.9)]), 6);
    }

    #[test]
    fn out_of_range_draft_is_clamped() {
        assert_eq!(compute_course_grade(&[partial(100.0, 45.0)]), 20);
        assert_eq!(compute_course_grade(&[partial(100.0, -3.0)]), 0);
    }

    #[test]
    fn clamp_field_bounds() {
        assert_eq!(clamp_partial_grade_field(GradeField::Grade, 21.5), 20.0);
        assert_eq!(clamp_partial_grade_field(GradeField::Grade, -1.0), 0.0);
        assert_eq!(clamp_partial_grade_field(GradeField::Weight, 150.0), 100.0);
        assert_eq!(clamp_partial_grade_field(GradeField::Weight, 42.5), 42.5);
        assert_eq!(clamp_partial_grade_field(GradeField::Weight, f64::NAN), 0.0);
    }

    #[test]
    fn clamp_credits_bounds() {
        assert_eq!(clamp_credits(0), 1);
        assert_eq!(clamp_credits(-7), 1);
        assert_eq!(clamp_credits(5), 5);
        assert_eq!(clamp_credits(11), 10);
    }

    #[test]
    fn one_decimal_rounds_ties_up() {
        assert_eq!(format_one_decimal(16.25), "16.3");
        assert_eq!(format_one_decimal(16.666_666), "16.7");
        assert_eq!(format_one_decimal(15.0), "15.0");
    }
}
