//! Read-side projections over courses: grade bands, semester summaries and
//! the three GPA views.

use crate::grade::engine::compute_weighted_average_iter;
use crate::model::course::Course;
use serde::Serialize;
use std::collections::BTreeMap;

const SEMESTER_ORDINALS: [&str; 10] = [
    "First", "Second", "Third", "Fourth", "Fifth", "Sixth", "Seventh", "Eighth", "Ninth", "Tenth",
];

/// Coarse classification of a course grade on the `0..=20` scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GradeBand {
    Failing,
    Passing,
    Good,
    Excellent,
}

impl GradeBand {
    pub fn from_grade(grade: u8) -> Self {
        match grade {
            17..=u8::MAX => Self::Excellent,
            14..=16 => Self::Good,
            11..=13 => Self::Passing,
            _ => Self::Failing,
        }
    }
}

/// Human label for a 1-based semester index.
pub fn semester_label(semester: u32) -> String {
    semester
        .checked_sub(1)
        .and_then(|index| SEMESTER_ORDINALS.get(index as usize))
        .map(|ordinal| format!("{ordinal} Semester"))
        .unwrap_or_else(|| format!("Semester {semester}"))
}

/// Aggregate figures for one semester.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SemesterSummary {
    pub semester: u32,
    pub label: String,
    pub course_count: usize,
    pub total_credits: u32,
    /// One-decimal weighted average, as produced by `compute_weighted_average`.
    pub average: String,
}

/// Groups courses by semester, ascending.
///
/// Semesters without courses are not listed.
pub fn summarize_semesters(courses: &[Course]) -> Vec<SemesterSummary> {
    let mut grouped: BTreeMap<u32, Vec<&Course>> = BTreeMap::new();
    for course in courses {
        grouped.entry(course.semester()).or_default().push(course);
    }

    grouped
        .into_iter()
        .map(|(semester, members)| SemesterSummary {
            semester,
            label: semester_label(semester),
            course_count: members.len(),
            total_credits: members
                .iter()
                .map(|course| u32::from(course.credits()))
                .sum(),
            average: compute_weighted_average_iter(members.iter().copied()),
        })
        .collect()
}

/// The three weighted averages shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GpaOverview {
    /// Courses with `semester == current`.
    pub current_semester: String,
    /// Courses with `semester < current`.
    pub cumulative: String,
    /// Every stored course.
    pub overall: String,
}

impl GpaOverview {
    /// Computes the three views for `current_semester`.
    pub fn compute(courses: &[Course], current_semester: u32) -> Self {
        Self {
            current_semester: compute_weighted_average_iter(
                courses
                    .iter()
                    .filter(|course| course.semester() == current_semester),
            ),
            cumulative: compute_weighted_average_iter(
                courses
                    .iter()
                    .filter(|course| course.semester() < current_semester),
            ),
            overall: compute_weighted_average_iter(courses),
        }
    }
}
