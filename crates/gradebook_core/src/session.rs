//! Explicit application state for one tracker session.
//!
//! # Responsibility
//! - Own the student profile, selected semester, courses and notes.
//! - Route presentation-layer calls to the course and note services.
//!
//! # Invariants
//! - `current_semester` stays within `MIN_SEMESTER..=MAX_SEMESTER`.
//! - All writes take `&mut self`, so there is a single writer at a time.

use crate::grade::summary::GpaOverview;
use crate::model::course::{Course, MAX_SEMESTER, MIN_SEMESTER};
use crate::model::student::Student;
use crate::repo::course_repo::{CourseScope, InMemoryCourseRepository};
use crate::repo::note_repo::InMemoryNoteRepository;
use crate::service::course_service::CourseService;
use crate::service::note_service::NoteService;

/// In-memory state shared by every view of the tracker.
pub struct AcademicSession {
    student: Student,
    current_semester: u32,
    courses: CourseService<InMemoryCourseRepository>,
    notes: NoteService<InMemoryNoteRepository>,
}

impl Default for AcademicSession {
    fn default() -> Self {
        Self::new(Student::default())
    }
}

impl AcademicSession {
    /// Starts an empty session on the first semester.
    pub fn new(student: Student) -> Self {
        Self {
            student,
            current_semester: MIN_SEMESTER,
            courses: CourseService::new(InMemoryCourseRepository::new()),
            notes: NoteService::new(InMemoryNoteRepository::new()),
        }
    }

    pub fn student(&self) -> &Student {
        &self.student
    }

    /// Replaces the profile record wholesale.
    pub fn set_student(&mut self, student: Student) {
        self.student = student;
    }

    /// Replaces name and career from the profile edit form.
    pub fn update_profile(&mut self, name: impl Into<String>, career: impl Into<String>) {
        self.student = self.student.with_profile(name, career);
    }

    pub fn current_semester(&self) -> u32 {
        self.current_semester
    }

    /// Selects a semester, clamped to `1..=10`.
    pub fn select_semester(&mut self, semester: u32) {
        self.current_semester = semester.clamp(MIN_SEMESTER, MAX_SEMESTER);
    }

    /// Moves to the next semester; stays put on the last one.
    pub fn next_semester(&mut self) {
        if self.current_semester < MAX_SEMESTER {
            self.current_semester += 1;
        }
    }

    /// Moves to the previous semester; stays put on the first one.
    pub fn previous_semester(&mut self) {
        if self.current_semester > MIN_SEMESTER {
            self.current_semester -= 1;
        }
    }

    pub fn courses(&self) -> &CourseService<InMemoryCourseRepository> {
        &self.courses
    }

    pub fn courses_mut(&mut self) -> &mut CourseService<InMemoryCourseRepository> {
        &mut self.courses
    }

    pub fn notes(&self) -> &NoteService<InMemoryNoteRepository> {
        &self.notes
    }

    pub fn notes_mut(&mut self) -> &mut NoteService<InMemoryNoteRepository> {
        &mut self.notes
    }

    /// Courses of the selected semester, in creation order.
    pub fn semester_courses(&self) -> Vec<Course> {
        self.courses
            .list_courses(CourseScope::Semester(self.current_semester))
    }

    /// The three dashboard averages for the selected semester.
    pub fn gpa_overview(&self) -> GpaOverview {
        self.courses.gpa_overview(self.current_semester)
    }
}
