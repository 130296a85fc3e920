//! Course repository contract and in-memory implementation.

use crate::model::course::{Course, CourseId};
use crate::repo::{RepoError, RepoResult};

/// Which courses a listing or average covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CourseScope {
    #[default]
    All,
    /// Courses of exactly this semester.
    Semester(u32),
    /// Courses of semesters strictly before this one.
    Before(u32),
}

impl CourseScope {
    pub fn contains(self, course: &Course) -> bool {
        match self {
            Self::All => true,
            Self::Semester(semester) => course.semester() == semester,
            Self::Before(semester) => course.semester() < semester,
        }
    }
}

/// Repository interface for course records.
pub trait CourseRepository {
    /// Appends a new course and returns its id.
    fn insert_course(&mut self, course: Course) -> RepoResult<CourseId>;
    /// Replaces the stored course with the same id.
    fn replace_course(&mut self, course: Course) -> RepoResult<()>;
    fn get_course(&self, id: CourseId) -> Option<Course>;
    /// Lists courses in the scope, in insertion order.
    fn list_courses(&self, scope: CourseScope) -> Vec<Course>;
    fn count_courses(&self, scope: CourseScope) -> usize;
    /// Removes a course together with its partial grades.
    fn delete_course(&mut self, id: CourseId) -> RepoResult<Course>;
}

/// `Vec`-backed course store preserving insertion order.
#[derive(Debug, Default, Clone)]
pub struct InMemoryCourseRepository {
    courses: Vec<Course>,
}

impl InMemoryCourseRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: CourseId) -> Option<usize> {
        self.courses.iter().position(|course| course.id == id)
    }
}

impl CourseRepository for InMemoryCourseRepository {
    fn insert_course(&mut self, course: Course) -> RepoResult<CourseId> {
        if self.position(course.id).is_some() {
            return Err(RepoError::DuplicateId(course.id));
        }
        let id = course.id;
        self.courses.push(course);
        Ok(id)
    }

    fn replace_course(&mut self, course: Course) -> RepoResult<()> {
        let index = self
            .position(course.id)
            .ok_or(RepoError::NotFound(course.id))?;
        self.courses[index] = course;
        Ok(())
    }

    fn get_course(&self, id: CourseId) -> Option<Course> {
        self.courses.iter().find(|course| course.id == id).cloned()
    }

    fn list_courses(&self, scope: CourseScope) -> Vec<Course> {
        self.courses
            .iter()
            .filter(|course| scope.contains(course))
            .cloned()
            .collect()
    }

    fn count_courses(&self, scope: CourseScope) -> usize {
        self.courses
            .iter()
            .filter(|course| scope.contains(course))
            .count()
    }

    fn delete_course(&mut self, id: CourseId) -> RepoResult<Course> {
        let index = self.position(id).ok_or(RepoError::NotFound(id))?;
        Ok(self.courses.remove(index))
    }
}
