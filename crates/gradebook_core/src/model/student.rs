//! Student profile record.

use serde::{Deserialize, Serialize};

const DEFAULT_STUDENT_NAME: &str = "Name / nickname";
const DEFAULT_STUDENT_CAREER: &str = "Career";
const DEFAULT_AVATAR: &str = "/placeholder.svg?height=80&width=80";

/// Singleton profile shown by the presentation layer.
///
/// The record is replaced wholesale on edit; fields are not validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub name: String,
    pub career: String,
    /// Avatar image reference, passed through untouched.
    pub avatar: String,
    pub semester: u32,
}

impl Default for Student {
    fn default() -> Self {
        Self {
            name: DEFAULT_STUDENT_NAME.to_string(),
            career: DEFAULT_STUDENT_CAREER.to_string(),
            avatar: DEFAULT_AVATAR.to_string(),
            semester: 1,
        }
    }
}

impl Student {
    /// Returns a copy with name and career replaced, keeping avatar and semester.
    pub fn with_profile(&self, name: impl Into<String>, career: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            career: career.into(),
            ..self.clone()
        }
    }
}
