//! Exam domain model.
//!
//! Exams carry no write-side validation; the presentation shell requires a
//! non-empty name and date before calling in.

use serde::{Deserialize, Serialize};

/// Store-assigned exam identifier.
pub type ExamId = i64;

/// Persisted exam row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exam {
    pub id: ExamId,
    pub name: String,
    /// Free text, conventionally `YYYY-MM-DD`.
    pub date: String,
    /// Empty when the exam has no description.
    pub description: String,
}

/// Insert-side exam data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewExam {
    pub name: String,
    pub date: String,
    pub description: String,
}

impl NewExam {
    pub fn new(
        name: impl Into<String>,
        date: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            date: date.into(),
            description: description.into(),
        }
    }
}
