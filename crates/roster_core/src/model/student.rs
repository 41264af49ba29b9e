//! Student domain model.
//!
//! # Responsibility
//! - Define persisted and insert-side student shapes.
//! - Validate email format before any write reaches storage.
//!
//! # Invariants
//! - `email` must match `^[\w.-]+@[\w.-]+\.\w+$`.
//! - `gpa` must be finite; SQLite would store NaN as NULL.
//! - `grades` is a reserved mapping; inserts always store `{}`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Anchored with Rust `$`, which matches only at the very end of the text,
/// so a trailing newline (`"a@b.c\n"`) is rejected. The legacy Python app
/// used `re.match` with `$`, which also accepted one trailing newline.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w.-]+@[\w.-]+\.\w+$").expect("valid email regex"));

/// Store-assigned student identifier.
pub type StudentId = i64;

/// Reserved per-subject grade mapping, serialized as JSON in `students.grades`.
pub type Grades = BTreeMap<String, f64>;

/// Persisted student row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub first_name: String,
    pub last_name: String,
    /// Intended range 0.0–4.0; not enforced by storage. NULL reads as 0.0.
    pub gpa: f64,
    pub major: String,
    /// Enrollment year. NULL reads as 0.
    pub year: i64,
    pub email: String,
    pub grades: Grades,
}

/// Insert-side student data. The identifier and grades are store-owned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewStudent {
    pub first_name: String,
    pub last_name: String,
    pub gpa: f64,
    pub major: String,
    pub year: i64,
    pub email: String,
}

impl NewStudent {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        gpa: f64,
        major: impl Into<String>,
        year: i64,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            gpa,
            major: major.into(),
            year,
            email: email.into(),
        }
    }

    /// Checks write-side invariants.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        if !self.gpa.is_finite() {
            return Err(ValidationError::NonFiniteGpa);
        }
        Ok(())
    }
}

/// Display-only student lookup result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentName {
    pub first_name: String,
    pub last_name: String,
}

/// Write-side validation failure. Carries no user data so it is log-safe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    InvalidEmail,
    NonFiniteGpa,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidEmail => f.write_str("email must look like local@domain.tld"),
            Self::NonFiniteGpa => f.write_str("gpa must be a finite number"),
        }
    }
}

impl Error for ValidationError {}

/// Returns whether `email` has the `local@domain.tld` shape accepted for students.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}
