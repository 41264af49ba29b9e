//! Parsing helpers for raw text collected by the presentation shell.
//!
//! # Responsibility
//! - Turn form/dialog text into the typed values repositories accept.
//! - Enforce the form-level ranges the shell applies (GPA, enrollment year).
//!
//! # Invariants
//! - Repositories assume well-typed input; these checks run before them.
//! - Input is trimmed before parsing.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub const GPA_MIN: f64 = 0.0;
pub const GPA_MAX: f64 = 4.0;
pub const FIRST_ENROLLMENT_YEAR: i64 = 1999;

/// Shell input rejected before reaching a repository.
#[derive(Debug, Clone, PartialEq)]
pub enum InputError {
    Empty { field: &'static str },
    NotANumber { field: &'static str },
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
    },
}

impl Display for InputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} is required"),
            Self::NotANumber { field } => write!(f, "{field} must be a number"),
            Self::OutOfRange { field, min, max } => {
                write!(f, "{field} must be between {min} and {max}")
            }
        }
    }
}

impl Error for InputError {}

/// Parses a positive record identifier typed by the user.
pub fn parse_record_id(text: &str) -> Result<i64, InputError> {
    let value = require_non_empty("id", text)?
        .parse::<i64>()
        .map_err(|_| InputError::NotANumber { field: "id" })?;
    if value < 1 {
        return Err(InputError::OutOfRange {
            field: "id",
            min: 1.0,
            max: i64::MAX as f64,
        });
    }
    Ok(value)
}

/// Parses a GPA in `0.0..=4.0` using `.` as the decimal separator.
pub fn parse_gpa(text: &str) -> Result<f64, InputError> {
    let value = require_non_empty("gpa", text)?
        .parse::<f64>()
        .map_err(|_| InputError::NotANumber { field: "gpa" })?;
    if !value.is_finite() || !(GPA_MIN..=GPA_MAX).contains(&value) {
        return Err(InputError::OutOfRange {
            field: "gpa",
            min: GPA_MIN,
            max: GPA_MAX,
        });
    }
    Ok(value)
}

/// Parses an enrollment year between 1999 and `current_year` inclusive.
pub fn parse_enrollment_year(text: &str, current_year: i64) -> Result<i64, InputError> {
    let value = require_non_empty("year", text)?
        .parse::<i64>()
        .map_err(|_| InputError::NotANumber { field: "year" })?;
    if !(FIRST_ENROLLMENT_YEAR..=current_year).contains(&value) {
        return Err(InputError::OutOfRange {
            field: "year",
            min: FIRST_ENROLLMENT_YEAR as f64,
            max: current_year as f64,
        });
    }
    Ok(value)
}

/// Returns the trimmed value, or `Empty` when nothing is left.
pub fn require_non_empty(field: &'static str, text: &str) -> Result<String, InputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty { field });
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::{parse_enrollment_year, parse_gpa, parse_record_id, require_non_empty, InputError};

    #[test]
    fn record_id_must_be_positive_integer() {
        assert_eq!(parse_record_id(" 42 ").unwrap(), 42);
        assert_eq!(
            parse_record_id("abc"),
            Err(InputError::NotANumber { field: "id" })
        );
        assert!(matches!(
            parse_record_id("0"),
            Err(InputError::OutOfRange { field: "id", .. })
        ));
        assert_eq!(parse_record_id(""), Err(InputError::Empty { field: "id" }));
    }

    #[test]
    fn gpa_is_bounded_and_uses_dot_separator() {
        assert_eq!(parse_gpa("3.75").unwrap(), 3.75);
        assert_eq!(parse_gpa("0").unwrap(), 0.0);
        assert_eq!(parse_gpa("4.0").unwrap(), 4.0);
        assert!(matches!(
            parse_gpa("4.01"),
            Err(InputError::OutOfRange { field: "gpa", .. })
        ));
        assert!(matches!(
            parse_gpa("NaN"),
            Err(InputError::OutOfRange { field: "gpa", .. })
        ));
        assert_eq!(
            parse_gpa("3,5"),
            Err(InputError::NotANumber { field: "gpa" })
        );
    }

    #[test]
    fn enrollment_year_window_ends_at_current_year() {
        assert_eq!(parse_enrollment_year("2022", 2026).unwrap(), 2022);
        assert_eq!(parse_enrollment_year("1999", 2026).unwrap(), 1999);
        assert!(parse_enrollment_year("1998", 2026).is_err());
        assert!(parse_enrollment_year("2027", 2026).is_err());
    }

    #[test]
    fn require_non_empty_trims() {
        assert_eq!(require_non_empty("name", "  Midterm ").unwrap(), "Midterm");
        assert_eq!(
            require_non_empty("name", "   "),
            Err(InputError::Empty { field: "name" })
        );
    }
}
