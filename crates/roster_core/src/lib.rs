//! Core data-access layer for the student/exam roster.
//! This crate owns the local record store and every read/write against it.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{ReferentialIntegrity, StoreConfig, StoreLocation, DEFAULT_DB_FILE_NAME};
pub use db::{DbError, DbResult, RecordStore};
pub use logging::{default_log_level, init_logging, logging_status, LogSettings, LoggingError};
pub use model::assignment::AssignmentRow;
pub use model::exam::{Exam, ExamId, NewExam};
pub use model::input::{
    parse_enrollment_year, parse_gpa, parse_record_id, require_non_empty, InputError,
};
pub use model::sort::{AssignmentSortColumn, ExamSortColumn, StudentSortColumn};
pub use model::student::{
    is_valid_email, Grades, NewStudent, Student, StudentId, StudentName, ValidationError,
};
pub use repo::assignment_repo::{AssignmentRepository, SqliteAssignmentRepository};
pub use repo::exam_repo::{ExamRepository, SqliteExamRepository};
pub use repo::student_repo::{SqliteStudentRepository, StudentRepository};
pub use repo::{EntityKind, RepoError, RepoResult};
pub use service::roster_service::{RosterService, RosterSummary, StudentExamOverview};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
