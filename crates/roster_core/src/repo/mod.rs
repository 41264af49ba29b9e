//! Repository layer contracts and SQLite implementations.
//!
//! # Responsibility
//! - Define per-entity data access contracts over the record store.
//! - Keep SQL text inside the persistence boundary.
//!
//! # Invariants
//! - Student writes call `NewStudent::validate()` before any SQL mutation.
//! - Repository APIs report validation, not-found and storage failures as
//!   distinct `RepoError` variants; nothing is folded into a bare bool.
//! - Sort order reaches SQL only through the closed sort-column enums.

use crate::config::ReferentialIntegrity;
use crate::db::{DbError, RecordStore};
use crate::model::student::ValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod assignment_repo;
pub mod exam_repo;
pub mod student_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Entity named in a not-found error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Student,
    Exam,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Exam => "exam",
        }
    }
}

/// Tagged failure outcome for every repository operation.
#[derive(Debug)]
pub enum RepoError {
    /// Input rejected before storage was touched.
    Validation(ValidationError),
    /// Storage engine fault (constraint violation, I/O, disk full).
    Db(DbError),
    /// Delete targeted an identifier with no matching row.
    NotFound { entity: EntityKind, id: i64 },
    /// Persisted row could not be decoded.
    InvalidData(String),
}

impl RepoError {
    /// Stable short code for log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation_failed",
            Self::Db(_) => "db_error",
            Self::NotFound { .. } => "not_found",
            Self::InvalidData(_) => "invalid_data",
        }
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound { entity, id } => write!(f, "{} not found: {id}", entity.as_str()),
            Self::InvalidData(message) => write!(f, "invalid persisted roster data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound { .. } => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Deletes one parent row by id, honoring the store's integrity mode.
///
/// In strict mode the dependent `student_exams` rows are removed first, in
/// the same transaction. A miss rolls the transaction back.
fn delete_by_id(
    store: &RecordStore,
    entity: EntityKind,
    delete_sql: &str,
    unlink_sql: &str,
    id: i64,
) -> RepoResult<()> {
    let conn = store.connection();
    let changed = match store.integrity() {
        ReferentialIntegrity::Permissive => conn.execute(delete_sql, [id])?,
        ReferentialIntegrity::Strict => {
            let tx = conn.unchecked_transaction()?;
            tx.execute(unlink_sql, [id])?;
            let changed = tx.execute(delete_sql, [id])?;
            if changed > 0 {
                tx.commit()?;
            }
            changed
        }
    };

    if changed == 0 {
        return Err(RepoError::NotFound { entity, id });
    }

    Ok(())
}

fn count_rows(store: &RecordStore, table: &'static str) -> RepoResult<u64> {
    let count: i64 = store
        .connection()
        .query_row(&format!("SELECT COUNT(*) FROM {table};"), [], |row| {
            row.get(0)
        })?;
    u64::try_from(count)
        .map_err(|_| RepoError::InvalidData(format!("negative row count for `{table}`")))
}
