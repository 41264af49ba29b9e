//! Exam repository contract and SQLite implementation.
//!
//! # Invariants
//! - No field validation happens here; callers supply name and date.
//! - NULL name, date or description columns read back as empty strings.

use super::{count_rows, delete_by_id, EntityKind, RepoResult};
use crate::db::RecordStore;
use crate::model::exam::{Exam, ExamId, NewExam};
use crate::model::sort::ExamSortColumn;
use rusqlite::{params, Row};

const EXAM_SELECT_SQL: &str = "SELECT
    exam_id,
    exam_name,
    exam_date,
    description
FROM exams";

/// Repository interface for exam operations.
pub trait ExamRepository {
    fn add_exam(&self, exam: &NewExam) -> RepoResult<ExamId>;
    fn delete_exam(&self, id: ExamId) -> RepoResult<()>;
    fn get_all_exams(&self, order_by: ExamSortColumn) -> RepoResult<Vec<Exam>>;
    fn count_exams(&self) -> RepoResult<u64>;
}

/// SQLite-backed exam repository.
pub struct SqliteExamRepository<'store> {
    store: &'store RecordStore,
}

impl<'store> SqliteExamRepository<'store> {
    pub fn new(store: &'store RecordStore) -> Self {
        Self { store }
    }
}

impl ExamRepository for SqliteExamRepository<'_> {
    fn add_exam(&self, exam: &NewExam) -> RepoResult<ExamId> {
        let conn = self.store.connection();
        conn.execute(
            "INSERT INTO exams (exam_name, exam_date, description) VALUES (?1, ?2, ?3);",
            params![
                exam.name.as_str(),
                exam.date.as_str(),
                exam.description.as_str()
            ],
        )?;

        Ok(conn.last_insert_rowid())
    }

    fn delete_exam(&self, id: ExamId) -> RepoResult<()> {
        delete_by_id(
            self.store,
            EntityKind::Exam,
            "DELETE FROM exams WHERE exam_id = ?1;",
            "DELETE FROM student_exams WHERE exam_id = ?1;",
            id,
        )
    }

    fn get_all_exams(&self, order_by: ExamSortColumn) -> RepoResult<Vec<Exam>> {
        let mut stmt = self.store.connection().prepare(&format!(
            "{EXAM_SELECT_SQL}
             ORDER BY {} ASC, exam_id ASC;",
            order_by.sql_column()
        ))?;
        let mut rows = stmt.query([])?;
        let mut exams = Vec::new();

        while let Some(row) = rows.next()? {
            exams.push(parse_exam_row(row)?);
        }

        Ok(exams)
    }

    fn count_exams(&self) -> RepoResult<u64> {
        count_rows(self.store, "exams")
    }
}

/// Decodes `(exam_id, exam_name, exam_date, description)` by position.
pub(crate) fn parse_exam_row(row: &Row<'_>) -> RepoResult<Exam> {
    Ok(Exam {
        id: row.get(0)?,
        name: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
        date: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        description: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
    })
}
