//! Student/exam assignment repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Insert student/exam links.
//! - Provide joined reads across `student_exams`, `students` and `exams`.
//!
//! # Invariants
//! - The same pair may be assigned any number of times.
//! - Joined reads use inner joins: links to deleted rows are dropped silently.
//! - Permissive stores do not check that referenced ids exist.

use super::exam_repo::parse_exam_row;
use super::{count_rows, RepoResult};
use crate::db::RecordStore;
use crate::model::assignment::AssignmentRow;
use crate::model::exam::{Exam, ExamId};
use crate::model::sort::AssignmentSortColumn;
use crate::model::student::StudentId;
use rusqlite::params;

/// Repository interface for assignment operations.
pub trait AssignmentRepository {
    /// Links a student to an exam.
    fn assign_student_to_exam(&self, student_id: StudentId, exam_id: ExamId) -> RepoResult<()>;
    /// Lists links whose student and exam both exist, ascending by `order_by`.
    fn get_all_assignments(
        &self,
        order_by: AssignmentSortColumn,
    ) -> RepoResult<Vec<AssignmentRow>>;
    /// Lists the exams linked to one student, in assignment order.
    fn get_exams_for_student(&self, student_id: StudentId) -> RepoResult<Vec<Exam>>;
    /// Counts raw link rows, orphans included.
    fn count_assignments(&self) -> RepoResult<u64>;
}

/// SQLite-backed assignment repository.
pub struct SqliteAssignmentRepository<'store> {
    store: &'store RecordStore,
}

impl<'store> SqliteAssignmentRepository<'store> {
    pub fn new(store: &'store RecordStore) -> Self {
        Self { store }
    }
}

impl AssignmentRepository for SqliteAssignmentRepository<'_> {
    fn assign_student_to_exam(&self, student_id: StudentId, exam_id: ExamId) -> RepoResult<()> {
        self.store.connection().execute(
            "INSERT INTO student_exams (student_id, exam_id) VALUES (?1, ?2);",
            params![student_id, exam_id],
        )?;
        Ok(())
    }

    fn get_all_assignments(
        &self,
        order_by: AssignmentSortColumn,
    ) -> RepoResult<Vec<AssignmentRow>> {
        let mut stmt = self.store.connection().prepare(&format!(
            "SELECT
                se.student_id,
                s.name,
                e.exam_id,
                e.exam_name
             FROM student_exams se
             INNER JOIN students s ON s.student_id = se.student_id
             INNER JOIN exams e ON e.exam_id = se.exam_id
             ORDER BY {} ASC, se.rowid ASC;",
            order_by.sql_column()
        ))?;
        let mut rows = stmt.query([])?;
        let mut assignments = Vec::new();

        while let Some(row) = rows.next()? {
            assignments.push(AssignmentRow {
                student_id: row.get(0)?,
                student_name: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
                exam_id: row.get(2)?,
                exam_name: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
            });
        }

        Ok(assignments)
    }

    fn get_exams_for_student(&self, student_id: StudentId) -> RepoResult<Vec<Exam>> {
        let mut stmt = self.store.connection().prepare(
            "SELECT
                e.exam_id,
                e.exam_name,
                e.exam_date,
                e.description
             FROM student_exams se
             INNER JOIN exams e ON e.exam_id = se.exam_id
             WHERE se.student_id = ?1
             ORDER BY se.rowid ASC;",
        )?;
        let mut rows = stmt.query([student_id])?;
        let mut exams = Vec::new();

        while let Some(row) = rows.next()? {
            exams.push(parse_exam_row(row)?);
        }

        Ok(exams)
    }

    fn count_assignments(&self) -> RepoResult<u64> {
        count_rows(self.store, "student_exams")
    }
}
