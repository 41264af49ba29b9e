//! Roster use-case service.
//!
//! # Responsibility
//! - Provide the entry points the presentation shell calls for students,
//!   exams and assignments.
//! - Emit one metadata-only log event per mutating call.
//!
//! # Invariants
//! - Service APIs never bypass repository validation/persistence contracts.
//! - Failures are returned unchanged; logging never alters the outcome.

use crate::db::RecordStore;
use crate::model::assignment::AssignmentRow;
use crate::model::exam::{Exam, ExamId, NewExam};
use crate::model::sort::{AssignmentSortColumn, ExamSortColumn, StudentSortColumn};
use crate::model::student::{NewStudent, Student, StudentId, StudentName};
use crate::repo::assignment_repo::{AssignmentRepository, SqliteAssignmentRepository};
use crate::repo::exam_repo::{ExamRepository, SqliteExamRepository};
use crate::repo::student_repo::{SqliteStudentRepository, StudentRepository};
use crate::repo::{RepoError, RepoResult};
use log::{error, info, warn};

/// Row totals shown at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterSummary {
    pub students: u64,
    pub exams: u64,
    /// Raw link rows, orphans included.
    pub assignments: u64,
}

/// One student's name together with the exams assigned to them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentExamOverview {
    pub student_id: StudentId,
    pub name: StudentName,
    pub exams: Vec<Exam>,
}

/// Use-case facade over the three roster repositories.
pub struct RosterService<S, E, A> {
    students: S,
    exams: E,
    assignments: A,
}

impl<'store>
    RosterService<
        SqliteStudentRepository<'store>,
        SqliteExamRepository<'store>,
        SqliteAssignmentRepository<'store>,
    >
{
    /// Wires SQLite repositories that all share `store`.
    pub fn for_store(store: &'store RecordStore) -> Self {
        Self::new(
            SqliteStudentRepository::new(store),
            SqliteExamRepository::new(store),
            SqliteAssignmentRepository::new(store),
        )
    }
}

impl<S, E, A> RosterService<S, E, A>
where
    S: StudentRepository,
    E: ExamRepository,
    A: AssignmentRepository,
{
    pub fn new(students: S, exams: E, assignments: A) -> Self {
        Self {
            students,
            exams,
            assignments,
        }
    }

    pub fn add_student(&self, student: &NewStudent) -> RepoResult<StudentId> {
        let result = self.students.add_student(student);
        log_outcome("student_add", &result);
        result
    }

    pub fn delete_student(&self, id: StudentId) -> RepoResult<()> {
        let result = self.students.delete_student(id);
        log_outcome("student_delete", &result);
        result
    }

    pub fn students(&self, order_by: StudentSortColumn) -> RepoResult<Vec<Student>> {
        self.students.get_all_students(order_by)
    }

    pub fn student_name(&self, id: StudentId) -> RepoResult<Option<StudentName>> {
        self.students.get_student_by_id(id)
    }

    pub fn add_exam(&self, exam: &NewExam) -> RepoResult<ExamId> {
        let result = self.exams.add_exam(exam);
        log_outcome("exam_add", &result);
        result
    }

    pub fn delete_exam(&self, id: ExamId) -> RepoResult<()> {
        let result = self.exams.delete_exam(id);
        log_outcome("exam_delete", &result);
        result
    }

    pub fn exams(&self, order_by: ExamSortColumn) -> RepoResult<Vec<Exam>> {
        self.exams.get_all_exams(order_by)
    }

    pub fn assign(&self, student_id: StudentId, exam_id: ExamId) -> RepoResult<()> {
        let result = self.assignments.assign_student_to_exam(student_id, exam_id);
        log_outcome("exam_assign", &result);
        result
    }

    pub fn assignments(&self, order_by: AssignmentSortColumn) -> RepoResult<Vec<AssignmentRow>> {
        self.assignments.get_all_assignments(order_by)
    }

    pub fn exams_for_student(&self, student_id: StudentId) -> RepoResult<Vec<Exam>> {
        self.assignments.get_exams_for_student(student_id)
    }

    /// Looks up a student and their exams in one call.
    ///
    /// Returns `None` when the student does not exist, even if orphaned
    /// assignment rows still reference the id.
    pub fn student_exam_overview(
        &self,
        student_id: StudentId,
    ) -> RepoResult<Option<StudentExamOverview>> {
        let Some(name) = self.students.get_student_by_id(student_id)? else {
            return Ok(None);
        };
        let exams = self.assignments.get_exams_for_student(student_id)?;
        Ok(Some(StudentExamOverview {
            student_id,
            name,
            exams,
        }))
    }

    pub fn summary(&self) -> RepoResult<RosterSummary> {
        Ok(RosterSummary {
            students: self.students.count_students()?,
            exams: self.exams.count_exams()?,
            assignments: self.assignments.count_assignments()?,
        })
    }
}

fn log_outcome<T>(event: &str, result: &RepoResult<T>) {
    match result {
        Ok(_) => info!("event={event} module=roster_service status=ok"),
        Err(err @ (RepoError::Validation(_) | RepoError::NotFound { .. })) => warn!(
            "event={event} module=roster_service status=rejected error_code={}",
            err.code()
        ),
        Err(err) => error!(
            "event={event} module=roster_service status=error error_code={} error={err}",
            err.code()
        ),
    }
}
