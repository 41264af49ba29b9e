//! Student repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide add/delete/list/lookup APIs over the `students` table.
//!
//! # Invariants
//! - Invalid emails never reach SQL.
//! - New rows are stored with an empty `{}` grades mapping.
//! - NULL columns (legacy rows) read back as empty text or zero; one such
//!   row never fails the whole listing.
//! - Permissive stores leave assignment rows in place on delete.

use super::{count_rows, delete_by_id, EntityKind, RepoError, RepoResult};
use crate::db::RecordStore;
use crate::model::sort::StudentSortColumn;
use crate::model::student::{Grades, NewStudent, Student, StudentId, StudentName};
use rusqlite::{params, OptionalExtension, Row};

const STUDENT_SELECT_SQL: &str = "SELECT
    student_id,
    name,
    last_name,
    gpa,
    major,
    year,
    email,
    grades
FROM students";

/// Repository interface for student operations.
pub trait StudentRepository {
    /// Validates and inserts a student, returning the store-assigned id.
    fn add_student(&self, student: &NewStudent) -> RepoResult<StudentId>;
    /// Removes the student with `id`; `NotFound` when no row matched.
    fn delete_student(&self, id: StudentId) -> RepoResult<()>;
    /// Lists all students ascending by `order_by`.
    fn get_all_students(&self, order_by: StudentSortColumn) -> RepoResult<Vec<Student>>;
    /// Looks up the display name of one student.
    fn get_student_by_id(&self, id: StudentId) -> RepoResult<Option<StudentName>>;
    fn count_students(&self) -> RepoResult<u64>;
}

/// SQLite-backed student repository.
pub struct SqliteStudentRepository<'store> {
    store: &'store RecordStore,
}

impl<'store> SqliteStudentRepository<'store> {
    pub fn new(store: &'store RecordStore) -> Self {
        Self { store }
    }
}

impl StudentRepository for SqliteStudentRepository<'_> {
    fn add_student(&self, student: &NewStudent) -> RepoResult<StudentId> {
        student.validate()?;

        let grades = serde_json::to_string(&Grades::new())
            .map_err(|err| RepoError::InvalidData(format!("cannot encode grades: {err}")))?;
        let conn = self.store.connection();
        conn.execute(
            "INSERT INTO students (
                name,
                last_name,
                gpa,
                major,
                year,
                email,
                grades
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
            params![
                student.first_name.as_str(),
                student.last_name.as_str(),
                student.gpa,
                student.major.as_str(),
                student.year,
                student.email.as_str(),
                grades,
            ],
        )?;

        Ok(conn.last_insert_rowid())
    }

    fn delete_student(&self, id: StudentId) -> RepoResult<()> {
        delete_by_id(
            self.store,
            EntityKind::Student,
            "DELETE FROM students WHERE student_id = ?1;",
            "DELETE FROM student_exams WHERE student_id = ?1;",
            id,
        )
    }

    fn get_all_students(&self, order_by: StudentSortColumn) -> RepoResult<Vec<Student>> {
        let mut stmt = self.store.connection().prepare(&format!(
            "{STUDENT_SELECT_SQL}
             ORDER BY {} ASC, student_id ASC;",
            order_by.sql_column()
        ))?;
        let mut rows = stmt.query([])?;
        let mut students = Vec::new();

        while let Some(row) = rows.next()? {
            students.push(parse_student_row(row)?);
        }

        Ok(students)
    }

    fn get_student_by_id(&self, id: StudentId) -> RepoResult<Option<StudentName>> {
        let name = self
            .store
            .connection()
            .query_row(
                "SELECT name, last_name FROM students WHERE student_id = ?1;",
                [id],
                |row| {
                    Ok(StudentName {
                        first_name: text_or_empty(row, "name")?,
                        last_name: text_or_empty(row, "last_name")?,
                    })
                },
            )
            .optional()?;
        Ok(name)
    }

    fn count_students(&self) -> RepoResult<u64> {
        count_rows(self.store, "students")
    }
}

fn parse_student_row(row: &Row<'_>) -> RepoResult<Student> {
    let id: StudentId = row.get("student_id")?;
    let grades = match row.get::<_, Option<String>>("grades")? {
        Some(text) if !text.trim().is_empty() => {
            serde_json::from_str::<Grades>(&text).map_err(|err| {
                RepoError::InvalidData(format!(
                    "invalid grades value for student {id} in students.grades: {err}"
                ))
            })?
        }
        _ => Grades::new(),
    };

    Ok(Student {
        id,
        first_name: text_or_empty(row, "name")?,
        last_name: text_or_empty(row, "last_name")?,
        gpa: row.get::<_, Option<f64>>("gpa")?.unwrap_or_default(),
        major: text_or_empty(row, "major")?,
        year: row.get::<_, Option<i64>>("year")?.unwrap_or_default(),
        email: text_or_empty(row, "email")?,
        grades,
    })
}

fn text_or_empty(row: &Row<'_>, column: &str) -> rusqlite::Result<String> {
    Ok(row.get::<_, Option<String>>(column)?.unwrap_or_default())
}
