//! Roster table definitions and shape checks.
//!
//! # Invariants
//! - Table and column names match the legacy `students.db` layout
//!   (SQLite identifiers are case-insensitive), so old files open unchanged.
//! - Column order is positional API: `students`, `exams`, `student_exams`.

use crate::db::{DbError, DbResult};
use rusqlite::Connection;

const SCHEMA_SQL: &str = include_str!("schema.sql");

/// Roster tables with the columns every reader depends on, in table order.
pub const REQUIRED_COLUMNS: &[(&str, &[&str])] = &[
    (
        "students",
        &[
            "student_id",
            "name",
            "last_name",
            "gpa",
            "major",
            "year",
            "email",
            "grades",
        ],
    ),
    (
        "exams",
        &["exam_id", "exam_name", "exam_date", "description"],
    ),
    ("student_exams", &["student_id", "exam_id"]),
];

/// Creates missing roster tables and verifies the shape of existing ones.
pub fn ensure_schema(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(SCHEMA_SQL)?;

    for &(table, columns) in REQUIRED_COLUMNS {
        let present = table_columns(conn, table)?;
        for &column in columns {
            if !present.iter().any(|name| name.eq_ignore_ascii_case(column)) {
                return Err(DbError::MissingRequiredColumn { table, column });
            }
        }
    }

    Ok(())
}

/// Returns whether a table with the given name exists.
pub fn table_exists(conn: &Connection, table: &str) -> DbResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1 COLLATE NOCASE
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_columns(conn: &Connection, table: &str) -> DbResult<Vec<String>> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    let mut columns = Vec::new();
    while let Some(row) = rows.next()? {
        columns.push(row.get::<_, String>(1)?);
    }
    Ok(columns)
}
