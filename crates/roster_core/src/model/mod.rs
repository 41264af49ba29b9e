//! Roster domain model.
//!
//! # Responsibility
//! - Define the row shapes returned by repositories.
//! - Own the write-side validation rule (student email format).
//! - Provide closed sort-column sets and shell input parsing helpers.
//!
//! # Invariants
//! - Identifiers are assigned by the record store, never by callers.
//! - Field order of every row type mirrors its table column order.

pub mod assignment;
pub mod exam;
pub mod input;
pub mod sort;
pub mod student;
