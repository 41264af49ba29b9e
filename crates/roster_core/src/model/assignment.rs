use crate::model::exam::ExamId;
use crate::model::student::StudentId;
use serde::{Deserialize, Serialize};

/// Joined student/exam link as listed in the assignments overview.
///
/// Only links whose student and exam both still exist are represented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentRow {
    pub student_id: StudentId,
    pub student_name: String,
    pub exam_id: ExamId,
    pub exam_name: String,
}
