//! Closed sets of sortable columns per listing.
//!
//! # Invariants
//! - Only `sql_column()` text is ever placed into an `ORDER BY` clause.
//! - Labels match the sort choices offered by the desktop shell.

/// Sort choices for the student listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StudentSortColumn {
    #[default]
    Id,
    Name,
    LastName,
    Gpa,
    Year,
}

impl StudentSortColumn {
    pub const ALL: [Self; 5] = [Self::Id, Self::Name, Self::LastName, Self::Gpa, Self::Year];

    pub fn label(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Name => "Name",
            Self::LastName => "Last Name",
            Self::Gpa => "GPA",
            Self::Year => "Year",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|column| column.label() == label)
    }

    pub(crate) fn sql_column(self) -> &'static str {
        match self {
            Self::Id => "student_id",
            Self::Name => "name",
            Self::LastName => "last_name",
            Self::Gpa => "gpa",
            Self::Year => "year",
        }
    }
}

/// Sort choices for the exam listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ExamSortColumn {
    #[default]
    Id,
    Name,
    Date,
}

impl ExamSortColumn {
    pub const ALL: [Self; 3] = [Self::Id, Self::Name, Self::Date];

    pub fn label(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Name => "Name",
            Self::Date => "Date",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|column| column.label() == label)
    }

    pub(crate) fn sql_column(self) -> &'static str {
        match self {
            Self::Id => "exam_id",
            Self::Name => "exam_name",
            Self::Date => "exam_date",
        }
    }
}

/// Sort choices for the joined assignment listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AssignmentSortColumn {
    #[default]
    StudentId,
    StudentName,
    ExamId,
    ExamName,
}

impl AssignmentSortColumn {
    pub const ALL: [Self; 4] = [
        Self::StudentId,
        Self::StudentName,
        Self::ExamId,
        Self::ExamName,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::StudentId => "Student ID",
            Self::StudentName => "Student Name",
            Self::ExamId => "Exam ID",
            Self::ExamName => "Exam Name",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|column| column.label() == label)
    }

    /// Qualified column; the assignment query aliases
    /// `student_exams se`, `students s`, `exams e`.
    pub(crate) fn sql_column(self) -> &'static str {
        match self {
            Self::StudentId => "se.student_id",
            Self::StudentName => "s.name",
            Self::ExamId => "e.exam_id",
            Self::ExamName => "e.exam_name",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AssignmentSortColumn, ExamSortColumn, StudentSortColumn};

    #[test]
    fn labels_resolve_back_to_their_column() {
        for column in StudentSortColumn::ALL {
            assert_eq!(StudentSortColumn::from_label(column.label()), Some(column));
        }
        for column in ExamSortColumn::ALL {
            assert_eq!(ExamSortColumn::from_label(column.label()), Some(column));
        }
        for column in AssignmentSortColumn::ALL {
            assert_eq!(AssignmentSortColumn::from_label(column.label()), Some(column));
        }
    }

    #[test]
    fn unknown_labels_and_raw_sql_are_rejected() {
        assert_eq!(StudentSortColumn::from_label("EMAIL"), None);
        assert_eq!(
            StudentSortColumn::from_label("student_id; DROP TABLE students"),
            None
        );
        assert_eq!(ExamSortColumn::from_label("exam_date"), None);
        assert_eq!(AssignmentSortColumn::from_label(""), None);
    }

    #[test]
    fn defaults_sort_by_identifier() {
        assert_eq!(StudentSortColumn::default().sql_column(), "student_id");
        assert_eq!(ExamSortColumn::default().sql_column(), "exam_id");
        assert_eq!(AssignmentSortColumn::default().sql_column(), "se.student_id");
    }
}
