use roster_core::{
    EntityKind, NewStudent, RecordStore, RepoError, SqliteStudentRepository, StudentName,
    StudentRepository, StudentSortColumn, ValidationError,
};

fn student(first: &str, last: &str, gpa: f64, year: i64, email: &str) -> NewStudent {
    NewStudent::new(first, last, gpa, "Computer Science", year, email)
}

#[test]
fn add_student_returns_id_and_stores_empty_grades() {
    let store = RecordStore::open_in_memory().unwrap();
    let repo = SqliteStudentRepository::new(&store);

    let id = repo
        .add_student(&student("Ana", "Li", 3.7, 2022, "ana.li@example.com"))
        .unwrap();

    let raw_grades: String = store
        .connection()
        .query_row(
            "SELECT grades FROM students WHERE student_id = ?1;",
            [id],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(raw_grades, "{}");

    let students = repo.get_all_students(StudentSortColumn::Id).unwrap();
    assert_eq!(students.len(), 1);
    let loaded = &students[0];
    assert_eq!(loaded.id, id);
    assert_eq!(loaded.first_name, "Ana");
    assert_eq!(loaded.last_name, "Li");
    assert_eq!(loaded.gpa, 3.7);
    assert_eq!(loaded.major, "Computer Science");
    assert_eq!(loaded.year, 2022);
    assert_eq!(loaded.email, "ana.li@example.com");
    assert!(loaded.grades.is_empty());
}

#[test]
fn invalid_email_is_rejected_without_creating_a_row() {
    let store = RecordStore::open_in_memory().unwrap();
    let repo = SqliteStudentRepository::new(&store);

    for email in ["ana.li", "ana.li@example", "@example.com", ""] {
        let err = repo
            .add_student(&student("Ana", "Li", 3.7, 2022, email))
            .unwrap_err();
        assert!(matches!(
            err,
            RepoError::Validation(ValidationError::InvalidEmail)
        ));
    }

    assert_eq!(repo.count_students().unwrap(), 0);
}

#[test]
fn delete_student_removes_row() {
    let store = RecordStore::open_in_memory().unwrap();
    let repo = SqliteStudentRepository::new(&store);

    let keep = repo
        .add_student(&student("Ana", "Li", 3.7, 2022, "ana@example.com"))
        .unwrap();
    let remove = repo
        .add_student(&student("Luka", "Kapanadze", 2.9, 2021, "luka@example.com"))
        .unwrap();

    repo.delete_student(remove).unwrap();

    let remaining = repo.get_all_students(StudentSortColumn::Id).unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, keep);
}

#[test]
fn deleting_unknown_student_returns_not_found_and_keeps_rows() {
    let store = RecordStore::open_in_memory().unwrap();
    let repo = SqliteStudentRepository::new(&store);
    repo.add_student(&student("Ana", "Li", 3.7, 2022, "ana@example.com"))
        .unwrap();

    let err = repo.delete_student(999).unwrap_err();
    assert!(matches!(
        err,
        RepoError::NotFound {
            entity: EntityKind::Student,
            id: 999
        }
    ));
    assert_eq!(repo.count_students().unwrap(), 1);
}

#[test]
fn listing_by_id_returns_every_row_in_ascending_order() {
    let store = RecordStore::open_in_memory().unwrap();
    let repo = SqliteStudentRepository::new(&store);

    for index in 0..5 {
        repo.add_student(&student(
            &format!("Student{index}"),
            "Test",
            3.0,
            2020,
            &format!("student{index}@example.com"),
        ))
        .unwrap();
    }

    let students = repo.get_all_students(StudentSortColumn::Id).unwrap();
    assert_eq!(students.len(), 5);
    assert!(students.windows(2).all(|pair| pair[0].id < pair[1].id));
}

#[test]
fn listing_honors_each_sort_column() {
    let store = RecordStore::open_in_memory().unwrap();
    let repo = SqliteStudentRepository::new(&store);

    repo.add_student(&student("Giorgi", "Abashidze", 3.9, 2023, "g@example.com"))
        .unwrap();
    repo.add_student(&student("Ana", "Li", 2.5, 2020, "a@example.com"))
        .unwrap();
    repo.add_student(&student("Mariam", "Chikovani", 3.1, 2021, "m@example.com"))
        .unwrap();

    let first_names = |column| {
        repo.get_all_students(column)
            .unwrap()
            .into_iter()
            .map(|student| student.first_name)
            .collect::<Vec<_>>()
    };

    assert_eq!(first_names(StudentSortColumn::Name), ["Ana", "Giorgi", "Mariam"]);
    assert_eq!(
        first_names(StudentSortColumn::LastName),
        ["Giorgi", "Mariam", "Ana"]
    );
    assert_eq!(first_names(StudentSortColumn::Gpa), ["Ana", "Mariam", "Giorgi"]);
    assert_eq!(first_names(StudentSortColumn::Year), ["Ana", "Mariam", "Giorgi"]);
}

#[test]
fn identifiers_are_not_reused_after_delete() {
    let store = RecordStore::open_in_memory().unwrap();
    let repo = SqliteStudentRepository::new(&store);

    let first = repo
        .add_student(&student("Ana", "Li", 3.7, 2022, "ana@example.com"))
        .unwrap();
    repo.delete_student(first).unwrap();
    let second = repo
        .add_student(&student("Ana", "Li", 3.7, 2022, "ana@example.com"))
        .unwrap();

    assert!(second > first);
}

#[test]
fn get_student_by_id_returns_name_or_none() {
    let store = RecordStore::open_in_memory().unwrap();
    let repo = SqliteStudentRepository::new(&store);
    let id = repo
        .add_student(&student("Ana", "Li", 3.7, 2022, "ana@example.com"))
        .unwrap();

    assert_eq!(
        repo.get_student_by_id(id).unwrap(),
        Some(StudentName {
            first_name: "Ana".to_string(),
            last_name: "Li".to_string(),
        })
    );
    assert_eq!(repo.get_student_by_id(id + 1).unwrap(), None);
}

#[test]
fn malformed_persisted_grades_surface_as_invalid_data() {
    let store = RecordStore::open_in_memory().unwrap();
    let repo = SqliteStudentRepository::new(&store);
    let id = repo
        .add_student(&student("Ana", "Li", 3.7, 2022, "ana@example.com"))
        .unwrap();
    store
        .connection()
        .execute(
            "UPDATE students SET grades = 'not json' WHERE student_id = ?1;",
            [id],
        )
        .unwrap();

    let err = repo.get_all_students(StudentSortColumn::Id).unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
}

#[test]
fn non_finite_gpa_is_rejected_and_listing_keeps_working() {
    let store = RecordStore::open_in_memory().unwrap();
    let repo = SqliteStudentRepository::new(&store);
    repo.add_student(&student("Ana", "Li", 3.7, 2022, "ana@example.com"))
        .unwrap();

    let err = repo
        .add_student(&student("Bad", "Gpa", f64::NAN, 2022, "bad@example.com"))
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::NonFiniteGpa)
    ));

    assert_eq!(repo.count_students().unwrap(), 1);
    assert_eq!(repo.get_all_students(StudentSortColumn::Gpa).unwrap().len(), 1);
}

#[test]
fn legacy_rows_with_null_columns_still_list() {
    let store = RecordStore::open_in_memory().unwrap();
    let repo = SqliteStudentRepository::new(&store);
    repo.add_student(&student("Ana", "Li", 3.7, 2022, "ana@example.com"))
        .unwrap();
    store
        .connection()
        .execute(
            "INSERT INTO students (name, last_name, gpa, major, year, email, grades)
             VALUES (NULL, NULL, NULL, NULL, NULL, NULL, NULL);",
            [],
        )
        .unwrap();
    let legacy_id = store.connection().last_insert_rowid();

    let students = repo.get_all_students(StudentSortColumn::Gpa).unwrap();
    assert_eq!(students.len(), 2);
    let legacy = students
        .iter()
        .find(|student| student.id == legacy_id)
        .expect("legacy row should be listed");
    assert_eq!(legacy.first_name, "");
    assert_eq!(legacy.gpa, 0.0);
    assert_eq!(legacy.year, 0);
    assert!(legacy.grades.is_empty());

    assert_eq!(
        repo.get_student_by_id(legacy_id).unwrap(),
        Some(StudentName {
            first_name: String::new(),
            last_name: String::new(),
        })
    );
}
