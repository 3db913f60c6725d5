mod common;

use common::{
    alice, benson, carl, module_class, observable_state, run, typical_store, TUTORIAL,
};
use tutorspet_core::{CommandError, Week};

#[test]
fn add_student_appends_and_reports() {
    let mut store = typical_store();
    let output = run(
        &mut store,
        "add-student n/Amy Bee t/amy_bee e/amy@example.com tag/tutee",
    )
    .unwrap();

    assert!(output.feedback.starts_with("New student added: Amy Bee"));
    let added = store.tutors_pet().students().last().unwrap();
    assert_eq!(added.name().as_str(), "Amy Bee");
    assert_eq!(added.telegram().as_str(), "amy_bee");
    assert_eq!(added.tags().len(), 1);
    assert!(store.can_undo());
}

#[test]
fn add_student_rejects_same_identity_fields() {
    let mut store = typical_store();
    let state = observable_state(&store);
    assert_eq!(
        run(
            &mut store,
            "add-student n/Alice Pauline t/4Lice_P e/alice@example.com"
        ),
        Err(CommandError::DuplicateStudent)
    );
    assert_eq!(observable_state(&store), state);

    // Same name alone is not a duplicate.
    run(
        &mut store,
        "add-student n/Alice Pauline t/alice_two e/alice2@example.com",
    )
    .unwrap();
}

#[test]
fn edit_student_keeps_identity_and_memberships() {
    let mut store = typical_store();
    run(&mut store, "edit-student 1 n/Alice Tan tag/").unwrap();

    let edited = &store.tutors_pet().students()[0];
    assert_eq!(edited.uuid(), alice().uuid());
    assert_eq!(edited.name().as_str(), "Alice Tan");
    assert!(edited.tags().is_empty());
    assert_eq!(edited.email(), alice().email());
    assert!(module_class(&store, TUTORIAL).has_student(alice().uuid()));
}

#[test]
fn edit_student_into_duplicate_fails() {
    let mut store = typical_store();
    let state = observable_state(&store);
    assert_eq!(
        run(
            &mut store,
            "edit-student 2 n/Alice Pauline t/4Lice_P e/alice@example.com"
        ),
        Err(CommandError::DuplicateStudent)
    );
    assert_eq!(observable_state(&store), state);
}

#[test]
fn edit_out_of_range_index_fails() {
    let mut store = typical_store();
    run(&mut store, "find-student carl").unwrap();
    assert_eq!(
        run(&mut store, "edit-student 2 n/Someone Else"),
        Err(CommandError::InvalidStudentIndex)
    );
    assert_eq!(store.filtered_students().len(), 1);
}

#[test]
fn delete_student_cascades_to_classes_and_attendance() {
    let mut store = typical_store();
    run(&mut store, "add-attendance c/1 l/1 s/2 w/1 p/80").unwrap();
    run(&mut store, "delete-student 2").unwrap();

    assert!(store
        .tutors_pet()
        .students()
        .iter()
        .all(|student| student.uuid() != benson().uuid()));
    let tutorial = module_class(&store, TUTORIAL);
    assert!(!tutorial.has_student(benson().uuid()));
    assert!(!tutorial.lessons()[0]
        .attendance_record_list()
        .has_attendance(benson().uuid(), Week::from_zero_based(0)));
    assert_eq!(tutorial.student_uuids().len(), 2);
}

#[test]
fn find_student_matches_whole_words_ignoring_case() {
    let mut store = typical_store();
    let output = run(&mut store, "find-student meier KURZ").unwrap();
    assert_eq!(output.feedback, "3 students listed!");

    let names: Vec<&str> = store
        .filtered_students()
        .iter()
        .map(|student| student.name().as_str())
        .collect();
    assert_eq!(names, ["Benson Meier", "Carl Kurz", "Daniel Meier"]);

    run(&mut store, "find-student Mei").unwrap();
    assert!(store.filtered_students().is_empty());
}

#[test]
fn find_student_folds_accented_letters() {
    let mut store = typical_store();
    run(&mut store, "add-student n/Élise Tan t/elise_t e/elise@example.com").unwrap();

    let output = run(&mut store, "find-student élise").unwrap();
    assert_eq!(output.feedback, "1 students listed!");
    assert_eq!(store.filtered_students()[0].name().as_str(), "Élise Tan");
}

#[test]
fn list_student_by_class_shows_members_only() {
    let mut store = typical_store();
    run(&mut store, "list-student c/1").unwrap();
    let listed: Vec<_> = store
        .filtered_students()
        .iter()
        .map(|student| student.uuid())
        .collect();
    assert_eq!(listed, [alice().uuid(), benson().uuid(), carl().uuid()]);

    run(&mut store, "list-student").unwrap();
    assert_eq!(store.filtered_students().len(), 7);

    assert_eq!(
        run(&mut store, "list-student c/3"),
        Err(CommandError::InvalidModuleClassIndex)
    );
}
