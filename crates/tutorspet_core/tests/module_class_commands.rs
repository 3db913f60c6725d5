mod common;

use common::{alice, daniel, module_class, observable_state, run, typical_store, LAB, TUTORIAL};
use tutorspet_core::{CommandError, Week};

#[test]
fn add_class_starts_empty_and_rejects_same_name() {
    let mut store = typical_store();
    let output = run(&mut store, "add-class n/CS2101 Sectional").unwrap();
    assert_eq!(output.feedback, "New class added: CS2101 Sectional");

    let added = module_class(&store, "CS2101 Sectional");
    assert!(added.student_uuids().is_empty());
    assert!(added.lessons().is_empty());

    assert_eq!(
        run(&mut store, "add-class n/CS2103T Tutorial"),
        Err(CommandError::DuplicateModuleClass)
    );
}

#[test]
fn edit_class_renames_and_keeps_members_and_lessons() {
    let mut store = typical_store();
    run(&mut store, "edit-class 1 n/CS2103T Recitation").unwrap();

    let renamed = &store.tutors_pet().module_classes()[0];
    assert_eq!(renamed.name().as_str(), "CS2103T Recitation");
    assert_eq!(renamed.student_uuids().len(), 3);
    assert_eq!(renamed.lessons().len(), 1);

    assert_eq!(
        run(&mut store, "edit-class 1 n/CS2100 Lab"),
        Err(CommandError::DuplicateModuleClass)
    );
}

#[test]
fn delete_class_leaves_students_alone() {
    let mut store = typical_store();
    run(&mut store, "delete-class 2").unwrap();
    assert_eq!(store.tutors_pet().module_classes().len(), 1);
    assert_eq!(store.tutors_pet().students().len(), 7);
    assert_eq!(
        run(&mut store, "delete-class 2"),
        Err(CommandError::InvalidModuleClassIndex)
    );
}

#[test]
fn find_class_filters_by_word() {
    let mut store = typical_store();
    let output = run(&mut store, "find-class lab").unwrap();
    assert_eq!(output.feedback, "1 classes listed!");
    assert_eq!(store.filtered_module_classes()[0].name().as_str(), LAB);

    // Index 1 now addresses the lab.
    run(&mut store, "delete-class 1").unwrap();
    assert_eq!(store.tutors_pet().module_classes()[0].name().as_str(), TUTORIAL);

    run(&mut store, "list-class").unwrap();
    assert_eq!(store.filtered_module_classes().len(), 1);
}

#[test]
fn link_adds_membership_once() {
    let mut store = typical_store();
    let output = run(&mut store, "link c/2 s/1").unwrap();
    assert_eq!(output.feedback, "Linked Alice Pauline to CS2100 Lab");
    assert!(module_class(&store, LAB).has_student(alice().uuid()));

    let state = observable_state(&store);
    assert_eq!(
        run(&mut store, "link c/2 s/1"),
        Err(CommandError::StudentAlreadyInClass)
    );
    assert_eq!(observable_state(&store), state);
}

#[test]
fn unlink_removes_membership_and_attendance() {
    let mut store = typical_store();
    run(&mut store, "add-attendance c/2 l/1 s/4 w/3 p/70").unwrap();
    run(&mut store, "unlink c/2 s/4").unwrap();

    let lab = module_class(&store, LAB);
    assert!(!lab.has_student(daniel().uuid()));
    assert!(!lab.lessons()[0]
        .attendance_record_list()
        .has_attendance(daniel().uuid(), Week::from_zero_based(2)));

    assert_eq!(
        run(&mut store, "unlink c/2 s/4"),
        Err(CommandError::StudentNotInClass)
    );
}

#[test]
fn link_checks_student_index_before_class_index() {
    let mut store = typical_store();
    assert_eq!(
        run(&mut store, "link c/5 s/50"),
        Err(CommandError::InvalidStudentIndex)
    );
    assert_eq!(
        run(&mut store, "link c/5 s/1"),
        Err(CommandError::InvalidModuleClassIndex)
    );
}
