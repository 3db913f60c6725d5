mod common;

use common::{alice, benson, daniel, module_class, observable_state, run, typical_store, TUTORIAL};
use tutorspet_core::{Attendance, CommandError, Week};

#[test]
fn add_attendance_records_only_the_requested_week() {
    let mut store = typical_store();
    let before = module_class(&store, TUTORIAL).lessons()[0].clone();

    let output = run(&mut store, "add-attendance c/1 l/1 s/1 w/6 p/80").unwrap();
    assert_eq!(
        output.feedback,
        "New attendance added: Alice Pauline attended week 6 lesson with participation score of 80"
    );

    let lesson = &module_class(&store, TUTORIAL).lessons()[0];
    let week = Week::from_zero_based(5);
    assert_eq!(
        lesson.attendance_record_list().attendance(alice().uuid(), week),
        Some(Attendance::new(80).unwrap())
    );
    for (index, record) in lesson.attendance_record_list().records().iter().enumerate() {
        if index != week.zero_based() {
            assert_eq!(
                record,
                &before.attendance_record_list().records()[index],
                "week index {index} changed"
            );
        }
    }
    assert_eq!(lesson.start_time(), before.start_time());
    assert_eq!(lesson.venue(), before.venue());
}

#[test]
fn duplicate_attendance_keeps_first_record() {
    let mut store = typical_store();
    run(&mut store, "add-attendance c/1 l/1 s/2 w/3 p/33").unwrap();
    let state = observable_state(&store);

    assert_eq!(
        run(&mut store, "add-attendance c/1 l/1 s/2 w/3 p/51"),
        Err(CommandError::DuplicateAttendance)
    );
    assert_eq!(observable_state(&store), state);
    let lesson = &module_class(&store, TUTORIAL).lessons()[0];
    assert_eq!(
        lesson
            .attendance_record_list()
            .attendance(benson().uuid(), Week::from_zero_based(2)),
        Some(Attendance::new(33).unwrap())
    );
}

#[test]
fn week_beyond_occurrences_is_invalid() {
    let mut store = typical_store();
    assert_eq!(
        run(&mut store, "add-attendance c/1 l/1 s/1 w/8 p/80"),
        Err(CommandError::InvalidWeek)
    );
    assert!(run(&mut store, "add-attendance c/1 l/1 s/1 w/7 p/80").is_ok());
}

#[test]
fn non_member_is_rejected_even_with_valid_indices() {
    let mut store = typical_store();
    let state = observable_state(&store);
    // Daniel (4) only attends the lab.
    assert_eq!(
        run(&mut store, "add-attendance c/1 l/1 s/4 w/1 p/80"),
        Err(CommandError::StudentNotInClass)
    );
    assert_eq!(observable_state(&store), state);
    assert!(run(&mut store, "add-attendance c/2 l/1 s/4 w/13 p/80").is_ok());
    let lab_lesson = &store.tutors_pet().module_classes()[1].lessons()[0];
    assert!(lab_lesson
        .attendance_record_list()
        .has_attendance(daniel().uuid(), Week::from_zero_based(12)));
}

#[test]
fn lookup_reports_first_failing_step() {
    let mut store = typical_store();
    assert_eq!(
        run(&mut store, "add-attendance c/9 l/9 s/99 w/99 p/80"),
        Err(CommandError::InvalidStudentIndex)
    );
    assert_eq!(
        run(&mut store, "add-attendance c/9 l/9 s/4 w/99 p/80"),
        Err(CommandError::InvalidModuleClassIndex)
    );
    assert_eq!(
        run(&mut store, "add-attendance c/1 l/9 s/4 w/99 p/80"),
        Err(CommandError::StudentNotInClass)
    );
    assert_eq!(
        run(&mut store, "add-attendance c/1 l/9 s/1 w/99 p/80"),
        Err(CommandError::InvalidLessonIndex)
    );
    assert_eq!(
        run(&mut store, "add-attendance c/1 l/1 s/1 w/99 p/80"),
        Err(CommandError::InvalidWeek)
    );
}

#[test]
fn indices_follow_the_filtered_student_list() {
    let mut store = typical_store();
    run(&mut store, "find-student Benson").unwrap();
    run(&mut store, "add-attendance c/1 l/1 s/1 w/1 p/51").unwrap();

    let lesson = &module_class(&store, TUTORIAL).lessons()[0];
    assert!(lesson
        .attendance_record_list()
        .has_attendance(benson().uuid(), Week::from_zero_based(0)));
    assert!(!lesson
        .attendance_record_list()
        .has_attendance(alice().uuid(), Week::from_zero_based(0)));
}

#[test]
fn edit_find_and_delete_attendance() {
    let mut store = typical_store();
    assert_eq!(
        run(&mut store, "edit-attendance c/1 l/1 s/1 w/2 p/90"),
        Err(CommandError::AttendanceNotFound)
    );

    run(&mut store, "add-attendance c/1 l/1 s/1 w/2 p/40").unwrap();
    run(&mut store, "edit-attendance c/1 l/1 s/1 w/2 p/90").unwrap();
    let found = run(&mut store, "find-attendance c/1 l/1 s/1 w/2").unwrap();
    assert_eq!(
        found.feedback,
        "Alice Pauline attended week 2 lesson with participation score of 90"
    );

    run(&mut store, "delete-attendance c/1 l/1 s/1 w/2").unwrap();
    assert_eq!(
        run(&mut store, "find-attendance c/1 l/1 s/1 w/2"),
        Err(CommandError::AttendanceNotFound)
    );
    assert_eq!(
        run(&mut store, "delete-attendance c/1 l/1 s/1 w/2"),
        Err(CommandError::AttendanceNotFound)
    );
}

#[test]
fn stats_summarizes_each_lesson() {
    let mut store = typical_store();
    run(&mut store, "add-attendance c/1 l/1 s/1 w/1 p/80").unwrap();
    run(&mut store, "add-attendance c/1 l/1 s/1 w/2 p/51").unwrap();

    let report = run(&mut store, "stats c/1 s/1").unwrap().feedback;
    assert!(report.starts_with("Attendance of Alice Pauline in CS2103T Tutorial:"));
    assert!(report.contains("attended 2/7 weeks, average participation score 65.50"));

    assert_eq!(
        run(&mut store, "stats c/1 s/4"),
        Err(CommandError::StudentNotInClass)
    );
}
