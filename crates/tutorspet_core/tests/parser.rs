use tutorspet_core::command::{
    AddAttendanceCommand, AttendanceTarget, EditLessonCommand, EditStudentCommand,
    ListStudentCommand,
};
use tutorspet_core::{parse_command, Attendance, Command, Day, Index, ParseError, ValidationError, Week};

fn index(one_based: usize) -> Index {
    Index::from_one_based(one_based).unwrap()
}

#[test]
fn add_attendance_builds_full_target() {
    let command = parse_command("add-attendance c/1 l/2 s/3 w/5 p/80").unwrap();
    assert_eq!(
        command,
        Command::AddAttendance(AddAttendanceCommand::new(
            AttendanceTarget {
                module_class: index(1),
                lesson: index(2),
                student: index(3),
                week: Week::from_one_based(5).unwrap(),
            },
            Attendance::new(80).unwrap(),
        ))
    );
}

#[test]
fn prefixes_may_come_in_any_order() {
    let ordered = parse_command("add-attendance c/1 l/2 s/3 w/5 p/80").unwrap();
    let shuffled = parse_command("add-attendance   p/80 w/5 s/3 l/2 c/1").unwrap();
    assert_eq!(ordered, shuffled);
}

#[test]
fn missing_prefix_shows_usage() {
    let err = parse_command("add-attendance c/1 l/2 s/3 w/5").unwrap_err();
    match &err {
        ParseError::InvalidCommandFormat { usage } => {
            assert!(usage.starts_with("add-attendance:"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().starts_with("Invalid command format!"));
}

#[test]
fn stray_preamble_is_invalid_format() {
    assert!(matches!(
        parse_command("add-class oops n/CS2101 Sectional"),
        Err(ParseError::InvalidCommandFormat { .. })
    ));
}

#[test]
fn bad_values_map_to_specific_errors() {
    assert_eq!(
        parse_command("add-attendance c/0 l/1 s/1 w/1 p/80"),
        Err(ParseError::InvalidIndex("0".to_string()))
    );
    assert_eq!(
        parse_command("add-attendance c/1 l/1 s/1 w/0 p/80"),
        Err(ParseError::InvalidWeek("0".to_string()))
    );
    assert!(matches!(
        parse_command("add-attendance c/1 l/1 s/1 w/1 p/101"),
        Err(ParseError::Validation(
            ValidationError::InvalidParticipationScore(_)
        ))
    ));
    assert!(matches!(
        parse_command("add-student n/Amy t/amy e/amy@example.com"),
        Err(ParseError::Validation(ValidationError::InvalidTelegram(_)))
    ));
    assert!(matches!(
        parse_command("add-lesson c/1 st/16:00 et/14:00 d/monday o/3 v/COM1"),
        Err(ParseError::Validation(ValidationError::InvalidTimeRange { .. }))
    ));
    assert!(matches!(
        parse_command("add-lesson c/1 st/14:00 et/16:00 d/funday o/3 v/COM1"),
        Err(ParseError::Validation(ValidationError::InvalidDay(_)))
    ));
}

#[test]
fn edit_commands_need_at_least_one_field() {
    assert_eq!(
        parse_command("edit-student 1"),
        Err(ParseError::NoFieldEdited)
    );
    assert_eq!(parse_command("edit-class 1"), Err(ParseError::NoFieldEdited));
    assert_eq!(
        parse_command("edit-lesson c/1 l/1"),
        Err(ParseError::NoFieldEdited)
    );
    assert!(matches!(
        parse_command("edit-student n/Amy"),
        Err(ParseError::InvalidCommandFormat { .. })
    ));
}

#[test]
fn edit_lesson_reads_start_time_separately_from_telegram_prefix() {
    let Command::EditLesson(EditLessonCommand { descriptor, .. }) =
        parse_command("edit-lesson c/1 l/1 st/09:30 d/tuesday").unwrap()
    else {
        panic!("expected edit-lesson");
    };
    assert_eq!(
        descriptor.start_time.map(tutorspet_core::model::lesson::format_time),
        Some("09:30".to_string())
    );
    assert_eq!(descriptor.day, Some(Day::Tuesday));
    assert_eq!(descriptor.end_time, None);
}

#[test]
fn empty_tag_prefix_clears_tags() {
    let Command::EditStudent(EditStudentCommand { descriptor, .. }) =
        parse_command("edit-student 2 tag/").unwrap()
    else {
        panic!("expected edit-student");
    };
    assert_eq!(descriptor.tags, Some(Default::default()));
}

#[test]
fn find_requires_keywords() {
    assert!(matches!(
        parse_command("find-student   "),
        Err(ParseError::InvalidCommandFormat { .. })
    ));
    assert!(matches!(
        parse_command("find-class"),
        Err(ParseError::InvalidCommandFormat { .. })
    ));
}

#[test]
fn list_student_with_optional_class() {
    assert_eq!(
        parse_command("list-student").unwrap(),
        Command::ListStudent(ListStudentCommand::all())
    );
    assert_eq!(
        parse_command("list-student c/2").unwrap(),
        Command::ListStudent(ListStudentCommand::in_module_class(index(2)))
    );
}

#[test]
fn every_documented_word_is_recognised() {
    let lines = [
        "add-student n/Amy Bee t/amy_bee e/amy@example.com",
        "edit-student 1 e/amy@example.com",
        "delete-student 1",
        "find-student amy",
        "list-student",
        "add-class n/CS2101 Sectional",
        "edit-class 1 n/CS2101 Sectional",
        "delete-class 1",
        "find-class cs2101",
        "list-class",
        "link c/1 s/1",
        "unlink c/1 s/1",
        "add-lesson c/1 st/14:00 et/16:00 d/wednesday o/7 v/COM1-B111",
        "edit-lesson c/1 l/1 v/S17-0302",
        "delete-lesson c/1 l/1",
        "add-attendance c/1 l/1 s/1 w/1 p/0",
        "edit-attendance c/1 l/1 s/1 w/1 p/100",
        "delete-attendance c/1 l/1 s/1 w/1",
        "find-attendance c/1 l/1 s/1 w/1",
        "stats c/1 s/1",
        "undo",
        "redo",
        "clear",
        "help",
        "exit",
    ];
    for line in lines {
        let command = parse_command(line).unwrap_or_else(|err| panic!("{line}: {err}"));
        assert_eq!(command.word(), line.split_whitespace().next().unwrap());
    }
}
