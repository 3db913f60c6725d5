//! Per-word argument parsers.

use crate::command::attendance::{
    ADD_ATTENDANCE_WORD, DELETE_ATTENDANCE_WORD, EDIT_ATTENDANCE_WORD, FIND_ATTENDANCE_WORD,
    STATS_WORD,
};
use crate::command::general::{CLEAR_WORD, EXIT_WORD, HELP_WORD, REDO_WORD, UNDO_WORD};
use crate::command::lesson::{ADD_LESSON_WORD, DELETE_LESSON_WORD, EDIT_LESSON_WORD};
use crate::command::module_class::{
    ADD_CLASS_WORD, DELETE_CLASS_WORD, EDIT_CLASS_WORD, FIND_CLASS_WORD, LINK_WORD,
    LIST_CLASS_WORD, UNLINK_WORD,
};
use crate::command::student::{
    ADD_STUDENT_WORD, DELETE_STUDENT_WORD, EDIT_STUDENT_WORD, FIND_STUDENT_WORD,
    LIST_STUDENT_WORD,
};
use crate::command::{
    AddAttendanceCommand, AddLessonCommand, AddModuleClassCommand, AddStudentCommand,
    AttendanceTarget, ClearCommand, Command, DeleteAttendanceCommand, DeleteLessonCommand,
    DeleteModuleClassCommand, DeleteStudentCommand, EditAttendanceCommand, EditLessonCommand,
    EditLessonDescriptor, EditModuleClassCommand, EditModuleClassDescriptor, EditStudentCommand,
    EditStudentDescriptor, ExitCommand, FindAttendanceCommand, FindModuleClassCommand,
    FindStudentCommand, HelpCommand, Index, LinkStudentCommand, ListModuleClassCommand,
    ListStudentCommand, RedoCommand, StatsCommand, UndoCommand, UnlinkStudentCommand,
};
use crate::model::lesson::{parse_time, Day, Lesson, NumberOfOccurrences, Venue};
use crate::model::module_class::ModuleClass;
use crate::model::name::Name;
use crate::model::student::{Email, Student, Telegram};
use crate::parser::fields::{
    parse_index, parse_keywords, parse_participation_score, parse_tags, parse_week,
};
use crate::parser::tokenizer::{
    tokenize, ArgumentMultimap, Prefix, PREFIX_CLASS_INDEX, PREFIX_DAY, PREFIX_EMAIL,
    PREFIX_END_TIME, PREFIX_LESSON_INDEX, PREFIX_NAME, PREFIX_NUMBER_OF_OCCURRENCES,
    PREFIX_PARTICIPATION_SCORE, PREFIX_START_TIME, PREFIX_STUDENT_INDEX, PREFIX_TAG,
    PREFIX_TELEGRAM, PREFIX_VENUE, PREFIX_WEEK,
};
use crate::parser::{ParseError, ParseResult};

pub(super) const HELP_USAGE: &str = "help: Shows every command and its format.";

const ADD_STUDENT_USAGE: &str = "add-student: Adds a student. \
Parameters: n/NAME t/TELEGRAM e/EMAIL [tag/TAG]...\n\
Example: add-student n/John Doe t/johndoe e/johnd@example.com tag/friends";
const EDIT_STUDENT_USAGE: &str = "edit-student: Edits the student at INDEX in the displayed list. \
Parameters: INDEX [n/NAME] [t/TELEGRAM] [e/EMAIL] [tag/TAG]...\n\
Example: edit-student 1 t/johnny_d e/johndoe@example.com";
const DELETE_STUDENT_USAGE: &str = "delete-student: Deletes the student at INDEX in the displayed list. \
Parameters: INDEX\nExample: delete-student 1";
const FIND_STUDENT_USAGE: &str = "find-student: Finds students whose names contain any of the keywords. \
Parameters: KEYWORD [MORE_KEYWORDS]...\nExample: find-student alice bob";
const LIST_STUDENT_USAGE: &str = "list-student: Lists all students, or the members of one class. \
Parameters: [c/CLASS_INDEX]\nExample: list-student c/1";
const ADD_CLASS_USAGE: &str = "add-class: Adds a class. \
Parameters: n/NAME\nExample: add-class n/CS2103T Tutorial";
const EDIT_CLASS_USAGE: &str = "edit-class: Edits the class at INDEX in the displayed list. \
Parameters: INDEX n/NAME\nExample: edit-class 1 n/CS2101 Sectional";
const DELETE_CLASS_USAGE: &str = "delete-class: Deletes the class at INDEX in the displayed list. \
Parameters: INDEX\nExample: delete-class 1";
const FIND_CLASS_USAGE: &str = "find-class: Finds classes whose names contain any of the keywords. \
Parameters: KEYWORD [MORE_KEYWORDS]...\nExample: find-class CS2103T";
const LINK_USAGE: &str = "link: Adds a student to a class. \
Parameters: c/CLASS_INDEX s/STUDENT_INDEX\nExample: link c/1 s/2";
const UNLINK_USAGE: &str = "unlink: Removes a student from a class. \
Parameters: c/CLASS_INDEX s/STUDENT_INDEX\nExample: unlink c/1 s/2";
const ADD_LESSON_USAGE: &str = "add-lesson: Adds a lesson to a class. \
Parameters: c/CLASS_INDEX st/START_TIME et/END_TIME d/DAY o/NUMBER_OF_OCCURRENCES v/VENUE\n\
Example: add-lesson c/1 st/14:00 et/16:00 d/wednesday o/13 v/COM1-B111";
const EDIT_LESSON_USAGE: &str = "edit-lesson: Edits a lesson of a class. \
Parameters: c/CLASS_INDEX l/LESSON_INDEX [st/START_TIME] [et/END_TIME] [d/DAY] \
[o/NUMBER_OF_OCCURRENCES] [v/VENUE]\nExample: edit-lesson c/1 l/1 v/S17-0302";
const DELETE_LESSON_USAGE: &str = "delete-lesson: Deletes a lesson from a class. \
Parameters: c/CLASS_INDEX l/LESSON_INDEX\nExample: delete-lesson c/1 l/1";
const ADD_ATTENDANCE_USAGE: &str = "add-attendance: Records a student's attendance for one week. \
Parameters: c/CLASS_INDEX l/LESSON_INDEX s/STUDENT_INDEX w/WEEK p/PARTICIPATION_SCORE\n\
Example: add-attendance c/1 l/1 s/1 w/5 p/80";
const EDIT_ATTENDANCE_USAGE: &str = "edit-attendance: Changes a recorded participation score. \
Parameters: c/CLASS_INDEX l/LESSON_INDEX s/STUDENT_INDEX w/WEEK p/PARTICIPATION_SCORE\n\
Example: edit-attendance c/1 l/1 s/1 w/5 p/90";
const DELETE_ATTENDANCE_USAGE: &str = "delete-attendance: Removes a recorded attendance. \
Parameters: c/CLASS_INDEX l/LESSON_INDEX s/STUDENT_INDEX w/WEEK\n\
Example: delete-attendance c/1 l/1 s/1 w/5";
const FIND_ATTENDANCE_USAGE: &str = "find-attendance: Shows a recorded attendance. \
Parameters: c/CLASS_INDEX l/LESSON_INDEX s/STUDENT_INDEX w/WEEK\n\
Example: find-attendance c/1 l/1 s/1 w/5";
const STATS_USAGE: &str = "stats: Summarizes a student's attendance in a class. \
Parameters: c/CLASS_INDEX s/STUDENT_INDEX\nExample: stats c/1 s/1";

/// Routes `word` to its argument parser.
pub(super) fn parse_arguments(word: &str, arguments: &str) -> ParseResult<Command> {
    match word {
        ADD_STUDENT_WORD => parse_add_student(arguments),
        EDIT_STUDENT_WORD => parse_edit_student(arguments),
        DELETE_STUDENT_WORD => Ok(Command::DeleteStudent(DeleteStudentCommand::new(
            preamble_index(arguments, DELETE_STUDENT_USAGE)?,
        ))),
        FIND_STUDENT_WORD => {
            let keywords = keywords(arguments, FIND_STUDENT_USAGE)?;
            Ok(Command::FindStudent(FindStudentCommand::new(keywords)))
        }
        LIST_STUDENT_WORD => parse_list_student(arguments),
        ADD_CLASS_WORD => parse_add_class(arguments),
        EDIT_CLASS_WORD => parse_edit_class(arguments),
        DELETE_CLASS_WORD => Ok(Command::DeleteModuleClass(DeleteModuleClassCommand::new(
            preamble_index(arguments, DELETE_CLASS_USAGE)?,
        ))),
        FIND_CLASS_WORD => {
            let keywords = keywords(arguments, FIND_CLASS_USAGE)?;
            Ok(Command::FindModuleClass(FindModuleClassCommand::new(
                keywords,
            )))
        }
        LIST_CLASS_WORD => Ok(Command::ListModuleClass(ListModuleClassCommand)),
        LINK_WORD => {
            let (module_class, student) = class_and_student(arguments, LINK_USAGE)?;
            Ok(Command::LinkStudent(LinkStudentCommand::new(
                module_class,
                student,
            )))
        }
        UNLINK_WORD => {
            let (module_class, student) = class_and_student(arguments, UNLINK_USAGE)?;
            Ok(Command::UnlinkStudent(UnlinkStudentCommand::new(
                module_class,
                student,
            )))
        }
        ADD_LESSON_WORD => parse_add_lesson(arguments),
        EDIT_LESSON_WORD => parse_edit_lesson(arguments),
        DELETE_LESSON_WORD => {
            let map = required(
                arguments,
                &[PREFIX_CLASS_INDEX, PREFIX_LESSON_INDEX],
                &[],
                DELETE_LESSON_USAGE,
            )?;
            Ok(Command::DeleteLesson(DeleteLessonCommand::new(
                index_of(&map, PREFIX_CLASS_INDEX)?,
                index_of(&map, PREFIX_LESSON_INDEX)?,
            )))
        }
        ADD_ATTENDANCE_WORD => {
            let (target, map) = attendance_target(
                arguments,
                &[PREFIX_PARTICIPATION_SCORE],
                ADD_ATTENDANCE_USAGE,
            )?;
            let attendance = parse_participation_score(value_of(&map, PREFIX_PARTICIPATION_SCORE))?;
            Ok(Command::AddAttendance(AddAttendanceCommand::new(
                target, attendance,
            )))
        }
        EDIT_ATTENDANCE_WORD => {
            let (target, map) = attendance_target(
                arguments,
                &[PREFIX_PARTICIPATION_SCORE],
                EDIT_ATTENDANCE_USAGE,
            )?;
            let attendance = parse_participation_score(value_of(&map, PREFIX_PARTICIPATION_SCORE))?;
            Ok(Command::EditAttendance(EditAttendanceCommand::new(
                target, attendance,
            )))
        }
        DELETE_ATTENDANCE_WORD => {
            let (target, _) = attendance_target(arguments, &[], DELETE_ATTENDANCE_USAGE)?;
            Ok(Command::DeleteAttendance(DeleteAttendanceCommand::new(
                target,
            )))
        }
        FIND_ATTENDANCE_WORD => {
            let (target, _) = attendance_target(arguments, &[], FIND_ATTENDANCE_USAGE)?;
            Ok(Command::FindAttendance(FindAttendanceCommand::new(target)))
        }
        STATS_WORD => {
            let (module_class, student) = class_and_student(arguments, STATS_USAGE)?;
            Ok(Command::Stats(StatsCommand::new(module_class, student)))
        }
        UNDO_WORD => Ok(Command::Undo(UndoCommand)),
        REDO_WORD => Ok(Command::Redo(RedoCommand)),
        CLEAR_WORD => Ok(Command::Clear(ClearCommand)),
        HELP_WORD => Ok(Command::Help(HelpCommand)),
        EXIT_WORD => Ok(Command::Exit(ExitCommand)),
        other => Err(ParseError::UnknownCommand(other.to_string())),
    }
}

fn parse_add_student(arguments: &str) -> ParseResult<Command> {
    let map = required(
        arguments,
        &[PREFIX_NAME, PREFIX_TELEGRAM, PREFIX_EMAIL],
        &[PREFIX_TAG],
        ADD_STUDENT_USAGE,
    )?;
    let student = Student::new(
        Name::parse(value_of(&map, PREFIX_NAME))?,
        Telegram::parse(value_of(&map, PREFIX_TELEGRAM))?,
        Email::parse(value_of(&map, PREFIX_EMAIL))?,
        parse_tags(map.all_values(PREFIX_TAG))?,
    );
    Ok(Command::AddStudent(AddStudentCommand::new(student)))
}

fn parse_edit_student(arguments: &str) -> ParseResult<Command> {
    let map = tokenize(
        arguments,
        &[PREFIX_NAME, PREFIX_TELEGRAM, PREFIX_EMAIL, PREFIX_TAG],
    );
    let index = index_in_preamble(&map, EDIT_STUDENT_USAGE)?;

    let descriptor = EditStudentDescriptor {
        name: map.value(PREFIX_NAME).map(Name::parse).transpose()?,
        telegram: map.value(PREFIX_TELEGRAM).map(Telegram::parse).transpose()?,
        email: map.value(PREFIX_EMAIL).map(Email::parse).transpose()?,
        tags: if map.contains(PREFIX_TAG) {
            Some(parse_tags(map.all_values(PREFIX_TAG))?)
        } else {
            None
        },
    };
    if !descriptor.is_any_field_edited() {
        return Err(ParseError::NoFieldEdited);
    }
    Ok(Command::EditStudent(EditStudentCommand::new(
        index, descriptor,
    )))
}

fn parse_list_student(arguments: &str) -> ParseResult<Command> {
    let map = tokenize(arguments, &[PREFIX_CLASS_INDEX]);
    if !map.preamble().is_empty() {
        return Err(ParseError::InvalidCommandFormat {
            usage: LIST_STUDENT_USAGE,
        });
    }
    match map.value(PREFIX_CLASS_INDEX) {
        Some(value) => Ok(Command::ListStudent(ListStudentCommand::in_module_class(
            parse_index(value)?,
        ))),
        None => Ok(Command::ListStudent(ListStudentCommand::all())),
    }
}

fn parse_add_class(arguments: &str) -> ParseResult<Command> {
    let map = required(arguments, &[PREFIX_NAME], &[], ADD_CLASS_USAGE)?;
    let module_class = ModuleClass::empty(Name::parse(value_of(&map, PREFIX_NAME))?);
    Ok(Command::AddModuleClass(AddModuleClassCommand::new(
        module_class,
    )))
}

fn parse_edit_class(arguments: &str) -> ParseResult<Command> {
    let map = tokenize(arguments, &[PREFIX_NAME]);
    let index = index_in_preamble(&map, EDIT_CLASS_USAGE)?;
    let descriptor = EditModuleClassDescriptor {
        name: map.value(PREFIX_NAME).map(Name::parse).transpose()?,
    };
    if !descriptor.is_any_field_edited() {
        return Err(ParseError::NoFieldEdited);
    }
    Ok(Command::EditModuleClass(EditModuleClassCommand::new(
        index, descriptor,
    )))
}

fn parse_add_lesson(arguments: &str) -> ParseResult<Command> {
    let map = required(
        arguments,
        &[
            PREFIX_CLASS_INDEX,
            PREFIX_START_TIME,
            PREFIX_END_TIME,
            PREFIX_DAY,
            PREFIX_NUMBER_OF_OCCURRENCES,
            PREFIX_VENUE,
        ],
        &[],
        ADD_LESSON_USAGE,
    )?;
    let module_class = index_of(&map, PREFIX_CLASS_INDEX)?;
    let lesson = Lesson::new(
        parse_time(value_of(&map, PREFIX_START_TIME))?,
        parse_time(value_of(&map, PREFIX_END_TIME))?,
        Day::parse(value_of(&map, PREFIX_DAY))?,
        NumberOfOccurrences::parse(value_of(&map, PREFIX_NUMBER_OF_OCCURRENCES))?,
        Venue::parse(value_of(&map, PREFIX_VENUE))?,
    )?;
    Ok(Command::AddLesson(AddLessonCommand::new(module_class, lesson)))
}

fn parse_edit_lesson(arguments: &str) -> ParseResult<Command> {
    let map = required(
        arguments,
        &[PREFIX_CLASS_INDEX, PREFIX_LESSON_INDEX],
        &[
            PREFIX_START_TIME,
            PREFIX_END_TIME,
            PREFIX_DAY,
            PREFIX_NUMBER_OF_OCCURRENCES,
            PREFIX_VENUE,
        ],
        EDIT_LESSON_USAGE,
    )?;
    let module_class = index_of(&map, PREFIX_CLASS_INDEX)?;
    let lesson = index_of(&map, PREFIX_LESSON_INDEX)?;

    let descriptor = EditLessonDescriptor {
        start_time: map.value(PREFIX_START_TIME).map(parse_time).transpose()?,
        end_time: map.value(PREFIX_END_TIME).map(parse_time).transpose()?,
        day: map.value(PREFIX_DAY).map(Day::parse).transpose()?,
        number_of_occurrences: map
            .value(PREFIX_NUMBER_OF_OCCURRENCES)
            .map(NumberOfOccurrences::parse)
            .transpose()?,
        venue: map.value(PREFIX_VENUE).map(Venue::parse).transpose()?,
    };
    if !descriptor.is_any_field_edited() {
        return Err(ParseError::NoFieldEdited);
    }
    Ok(Command::EditLesson(EditLessonCommand::new(
        module_class,
        lesson,
        descriptor,
    )))
}

/// Tokenizes and checks that every `required` prefix is present and the
/// preamble is empty.
fn required(
    arguments: &str,
    required: &[Prefix],
    optional: &[Prefix],
    usage: &'static str,
) -> ParseResult<ArgumentMultimap> {
    let prefixes: Vec<Prefix> = required.iter().chain(optional).copied().collect();
    let map = tokenize(arguments, &prefixes);
    if !map.contains_all(required) || !map.preamble().is_empty() {
        return Err(ParseError::InvalidCommandFormat { usage });
    }
    Ok(map)
}

/// Value of a prefix already checked by `required`.
fn value_of(map: &ArgumentMultimap, prefix: Prefix) -> &str {
    map.value(prefix).unwrap_or_default()
}

fn index_of(map: &ArgumentMultimap, prefix: Prefix) -> ParseResult<Index> {
    parse_index(value_of(map, prefix))
}

fn index_in_preamble(map: &ArgumentMultimap, usage: &'static str) -> ParseResult<Index> {
    parse_index(map.preamble()).map_err(|_| ParseError::InvalidCommandFormat { usage })
}

fn preamble_index(arguments: &str, usage: &'static str) -> ParseResult<Index> {
    parse_index(arguments).map_err(|_| ParseError::InvalidCommandFormat { usage })
}

fn keywords(arguments: &str, usage: &'static str) -> ParseResult<Vec<String>> {
    parse_keywords(arguments).ok_or(ParseError::InvalidCommandFormat { usage })
}

fn class_and_student(arguments: &str, usage: &'static str) -> ParseResult<(Index, Index)> {
    let map = required(
        arguments,
        &[PREFIX_CLASS_INDEX, PREFIX_STUDENT_INDEX],
        &[],
        usage,
    )?;
    Ok((
        index_of(&map, PREFIX_CLASS_INDEX)?,
        index_of(&map, PREFIX_STUDENT_INDEX)?,
    ))
}

fn attendance_target(
    arguments: &str,
    extra: &[Prefix],
    usage: &'static str,
) -> ParseResult<(AttendanceTarget, ArgumentMultimap)> {
    let mut prefixes = vec![
        PREFIX_CLASS_INDEX,
        PREFIX_LESSON_INDEX,
        PREFIX_STUDENT_INDEX,
        PREFIX_WEEK,
    ];
    prefixes.extend_from_slice(extra);
    let map = required(arguments, &prefixes, &[], usage)?;
    let target = AttendanceTarget {
        module_class: index_of(&map, PREFIX_CLASS_INDEX)?,
        lesson: index_of(&map, PREFIX_LESSON_INDEX)?,
        student: index_of(&map, PREFIX_STUDENT_INDEX)?,
        week: parse_week(value_of(&map, PREFIX_WEEK))?,
    };
    Ok((target, map))
}
