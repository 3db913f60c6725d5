#![allow(dead_code)]

use std::collections::BTreeSet;
use tutorspet_core::model::lesson::parse_time;
use tutorspet_core::{
    parse_command, CommandOutput, CommandResult, Day, Email, Lesson, ModelStore, ModuleClass,
    Name, NumberOfOccurrences, Student, Tag, Telegram, TutorsPet, Venue,
};
use uuid::Uuid;

pub const TUTORIAL: &str = "CS2103T Tutorial";
pub const LAB: &str = "CS2100 Lab";

pub fn student(id: u128, name: &str, telegram: &str, email: &str, tags: &[&str]) -> Student {
    Student::with_id(
        Uuid::from_u128(id),
        Name::parse(name).unwrap(),
        Telegram::parse(telegram).unwrap(),
        Email::parse(email).unwrap(),
        tags.iter()
            .map(|tag| Tag::parse(tag).unwrap())
            .collect::<BTreeSet<_>>(),
    )
    .unwrap()
}

pub fn alice() -> Student {
    student(1, "Alice Pauline", "4Lice_P", "alice@example.com", &["friends"])
}

pub fn benson() -> Student {
    student(
        2,
        "Benson Meier",
        "BeN_10",
        "johnd@example.com",
        &["owesMoney", "friends"],
    )
}

pub fn carl() -> Student {
    student(3, "Carl Kurz", "cK2zz", "heinz@example.com", &[])
}

pub fn daniel() -> Student {
    student(4, "Daniel Meier", "danielmeier", "cornelia@example.com", &["friends"])
}

pub fn elle() -> Student {
    student(5, "Elle Meyer", "4114_my", "werner@example.com", &[])
}

pub fn fiona() -> Student {
    student(6, "Fiona Kunz", "kunz_F", "lydia@example.com", &[])
}

pub fn george() -> Student {
    student(7, "George Best", "dabest", "anna@example.com", &[])
}

pub fn typical_students() -> Vec<Student> {
    vec![alice(), benson(), carl(), daniel(), elle(), fiona(), george()]
}

pub fn lesson(day: Day, start: &str, end: &str, occurrences: usize, venue: &str) -> Lesson {
    Lesson::new(
        parse_time(start).unwrap(),
        parse_time(end).unwrap(),
        day,
        NumberOfOccurrences::new(occurrences).unwrap(),
        Venue::parse(venue).unwrap(),
    )
    .unwrap()
}

/// WEDNESDAY 14:00-16:00 at COM1-B111, 7 weeks.
pub fn wednesday_lesson() -> Lesson {
    lesson(Day::Wednesday, "14:00", "16:00", 7, "COM1-B111")
}

/// FRIDAY 08:00-10:00 at S17-0302, 13 weeks.
pub fn friday_lesson() -> Lesson {
    lesson(Day::Friday, "08:00", "10:00", 13, "S17-0302")
}

/// Tutorial members: Alice, Benson, Carl. Lab members: Daniel.
pub fn typical_module_classes() -> Vec<ModuleClass> {
    vec![
        ModuleClass::new(
            Name::parse(TUTORIAL).unwrap(),
            [alice(), benson(), carl()]
                .iter()
                .map(Student::uuid)
                .collect(),
            vec![wednesday_lesson()],
        ),
        ModuleClass::new(
            Name::parse(LAB).unwrap(),
            [daniel().uuid()].into_iter().collect(),
            vec![friday_lesson()],
        ),
    ]
}

pub fn typical_tutors_pet() -> TutorsPet {
    TutorsPet::from_parts(typical_students(), typical_module_classes()).unwrap()
}

pub fn typical_store() -> ModelStore {
    ModelStore::new(typical_tutors_pet())
}

/// Parses and executes one line against `store`; parse errors panic.
pub fn run(store: &mut ModelStore, line: &str) -> CommandResult<CommandOutput> {
    parse_command(line).unwrap().execute(store)
}

pub fn module_class<'a>(store: &'a ModelStore, name: &str) -> &'a ModuleClass {
    store
        .tutors_pet()
        .module_classes()
        .iter()
        .find(|module_class| module_class.name().as_str() == name)
        .unwrap()
}

/// Captures everything a failed command must not change.
pub fn observable_state(store: &ModelStore) -> (TutorsPet, Vec<Student>, Vec<ModuleClass>) {
    (
        store.tutors_pet().clone(),
        store.filtered_students().into_iter().cloned().collect(),
        store.filtered_module_classes().into_iter().cloned().collect(),
    )
}
