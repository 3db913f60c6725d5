//! Table rendering of the displayed student and class lists.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};
use tutorspet_core::{ListView, ModelStore, ModuleClass, Student, COMMAND_FORMATS};

pub fn print_view(store: &ModelStore, view: ListView) {
    match view {
        ListView::Students => print_students(store),
        ListView::ModuleClasses => print_module_classes(store),
        ListView::Both => {
            print_students(store);
            print_module_classes(store);
        }
    }
}

pub fn print_students(store: &ModelStore) {
    let students = store.filtered_students();
    if students.is_empty() {
        println!("(no students listed)");
        return;
    }
    println!("{}", students_table(&students));
}

pub fn print_module_classes(store: &ModelStore) {
    let module_classes = store.filtered_module_classes();
    if module_classes.is_empty() {
        println!("(no classes listed)");
        return;
    }
    println!("{}", module_classes_table(&module_classes));
}

pub fn print_help() {
    println!("{}", help_table());
}

fn help_table() -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![header_cell("Command"), header_cell("Format")]);
    for (word, format) in COMMAND_FORMATS {
        table.add_row(vec![Cell::new(word), Cell::new(format)]);
    }
    table
}

fn students_table(students: &[&Student]) -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![
        header_cell("#"),
        header_cell("Name"),
        header_cell("Telegram"),
        header_cell("Email"),
        header_cell("Tags"),
    ]);
    for (position, student) in students.iter().enumerate() {
        let tags = student
            .tags()
            .iter()
            .map(|tag| tag.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(vec![
            Cell::new(position + 1).set_alignment(CellAlignment::Right),
            Cell::new(student.name()),
            Cell::new(student.telegram()),
            Cell::new(student.email()),
            Cell::new(tags),
        ]);
    }
    table
}

fn module_classes_table(module_classes: &[&ModuleClass]) -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![
        header_cell("#"),
        header_cell("Class"),
        header_cell("Students"),
        header_cell("Lessons"),
    ]);
    for (position, module_class) in module_classes.iter().enumerate() {
        let lessons = module_class
            .lessons()
            .iter()
            .enumerate()
            .map(|(index, lesson)| format!("{}. {lesson}", index + 1))
            .collect::<Vec<_>>()
            .join("\n");
        table.add_row(vec![
            Cell::new(position + 1).set_alignment(CellAlignment::Right),
            Cell::new(module_class.name()),
            Cell::new(module_class.student_uuids().len()).set_alignment(CellAlignment::Right),
            Cell::new(lessons),
        ]);
    }
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}
