//! Student commands: add, edit, delete, find, list.

use crate::command::{
    resolve_module_class, resolve_student, CommandError, CommandOutput, CommandResult, Index,
    ListView,
};
use crate::model::filter::StudentFilter;
use crate::model::name::Name;
use crate::model::student::{Email, Student, Tag, Telegram};
use crate::store::ModelStore;
use std::collections::BTreeSet;

pub const ADD_STUDENT_WORD: &str = "add-student";
pub const EDIT_STUDENT_WORD: &str = "edit-student";
pub const DELETE_STUDENT_WORD: &str = "delete-student";
pub const FIND_STUDENT_WORD: &str = "find-student";
pub const LIST_STUDENT_WORD: &str = "list-student";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddStudentCommand {
    pub student: Student,
}

impl AddStudentCommand {
    pub fn new(student: Student) -> Self {
        Self { student }
    }

    /// Appends the student unless the same student already exists.
    pub fn execute(&self, store: &mut ModelStore) -> CommandResult<CommandOutput> {
        if store.has_student(&self.student) {
            return Err(CommandError::DuplicateStudent);
        }
        store.add_student(self.student.clone())?;
        let message = format!("New student added: {}", self.student);
        store.commit(message.clone());
        Ok(CommandOutput::with_view(message, ListView::Students))
    }
}

/// Sparse set of student field overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditStudentDescriptor {
    pub name: Option<Name>,
    pub telegram: Option<Telegram>,
    pub email: Option<Email>,
    /// `Some(empty)` clears every tag.
    pub tags: Option<BTreeSet<Tag>>,
}

impl EditStudentDescriptor {
    /// Returns whether any student field is set.
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some() || self.telegram.is_some() || self.email.is_some() || self.tags.is_some()
    }

    /// Merges the set fields over `student`, keeping its uuid.
    pub fn apply(&self, student: &Student) -> Student {
        let mut edited = student.clone();
        if let Some(name) = &self.name {
            edited = edited.with_name(name.clone());
        }
        if let Some(telegram) = &self.telegram {
            edited = edited.with_telegram(telegram.clone());
        }
        if let Some(email) = &self.email {
            edited = edited.with_email(email.clone());
        }
        if let Some(tags) = &self.tags {
            edited = edited.with_tags(tags.clone());
        }
        edited
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditStudentCommand {
    pub index: Index,
    pub descriptor: EditStudentDescriptor,
}

impl EditStudentCommand {
    pub fn new(index: Index, descriptor: EditStudentDescriptor) -> Self {
        Self { index, descriptor }
    }

    /// Applies the descriptor to the displayed student at `index`.
    pub fn execute(&self, store: &mut ModelStore) -> CommandResult<CommandOutput> {
        let target = resolve_student(store, self.index)?;
        let edited = self.descriptor.apply(&target);

        store.set_student(&target, edited.clone())?;
        store.update_student_filter(StudentFilter::All);
        let message = format!("Edited student: {edited}");
        store.commit(message.clone());
        Ok(CommandOutput::with_view(message, ListView::Students))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteStudentCommand {
    pub index: Index,
}

impl DeleteStudentCommand {
    pub fn new(index: Index) -> Self {
        Self { index }
    }

    /// Deletes the student and its class memberships and attendance.
    pub fn execute(&self, store: &mut ModelStore) -> CommandResult<CommandOutput> {
        let target = resolve_student(store, self.index)?;
        store.delete_student(&target)?;
        let message = format!("Deleted student: {target}");
        store.commit(message.clone());
        Ok(CommandOutput::with_view(message, ListView::Both))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindStudentCommand {
    pub keywords: Vec<String>,
}

impl FindStudentCommand {
    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }

    /// Filters the student list by name keywords.
    pub fn execute(&self, store: &mut ModelStore) -> CommandResult<CommandOutput> {
        store.update_student_filter(StudentFilter::NameContainsKeywords(self.keywords.clone()));
        let count = store.filtered_students().len();
        Ok(CommandOutput::with_view(
            format!("{count} students listed!"),
            ListView::Students,
        ))
    }
}

/// Lists every student, or only the members of one displayed class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListStudentCommand {
    pub module_class: Option<Index>,
}

impl ListStudentCommand {
    /// Lists every student.
    pub fn all() -> Self {
        Self { module_class: None }
    }

    /// Lists the members of the displayed class at `index`.
    pub fn in_module_class(index: Index) -> Self {
        Self {
            module_class: Some(index),
        }
    }

    /// Shows every student, or the members of one class.
    pub fn execute(&self, store: &mut ModelStore) -> CommandResult<CommandOutput> {
        let Some(index) = self.module_class else {
            store.update_student_filter(StudentFilter::All);
            return Ok(CommandOutput::with_view(
                "Listed all students",
                ListView::Students,
            ));
        };

        let module_class = resolve_module_class(store, index)?;
        store.update_student_filter(StudentFilter::MemberOf(module_class.student_uuids().clone()));
        Ok(CommandOutput::with_view(
            format!("Listed all students in {}", module_class.name()),
            ListView::Students,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::EditStudentDescriptor;
    use crate::model::name::Name;
    use crate::model::student::{Email, Student, Tag, Telegram};
    use std::collections::BTreeSet;

    #[test]
    fn descriptor_keeps_unset_fields_and_uuid() {
        let tags: BTreeSet<Tag> = [Tag::parse("friends").unwrap()].into_iter().collect();
        let student = Student::new(
            Name::parse("Alice Pauline").unwrap(),
            Telegram::parse("4Lice_P").unwrap(),
            Email::parse("alice@example.com").unwrap(),
            tags.clone(),
        );
        let descriptor = EditStudentDescriptor {
            email: Some(Email::parse("alice@nus.edu.sg").unwrap()),
            ..EditStudentDescriptor::default()
        };
        assert!(descriptor.is_any_field_edited());

        let edited = descriptor.apply(&student);
        assert_eq!(edited.uuid(), student.uuid());
        assert_eq!(edited.name(), student.name());
        assert_eq!(edited.tags(), &tags);
        assert_eq!(edited.email().as_str(), "alice@nus.edu.sg");
    }

    #[test]
    fn empty_descriptor_is_not_an_edit() {
        assert!(!EditStudentDescriptor::default().is_any_field_edited());
    }
}
