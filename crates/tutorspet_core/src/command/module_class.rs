//! Module class commands, including student membership links.

use crate::command::{
    resolve_module_class, resolve_student, CommandError, CommandOutput, CommandResult, Index,
    ListView,
};
use crate::model::filter::ModuleClassFilter;
use crate::model::module_class::ModuleClass;
use crate::model::name::Name;
use crate::store::ModelStore;

pub const ADD_CLASS_WORD: &str = "add-class";
pub const EDIT_CLASS_WORD: &str = "edit-class";
pub const DELETE_CLASS_WORD: &str = "delete-class";
pub const FIND_CLASS_WORD: &str = "find-class";
pub const LIST_CLASS_WORD: &str = "list-class";
pub const LINK_WORD: &str = "link";
pub const UNLINK_WORD: &str = "unlink";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddModuleClassCommand {
    pub module_class: ModuleClass,
}

impl AddModuleClassCommand {
    pub fn new(module_class: ModuleClass) -> Self {
        Self { module_class }
    }

    /// Appends an empty class unless one with the same name exists.
    pub fn execute(&self, store: &mut ModelStore) -> CommandResult<CommandOutput> {
        if store.has_module_class(&self.module_class) {
            return Err(CommandError::DuplicateModuleClass);
        }
        store.add_module_class(self.module_class.clone())?;
        let message = format!("New class added: {}", self.module_class.name());
        store.commit(message.clone());
        Ok(CommandOutput::with_view(message, ListView::ModuleClasses))
    }
}

/// Sparse set of class field overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditModuleClassDescriptor {
    pub name: Option<Name>,
}

impl EditModuleClassDescriptor {
    /// Returns whether any class field is set.
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
    }

    /// Merges the set fields over `module_class`; members and lessons are
    /// never edited through this path.
    pub fn apply(&self, module_class: &ModuleClass) -> ModuleClass {
        match &self.name {
            Some(name) => module_class.with_name(name.clone()),
            None => module_class.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditModuleClassCommand {
    pub index: Index,
    pub descriptor: EditModuleClassDescriptor,
}

impl EditModuleClassCommand {
    pub fn new(index: Index, descriptor: EditModuleClassDescriptor) -> Self {
        Self { index, descriptor }
    }

    /// Renames the displayed class at `index`.
    pub fn execute(&self, store: &mut ModelStore) -> CommandResult<CommandOutput> {
        let target = resolve_module_class(store, self.index)?;
        let edited = self.descriptor.apply(&target);

        store.set_module_class(&target, edited.clone())?;
        store.update_module_class_filter(ModuleClassFilter::All);
        let message = format!("Edited class: {}", edited.name());
        store.commit(message.clone());
        Ok(CommandOutput::with_view(message, ListView::ModuleClasses))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteModuleClassCommand {
    pub index: Index,
}

impl DeleteModuleClassCommand {
    pub fn new(index: Index) -> Self {
        Self { index }
    }

    /// Removes the displayed class at `index`.
    pub fn execute(&self, store: &mut ModelStore) -> CommandResult<CommandOutput> {
        let target = resolve_module_class(store, self.index)?;
        store.delete_module_class(&target)?;
        let message = format!("Deleted class: {}", target.name());
        store.commit(message.clone());
        Ok(CommandOutput::with_view(message, ListView::ModuleClasses))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindModuleClassCommand {
    pub keywords: Vec<String>,
}

impl FindModuleClassCommand {
    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }

    /// Filters the class list by name keywords.
    pub fn execute(&self, store: &mut ModelStore) -> CommandResult<CommandOutput> {
        store.update_module_class_filter(ModuleClassFilter::NameContainsKeywords(
            self.keywords.clone(),
        ));
        let count = store.filtered_module_classes().len();
        Ok(CommandOutput::with_view(
            format!("{count} classes listed!"),
            ListView::ModuleClasses,
        ))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListModuleClassCommand;

impl ListModuleClassCommand {
    /// Shows every class.
    pub fn execute(&self, store: &mut ModelStore) -> CommandResult<CommandOutput> {
        store.update_module_class_filter(ModuleClassFilter::All);
        Ok(CommandOutput::with_view(
            "Listed all classes",
            ListView::ModuleClasses,
        ))
    }
}

/// Enrolls a displayed student in a displayed class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkStudentCommand {
    pub module_class: Index,
    pub student: Index,
}

impl LinkStudentCommand {
    pub fn new(module_class: Index, student: Index) -> Self {
        Self {
            module_class,
            student,
        }
    }

    /// Adds the displayed student to the displayed class.
    pub fn execute(&self, store: &mut ModelStore) -> CommandResult<CommandOutput> {
        let student = resolve_student(store, self.student)?;
        let target = resolve_module_class(store, self.module_class)?;
        if target.has_student(student.uuid()) {
            return Err(CommandError::StudentAlreadyInClass);
        }

        store.set_module_class(&target, target.with_student(student.uuid()))?;
        let message = format!("Linked {} to {}", student.name(), target.name());
        store.commit(message.clone());
        Ok(CommandOutput::with_view(message, ListView::ModuleClasses))
    }
}

/// Removes a displayed student from a displayed class, dropping its
/// attendance in that class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnlinkStudentCommand {
    pub module_class: Index,
    pub student: Index,
}

impl UnlinkStudentCommand {
    pub fn new(module_class: Index, student: Index) -> Self {
        Self {
            module_class,
            student,
        }
    }

    /// Removes the student from the class along with their attendance there.
    pub fn execute(&self, store: &mut ModelStore) -> CommandResult<CommandOutput> {
        let student = resolve_student(store, self.student)?;
        let target = resolve_module_class(store, self.module_class)?;
        if !target.has_student(student.uuid()) {
            return Err(CommandError::StudentNotInClass);
        }

        store.set_module_class(&target, target.without_student(student.uuid()))?;
        let message = format!("Unlinked {} from {}", student.name(), target.name());
        store.commit(message.clone());
        Ok(CommandOutput::with_view(message, ListView::Both))
    }
}
