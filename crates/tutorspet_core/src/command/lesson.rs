//! Lesson commands: add, edit, delete lessons of a displayed class.

use crate::command::{
    resolve_module_class, CommandError, CommandOutput, CommandResult, Index, ListView,
};
use crate::model::error::ValidationError;
use crate::model::lesson::{Day, Lesson, NumberOfOccurrences, Venue};
use crate::model::module_class::ModuleClass;
use crate::store::ModelStore;
use chrono::NaiveTime;

pub const ADD_LESSON_WORD: &str = "add-lesson";
pub const EDIT_LESSON_WORD: &str = "edit-lesson";
pub const DELETE_LESSON_WORD: &str = "delete-lesson";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddLessonCommand {
    pub module_class: Index,
    pub lesson: Lesson,
}

impl AddLessonCommand {
    pub fn new(module_class: Index, lesson: Lesson) -> Self {
        Self {
            module_class,
            lesson,
        }
    }

    /// Appends the lesson to the addressed class.
    pub fn execute(&self, store: &mut ModelStore) -> CommandResult<CommandOutput> {
        let target = resolve_module_class(store, self.module_class)?;
        if target.has_lesson(&self.lesson) {
            return Err(CommandError::DuplicateLesson);
        }

        store.set_module_class(&target, target.with_lesson_added(self.lesson.clone()))?;
        let message = format!("New lesson added to {}: {}", target.name(), self.lesson);
        store.commit(message.clone());
        Ok(CommandOutput::with_view(message, ListView::ModuleClasses))
    }
}

/// Sparse set of lesson field overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditLessonDescriptor {
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub day: Option<Day>,
    pub number_of_occurrences: Option<NumberOfOccurrences>,
    pub venue: Option<Venue>,
}

impl EditLessonDescriptor {
    /// Returns whether any lesson field is set.
    pub fn is_any_field_edited(&self) -> bool {
        self.start_time.is_some()
            || self.end_time.is_some()
            || self.day.is_some()
            || self.number_of_occurrences.is_some()
            || self.venue.is_some()
    }

    /// Merges the set fields over `lesson`.
    ///
    /// A changed occurrence count truncates or pads the attendance list.
    ///
    /// # Errors
    /// - `InvalidTimeRange` when the merged start is not before the merged end.
    pub fn apply(&self, lesson: &Lesson) -> Result<Lesson, ValidationError> {
        let number_of_occurrences = self
            .number_of_occurrences
            .unwrap_or_else(|| lesson.number_of_occurrences());
        let attendance_record_list = lesson
            .attendance_record_list()
            .resized(number_of_occurrences.get());
        Lesson::with_attendance(
            self.start_time.unwrap_or_else(|| lesson.start_time()),
            self.end_time.unwrap_or_else(|| lesson.end_time()),
            self.day.unwrap_or_else(|| lesson.day()),
            number_of_occurrences,
            self.venue.clone().unwrap_or_else(|| lesson.venue().clone()),
            attendance_record_list,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditLessonCommand {
    pub module_class: Index,
    pub lesson: Index,
    pub descriptor: EditLessonDescriptor,
}

impl EditLessonCommand {
    pub fn new(module_class: Index, lesson: Index, descriptor: EditLessonDescriptor) -> Self {
        Self {
            module_class,
            lesson,
            descriptor,
        }
    }

    /// Applies the descriptor to the addressed lesson.
    pub fn execute(&self, store: &mut ModelStore) -> CommandResult<CommandOutput> {
        let target = resolve_module_class(store, self.module_class)?;
        let position = self.lesson.zero_based();
        let lesson = target
            .lesson(position)
            .ok_or(CommandError::InvalidLessonIndex)?;
        let edited = self.descriptor.apply(lesson)?;

        let collides = target
            .lessons()
            .iter()
            .enumerate()
            .any(|(index, existing)| index != position && existing.is_same_lesson(&edited));
        if collides {
            return Err(CommandError::DuplicateLesson);
        }

        let updated = replace_lesson(&target, position, edited.clone())?;
        store.set_module_class(&target, updated)?;
        let message = format!("Edited lesson: {edited}");
        store.commit(message.clone());
        Ok(CommandOutput::with_view(message, ListView::ModuleClasses))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteLessonCommand {
    pub module_class: Index,
    pub lesson: Index,
}

impl DeleteLessonCommand {
    pub fn new(module_class: Index, lesson: Index) -> Self {
        Self {
            module_class,
            lesson,
        }
    }

    /// Removes the addressed lesson and its attendance.
    pub fn execute(&self, store: &mut ModelStore) -> CommandResult<CommandOutput> {
        let target = resolve_module_class(store, self.module_class)?;
        let position = self.lesson.zero_based();
        let lesson = target
            .lesson(position)
            .cloned()
            .ok_or(CommandError::InvalidLessonIndex)?;
        let updated = target
            .without_lesson(position)
            .ok_or(CommandError::InvalidLessonIndex)?;

        store.set_module_class(&target, updated)?;
        let message = format!("Deleted lesson: {lesson}");
        store.commit(message.clone());
        Ok(CommandOutput::with_view(message, ListView::ModuleClasses))
    }
}

pub(crate) fn replace_lesson(
    module_class: &ModuleClass,
    position: usize,
    lesson: Lesson,
) -> CommandResult<ModuleClass> {
    module_class
        .with_lesson_replaced(position, lesson)
        .ok_or(CommandError::InvalidLessonIndex)
}
