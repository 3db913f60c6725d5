//! Model store: live data set plus display filters.
//!
//! # Responsibility
//! - Expose the filtered student/class lists that command indices resolve
//!   against.
//! - Route every mutation into the history-owned live data set.
//!
//! # Invariants
//! - Filters are display state only; they are never part of a snapshot.
//! - Undo and redo reset both filters to `All`.
//! - `revision` changes whenever the live data set may have changed.

use crate::history::{History, HistoryError};
use crate::model::filter::{ModuleClassFilter, StudentFilter};
use crate::model::module_class::ModuleClass;
use crate::model::student::Student;
use crate::model::tutors_pet::{DataSetError, TutorsPet};

#[derive(Debug, Clone)]
pub struct ModelStore {
    history: History,
    student_filter: StudentFilter,
    module_class_filter: ModuleClassFilter,
    revision: u64,
}

impl ModelStore {
    /// Wraps `initial` in a fresh history with unfiltered lists.
    pub fn new(initial: TutorsPet) -> Self {
        Self {
            history: History::new(initial),
            student_filter: StudentFilter::All,
            module_class_filter: ModuleClassFilter::All,
            revision: 0,
        }
    }

    /// Live data set.
    pub fn tutors_pet(&self) -> &TutorsPet {
        self.history.live()
    }

    /// Monotonic counter bumped by commits, undo and redo.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Students currently displayed, in data set order.
    pub fn filtered_students(&self) -> Vec<&Student> {
        self.tutors_pet()
            .students()
            .iter()
            .filter(|student| self.student_filter.matches(student))
            .collect()
    }

    /// Classes currently displayed, in data set order.
    pub fn filtered_module_classes(&self) -> Vec<&ModuleClass> {
        self.tutors_pet()
            .module_classes()
            .iter()
            .filter(|module_class| self.module_class_filter.matches(module_class))
            .collect()
    }

    /// Resolves a zero-based position in the filtered student list.
    pub fn filtered_student(&self, index: usize) -> Option<&Student> {
        self.tutors_pet()
            .students()
            .iter()
            .filter(|student| self.student_filter.matches(student))
            .nth(index)
    }

    /// Resolves a zero-based position in the filtered class list.
    pub fn filtered_module_class(&self, index: usize) -> Option<&ModuleClass> {
        self.tutors_pet()
            .module_classes()
            .iter()
            .filter(|module_class| self.module_class_filter.matches(module_class))
            .nth(index)
    }

    /// Active student list predicate.
    pub fn student_filter(&self) -> &StudentFilter {
        &self.student_filter
    }

    /// Active class list predicate.
    pub fn module_class_filter(&self) -> &ModuleClassFilter {
        &self.module_class_filter
    }

    /// Replaces the student list predicate.
    pub fn update_student_filter(&mut self, filter: StudentFilter) {
        self.student_filter = filter;
    }

    /// Replaces the class list predicate.
    pub fn update_module_class_filter(&mut self, filter: ModuleClassFilter) {
        self.module_class_filter = filter;
    }

    /// Returns whether a same student exists.
    pub fn has_student(&self, student: &Student) -> bool {
        self.tutors_pet().has_student(student)
    }

    /// Returns whether a class with the same name exists.
    pub fn has_module_class(&self, module_class: &ModuleClass) -> bool {
        self.tutors_pet().has_module_class(module_class)
    }

    /// Appends a student to the live data set.
    pub fn add_student(&mut self, student: Student) -> Result<(), DataSetError> {
        self.history.live_mut().add_student(student)?;
        self.student_filter = StudentFilter::All;
        Ok(())
    }

    /// Replaces `target` with `edited` in the live data set.
    pub fn set_student(&mut self, target: &Student, edited: Student) -> Result<(), DataSetError> {
        self.history.live_mut().set_student(target, edited)
    }

    /// Removes `target` and every reference to it.
    pub fn delete_student(&mut self, target: &Student) -> Result<(), DataSetError> {
        self.history.live_mut().remove_student(target)
    }

    /// Appends a class to the live data set.
    pub fn add_module_class(&mut self, module_class: ModuleClass) -> Result<(), DataSetError> {
        self.history.live_mut().add_module_class(module_class)?;
        self.module_class_filter = ModuleClassFilter::All;
        Ok(())
    }

    /// Replaces `target` with `edited` in the live data set.
    pub fn set_module_class(
        &mut self,
        target: &ModuleClass,
        edited: ModuleClass,
    ) -> Result<(), DataSetError> {
        self.history.live_mut().set_module_class(target, edited)
    }

    /// Removes `target` from the live data set.
    pub fn delete_module_class(&mut self, target: &ModuleClass) -> Result<(), DataSetError> {
        self.history.live_mut().remove_module_class(target)
    }

    /// Replaces the whole live data set (used by `clear`).
    pub fn reset_data(&mut self, data: TutorsPet) {
        *self.history.live_mut() = data;
        self.student_filter = StudentFilter::All;
        self.module_class_filter = ModuleClassFilter::All;
    }

    /// Snapshots the live data set under `message`.
    pub fn commit(&mut self, message: impl Into<String>) {
        self.history.commit(message);
        self.revision += 1;
    }

    /// Returns whether undo would succeed.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Returns whether redo would succeed.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Restores the previous snapshot and resets both filters.
    pub fn undo(&mut self) -> Result<String, HistoryError> {
        let message = self.history.undo()?;
        self.show_all();
        self.revision += 1;
        Ok(message)
    }

    /// Restores the next snapshot and resets both filters.
    pub fn redo(&mut self) -> Result<String, HistoryError> {
        let message = self.history.redo()?;
        self.show_all();
        self.revision += 1;
        Ok(message)
    }

    fn show_all(&mut self) {
        self.student_filter = StudentFilter::All;
        self.module_class_filter = ModuleClassFilter::All;
    }
}

#[cfg(test)]
mod tests {
    use super::ModelStore;
    use crate::model::filter::StudentFilter;
    use crate::model::name::Name;
    use crate::model::student::{Email, Student, Telegram};
    use crate::model::tutors_pet::TutorsPet;
    use std::collections::BTreeSet;

    fn student(name: &str, telegram: &str) -> Student {
        Student::new(
            Name::parse(name).unwrap(),
            Telegram::parse(telegram).unwrap(),
            Email::parse("someone@example.com").unwrap(),
            BTreeSet::new(),
        )
    }

    #[test]
    fn filtered_lookup_follows_active_filter() {
        let data = TutorsPet::from_parts(
            vec![student("Alice Pauline", "4Lice_P"), student("Carl Kurz", "cK2zz")],
            Vec::new(),
        )
        .unwrap();
        let mut store = ModelStore::new(data);
        store.update_student_filter(StudentFilter::NameContainsKeywords(vec!["kurz".into()]));

        assert_eq!(store.filtered_students().len(), 1);
        assert_eq!(store.filtered_student(0).unwrap().name().as_str(), "Carl Kurz");
        assert!(store.filtered_student(1).is_none());
    }

    #[test]
    fn undo_resets_filters_and_bumps_revision() {
        let mut store = ModelStore::new(TutorsPet::new());
        store.add_student(student("Alice Pauline", "4Lice_P")).unwrap();
        store.commit("add");
        store.update_student_filter(StudentFilter::NameContainsKeywords(vec!["x".into()]));
        let before = store.revision();

        store.undo().unwrap();
        assert_eq!(store.student_filter(), &StudentFilter::All);
        assert!(store.revision() > before);
        assert!(store.tutors_pet().students().is_empty());
    }
}
