//! Module class domain model.
//!
//! # Invariants
//! - Class names are unique within a data set (`is_same_module_class`).
//! - Attendance may only be recorded for member uuids; removing a member
//!   also removes its attendance entries from every lesson.

use crate::model::lesson::Lesson;
use crate::model::name::Name;
use crate::model::student::StudentId;
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleClass {
    name: Name,
    student_uuids: BTreeSet<StudentId>,
    lessons: Vec<Lesson>,
}

impl ModuleClass {
    /// Builds a class from loaded or edited parts.
    pub fn new(name: Name, student_uuids: BTreeSet<StudentId>, lessons: Vec<Lesson>) -> Self {
        Self {
            name,
            student_uuids,
            lessons,
        }
    }

    /// Creates a class without members or lessons.
    pub fn empty(name: Name) -> Self {
        Self::new(name, BTreeSet::new(), Vec::new())
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn student_uuids(&self) -> &BTreeSet<StudentId> {
        &self.student_uuids
    }

    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    /// Lesson at zero-based `index`.
    pub fn lesson(&self, index: usize) -> Option<&Lesson> {
        self.lessons.get(index)
    }

    pub fn has_student(&self, student: StudentId) -> bool {
        self.student_uuids.contains(&student)
    }

    /// Classes are identified by name.
    pub fn is_same_module_class(&self, other: &ModuleClass) -> bool {
        self.name == other.name
    }

    /// Returns whether another lesson in this class occupies the same slot.
    pub fn has_lesson(&self, lesson: &Lesson) -> bool {
        self.lessons
            .iter()
            .any(|existing| existing.is_same_lesson(lesson))
    }

    /// Returns the first attendance key that is not a member, if any.
    pub fn find_non_member_attendance(&self) -> Option<StudentId> {
        self.lessons
            .iter()
            .flat_map(|lesson| lesson.attendance_record_list().records())
            .flat_map(|record| record.entries().keys())
            .find(|uuid| !self.student_uuids.contains(uuid))
            .copied()
    }

    pub fn with_name(&self, name: Name) -> Self {
        Self {
            name,
            ..self.clone()
        }
    }

    pub fn with_student(&self, student: StudentId) -> Self {
        let mut student_uuids = self.student_uuids.clone();
        student_uuids.insert(student);
        Self {
            student_uuids,
            ..self.clone()
        }
    }

    /// Removes `student` from the class and from every lesson's attendance.
    pub fn without_student(&self, student: StudentId) -> Self {
        let mut student_uuids = self.student_uuids.clone();
        student_uuids.remove(&student);
        let lessons = self
            .lessons
            .iter()
            .map(|lesson| lesson.without_student(student))
            .collect();
        Self {
            name: self.name.clone(),
            student_uuids,
            lessons,
        }
    }

    pub fn with_lesson_added(&self, lesson: Lesson) -> Self {
        let mut lessons = self.lessons.clone();
        lessons.push(lesson);
        Self {
            lessons,
            ..self.clone()
        }
    }

    /// Returns `None` when `index` is out of range.
    pub fn with_lesson_replaced(&self, index: usize, lesson: Lesson) -> Option<Self> {
        if index >= self.lessons.len() {
            return None;
        }
        let mut lessons = self.lessons.clone();
        lessons[index] = lesson;
        Some(Self {
            lessons,
            ..self.clone()
        })
    }

    /// Returns `None` when `index` is out of range.
    pub fn without_lesson(&self, index: usize) -> Option<Self> {
        if index >= self.lessons.len() {
            return None;
        }
        let mut lessons = self.lessons.clone();
        lessons.remove(index);
        Some(Self {
            lessons,
            ..self.clone()
        })
    }
}

impl Display for ModuleClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({} students, {} lessons)",
            self.name,
            self.student_uuids.len(),
            self.lessons.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::ModuleClass;
    use crate::model::attendance::{Attendance, Week};
    use crate::model::lesson::{parse_time, Day, Lesson, NumberOfOccurrences, Venue};
    use crate::model::name::Name;
    use uuid::Uuid;

    fn lesson() -> Lesson {
        Lesson::new(
            parse_time("14:00").unwrap(),
            parse_time("16:00").unwrap(),
            Day::Wednesday,
            NumberOfOccurrences::new(3).unwrap(),
            Venue::parse("COM1-B111").unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn without_student_drops_attendance_entries() {
        let student = Uuid::new_v4();
        let week = Week::from_zero_based(0);
        let base = lesson();
        let record = base
            .attendance_record_list()
            .record(week)
            .unwrap()
            .with_entry(student, Attendance::new(70).unwrap());
        let list = base.attendance_record_list().with_record(week, record).unwrap();
        let lesson = base.with_attendance_record_list(list).unwrap();

        let class = ModuleClass::empty(Name::parse("CS2100 Lab").unwrap())
            .with_student(student)
            .with_lesson_added(lesson);
        assert_eq!(class.find_non_member_attendance(), None);

        let removed = class.without_student(student);
        assert!(!removed.has_student(student));
        assert!(!removed.lessons()[0]
            .attendance_record_list()
            .has_attendance(student, week));
    }

    #[test]
    fn lesson_index_helpers_reject_out_of_range() {
        let class = ModuleClass::empty(Name::parse("CS2100 Lab").unwrap());
        assert!(class.with_lesson_replaced(0, lesson()).is_none());
        assert!(class.without_lesson(0).is_none());
    }
}
