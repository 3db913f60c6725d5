//! The whole data set: students and module classes.
//!
//! # Responsibility
//! - Own the ordered student and class lists of one snapshot.
//! - Enforce uniqueness and referential integrity on every mutation.
//!
//! # Invariants
//! - No two students are `is_same_student`; no two share a uuid.
//! - No two classes are `is_same_module_class`.
//! - Every class member uuid refers to an existing student.
//! - Every attendance key refers to a member of the owning class.
//! - No class holds two lessons that are `is_same_lesson`.

use crate::model::module_class::ModuleClass;
use crate::model::student::{Student, StudentId};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Aggregate-level consistency failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSetError {
    DuplicateStudent,
    DuplicateStudentUuid(StudentId),
    DuplicateModuleClass,
    StudentNotFound,
    ModuleClassNotFound,
    /// A class lists a member uuid that matches no student.
    UnknownMember { class: String, student: StudentId },
    /// A lesson records attendance for a uuid that is not a class member.
    AttendanceForNonMember { class: String, student: StudentId },
    /// A class holds two lessons in the same slot.
    DuplicateLesson { class: String },
}

impl Display for DataSetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateStudent => write!(f, "students list contains duplicate student(s)"),
            Self::DuplicateStudentUuid(uuid) => {
                write!(f, "students list contains duplicate uuid {uuid}")
            }
            Self::DuplicateModuleClass => {
                write!(f, "module classes list contains duplicate class(es)")
            }
            Self::StudentNotFound => write!(f, "student not found"),
            Self::ModuleClassNotFound => write!(f, "module class not found"),
            Self::UnknownMember { class, student } => {
                write!(f, "class `{class}` references unknown student {student}")
            }
            Self::AttendanceForNonMember { class, student } => write!(
                f,
                "class `{class}` records attendance for non-member student {student}"
            ),
            Self::DuplicateLesson { class } => {
                write!(f, "class `{class}` contains duplicate lesson(s)")
            }
        }
    }
}

impl Error for DataSetError {}

/// One immutable-by-convention snapshot of every entity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TutorsPet {
    students: Vec<Student>,
    module_classes: Vec<ModuleClass>,
}

impl TutorsPet {
    /// Empty data set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a data set from loaded parts, validating every invariant.
    pub fn from_parts(
        students: Vec<Student>,
        module_classes: Vec<ModuleClass>,
    ) -> Result<Self, DataSetError> {
        let mut data = Self::new();
        for student in students {
            data.add_student(student)?;
        }
        for module_class in module_classes {
            data.add_module_class(module_class)?;
        }
        Ok(data)
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn module_classes(&self) -> &[ModuleClass] {
        &self.module_classes
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty() && self.module_classes.is_empty()
    }

    /// Looks a student up by uuid.
    pub fn student_by_uuid(&self, uuid: StudentId) -> Option<&Student> {
        self.students.iter().find(|student| student.uuid() == uuid)
    }

    /// Returns whether a same student exists.
    pub fn has_student(&self, student: &Student) -> bool {
        self.students
            .iter()
            .any(|existing| existing.is_same_student(student))
    }

    /// Returns whether a class with the same name exists.
    pub fn has_module_class(&self, module_class: &ModuleClass) -> bool {
        self.module_classes
            .iter()
            .any(|existing| existing.is_same_module_class(module_class))
    }

    /// Appends a student.
    ///
    /// # Errors
    /// - `DuplicateStudent` / `DuplicateStudentUuid` on collisions.
    pub fn add_student(&mut self, student: Student) -> Result<(), DataSetError> {
        if self.has_student(&student) {
            return Err(DataSetError::DuplicateStudent);
        }
        if self.student_by_uuid(student.uuid()).is_some() {
            return Err(DataSetError::DuplicateStudentUuid(student.uuid()));
        }
        self.students.push(student);
        Ok(())
    }

    /// Replaces `target` (matched by equality) with `edited` in place.
    ///
    /// The edited student keeps `target`'s list position. Memberships follow
    /// the uuid, so editing the uuid itself is rejected as not found.
    pub fn set_student(&mut self, target: &Student, edited: Student) -> Result<(), DataSetError> {
        let position = self
            .students
            .iter()
            .position(|student| student == target)
            .ok_or(DataSetError::StudentNotFound)?;
        if edited.uuid() != target.uuid() {
            return Err(DataSetError::StudentNotFound);
        }
        let collides = self
            .students
            .iter()
            .enumerate()
            .any(|(index, student)| index != position && student.is_same_student(&edited));
        if collides {
            return Err(DataSetError::DuplicateStudent);
        }
        self.students[position] = edited;
        Ok(())
    }

    /// Removes `target` and every membership/attendance that references it.
    pub fn remove_student(&mut self, target: &Student) -> Result<(), DataSetError> {
        let position = self
            .students
            .iter()
            .position(|student| student == target)
            .ok_or(DataSetError::StudentNotFound)?;
        let removed = self.students.remove(position);
        self.module_classes = self
            .module_classes
            .iter()
            .map(|module_class| {
                if module_class.has_student(removed.uuid()) {
                    module_class.without_student(removed.uuid())
                } else {
                    module_class.clone()
                }
            })
            .collect();
        Ok(())
    }

    /// Appends a class after checking name uniqueness and references.
    pub fn add_module_class(&mut self, module_class: ModuleClass) -> Result<(), DataSetError> {
        if self.has_module_class(&module_class) {
            return Err(DataSetError::DuplicateModuleClass);
        }
        self.check_references(&module_class)?;
        self.module_classes.push(module_class);
        Ok(())
    }

    /// Replaces `target` (matched by equality) with `edited` in place.
    pub fn set_module_class(
        &mut self,
        target: &ModuleClass,
        edited: ModuleClass,
    ) -> Result<(), DataSetError> {
        let position = self
            .module_classes
            .iter()
            .position(|module_class| module_class == target)
            .ok_or(DataSetError::ModuleClassNotFound)?;
        let collides = self
            .module_classes
            .iter()
            .enumerate()
            .any(|(index, existing)| index != position && existing.is_same_module_class(&edited));
        if collides {
            return Err(DataSetError::DuplicateModuleClass);
        }
        self.check_references(&edited)?;
        self.module_classes[position] = edited;
        Ok(())
    }

    /// Removes `target`; students are untouched.
    pub fn remove_module_class(&mut self, target: &ModuleClass) -> Result<(), DataSetError> {
        let position = self
            .module_classes
            .iter()
            .position(|module_class| module_class == target)
            .ok_or(DataSetError::ModuleClassNotFound)?;
        self.module_classes.remove(position);
        Ok(())
    }

    fn check_references(&self, module_class: &ModuleClass) -> Result<(), DataSetError> {
        let known: BTreeSet<StudentId> = self.students.iter().map(Student::uuid).collect();
        if let Some(unknown) = module_class
            .student_uuids()
            .iter()
            .find(|uuid| !known.contains(uuid))
        {
            return Err(DataSetError::UnknownMember {
                class: module_class.name().to_string(),
                student: *unknown,
            });
        }
        if let Some(student) = module_class.find_non_member_attendance() {
            return Err(DataSetError::AttendanceForNonMember {
                class: module_class.name().to_string(),
                student,
            });
        }
        let lessons = module_class.lessons();
        let has_duplicate_lesson = lessons.iter().enumerate().any(|(position, lesson)| {
            lessons[position + 1..]
                .iter()
                .any(|other| lesson.is_same_lesson(other))
        });
        if has_duplicate_lesson {
            return Err(DataSetError::DuplicateLesson {
                class: module_class.name().to_string(),
            });
        }
        Ok(())
    }
}
