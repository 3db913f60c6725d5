//! Domain model for students, module classes, lessons and attendance.
//!
//! # Responsibility
//! - Define validated, immutable value types for every entity.
//! - Aggregate entities into one `TutorsPet` data set snapshot.
//!
//! # Invariants
//! - Entities are never mutated in place; edits build replacement values.
//! - Every field newtype can only be built through its validating parser.

pub mod attendance;
pub mod error;
pub mod filter;
pub mod lesson;
pub mod module_class;
pub mod name;
pub mod student;
pub mod tutors_pet;
