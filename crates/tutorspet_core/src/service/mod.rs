//! Use-case boundary for front ends.
//!
//! # Responsibility
//! - Turn raw input lines into executed commands.
//! - Persist the data set after every change.
//!
//! # Invariants
//! - Front ends never touch `ModelStore` mutably or call storage directly.
//! - The service layer stays storage-agnostic through `TutorsPetStorage`.

mod logic_manager;

pub use logic_manager::{LogicError, LogicManager, LogicResult};
