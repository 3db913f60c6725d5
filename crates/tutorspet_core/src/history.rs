//! Undo/redo history over full data set snapshots.
//!
//! # Responsibility
//! - Own the live `TutorsPet` and every committed snapshot of it.
//! - Move a cursor across snapshots for undo and redo.
//!
//! # Invariants
//! - `snapshots` is never empty; index 0 is the state at load time.
//! - `cursor < snapshots.len()`.
//! - Between commands, `live == snapshots[cursor].state`.

use crate::model::tutors_pet::TutorsPet;
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

const INITIAL_SNAPSHOT_MESSAGE: &str = "initial state";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryError {
    NoUndoableState,
    NoRedoableState,
}

impl Display for HistoryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoUndoableState => write!(f, "No more commands to undo!"),
            Self::NoRedoableState => write!(f, "No more commands to redo!"),
        }
    }
}

impl Error for HistoryError {}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Snapshot {
    state: TutorsPet,
    message: String,
}

/// Linear history with a cursor; committing after an undo drops the redo
/// branch.
#[derive(Debug, Clone)]
pub struct History {
    live: TutorsPet,
    snapshots: Vec<Snapshot>,
    cursor: usize,
}

impl History {
    /// Starts a history whose only snapshot is `initial`.
    pub fn new(initial: TutorsPet) -> Self {
        Self {
            snapshots: vec![Snapshot {
                state: initial.clone(),
                message: INITIAL_SNAPSHOT_MESSAGE.to_string(),
            }],
            live: initial,
            cursor: 0,
        }
    }

    /// Current data set.
    pub fn live(&self) -> &TutorsPet {
        &self.live
    }

    /// Mutable access for the command currently executing.
    pub fn live_mut(&mut self) -> &mut TutorsPet {
        &mut self.live
    }

    /// Records the live state as a new snapshot.
    pub fn commit(&mut self, message: impl Into<String>) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(Snapshot {
            state: self.live.clone(),
            message: message.into(),
        });
        self.cursor += 1;
        debug!(
            "event=history_commit module=history status=ok cursor={} snapshots={}",
            self.cursor,
            self.snapshots.len()
        );
    }

    /// Returns whether an earlier snapshot exists.
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Returns whether an undone snapshot can be restored.
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// Restores the previous snapshot and returns the undone commit message.
    pub fn undo(&mut self) -> Result<String, HistoryError> {
        if !self.can_undo() {
            return Err(HistoryError::NoUndoableState);
        }
        let undone = self.snapshots[self.cursor].message.clone();
        self.cursor -= 1;
        self.live = self.snapshots[self.cursor].state.clone();
        debug!(
            "event=history_undo module=history status=ok cursor={}",
            self.cursor
        );
        Ok(undone)
    }

    /// Restores the next snapshot and returns the redone commit message.
    pub fn redo(&mut self) -> Result<String, HistoryError> {
        if !self.can_redo() {
            return Err(HistoryError::NoRedoableState);
        }
        self.cursor += 1;
        self.live = self.snapshots[self.cursor].state.clone();
        debug!(
            "event=history_redo module=history status=ok cursor={}",
            self.cursor
        );
        Ok(self.snapshots[self.cursor].message.clone())
    }

    /// Number of snapshots, including the initial one.
    pub fn snapshot_count(&self) -> usize {
        self.snapshots.len()
    }
}

#[cfg(test)]
mod tests {
    use super::{History, HistoryError};
    use crate::model::module_class::ModuleClass;
    use crate::model::name::Name;
    use crate::model::tutors_pet::TutorsPet;

    fn add_class(history: &mut History, name: &str) {
        history
            .live_mut()
            .add_module_class(ModuleClass::empty(Name::parse(name).unwrap()))
            .unwrap();
        history.commit(format!("added {name}"));
    }

    #[test]
    fn fresh_history_has_nothing_to_undo_or_redo() {
        let mut history = History::new(TutorsPet::new());
        assert_eq!(history.undo(), Err(HistoryError::NoUndoableState));
        assert_eq!(history.redo(), Err(HistoryError::NoRedoableState));
    }

    #[test]
    fn commit_after_undo_discards_redo_branch() {
        let mut history = History::new(TutorsPet::new());
        add_class(&mut history, "First");
        add_class(&mut history, "Second");
        assert_eq!(history.undo().unwrap(), "added Second");

        add_class(&mut history, "Third");
        assert!(!history.can_redo());
        assert_eq!(history.snapshot_count(), 3);
        let names: Vec<_> = history
            .live()
            .module_classes()
            .iter()
            .map(|class| class.name().to_string())
            .collect();
        assert_eq!(names, vec!["First", "Third"]);
    }
}
