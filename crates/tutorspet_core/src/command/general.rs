//! History and session commands.

use crate::command::{CommandOutput, CommandResult, ListView};
use crate::model::tutors_pet::TutorsPet;
use crate::store::ModelStore;

pub const UNDO_WORD: &str = "undo";
pub const REDO_WORD: &str = "redo";
pub const CLEAR_WORD: &str = "clear";
pub const HELP_WORD: &str = "help";
pub const EXIT_WORD: &str = "exit";

/// Every command word with its argument format, in help order.
pub const COMMAND_FORMATS: &[(&str, &str)] = &[
    ("add-student", "n/NAME t/TELEGRAM e/EMAIL [tag/TAG]..."),
    ("edit-student", "INDEX [n/NAME] [t/TELEGRAM] [e/EMAIL] [tag/TAG]..."),
    ("delete-student", "INDEX"),
    ("find-student", "KEYWORD [MORE_KEYWORDS]..."),
    ("list-student", "[c/CLASS_INDEX]"),
    ("add-class", "n/NAME"),
    ("edit-class", "INDEX n/NAME"),
    ("delete-class", "INDEX"),
    ("find-class", "KEYWORD [MORE_KEYWORDS]..."),
    ("list-class", ""),
    ("link", "c/CLASS_INDEX s/STUDENT_INDEX"),
    ("unlink", "c/CLASS_INDEX s/STUDENT_INDEX"),
    ("add-lesson", "c/CLASS_INDEX st/START_TIME et/END_TIME d/DAY o/NUMBER_OF_OCCURRENCES v/VENUE"),
    (
        "edit-lesson",
        "c/CLASS_INDEX l/LESSON_INDEX [st/START_TIME] [et/END_TIME] [d/DAY] [o/NUMBER_OF_OCCURRENCES] [v/VENUE]",
    ),
    ("delete-lesson", "c/CLASS_INDEX l/LESSON_INDEX"),
    ("add-attendance", "c/CLASS_INDEX l/LESSON_INDEX s/STUDENT_INDEX w/WEEK p/PARTICIPATION_SCORE"),
    (
        "edit-attendance",
        "c/CLASS_INDEX l/LESSON_INDEX s/STUDENT_INDEX w/WEEK p/PARTICIPATION_SCORE",
    ),
    ("delete-attendance", "c/CLASS_INDEX l/LESSON_INDEX s/STUDENT_INDEX w/WEEK"),
    ("find-attendance", "c/CLASS_INDEX l/LESSON_INDEX s/STUDENT_INDEX w/WEEK"),
    ("stats", "c/CLASS_INDEX s/STUDENT_INDEX"),
    ("undo", ""),
    ("redo", ""),
    ("clear", ""),
    ("help", ""),
    ("exit", ""),
];

const SHOWING_HELP_MESSAGE: &str = "Showing every command and its format.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UndoCommand;

impl UndoCommand {
    /// Restores the previous snapshot and shows both full lists.
    pub fn execute(&self, store: &mut ModelStore) -> CommandResult<CommandOutput> {
        let undone = store.undo()?;
        Ok(CommandOutput::with_view(
            format!("Undo success! Undone: {undone}"),
            ListView::Both,
        ))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RedoCommand;

impl RedoCommand {
    /// Restores the next snapshot and shows both full lists.
    pub fn execute(&self, store: &mut ModelStore) -> CommandResult<CommandOutput> {
        let redone = store.redo()?;
        Ok(CommandOutput::with_view(
            format!("Redo success! Redone: {redone}"),
            ListView::Both,
        ))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClearCommand;

impl ClearCommand {
    /// Replaces the data set with an empty one.
    pub fn execute(&self, store: &mut ModelStore) -> CommandResult<CommandOutput> {
        store.reset_data(TutorsPet::new());
        let message = "Tutor's Pet has been cleared!".to_string();
        store.commit(message.clone());
        Ok(CommandOutput::with_view(message, ListView::Both))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HelpCommand;

impl HelpCommand {
    /// Asks the front end to show every command format.
    pub fn execute(&self, _store: &mut ModelStore) -> CommandResult<CommandOutput> {
        Ok(CommandOutput {
            show_help: true,
            ..CommandOutput::message(SHOWING_HELP_MESSAGE)
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExitCommand;

impl ExitCommand {
    /// Asks the front end to stop.
    pub fn execute(&self, _store: &mut ModelStore) -> CommandResult<CommandOutput> {
        Ok(CommandOutput {
            exit: true,
            ..CommandOutput::message("Exiting Tutor's Pet as requested ...")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{ClearCommand, ExitCommand, HelpCommand, UndoCommand, COMMAND_FORMATS};
    use crate::command::CommandError;
    use crate::history::HistoryError;
    use crate::model::module_class::ModuleClass;
    use crate::model::name::Name;
    use crate::model::tutors_pet::TutorsPet;
    use crate::store::ModelStore;

    #[test]
    fn clear_is_undoable() {
        let data = TutorsPet::from_parts(
            Vec::new(),
            vec![ModuleClass::empty(Name::parse("CS2100 Lab").unwrap())],
        )
        .unwrap();
        let mut store = ModelStore::new(data.clone());

        ClearCommand.execute(&mut store).unwrap();
        assert!(store.tutors_pet().is_empty());

        UndoCommand.execute(&mut store).unwrap();
        assert_eq!(store.tutors_pet(), &data);
    }

    #[test]
    fn undo_on_fresh_store_fails() {
        let mut store = ModelStore::new(TutorsPet::new());
        assert_eq!(
            UndoCommand.execute(&mut store),
            Err(CommandError::History(HistoryError::NoUndoableState))
        );
    }

    #[test]
    fn help_sets_flag_and_lists_each_word_once() {
        let mut store = ModelStore::new(TutorsPet::new());
        assert!(HelpCommand.execute(&mut store).unwrap().show_help);

        let words: std::collections::BTreeSet<&str> =
            COMMAND_FORMATS.iter().map(|(word, _)| *word).collect();
        assert_eq!(words.len(), COMMAND_FORMATS.len());
        assert!(words.contains("add-attendance"));
        assert!(words.contains("stats"));
    }

    #[test]
    fn exit_sets_flag() {
        let mut store = ModelStore::new(TutorsPet::new());
        assert!(ExitCommand.execute(&mut store).unwrap().exit);
    }
}
