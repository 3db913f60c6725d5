//! Display predicates for the filtered student and class lists.

use crate::model::module_class::ModuleClass;
use crate::model::student::{Student, StudentId};
use std::collections::BTreeSet;

/// Active predicate of the filtered student list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StudentFilter {
    #[default]
    All,
    /// Any name word equals any keyword, ignoring case.
    NameContainsKeywords(Vec<String>),
    /// Members of one class, captured when the filter was applied.
    MemberOf(BTreeSet<StudentId>),
}

impl StudentFilter {
    pub fn matches(&self, student: &Student) -> bool {
        match self {
            Self::All => true,
            Self::NameContainsKeywords(keywords) => {
                contains_any_word_ignore_case(student.name().as_str(), keywords)
            }
            Self::MemberOf(uuids) => uuids.contains(&student.uuid()),
        }
    }
}

/// Active predicate of the filtered module class list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModuleClassFilter {
    #[default]
    All,
    NameContainsKeywords(Vec<String>),
}

impl ModuleClassFilter {
    pub fn matches(&self, module_class: &ModuleClass) -> bool {
        match self {
            Self::All => true,
            Self::NameContainsKeywords(keywords) => {
                contains_any_word_ignore_case(module_class.name().as_str(), keywords)
            }
        }
    }
}

fn contains_any_word_ignore_case(sentence: &str, keywords: &[String]) -> bool {
    let words: Vec<String> = sentence.split_whitespace().map(str::to_lowercase).collect();
    keywords.iter().any(|keyword| {
        let keyword = keyword.trim().to_lowercase();
        words.iter().any(|word| *word == keyword)
    })
}
