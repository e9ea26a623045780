//! Order-preserving deep merge of resolved configurations

use crate::config::types::{OptionConfig, QuestionTypeConfig, ResolvedConfig};
use indexmap::map::Entry;
use indexmap::{IndexMap, IndexSet};

/// Merges two resolved configurations into a new one.
///
/// Statement lists concatenate base-first with first-occurrence
/// deduplication, so a statement repeated in the overlay keeps its base
/// position. Question types present in both sides merge statements and
/// options by name; question types only in the overlay are appended
/// verbatim. Neither input is mutated and the result shares no nested
/// collections with either.
pub fn merge(base: &ResolvedConfig, overlay: &ResolvedConfig) -> ResolvedConfig {
    let statements = merge_statements(&base.statements, &overlay.statements);

    let mut question_types: IndexMap<String, QuestionTypeConfig> =
        base.question_types.clone();
    for (name, incoming) in &overlay.question_types {
        match question_types.entry(name.clone()) {
            Entry::Occupied(mut entry) => {
                let merged = merge_question_type(entry.get(), incoming);
                entry.insert(merged);
            }
            Entry::Vacant(entry) => {
                entry.insert(incoming.clone());
            }
        }
    }

    ResolvedConfig { statements, question_types }
}

fn merge_question_type(
    base: &QuestionTypeConfig,
    incoming: &QuestionTypeConfig,
) -> QuestionTypeConfig {
    let statements = merge_statements(&base.statements, &incoming.statements);

    let mut options: IndexMap<String, OptionConfig> = base.options.clone();
    for (name, option) in &incoming.options {
        match options.entry(name.clone()) {
            Entry::Occupied(mut entry) => {
                let merged =
                    merge_statements(&entry.get().statements, &option.statements);
                entry.get_mut().statements = merged;
            }
            Entry::Vacant(entry) => {
                entry.insert(option.clone());
            }
        }
    }

    QuestionTypeConfig { statements, options }
}

/// Concatenates `base` then `extra`, keeping only the first occurrence of
/// each statement.
pub(crate) fn merge_statements(base: &[String], extra: &[String]) -> Vec<String> {
    base.iter()
        .chain(extra)
        .cloned()
        .collect::<IndexSet<String>>()
        .into_iter()
        .collect()
}
