//! Converts resolved configurations into concrete question types.

use crate::config::merge::merge_statements;
use crate::config::types::ResolvedConfig;
use serde::Serialize;

/// A nested, question-type-specific sub-checklist.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionTypeOption {
    pub name: String,
    pub statements: Vec<String>,
}

/// A category of exam question, with the checklist statements and options a
/// student sees when reflecting on a question of this type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionType {
    pub name: String,
    pub statements: Vec<String>,
    pub options: Vec<QuestionTypeOption>,
}

/// Builds the concrete question types for a resolved configuration.
///
/// The configuration's global statements are merged into every question type
/// ahead of the type's own statements, deduplicated preserving first
/// occurrence. Question types and options come out in the order their names
/// were first introduced during merging. A configuration with no question
/// types yields an empty list.
pub fn materialize(config: &ResolvedConfig) -> Vec<QuestionType> {
    config
        .question_types
        .iter()
        .map(|(name, question_type)| {
            let statements =
                merge_statements(&config.statements, &question_type.statements);
            let options = question_type
                .options
                .iter()
                .map(|(option_name, option)| QuestionTypeOption {
                    name: option_name.clone(),
                    statements: merge_statements(&[], &option.statements),
                })
                .collect();

            QuestionType { name: name.clone(), statements, options }
        })
        .collect()
}
