//! Raw template definitions and resolved configurations

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

/// A template definition as declared in a single YAML file.
///
/// Immutable after load; resolution reads it through the store and never
/// writes back.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TemplateDefinition {
    /// Unique key the template is stored and referenced under
    pub id: String,
    /// Parent template ids, in override order (later wins over earlier)
    #[serde(default, deserialize_with = "one_or_many")]
    pub inherits: Vec<String>,
    /// Checklist statements shared by every question type of the template
    #[serde(default, deserialize_with = "empty_on_null")]
    pub statements: Vec<String>,
    /// Question types keyed by name, in declaration order
    #[serde(default, deserialize_with = "empty_on_null")]
    pub question_types: IndexMap<String, QuestionTypeConfig>,
}

/// The nested `{statements, options}` shape of one question type.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct QuestionTypeConfig {
    #[serde(default, deserialize_with = "empty_on_null")]
    pub statements: Vec<String>,
    #[serde(default, deserialize_with = "empty_on_null")]
    pub options: IndexMap<String, OptionConfig>,
}

/// A question-type-specific sub-checklist.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OptionConfig {
    #[serde(default, deserialize_with = "empty_on_null")]
    pub statements: Vec<String>,
}

/// A fully merged configuration: the output of inheritance resolution.
///
/// Same shape as [`TemplateDefinition`] minus `id` and `inherits`. Owned by
/// the caller; shares no collections with the store or with merge inputs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedConfig {
    pub statements: Vec<String>,
    pub question_types: IndexMap<String, QuestionTypeConfig>,
}

impl TemplateDefinition {
    /// The template's own data viewed as a resolved configuration.
    pub fn own_config(&self) -> ResolvedConfig {
        ResolvedConfig {
            statements: self.statements.clone(),
            question_types: self.question_types.clone(),
        }
    }
}

/// Accepts either a single parent id or a list of ids for `inherits`.
/// An explicit null is treated as no parents.
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        Some(OneOrMany::One(id)) => vec![id],
        Some(OneOrMany::Many(ids)) => ids,
        None => Vec::new(),
    })
}

/// Treats an explicitly null collection as empty, matching the behaviour for
/// an absent key. `statements:` with no value is common in hand-written
/// template files.
fn empty_on_null<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
