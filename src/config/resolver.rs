//! Inheritance resolution over the template store

use crate::config::merge::merge;
use crate::config::types::ResolvedConfig;
use crate::error::{Error, Result};
use crate::store::TemplateStore;
use log::debug;

/// Resolves a template's full inheritance chain into one merged
/// configuration.
///
/// Parents are resolved depth-first in declared order and folded left to
/// right, so later parents override earlier ones. The template's own data is
/// merged last and takes precedence over every ancestor.
///
/// # Errors
/// * `TemplateNotFound` if `id` or any inherited id is absent from the store
/// * `CircularInheritance` if a template is reached twice on the same
///   resolution path; the error names the full cycle
pub fn resolve(id: &str, store: &TemplateStore) -> Result<ResolvedConfig> {
    let mut path = Vec::new();
    resolve_on_path(id, store, &mut path)
}

fn resolve_on_path(
    id: &str,
    store: &TemplateStore,
    path: &mut Vec<String>,
) -> Result<ResolvedConfig> {
    if path.iter().any(|seen| seen == id) {
        let mut cycle: Vec<&str> = path.iter().map(String::as_str).collect();
        cycle.push(id);
        return Err(Error::CircularInheritance { cycle: cycle.join(" -> ") });
    }

    let definition = store
        .get(id)
        .ok_or_else(|| Error::TemplateNotFound { id: id.to_string() })?;

    // Base case: no parents means the template is its own resolved
    // configuration, verbatim.
    if definition.inherits.is_empty() {
        return Ok(definition.own_config());
    }

    path.push(id.to_string());
    let mut ancestors = ResolvedConfig::default();
    for parent_id in &definition.inherits {
        let parent = resolve_on_path(parent_id, store, path)?;
        ancestors = merge(&ancestors, &parent);
    }
    path.pop();

    debug!("Resolved template '{}' with {} parent(s).", id, definition.inherits.len());

    Ok(merge(&ancestors, &definition.own_config()))
}
