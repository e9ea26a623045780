//! Loads template definition files into an in-memory store.

use crate::config::types::TemplateDefinition;
use crate::constants::TEMPLATE_EXTENSIONS;
use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::debug;
use std::path::Path;
use walkdir::WalkDir;

/// In-memory index of template definitions keyed by declared id.
///
/// Built once from a directory tree; read-only afterwards, so any number of
/// resolution calls may borrow it at the same time.
#[derive(Debug, Default)]
pub struct TemplateStore {
    pub(crate) templates: IndexMap<String, TemplateDefinition>,
}

impl TemplateStore {
    /// Loads every `.yaml`/`.yml` file found recursively under `root`.
    ///
    /// # Errors
    /// * `ParseError` if a file is not valid YAML
    /// * `MissingId` if a file lacks an `id` field
    /// * `MalformedTemplate` if a file's fields are not shaped as expected
    /// * `DuplicateTemplateId` if two files declare the same id
    pub fn load<P: AsRef<Path>>(root: P) -> Result<Self> {
        let mut templates: IndexMap<String, TemplateDefinition> = IndexMap::new();

        for entry in WalkDir::new(root.as_ref()) {
            let entry = entry.map_err(std::io::Error::from)?;
            if !is_template_file(entry.path()) || !entry.file_type().is_file() {
                continue;
            }

            let definition = load_template_file(entry.path())?;
            if templates.contains_key(&definition.id) {
                return Err(Error::DuplicateTemplateId {
                    id: definition.id,
                    file: entry.path().display().to_string(),
                });
            }

            debug!(
                "Loaded template '{}' from '{}'.",
                definition.id,
                entry.path().display()
            );
            templates.insert(definition.id.clone(), definition);
        }

        Ok(Self { templates })
    }

    /// Looks up a template definition by id.
    pub fn get(&self, id: &str) -> Option<&TemplateDefinition> {
        self.templates.get(id)
    }

    /// Ids of all loaded templates, in load order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

fn is_template_file(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| TEMPLATE_EXTENSIONS.contains(&extension))
}

/// Parses one template file, validating the shape at load time so later
/// stages never see untyped data.
fn load_template_file(path: &Path) -> Result<TemplateDefinition> {
    let file = path.display().to_string();
    let content = std::fs::read_to_string(path)?;

    let raw: serde_yaml::Value = serde_yaml::from_str(&content)
        .map_err(|source| Error::ParseError { file: file.clone(), source })?;

    if raw.get("id").is_none() {
        return Err(Error::MissingId { file });
    }

    serde_yaml::from_value(raw).map_err(|source| Error::MalformedTemplate { file, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_template(dir: &Path, name: &str, content: &str) {
        std::fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn loads_templates_from_nested_directories() {
        let dir = TempDir::new().unwrap();
        write_template(dir.path(), "base.yaml", "id: base\nstatements:\n  - S1\n");
        std::fs::create_dir(dir.path().join("gcse")).unwrap();
        write_template(
            &dir.path().join("gcse"),
            "higher.yml",
            "id: higher\ninherits: base\n",
        );
        write_template(dir.path(), "notes.txt", "not a template");

        let store = TemplateStore::load(dir.path()).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get("base").unwrap().statements, vec!["S1"]);
        assert_eq!(store.get("higher").unwrap().inherits, vec!["base"]);
    }

    #[test]
    fn rejects_file_without_id() {
        let dir = TempDir::new().unwrap();
        write_template(dir.path(), "anonymous.yaml", "statements:\n  - S1\n");

        let err = TemplateStore::load(dir.path()).unwrap_err();
        assert!(matches!(err, Error::MissingId { .. }));
    }

    #[test]
    fn rejects_malformed_yaml() {
        let dir = TempDir::new().unwrap();
        write_template(dir.path(), "broken.yaml", "id: [unclosed\n");

        let err = TemplateStore::load(dir.path()).unwrap_err();
        assert!(matches!(err, Error::ParseError { .. }));
    }

    #[test]
    fn rejects_wrongly_shaped_fields() {
        let dir = TempDir::new().unwrap();
        write_template(
            dir.path(),
            "odd.yaml",
            "id: odd\nquestion_types:\n  - Essay\n",
        );

        let err = TemplateStore::load(dir.path()).unwrap_err();
        assert!(matches!(err, Error::MalformedTemplate { .. }));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let dir = TempDir::new().unwrap();
        write_template(dir.path(), "a.yaml", "id: base\n");
        write_template(dir.path(), "b.yaml", "id: base\n");

        let err = TemplateStore::load(dir.path()).unwrap_err();
        assert!(matches!(err, Error::DuplicateTemplateId { .. }));
    }

    #[test]
    fn null_collections_load_as_empty() {
        let dir = TempDir::new().unwrap();
        write_template(
            dir.path(),
            "sparse.yaml",
            "id: sparse\ninherits:\nstatements:\nquestion_types:\n",
        );

        let store = TemplateStore::load(dir.path()).unwrap();
        let sparse = store.get("sparse").unwrap();
        assert!(sparse.inherits.is_empty());
        assert!(sparse.statements.is_empty());
        assert!(sparse.question_types.is_empty());
    }
}
