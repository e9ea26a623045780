//! Subjects and courses catalogue.

use crate::config::resolver::resolve;
use crate::error::{Error, Result};
use crate::materialize::{materialize, QuestionType};
use crate::store::TemplateStore;
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;

/// A syllabus topic a question can be tagged with.
#[derive(Debug, Clone, PartialEq)]
pub struct Topic {
    pub code: String,
    pub name: String,
}

impl Topic {
    /// "<code>: <name>", the label shown in topic pickers.
    pub fn label(&self) -> String {
        format!("{}: {}", self.code, self.name)
    }
}

/// One course within a subject. `template` is the id of the template the
/// course draws its question types from; the store owns the definition.
#[derive(Debug, Clone)]
pub struct Course {
    pub name: String,
    pub template: String,
    pub topics: Vec<Topic>,
    pub question_types: Vec<QuestionType>,
}

impl Course {
    /// Resolves the course's template and attaches the materialized question
    /// types.
    pub fn apply_template(&mut self, store: &TemplateStore) -> Result<()> {
        let config = resolve(&self.template, store)?;
        self.question_types = materialize(&config);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct Subject {
    pub name: String,
    pub courses: Vec<Course>,
}

#[derive(Deserialize)]
struct SubjectsFile {
    subjects: IndexMap<String, RawSubject>,
}

#[derive(Deserialize)]
struct RawSubject {
    #[serde(default)]
    courses: IndexMap<String, RawCourse>,
}

#[derive(Deserialize)]
struct RawCourse {
    template: String,
    #[serde(default)]
    topics: IndexMap<String, RawTopic>,
}

#[derive(Deserialize)]
struct RawTopic {
    name: String,
}

/// Loads the subjects/courses definition file.
///
/// The file maps subject name to course name to `{template, topics}`;
/// subjects, courses and topics keep their file order.
pub fn load_subjects<P: AsRef<Path>>(path: P) -> Result<Vec<Subject>> {
    let file = path.as_ref().display().to_string();
    let content = std::fs::read_to_string(path.as_ref())?;
    let parsed: SubjectsFile = serde_yaml::from_str(&content)
        .map_err(|source| Error::SubjectsError { file, source })?;

    Ok(parsed
        .subjects
        .into_iter()
        .map(|(name, subject)| Subject {
            name,
            courses: subject
                .courses
                .into_iter()
                .map(|(course_name, course)| Course {
                    name: course_name,
                    template: course.template,
                    topics: course
                        .topics
                        .into_iter()
                        .map(|(code, topic)| Topic { code, name: topic.name })
                        .collect(),
                    question_types: Vec::new(),
                })
                .collect(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SUBJECTS_YAML: &str = r#"
subjects:
  Computer Science:
    courses:
      GCSE:
        template: cs-gcse
        topics:
          "1.1":
            name: Systems architecture
          "1.2":
            name: Memory and storage
      A level:
        template: cs-alevel
  Mathematics:
    courses:
      GCSE:
        template: maths-gcse
"#;

    fn write_subjects(content: &str) -> (TempDir, std::path::PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("subjects.yaml");
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn loads_subjects_preserving_order() {
        let (_dir, path) = write_subjects(SUBJECTS_YAML);
        let subjects = load_subjects(&path).unwrap();

        assert_eq!(subjects.len(), 2);
        assert_eq!(subjects[0].name, "Computer Science");
        assert_eq!(subjects[1].name, "Mathematics");

        let courses: Vec<&str> =
            subjects[0].courses.iter().map(|course| course.name.as_str()).collect();
        assert_eq!(courses, vec!["GCSE", "A level"]);

        let gcse = &subjects[0].courses[0];
        assert_eq!(gcse.template, "cs-gcse");
        assert_eq!(gcse.topics[0].label(), "1.1: Systems architecture");
        assert!(gcse.question_types.is_empty());
    }

    #[test]
    fn missing_template_field_is_an_error() {
        let (_dir, path) = write_subjects("subjects:\n  Maths:\n    courses:\n      GCSE: {}\n");
        let err = load_subjects(&path).unwrap_err();
        assert!(matches!(err, Error::SubjectsError { .. }));
    }
}
