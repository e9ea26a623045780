//! In-progress assessment session state.
//!
//! The session is an explicit value owned by the caller, never ambient
//! state: one [`AssessmentReflection`] holds the ordered list of
//! per-question [`Reflection`] records the student has filled in so far.

use crate::subjects::Topic;
use indexmap::IndexMap;

/// A student's self-assessment for a single exam question.
#[derive(Debug, Clone, Default)]
pub struct Reflection {
    pub question_number: String,
    pub available_marks: u32,
    pub achieved_marks: u32,
    /// Name of the question type the student picked for this question
    pub question_type: String,
    pub topics: Vec<Topic>,
    pub selected_statements: Vec<String>,
    /// Selected statements per option name, in selection order
    pub selected_options: IndexMap<String, Vec<String>>,
    pub written_reflection: String,
}

impl Reflection {
    /// Marks achieved as an integer percentage, 0 when no marks are
    /// available.
    pub fn marks_percentage(&self) -> u32 {
        if self.available_marks > 0 {
            self.achieved_marks * 100 / self.available_marks
        } else {
            0
        }
    }
}

/// One student's whole assessment reflection.
#[derive(Debug, Clone, Default)]
pub struct AssessmentReflection {
    pub student_name: String,
    pub assessment_name: String,
    pub subject: String,
    pub course: String,
    pub reflections: Vec<Reflection>,
}

impl AssessmentReflection {
    pub fn add(&mut self, reflection: Reflection) {
        self.reflections.push(reflection);
    }

    /// File name for the exported summary, e.g.
    /// "Ada - Mock Paper 2 reflection summary.pdf". Degrades to whichever
    /// name is present when the other is empty.
    pub fn summary_file_name(&self, extension: &str) -> String {
        let mut file_name = String::new();
        if !self.student_name.is_empty() {
            file_name.push_str(&self.student_name);
            if !self.assessment_name.is_empty() {
                file_name.push_str(" - ");
                file_name.push_str(&self.assessment_name);
            }
        } else if !self.assessment_name.is_empty() {
            file_name.push_str(&self.assessment_name);
        }

        format!("{} reflection summary.{}", file_name, extension).trim().to_string()
    }
}
