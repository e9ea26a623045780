use crate::constants::exit_codes;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse template file '{file}': {source}")]
    ParseError { file: String, source: serde_yaml::Error },

    #[error("Template file '{file}' has no 'id' field.")]
    MissingId { file: String },

    #[error("Template file '{file}' is not shaped as expected: {source}")]
    MalformedTemplate { file: String, source: serde_yaml::Error },

    #[error("Duplicate template id '{id}' declared in '{file}'.")]
    DuplicateTemplateId { id: String, file: String },

    #[error("Template '{id}' not found in the template store.")]
    TemplateNotFound { id: String },

    #[error("Circular template inheritance: {cycle}.")]
    CircularInheritance { cycle: String },

    #[error("Failed to parse subjects file '{file}': {source}")]
    SubjectsError { file: String, source: serde_yaml::Error },

    #[error("Course '{name}' not found in the subjects file.")]
    CourseNotFound { name: String },

    #[error("Failed to serialize output: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Convenience type alias for Results with selfmark's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(exit_codes::FAILURE);
}
