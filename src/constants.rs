//! Constants used throughout the selfmark application

/// File extensions recognised as template definition files
pub const TEMPLATE_EXTENSIONS: &[&str] = &["yaml", "yml"];

/// Default directory holding template definition files
pub const DEFAULT_TEMPLATES_DIR: &str = "data/templates";

/// Default subjects/courses definition file
pub const DEFAULT_SUBJECTS_FILE: &str = "data/subjects.yaml";

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}
