/// Handles argument parsing and the command entry point.
pub mod cli;

/// Merging and inheritance resolution of template configurations.
pub mod config;

/// Constants shared across the crate.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// Converts resolved configurations into concrete question types.
pub mod materialize;

/// In-progress assessment session state.
pub mod session;

/// Loads template definition files into an in-memory store.
pub mod store;

/// Subjects and courses catalogue.
pub mod subjects;
