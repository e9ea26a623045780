//! Template configuration resolution
//!
//! This module contains the template engine components:
//! - `types`: raw template definitions and resolved configurations
//! - `merge`: order-preserving deep merge of two configurations
//! - `resolver`: inheritance resolution over the template store

pub mod merge;
pub mod resolver;
pub mod types;


// Re-export commonly used items for convenience
pub use merge::merge;
pub use resolver::resolve;
pub use types::{OptionConfig, QuestionTypeConfig, ResolvedConfig, TemplateDefinition};
