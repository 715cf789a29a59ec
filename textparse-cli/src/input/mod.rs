//! Input handling module

pub mod glob_resolver;
pub mod prompt;

pub use glob_resolver::resolve_patterns;
pub use prompt::prompt_for_path;
