//! Error types with fix suggestions.

use thiserror::Error;

/// Trait for errors that provide fix suggestions
pub trait FixSuggestion {
    fn fix_suggestion(&self) -> Option<&str>;
}

/// Dispatcher errors. A child process that merely exits non-zero is not an
/// error here; its code is propagated as a value by the executor.
#[derive(Error, Debug)]
pub enum TaskError {
    #[error("unknown task '{name}' (expected one of: test, build, install, uninstall)")]
    UnknownTask { name: String },

    #[error("failed to spawn '{program}': {source}")]
    Spawn {
        program: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FixSuggestion for TaskError {
    fn fix_suggestion(&self) -> Option<&str> {
        match self {
            TaskError::UnknownTask { .. } => Some("Run 'futask --help' to list the tasks"),
            TaskError::Spawn { .. } => {
                Some("Check the toolchain (pytest, flit, pip) is installed and on PATH")
            }
            TaskError::Io(_) => Some("Check the working directory exists and is accessible"),
        }
    }
}
