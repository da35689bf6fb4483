//! Error taxonomy for scaffolding.

use std::path::PathBuf;

use thiserror::Error;

use crate::name::NameRule;

/// Result type for scaffolding operations.
pub type Result<T> = std::result::Result<T, ScaffoldError>;

/// Everything that can stop a skill from being scaffolded.
///
/// Validation variants are always raised before the filesystem is touched.
/// Only [`ScaffoldError::WriteFailure`] can leave a partially written tree.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// No skill name was supplied at all.
    #[error("Skill name is required")]
    MissingName,

    /// The skill name broke one of the naming rules.
    #[error("Invalid skill name '{name}': {rule}")]
    InvalidName { name: String, rule: NameRule },

    /// Something already lives at the target path.
    #[error("Directory already exists: {}", path.display())]
    PathExists { path: PathBuf },

    /// A required field had no value and there was no terminal to ask on.
    #[error("Missing required field '{field}' (no interactive terminal to prompt on)")]
    MissingRequiredField { field: String },

    /// Directory creation or file write failed after validation passed.
    #[error("Failed to write {}: {source}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The user aborted a prompt. Not a failure: the run ends quietly.
    #[error("Operation cancelled")]
    PromptCancelled,

    /// The terminal itself failed while prompting.
    #[error("Prompt failed: {0}")]
    PromptFailure(String),
}

impl ScaffoldError {
    /// Whether this outcome should end the process with a failure status.
    pub fn is_failure(&self) -> bool {
        !matches!(self, ScaffoldError::PromptCancelled)
    }
}
