//! Terminal prompting backed by rustyline.

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::{debug, error};

use skillgen_core::{FieldSpec, PromptReply, Prompter, ScaffoldError};

use crate::output::Output;

/// Build the prompt string for a field, e.g. `"? Skill name: "`.
pub fn build_prompt(field: &FieldSpec) -> String {
    format!("? {}: ", field.label)
}

/// Prompts on the attached terminal. Ctrl-C and Ctrl-D cancel the whole flow.
pub struct TerminalPrompter {
    editor: DefaultEditor,
    output: Output,
}

impl TerminalPrompter {
    pub fn new(output: Output) -> Result<Self, ScaffoldError> {
        let editor = DefaultEditor::new().map_err(|e| ScaffoldError::PromptFailure(e.to_string()))?;
        Ok(Self { editor, output })
    }
}

impl Prompter for TerminalPrompter {
    fn ask(&mut self, field: &FieldSpec) -> Result<PromptReply, ScaffoldError> {
        let prompt = build_prompt(field);
        let initial = field.default.as_deref().unwrap_or("");

        match self.editor.readline_with_initial(&prompt, (initial, "")) {
            Ok(line) => Ok(PromptReply::Answer(line)),
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                debug!("Prompt aborted by user");
                Ok(PromptReply::Cancelled)
            }
            Err(err) => {
                error!("Readline error: {:?}", err);
                Err(ScaffoldError::PromptFailure(err.to_string()))
            }
        }
    }

    fn reject(&mut self, field: &FieldSpec, reason: &str) {
        self.output.warn(&format!("Invalid {}: {}", field.key, reason));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_prompt() {
        let field = FieldSpec::required("name", "Skill name");
        assert_eq!(build_prompt(&field), "? Skill name: ");

        let field = FieldSpec::optional("tags", "Tags, comma-separated (optional)");
        assert_eq!(build_prompt(&field), "? Tags, comma-separated (optional): ");
    }
}
