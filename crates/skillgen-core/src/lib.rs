//! Agent Skill scaffolding core.
//!
//! Generates new skill packages following the Agent Skills specification
//! (https://agentskills.io).
//!
//! # Overview
//!
//! A skill is a directory containing a `SKILL.md` file with:
//! - YAML frontmatter (name, description, optional metadata)
//! - Markdown body with instructions for the agent
//!
//! # Generated Structure
//!
//! ```text
//! skill-name/
//! ├── SKILL.md          # Manifest: frontmatter + instructions
//! ├── README.md         # Human-facing overview
//! ├── scripts/          # Executable code
//! ├── references/       # Additional documentation
//! └── assets/           # Templates, data files
//! ```
//!
//! # Flow
//!
//! The CLI resolves field values with [`resolve_metadata`] (flags first, then
//! the user via a [`Prompter`]), and hands the result to [`SkillScaffolder`],
//! which validates the name, checks the target is free and writes the tree.

mod error;
mod manifest;
mod name;
mod paths;
mod readme;
mod resolver;
mod scaffold;

pub use error::{Result, ScaffoldError};
pub use manifest::{capitalize_first, render_manifest, SkillMetadata, MANIFEST_FILE};
pub use name::{check_name, is_valid_name, NameRule};
pub use paths::is_available;
pub use readme::{render_readme, DOCS_URL, README_FILE};
pub use resolver::{
    plan_field, resolve_field, resolve_metadata, split_tags, FieldInput, FieldPlan, FieldSpec,
    PromptReply, Prompter, Validator,
};
pub use scaffold::{ScaffoldRequest, SkillScaffolder, PLACEHOLDER_FILE, RESOURCE_DIRS};
