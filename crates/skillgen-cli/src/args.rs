//! Command-line arguments.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

use skillgen_core::{split_tags, FieldInput};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "skillgen",
    version,
    about = "Scaffold a new Agent Skill (SKILL.md, README.md, scripts/, references/, assets/)",
    disable_version_flag = true
)]
pub struct Cli {
    /// Skill name: letters, digits, hyphens and underscores. Prompted for when omitted.
    pub name: Option<String>,

    /// What the skill does and when to use it
    #[arg(short = 'd', long)]
    pub description: Option<String>,

    /// Skill author
    #[arg(long)]
    pub author: Option<String>,

    /// Skill version written to the manifest
    #[arg(long = "version-flag", value_name = "VERSION")]
    pub skill_version: Option<String>,

    /// Comma-separated tags
    #[arg(long, value_name = "TAGS")]
    pub tags: Option<String>,

    /// License identifier, e.g. MIT
    #[arg(long)]
    pub license: Option<String>,

    /// Parent directory for the new skill (defaults to the current directory)
    #[arg(long, value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Never prompt, even when a terminal is attached
    #[arg(long)]
    pub no_input: bool,

    /// Enable debug logging
    #[arg(long)]
    pub verbose: bool,

    /// Print version
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    pub version: Option<bool>,
}

impl Cli {
    /// Field values supplied on the command line.
    pub fn field_input(&self) -> FieldInput {
        FieldInput {
            name: self.name.clone(),
            description: self.description.clone(),
            author: self.author.clone(),
            version: self.skill_version.clone(),
            tags: self.tags.as_deref().map(split_tags).unwrap_or_default(),
            license: self.license.clone(),
        }
    }
}
