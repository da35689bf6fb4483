//! skillgen command-line front end.
//!
//! Parses arguments, loads configuration, resolves manifest fields (prompting
//! when a terminal is attached) and hands off to the scaffolder.

pub mod args;
pub mod logging;
pub mod output;
pub mod prompt;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, info};

use skillgen_config::Config;
use skillgen_core::{
    resolve_metadata, FieldInput, FieldSpec, PromptReply, Prompter, ScaffoldError,
    ScaffoldRequest, SkillScaffolder,
};

use crate::args::Cli;
use crate::logging::init_logging;
use crate::output::{next_steps, Output};
use crate::prompt::TerminalPrompter;

/// How a run ended, when it did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The skill was created at this path.
    Created(PathBuf),
    /// The user aborted a prompt; nothing was written.
    Cancelled,
}

/// Stand-in used when no terminal is attached. The resolver never prompts in
/// that mode, so reaching it is a bug.
struct Unattended;

impl Prompter for Unattended {
    fn ask(&mut self, field: &FieldSpec) -> Result<PromptReply, ScaffoldError> {
        Err(ScaffoldError::PromptFailure(format!(
            "cannot prompt for '{}' without a terminal",
            field.key
        )))
    }

    fn reject(&mut self, _field: &FieldSpec, _reason: &str) {}
}

/// Optional-field defaults from configuration.
fn config_defaults(config: &Config) -> FieldInput {
    FieldInput {
        name: None,
        description: None,
        author: config.defaults.author.clone(),
        version: config.defaults.version.clone(),
        tags: config.defaults.tags.clone(),
        license: config.defaults.license.clone(),
    }
}

/// Where the skill directory goes: `--dir`, then config, then `cwd`.
/// Relative paths are taken relative to `cwd`.
pub fn resolve_target_dir(cli: &Cli, config: &Config, cwd: &Path) -> Result<PathBuf> {
    let chosen = match &cli.dir {
        Some(dir) => Some(dir.clone()),
        None => config.output.target_dir()?,
    };
    Ok(match chosen {
        Some(dir) => cwd.join(dir),
        None => cwd.to_path_buf(),
    })
}

/// Resolve fields and scaffold the skill.
///
/// Process-wide state (terminal attachment, working directory) is passed in
/// so this can run under test with a scripted prompter.
pub fn execute<P: Prompter + ?Sized>(
    cli: &Cli,
    config: &Config,
    interactive: bool,
    cwd: &Path,
    prompter: &mut P,
) -> Result<Outcome> {
    let known = cli.field_input();
    let defaults = config_defaults(config);

    let metadata = match resolve_metadata(&known, &defaults, interactive, prompter) {
        Ok(metadata) => metadata,
        Err(e) if !e.is_failure() => return Ok(Outcome::Cancelled),
        Err(e) => return Err(e.into()),
    };

    let target_dir = resolve_target_dir(cli, config, cwd)?;
    info!(
        "Scaffolding skill '{}' in {}",
        metadata.name,
        target_dir.display()
    );

    let request = ScaffoldRequest::new(metadata, target_dir);
    let skill_dir = SkillScaffolder::new().execute(request)?;
    Ok(Outcome::Created(skill_dir))
}

/// One-line description of a failure. Scaffold errors already carry their cause.
fn describe(err: &anyhow::Error) -> String {
    match err.downcast_ref::<ScaffoldError>() {
        Some(scaffold) => scaffold.to_string(),
        None => format!("{:#}", err),
    }
}

fn run_with(cli: Cli, output: Output) -> Result<Outcome> {
    let config = Config::load(cli.config.as_deref())?;
    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    let interactive = !cli.no_input && std::io::stdin().is_terminal();
    debug!("Interactive mode: {}", interactive);

    if interactive {
        let mut prompter = TerminalPrompter::new(output)?;
        execute(&cli, &config, true, &cwd, &mut prompter)
    } else {
        execute(&cli, &config, false, &cwd, &mut Unattended)
    }
}

/// Entry point for the `skillgen` binary.
pub fn run() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    init_logging(cli.verbose);
    let output = Output::new(std::io::stdout().is_terminal() && std::io::stderr().is_terminal());

    match run_with(cli, output) {
        Ok(Outcome::Created(skill_dir)) => {
            output.success(&format!("Created skill at {}", skill_dir.display()));
            let name = skill_dir
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            for line in next_steps(&name) {
                output.print(&line);
            }
            ExitCode::SUCCESS
        }
        Ok(Outcome::Cancelled) => {
            output.warn("Operation cancelled");
            ExitCode::SUCCESS
        }
        Err(err) => {
            output.error(&describe(&err));
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillgen_config::{DefaultsConfig, OutputConfig};
    use skillgen_core::MANIFEST_FILE;
    use std::collections::VecDeque;
    use tempfile::TempDir;

    struct Scripted(VecDeque<PromptReply>);

    impl Scripted {
        fn new(replies: Vec<PromptReply>) -> Self {
            Self(replies.into())
        }
    }

    impl Prompter for Scripted {
        fn ask(&mut self, _field: &FieldSpec) -> Result<PromptReply, ScaffoldError> {
            Ok(self.0.pop_front().expect("unexpected prompt"))
        }

        fn reject(&mut self, _field: &FieldSpec, _reason: &str) {}
    }

    fn answer(s: &str) -> PromptReply {
        PromptReply::Answer(s.to_string())
    }

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("skillgen").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_execute_from_flags() {
        let temp = TempDir::new().unwrap();
        let cli = cli(&["my-skill", "-d", "A test", "--tags", "a,b"]);

        let outcome = execute(&cli, &Config::default(), false, temp.path(), &mut Unattended).unwrap();

        let skill_dir = temp.path().join("my-skill");
        assert_eq!(outcome, Outcome::Created(skill_dir.clone()));
        let manifest = std::fs::read_to_string(skill_dir.join(MANIFEST_FILE)).unwrap();
        assert!(manifest.contains("description: A test\n"));
        assert!(manifest.contains("tags:\n  - a\n  - b\n"));
    }

    #[test]
    fn test_execute_missing_name_non_interactive() {
        let temp = TempDir::new().unwrap();
        let err = execute(&cli(&[]), &Config::default(), false, temp.path(), &mut Unattended)
            .unwrap_err();
        assert!(describe(&err).contains("'name'"));
    }

    #[test]
    fn test_execute_invalid_name() {
        let temp = TempDir::new().unwrap();
        let err = execute(
            &cli(&["bad.name", "-d", "d"]),
            &Config::default(),
            false,
            temp.path(),
            &mut Unattended,
        )
        .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ScaffoldError>(),
            Some(ScaffoldError::InvalidName { .. })
        ));
        assert!(describe(&err).contains("invalid character '.'"));
        assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_execute_interactive() {
        let temp = TempDir::new().unwrap();
        let mut prompter = Scripted::new(vec![
            answer("asked-skill"),
            answer("Prompted description"),
            answer(""),
            answer("2.0"),
            answer(""),
            answer(""),
        ]);

        let outcome = execute(&cli(&[]), &Config::default(), true, temp.path(), &mut prompter).unwrap();

        let skill_dir = temp.path().join("asked-skill");
        assert_eq!(outcome, Outcome::Created(skill_dir.clone()));
        let manifest = std::fs::read_to_string(skill_dir.join(MANIFEST_FILE)).unwrap();
        assert!(manifest.contains("description: Prompted description\nversion: 2.0\n---"));
    }

    #[test]
    fn test_execute_cancelled_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let mut prompter = Scripted::new(vec![answer("x"), PromptReply::Cancelled]);

        let outcome = execute(&cli(&[]), &Config::default(), true, temp.path(), &mut prompter).unwrap();

        assert_eq!(outcome, Outcome::Cancelled);
        assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_execute_uses_config_defaults() {
        let temp = TempDir::new().unwrap();
        let config = Config {
            defaults: DefaultsConfig {
                author: Some("Config Author".to_string()),
                license: Some("MIT".to_string()),
                ..DefaultsConfig::default()
            },
            output: OutputConfig {
                target_dir: Some("skills".to_string()),
            },
        };

        let outcome = execute(
            &cli(&["cfg-skill", "-d", "d", "--license", "Apache-2.0"]),
            &config,
            false,
            temp.path(),
            &mut Unattended,
        )
        .unwrap();

        let skill_dir = temp.path().join("skills").join("cfg-skill");
        assert_eq!(outcome, Outcome::Created(skill_dir.clone()));
        let manifest = std::fs::read_to_string(skill_dir.join(MANIFEST_FILE)).unwrap();
        assert!(manifest.contains("author: Config Author\n"));
        assert!(manifest.contains("license: Apache-2.0\n"));
    }

    #[test]
    fn test_execute_rejects_flag_name_before_prompting() {
        let temp = TempDir::new().unwrap();
        let mut prompter = Scripted::new(vec![]);

        let err = execute(&cli(&["bad name"]), &Config::default(), true, temp.path(), &mut prompter)
            .unwrap_err();

        assert!(describe(&err).starts_with("Invalid skill name 'bad name'"));
        assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_execute_keeps_configured_tags_whole() {
        let temp = TempDir::new().unwrap();
        let config = Config {
            defaults: DefaultsConfig {
                tags: vec!["a,b".to_string(), "c".to_string()],
                ..DefaultsConfig::default()
            },
            ..Config::default()
        };

        execute(&cli(&["tagged", "-d", "d"]), &config, false, temp.path(), &mut Unattended).unwrap();

        let manifest =
            std::fs::read_to_string(temp.path().join("tagged").join(MANIFEST_FILE)).unwrap();
        assert!(manifest.contains("tags:\n  - a,b\n  - c\n"));
    }

    #[test]
    fn test_target_dir_precedence() {
        let cwd = Path::new("/work");
        let config = Config {
            output: OutputConfig {
                target_dir: Some("/configured".to_string()),
            },
            ..Config::default()
        };

        assert_eq!(
            resolve_target_dir(&cli(&[]), &Config::default(), cwd).unwrap(),
            PathBuf::from("/work")
        );
        assert_eq!(
            resolve_target_dir(&cli(&[]), &config, cwd).unwrap(),
            PathBuf::from("/configured")
        );
        assert_eq!(
            resolve_target_dir(&cli(&["--dir", "out"]), &config, cwd).unwrap(),
            PathBuf::from("/work/out")
        );
    }

    #[test]
    fn test_existing_skill_reports_path() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("taken")).unwrap();

        let err = execute(
            &cli(&["taken", "-d", "d"]),
            &Config::default(),
            false,
            temp.path(),
            &mut Unattended,
        )
        .unwrap_err();
        assert!(describe(&err).starts_with("Directory already exists"));
    }
}
