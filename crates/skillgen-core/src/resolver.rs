//! Field resolution: turn flag values, configured defaults and user answers
//! into final [`SkillMetadata`].
//!
//! Each field moves through a small state machine:
//! unset -> (prompt | fail) -> resolved | absent.
//! [`plan_field`] decides the transition without doing any I/O; terminal
//! interaction lives behind the [`Prompter`] trait so tests can script it.

use tracing::debug;

use crate::error::{Result, ScaffoldError};
use crate::manifest::SkillMetadata;
use crate::name::check_name;

/// Rejects an answer with a human-readable reason.
pub type Validator = fn(&str) -> std::result::Result<(), String>;

/// Describes one field to resolve.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    /// Field key, as used in the frontmatter and in error messages.
    pub key: &'static str,
    /// Prompt text shown to the user.
    pub label: &'static str,
    pub required: bool,
    /// Whether an empty answer is accepted as "no value".
    pub skippable: bool,
    pub validate: Option<Validator>,
    /// Configured default: used unattended, pre-filled when prompting.
    pub default: Option<String>,
}

impl FieldSpec {
    /// A field that must end up with a value.
    pub fn required(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            required: true,
            skippable: false,
            validate: None,
            default: None,
        }
    }

    /// A field the user may leave empty.
    pub fn optional(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            required: false,
            skippable: true,
            validate: None,
            default: None,
        }
    }

    pub fn with_validator(mut self, validate: Validator) -> Self {
        self.validate = Some(validate);
        self
    }

    pub fn with_default(mut self, default: Option<String>) -> Self {
        self.default = default.filter(|d| !d.trim().is_empty());
        self
    }
}

/// What to do for a field, decided before any prompting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldPlan {
    /// Value is settled.
    Use(String),
    /// Ask the user.
    Prompt,
    /// Leave the field out.
    Absent,
    /// Required, but nobody can be asked.
    MissingRequired,
}

/// Decide how to resolve a field from what is already known.
///
/// A non-empty known value always wins and is never prompted for.
pub fn plan_field(known: Option<&str>, interactive: bool, spec: &FieldSpec) -> FieldPlan {
    if let Some(value) = known.filter(|v| !v.trim().is_empty()) {
        return FieldPlan::Use(value.to_string());
    }

    if interactive {
        return FieldPlan::Prompt;
    }

    match &spec.default {
        Some(default) => FieldPlan::Use(default.clone()),
        None if spec.required => FieldPlan::MissingRequired,
        None => FieldPlan::Absent,
    }
}

/// A user's reaction to a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptReply {
    Answer(String),
    /// The user aborted (Ctrl-C / Ctrl-D).
    Cancelled,
}

/// Asks the user for field values.
pub trait Prompter {
    /// Ask for `field`, pre-filling `field.default` where the terminal supports it.
    fn ask(&mut self, field: &FieldSpec) -> Result<PromptReply>;

    /// Tell the user an answer was rejected; the field is asked again.
    fn reject(&mut self, field: &FieldSpec, reason: &str);
}

/// Resolve a single field. `Ok(None)` means the field stays absent.
pub fn resolve_field<P: Prompter + ?Sized>(
    spec: &FieldSpec,
    known: Option<&str>,
    interactive: bool,
    prompter: &mut P,
) -> Result<Option<String>> {
    match plan_field(known, interactive, spec) {
        FieldPlan::Use(value) => Ok(Some(value)),
        FieldPlan::Absent => Ok(None),
        FieldPlan::MissingRequired => Err(ScaffoldError::MissingRequiredField {
            field: spec.key.to_string(),
        }),
        FieldPlan::Prompt => prompt_until_valid(spec, prompter),
    }
}

fn prompt_until_valid<P: Prompter + ?Sized>(
    spec: &FieldSpec,
    prompter: &mut P,
) -> Result<Option<String>> {
    loop {
        let answer = match prompter.ask(spec)? {
            PromptReply::Answer(answer) => answer.trim().to_string(),
            PromptReply::Cancelled => {
                debug!("Prompt for '{}' cancelled", spec.key);
                return Err(ScaffoldError::PromptCancelled);
            }
        };

        if answer.is_empty() {
            if spec.skippable {
                return Ok(None);
            }
            prompter.reject(spec, "a value is required");
            continue;
        }

        if let Some(validate) = spec.validate {
            if let Err(reason) = validate(&answer) {
                prompter.reject(spec, &reason);
                continue;
            }
        }

        return Ok(Some(answer));
    }
}

/// Values known up front, from flags or from configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub author: Option<String>,
    pub version: Option<String>,
    pub tags: Vec<String>,
    pub license: Option<String>,
}

/// Split comma-separated tag text, dropping blanks and keeping order.
pub fn split_tags(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Trim each tag and drop blanks. Commas inside a tag are kept.
fn clean_tags(tags: &[String]) -> Vec<String> {
    tags.iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Prompt pre-fill for a tag list.
fn join_tags(tags: &[String]) -> Option<String> {
    let joined = clean_tags(tags).join(", ");
    (!joined.is_empty()).then_some(joined)
}

fn validate_name(name: &str) -> std::result::Result<(), String> {
    check_name(name).map_err(|rule| rule.to_string())
}

/// Resolve every field in order: name, description, author, version, tags, license.
///
/// `known` holds flag values and never triggers a prompt; `defaults` holds
/// configured values for the optional fields.
pub fn resolve_metadata<P: Prompter + ?Sized>(
    known: &FieldInput,
    defaults: &FieldInput,
    interactive: bool,
    prompter: &mut P,
) -> Result<SkillMetadata> {
    if let Some(name) = known.name.as_deref().filter(|n| !n.trim().is_empty()) {
        check_name(name).map_err(|rule| ScaffoldError::InvalidName {
            name: name.to_string(),
            rule,
        })?;
    }

    let name_spec = FieldSpec::required("name", "Skill name").with_validator(validate_name);
    let name = resolve_field(&name_spec, known.name.as_deref(), interactive, prompter)?
        .ok_or(ScaffoldError::MissingName)?;

    let description = resolve_field(
        &FieldSpec::required("description", "Description"),
        known.description.as_deref(),
        interactive,
        prompter,
    )?;

    let mut optional = |key, label, value: Option<&str>, default: Option<&String>| {
        let spec = FieldSpec::optional(key, label).with_default(default.cloned());
        resolve_field(&spec, value, interactive, &mut *prompter)
    };

    let author = optional(
        "author",
        "Author (optional)",
        known.author.as_deref(),
        defaults.author.as_ref(),
    )?;
    let version = optional(
        "version",
        "Version (optional)",
        known.version.as_deref(),
        defaults.version.as_ref(),
    )?;
    // Only typed answers are comma-split; flag and config lists keep their entries.
    let known_tags = clean_tags(&known.tags);
    let tags = if !known_tags.is_empty() {
        known_tags
    } else if interactive {
        let prefill = join_tags(&defaults.tags);
        optional("tags", "Tags, comma-separated (optional)", None, prefill.as_ref())?
            .as_deref()
            .map(split_tags)
            .unwrap_or_default()
    } else {
        clean_tags(&defaults.tags)
    };
    let license = optional(
        "license",
        "License (optional)",
        known.license.as_deref(),
        defaults.license.as_ref(),
    )?;

    debug!("Resolved metadata for skill '{}'", name);
    Ok(SkillMetadata {
        name,
        description,
        author,
        version,
        tags,
        license,
    })
}
