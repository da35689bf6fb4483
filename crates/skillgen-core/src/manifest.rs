//! SKILL.md rendering.
//!
//! Emits YAML frontmatter followed by a fixed markdown body. Optional fields
//! are only written when they carry a non-empty value, so a skill created with
//! just a name and description gets a two-field frontmatter.

use std::fmt::Write as _;

/// File name of the skill manifest.
pub const MANIFEST_FILE: &str = "SKILL.md";

/// Metadata that goes into a skill's frontmatter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillMetadata {
    /// Skill name; also the directory name.
    pub name: String,
    /// What the skill does and when to use it.
    pub description: Option<String>,
    pub author: Option<String>,
    pub version: Option<String>,
    /// Tags in the order they were given.
    pub tags: Vec<String>,
    pub license: Option<String>,
}

impl SkillMetadata {
    /// Metadata with only a name and a description.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: Some(description.into()),
            ..Self::default()
        }
    }

    /// The description that will be written, falling back to a generated one.
    pub fn effective_description(&self) -> String {
        non_empty(self.description.as_deref())
            .unwrap_or_else(|| format!("A skill for {} functionality.", self.name))
    }
}

/// Writes one optional frontmatter entry. Only called with at least one value.
type Formatter = fn(&mut String, &str, &[String]);

fn scalar_line(out: &mut String, key: &str, values: &[String]) {
    let _ = writeln!(out, "{}: {}", key, values[0]);
}

fn block_list(out: &mut String, key: &str, values: &[String]) {
    let _ = writeln!(out, "{}:", key);
    for value in values {
        let _ = writeln!(out, "  - {}", value);
    }
}

/// Fold line breaks into single spaces so a value stays on its own frontmatter line.
fn single_line(value: &str) -> String {
    value
        .split(['\r', '\n'])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.map(single_line).filter(|v| !v.is_empty())
}

fn scalar(value: Option<&String>) -> Vec<String> {
    non_empty(value.map(String::as_str)).into_iter().collect()
}

/// Optional frontmatter entries in emission order. Absent or blank values
/// yield an empty list and are skipped by the renderer.
fn optional_fields(meta: &SkillMetadata) -> [(&'static str, Vec<String>, Formatter); 4] {
    let tags: Vec<String> = meta
        .tags
        .iter()
        .filter_map(|t| non_empty(Some(t.as_str())))
        .collect();

    [
        ("author", scalar(meta.author.as_ref()), scalar_line as Formatter),
        ("version", scalar(meta.version.as_ref()), scalar_line),
        ("tags", tags, block_list),
        ("license", scalar(meta.license.as_ref()), scalar_line),
    ]
}

/// Upper-case the first character and leave the rest untouched.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Render the full SKILL.md for `meta`. Deterministic for identical input.
pub fn render_manifest(meta: &SkillMetadata) -> String {
    let mut out = String::new();

    out.push_str("---\n");
    let _ = writeln!(out, "name: {}", meta.name);
    let _ = writeln!(out, "description: {}", meta.effective_description());

    for (key, values, format) in optional_fields(meta) {
        if !values.is_empty() {
            format(&mut out, key, &values);
        }
    }
    out.push_str("---\n");

    let _ = write!(
        out,
        r#"
# {title} Skill

## When to use this skill
Describe the situations and requests where this skill should be used.

## How it works
Explain step by step how the skill accomplishes its task.

## Examples
Show example requests and the expected behavior or output.

## Notes
Add caveats, limitations, and pointers to files in scripts/, references/ or assets/.
"#,
        title = capitalize_first(&meta.name)
    );

    out
}
