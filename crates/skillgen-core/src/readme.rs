//! README.md rendering for a new skill.

/// File name of the generated readme.
pub const README_FILE: &str = "README.md";

/// Agent Skills format documentation.
pub const DOCS_URL: &str = "https://agentskills.io/specification";

/// Render the README for a skill. The name is used verbatim in the title,
/// unlike the capitalized title in SKILL.md.
pub fn render_readme(name: &str) -> String {
    format!(
        r#"# {name} Skill

This directory contains the `{name}` Agent Skill.

## Structure

```text
{name}/
├── SKILL.md          # Manifest: frontmatter + instructions for the agent
├── README.md         # This file
├── scripts/          # Executable code the skill can run
├── references/       # Additional documentation loaded on demand
└── assets/           # Templates, data files and other resources
```

## Usage

1. Edit `SKILL.md`: refine the `description` so the agent knows when to use the skill.
2. Fill in the instruction sections below the frontmatter.
3. Add helper scripts to `scripts/`, docs to `references/` and files to `assets/`.

## Next steps

- Keep `SKILL.md` focused; move long material into `references/`.
- Test the skill by asking your agent for a task that matches its description.

## Documentation

See {docs} for the Agent Skills format.
"#,
        name = name,
        docs = DOCS_URL
    )
}
