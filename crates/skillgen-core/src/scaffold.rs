//! Skill directory scaffolding.
//!
//! The only place that touches the filesystem. All validation happens before
//! the first directory is created; once writing starts, a failure is reported
//! as-is and whatever was already written stays on disk.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{Result, ScaffoldError};
use crate::manifest::{render_manifest, SkillMetadata, MANIFEST_FILE};
use crate::name::check_name;
use crate::paths::is_available;
use crate::readme::{render_readme, README_FILE};

/// Resource directories created inside every skill.
pub const RESOURCE_DIRS: [&str; 3] = ["scripts", "references", "assets"];

/// Empty file that keeps otherwise-empty directories under version control.
pub const PLACEHOLDER_FILE: &str = ".gitkeep";

/// One scaffolding job: which skill to create, with what metadata, and where.
#[derive(Debug, Clone)]
pub struct ScaffoldRequest {
    pub name: Option<String>,
    pub metadata: SkillMetadata,
    /// Parent directory the skill directory is created in.
    pub target_dir: PathBuf,
}

impl ScaffoldRequest {
    /// Build a request whose name is taken from the metadata.
    pub fn new(metadata: SkillMetadata, target_dir: impl Into<PathBuf>) -> Self {
        Self {
            name: Some(metadata.name.clone()),
            metadata,
            target_dir: target_dir.into(),
        }
    }
}

/// Creates skill directories on disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct SkillScaffolder;

impl SkillScaffolder {
    pub fn new() -> Self {
        Self
    }

    /// Run a [`ScaffoldRequest`], consuming it.
    pub fn execute(&self, request: ScaffoldRequest) -> Result<PathBuf> {
        self.create(request.name.as_deref(), &request.metadata, &request.target_dir)
    }

    /// Create `<target_dir>/<name>/` with its manifest, readme and resource dirs.
    ///
    /// Returns the path of the new skill directory.
    pub fn create(
        &self,
        name: Option<&str>,
        metadata: &SkillMetadata,
        target_dir: &Path,
    ) -> Result<PathBuf> {
        let name = name.ok_or(ScaffoldError::MissingName)?;

        check_name(name).map_err(|rule| ScaffoldError::InvalidName {
            name: name.to_string(),
            rule,
        })?;

        let skill_dir = target_dir.join(name);
        if !is_available(&skill_dir) {
            return Err(ScaffoldError::PathExists { path: skill_dir });
        }

        debug!("Creating skill directory: {}", skill_dir.display());
        create_dir(&skill_dir)?;

        for dir in RESOURCE_DIRS {
            let path = skill_dir.join(dir);
            create_dir(&path)?;
            write_file(&path.join(PLACEHOLDER_FILE), "")?;
        }

        write_file(&skill_dir.join(MANIFEST_FILE), &render_manifest(metadata))?;
        write_file(&skill_dir.join(README_FILE), &render_readme(name))?;

        debug!("Skill '{}' scaffolded", name);
        Ok(skill_dir)
    }
}

fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|source| ScaffoldError::WriteFailure {
        path: path.to_path_buf(),
        source,
    })
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    debug!("Writing {}", path.display());
    fs::write(path, content).map_err(|source| ScaffoldError::WriteFailure {
        path: path.to_path_buf(),
        source,
    })
}
