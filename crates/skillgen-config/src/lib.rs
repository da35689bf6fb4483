//! Configuration for skillgen.
//!
//! Values come from, lowest to highest priority:
//! 1. Built-in defaults (everything empty)
//! 2. `<config_dir>/skillgen/config.toml`, or the file passed with `--config`
//! 3. `SKILLGEN__*` environment variables (e.g. `SKILLGEN__DEFAULTS__AUTHOR`)
//!
//! ```toml
//! [defaults]
//! author = "Jane Doe"
//! license = "MIT"
//! version = "0.1.0"
//! tags = ["internal"]
//!
//! [output]
//! target_dir = "~/skills"
//! ```

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable prefix; nested keys are separated by `__`.
const ENV_PREFIX: &str = "SKILLGEN";

const CONFIG_DIR_NAME: &str = "skillgen";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Default values for optional manifest fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DefaultsConfig {
    pub author: Option<String>,
    pub version: Option<String>,
    pub license: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    /// Parent directory for new skills. `~` and `$VARS` are expanded.
    pub target_dir: Option<String>,
}

impl OutputConfig {
    /// The configured target directory with `~` and environment variables expanded.
    pub fn target_dir(&self) -> Result<Option<PathBuf>> {
        let Some(raw) = self.target_dir.as_deref().filter(|d| !d.trim().is_empty()) else {
            return Ok(None);
        };
        let expanded = shellexpand::full(raw)
            .map_err(|e| anyhow!("Failed to expand output.target_dir '{}': {}", raw, e))?;
        Ok(Some(PathBuf::from(expanded.as_ref())))
    }
}

impl Config {
    /// Default config file location, if the platform has a config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load configuration.
    ///
    /// An explicit `path` must exist; the default location is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();

        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(anyhow!("Config file not found: {}", path.display()));
                }
                debug!("Loading config from {}", path.display());
                builder = builder.add_source(config::File::from(path).required(true));
            }
            None => {
                if let Some(default) = Self::default_path() {
                    debug!("Looking for config at {}", default.display());
                    builder = builder.add_source(config::File::from(default).required(false));
                }
            }
        }

        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("defaults.tags")
                .try_parsing(true),
        );

        let settings = builder.build().context("Failed to build configuration")?;
        settings
            .try_deserialize()
            .context("Failed to parse configuration")
    }
}
