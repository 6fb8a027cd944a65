//! Configuration handling for the showcase builder
//!
//! Configuration is read from `showcase.toml` in the current directory, or
//! from the path given with `--config`. Every key is optional; relative
//! paths are resolved against the directory holding the config file.
//!
//! ```toml
//! [build]
//! input = "data/issues.json"
//! output = "public/projects.json"
//! label = "project"
//! parallel = true
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Config file looked up in the current directory
pub const CONFIG_FILE: &str = "showcase.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Settings for the batch build
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Issue dump to read
    pub input: PathBuf,

    /// Catalog file to write
    pub output: PathBuf,

    /// Only issues carrying this label are parsed
    pub label: Option<String>,

    /// Parse issues on a thread pool
    pub parallel: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("issues.json"),
            output: PathBuf::from("public").join("projects.json"),
            label: None,
            parallel: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub build: BuildConfig,
}

impl Config {
    /// Loads configuration from an explicit path, or `showcase.toml` if present
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound(path.to_path_buf()).into());
                }
                Self::from_file(path)
            }
            None => {
                let default_path = Path::new(CONFIG_FILE);
                if default_path.exists() {
                    Self::from_file(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Reads a config file and resolves its relative paths
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        let mut config: Config = toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;

        if let Some(base) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            config.build.input = base.join(&config.build.input);
            config.build.output = base.join(&config.build.output);
        }

        Ok(config)
    }
}
