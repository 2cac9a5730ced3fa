use crate::error::{Result, VerbumpError};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Represents the complete configuration for verbump.
///
/// Supplies the file names for the primary version record and the changelog,
/// both resolved against the working directory at process start.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_version_file")]
    pub version_file: String,

    #[serde(default = "default_changelog_file")]
    pub changelog_file: String,
}

fn default_version_file() -> String {
    "VERSION.md".to_string()
}

fn default_changelog_file() -> String {
    "CHANGELOG.md".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            version_file: default_version_file(),
            changelog_file: default_changelog_file(),
        }
    }
}

impl Config {
    /// Absolute path of the primary version record
    pub fn version_path(&self) -> Result<PathBuf> {
        Ok(env::current_dir()?.join(&self.version_file))
    }

    /// Absolute path of the changelog file
    pub fn changelog_path(&self) -> Result<PathBuf> {
        Ok(env::current_dir()?.join(&self.changelog_file))
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `verbump.toml` in current directory
/// 3. `.verbump.toml` in the user config directory
/// 4. Default configuration if no file found
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./verbump.toml").exists() {
        fs::read_to_string("./verbump.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".verbump.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config =
        toml::from_str(&config_str).map_err(|e| VerbumpError::config(e.to_string()))?;
    Ok(config)
}
