use crate::error::{ReltagError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Represents the complete configuration for reltag.
///
/// Currently this is the conventional commit settings that drive the bump
/// classification rules.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub conventional_commits: ConventionalCommitsConfig,
}

/// Returns the default list of commit types that trigger a minor bump.
fn default_minor_types() -> Vec<String> {
    vec!["feat".to_string()]
}

/// Returns the default list of breaking change indicators.
fn default_breaking_indicators() -> Vec<String> {
    vec!["BREAKING CHANGE:".to_string()]
}

/// Configuration for conventional commit analysis.
///
/// `minor_types` lists the commit types that warrant a minor version bump;
/// `breaking_indicators` lists the markers that mark a commit as breaking
/// when they appear in its body or footer.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ConventionalCommitsConfig {
    #[serde(default = "default_minor_types")]
    pub minor_types: Vec<String>,

    #[serde(default = "default_breaking_indicators")]
    pub breaking_indicators: Vec<String>,
}

impl Default for ConventionalCommitsConfig {
    fn default() -> Self {
        ConventionalCommitsConfig {
            minor_types: default_minor_types(),
            breaking_indicators: default_breaking_indicators(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            conventional_commits: ConventionalCommitsConfig::default(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `reltag.toml` in current directory
/// 3. `.reltag.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path).map_err(|e| {
            ReltagError::config(format!("Cannot read config file '{}': {}", path, e))
        })?
    } else if Path::new("./reltag.toml").exists() {
        fs::read_to_string("./reltag.toml")
            .map_err(|e| ReltagError::config(format!("Cannot read './reltag.toml': {}", e)))?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".reltag.toml");
        if config_path.exists() {
            fs::read_to_string(&config_path).map_err(|e| {
                ReltagError::config(format!(
                    "Cannot read config file '{}': {}",
                    config_path.display(),
                    e
                ))
            })?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)
        .map_err(|e| ReltagError::config(format!("Invalid config file: {}", e)))?;
    Ok(config)
}
