use crate::domain::is_valid_pre_release;
use crate::error::{GitSemverError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Represents the complete configuration for git-semver.
///
/// Controls tag naming, derived-version composition, and validation behavior.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub tags: TagsConfig,

    #[serde(default)]
    pub compose: ComposeConfig,

    #[serde(default)]
    pub validate: ValidateConfig,
}

/// Returns the default tag prefix stripped before version parsing.
fn default_tag_prefix() -> String {
    "v".to_string()
}

/// Returns the default pre-release label marking commit distance.
fn default_distance_label() -> String {
    "dev".to_string()
}

/// Returns the default recency depth of the validation reference tag.
fn default_reference_depth() -> usize {
    1
}

/// Configuration for tag naming.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TagsConfig {
    #[serde(default = "default_tag_prefix")]
    pub prefix: String,
}

impl Default for TagsConfig {
    fn default() -> Self {
        TagsConfig {
            prefix: default_tag_prefix(),
        }
    }
}

/// Configuration for derived-version composition.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ComposeConfig {
    #[serde(default = "default_distance_label")]
    pub distance_label: String,
}

impl Default for ComposeConfig {
    fn default() -> Self {
        ComposeConfig {
            distance_label: default_distance_label(),
        }
    }
}

/// Configuration for candidate validation.
///
/// `reference_depth` selects the tag the candidate is compared against:
/// 0 is the most recent tag, 1 the one before it.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ValidateConfig {
    #[serde(default = "default_reference_depth")]
    pub reference_depth: usize,
}

impl Default for ValidateConfig {
    fn default() -> Self {
        ValidateConfig {
            reference_depth: default_reference_depth(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            tags: TagsConfig::default(),
            compose: ComposeConfig::default(),
            validate: ValidateConfig::default(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `gitsemver.toml` in current directory
/// 3. `~/.config/.gitsemver.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed, or holds
///   invalid values
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./gitsemver.toml").exists() {
        fs::read_to_string("./gitsemver.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".gitsemver.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)
        .map_err(|e| GitSemverError::config(format!("Invalid configuration: {}", e)))?;
    validate_config(&config)?;
    Ok(config)
}

/// Check values that flow into composed version strings.
///
/// The distance label is spliced into the pre-release section of derived
/// versions, so it must itself satisfy the pre-release grammar.
pub fn validate_config(config: &Config) -> Result<()> {
    if !is_valid_pre_release(&config.compose.distance_label) {
        return Err(GitSemverError::config(format!(
            "Invalid configuration: distance label '{}' fails the pre-release grammar",
            config.compose.distance_label
        )));
    }

    Ok(())
}
