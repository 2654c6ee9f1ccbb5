use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{RelnotesError, Result};

/// Represents the complete configuration for git-relnotes.
///
/// Controls where the rendered document is written and how commit authors
/// are credited.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub attribution: AttributionConfig,
}

fn default_notes_dir() -> String {
    ".github/release-notes".to_string()
}

/// Configuration for the output artifact.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct OutputConfig {
    /// Directory the release-notes file is written into, relative to the
    /// project directory. Created on demand.
    #[serde(default = "default_notes_dir")]
    pub notes_dir: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            notes_dir: default_notes_dir(),
        }
    }
}

/// Returns the default list of automation-bot identities.
fn default_bot_authors() -> Vec<String> {
    vec![
        "github-actions[bot]".to_string(),
        "dependabot[bot]".to_string(),
    ]
}

/// Returns the default credit name used when no human author qualifies.
fn default_fallback_author() -> String {
    "The Maintainers".to_string()
}

/// Configuration for author attribution.
///
/// The bot list is applied both to per-commit attribution suffixes and to
/// the closing credit line.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AttributionConfig {
    #[serde(default = "default_bot_authors")]
    pub bot_authors: Vec<String>,

    #[serde(default = "default_fallback_author")]
    pub fallback_author: String,
}

impl AttributionConfig {
    /// Whether an author name is a configured automation-bot identity.
    pub fn is_bot(&self, author: &str) -> bool {
        self.bot_authors.iter().any(|bot| bot == author)
    }
}

impl Default for AttributionConfig {
    fn default() -> Self {
        AttributionConfig {
            bot_authors: default_bot_authors(),
            fallback_author: default_fallback_author(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            output: OutputConfig::default(),
            attribution: AttributionConfig::default(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `relnotes.toml` in current directory
/// 3. `.relnotes.toml` in user config directory
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
        fs::read_to_string(path)?
    } else if Path::new("./relnotes.toml").exists() {
        fs::read_to_string("./relnotes.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".relnotes.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config =
        toml::from_str(&config_str).map_err(|e| RelnotesError::config(e.to_string()))?;
    Ok(config)
}
