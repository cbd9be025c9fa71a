//! Configuration module for the tslex CLI.
//!
//! Settings come from an optional `tslex.toml`; command-line flags
//! override whatever the file says.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use dirs::{config_dir, home_dir};
use serde::{Deserialize, Serialize};

use crate::error::{CliError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "tslex.toml";

/// How the `tokens` command prints tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `KIND lexeme` line per token
    #[default]
    Text,
    /// A JSON array of tokens
    Json,
}

/// Application configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Token output settings.
    #[serde(default)]
    pub output: OutputConfig,

    /// Diagnostic reporting settings.
    #[serde(default)]
    pub report: ReportConfig,
}

/// Token output settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Output format for the `tokens` command.
    #[serde(default)]
    pub format: OutputFormat,

    /// Whether diagnostics are colored.
    #[serde(default = "default_true")]
    pub color: bool,

    /// Whether comment tokens are printed.
    #[serde(default = "default_true")]
    pub include_comments: bool,
}

/// Diagnostic reporting settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ReportConfig {
    /// Suppress per-error diagnostics; only the exit code reports failure.
    #[serde(default)]
    pub quiet: bool,
}

fn default_true() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
            include_comments: true,
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. User's home directory (`~/.config/tslex/`)
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CliError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::parse(&content)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| CliError::Config(format!("Failed to parse configuration: {}", e)))
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in home directory.
    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("tslex").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Check for config in system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("tslex").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
