//! Configuration system for nestkit.
//!
//! This module provides the configuration structure for the `nestkit` command
//! with sensible defaults and support for serialization/deserialization via
//! serde. Configuration is loaded from a TOML file and overridden by
//! command-line arguments.
//!
//! # Example
//!
//! ```
//! use nestkit::config::Config;
//! use nestkit::file::Format;
//!
//! // Use default configuration
//! let config = Config::default();
//! assert_eq!(config.output_format, Format::Yaml);
//! assert_eq!(config.indent_size, 2);
//!
//! // Create custom configuration
//! let custom = Config {
//!     output_format: Format::Json,
//!     indent_size: 4,
//!     ..Config::default()
//! };
//! ```

use crate::file::Format;
use serde::{Deserialize, Serialize};

/// Configuration for the nestkit command.
///
/// All fields have sensible defaults via `Config::default()`, and any field
/// missing from the config file falls back to its default.
///
/// # Fields
///
/// * `output_format` - Format used when printing results (default: yaml)
/// * `indent_size` - Number of spaces per indentation level in JSON output (default: 2)
/// * `create_backup` - Create .bak files before overwriting a document (default: false)
/// * `log_level` - Default tracing filter when no environment filter is set (default: "warn")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Format used when printing results
    #[serde(default)]
    pub output_format: Format,

    /// Number of spaces per indentation level
    #[serde(default = "default_indent_size")]
    pub indent_size: usize,

    /// Create .bak files before saving
    #[serde(default)]
    pub create_backup: bool,

    /// Default log filter
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Returns the default indentation size.
fn default_indent_size() -> usize {
    2
}

/// Returns the default log filter.
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: Format::default(),
            indent_size: default_indent_size(),
            create_backup: false,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/nestkit/config.toml` on all platforms.
    pub fn config_path() -> Option<std::path::PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("nestkit");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't be read.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Loads configuration from `path`, falling back to the defaults.
    pub fn load_from(path: &std::path::Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|err| {
                tracing::warn!("Ignoring invalid config {}: {}", path.display(), err);
                Self::default()
            }),
            Err(err) => {
                tracing::warn!("Could not read config {}: {}", path.display(), err);
                Self::default()
            }
        }
    }

    /// Saves configuration to the default config file.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        self.save_to(&config_path)
    }

    /// Saves configuration to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &std::path::Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        Ok(())
    }
}
