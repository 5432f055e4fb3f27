//! Configuration for the chatmark front end.
//!
//! The parser takes no options; these settings govern what happens around
//! it: how much input callers accept, how the document is emitted and how
//! verbose logging is.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Log levels accepted in configuration (case-insensitive)
const LOG_LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];

/// How a parsed document is written out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON document tree (default)
    #[default]
    Json,
    /// Indented tree for reading in a terminal
    Human,
    /// Visible text only, markup removed
    Text,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "human" => Ok(OutputFormat::Human),
            "text" => Ok(OutputFormat::Text),
            _ => Err(Error::config_error(format!(
                "Unknown output format '{}'. Valid options: json, human, text",
                s
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Text => write!(f, "text"),
        }
    }
}

/// Front-end configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Configuration profile name
    pub profile: String,
    /// Largest message accepted, in bytes
    pub max_input_bytes: usize,
    /// Output format
    pub output_format: OutputFormat,
    /// Pretty-print JSON output
    pub pretty_json: bool,
    /// Log level (off, error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            profile: "default".to_string(),
            max_input_bytes: 1024 * 1024, // 1MB
            output_format: OutputFormat::Json,
            pretty_json: true,
            log_level: "warn".to_string(),
        }
    }
}

impl ParserConfig {
    /// Create new configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.max_input_bytes == 0 {
            return Err(Error::config_error("max_input_bytes must be greater than 0"));
        }

        let level = self.log_level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(Error::config_error(format!(
                "Unknown log level '{}'. Valid options: {}",
                self.log_level,
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }

    /// Reject input larger than `max_input_bytes`.
    pub fn check_input_size(&self, size: usize) -> Result<()> {
        if size > self.max_input_bytes {
            return Err(Error::input_too_large(size, self.max_input_bytes));
        }
        Ok(())
    }

    /// Load configuration from a YAML file.
    ///
    /// A missing file yields the defaults; keys absent from the file keep
    /// their default values.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config_error(format!(
                "Failed to load config from {}: {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse and validate configuration from YAML text.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)
            .map_err(|e| Error::config_error(format!("Invalid configuration: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Apply the keys present in `overlay` on top of `self`.
    pub fn merge(mut self, overlay: ConfigOverlay) -> Self {
        if let Some(profile) = overlay.profile {
            self.profile = profile;
        }
        if let Some(max_input_bytes) = overlay.max_input_bytes {
            self.max_input_bytes = max_input_bytes;
        }
        if let Some(output_format) = overlay.output_format {
            self.output_format = output_format;
        }
        if let Some(pretty_json) = overlay.pretty_json {
            self.pretty_json = pretty_json;
        }
        if let Some(log_level) = overlay.log_level {
            self.log_level = log_level;
        }
        self
    }
}

/// Partial configuration read from a file and layered over a profile.
///
/// Only keys written in the file are set, so a value equal to the default
/// still overrides the profile it is merged into.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigOverlay {
    pub profile: Option<String>,
    pub max_input_bytes: Option<usize>,
    pub output_format: Option<OutputFormat>,
    pub pretty_json: Option<bool>,
    pub log_level: Option<String>,
}

impl ConfigOverlay {
    /// Load an overlay from a YAML file. A missing file sets nothing.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config file at {}, nothing to overlay", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config_error(format!(
                "Failed to load config from {}: {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse an overlay from YAML text. Validation happens after merging.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
            .map_err(|e| Error::config_error(format!("Invalid configuration: {}", e)))
    }
}
