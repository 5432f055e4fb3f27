//! Pre-configured profiles for common ways of running the parser front end
//!
//! - Development: Verbose logging, generous input bound, pretty JSON
//! - Production: Quiet logging, chat-sized input bound, compact JSON
//! - Minimal: Errors only, plain text output

use crate::config::{OutputFormat, ParserConfig};
use crate::error::{Error, Result};
use std::str::FromStr;

/// Profile selector for pre-configured deployments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfigProfile {
    /// Development: Verbose logging, large inputs allowed
    #[default]
    Development,
    /// Production: Bounded input, compact output
    Production,
    /// Minimal: Bare essentials only
    Minimal,
}

impl ConfigProfile {
    /// Create a ParserConfig from this profile
    pub fn create_config(self) -> ParserConfig {
        let mut config = ParserConfig::new();
        config.profile = self.name().to_string();

        match self {
            Self::Development => {
                config.log_level = "debug".to_string();
                config.max_input_bytes = 16 * 1024 * 1024; // 16MB
                config.pretty_json = true;
            }

            Self::Production => {
                config.log_level = "info".to_string();
                config.max_input_bytes = 64 * 1024; // 64KB, a long chat message
                config.pretty_json = false;
            }

            Self::Minimal => {
                config.log_level = "error".to_string();
                config.max_input_bytes = 64 * 1024;
                config.output_format = OutputFormat::Text;
            }
        }

        config
    }

    /// Get profile name
    pub fn name(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Minimal => "minimal",
        }
    }

    /// Get profile description
    pub fn description(self) -> &'static str {
        match self {
            Self::Development => "Verbose logging, large inputs, pretty JSON",
            Self::Production => "Chat-sized input bound, compact JSON",
            Self::Minimal => "Errors only, plain text output",
        }
    }
}

impl FromStr for ConfigProfile {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            "minimal" => Ok(Self::Minimal),
            _ => Err(Error::config_error(format!(
                "Unknown profile '{}'. Valid options: development, production, minimal",
                s
            ))),
        }
    }
}

impl std::fmt::Display for ConfigProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
