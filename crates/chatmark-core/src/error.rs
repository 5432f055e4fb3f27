//! Error types for the chatmark tooling.
//!
//! Parsing itself never fails: every input produces a [`Document`](crate::Document).
//! These errors cover the surface around the parser: reading input,
//! loading configuration, enforcing the input size bound and serializing output.

use std::io;
use thiserror::Error as ThisError;

/// The core error type for everything around the parser.
#[derive(ThisError, Debug)]
pub enum Error {
    /// I/O error while reading input or configuration
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Input exceeds the configured size bound
    #[error("Input too large ({size} bytes, max {max} bytes)")]
    InputTooLarge { size: usize, max: usize },

    /// Invalid configuration
    #[error("Configuration error: {reason}")]
    ConfigError { reason: String },

    /// Output could not be serialized
    #[error("Serialization error: {reason}")]
    Serialization { reason: String },

    /// Generic unclassified error
    #[error("Error: {0}")]
    Other(String),
}

/// Convenient Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an input too large error
    pub fn input_too_large(size: usize, max: usize) -> Self {
        Error::InputTooLarge { size, max }
    }

    /// Create a configuration error
    pub fn config_error(reason: impl Into<String>) -> Self {
        Error::ConfigError {
            reason: reason.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(reason: impl Into<String>) -> Self {
        Error::Serialization {
            reason: reason.into(),
        }
    }

    /// Create a generic error
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::serialization(err.to_string())
    }
}
