//! # Chatmark Core
//!
//! Document tree, error types and configuration shared by the chatmark crates.
//! This crate defines the canonical types the parser produces and renderers consume.
//!
//! ## Architecture Principles
//!
//! - **Minimal Dependencies**: serde for the wire shape, thiserror for errors, log for diagnostics
//! - **Type-Driven Design**: Closed enums for every node kind, matched exhaustively
//! - **Zero Panic in Libraries**: Fallible operations return `Result<T, Error>`
//! - **Immutable by Default**: Nodes are built once per parse and only read afterwards
//!
//! ## Core Modules
//!
//! - [`models`] - Document tree (Document, DocumentNode, BlockNode, InlineNode, CodeBlock)
//! - [`error`] - Error types and Result alias
//! - [`config`] - Front-end configuration and output formats
//! - [`profiles`] - Configuration presets
//!
//! ## Usage Examples
//!
//! ### Walking a Document
//!
//! ```
//! use chatmark_core::prelude::*;
//!
//! let doc = Document::new(vec![DocumentNode::Code(CodeBlock::new("", "ls -la"))]);
//! for node in &doc.nodes {
//!     match node {
//!         DocumentNode::Code(code) => assert_eq!(code.language, "code"),
//!         DocumentNode::Prose { blocks } => assert!(blocks.is_empty()),
//!     }
//! }
//! ```
//!
//! ### Configuration
//!
//! ```
//! use chatmark_core::prelude::*;
//!
//! let config = ConfigProfile::Production.create_config();
//! assert!(config.validate().is_ok());
//! assert!(config.check_input_size(1024).is_ok());
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod profiles;

pub use config::{ConfigOverlay, OutputFormat, ParserConfig};
pub use error::{Error, Result};
pub use models::*;
pub use profiles::ConfigProfile;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{ConfigOverlay, OutputFormat, ParserConfig};
    pub use crate::error::{Error, Result};
    pub use crate::models::{BlockNode, CodeBlock, Document, DocumentNode, InlineNode};
    pub use crate::profiles::ConfigProfile;
}
