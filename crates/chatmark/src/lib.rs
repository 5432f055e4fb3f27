//! # Chatmark
//!
//! Command-line front end for the chatmark parser: reads a message, enforces
//! the configured input bound, parses it and formats the document.

pub mod output;

use std::io::Read;
use std::path::Path;

pub use chatmark_core::prelude::*;
pub use chatmark_parser::parse;
pub use output::DocumentFormatter;

/// Read a message from `path`, or from `reader` when the path is absent or `-`.
///
/// The size bound is checked before the message is returned.
pub fn read_message(
    path: Option<&Path>,
    reader: impl Read,
    config: &ParserConfig,
) -> Result<String> {
    let message = match path {
        Some(path) if path != Path::new("-") => {
            log::debug!("Reading message from {}", path.display());
            std::fs::read_to_string(path)?
        }
        _ => {
            log::debug!("Reading message from stdin");
            std::io::read_to_string(reader)?
        }
    };

    config.check_input_size(message.len())?;
    Ok(message)
}

/// Parse a message and format the resulting document.
pub fn render(message: &str, config: &ParserConfig) -> Result<String> {
    config.check_input_size(message.len())?;

    let doc = parse(message);
    log::info!(
        "Parsed message: {} top-level nodes, {} code blocks, {} hashtags",
        doc.nodes.len(),
        doc.code_blocks().len(),
        doc.hashtags().len()
    );

    DocumentFormatter::format(&doc, config.output_format, config.pretty_json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    #[test]
    fn test_read_message_from_reader() {
        let config = ParserConfig::default();
        let message = read_message(None, Cursor::new("# hi"), &config).unwrap();
        assert_eq!(message, "# hi");

        let message =
            read_message(Some(Path::new("-")), Cursor::new("dash"), &config).unwrap();
        assert_eq!(message, "dash");
    }

    #[test]
    fn test_read_message_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("message.md");
        std::fs::write(&path, "- a\n- b").unwrap();

        let message =
            read_message(Some(&path), Cursor::new("ignored"), &ParserConfig::default()).unwrap();
        assert_eq!(message, "- a\n- b");
    }

    #[test]
    fn test_read_message_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = read_message(
            Some(&temp.path().join("absent.md")),
            Cursor::new(""),
            &ParserConfig::default(),
        );
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_read_message_enforces_bound() {
        let config = ParserConfig {
            max_input_bytes: 4,
            ..Default::default()
        };
        let result = read_message(None, Cursor::new("too long"), &config);
        assert!(matches!(
            result,
            Err(Error::InputTooLarge { size: 8, max: 4 })
        ));
    }

    #[test]
    fn test_render_text() {
        let config = ParserConfig {
            output_format: OutputFormat::Text,
            ..Default::default()
        };
        let output = render("**Hello** [there](https://x.io)", &config).unwrap();
        assert_eq!(output, "Hello there\n");
    }
}
