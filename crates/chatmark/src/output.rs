//! Output formatting for parsed documents
//!
//! Provides JSON (the renderer contract), an indented human-readable tree,
//! and plain text with all markup removed.

use chatmark_core::{BlockNode, Document, DocumentNode, InlineNode, OutputFormat, Result};

/// Formatter for converting documents to different formats
pub struct DocumentFormatter;

impl DocumentFormatter {
    /// Format a document according to the output format preference
    pub fn format(doc: &Document, format: OutputFormat, pretty_json: bool) -> Result<String> {
        match format {
            OutputFormat::Json => Self::format_json(doc, pretty_json),
            OutputFormat::Human => Ok(Self::format_human(doc)),
            OutputFormat::Text => Ok(Self::format_text(doc)),
        }
    }

    /// Format as JSON
    fn format_json(doc: &Document, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(doc)?
        } else {
            serde_json::to_string(doc)?
        };
        Ok(json)
    }

    /// Format as an indented tree, one node per line
    fn format_human(doc: &Document) -> String {
        let mut output = String::new();

        if doc.is_empty() {
            output.push_str("(empty document)\n");
            return output;
        }

        for node in &doc.nodes {
            match node {
                DocumentNode::Code(code) => {
                    let lines = code.body.lines().count();
                    output.push_str(&format!(
                        "code language={} ({} line{})\n",
                        code.language,
                        lines,
                        if lines == 1 { "" } else { "s" }
                    ));
                }
                DocumentNode::Prose { blocks } => {
                    output.push_str("prose\n");
                    for block in blocks {
                        Self::push_block(&mut output, block);
                    }
                }
            }
        }

        output
    }

    fn push_block(output: &mut String, block: &BlockNode) {
        match block {
            BlockNode::Heading { level, inline } => {
                output.push_str(&format!("  heading level={}\n", level));
                Self::push_inline_line(output, inline, 4);
            }
            BlockNode::Rule => output.push_str("  rule\n"),
            BlockNode::List { ordered, items } => {
                output.push_str(&format!("  list ordered={}\n", ordered));
                for (i, item) in items.iter().enumerate() {
                    output.push_str(&format!("    item {}\n", i + 1));
                    Self::push_inline_line(output, item, 6);
                }
            }
            BlockNode::Paragraph { lines } => {
                output.push_str("  paragraph\n");
                for (i, line) in lines.iter().enumerate() {
                    output.push_str(&format!("    line {}\n", i + 1));
                    Self::push_inline_line(output, line, 6);
                }
            }
        }
    }

    fn push_inline_line(output: &mut String, line: &[InlineNode], indent: usize) {
        let indent_str = " ".repeat(indent);
        for inline in line {
            let rendered = match inline {
                InlineNode::Text { value } => format!("text {:?}", value),
                InlineNode::BoldItalic { value } => format!("bold_italic {:?}", value),
                InlineNode::Bold { value } => format!("bold {:?}", value),
                InlineNode::Italic { value } => format!("italic {:?}", value),
                InlineNode::Link { text, url } => format!("link {:?} -> {}", text, url),
                InlineNode::Hashtag { value } => format!("hashtag {}", value),
            };
            output.push_str(&format!("{}{}\n", indent_str, rendered));
        }
    }

    /// Format as plain text
    fn format_text(doc: &Document) -> String {
        let mut output = doc.to_plain_text();
        if !output.is_empty() {
            output.push('\n');
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatmark_core::CodeBlock;

    fn sample() -> Document {
        Document::new(vec![
            DocumentNode::Prose {
                blocks: vec![
                    BlockNode::Heading {
                        level: 2,
                        inline: vec![InlineNode::Text {
                            value: "Plan".to_string(),
                        }],
                    },
                    BlockNode::List {
                        ordered: true,
                        items: vec![vec![InlineNode::Bold {
                            value: "first".to_string(),
                        }]],
                    },
                    BlockNode::Rule,
                ],
            },
            DocumentNode::Code(CodeBlock::new("sh", "echo hi")),
        ])
    }

    #[test]
    fn test_format_json_round_trips() {
        let doc = sample();
        let json = DocumentFormatter::format(&doc, OutputFormat::Json, false).unwrap();
        assert!(!json.contains('\n'));
        let back: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);

        let pretty = DocumentFormatter::format(&doc, OutputFormat::Json, true).unwrap();
        assert!(pretty.contains('\n'));
    }

    #[test]
    fn test_format_human() {
        let human = DocumentFormatter::format(&sample(), OutputFormat::Human, true).unwrap();
        assert_eq!(
            human,
            "prose\n  heading level=2\n    text \"Plan\"\n  list ordered=true\n    item 1\n      bold \"first\"\n  rule\ncode language=sh (1 line)\n"
        );
    }

    #[test]
    fn test_format_human_empty() {
        let human = DocumentFormatter::format(&Document::default(), OutputFormat::Human, true)
            .unwrap();
        assert_eq!(human, "(empty document)\n");
    }

    #[test]
    fn test_format_text() {
        let text = DocumentFormatter::format(&sample(), OutputFormat::Text, true).unwrap();
        assert_eq!(text, "Plan\n\nfirst\n\necho hi\n");

        let empty = DocumentFormatter::format(&Document::default(), OutputFormat::Text, true)
            .unwrap();
        assert_eq!(empty, "");
    }
}
