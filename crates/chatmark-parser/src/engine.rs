//! Document builder - single entry point tying the passes together.
//!
//! Pass order:
//! 1. Code-fence split over the whole message (fences are opaque afterwards)
//! 2. Block assembly per prose span
//! 3. Inline scan per textual line (driven by block assembly)
//!
//! The engine holds only a borrowed input; all accumulator state lives on
//! the stack of a single `parse` call.

use chatmark_core::{Document, DocumentNode};

use crate::blocks::parse_blocks;
use crate::parsers::fences::{Segment, split_fences};

/// Parse engine for one raw message.
pub(crate) struct ParseEngine<'a> {
    content: &'a str,
}

impl<'a> ParseEngine<'a> {
    pub(crate) fn new(content: &'a str) -> Self {
        Self { content }
    }

    /// Build the document: code blocks interleaved with prose sections in source order.
    ///
    /// Prose spans that produce no blocks (whitespace between fences) are omitted.
    pub(crate) fn parse(&self) -> Document {
        let segments = split_fences(self.content);
        let mut nodes = Vec::with_capacity(segments.len());
        let mut code_blocks = 0usize;
        let mut prose_blocks = 0usize;

        for segment in segments {
            match segment {
                Segment::Code(code) => {
                    code_blocks += 1;
                    nodes.push(DocumentNode::Code(code));
                }
                Segment::Prose(span) => {
                    let blocks = parse_blocks(span);
                    if !blocks.is_empty() {
                        prose_blocks += blocks.len();
                        nodes.push(DocumentNode::Prose { blocks });
                    }
                }
            }
        }

        log::debug!(
            "Parsed {} bytes into {} nodes ({} code blocks, {} prose blocks)",
            self.content.len(),
            nodes.len(),
            code_blocks,
            prose_blocks
        );

        Document::new(nodes)
    }
}
