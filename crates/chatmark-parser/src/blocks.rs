//! Block-level assembly for prose spans.
//!
//! A prose span (text between code fences) is split into lines and walked
//! once, left to right. At most one block is open at a time: either a
//! paragraph accumulating plain lines or a list accumulating same-kind items.
//! Headings, rules, blank lines and kind changes flush the open block.
//!
//! Each textual line is handed to the inline scanner; blocks never merge
//! lines into one inline run.

use chatmark_core::{BlockNode, InlineNode};

use crate::parsers::inline::parse_inline;
use crate::parsers::lines::{LineKind, classify};

// ============================================================================
// Parser state machine
// ============================================================================

/// The block currently being accumulated.
enum OpenBlock {
    Paragraph(Vec<Vec<InlineNode>>),
    List {
        ordered: bool,
        items: Vec<Vec<InlineNode>>,
    },
}

impl OpenBlock {
    fn into_block(self) -> BlockNode {
        match self {
            Self::Paragraph(lines) => BlockNode::Paragraph { lines },
            Self::List { ordered, items } => BlockNode::List { ordered, items },
        }
    }
}

struct BlockAssembler {
    blocks: Vec<BlockNode>,
    open: Option<OpenBlock>,
}

impl BlockAssembler {
    fn new() -> Self {
        Self {
            blocks: Vec::new(),
            open: None,
        }
    }

    /// Close the open paragraph or list, if any.
    fn flush(&mut self) {
        if let Some(open) = self.open.take() {
            self.blocks.push(open.into_block());
        }
    }

    /// Emit a standalone block (heading, rule) after closing the open one.
    fn emit(&mut self, block: BlockNode) {
        self.flush();
        self.blocks.push(block);
    }

    /// Append a list item, reopening the list when its kind changes.
    fn push_item(&mut self, ordered: bool, item: Vec<InlineNode>) {
        if let Some(OpenBlock::List {
            ordered: open_ordered,
            items,
        }) = &mut self.open
            && *open_ordered == ordered
        {
            items.push(item);
            return;
        }

        self.flush();
        self.open = Some(OpenBlock::List {
            ordered,
            items: vec![item],
        });
    }

    /// Append a plain line to the open paragraph, closing any open list first.
    fn push_line(&mut self, line: Vec<InlineNode>) {
        if let Some(OpenBlock::Paragraph(lines)) = &mut self.open {
            lines.push(line);
            return;
        }

        self.flush();
        self.open = Some(OpenBlock::Paragraph(vec![line]));
    }

    fn process_line(&mut self, line: &str) {
        let kind = classify(line);
        log::trace!("line {:?} -> {:?}", line, kind);

        match kind {
            LineKind::Heading { level, text } => self.emit(BlockNode::Heading {
                level,
                inline: parse_inline(text),
            }),
            LineKind::Rule => self.emit(BlockNode::Rule),
            LineKind::OrderedItem(text) => self.push_item(true, parse_inline(text)),
            LineKind::UnorderedItem(text) => self.push_item(false, parse_inline(text)),
            LineKind::Blank => self.flush(),
            LineKind::Plain(text) => self.push_line(parse_inline(text)),
        }
    }

    fn finish(mut self) -> Vec<BlockNode> {
        self.flush();
        self.blocks
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Parse one prose span into block nodes.
///
/// Blank or empty spans yield no blocks. A trailing `\r` is dropped from
/// each line so CRLF input classifies the same as LF input.
///
/// # Example
/// ```
/// use chatmark_parser::parse_blocks;
/// use chatmark_core::BlockNode;
///
/// let blocks = parse_blocks("# Title\n\n- a\n- b\n\ntext");
/// assert_eq!(blocks.len(), 3);
/// assert!(matches!(blocks[0], BlockNode::Heading { level: 1, .. }));
/// assert!(matches!(blocks[1], BlockNode::List { ordered: false, .. }));
/// assert!(matches!(blocks[2], BlockNode::Paragraph { .. }));
/// ```
pub fn parse_blocks(span: &str) -> Vec<BlockNode> {
    let mut assembler = BlockAssembler::new();

    for line in span.split('\n') {
        assembler.process_line(line.strip_suffix('\r').unwrap_or(line));
    }

    let blocks = assembler.finish();

    // Never drop non-blank input silently. Every non-blank line classifies
    // into a block, so this branch does not fire under the current line rules.
    if blocks.is_empty() && !span.trim().is_empty() {
        return vec![BlockNode::Paragraph {
            lines: vec![parse_inline(span)],
        }];
    }

    blocks
}
