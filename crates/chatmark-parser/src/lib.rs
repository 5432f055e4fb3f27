//! # Chatmark Parser
//!
//! Lightweight markup parser for chat messages. Turns one message into an
//! ordered tree of code blocks, prose blocks and inline spans without a
//! general markdown library.
//!
//! ## Architecture
//!
//! Three passes, each feeding the next:
//!
//! ### Pass 1: Code-fence split
//! - Finds ```` ```lang ```` ... ```` ``` ```` regions anchored at line starts
//! - Fence bodies are kept verbatim and never scanned for markup
//! - Unterminated fences stay prose
//!
//! ### Pass 2: Block assembly (per prose span)
//! - Classifies lines: heading, rule, ordered item, unordered item, blank, plain
//! - Accumulates paragraphs and lists with a single open-block slot
//!
//! ### Pass 3: Inline scan (per textual line)
//! - One combined regex: bold-italic, bold, italic, link, hashtag
//! - Flat spans, no nesting
//!
//! ## Guarantees
//!
//! - `parse` never fails and never panics; unmatched syntax degrades to text
//! - Pure and deterministic: no shared state, safe to call from many threads
//! - Regexes are compiled once via `std::sync::LazyLock`
//!
//! ## Quick Start
//!
//! ```
//! use chatmark_parser::parse;
//! use chatmark_core::{BlockNode, DocumentNode, InlineNode};
//!
//! let doc = parse("# Hello\n\nSome **bold** text #greeting\n\n```rust\nfn main() {}\n```");
//! assert_eq!(doc.nodes.len(), 2);
//! assert_eq!(doc.hashtags(), vec!["#greeting"]);
//! assert_eq!(doc.code_blocks()[0].language, "rust");
//!
//! if let DocumentNode::Prose { blocks } = &doc.nodes[0] {
//!     assert!(matches!(blocks[0], BlockNode::Heading { level: 1, .. }));
//! }
//! ```
//!
//! ### Individual Passes (Granular Control)
//!
//! ```
//! use chatmark_parser::{parse_blocks, parse_inline, split_fences};
//!
//! let segments = split_fences("text\n```\ncode\n```");
//! let blocks = parse_blocks("- one\n- two");
//! let inline = parse_inline("*quick* [link](https://example.com)");
//! assert_eq!(segments.len(), 2);
//! assert_eq!(blocks.len(), 1);
//! assert_eq!(inline.len(), 3);
//! ```
//!
//! ## Known Limitations
//!
//! - Emphasis does not nest: `**a *b* c**` is not bold-with-inner-italics
//! - Headings deeper than six `#` are plain paragraph text
//! - Not CommonMark: no tables, blockquotes, footnotes or raw HTML handling

mod blocks;
mod engine;
pub mod parsers;

pub use blocks::parse_blocks;
pub use parsers::fences::{Segment, split_fences};
pub use parsers::inline::parse_inline;

// Re-export core types for consumers (no need to depend on chatmark-core separately)
pub use chatmark_core::{BlockNode, CodeBlock, Document, DocumentNode, InlineNode};

/// Parse a raw chat message into a document tree.
///
/// The sole entry point for renderers. Same input, structurally equal output.
///
/// # Example
/// ```
/// use chatmark_parser::parse;
/// use chatmark_core::{BlockNode, DocumentNode, InlineNode};
///
/// let doc = parse("- a\n- b\n\nc");
/// let DocumentNode::Prose { blocks } = &doc.nodes[0] else {
///     panic!("expected prose");
/// };
/// assert!(matches!(&blocks[0], BlockNode::List { ordered: false, items } if items.len() == 2));
/// assert!(matches!(&blocks[1], BlockNode::Paragraph { .. }));
/// ```
pub fn parse(raw_text: &str) -> Document {
    engine::ParseEngine::new(raw_text).parse()
}

/// Convenient prelude for common imports.
pub mod prelude {
    pub use chatmark_core::{BlockNode, CodeBlock, Document, DocumentNode, InlineNode};

    pub use crate::{Segment, parse, parse_blocks, parse_inline, split_fences};
}
