//! Document tree produced by the chatmark parser.
//!
//! These types are designed to be:
//! - **Serializable**: All types derive Serialize/Deserialize with a `type` tag
//! - **Comparable**: Derive PartialEq/Eq so two parses can be compared structurally
//! - **Immutable**: The parser builds them once, renderers only read them
//!
//! Nesting mirrors the parse pipeline: a [`Document`] holds top-level
//! [`DocumentNode`]s (code fences and prose sections), prose sections hold
//! [`BlockNode`]s, and every textual line inside a block is a `Vec<InlineNode>`.

use serde::{Deserialize, Serialize};

/// A parsed chat message.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Document {
    /// Top-level nodes in source order
    pub nodes: Vec<DocumentNode>,
}

impl Document {
    /// Create a document from top-level nodes
    pub fn new(nodes: Vec<DocumentNode>) -> Self {
        Self { nodes }
    }

    /// True when the message produced no nodes at all (empty or blank input)
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All fenced code blocks, in source order.
    pub fn code_blocks(&self) -> Vec<&CodeBlock> {
        self.nodes
            .iter()
            .filter_map(|node| match node {
                DocumentNode::Code(code) => Some(code),
                DocumentNode::Prose { .. } => None,
            })
            .collect()
    }

    /// Iterate over every block of every prose section.
    pub fn blocks(&self) -> impl Iterator<Item = &BlockNode> {
        self.nodes.iter().flat_map(|node| match node {
            DocumentNode::Prose { blocks } => blocks.as_slice(),
            DocumentNode::Code(_) => [].as_slice(),
        })
    }

    /// Iterate over every inline node in the document, in source order.
    pub fn inlines(&self) -> impl Iterator<Item = &InlineNode> {
        self.blocks().flat_map(BlockNode::inline_lines).flatten()
    }

    /// Every hashtag token (including its leading `#` run), in source order.
    ///
    /// # Example
    /// ```
    /// use chatmark_core::{BlockNode, Document, DocumentNode, InlineNode};
    ///
    /// let doc = Document::new(vec![DocumentNode::Prose {
    ///     blocks: vec![BlockNode::Paragraph {
    ///         lines: vec![vec![
    ///             InlineNode::Text { value: "see ".to_string() },
    ///             InlineNode::Hashtag { value: "#rust".to_string() },
    ///         ]],
    ///     }],
    /// }]);
    /// assert_eq!(doc.hashtags(), vec!["#rust"]);
    /// ```
    pub fn hashtags(&self) -> Vec<&str> {
        self.inlines()
            .filter_map(|inline| match inline {
                InlineNode::Hashtag { value } => Some(value.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Every link as `(text, url)`, in source order.
    pub fn links(&self) -> Vec<(&str, &str)> {
        self.inlines()
            .filter_map(|inline| match inline {
                InlineNode::Link { text, url } => Some((text.as_str(), url.as_str())),
                _ => None,
            })
            .collect()
    }

    /// Every heading as `(level, plain text)`, in source order.
    pub fn headings(&self) -> Vec<(u8, String)> {
        self.blocks()
            .filter_map(|block| match block {
                BlockNode::Heading { level, inline } => Some((*level, plain_text_of(inline))),
                _ => None,
            })
            .collect()
    }

    /// Extract plain text from the whole document.
    ///
    /// Nodes are separated by a blank line; nodes without visible text
    /// (rules) are skipped.
    #[must_use]
    pub fn to_plain_text(&self) -> String {
        self.nodes
            .iter()
            .map(DocumentNode::to_plain_text)
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// A top-level node: either a fenced code region or a run of prose blocks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DocumentNode {
    /// A fenced code block, body kept verbatim
    Code(CodeBlock),
    /// Blocks assembled from the prose between (or around) code fences
    Prose { blocks: Vec<BlockNode> },
}

impl DocumentNode {
    /// Extract plain text from this node.
    #[must_use]
    pub fn to_plain_text(&self) -> String {
        match self {
            Self::Code(code) => code.body.clone(),
            Self::Prose { blocks } => blocks
                .iter()
                .map(BlockNode::to_plain_text)
                .filter(|text| !text.is_empty())
                .collect::<Vec<_>>()
                .join("\n\n"),
        }
    }
}

/// A fenced code block.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CodeBlock {
    /// Lower-cased language tag, [`CodeBlock::DEFAULT_LANGUAGE`] when the fence had none
    pub language: String,
    /// Text between the fence delimiters, unmodified
    pub body: String,
}

impl CodeBlock {
    /// Language used when the opening fence carries no tag.
    pub const DEFAULT_LANGUAGE: &'static str = "code";

    /// Create a code block from a raw fence tag and body.
    ///
    /// # Example
    /// ```
    /// use chatmark_core::CodeBlock;
    ///
    /// assert_eq!(CodeBlock::new("Rust", "fn main() {}").language, "rust");
    /// assert_eq!(CodeBlock::new("", "x").language, "code");
    /// ```
    pub fn new(tag: &str, body: impl Into<String>) -> Self {
        let tag = tag.trim();
        let language = if tag.is_empty() {
            Self::DEFAULT_LANGUAGE.to_string()
        } else {
            tag.to_lowercase()
        };

        Self {
            language,
            body: body.into(),
        }
    }
}

/// A structural unit of prose.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockNode {
    /// `# Title` through `###### Title`
    Heading { level: u8, inline: Vec<InlineNode> },
    /// Horizontal rule (`---`, `***`, `_ _ _`)
    Rule,
    /// A run of consecutive same-kind list items, one inline line per item
    List {
        ordered: bool,
        items: Vec<Vec<InlineNode>>,
    },
    /// Consecutive plain lines; each line renders separated by a line break
    Paragraph { lines: Vec<Vec<InlineNode>> },
}

impl BlockNode {
    /// The inline lines carried by this block (heading text, list items or paragraph lines).
    pub fn inline_lines(&self) -> &[Vec<InlineNode>] {
        match self {
            Self::Heading { inline, .. } => std::slice::from_ref(inline),
            Self::Rule => &[],
            Self::List { items, .. } => items,
            Self::Paragraph { lines } => lines,
        }
    }

    /// Anchor slug for headings (`"Hello World"` → `"hello-world"`); `None` for other blocks.
    pub fn heading_anchor(&self) -> Option<String> {
        match self {
            Self::Heading { inline, .. } => Some(slugify(&plain_text_of(inline))),
            _ => None,
        }
    }

    /// Extract plain text from this block.
    ///
    /// Paragraph lines and list items are joined with `\n`.
    #[must_use]
    pub fn to_plain_text(&self) -> String {
        self.inline_lines()
            .iter()
            .map(|line| plain_text_of(line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A structural unit within one line of prose.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InlineNode {
    /// Plain text
    Text { value: String },
    /// `***text***`
    BoldItalic { value: String },
    /// `**text**`
    Bold { value: String },
    /// `*text*`
    Italic { value: String },
    /// `[text](https://...)`
    Link { text: String, url: String },
    /// `#tag`, `##tag`; the value keeps the leading `#` run
    Hashtag { value: String },
}

impl InlineNode {
    /// Extract the visible text of this inline node.
    ///
    /// Markup delimiters are gone; links yield their text, not the URL.
    ///
    /// # Example
    /// ```
    /// use chatmark_core::InlineNode;
    ///
    /// let link = InlineNode::Link {
    ///     text: "docs".to_string(),
    ///     url: "https://example.com".to_string(),
    /// };
    /// assert_eq!(link.to_plain_text(), "docs");
    /// ```
    #[must_use]
    pub fn to_plain_text(&self) -> &str {
        match self {
            Self::Text { value }
            | Self::BoldItalic { value }
            | Self::Bold { value }
            | Self::Italic { value }
            | Self::Hashtag { value } => value,
            Self::Link { text, .. } => text,
        }
    }
}

/// Concatenate the visible text of one inline line.
pub fn plain_text_of(line: &[InlineNode]) -> String {
    line.iter().map(InlineNode::to_plain_text).collect()
}

/// Slugify heading text: lower-case, whitespace to `-`, keep alphanumerics and `-`.
pub fn slugify(text: &str) -> String {
    text.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .filter(|c| c.is_alphanumeric() || *c == '-')
        .collect()
}
