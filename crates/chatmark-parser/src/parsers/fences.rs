//! Code-fence splitter: ```` ```lang ```` ... ```` ``` ````
//!
//! Separates fenced code regions from prose. Every byte of the input ends up
//! either in a prose span or inside a fence match; fence delimiters are
//! consumed and never appear in a code body.

use chatmark_core::CodeBlock;
use regex::Regex;
use std::sync::LazyLock;

/// Fenced code block anchored at line starts.
///
/// - Opening: three backticks at the start of a line, optional tag, rest of line ignored
/// - Body: anything, non-greedy, so the first closing fence wins
/// - Closing: three backticks at the start of a line
///
/// An opening fence without a closing one never matches and stays prose.
static FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^```[ \t]*(?P<lang>[^\s`]*)[^\n`]*\n(?P<body>(?s:.*?))\r?\n```").unwrap()
});

/// Fast pre-filter: skip regex if no fence delimiter exists.
#[inline]
fn has_fence(content: &str) -> bool {
    content.contains("```")
}

/// One piece of a split message, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text outside any fence, borrowed from the input
    Prose(&'a str),
    /// A complete fenced region
    Code(CodeBlock),
}

/// Split a raw message into prose spans and code blocks.
///
/// Prose spans are emitted even when empty-looking (whitespace only); the
/// caller decides whether they yield any blocks.
///
/// # Example
/// ```
/// use chatmark_parser::{Segment, split_fences};
///
/// let segments = split_fences("intro\n```py\nprint(1)\n```\noutro");
/// assert_eq!(segments.len(), 3);
/// assert_eq!(segments[0], Segment::Prose("intro\n"));
/// if let Segment::Code(code) = &segments[1] {
///     assert_eq!(code.language, "py");
///     assert_eq!(code.body, "print(1)");
/// }
/// assert_eq!(segments[2], Segment::Prose("\noutro"));
/// ```
pub fn split_fences(content: &str) -> Vec<Segment<'_>> {
    if !has_fence(content) {
        return vec![Segment::Prose(content)];
    }

    let mut segments = Vec::new();
    let mut last = 0;

    for caps in FENCE.captures_iter(content) {
        let Some(whole) = caps.get(0) else {
            continue;
        };

        if whole.start() > last {
            segments.push(Segment::Prose(&content[last..whole.start()]));
        }

        let lang = caps.name("lang").map(|m| m.as_str()).unwrap_or("");
        let body = caps.name("body").map(|m| m.as_str()).unwrap_or("");
        segments.push(Segment::Code(CodeBlock::new(lang, body)));

        last = whole.end();
    }

    if last < content.len() {
        segments.push(Segment::Prose(&content[last..]));
    }

    segments
}
