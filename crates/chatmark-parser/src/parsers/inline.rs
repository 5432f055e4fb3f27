//! Inline scanner: `***bold italic***`, `**bold**`, `*italic*`, `[text](url)`, `#hashtag`
//!
//! One left-to-right pass over a single line with one combined pattern.
//! Alternatives are ordered so the longest emphasis delimiter is tried first
//! at any position; `***x***` is one bold-italic span, never `**` + `*x*` + `*`.
//!
//! Emphasis is flat: the content of a matched span is taken literally and
//! never scanned again, so `**a *b* c**` does not produce nested italics
//! (the bold alternative cannot even match it, since its content contains `*`).

use chatmark_core::InlineNode;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Combined inline pattern, alternatives in precedence order.
static INLINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"\*\*\*(?P<bold_italic>[^*]+)\*\*\*",
        r"|\*\*(?P<bold>[^*]+)\*\*",
        r"|\*(?P<italic>[^*]+)\*",
        r"|\[(?P<link_text>[^\]]+)\]\((?P<url>https?://[^\s)]+)\)",
        r"|(?P<hashtag>#+\w{2,})",
    ))
    .unwrap()
});

/// Fast pre-filter: skip regex if no inline delimiter exists.
#[inline]
fn has_markup(line: &str) -> bool {
    line.contains(['*', '[', '#'])
}

/// Parse one line of prose into inline nodes.
///
/// Text between matches is kept verbatim as [`InlineNode::Text`]; an empty
/// line yields no nodes.
///
/// # Example
/// ```
/// use chatmark_parser::parse_inline;
/// use chatmark_core::InlineNode;
///
/// let nodes = parse_inline("see [docs](https://example.com) #rust");
/// assert_eq!(nodes.len(), 4);
/// assert_eq!(
///     nodes[1],
///     InlineNode::Link {
///         text: "docs".to_string(),
///         url: "https://example.com".to_string(),
///     }
/// );
/// assert_eq!(nodes[3], InlineNode::Hashtag { value: "#rust".to_string() });
/// ```
pub fn parse_inline(line: &str) -> Vec<InlineNode> {
    if line.is_empty() {
        return Vec::new();
    }
    if !has_markup(line) {
        return vec![text(line)];
    }

    let mut nodes = Vec::new();
    let mut last = 0;

    for caps in INLINE.captures_iter(line) {
        let Some(whole) = caps.get(0) else {
            continue;
        };

        if whole.start() > last {
            nodes.push(text(&line[last..whole.start()]));
        }
        nodes.push(node_from_captures(&caps, whole.as_str()));
        last = whole.end();
    }

    if last < line.len() {
        nodes.push(text(&line[last..]));
    }

    nodes
}

/// Build the node for whichever alternative matched.
fn node_from_captures(caps: &Captures<'_>, whole: &str) -> InlineNode {
    let group = |name: &str| caps.name(name).map(|m| m.as_str().to_string());

    if let Some(value) = group("bold_italic") {
        InlineNode::BoldItalic { value }
    } else if let Some(value) = group("bold") {
        InlineNode::Bold { value }
    } else if let Some(value) = group("italic") {
        InlineNode::Italic { value }
    } else if let (Some(text), Some(url)) = (group("link_text"), group("url")) {
        InlineNode::Link { text, url }
    } else if let Some(value) = group("hashtag") {
        InlineNode::Hashtag { value }
    } else {
        text(whole)
    }
}

fn text(value: &str) -> InlineNode {
    InlineNode::Text {
        value: value.to_string(),
    }
}
