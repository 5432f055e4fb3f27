//! Line classification for prose: headings, rules, list items, blank and plain lines.
//!
//! Rules are tried in a fixed precedence; the first one that matches decides
//! the line's kind.

use regex::Regex;
use std::sync::LazyLock;

/// Matches `# Heading` through `###### Heading`
static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<hashes>#{1,6})\s+(?P<text>.*)").unwrap());

/// Matches `1. item`
static ORDERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[0-9]+\.\s+(?P<text>.*)").unwrap());

/// Matches `- item`, `* item`, `• item`
static UNORDERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[*\-•]\s+(?P<text>\S.*)").unwrap());

/// Kind of a single prose line, borrowing the text that follows its marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LineKind<'a> {
    Heading { level: u8, text: &'a str },
    Rule,
    OrderedItem(&'a str),
    UnorderedItem(&'a str),
    Blank,
    Plain(&'a str),
}

/// Classify one line (no newline characters).
pub(crate) fn classify(line: &str) -> LineKind<'_> {
    if let Some(caps) = HEADING.captures(line)
        && let (Some(hashes), Some(text)) = (caps.name("hashes"), caps.name("text"))
    {
        return LineKind::Heading {
            level: hashes.as_str().len() as u8,
            text: text.as_str(),
        };
    }

    if is_rule(line) {
        return LineKind::Rule;
    }

    if let Some(text) = ORDERED_ITEM.captures(line).and_then(|caps| caps.name("text")) {
        return LineKind::OrderedItem(text.as_str());
    }

    if let Some(text) = UNORDERED_ITEM
        .captures(line)
        .and_then(|caps| caps.name("text"))
    {
        return LineKind::UnorderedItem(text.as_str());
    }

    if line.trim().is_empty() {
        return LineKind::Blank;
    }

    LineKind::Plain(line)
}

/// Three or more of the same marker (`-`, `*`, `_`), optionally separated by
/// whitespace, and nothing else on the line.
///
/// Equivalent to `^\s*([-*_])(\s*\1){2,}\s*$`; the regex crate has no
/// backreferences, so the check is written by hand.
fn is_rule(line: &str) -> bool {
    let mut marks = line.chars().filter(|c| !c.is_whitespace());

    let Some(marker) = marks.next() else {
        return false;
    };
    if !matches!(marker, '-' | '*' | '_') {
        return false;
    }

    let mut count = 1;
    for c in marks {
        if c != marker {
            return false;
        }
        count += 1;
    }

    count >= 3
}
