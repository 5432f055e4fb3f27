//! Integration tests for the public `parse` entry point

use chatmark_parser::prelude::*;

fn text(value: &str) -> InlineNode {
    InlineNode::Text {
        value: value.to_string(),
    }
}

/// Blocks of the only prose section in `doc`.
fn single_prose(doc: &Document) -> &[BlockNode] {
    assert_eq!(doc.nodes.len(), 1, "expected one top-level node: {:?}", doc);
    match &doc.nodes[0] {
        DocumentNode::Prose { blocks } => blocks,
        DocumentNode::Code(code) => panic!("Expected prose, got code {:?}", code),
    }
}

/// Inline nodes of a document that is a single one-line paragraph.
fn single_line(doc: &Document) -> &[InlineNode] {
    let blocks = single_prose(doc);
    assert_eq!(blocks.len(), 1);
    match &blocks[0] {
        BlockNode::Paragraph { lines } => {
            assert_eq!(lines.len(), 1);
            &lines[0]
        }
        other => panic!("Expected paragraph, got {:?}", other),
    }
}

// ==================== Fences ====================

#[test]
fn test_fence_extraction() {
    let doc = parse("```js\nlet x=1;\n```");
    assert_eq!(
        doc.nodes,
        vec![DocumentNode::Code(CodeBlock {
            language: "js".to_string(),
            body: "let x=1;".to_string(),
        })]
    );
}

#[test]
fn test_unterminated_fence_is_paragraph() {
    let doc = parse("```js\nlet x=1;");
    let blocks = single_prose(&doc);
    assert_eq!(
        blocks,
        &[BlockNode::Paragraph {
            lines: vec![vec![text("```js")], vec![text("let x=1;")]],
        }]
    );
}

#[test]
fn test_fence_without_language_uses_sentinel() {
    let doc = parse("```\nplain\n```");
    assert_eq!(doc.code_blocks()[0].language, CodeBlock::DEFAULT_LANGUAGE);
}

#[test]
fn test_markup_inside_fence_is_not_parsed() {
    let body = "# not heading\n- not list\n**not bold** #nottag";
    let doc = parse(&format!("```md\n{}\n```", body));
    assert_eq!(doc.code_blocks()[0].body, body);
    assert!(doc.hashtags().is_empty());
    assert_eq!(doc.blocks().count(), 0);
}

#[test]
fn test_interleaving_preserves_order() {
    let doc = parse("before\n```a\n1\n```\nbetween\n```b\n2\n```\nafter");
    let kinds: Vec<&str> = doc
        .nodes
        .iter()
        .map(|node| match node {
            DocumentNode::Code(code) => code.language.as_str(),
            DocumentNode::Prose { .. } => "prose",
        })
        .collect();
    assert_eq!(kinds, vec!["prose", "a", "prose", "b", "prose"]);
}

// ==================== Blocks ====================

#[test]
fn test_heading() {
    let doc = parse("# Title");
    assert_eq!(
        single_prose(&doc),
        &[BlockNode::Heading {
            level: 1,
            inline: vec![text("Title")],
        }]
    );
}

#[test]
fn test_seven_hashes_falls_through_to_paragraph() {
    let doc = parse("####### Too Deep");
    assert_eq!(single_line(&doc), &[text("####### Too Deep")]);
}

#[test]
fn test_list_grouping() {
    let doc = parse("- a\n- b\n\nc");
    assert_eq!(
        single_prose(&doc),
        &[
            BlockNode::List {
                ordered: false,
                items: vec![vec![text("a")], vec![text("b")]],
            },
            BlockNode::Paragraph {
                lines: vec![vec![text("c")]],
            },
        ]
    );
}

#[test]
fn test_mixed_kind_list_boundary() {
    let doc = parse("1. a\n- b");
    assert_eq!(
        single_prose(&doc),
        &[
            BlockNode::List {
                ordered: true,
                items: vec![vec![text("a")]],
            },
            BlockNode::List {
                ordered: false,
                items: vec![vec![text("b")]],
            },
        ]
    );
}

#[test]
fn test_rules() {
    let doc = parse("above\n***\nbelow\n- - -");
    assert_eq!(
        single_prose(&doc),
        &[
            BlockNode::Paragraph {
                lines: vec![vec![text("above")]],
            },
            BlockNode::Rule,
            BlockNode::Paragraph {
                lines: vec![vec![text("below")]],
            },
            BlockNode::Rule,
        ]
    );
}

#[test]
fn test_blank_line_never_spans_a_block() {
    let doc = parse("a\nb\n\nc\n\n- x\n\n- y");
    let blocks = single_prose(&doc);
    assert_eq!(blocks.len(), 4);
    assert!(matches!(&blocks[0], BlockNode::Paragraph { lines } if lines.len() == 2));
    assert!(matches!(&blocks[1], BlockNode::Paragraph { lines } if lines.len() == 1));
    assert!(matches!(&blocks[2], BlockNode::List { items, .. } if items.len() == 1));
    assert!(matches!(&blocks[3], BlockNode::List { items, .. } if items.len() == 1));
}

// ==================== Inline ====================

#[test]
fn test_inline_precedence() {
    let doc = parse("***x*** **y** *z*");
    assert_eq!(
        single_line(&doc),
        &[
            InlineNode::BoldItalic {
                value: "x".to_string()
            },
            text(" "),
            InlineNode::Bold {
                value: "y".to_string()
            },
            text(" "),
            InlineNode::Italic {
                value: "z".to_string()
            },
        ]
    );
}

#[test]
fn test_link_extraction() {
    let doc = parse("[go](https://example.com)");
    assert_eq!(
        single_line(&doc),
        &[InlineNode::Link {
            text: "go".to_string(),
            url: "https://example.com".to_string(),
        }]
    );
    assert_eq!(doc.links(), vec![("go", "https://example.com")]);
}

#[test]
fn test_hashtags_in_headings_and_lists() {
    let doc = parse("## Topic #one\n- item #two\nplain ###three");
    assert_eq!(doc.hashtags(), vec!["#one", "#two", "###three"]);
}

#[test]
fn test_round_trip_of_content() {
    let cases = [
        ("plain words", "plain words"),
        ("***a*** **b** *c*", "a b c"),
        ("see [site](http://x.dev) now", "see site now"),
        ("#tag and ##more", "#tag and ##more"),
        ("2 * 3 = 6", "2 * 3 = 6"),
        ("**unclosed", "**unclosed"),
    ];

    for (input, expected) in cases {
        let doc = parse(input);
        let rebuilt: String = single_line(&doc)
            .iter()
            .map(InlineNode::to_plain_text)
            .collect();
        assert_eq!(rebuilt, expected, "input: {:?}", input);
    }
}

// ==================== Robustness ====================

#[test]
fn test_never_panics_and_is_deterministic() {
    let inputs = [
        "",
        " ",
        "\n\n\n",
        "\r\n",
        "```",
        "``````",
        "```\n```",
        "```\n\n```",
        "***",
        "* ",
        "- ",
        "1.",
        "#",
        "# ",
        "[](",
        "[x](https://",
        "****a****",
        "**a*b**c*",
        "#######",
        "•",
        "é*ü*ö",
        "```rust\nfn main() {\n```\n```",
        "- a\n1. b\n- c\n***\n# d\n\n\ne",
    ];

    for input in inputs {
        let first = parse(input);
        let second = parse(input);
        assert_eq!(first, second, "input: {:?}", input);
    }
}

#[test]
fn test_non_blank_input_is_never_dropped() {
    for input in ["x", "  x  ", "*", "[", "`", "```js"] {
        let doc = parse(input);
        assert!(!doc.is_empty(), "input {:?} produced nothing", input);
    }
}

#[test]
fn test_blank_input_produces_nothing() {
    for input in ["", "   ", "\n\t\n"] {
        assert!(parse(input).is_empty(), "input: {:?}", input);
    }
}

#[test]
fn test_parse_from_many_threads() {
    let message = "# Hi\n- **a**\n```py\nprint(1)\n```";
    let expected = parse(message);

    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(move || parse(message)))
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_json_shape_for_renderers() {
    let doc = parse("# T\n```Rust\nx\n```");
    let json = serde_json::to_value(&doc).unwrap();

    assert_eq!(json["nodes"][0]["type"], "prose");
    assert_eq!(json["nodes"][0]["blocks"][0]["type"], "heading");
    assert_eq!(json["nodes"][0]["blocks"][0]["level"], 1);
    assert_eq!(json["nodes"][1]["type"], "code");
    assert_eq!(json["nodes"][1]["language"], "rust");

    let back: Document = serde_json::from_value(json).unwrap();
    assert_eq!(back, doc);
}
