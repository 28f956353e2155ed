use super::{extract_blocks, strip_list_marker, try_extract_blocks, RawBlock};
use crate::formats::markdown::MarkdownFormat;

#[test]
fn test_heading_paragraph_and_fence() {
    let source = "# Title\n\nHello\nworld.\n\n```bash title=\"Greet\"\necho hi\n```\n";
    let blocks = try_extract_blocks(&MarkdownFormat, source).unwrap();

    assert_eq!(
        blocks,
        vec![
            RawBlock::Heading {
                level: 1,
                text: "Title".to_string()
            },
            RawBlock::Paragraph("Hello world.".to_string()),
            RawBlock::Fence {
                info: "bash title=\"Greet\"",
                body: "echo hi"
            },
        ]
    );
}

#[test]
fn test_nested_heading_levels_flatten_in_order() {
    let source = "# One\n\nA\n\n## Two\n\nB\n\n### Three\n\nC\n";
    let blocks = extract_blocks(&MarkdownFormat, source);

    let headings: Vec<(u8, &str)> = blocks
        .iter()
        .filter_map(|b| match b {
            RawBlock::Heading { level, text } => Some((*level, text.as_str())),
            _ => None,
        })
        .collect();
    assert_eq!(headings, vec![(1, "One"), (2, "Two"), (3, "Three")]);
    assert_eq!(blocks.len(), 6, "Paragraphs should follow their headings");
    assert_eq!(blocks[5], RawBlock::Paragraph("C".to_string()));
}

#[test]
fn test_list_items_lose_markers() {
    let source = "- Python 3.8 or higher\n- pip (Python package installer)\n";
    let blocks = extract_blocks(&MarkdownFormat, source);

    assert_eq!(
        blocks,
        vec![RawBlock::List(vec![
            "Python 3.8 or higher".to_string(),
            "pip (Python package installer)".to_string(),
        ])]
    );
}

#[test]
fn test_quote_becomes_callout() {
    let source = "> Report vulnerabilities\n> privately.\n";
    let blocks = extract_blocks(&MarkdownFormat, source);

    assert_eq!(
        blocks,
        vec![RawBlock::Callout("Report vulnerabilities privately.".to_string())]
    );
}

#[test]
fn test_multiline_fence_is_verbatim() {
    let source = "```python\ndef f():\n    return 1\n```\n";
    let blocks = extract_blocks(&MarkdownFormat, source);

    assert_eq!(
        blocks,
        vec![RawBlock::Fence {
            info: "python",
            body: "def f():\n    return 1"
        }]
    );
}

#[test]
fn test_empty_fence_keeps_info() {
    let source = "```@example basic-publish\n```\n";
    let blocks = extract_blocks(&MarkdownFormat, source);

    assert_eq!(
        blocks,
        vec![RawBlock::Fence {
            info: "@example basic-publish",
            body: ""
        }]
    );
}

#[test]
fn test_strip_list_marker_variants() {
    assert_eq!(strip_list_marker("- item"), " item");
    assert_eq!(strip_list_marker("  * item"), " item");
    assert_eq!(strip_list_marker("12. item"), " item");
    assert_eq!(strip_list_marker("plain"), "plain");
}
