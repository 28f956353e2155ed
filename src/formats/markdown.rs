//! Markdown format implementation using tree-sitter-md.
//!
//! Only the block grammar is needed: inline markup is left in the text and styled at draw time.

use crate::formats::{BlockKind, Format};

/// Block-level node kinds of the tree-sitter-md grammar.
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn language(&self) -> tree_sitter::Language {
        tree_sitter_md::LANGUAGE.into()
    }

    fn classify(&self, kind: &str) -> Option<BlockKind> {
        match kind {
            "document" | "section" => Some(BlockKind::Container),
            "atx_heading" => Some(BlockKind::Heading),
            "paragraph" => Some(BlockKind::Paragraph),
            "list" => Some(BlockKind::List),
            "block_quote" => Some(BlockKind::Callout),
            "fenced_code_block" => Some(BlockKind::Code),
            _ => None,
        }
    }

    fn list_item_kind(&self) -> &'static str {
        "list_item"
    }

    fn info_string_kind(&self) -> &'static str {
        "info_string"
    }

    fn code_content_kind(&self) -> &'static str {
        "code_fence_content"
    }
}
