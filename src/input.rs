//! Block extraction from authored documents.
//!
//! Documents are parsed with tree-sitter and flattened into a list of display blocks in reading
//! order. Nesting introduced by heading sections is discarded: the viewer renders a flat page.
//! Text is normalised (markers stripped, whitespace collapsed) but inline markup such as
//! backticks is left for the renderer.

use crate::formats::{BlockKind, Format};
use tree_sitter::{Node, Parser};

#[derive(Clone, Debug, PartialEq, Eq)]
/// A display block as written in the source document.
pub enum RawBlock {
    /// Heading with its level (1 for `#`).
    Heading {
        /// Heading depth.
        level: u8,
        /// Heading text without markers.
        text: String,
    },
    /// Running text with lines joined.
    Paragraph(String),
    /// List entries without their markers.
    List(Vec<String>),
    /// Quoted note with quote markers removed.
    Callout(String),
    /// Fenced block, kept verbatim.
    Fence {
        /// Everything after the opening fence on its line.
        info: &'static str,
        /// Body between the fences without the final newline.
        body: &'static str,
    },
}

#[derive(Debug, thiserror::Error)]
/// Failure to obtain a syntax tree for a document.
pub enum ParseError {
    /// The grammar is incompatible with the linked tree-sitter runtime.
    #[error("failed to load grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),
    /// The parser returned no tree.
    #[error("parser produced no syntax tree")]
    NoTree,
}

/// Parse a document into blocks, propagating parser setup failures.
///
/// # Errors
///
/// Returns an error if the grammar cannot be loaded or parsing yields no tree.
pub fn try_extract_blocks<F: Format>(
    format: &F,
    source: &'static str,
) -> Result<Vec<RawBlock>, ParseError> {
    let mut parser = Parser::new();
    parser.set_language(&format.language())?;
    let tree = parser.parse(source, None).ok_or(ParseError::NoTree)?;

    let mut blocks = Vec::new();
    collect_blocks(format, tree.root_node(), source, &mut blocks);
    Ok(blocks)
}

#[must_use]
/// Parse a document into blocks.
///
/// Never fails: if the document cannot be parsed its raw text becomes a single paragraph, so
/// there is always something to show.
pub fn extract_blocks<F: Format>(format: &F, source: &'static str) -> Vec<RawBlock> {
    match try_extract_blocks(format, source) {
        Ok(blocks) => blocks,
        Err(err) => {
            tracing::warn!(%err, "showing document unparsed");
            vec![RawBlock::Paragraph(source.trim().to_string())]
        }
    }
}

fn collect_blocks<F: Format>(
    format: &F,
    node: Node<'_>,
    source: &'static str,
    out: &mut Vec<RawBlock>,
) {
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        let text = &source[child.byte_range()];
        match format.classify(child.kind()) {
            Some(BlockKind::Container) => collect_blocks(format, child, source, out),
            Some(BlockKind::Heading) => out.push(heading(text)),
            Some(BlockKind::Paragraph) => out.push(RawBlock::Paragraph(collapse(text))),
            Some(BlockKind::Callout) => out.push(RawBlock::Callout(unquote(text))),
            Some(BlockKind::List) => {
                let mut items_cursor = child.walk();
                let items = child
                    .named_children(&mut items_cursor)
                    .filter(|item| item.kind() == format.list_item_kind())
                    .map(|item| collapse(strip_list_marker(&source[item.byte_range()])))
                    .collect();
                out.push(RawBlock::List(items));
            }
            Some(BlockKind::Code) => out.push(fence(format, child, source)),
            None => {}
        }
    }
}

fn heading(text: &str) -> RawBlock {
    let trimmed = text.trim();
    let hashes = trimmed.chars().take_while(|&c| c == '#').count();
    let level = u8::try_from(hashes.clamp(1, 6)).unwrap_or(1);
    let title = trimmed[hashes..].trim().trim_end_matches('#').trim();
    RawBlock::Heading {
        level,
        text: title.to_string(),
    }
}

fn fence<F: Format>(format: &F, node: Node<'_>, source: &'static str) -> RawBlock {
    let mut info = "";
    let mut body = "";
    let mut cursor = node.walk();
    for part in node.named_children(&mut cursor) {
        if part.kind() == format.info_string_kind() {
            info = source[part.byte_range()].trim();
        } else if part.kind() == format.code_content_kind() {
            body = source[part.byte_range()].trim_end_matches(['\n', '\r']);
        }
    }
    RawBlock::Fence { info, body }
}

/// Join wrapped source lines into a single line of text.
fn collapse(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn unquote(text: &str) -> String {
    let lines: Vec<&str> = text
        .lines()
        .map(|line| line.trim_start().trim_start_matches('>'))
        .collect();
    collapse(&lines.join("\n"))
}

fn strip_list_marker(text: &str) -> &str {
    let trimmed = text.trim_start();
    if let Some(rest) = trimmed.strip_prefix(['-', '*', '+']) {
        return rest;
    }
    let digits = trimmed.chars().take_while(char::is_ascii_digit).count();
    if digits > 0 {
        if let Some(rest) = trimmed[digits..].strip_prefix(['.', ')']) {
            return rest;
        }
    }
    trimmed
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
