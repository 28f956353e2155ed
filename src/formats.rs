//! Format trait and implementations for the document types content is authored in.
//!
//! A format supplies the tree-sitter language used to parse a document and tells the extractor
//! which syntax nodes are the display blocks it understands.

pub mod markdown;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// Display block category of a syntax node.
pub enum BlockKind {
    /// A node whose children are blocks (document roots, heading sections).
    Container,
    /// A heading line.
    Heading,
    /// Running text.
    Paragraph,
    /// A bulleted or numbered list.
    List,
    /// A highlighted note.
    Callout,
    /// A fenced source listing.
    Code,
}

/// Parsing rules for one document format.
pub trait Format {
    /// Tree-sitter grammar for the format.
    fn language(&self) -> tree_sitter::Language;
    /// Block category of a node kind, or `None` for nodes the viewer ignores.
    fn classify(&self, kind: &str) -> Option<BlockKind>;
    /// Node kind of a list entry.
    fn list_item_kind(&self) -> &str;
    /// Node kind holding the info string of a code block.
    fn info_string_kind(&self) -> &str;
    /// Node kind holding the body of a code block.
    fn code_content_kind(&self) -> &str;
}
