//! The content resolver maps a section id to the page shown for it.
//!
//! Each section's page is a markdown document compiled into the binary. Resolution parses it
//! into display blocks and turns every fenced block into a [`CodeBlock`]: either a reference into
//! the shared [`examples`] table (`@example <key>` info strings) or an inline snippet.
//!
//! Resolution is pure and always succeeds. An id that names no section resolves to the default
//! section, so the view never renders an empty page.

pub mod examples;

use crate::formats::markdown::MarkdownFormat;
use crate::input::{self, RawBlock};
use crate::section::SectionId;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// A resolved page.
pub struct Content {
    /// Section the page belongs to.
    pub section: SectionId,
    /// Display blocks in reading order.
    pub blocks: Vec<Block>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
/// One display block of a page.
pub enum Block {
    /// Heading; level 1 is the page title.
    Heading {
        /// Heading depth.
        level: u8,
        /// Heading text.
        text: String,
    },
    /// Running text, may contain inline markup.
    Paragraph {
        /// Paragraph text.
        text: String,
    },
    /// Bulleted or numbered list.
    List {
        /// Entry texts.
        items: Vec<String>,
    },
    /// Highlighted note.
    Callout {
        /// Note text.
        text: String,
    },
    /// Source listing with a copy action.
    Code(CodeBlock),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// A code listing on a page.
pub struct CodeBlock {
    /// Example-table key, or `<section>:<n>` for inline snippets.
    pub key: String,
    /// Highlighting language tag.
    pub language: &'static str,
    /// Caption shown above the listing.
    pub title: Option<String>,
    /// Verbatim source text.
    pub text: &'static str,
}

impl Content {
    /// Code listings of the page in reading order.
    pub fn code_blocks(&self) -> impl Iterator<Item = &CodeBlock> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Code(code) => Some(code),
            _ => None,
        })
    }

    #[must_use]
    /// Number of code listings on the page.
    pub fn code_block_count(&self) -> usize {
        self.code_blocks().count()
    }

    #[must_use]
    /// The `index`-th code listing.
    pub fn code_block(&self, index: usize) -> Option<&CodeBlock> {
        self.code_blocks().nth(index)
    }

    #[must_use]
    /// Text of the first level-1 heading, if any.
    pub fn title(&self) -> Option<&str> {
        self.blocks.iter().find_map(|block| match block {
            Block::Heading { level: 1, text } => Some(text.as_str()),
            _ => None,
        })
    }
}

#[must_use]
/// Resolve a section by its string id, falling back to the default section.
pub fn resolve(id: &str) -> Content {
    let section = id.parse::<SectionId>().unwrap_or_else(|err| {
        tracing::debug!(%err, "resolving default section instead");
        SectionId::default()
    });
    resolve_section(section)
}

#[must_use]
/// Resolve a known section.
pub fn resolve_section(section: SectionId) -> Content {
    let mut blocks = Vec::new();
    let mut inline_count = 0;

    for raw in input::extract_blocks(&MarkdownFormat, document(section)) {
        let block = match raw {
            RawBlock::Heading { level, text } => Block::Heading { level, text },
            RawBlock::Paragraph(text) => Block::Paragraph { text },
            RawBlock::List(items) => Block::List { items },
            RawBlock::Callout(text) => Block::Callout { text },
            RawBlock::Fence { info, body } => {
                let info = FenceInfo::parse(info);
                if let Some(key) = info.example {
                    let Some(example) = examples::example(key) else {
                        tracing::warn!(%section, key, "skipping unknown code example");
                        continue;
                    };
                    Block::Code(CodeBlock {
                        key: example.key.to_string(),
                        language: example.language,
                        title: info.title,
                        text: example.text,
                    })
                } else {
                    inline_count += 1;
                    Block::Code(CodeBlock {
                        key: format!("{section}:{inline_count}"),
                        language: info.language,
                        title: info.title,
                        text: body,
                    })
                }
            }
        };
        blocks.push(block);
    }

    Content { section, blocks }
}

/// Authored markdown for a section.
fn document(section: SectionId) -> &'static str {
    match section {
        SectionId::GettingStarted => include_str!("docs/getting-started.md"),
        SectionId::Installation => include_str!("docs/installation.md"),
        SectionId::Configuration => include_str!("docs/configuration.md"),
        SectionId::Publishing => include_str!("docs/publishing.md"),
        SectionId::PythonSdk => include_str!("docs/python-sdk.md"),
        SectionId::ApiReference => include_str!("docs/api-reference.md"),
        SectionId::Examples => include_str!("docs/examples.md"),
        SectionId::Security => include_str!("docs/security.md"),
        SectionId::Troubleshooting => include_str!("docs/troubleshooting.md"),
    }
}

#[derive(Debug, PartialEq, Eq)]
/// Parsed fence info string: `<language> [title="..."]` or `@example <key> [title="..."]`.
struct FenceInfo {
    language: &'static str,
    example: Option<&'static str>,
    title: Option<String>,
}

impl FenceInfo {
    fn parse(info: &'static str) -> Self {
        let title = info.find("title=\"").and_then(|start| {
            let rest = &info[start + "title=\"".len()..];
            rest.find('"').map(|end| rest[..end].to_string())
        });

        let mut words = info.split_whitespace();
        let first = words.next().unwrap_or("");
        if first == "@example" {
            Self {
                language: "text",
                example: words.next(),
                title,
            }
        } else if first.is_empty() || first.starts_with("title=") {
            Self {
                language: "text",
                example: None,
                title,
            }
        } else {
            Self {
                language: first,
                example: None,
                title,
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/content.rs"]
mod tests;
