//! The section registry: every documentation page the viewer can show.
//!
//! Sections are a closed set. Each one has a stable string id (used on the command line, in
//! config and when restoring a selection), a display label, and a symbolic icon that only the
//! UI knows how to draw. The registry order is the navigation order, and its first entry is the
//! default section.

use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// Identifier of a documentation section.
pub enum SectionId {
    /// Overview and quick start.
    GettingStarted,
    /// Ways to install the publisher.
    Installation,
    /// The A2A card and environment settings.
    Configuration,
    /// Publishing workflow and flags.
    Publishing,
    /// Python SDK usage.
    PythonSdk,
    /// REST endpoints and authentication.
    ApiReference,
    /// Sample agent cards.
    Examples,
    /// Security guidance.
    Security,
    /// Common failures and fixes.
    Troubleshooting,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// Symbolic icon reference, resolved to a glyph by the presentation layer.
pub enum Icon {
    /// Open book.
    BookOpen,
    /// Downward arrow.
    Download,
    /// Gear.
    Settings,
    /// Play button.
    Play,
    /// Source code.
    Code,
    /// Text document.
    FileText,
    /// Shield.
    Shield,
    /// Lightning bolt.
    Zap,
}

#[derive(Clone, Copy, Debug)]
/// One entry of the section registry.
pub struct SectionDescriptor {
    /// Stable identifier.
    pub id: SectionId,
    /// Human-readable name shown in navigation.
    pub label: &'static str,
    /// Icon shown next to the label.
    pub icon: Icon,
}

/// The registry, in navigation order.
pub const SECTIONS: [SectionDescriptor; 9] = [
    SectionDescriptor {
        id: SectionId::GettingStarted,
        label: "Getting Started",
        icon: Icon::BookOpen,
    },
    SectionDescriptor {
        id: SectionId::Installation,
        label: "Installation",
        icon: Icon::Download,
    },
    SectionDescriptor {
        id: SectionId::Configuration,
        label: "Configuration",
        icon: Icon::Settings,
    },
    SectionDescriptor {
        id: SectionId::Publishing,
        label: "Publishing Agents",
        icon: Icon::Play,
    },
    SectionDescriptor {
        id: SectionId::PythonSdk,
        label: "Python SDK",
        icon: Icon::Code,
    },
    SectionDescriptor {
        id: SectionId::ApiReference,
        label: "API Reference",
        icon: Icon::Code,
    },
    SectionDescriptor {
        id: SectionId::Examples,
        label: "Examples",
        icon: Icon::FileText,
    },
    SectionDescriptor {
        id: SectionId::Security,
        label: "Security",
        icon: Icon::Shield,
    },
    SectionDescriptor {
        id: SectionId::Troubleshooting,
        label: "Troubleshooting",
        icon: Icon::Zap,
    },
];

#[must_use]
/// All sections in navigation order. Same result on every call.
pub fn list_sections() -> &'static [SectionDescriptor] {
    &SECTIONS
}

#[must_use]
/// Section at a zero-based registry position.
pub fn get(index: usize) -> Option<&'static SectionDescriptor> {
    SECTIONS.get(index)
}

#[must_use]
/// Registry position of a section.
pub fn position(id: SectionId) -> usize {
    SECTIONS.iter().position(|s| s.id == id).unwrap_or(0)
}

#[must_use]
/// Registry entry for a section.
pub fn descriptor(id: SectionId) -> &'static SectionDescriptor {
    &SECTIONS[position(id)]
}

impl SectionId {
    #[must_use]
    /// The stable string form of this id.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GettingStarted => "getting-started",
            Self::Installation => "installation",
            Self::Configuration => "configuration",
            Self::Publishing => "publishing",
            Self::PythonSdk => "python-sdk",
            Self::ApiReference => "api-reference",
            Self::Examples => "examples",
            Self::Security => "security",
            Self::Troubleshooting => "troubleshooting",
        }
    }
}

impl Default for SectionId {
    fn default() -> Self {
        SECTIONS[0].id
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown section id `{0}`")]
/// A string that names no registered section.
pub struct UnknownSection(pub String);

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SECTIONS
            .iter()
            .map(|d| d.id)
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

impl serde::Serialize for SectionId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "tests/section.rs"]
mod tests;
