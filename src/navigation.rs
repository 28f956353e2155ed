//! Layout of the section navigation.
//!
//! Navigation comes in two variants: a vertical sidebar on wide terminals and a single-row strip
//! on narrow ones. Both list the whole registry, scrolling when it does not fit so the active
//! entry stays on screen, and neither keeps state of its own, so they cannot disagree about
//! which section is active. Layout is computed here, separately from drawing, so that mouse
//! clicks can be mapped back to sections.

use crate::section::{list_sections, position, Icon, SectionDescriptor, SectionId};
use ratatui::layout::{Margin, Position, Rect};
use ratatui::text::Span;

/// Columns between strip items.
pub const STRIP_GAP: u16 = 1;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// Presentation of the navigation.
pub enum NavVariant {
    /// Vertical list beside the content.
    Sidebar,
    /// Horizontal row above the content.
    Strip,
}

impl NavVariant {
    #[must_use]
    /// Variant for a terminal `width` columns wide.
    pub fn for_width(width: u16, narrow_width: u16) -> Self {
        if width < narrow_width {
            Self::Strip
        } else {
            Self::Sidebar
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// A clickable navigation entry.
pub struct NavItem {
    /// Section the entry selects.
    pub id: SectionId,
    /// Screen cells the entry occupies.
    pub area: Rect,
}

#[must_use]
/// Glyph drawn for an icon.
pub fn glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::BookOpen => "📖",
        Icon::Download => "📥",
        Icon::Settings => "🔧",
        Icon::Play => "🚀",
        Icon::Code => "💻",
        Icon::FileText => "📄",
        Icon::Shield => "🔒",
        Icon::Zap => "⚡",
    }
}

#[must_use]
/// Text of a navigation entry.
pub fn label(section: &SectionDescriptor, variant: NavVariant) -> String {
    match variant {
        NavVariant::Sidebar => format!(" {} {}", glyph(section.icon), section.label),
        NavVariant::Strip => format!(" {} {} ", glyph(section.icon), section.label),
    }
}

fn label_width(section: &SectionDescriptor, variant: NavVariant) -> u16 {
    u16::try_from(Span::raw(label(section, variant)).width()).unwrap_or(u16::MAX)
}

#[must_use]
/// Entries of the sidebar drawn in `area` (borders included), scrolled so `active` is visible.
pub fn sidebar_items(area: Rect, active: SectionId) -> Vec<NavItem> {
    let inner = area.inner(Margin::new(1, 1));
    if inner.height == 0 {
        return Vec::new();
    }
    let sections = list_sections();
    let heights = vec![1; sections.len()];
    let first = first_visible(&heights, position(active), inner.height, 0);

    sections
        .iter()
        .skip(first)
        .zip(inner.y..inner.bottom())
        .map(|(section, row)| NavItem {
            id: section.id,
            area: Rect::new(inner.x, row, inner.width, 1),
        })
        .collect()
}

#[must_use]
/// Entries of the strip drawn in `area` (borders included), scrolled so `active` is visible.
pub fn strip_items(area: Rect, active: SectionId) -> Vec<NavItem> {
    let inner = area.inner(Margin::new(1, 1));
    if inner.height == 0 {
        return Vec::new();
    }
    let sections = list_sections();
    let widths: Vec<u16> = sections
        .iter()
        .map(|s| label_width(s, NavVariant::Strip))
        .collect();
    let first = first_visible(&widths, position(active), inner.width, STRIP_GAP);

    let mut items = Vec::new();
    let mut x = inner.x;
    for (section, &width) in sections.iter().zip(&widths).skip(first) {
        if x >= inner.right() {
            break;
        }
        items.push(NavItem {
            id: section.id,
            area: Rect::new(x, inner.y, width.min(inner.right() - x), 1),
        });
        x = x.saturating_add(width).saturating_add(STRIP_GAP);
    }
    items
}

/// Smallest leading index that still leaves `active` fully inside `available` cells, with
/// `gap` cells between consecutive entries.
fn first_visible(sizes: &[u16], active: usize, available: u16, gap: u16) -> usize {
    let span = |first: usize| -> u32 {
        let items = &sizes[first..=active];
        let gaps = u32::try_from(items.len().saturating_sub(1)).unwrap_or(u32::MAX);
        items.iter().map(|&s| u32::from(s)).sum::<u32>() + gaps * u32::from(gap)
    };
    let mut first = 0;
    while first < active && span(first) > u32::from(available) {
        first += 1;
    }
    first
}

#[must_use]
/// Section under a screen cell.
pub fn hit_test(items: &[NavItem], column: u16, row: u16) -> Option<SectionId> {
    items
        .iter()
        .find(|item| item.area.contains(Position::new(column, row)))
        .map(|item| item.id)
}

#[cfg(test)]
#[path = "tests/navigation.rs"]
mod tests;
