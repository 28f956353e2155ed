//! The state of one documentation view.
//!
//! The active section is a single cell owned by the view. Every selection goes through
//! [`AppState::select_section`], which re-resolves the page before returning, so the content
//! shown always belongs to the section that was selected last. Navigation widgets read the
//! active section from here rather than tracking their own copy.

use crate::clipboard::{self, ClipboardSink, CopyFeedback};
use crate::content::{self, Content};
use crate::navigation::{self, NavItem};
use crate::section::{self, SectionId};
use crate::theme::{self, ColorScheme, Theme};
use ratatui::layout::{Position, Rect};
use std::time::Instant;

#[derive(Clone, Debug, PartialEq, Eq)]
/// The selected section id.
///
/// The id is stored as given. Ids that name no section are tolerated here and handled by the
/// resolver, which falls back to the default section.
pub struct ActiveSection {
    current_id: String,
}

impl Default for ActiveSection {
    fn default() -> Self {
        Self::new()
    }
}

impl ActiveSection {
    #[must_use]
    /// Selection starting at the default section.
    pub fn new() -> Self {
        Self::with_initial(SectionId::default().as_str())
    }

    #[must_use]
    /// Selection restored from a previously stored id.
    pub fn with_initial(id: &str) -> Self {
        Self {
            current_id: id.to_string(),
        }
    }

    #[must_use]
    /// The selected id.
    pub fn current_id(&self) -> &str {
        &self.current_id
    }

    /// Select `id` without validating it.
    pub fn select_section(&mut self, id: &str) {
        id.clone_into(&mut self.current_id);
    }
}

/// One documentation view: selection, resolved page, theme and per-listing copy state.
pub struct AppState {
    /// Selected section.
    pub active: ActiveSection,
    /// Page resolved from the selection.
    pub content: Content,
    /// Theme preference.
    pub theme: Theme,
    /// Colour scheme reported by the terminal.
    pub platform: ColorScheme,
    /// First content line shown.
    pub scroll: usize,
    /// Listing targeted by the copy key.
    pub focused_block: Option<usize>,
    /// One indicator per listing of the current page.
    pub copy_feedback: Vec<CopyFeedback>,
    /// Status text shown in the help bar.
    pub message: Option<String>,
    /// Navigation entries from the last frame, for mouse hit testing.
    pub nav_items: Vec<NavItem>,
    /// Content line of each listing header from the last frame.
    pub code_headers: Vec<usize>,
    /// Content pane from the last frame.
    pub content_area: Rect,
}

impl AppState {
    #[must_use]
    /// View starting at `initial_id`.
    pub fn new(initial_id: &str, theme: Theme, platform: ColorScheme) -> Self {
        let active = ActiveSection::with_initial(initial_id);
        let content = content::resolve(active.current_id());
        let copy_feedback = vec![CopyFeedback::default(); content.code_block_count()];
        Self {
            active,
            content,
            theme,
            platform,
            scroll: 0,
            focused_block: None,
            copy_feedback,
            message: None,
            nav_items: Vec::new(),
            code_headers: Vec::new(),
            content_area: Rect::default(),
        }
    }

    #[must_use]
    /// The selected id as stored.
    pub fn current_id(&self) -> &str {
        self.active.current_id()
    }

    #[must_use]
    /// Section whose page is shown.
    pub fn current_section(&self) -> SectionId {
        self.content.section
    }

    /// Select a section and re-resolve the page.
    pub fn select_section(&mut self, id: &str) {
        self.active.select_section(id);
        self.content = content::resolve(self.active.current_id());
        self.scroll = 0;
        self.focused_block = None;
        self.copy_feedback = vec![CopyFeedback::default(); self.content.code_block_count()];
        self.code_headers.clear();
        self.message = None;
        tracing::debug!(
            requested = id,
            shown = %self.content.section,
            "section selected"
        );
    }

    fn select_position(&mut self, index: usize) {
        if let Some(descriptor) = section::get(index) {
            self.select_section(descriptor.id.as_str());
        }
    }

    /// Move to the following section; stays put on the last one.
    pub fn next_section(&mut self) {
        let index = section::position(self.current_section());
        if index + 1 < section::list_sections().len() {
            self.select_position(index + 1);
        }
    }

    /// Move to the preceding section; stays put on the first one.
    pub fn prev_section(&mut self) {
        let index = section::position(self.current_section());
        if index > 0 {
            self.select_position(index - 1);
        }
    }

    /// Jump to the first section.
    pub fn first_section(&mut self) {
        self.select_position(0);
    }

    /// Jump to the last section.
    pub fn last_section(&mut self) {
        self.select_position(section::list_sections().len().saturating_sub(1));
    }

    /// Select by 1-based registry number. Returns whether the number named a section.
    pub fn select_number(&mut self, number: usize) -> bool {
        match number.checked_sub(1).and_then(section::get) {
            Some(descriptor) => {
                self.select_section(descriptor.id.as_str());
                true
            }
            None => false,
        }
    }

    #[must_use]
    /// Whether listings are drawn with dark colours.
    pub fn is_dark_mode(&self) -> bool {
        theme::is_dark_mode(self.theme, self.platform)
    }

    /// Advance to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.message = Some(format!("Theme: {}", self.theme));
    }

    /// Scroll the page by `delta` lines. The upper bound is applied when drawing.
    pub fn scroll_by(&mut self, delta: isize) {
        self.scroll = self.scroll.saturating_add_signed(delta);
    }

    /// Focus the next listing on the page.
    pub fn focus_next_block(&mut self) {
        let count = self.content.code_block_count();
        if count == 0 {
            return;
        }
        let next = self.focused_block.map_or(0, |i| (i + 1).min(count - 1));
        self.focus_block(next);
    }

    /// Focus the previous listing on the page.
    pub fn focus_prev_block(&mut self) {
        let count = self.content.code_block_count();
        if count == 0 {
            return;
        }
        let prev = self
            .focused_block
            .map_or(count - 1, |i| i.saturating_sub(1));
        self.focus_block(prev);
    }

    fn focus_block(&mut self, index: usize) {
        self.focused_block = Some(index);
        let visible_rows = usize::from(self.content_area.height.max(1));
        if let Some(&header) = self.code_headers.get(index) {
            if header < self.scroll || header >= self.scroll + visible_rows {
                self.scroll = header;
            }
        }
    }

    /// Copy the focused listing. Returns whether a listing was focused.
    pub fn copy_focused(&mut self, sink: &mut dyn ClipboardSink, now: Instant) -> bool {
        match self.focused_block {
            Some(index) => self.copy_block(index, sink, now),
            None => false,
        }
    }

    /// Copy a listing and show its indicator, whatever the clipboard does.
    pub fn copy_block(&mut self, index: usize, sink: &mut dyn ClipboardSink, now: Instant) -> bool {
        let Some(block) = self.content.code_block(index) else {
            return false;
        };
        clipboard::copy_to_clipboard(sink, block.text);
        if let Some(feedback) = self.copy_feedback.get_mut(index) {
            feedback.mark(now);
        }
        true
    }

    #[must_use]
    /// Whether a listing shows its "copied" indicator at `now`.
    pub fn just_copied(&self, index: usize, now: Instant) -> bool {
        self.copy_feedback
            .get(index)
            .is_some_and(|feedback| feedback.is_active(now))
    }

    /// Handle a left click: select a navigation entry, or focus and copy a listing header.
    pub fn click(&mut self, column: u16, row: u16, sink: &mut dyn ClipboardSink, now: Instant) {
        if let Some(id) = navigation::hit_test(&self.nav_items, column, row) {
            self.select_section(id.as_str());
            return;
        }
        if !self.content_area.contains(Position::new(column, row)) {
            return;
        }
        let line = self.scroll + usize::from(row - self.content_area.y);
        if let Some(index) = self.code_headers.iter().position(|&header| header == line) {
            self.focused_block = Some(index);
            self.copy_block(index, sink, now);
        }
    }
}

#[cfg(test)]
#[path = "tests/app_state.rs"]
mod tests;
