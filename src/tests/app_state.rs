use super::{ActiveSection, AppState};
use crate::clipboard::{ClipboardError, ClipboardSink, COPY_FEEDBACK};
use crate::content::resolve;
use crate::navigation::{sidebar_items, strip_items};
use crate::section::{list_sections, SectionId};
use crate::theme::{ColorScheme, Theme};
use ratatui::layout::Rect;
use std::time::{Duration, Instant};

#[derive(Default)]
struct RecordingClipboard {
    writes: Vec<String>,
    fail: bool,
}

impl ClipboardSink for RecordingClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.writes.push(text.to_string());
        if self.fail {
            Err(ClipboardError::Write("denied".to_string()))
        } else {
            Ok(())
        }
    }
}

fn app() -> AppState {
    AppState::new("getting-started", Theme::System, ColorScheme::Dark)
}

#[test]
fn test_active_section_defaults_to_first_entry() {
    let active = ActiveSection::new();
    assert_eq!(active.current_id(), "getting-started");
}

#[test]
fn test_select_then_read_round_trips() {
    let mut active = ActiveSection::new();
    for section in list_sections() {
        active.select_section(section.id.as_str());
        assert_eq!(active.current_id(), section.id.as_str());
    }
}

#[test]
fn test_selection_re_resolves_content() {
    let mut app = app();
    assert_eq!(app.current_id(), "getting-started");

    app.select_section("installation");

    assert_eq!(app.current_id(), "installation");
    assert_eq!(app.content, resolve("installation"));
    assert_ne!(app.content, resolve("getting-started"));
}

#[test]
fn test_unknown_selection_shows_default_page() {
    let mut app = app();
    app.select_section("installation");
    app.select_section("nonexistent");

    assert_eq!(app.current_id(), "nonexistent");
    assert_eq!(resolve(app.current_id()), resolve("getting-started"));
    assert_eq!(app.current_section(), SectionId::GettingStarted);
    assert!(!app.content.blocks.is_empty());
}

#[test]
fn test_restored_unknown_id_shows_default_page() {
    let app = AppState::new("removed-page", Theme::Light, ColorScheme::Dark);
    assert_eq!(app.current_section(), SectionId::default());
}

#[test]
fn test_keyboard_navigation_does_not_wrap() {
    let mut app = app();
    app.prev_section();
    assert_eq!(app.current_section(), SectionId::GettingStarted);

    app.next_section();
    assert_eq!(app.current_section(), SectionId::Installation);

    app.last_section();
    assert_eq!(app.current_section(), SectionId::Troubleshooting);
    app.next_section();
    assert_eq!(app.current_section(), SectionId::Troubleshooting);

    app.first_section();
    assert_eq!(app.current_section(), SectionId::GettingStarted);
}

#[test]
fn test_select_by_number() {
    let mut app = app();
    assert!(app.select_number(5));
    assert_eq!(app.current_section(), SectionId::PythonSdk);
    assert!(!app.select_number(0));
    assert!(!app.select_number(10));
    assert_eq!(app.current_section(), SectionId::PythonSdk);
}

#[test]
fn test_copy_focused_block() {
    let mut app = app();
    let mut clipboard = RecordingClipboard::default();
    let now = Instant::now();

    assert!(!app.copy_focused(&mut clipboard, now), "Nothing focused yet");

    app.focus_next_block();
    assert!(app.copy_focused(&mut clipboard, now));

    assert_eq!(clipboard.writes, vec!["pip install a2a-publisher".to_string()]);
    assert!(app.just_copied(0, now));
    assert!(!app.just_copied(1, now), "Indicators are per listing");
    assert!(!app.just_copied(0, now + COPY_FEEDBACK));
}

#[test]
fn test_failed_copy_still_shows_indicator() {
    let mut app = app();
    let mut clipboard = RecordingClipboard {
        fail: true,
        ..RecordingClipboard::default()
    };
    let now = Instant::now();

    assert!(app.copy_block(1, &mut clipboard, now));
    assert_eq!(clipboard.writes.len(), 1);
    assert!(app.just_copied(1, now + Duration::from_secs(1)));
}

#[test]
fn test_selection_resets_copy_state() {
    let mut app = app();
    let mut clipboard = RecordingClipboard::default();
    let now = Instant::now();
    app.copy_block(0, &mut clipboard, now);

    app.select_section("python-sdk");

    assert_eq!(app.focused_block, None);
    assert_eq!(app.copy_feedback.len(), app.content.code_block_count());
    assert!(!app.just_copied(0, now));
}

#[test]
fn test_block_focus_stays_in_range() {
    let mut app = app();
    app.focus_prev_block();
    assert_eq!(app.focused_block, Some(1));
    app.focus_next_block();
    app.focus_next_block();
    assert_eq!(app.focused_block, Some(1));
    app.focus_prev_block();
    app.focus_prev_block();
    assert_eq!(app.focused_block, Some(0));
}

#[test]
fn test_theme_cycle_changes_dark_mode() {
    let mut app = AppState::new("getting-started", Theme::Light, ColorScheme::Dark);
    assert!(!app.is_dark_mode());
    app.cycle_theme();
    assert_eq!(app.theme, Theme::Dark);
    assert!(app.is_dark_mode());
    app.cycle_theme();
    assert_eq!(app.theme, Theme::System);
    assert!(app.is_dark_mode());
}

#[test]
fn test_click_in_either_navigation_variant() {
    let mut app = app();
    let mut clipboard = RecordingClipboard::default();
    let now = Instant::now();

    app.nav_items = strip_items(Rect::new(0, 0, 200, 3), app.current_section());
    let installation = app.nav_items[1];
    app.click(installation.area.x, installation.area.y, &mut clipboard, now);
    assert_eq!(app.current_section(), SectionId::Installation);

    app.nav_items = sidebar_items(Rect::new(0, 0, 30, 20), app.current_section());
    let security = app.nav_items[7];
    app.click(security.area.x + 2, security.area.y, &mut clipboard, now);
    assert_eq!(app.current_id(), "security");
    assert!(clipboard.writes.is_empty());
}

#[test]
fn test_click_on_listing_header_copies_it() {
    let mut app = app();
    let mut clipboard = RecordingClipboard::default();
    let now = Instant::now();
    app.content_area = Rect::new(30, 0, 60, 20);
    app.code_headers = vec![12, 17];
    app.scroll = 5;

    app.click(40, 12, &mut clipboard, now);

    assert_eq!(app.focused_block, Some(1));
    assert_eq!(
        clipboard.writes,
        vec!["a2a-publisher publish ./a2a-card.json".to_string()]
    );
    assert!(app.just_copied(1, now));
}
