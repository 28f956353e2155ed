use super::{draw, inline_spans, wrap};
use crate::app_state::AppState;
use crate::clipboard::{ClipboardError, ClipboardSink, COPY_FEEDBACK};
use crate::config::Config;
use crate::highlight::{CodeBlockRenderer, Highlighter};
use crate::section::SectionId;
use crate::theme::{ColorScheme, Theme};
use ratatui::backend::TestBackend;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::Terminal;
use std::time::Instant;

struct NullClipboard;

impl ClipboardSink for NullClipboard {
    fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Ok(())
    }
}

fn render(app: &mut AppState, width: u16, height: u16, now: Instant) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    let mut renderer = CodeBlockRenderer::new(Highlighter::new());
    let cfg = Config::default();
    terminal
        .draw(|f| draw(f, app, &mut renderer, &cfg, now))
        .unwrap();

    let buffer = terminal.backend().buffer();
    (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

fn app() -> AppState {
    AppState::new("getting-started", Theme::Dark, ColorScheme::Dark)
}

fn line_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}

#[test]
fn test_wide_terminal_uses_sidebar() {
    let mut app = app();
    let rows = render(&mut app, 120, 50, Instant::now());

    assert!(rows[0].contains("Documentation"));
    assert_eq!(app.nav_items.len(), 9);
    assert!(app.nav_items.iter().all(|item| item.area.x == 1));
    assert!(rows.iter().any(|row| row.contains("Welcome to the A2A Publisher")));
    assert!(rows.iter().any(|row| row.contains("Install A2A Publisher · bash")));
    assert!(rows.last().is_some_and(|row| row.contains('└')));
}

#[test]
fn test_narrow_terminal_uses_strip() {
    let mut app = app();
    let rows = render(&mut app, 80, 40, Instant::now());

    assert!(!app.nav_items.is_empty());
    assert!(app.nav_items.iter().all(|item| item.area.y == 1));
    assert!(rows[1].contains("Getting Started"));
}

#[test]
fn test_both_variants_mark_the_active_section() {
    let mut app = app();
    app.select_section("security");

    let wide = render(&mut app, 120, 50, Instant::now());
    let marked: Vec<&String> = wide.iter().filter(|row| row.contains('›')).collect();
    assert_eq!(marked.len(), 1);
    assert!(marked[0].contains("Security"));

    let narrow = render(&mut app, 80, 40, Instant::now());
    assert!(narrow[1].contains("›"));
    assert!(narrow[1].contains("Security"));
    assert!(app.nav_items.iter().any(|item| item.id == SectionId::Security));
}

#[test]
fn test_short_sidebar_keeps_active_section_visible() {
    let mut app = app();
    app.select_section("troubleshooting");
    let rows = render(&mut app, 120, 12, Instant::now());

    let marked: Vec<&String> = rows.iter().filter(|row| row.contains('›')).collect();
    assert_eq!(marked.len(), 1);
    assert!(marked[0].contains("Troubleshooting"));
    assert!(app
        .nav_items
        .iter()
        .any(|item| item.id == SectionId::Troubleshooting));
}

#[test]
fn test_unknown_id_renders_default_page_unmarked() {
    let mut app = AppState::new("nonexistent", Theme::Dark, ColorScheme::Dark);
    let rows = render(&mut app, 120, 50, Instant::now());

    assert!(rows.iter().any(|row| row.contains("Welcome to the A2A Publisher")));
    assert!(!rows.iter().any(|row| row.contains('›')));
}

#[test]
fn test_listing_headers_are_recorded() {
    let mut app = app();
    render(&mut app, 120, 50, Instant::now());

    assert_eq!(app.code_headers.len(), app.content.code_block_count());
    assert!(app.code_headers.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(app.content_area.x, 31);
}

#[test]
fn test_copy_indicator_expires() {
    let mut app = app();
    let now = Instant::now();
    app.copy_block(0, &mut NullClipboard, now);

    let rows = render(&mut app, 120, 50, now);
    assert!(rows.iter().any(|row| row.contains("Copied")));

    let rows = render(&mut app, 120, 50, now + COPY_FEEDBACK);
    assert!(!rows.iter().any(|row| row.contains("Copied")));
    assert!(rows.iter().any(|row| row.contains("copy")));
}

#[test]
fn test_scroll_is_clamped() {
    let mut app = app();
    app.scroll = 10_000;
    render(&mut app, 120, 50, Instant::now());
    assert!(app.scroll < 10_000);
}

#[test]
fn test_theme_message_replaces_help() {
    let mut app = app();
    app.cycle_theme();
    let rows = render(&mut app, 120, 50, Instant::now());
    assert!(rows.iter().any(|row| row.contains("Theme: system")));
}

#[test]
fn test_inline_markup() {
    let spans = inline_spans("Run `pip` **now**", Style::default());
    let texts: Vec<&str> = spans.iter().map(|s| s.content.as_ref()).collect();

    assert_eq!(texts, vec!["Run ", "pip", " ", "now"]);
    assert!(spans[1].style.fg.is_some());
    assert!(spans[3].style.add_modifier.contains(Modifier::BOLD));
    assert!(!spans[0].style.add_modifier.contains(Modifier::BOLD));
}

#[test]
fn test_stars_inside_code_are_literal() {
    let spans = inline_spans("`a ** b`", Style::default());
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].content, "a ** b");
}

#[test]
fn test_wrap_keeps_punctuation_attached() {
    let spans = inline_spans("call `publish`, then wait for the registry", Style::default());
    let blank = Span::raw("");
    let lines = wrap(&spans, 16, &blank, &blank);
    let texts: Vec<String> = lines.iter().map(line_text).collect();

    assert_eq!(texts, vec!["call publish,", "then wait for", "the registry"]);
}

#[test]
fn test_wrap_indents_continuation_lines() {
    let spans = vec![Span::raw("one two three four")];
    let lines = wrap(&spans, 12, &Span::raw("  • "), &Span::raw("    "));
    let texts: Vec<String> = lines.iter().map(line_text).collect();

    assert_eq!(texts, vec!["  • one two", "    three", "    four"]);
}
