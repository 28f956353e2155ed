//! Key and mouse bindings of the viewer.
//!
//! Status messages last until the next key press: every key clears the message first, and a
//! binding that reports something sets a fresh one.

use crate::app_state::AppState;
use crate::clipboard::ClipboardSink;
use ratatui::crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use std::time::Instant;

/// Lines scrolled per mouse wheel notch.
pub const WHEEL_STEP: isize = 3;

/// Apply a key press. Returns `true` when the viewer should exit.
pub fn handle_key(
    app: &mut AppState,
    clipboard: &mut dyn ClipboardSink,
    key: KeyEvent,
    now: Instant,
) -> bool {
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);
    let page = isize::try_from(app.content_area.height.saturating_sub(1).max(1)).unwrap_or(1);
    app.message = None;

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return true,
        // Shift+Up/Down: scroll the page by a line
        KeyCode::Up if shift => app.scroll_by(-1),
        KeyCode::Down if shift => app.scroll_by(1),
        KeyCode::Up | KeyCode::Left | KeyCode::Char('k' | 'h') => app.prev_section(),
        KeyCode::Down | KeyCode::Right | KeyCode::Char('j' | 'l') => app.next_section(),
        KeyCode::Home | KeyCode::Char('g') => app.first_section(),
        KeyCode::End | KeyCode::Char('G') => app.last_section(),
        KeyCode::PageUp => app.scroll_by(-page),
        KeyCode::PageDown | KeyCode::Char(' ') => app.scroll_by(page),
        KeyCode::Tab | KeyCode::Char('n') => app.focus_next_block(),
        KeyCode::BackTab | KeyCode::Char('N') => app.focus_prev_block(),
        KeyCode::Char('y') | KeyCode::Enter => {
            if !app.copy_focused(clipboard, now) {
                app.message = Some("Press Tab to pick a code block to copy".to_string());
            }
        }
        KeyCode::Char('t') => app.cycle_theme(),
        KeyCode::Char(digit @ '1'..='9') => {
            if let Some(number) = digit.to_digit(10).and_then(|d| usize::try_from(d).ok()) {
                app.select_number(number);
            }
        }
        _ => {}
    }
    false
}

/// Apply a mouse event: left click selects or copies, the wheel scrolls the page.
pub fn handle_mouse(
    app: &mut AppState,
    clipboard: &mut dyn ClipboardSink,
    mouse: MouseEvent,
    now: Instant,
) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            app.click(mouse.column, mouse.row, clipboard, now);
        }
        MouseEventKind::ScrollUp => app.scroll_by(-WHEEL_STEP),
        MouseEventKind::ScrollDown => app.scroll_by(WHEEL_STEP),
        _ => {}
    }
}

#[cfg(test)]
#[path = "tests/keymap.rs"]
mod tests;
