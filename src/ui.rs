//! The UI renders the application state into something visible and clickable.
//!
//! Every frame lays out the navigation (sidebar or strip, by terminal width), the content pane
//! and the help bar, then writes the resulting geometry back into [`AppState`] so mouse events
//! can be resolved against what was actually drawn.

use crate::app_state::AppState;
use crate::config::Config;
use crate::content::{self, CodeBlock};
use crate::highlight::CodeBlockRenderer;
use crate::navigation::{self, NavVariant};
use crate::section;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::time::Instant;

/// Width of the sidebar including its borders.
pub const SIDEBAR_WIDTH: u16 = 30;

const BULLET: &str = "  • ";
const BULLET_INDENT: &str = "    ";
const CALLOUT_BAR: &str = "▌ ";

/// Renders one frame and records its geometry in `app`.
pub fn draw(
    f: &mut Frame,
    app: &mut AppState,
    renderer: &mut CodeBlockRenderer,
    cfg: &Config,
    now: Instant,
) {
    let area = f.area();
    let variant = NavVariant::for_width(area.width, cfg.narrow_width());

    let (nav_area, content_area, help_area) = match variant {
        NavVariant::Sidebar => {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(3)])
                .split(area);
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
                .split(rows[0]);
            (columns[0], columns[1], rows[1])
        }
        NavVariant::Strip => {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3), // Navigation strip
                    Constraint::Min(0),    // Page
                    Constraint::Length(3), // Help
                ])
                .split(area);
            (rows[0], rows[1], rows[2])
        }
    };

    draw_navigation(f, app, variant, nav_area);
    draw_content(f, app, renderer, content_area, now);
    draw_help(f, app, help_area);
}

fn draw_navigation(f: &mut Frame, app: &mut AppState, variant: NavVariant, area: Rect) {
    let items = match variant {
        NavVariant::Sidebar => navigation::sidebar_items(area, app.current_section()),
        NavVariant::Strip => navigation::strip_items(area, app.current_section()),
    };

    let block = Block::default().borders(Borders::ALL).title("Documentation");
    f.render_widget(block, area);

    for item in &items {
        let mut text = navigation::label(section::descriptor(item.id), variant);
        // Highlight follows the stored id, so an unknown id highlights nothing.
        let style = if item.id.as_str() == app.current_id() {
            text = text.replacen(' ', "›", 1);
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default()
        };
        f.render_widget(Paragraph::new(Line::styled(text, style)), item.area);
    }

    app.nav_items = items;
}

fn draw_content(
    f: &mut Frame,
    app: &mut AppState,
    renderer: &mut CodeBlockRenderer,
    area: Rect,
    now: Instant,
) {
    let inner = Block::default().borders(Borders::ALL).inner(area);

    let page = build_page(app, renderer, usize::from(inner.width), now);
    let visible = usize::from(inner.height);
    let total = page.lines.len();
    app.scroll = app.scroll.min(total.saturating_sub(visible));
    app.content_area = inner;
    app.code_headers = page.code_headers;

    let position = format!(" {}/{} ", (app.scroll + visible).min(total), total);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" A2A Publisher Docs ")
        .title_bottom(Line::from(position).right_aligned());
    f.render_widget(block, area);

    let shown: Vec<Line<'static>> = page
        .lines
        .into_iter()
        .skip(app.scroll)
        .take(visible)
        .collect();
    f.render_widget(Paragraph::new(shown), inner);
}

fn draw_help(f: &mut Frame, app: &AppState, area: Rect) {
    let help = match &app.message {
        Some(message) => message.clone(),
        None => format!(
            concat!(
                "↑/↓: Section | 1-9: Jump | PgUp/PgDn: Scroll | Tab: Code | y: Copy | ",
                "t: Theme ({}) | q: Quit"
            ),
            app.theme
        ),
    };
    let help_widget = Paragraph::new(help).block(Block::default().borders(Borders::ALL));
    f.render_widget(help_widget, area);
}

/// Laid-out page: every line of the content pane plus the line index of each listing header.
struct Page {
    lines: Vec<Line<'static>>,
    code_headers: Vec<usize>,
}

fn build_page(
    app: &AppState,
    renderer: &mut CodeBlockRenderer,
    width: usize,
    now: Instant,
) -> Page {
    let dark = app.is_dark_mode();
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut code_headers = Vec::new();
    let blank = Span::raw("");

    for (i, block) in app.content.blocks.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        match block {
            content::Block::Heading { level, text } => {
                let style = heading_style(*level);
                lines.extend(wrap(&inline_spans(text, style), width, &blank, &blank));
            }
            content::Block::Paragraph { text } => {
                lines.extend(wrap(
                    &inline_spans(text, Style::default()),
                    width,
                    &blank,
                    &blank,
                ));
            }
            content::Block::List { items } => {
                let bullet = Span::styled(BULLET, Style::default().fg(Color::Cyan));
                let indent = Span::raw(BULLET_INDENT);
                for item in items {
                    lines.extend(wrap(
                        &inline_spans(item, Style::default()),
                        width,
                        &bullet,
                        &indent,
                    ));
                }
            }
            content::Block::Callout { text } => {
                let bar = Span::styled(CALLOUT_BAR, Style::default().fg(Color::Yellow));
                let style = Style::default().add_modifier(Modifier::ITALIC);
                lines.extend(wrap(&inline_spans(text, style), width, &bar, &bar));
            }
            content::Block::Code(code) => {
                let index = code_headers.len();
                code_headers.push(lines.len());
                let focused = app.focused_block == Some(index);
                let copied = app.just_copied(index, now);
                lines.extend(code_lines(code, renderer, width, dark, focused, copied));
            }
        }
    }

    Page {
        lines,
        code_headers,
    }
}

fn heading_style(level: u8) -> Style {
    match level {
        1 => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        2 => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        _ => Style::default().add_modifier(Modifier::BOLD),
    }
}

fn code_lines(
    code: &CodeBlock,
    renderer: &mut CodeBlockRenderer,
    width: usize,
    dark: bool,
    focused: bool,
    copied: bool,
) -> Vec<Line<'static>> {
    let border = Style::default().fg(Color::DarkGray);
    let background = renderer.highlighter().background(dark);

    let caption = match &code.title {
        Some(title) => format!("┌─ {title} · {} ", code.language),
        None => format!("┌─ {} ", code.language),
    };
    let (action, action_style) = if copied {
        (" ✓ Copied ", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
    } else {
        (" ⧉ copy ", Style::default().fg(Color::Gray))
    };
    let fill =
        width.saturating_sub(Span::raw(caption.as_str()).width() + Span::raw(action).width());
    let mut header = Line::from(vec![
        Span::styled(caption, border.add_modifier(Modifier::BOLD)),
        Span::styled("─".repeat(fill), border),
        Span::styled(action, action_style),
    ]);
    if focused {
        header = header.style(Style::default().add_modifier(Modifier::REVERSED));
    }

    let mut lines = vec![header];
    for source in renderer.lines(code, dark) {
        let mut spans = vec![Span::styled("│ ", border)];
        spans.extend(source.spans.iter().cloned());
        let mut line = Line::from(spans);
        if let Some(bg) = background {
            line = line.style(Style::default().bg(bg));
        }
        lines.push(line);
    }
    lines.push(Line::styled(
        format!("└{}", "─".repeat(width.saturating_sub(1))),
        border,
    ));
    lines
}

/// Split text with inline markup into styled spans. Backticks toggle code style and `**` toggles
/// bold outside code.
fn inline_spans(text: &str, base: Style) -> Vec<Span<'static>> {
    let style = |code: bool, bold: bool| {
        let mut style = base;
        if code {
            style = style.fg(Color::Yellow);
        }
        if bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        style
    };

    let mut spans = Vec::new();
    let mut buffer = String::new();
    let mut code = false;
    let mut bold = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        let toggles_code = ch == '`';
        let toggles_bold = !code && ch == '*' && chars.peek() == Some(&'*');
        if !toggles_code && !toggles_bold {
            buffer.push(ch);
            continue;
        }
        if !buffer.is_empty() {
            spans.push(Span::styled(std::mem::take(&mut buffer), style(code, bold)));
        }
        if toggles_code {
            code = !code;
        } else {
            chars.next();
            bold = !bold;
        }
    }
    if !buffer.is_empty() {
        spans.push(Span::styled(buffer, style(code, bold)));
    }
    spans
}

struct Word {
    span: Span<'static>,
    space_before: bool,
}

fn words(spans: &[Span<'static>]) -> Vec<Word> {
    let mut words = Vec::new();
    let mut pending_space = false;
    for span in spans {
        let mut current = String::new();
        let mut space_before = false;
        for ch in span.content.chars() {
            if ch.is_whitespace() {
                if !current.is_empty() {
                    words.push(Word {
                        span: Span::styled(std::mem::take(&mut current), span.style),
                        space_before,
                    });
                }
                pending_space = true;
            } else {
                if current.is_empty() {
                    space_before = pending_space;
                    pending_space = false;
                }
                current.push(ch);
            }
        }
        if !current.is_empty() {
            words.push(Word {
                span: Span::styled(current, span.style),
                space_before,
            });
        }
    }
    words
}

/// Greedy word wrap. `first` prefixes the first line and `rest` every following one.
fn wrap(
    spans: &[Span<'static>],
    width: usize,
    first: &Span<'static>,
    rest: &Span<'static>,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut current = vec![first.clone()];
    let mut used = first.width();
    let mut empty = true;

    for word in words(spans) {
        let gap = usize::from(word.space_before && !empty);
        let word_width = word.span.width();
        if !empty && used + gap + word_width > width {
            lines.push(Line::from(std::mem::replace(&mut current, vec![rest.clone()])));
            used = rest.width();
        } else if gap == 1 {
            current.push(Span::raw(" "));
            used += 1;
        }
        used += word_width;
        current.push(word.span);
        empty = false;
    }
    lines.push(Line::from(current));
    lines
}

#[cfg(test)]
#[path = "tests/ui.rs"]
mod tests;
