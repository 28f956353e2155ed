//! Syntax highlighting of code listings.
//!
//! Listings are highlighted with syntect's bundled grammars and themes and converted into
//! ratatui lines. A language tag syntect does not know is not an error: the listing is shown
//! unstyled, one line per source line, exactly as it would be copied.

use crate::content::CodeBlock;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use std::collections::HashMap;
use syntect::easy::HighlightLines;
use syntect::highlighting::{FontStyle, Style as SyntectStyle, Theme as SyntectTheme, ThemeSet};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

/// Syntect theme used in dark mode unless configured otherwise.
pub const DEFAULT_DARK_THEME: &str = "base16-ocean.dark";
/// Syntect theme used in light mode unless configured otherwise.
pub const DEFAULT_LIGHT_THEME: &str = "InspiredGitHub";

/// Loaded grammars plus the dark and light colour themes.
pub struct Highlighter {
    syntaxes: SyntaxSet,
    dark: SyntectTheme,
    light: SyntectTheme,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter {
    #[must_use]
    /// Highlighter with the default themes.
    pub fn new() -> Self {
        Self::with_themes(DEFAULT_DARK_THEME, DEFAULT_LIGHT_THEME)
    }

    #[must_use]
    /// Highlighter with named syntect themes. Unknown names fall back to the defaults.
    pub fn with_themes(dark: &str, light: &str) -> Self {
        let themes = ThemeSet::load_defaults();
        Self {
            syntaxes: SyntaxSet::load_defaults_newlines(),
            dark: pick_theme(&themes, dark, DEFAULT_DARK_THEME),
            light: pick_theme(&themes, light, DEFAULT_LIGHT_THEME),
        }
    }

    fn syntax(&self, language: &str) -> Option<&SyntaxReference> {
        if language.is_empty() {
            return None;
        }
        self.syntaxes.find_syntax_by_token(language)
    }

    #[must_use]
    /// Whether `language` gets syntax colouring.
    pub fn is_supported(&self, language: &str) -> bool {
        self.syntax(language).is_some()
    }

    #[must_use]
    /// Background colour of the active theme.
    pub fn background(&self, dark: bool) -> Option<Color> {
        let theme = if dark { &self.dark } else { &self.light };
        theme
            .settings
            .background
            .map(|c| Color::Rgb(c.r, c.g, c.b))
    }

    #[must_use]
    /// Highlight `text`, producing one line per source line.
    pub fn highlight(&self, text: &str, language: &str, dark: bool) -> Vec<Line<'static>> {
        let Some(syntax) = self.syntax(language) else {
            return plain_lines(text);
        };
        let theme = if dark { &self.dark } else { &self.light };
        let mut highlighter = HighlightLines::new(syntax, theme);

        LinesWithEndings::from(text)
            .map(|line| match highlighter.highlight_line(line, &self.syntaxes) {
                Ok(ranges) => Line::from(
                    ranges
                        .into_iter()
                        .map(|(style, piece)| {
                            Span::styled(strip_newline(piece).to_string(), convert_style(style))
                        })
                        .collect::<Vec<_>>(),
                ),
                Err(err) => {
                    tracing::debug!(%err, language, "highlighting failed for line");
                    Line::raw(strip_newline(line).to_string())
                }
            })
            .collect()
    }
}

fn pick_theme(themes: &ThemeSet, name: &str, fallback: &str) -> SyntectTheme {
    if let Some(theme) = themes.themes.get(name) {
        return theme.clone();
    }
    tracing::warn!(name, fallback, "unknown syntax theme");
    themes.themes.get(fallback).cloned().unwrap_or_default()
}

fn strip_newline(text: &str) -> &str {
    text.trim_end_matches(['\n', '\r'])
}

fn plain_lines(text: &str) -> Vec<Line<'static>> {
    text.lines().map(|line| Line::raw(line.to_string())).collect()
}

fn convert_style(style: SyntectStyle) -> Style {
    let fg = style.foreground;
    let mut converted = Style::default().fg(Color::Rgb(fg.r, fg.g, fg.b));
    if style.font_style.contains(FontStyle::BOLD) {
        converted = converted.add_modifier(Modifier::BOLD);
    }
    if style.font_style.contains(FontStyle::ITALIC) {
        converted = converted.add_modifier(Modifier::ITALIC);
    }
    if style.font_style.contains(FontStyle::UNDERLINE) {
        converted = converted.add_modifier(Modifier::UNDERLINED);
    }
    converted
}

/// Highlights listings once per colour mode and reuses the result across frames.
pub struct CodeBlockRenderer {
    highlighter: Highlighter,
    cache: HashMap<(String, bool), Vec<Line<'static>>>,
}

impl CodeBlockRenderer {
    #[must_use]
    /// Renderer over a configured highlighter.
    pub fn new(highlighter: Highlighter) -> Self {
        Self {
            highlighter,
            cache: HashMap::new(),
        }
    }

    #[must_use]
    /// The underlying highlighter.
    pub fn highlighter(&self) -> &Highlighter {
        &self.highlighter
    }

    /// Highlighted lines of a listing.
    pub fn lines(&mut self, block: &CodeBlock, dark: bool) -> &[Line<'static>] {
        self.cache
            .entry((block.key.clone(), dark))
            .or_insert_with(|| self.highlighter.highlight(block.text, block.language, dark))
    }
}

#[cfg(test)]
#[path = "tests/highlight.rs"]
mod tests;
