//! Configuration to acknowledge reader preferences as well as set defaults.
//!
//! Specifically, we try to find an a2a-docs.toml, and if present we load settings from there.
//! This provides the starting section, theme, layout breakpoint and highlighting themes.

use crate::highlight::{DEFAULT_DARK_THEME, DEFAULT_LIGHT_THEME};
use crate::section::SectionId;
use crate::theme::Theme;
use facet::Facet;
use std::fs;
use std::path::{Path, PathBuf};

/// File looked up in the working directory when no path is given.
pub const CONFIG_FILE: &str = "a2a-docs.toml";

#[derive(Facet, Clone, Debug, PartialEq)]
/// User preferences loaded from a2a-docs.toml or falling back to defaults.
pub struct Config {
    #[facet(default = "system".to_string())]
    /// Theme preference: light, dark or system.
    pub theme: String,
    #[facet(default = "getting-started".to_string())]
    /// Section shown at startup.
    pub default_section: String,
    #[facet(default = 100)]
    /// Terminal width below which the navigation collapses into a strip.
    pub narrow_width: usize,
    #[facet(default = DEFAULT_DARK_THEME.to_string())]
    /// Syntect theme for dark mode.
    pub dark_syntax_theme: String,
    #[facet(default = DEFAULT_LIGHT_THEME.to_string())]
    /// Syntect theme for light mode.
    pub light_syntax_theme: String,
    #[facet(default)]
    /// Log file; logging is off when unset.
    pub log_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme::default().as_str().to_string(),
            default_section: SectionId::default().as_str().to_string(),
            narrow_width: 100,
            dark_syntax_theme: DEFAULT_DARK_THEME.to_string(),
            light_syntax_theme: DEFAULT_LIGHT_THEME.to_string(),
            log_file: None,
        }
    }
}

impl Config {
    #[must_use]
    /// Load configuration from a2a-docs.toml if present.
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    #[must_use]
    /// Load configuration from `path`. A missing file gives the defaults, as does one that
    /// fails to parse (with a warning on stderr).
    pub fn load_from(path: &Path) -> Self {
        let Ok(contents) = fs::read_to_string(path) else {
            return Self::default();
        };
        if let Ok(config) = facet_toml::from_str::<Self>(&contents) {
            return config;
        }
        eprintln!(
            "Ignoring {}: not a valid configuration file",
            path.display()
        );
        Self::default()
    }

    #[must_use]
    /// Theme preference, [`Theme::System`] if the configured name is unknown.
    pub fn theme(&self) -> Theme {
        self.theme.parse().unwrap_or_default()
    }

    #[must_use]
    /// Breakpoint in terminal columns.
    pub fn narrow_width(&self) -> u16 {
        u16::try_from(self.narrow_width).unwrap_or(u16::MAX)
    }

    #[must_use]
    /// Log file path, if logging is configured.
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file.as_ref().map(PathBuf::from)
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
