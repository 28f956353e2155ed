//! Display theme preference and its resolution to light or dark colours.
//!
//! The theme is user preference (config, CLI, or cycled at runtime). `System` defers to the
//! terminal, which advertises its palette through the `COLORFGBG` convention
//! (`"<fg>;<bg>"` using ANSI colour indices).

use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, clap::ValueEnum)]
/// Display mode preference.
pub enum Theme {
    /// Always light.
    Light,
    /// Always dark.
    Dark,
    /// Follow the terminal.
    #[default]
    System,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// Colour scheme reported by the platform.
pub enum ColorScheme {
    /// Light background.
    Light,
    /// Dark background.
    Dark,
}

impl Theme {
    #[must_use]
    /// Next theme in the light, dark, system cycle.
    pub const fn next(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::System,
            Self::System => Self::Light,
        }
    }

    #[must_use]
    /// Lowercase name used in config files.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme `{0}` (expected light, dark or system)")]
/// A theme name that is not recognised.
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            _ => Err(UnknownTheme(s.to_string())),
        }
    }
}

impl ColorScheme {
    #[must_use]
    /// Query the terminal, assuming dark when it does not say.
    pub fn detect() -> Self {
        std::env::var("COLORFGBG")
            .ok()
            .and_then(|value| Self::from_colorfgbg(&value))
            .unwrap_or(Self::Dark)
    }

    #[must_use]
    /// Interpret a `COLORFGBG` value by its background index.
    pub fn from_colorfgbg(value: &str) -> Option<Self> {
        let background: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
        match background {
            0..=6 | 8 => Some(Self::Dark),
            7 | 9..=15 => Some(Self::Light),
            _ => None,
        }
    }
}

#[must_use]
/// Whether code should be drawn with dark colours.
pub fn is_dark_mode(theme: Theme, platform: ColorScheme) -> bool {
    match theme {
        Theme::Dark => true,
        Theme::Light => false,
        Theme::System => platform == ColorScheme::Dark,
    }
}

#[cfg(test)]
#[path = "tests/theme.rs"]
mod tests;
