//! Module for managing the application's command-line interface (CLI) theme.
//!
//! This module defines the structure for theme configuration, allowing users
//! to customize the colors of various output elements. It supports 16-color
//! ANSI named colors for foreground styling and provides functionality to
//! load themes from YAML files and manage default theme settings.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use anyhow::{Context, Result};
use owo_colors::AnsiColors;

/// Type alias for the theme map, providing a consistent type definition.
pub type ThemeMap = HashMap<ThemeEntry, ThemeStyle>;

/// The different logical parts of the output that can be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeEntry {
    /// Style for section titles such as "Zero-width positions:".
    Header,
    /// Style for successful operation messages.
    Success,
    /// Style for general informational messages.
    Info,
    /// Style for warning messages.
    Warn,
    /// Style for error messages.
    Error,
    /// Style for the `[ZWSP]`-style tags in a visualization.
    ZeroWidthTag,
    /// Style for the index column of the position list.
    PositionIndex,
    /// Style for the codepoint label of the position list.
    PositionLabel,
}

impl ThemeEntry {
    pub const ALL: [ThemeEntry; 8] = [
        ThemeEntry::Header,
        ThemeEntry::Success,
        ThemeEntry::Info,
        ThemeEntry::Warn,
        ThemeEntry::Error,
        ThemeEntry::ZeroWidthTag,
        ThemeEntry::PositionIndex,
        ThemeEntry::PositionLabel,
    ];
}

/// Color names accepted in a theme file, paired with the ANSI color they select.
const THEME_COLORS: [(&str, AnsiColors); 16] = [
    ("black", AnsiColors::Black),
    ("red", AnsiColors::Red),
    ("green", AnsiColors::Green),
    ("yellow", AnsiColors::Yellow),
    ("blue", AnsiColors::Blue),
    ("magenta", AnsiColors::Magenta),
    ("cyan", AnsiColors::Cyan),
    ("white", AnsiColors::White),
    ("brightblack", AnsiColors::BrightBlack),
    ("brightred", AnsiColors::BrightRed),
    ("brightgreen", AnsiColors::BrightGreen),
    ("brightyellow", AnsiColors::BrightYellow),
    ("brightblue", AnsiColors::BrightBlue),
    ("brightmagenta", AnsiColors::BrightMagenta),
    ("brightcyan", AnsiColors::BrightCyan),
    ("brightwhite", AnsiColors::BrightWhite),
];

/// One of the sixteen named ANSI colors.
///
/// Theme files name colors as strings; anything outside [`THEME_COLORS`] is
/// rejected while the file is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct ThemeColor {
    slot: usize,
}

/// A color name that is not in the 16-color table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseThemeColorError(pub String);

impl fmt::Display for ParseThemeColorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let names: Vec<&str> = THEME_COLORS.iter().map(|(name, _)| *name).collect();
        write!(f, "Invalid theme color '{}'; expected one of: {}.", self.0, names.join(", "))
    }
}

impl std::error::Error for ParseThemeColorError {}

impl FromStr for ThemeColor {
    type Err = ParseThemeColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        THEME_COLORS
            .iter()
            .position(|(name, _)| name.eq_ignore_ascii_case(wanted))
            .map(|slot| ThemeColor { slot })
            .ok_or_else(|| ParseThemeColorError(s.to_string()))
    }
}

impl TryFrom<String> for ThemeColor {
    type Error = ParseThemeColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ThemeColor> for String {
    fn from(color: ThemeColor) -> Self {
        color.name().to_string()
    }
}

impl ThemeColor {
    pub fn name(self) -> &'static str {
        THEME_COLORS[self.slot].0
    }

    pub fn to_ansi_color(self) -> AnsiColors {
        THEME_COLORS[self.slot].1
    }
}

/// Represents the style configuration for a specific `ThemeEntry`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeStyle {
    /// An optional `ThemeColor` to apply as the foreground color.
    pub fg: Option<ThemeColor>,
}

/// Loads a theme configuration from a YAML file or returns the default theme.
pub fn build_theme_map(theme_path: Option<&PathBuf>) -> Result<ThemeMap> {
    if let Some(path) = theme_path {
        ThemeStyle::load_from_file(path)
    } else {
        Ok(ThemeStyle::default_theme_map())
    }
}

impl ThemeStyle {
    /// Loads a theme from a YAML file on disk; entries it omits keep their default colors.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ThemeMap> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read theme file {}", path.display()))?;
        let custom: ThemeMap = serde_yaml::from_str(&text)
            .with_context(|| format!("Failed to parse theme file {}", path.display()))?;

        let mut merged = Self::default_theme_map();
        merged.extend(custom);
        Ok(merged)
    }

    /// Returns a default theme map with predefined color mappings.
    pub fn default_theme_map() -> ThemeMap {
        let defaults = [
            (ThemeEntry::Header, "brightwhite"),
            (ThemeEntry::Success, "green"),
            (ThemeEntry::Info, "cyan"),
            (ThemeEntry::Warn, "yellow"),
            (ThemeEntry::Error, "red"),
            (ThemeEntry::ZeroWidthTag, "brightmagenta"),
            (ThemeEntry::PositionIndex, "yellow"),
            (ThemeEntry::PositionLabel, "white"),
        ];
        defaults
            .into_iter()
            .map(|(entry, name)| {
                let fg = name.parse::<ThemeColor>().ok();
                (entry, ThemeStyle { fg })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_named_colors() {
        assert!("red".parse::<ThemeColor>().is_ok());
        assert_eq!("BrightGreen".parse::<ThemeColor>().unwrap().name(), "brightgreen");
        let err = "unknown".parse::<ThemeColor>().unwrap_err();
        assert!(err.to_string().contains("'unknown'"));
    }

    #[test]
    fn name_maps_to_ansi_color() {
        let tc: ThemeColor = "blue".parse().unwrap();
        assert_eq!(tc.to_ansi_color(), AnsiColors::Blue);
        let tc: ThemeColor = "brightmagenta".parse().unwrap();
        assert_eq!(tc.to_ansi_color(), AnsiColors::BrightMagenta);
        assert_eq!(String::from(tc), "brightmagenta");
    }

    #[test]
    fn default_theme_covers_every_entry() {
        let theme = ThemeStyle::default_theme_map();
        for entry in ThemeEntry::ALL {
            assert!(theme.get(&entry).and_then(|s| s.fg).is_some(), "missing {:?}", entry);
        }
    }

    #[test]
    fn theme_file_overrides_single_entry() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "zero_width_tag:\n  fg: green").unwrap();
        let theme = ThemeStyle::load_from_file(file.path()).unwrap();
        assert_eq!(
            theme.get(&ThemeEntry::ZeroWidthTag).and_then(|s| s.fg).map(ThemeColor::name),
            Some("green")
        );
        assert_eq!(theme.len(), ThemeEntry::ALL.len());
    }

    #[test]
    fn theme_file_with_unknown_color_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "error:\n  fg: purple").unwrap();
        let err = build_theme_map(Some(&file.path().to_path_buf())).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("Failed to parse theme file"), "{}", message);
        assert!(message.contains("purple"), "{}", message);
    }
}
