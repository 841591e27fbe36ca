//! Theme management and ANSI escape sequence generation.
//!
//! The plugin renders with one of two themes, chosen by the persisted dark
//! mode preference. Both are built-in Catppuccin variants by default and can
//! be replaced by name or by a custom TOML file.
//!
//! # Built-in Themes
//!
//! - `catppuccin-latte`: light (default light theme)
//! - `catppuccin-mocha`: dark (default dark theme)
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#f5c2e7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! search_bar_border = "#f5c2e7"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! saved_fg = "#f38ba8"
//! error_fg = "#f38ba8"
//! accent_fg = "#a6e3a1"
//! ```

use crate::domain::{BookfinderError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_LIGHT_THEME: &str = "catppuccin-latte";
pub const DEFAULT_DARK_THEME: &str = "catppuccin-mocha";

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as hex strings (e.g. "#cdd6f4").
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    pub selection_fg: String,
    pub selection_bg: String,

    pub text_normal: String,
    /// Footer, authors and other secondary text.
    pub text_dim: String,

    pub border: String,

    pub search_bar_border: String,
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    /// Welcome and empty-list messages.
    pub empty_state_fg: String,

    /// Saved marker and saved count.
    pub saved_fg: String,

    /// Error banner.
    pub error_fg: String,

    /// Headings and the loading indicator.
    pub accent_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`BookfinderError::Theme`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| BookfinderError::Theme(format!("failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| BookfinderError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Plain palette used when a built-in theme cannot be loaded.
    #[must_use]
    pub fn fallback() -> Self {
        let color = |hex: &str| hex.to_string();
        Self {
            name: "fallback".to_string(),
            colors: ThemeColors {
                header_fg: color("#ffffff"),
                header_bg: None,
                selection_fg: color("#000000"),
                selection_bg: color("#c0c0c0"),
                text_normal: color("#e0e0e0"),
                text_dim: color("#808080"),
                border: color("#606060"),
                search_bar_border: color("#c0c0c0"),
                match_highlight_fg: color("#000000"),
                match_highlight_bg: color("#ffff00"),
                empty_state_fg: color("#87afff"),
                saved_fg: color("#ff5f87"),
                error_fg: color("#ff5f5f"),
                accent_fg: color("#87d787"),
            },
        }
    }

    /// Converts a hex color to RGB, falling back to white on parse errors.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// ANSI 24-bit foreground escape for `hex`.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background escape for `hex`.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_name(DEFAULT_DARK_THEME).unwrap_or_else(Self::fallback)
    }
}

/// The light and dark themes the dark mode preference switches between.
#[derive(Debug, Clone)]
pub struct ThemePair {
    pub light: Theme,
    pub dark: Theme,
}

impl ThemePair {
    /// Resolves the pair from configuration.
    ///
    /// A custom `theme_file` replaces both themes. Unknown names and
    /// unreadable files fall back to the built-in defaults with a warning.
    #[must_use]
    pub fn load(light: &str, dark: &str, theme_file: Option<&str>) -> Self {
        if let Some(path) = theme_file {
            match Theme::from_file(path) {
                Ok(theme) => {
                    return Self {
                        light: theme.clone(),
                        dark: theme,
                    };
                }
                Err(e) => tracing::warn!(path, error = %e, "custom theme unavailable, using built-in themes"),
            }
        }

        Self {
            light: named_or_default(light, DEFAULT_LIGHT_THEME),
            dark: named_or_default(dark, DEFAULT_DARK_THEME),
        }
    }

    /// Returns the dark theme when `dark` is set, the light one otherwise.
    #[must_use]
    pub const fn select(&self, dark: bool) -> &Theme {
        if dark {
            &self.dark
        } else {
            &self.light
        }
    }
}

impl Default for ThemePair {
    fn default() -> Self {
        Self::load(DEFAULT_LIGHT_THEME, DEFAULT_DARK_THEME, None)
    }
}

fn named_or_default(name: &str, default: &str) -> Theme {
    Theme::from_name(name).unwrap_or_else(|| {
        tracing::warn!(theme = name, "unknown theme name, using {default}");
        Theme::from_name(default).unwrap_or_else(Theme::fallback)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_themes_parse() {
        assert_eq!(Theme::from_name("catppuccin-latte").unwrap().name, "catppuccin-latte");
        assert_eq!(Theme::from_name("catppuccin-mocha").unwrap().name, "catppuccin-mocha");
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn pair_selects_by_preference() {
        let pair = ThemePair::default();
        assert_eq!(pair.select(false).name, DEFAULT_LIGHT_THEME);
        assert_eq!(pair.select(true).name, DEFAULT_DARK_THEME);
    }

    #[test]
    fn unknown_names_fall_back() {
        let pair = ThemePair::load("nope", "also-nope", None);
        assert_eq!(pair.light.name, DEFAULT_LIGHT_THEME);
        assert_eq!(pair.dark.name, DEFAULT_DARK_THEME);
    }

    #[test]
    fn custom_file_replaces_both() {
        let builtin = include_str!("../../themes/catppuccin-mocha.toml")
            .replace("catppuccin-mocha", "custom");
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(builtin.as_bytes()).unwrap();

        let pair = ThemePair::load(DEFAULT_LIGHT_THEME, DEFAULT_DARK_THEME, file.path().to_str());
        assert_eq!(pair.light.name, "custom");
        assert_eq!(pair.dark.name, "custom");
    }

    #[test]
    fn bad_file_is_reported_as_theme_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"name = 3").unwrap();
        assert!(matches!(Theme::from_file(file.path()), Err(BookfinderError::Theme(_))));
    }

    #[test]
    fn escapes_use_rgb() {
        assert_eq!(Theme::fg("#1e1e2e"), "\u{1b}[38;2;30;30;46m");
        assert_eq!(Theme::bg("zzz"), "\u{1b}[48;2;255;255;255m");
    }
}
