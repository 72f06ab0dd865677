//! Theme configuration options for rang
//!
//! This module defines the theme configuration options which are read from the rang.toml
//! configuration file, and maps the layout engine's [StyleToken]s to ratatui styles.

use crate::ui::layout::StyleToken;
use crate::utils::parse_color;

use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

use std::sync::LazyLock;

/// Theme configuration options
/// Holds the colors of every style token the browser draws with.
/// # Examples
/// ```toml
/// [theme.directory]
/// fg = "cyan"
/// [theme.selection]
/// fg = "black"
/// bg = "#d0d0d0"
/// ```
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Theme {
    entry: ColorPair,
    selection: ColorPair,
    directory: ColorPair,
    selected_directory: ColorPair,
    path: ColorPair,
    border: ColorPair,
    status: ColorPair,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            entry: ColorPair::default(),
            selection: ColorPair {
                fg: Color::Black,
                bg: Color::White,
            },
            directory: ColorPair {
                fg: Color::Blue,
                ..ColorPair::default()
            },
            selected_directory: ColorPair {
                fg: Color::Black,
                bg: Color::Blue,
            },
            path: ColorPair::default(),
            border: ColorPair {
                fg: Color::Indexed(238),
                ..ColorPair::default()
            },
            status: ColorPair {
                fg: Color::Black,
                bg: Color::Yellow,
            },
        }
    }
}

impl Theme {
    /// Get internal default theme reference
    /// Used for fallback when a color is set to Reset
    pub fn internal_defaults() -> &'static Self {
        static DEFAULT: LazyLock<Theme> = LazyLock::new(Theme::default);
        &DEFAULT
    }

    /// Resolves a style token to the style it is drawn with.
    /// Directory tokens are always bold.
    pub fn style_for(&self, token: StyleToken) -> Style {
        let defaults = Theme::internal_defaults();
        match token {
            StyleToken::Normal => self.entry.style_or(&defaults.entry),
            StyleToken::Selected => self.selection.style_or(&defaults.selection),
            StyleToken::Directory => self
                .directory
                .style_or(&defaults.directory)
                .add_modifier(Modifier::BOLD),
            StyleToken::SelectedDirectory => self
                .selected_directory
                .style_or(&defaults.selected_directory)
                .add_modifier(Modifier::BOLD),
            StyleToken::Path => self.path.style_or(&defaults.path),
            StyleToken::Border => self.border.style_or(&defaults.border),
            StyleToken::Status => self.status.style_or(&defaults.status),
        }
    }
}

/// ColorPair struct to hold foreground and background colors.
/// Used throughout the theme configuration.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ColorPair {
    #[serde(default, deserialize_with = "deserialize_color_field")]
    fg: Color,
    #[serde(default, deserialize_with = "deserialize_color_field")]
    bg: Color,
}

/// Sets both foreground and background to Color::Reset
impl Default for ColorPair {
    fn default() -> Self {
        Self {
            fg: Color::Reset,
            bg: Color::Reset,
        }
    }
}

impl ColorPair {
    /// Resolves the ColorPair by replacing Reset colors with those from another ColorPair.
    pub fn resolve(&self, other: &ColorPair) -> Self {
        Self {
            fg: if self.fg == Color::Reset {
                other.fg
            } else {
                self.fg
            },
            bg: if self.bg == Color::Reset {
                other.bg
            } else {
                self.bg
            },
        }
    }

    /// Converts the ColorPair to a Style, falling back to the provided ColorPair for Reset colors.
    pub fn style_or(&self, fallback: &ColorPair) -> Style {
        let resolved = self.resolve(fallback);
        Style::default().fg(resolved.fg).bg(resolved.bg)
    }
}

fn deserialize_color_field<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(parse_color(&s))
}
