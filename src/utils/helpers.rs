//! Helpers for rang.
//!
//! - Color parsing from names or hex codes for the theme
//! - Home and cache directory lookup for the config and log files

use ratatui::style::Color;
use std::path::PathBuf;

/// Parses a string (color name or hex) into a ratatui::style::Color
///
/// Supports standard names (red, green, etc.) as well as hex values (#RRGGBB or #RGB).
/// Anything unrecognised falls back to the terminal default.
pub fn parse_color(s: &str) -> Color {
    match s.to_lowercase().as_str() {
        "default" | "reset" => Color::Reset,
        "yellow" => Color::Yellow,
        "red" => Color::Red,
        "blue" => Color::Blue,
        "green" => Color::Green,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        "black" => Color::Black,
        "gray" | "grey" => Color::Gray,
        "darkgray" | "darkgrey" => Color::DarkGray,
        _ => s.strip_prefix('#').and_then(parse_hex).unwrap_or(Color::Reset),
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    let expanded = match hex.len() {
        6 => hex.to_string(),
        3 => hex.chars().flat_map(|c| [c, c]).collect(),
        _ => return None,
    };
    let rgb = u32::from_str_radix(&expanded, 16).ok()?;
    Some(Color::Rgb(
        ((rgb >> 16) & 0xFF) as u8,
        ((rgb >> 8) & 0xFF) as u8,
        (rgb & 0xFF) as u8,
    ))
}

/// Returns the home directory of the current user, if any.
pub fn get_home() -> Option<PathBuf> {
    dirs::home_dir()
}

/// Default location of the log file: `<cache dir>/rang/rang.log`.
pub fn default_log_path() -> PathBuf {
    dirs::cache_dir()
        .map(|dir| dir.join("rang"))
        .unwrap_or_else(std::env::temp_dir)
        .join("rang.log")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_and_hex_colors() {
        assert_eq!(parse_color("Red"), Color::Red);
        assert_eq!(parse_color("default"), Color::Reset);
        assert_eq!(parse_color("#102030"), Color::Rgb(0x10, 0x20, 0x30));
        assert_eq!(parse_color("#abc"), Color::Rgb(0xaa, 0xbb, 0xcc));
    }

    #[test]
    fn bad_colors_fall_back_to_reset() {
        for s in ["", "#12", "#zzzzzz", "ultraviolet", "#1234567"] {
            assert_eq!(parse_color(s), Color::Reset, "{s:?}");
        }
    }

    #[test]
    fn log_path_ends_with_file_name() {
        assert!(default_log_path().ends_with("rang.log"));
    }
}
