//! The main config loading module for rang.
//!
//! Handles loading and deserializing settings from `rang.toml`.
//!
//! Provides the main [Config] struct, as well as the internal [RawConfig] used for parsing.
//! Falls back to the internal defaults when `rang.toml` is missing or invalid.

use crate::config::{General, Keys, Theme};
use crate::utils::get_home;

use serde::Deserialize;
use std::{fs, io, path::Path, path::PathBuf};

/// Raw configuration as read from the toml file
/// This struct is deserialized directly from the toml file and then converted into [Config].
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct RawConfig {
    general: General,
    theme: Theme,
    keys: Keys,
}

/// Main configuration struct for rang
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Config {
    general: General,
    theme: Theme,
    keys: Keys,
}

impl From<RawConfig> for Config {
    fn from(raw: RawConfig) -> Self {
        Self {
            general: raw.general,
            theme: raw.theme,
            keys: raw.keys,
        }
    }
}

/// Outcome of reading the config file, reported once logging is up.
#[derive(Debug)]
pub enum LoadReport {
    Loaded(PathBuf),
    Missing(PathBuf),
    Invalid(PathBuf, String),
}

impl Config {
    /// Load configuration from the default path.
    /// If the file does not exist or fails to parse, returns the default configuration.
    ///
    /// Called by the entry point to load config at startup.
    pub fn load() -> (Self, LoadReport) {
        Self::load_from(&Self::default_path())
    }

    /// Load configuration from an explicit path.
    pub fn load_from(path: &Path) -> (Self, LoadReport) {
        let path_buf = path.to_path_buf();
        match fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<RawConfig>(&content) {
                Ok(raw) => (raw.into(), LoadReport::Loaded(path_buf)),
                Err(e) => (Self::default(), LoadReport::Invalid(path_buf, e.to_string())),
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                (Self::default(), LoadReport::Missing(path_buf))
            }
            Err(e) => (Self::default(), LoadReport::Invalid(path_buf, e.to_string())),
        }
    }

    // Getters

    #[inline]
    pub fn general(&self) -> &General {
        &self.general
    }

    #[inline]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    #[inline]
    pub fn keys(&self) -> &Keys {
        &self.keys
    }

    /// Determine the default configuration file path.
    /// Checks the RANG_CONFIG environment variable first,
    /// Checks for XDG_CONFIG_HOME after,
    /// then defaults to ~/.config/rang/rang.toml,
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var("RANG_CONFIG") {
            return PathBuf::from(path);
        }

        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg_config).join("rang/rang.toml");
        }

        if let Some(home) = get_home() {
            return home.join(".config/rang/rang.toml");
        }
        PathBuf::from("rang.toml")
    }

    /// Generate a default configuration file at the specified path.
    /// If the file already exists, returns an error.
    pub fn generate_default(path: &Path) -> io::Result<()> {
        if path.exists() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("Config file already exists at {:?}", path),
            ));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_TOML)
    }
}

/// Commented default configuration written by `rang --init`.
pub const DEFAULT_TOML: &str = r##"# rang.toml - default configuration for rang

# Note:
# Commented values are the internal defaults of rang
# Use hex codes (eg. "#RRGGBB") or terminal colors ("cyan")

[general]
# move_to_trash = false     # true: deleted entries go to the system trash
# log_level = "info"        # off, error, warn, info, debug, trace
# log_file = "/path/to/rang.log"

# [theme.entry]
# fg = "default"
# bg = "default"

# [theme.selection]
# fg = "black"
# bg = "white"

# [theme.directory]
# fg = "blue"
# bg = "default"

# [theme.selected_directory]
# fg = "black"
# bg = "blue"

# [theme.path]
# fg = "default"
# bg = "default"

# [theme.border]
# fg = "default"
# bg = "default"

# [theme.status]
# fg = "black"
# bg = "yellow"

[keys]
# go_up = ["k", "up"]
# go_down = ["j", "down"]
# go_parent = ["h", "left"]
# go_into_dir = ["l", "right"]
# delete = ["x"]
# rename = ["a"]
# create_directory = ["f7"]
# quit = ["q"]
"##;
