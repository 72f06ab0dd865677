//! The general configuration settings for rang.
//!
//! Deletion behaviour and logging setup, read from the `[general]` table of rang.toml.

use crate::utils::default_log_path;

use log::LevelFilter;
use serde::Deserialize;

use std::path::PathBuf;

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct General {
    move_to_trash: bool,
    log_level: String,
    log_file: Option<PathBuf>,
}

impl Default for General {
    fn default() -> Self {
        General {
            move_to_trash: false,
            log_level: "info".into(),
            log_file: None,
        }
    }
}

impl General {
    #[inline]
    pub fn move_to_trash(&self) -> bool {
        self.move_to_trash
    }

    /// Parsed log level; unknown values fall back to `info`.
    pub fn log_level(&self) -> LevelFilter {
        self.log_level.trim().parse().unwrap_or(LevelFilter::Info)
    }

    /// Where log records go: the configured file or the default cache location.
    pub fn log_file(&self) -> PathBuf {
        self.log_file.clone().unwrap_or_else(default_log_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_parsing() -> Result<(), Box<dyn std::error::Error>> {
        let g: General = toml::from_str(r#"log_level = "debug""#)?;
        assert_eq!(g.log_level(), LevelFilter::Debug);

        let g: General = toml::from_str(r#"log_level = "OFF""#)?;
        assert_eq!(g.log_level(), LevelFilter::Off);

        let g: General = toml::from_str(r#"log_level = "chatty""#)?;
        assert_eq!(g.log_level(), LevelFilter::Info);
        Ok(())
    }

    #[test]
    fn log_file_override() -> Result<(), Box<dyn std::error::Error>> {
        let g: General = toml::from_str(r#"log_file = "/tmp/rang-test.log""#)?;
        assert_eq!(g.log_file(), PathBuf::from("/tmp/rang-test.log"));
        assert_eq!(General::default().log_file(), default_log_path());
        Ok(())
    }
}
