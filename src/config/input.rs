//! Input configuration options for rang
//!
//! This module defines the key bindings which are read from the `[keys]` table of rang.toml.

use serde::Deserialize;

/// Input configuration options of all actions
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Keys {
    go_up: Vec<String>,
    go_down: Vec<String>,
    go_parent: Vec<String>,
    go_into_dir: Vec<String>,
    delete: Vec<String>,
    rename: Vec<String>,
    create_directory: Vec<String>,
    quit: Vec<String>,
}

macro_rules! accessor {
    ($($name:ident),+ $(,)?) => {
        impl Keys {
            $(
                #[inline]
                pub fn $name(&self) -> &[String] {
                    &self.$name
                }
            )+
        }
    };
}

accessor!(
    go_up,
    go_down,
    go_parent,
    go_into_dir,
    delete,
    rename,
    create_directory,
    quit,
);

/// Default input configuration options
impl Default for Keys {
    fn default() -> Self {
        Keys {
            go_up: vec!["k".into(), "Up".into()],
            go_down: vec!["j".into(), "Down".into()],
            go_parent: vec!["h".into(), "Left".into()],
            go_into_dir: vec!["l".into(), "Right".into()],

            delete: vec!["x".into()],
            rename: vec!["a".into()],
            create_directory: vec!["F7".into()],

            quit: vec!["q".into()],
        }
    }
}
