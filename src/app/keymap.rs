//! Key mapping and action dispatch system for rang
//!
//! Defines key to an action, parsing from the config, and enum variants
//! for all navigation, file and system actions used by rang.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Represents any action in the app: navigation, file, or system.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Nav(NavAction),
    File(FileAction),
    System(SystemAction),
}

/// Navigation actions (move, into_parent, into_dir)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NavAction {
    GoParent,
    GoIntoDir,
    GoUp,
    GoDown,
}

/// File actions (delete, rename, create directory)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FileAction {
    Delete,
    Rename,
    CreateDirectory,
}

/// System actions (quit)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SystemAction {
    Quit,
}

impl Action {
    /// The prompt shown before dispatching, for actions that need a name or a confirmation.
    pub fn prompt(&self) -> Option<&'static str> {
        match self {
            Action::File(FileAction::Delete) => Some("Delete item? [y/N] "),
            Action::File(FileAction::Rename) => Some("Enter new name: "),
            Action::File(FileAction::CreateDirectory) => Some("Enter directory name: "),
            _ => None,
        }
    }

    /// Whether the action needs a selected entry to do anything.
    pub fn acts_on_selection(&self) -> bool {
        matches!(
            self,
            Action::Nav(NavAction::GoIntoDir)
                | Action::File(FileAction::Delete)
                | Action::File(FileAction::Rename)
        )
    }
}

/// Key + modifiers as used in keybind/keymap
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub struct Key {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

/// Stores the mapping from Key to action, which is built in the config
#[derive(Debug, Clone, Default)]
pub struct Keymap {
    map: HashMap<Key, Action>,
}

impl Keymap {
    /// Builds the keymap from the config
    #[rustfmt::skip]
    pub fn from_config(config: &crate::config::Config) -> Self {
        let mut map = HashMap::new();
        let keys = config.keys();

        macro_rules! bind {
            ($keys:expr, $action:expr) => {
                bind($keys, $action, &mut map);
            };
        }

        use NavAction as N;
        use FileAction as F;
        use SystemAction as S;

        // NavActions
        bind!(keys.go_parent(),         Action::Nav(N::GoParent));
        bind!(keys.go_into_dir(),       Action::Nav(N::GoIntoDir));
        bind!(keys.go_up(),             Action::Nav(N::GoUp));
        bind!(keys.go_down(),           Action::Nav(N::GoDown));

        // FileActions
        bind!(keys.delete(),            Action::File(F::Delete));
        bind!(keys.rename(),            Action::File(F::Rename));
        bind!(keys.create_directory(),  Action::File(F::CreateDirectory));

        // SystemActions
        bind!(keys.quit(),              Action::System(S::Quit));

        Keymap { map }
    }

    /// Looks up the action for a given key event
    pub fn lookup(&self, key: KeyEvent) -> Option<Action> {
        let k = Key {
            code: key.code,
            modifiers: key.modifiers,
        };

        if let Some(action) = self.map.get(&k).copied() {
            return Some(action);
        }

        if matches!(key.code, KeyCode::Char(_)) && key.modifiers.contains(KeyModifiers::SHIFT) {
            let k2 = Key {
                code: key.code,
                modifiers: key.modifiers - KeyModifiers::SHIFT,
            };
            return self.map.get(&k2).copied();
        }
        None
    }

    /// Key strings bound to each action, for `--keybinds`.
    pub fn describe(config: &crate::config::Config) -> Vec<(&'static str, String)> {
        let keys = config.keys();
        let join = |list: &[String]| list.join(", ");
        vec![
            ("Move up", join(keys.go_up())),
            ("Move down", join(keys.go_down())),
            ("Go to parent", join(keys.go_parent())),
            ("Enter directory", join(keys.go_into_dir())),
            ("Delete", join(keys.delete())),
            ("Rename", join(keys.rename())),
            ("Create directory", join(keys.create_directory())),
            ("Quit", join(keys.quit())),
        ]
    }
}

/// Parses a key string like `k`, `Up`, `F7`, `Ctrl+x` or `<c-x>`.
pub fn parse_key(s: &str) -> Option<Key> {
    let mut modifiers = KeyModifiers::NONE;
    let mut code: Option<KeyCode> = None;

    let is_bracketed = s.starts_with('<') && s.ends_with('>');
    let mut input = s.trim_start_matches('<').trim_end_matches('>').to_string();

    if is_bracketed && input.contains('-') {
        let parts: Vec<&str> = input.split('-').collect();

        for &prefix in parts.iter().take(parts.len().saturating_sub(1)) {
            match prefix.to_lowercase().as_str() {
                "c" | "ctrl" => modifiers |= KeyModifiers::CONTROL,
                "a" | "m" | "alt" => modifiers |= KeyModifiers::ALT,
                "s" | "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => return None,
            }
        }
        input = parts.last()?.to_string();
    }

    for part in input.split('+') {
        let p_low = part.to_lowercase();
        match p_low.as_str() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "alt" | "meta" => modifiers |= KeyModifiers::ALT,
            "shift" => modifiers |= KeyModifiers::SHIFT,

            "up" => code = Some(KeyCode::Up),
            "down" => code = Some(KeyCode::Down),
            "left" => code = Some(KeyCode::Left),
            "right" => code = Some(KeyCode::Right),
            "enter" => code = Some(KeyCode::Enter),
            "esc" => code = Some(KeyCode::Esc),
            "backspace" | "back" => code = Some(KeyCode::Backspace),
            "delete" | "del" => code = Some(KeyCode::Delete),
            "home" => code = Some(KeyCode::Home),
            "end" => code = Some(KeyCode::End),
            "tab" => code = Some(KeyCode::Tab),
            "space" | "spc" => code = Some(KeyCode::Char(' ')),

            _ => {
                if part.chars().count() == 1 {
                    let mut c = part.chars().next()?;
                    if modifiers.contains(KeyModifiers::SHIFT) {
                        c = c.to_ascii_uppercase();
                    }
                    code = Some(KeyCode::Char(c));
                } else if p_low.starts_with('f')
                    && p_low.len() > 1
                    && p_low[1..].chars().all(|c| c.is_ascii_digit())
                {
                    let n = p_low[1..].parse().ok()?;
                    code = Some(KeyCode::F(n));
                } else if part.is_empty() {
                    continue;
                } else {
                    return None;
                }
            }
        }
    }

    Some(Key {
        code: code?,
        modifiers,
    })
}

fn bind(key_list: &[String], action: Action, map: &mut HashMap<Key, Action>) {
    for k in key_list {
        match parse_key(k) {
            Some(key) => {
                map.insert(key, action);
            }
            None => log::warn!("Ignoring unparsable key binding {k:?} for {action:?}"),
        }
    }
}
