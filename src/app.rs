//! Application layer for rang.
//!
//! - [state]: the browser state machine ([AppState]).
//! - [keymap]: key events to [Action]s, built from the `[keys]` config table.

pub mod keymap;
pub mod state;

pub use keymap::{Action, FileAction, Keymap, NavAction, SystemAction};
pub use state::{AppState, KeypressResult};
