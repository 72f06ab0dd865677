//! Miscellaneous utility functions for rang.
//!
//! - [cli]: command line flag handling.
//! - [helpers]: color parsing and home/cache directory lookup.

pub mod cli;
pub mod helpers;

pub use helpers::{default_log_path, get_home, parse_color};
