//! Core runtime logic for rang.
//!
//! This module contains the non-UI pieces used by the application:
//! - [fs]: the filesystem gateway trait and its std::fs implementation.
//! - [listing]: the directory model (see [list_entries], [Entry]).
//! - [preview]: preview lines for the selected entry.
//! - [terminal]: terminal setup/teardown and the main render/key loop.

pub mod fs;
pub mod listing;
pub mod preview;
pub mod terminal;

pub use fs::{FsError, FsGateway, LocalFs};
pub use listing::{Entry, list_entries};
pub use preview::preview_lines;
