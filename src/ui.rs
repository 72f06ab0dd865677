//! Rendering side of rang.
//!
//! - [layout]: the pure split-pane layout engine producing [DrawOp]s.
//! - [paint]: applies draw ops to a ratatui buffer.
//! - [prompt]: line editor behind the name prompt.
//! - [surface]: the [Surface] trait the main loop talks to.

pub mod layout;
pub mod paint;
pub mod prompt;
pub mod surface;

pub use layout::{DrawOp, Geometry, StyleToken, View, compose};
pub use paint::paint;
pub use prompt::{MAX_INPUT_LEN, PromptLine, PromptStep};
pub use surface::Surface;
