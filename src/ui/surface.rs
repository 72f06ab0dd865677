//! The terminal capability set the main loop drives.
//!
//! [crate::core::terminal::TerminalSurface] implements it on crossterm + ratatui.
//! Tests drive the loop through a scripted implementation instead.

use crate::ui::layout::{DrawOp, Geometry};

use crossterm::event::KeyEvent;
use std::io;

pub trait Surface {
    /// Current terminal size.
    fn geometry(&mut self) -> io::Result<Geometry>;

    /// Clears the screen and draws one frame.
    fn present(&mut self, ops: &[DrawOp]) -> io::Result<()>;

    /// Blocks until the next key press.
    /// Returns `None` when the screen needs a redraw instead (e.g. after a resize).
    fn read_key(&mut self) -> io::Result<Option<KeyEvent>>;

    /// Shows `prompt` at `row`/`col` over the last frame and blocks while the user types,
    /// echoing input. Returns `None` when the prompt is cancelled.
    fn prompt_line(
        &mut self,
        row: u16,
        col: u16,
        prompt: &str,
        max_len: usize,
    ) -> io::Result<Option<String>>;
}
