//! Terminal rendering and event loop for rang.
//!
//! Handles setup/teardown of raw mode, alternate screen, redraws,
//! and events (keypress, resize) to app logic.
//!
//! [event_loop] only talks to a [Surface] and a [FsGateway], [TerminalSurface] is the
//! crossterm + ratatui implementation used by the binary.

use crate::app::{AppState, KeypressResult, Keymap};
use crate::config::{Config, Theme};
use crate::core::fs::FsGateway;
use crate::core::listing::list_entries;
use crate::core::preview::{diagnostic, preview_lines};
use crate::ui::layout::{DrawOp, Geometry, StyleToken, View, compose, pad_to_width};
use crate::ui::{MAX_INPUT_LEN, PromptLine, PromptStep, Surface, paint};

use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::Position;
use unicode_width::UnicodeWidthStr;

use std::io;

/// Initializes the terminal in raw mode and alternate screen and runs the main event loop.
///
/// Blocks until quit. Handles all input and UI rendering.
///
/// Returns an std::io::Error if terminal setup or teardown fails.
pub fn run_terminal<F: FsGateway + ?Sized>(
    config: &Config,
    fs: &F,
    state: &mut AppState,
) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let mut surface = TerminalSurface::new(terminal, config.theme().clone());
    let keymap = Keymap::from_config(config);
    let result = event_loop(&mut surface, fs, &keymap, state);

    disable_raw_mode()?;
    execute!(surface.terminal.backend_mut(), LeaveAlternateScreen, Show)?;
    result
}

/// Main event loop of rang: lists, draws, reads one key and dispatches it.
/// Returns on quit.
pub fn event_loop<S, F>(
    surface: &mut S,
    fs: &F,
    keymap: &Keymap,
    state: &mut AppState,
) -> io::Result<()>
where
    S: Surface + ?Sized,
    F: FsGateway + ?Sized,
{
    loop {
        let geometry = surface.geometry()?;

        let (entries, preview) = match list_entries(fs, state.current_dir()) {
            Ok(entries) => {
                state.sync(&entries);
                let preview = state
                    .selected_path(&entries)
                    .map(|path| preview_lines(fs, &path))
                    .unwrap_or_default();
                (entries, preview)
            }
            Err(e) => {
                log::warn!("{e}");
                state.sync(&[]);
                (Vec::new(), vec![diagnostic(&e)])
            }
        };

        let current_dir = state.current_dir().to_string_lossy();
        let ops = compose(&View {
            geometry,
            current_dir: &current_dir,
            entries: &entries,
            cursor: state.selected_idx(&entries),
            preview: &preview,
            status: state.status(),
        });
        surface.present(&ops)?;

        // resize or other redraw request
        let Some(key) = surface.read_key()? else {
            continue;
        };
        state.clear_status();

        let Some(action) = keymap.lookup(key) else {
            continue;
        };

        // nothing to confirm or rename in an empty directory
        let needs_prompt = !action.acts_on_selection() || state.selected_idx(&entries).is_some();

        let input = match action.prompt() {
            Some(prompt) if needs_prompt => {
                let row = geometry.height.saturating_sub(1);
                surface.prompt_line(row, 0, prompt, MAX_INPUT_LEN)?
            }
            _ => None,
        };

        if state.handle_action(action, &entries, fs, input) == KeypressResult::Quit {
            log::info!("Quit requested");
            return Ok(());
        }
    }
}

/// [Surface] backed by a ratatui [Terminal].
pub struct TerminalSurface<B: Backend> {
    terminal: Terminal<B>,
    theme: Theme,
    last_frame: Vec<DrawOp>,
}

impl<B: Backend> TerminalSurface<B>
where
    io::Error: From<B::Error>,
{
    pub fn new(terminal: Terminal<B>, theme: Theme) -> Self {
        Self {
            terminal,
            theme,
            last_frame: Vec::new(),
        }
    }

    fn draw(&mut self, extra: &[DrawOp], cursor: Option<Position>) -> io::Result<()> {
        let (ops, theme) = (&self.last_frame, &self.theme);
        self.terminal.draw(|frame| {
            paint(frame.buffer_mut(), ops, theme);
            paint(frame.buffer_mut(), extra, theme);
            if let Some(pos) = cursor {
                frame.set_cursor_position(pos);
            }
        })?;
        Ok(())
    }
}

impl<B: Backend> Surface for TerminalSurface<B>
where
    io::Error: From<B::Error>,
{
    fn geometry(&mut self) -> io::Result<Geometry> {
        let size = self.terminal.size()?;
        Ok(Geometry::new(size.height, size.width))
    }

    fn present(&mut self, ops: &[DrawOp]) -> io::Result<()> {
        self.last_frame = ops.to_vec();
        self.draw(&[], None)
    }

    fn read_key(&mut self) -> io::Result<Option<KeyEvent>> {
        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => return Ok(Some(key)),
                Event::Resize(_, _) => return Ok(None),
                _ => {}
            }
        }
    }

    fn prompt_line(
        &mut self,
        row: u16,
        col: u16,
        prompt: &str,
        max_len: usize,
    ) -> io::Result<Option<String>> {
        let mut line = PromptLine::new(prompt, max_len);

        loop {
            let width = self.geometry()?.width.saturating_sub(col) as usize;
            let text = pad_to_width(&line.echo(), width);
            let typed: String = line.buffer().chars().take(line.cursor_chars()).collect();
            let cursor_x = col
                .saturating_add((line.prompt().width() + typed.width()) as u16)
                .min(col.saturating_add(width.saturating_sub(1) as u16));

            let prompt_op = DrawOp::Text {
                row,
                col,
                text,
                style: StyleToken::Status,
            };
            self.draw(&[prompt_op], Some(Position::new(cursor_x, row)))?;

            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    match line.handle_key(key) {
                        PromptStep::Pending => {}
                        PromptStep::Submit(input) => return Ok(Some(input)),
                        PromptStep::Cancel => return Ok(None),
                    }
                }
                _ => {}
            }
        }
    }
}
