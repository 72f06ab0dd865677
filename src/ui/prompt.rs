//! Line editor behind the blocking name prompt.
//!
//! [PromptLine] holds the input buffer and cursor and reacts to key events.
//! The terminal surface feeds it keys until it reports [PromptStep::Submit] or
//! [PromptStep::Cancel], redrawing the echoed input in between.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Longest name the prompt accepts, in characters.
pub const MAX_INPUT_LEN: usize = 64;

/// Outcome of feeding one key to the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptStep {
    Pending,
    Submit(String),
    Cancel,
}

/// Input buffer and cursor of an active prompt.
#[derive(Debug, Clone)]
pub struct PromptLine {
    prompt: String,
    buffer: String,
    // byte offset into buffer, always on a char boundary
    cursor: usize,
    max_len: usize,
}

impl PromptLine {
    pub fn new(prompt: &str, max_len: usize) -> Self {
        Self {
            prompt: prompt.to_string(),
            buffer: String::new(),
            cursor: 0,
            max_len,
        }
    }

    // Getters / accessors

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Prompt followed by the current input, as echoed on screen.
    pub fn echo(&self) -> String {
        format!("{}{}", self.prompt, self.buffer)
    }

    /// Cursor position in characters from the start of the input.
    pub fn cursor_chars(&self) -> usize {
        self.buffer[..self.cursor].chars().count()
    }

    /// Applies one key event to the prompt.
    pub fn handle_key(&mut self, key: KeyEvent) -> PromptStep {
        match key.code {
            KeyCode::Enter => return PromptStep::Submit(self.buffer.trim().to_string()),
            KeyCode::Esc => return PromptStep::Cancel,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return PromptStep::Cancel;
            }
            KeyCode::Left => self.move_cursor_left(),
            KeyCode::Right => self.move_cursor_right(),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.buffer.len(),
            KeyCode::Backspace => self.backspace_at_cursor(),
            KeyCode::Delete => self.delete_at_cursor(),
            KeyCode::Char(ch) => self.insert_at_cursor(ch),
            _ => {}
        }
        PromptStep::Pending
    }

    fn insert_at_cursor(&mut self, ch: char) {
        if ch.is_control() || self.buffer.chars().count() >= self.max_len {
            return;
        }
        self.buffer.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    fn move_cursor_left(&mut self) {
        if let Some((previous, _)) = self.buffer[..self.cursor].char_indices().next_back() {
            self.cursor = previous;
        }
    }

    fn move_cursor_right(&mut self) {
        if let Some(ch) = self.buffer[self.cursor..].chars().next() {
            self.cursor += ch.len_utf8();
        }
    }

    fn backspace_at_cursor(&mut self) {
        if let Some((previous, _)) = self.buffer[..self.cursor].char_indices().next_back() {
            self.buffer.remove(previous);
            self.cursor = previous;
        }
    }

    fn delete_at_cursor(&mut self) {
        if self.cursor < self.buffer.len() {
            self.buffer.remove(self.cursor);
        }
    }
}
