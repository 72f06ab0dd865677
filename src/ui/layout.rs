//! Split-pane layout engine.
//!
//! [compose] is a pure function from the browser [View] to the list of [DrawOp]s that make up
//! one frame. It performs no I/O; [crate::ui::paint] applies the ops to a ratatui buffer.
//!
//! Every op it emits lands inside the screen, so a terminal of any size (including 0x0)
//! renders without error.

use crate::core::listing::Entry;

use unicode_width::UnicodeWidthChar;

/// Terminal size in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Geometry {
    pub height: u16,
    pub width: u16,
}

impl Geometry {
    pub fn new(height: u16, width: u16) -> Self {
        Self { height, width }
    }

    /// Width of the left column; the divider sits on this column.
    #[inline]
    pub fn col_width(&self) -> u16 {
        self.width / 2
    }
}

/// Style tokens the engine tags text with. The theme decides what they look like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleToken {
    Normal,
    Selected,
    Directory,
    SelectedDirectory,
    Path,
    Border,
    Status,
}

impl StyleToken {
    /// The 4-way entry style table.
    pub fn for_entry(is_dir: bool, is_selected: bool) -> Self {
        match (is_dir, is_selected) {
            (false, false) => StyleToken::Normal,
            (false, true) => StyleToken::Selected,
            (true, false) => StyleToken::Directory,
            (true, true) => StyleToken::SelectedDirectory,
        }
    }
}

/// One drawing instruction. Rows and columns are zero-based cell positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOp {
    Text {
        row: u16,
        col: u16,
        text: String,
        style: StyleToken,
    },
    VLine {
        row: u16,
        col: u16,
        len: u16,
    },
    HLine {
        row: u16,
        col: u16,
        len: u16,
    },
}

/// Everything one frame depends on.
#[derive(Debug, Clone, Copy)]
pub struct View<'a> {
    pub geometry: Geometry,
    pub current_dir: &'a str,
    pub entries: &'a [Entry],
    /// `None` when there is nothing to select.
    pub cursor: Option<usize>,
    pub preview: &'a [String],
    pub status: Option<&'a str>,
}

// Rows above the two panes: path header and horizontal divider.
const HEADER_ROWS: usize = 2;
const TAB_EXPANSION: &str = "    ";

/// Computes the draw ops for one frame.
pub fn compose(view: &View) -> Vec<DrawOp> {
    let height = view.geometry.height as usize;
    let width = view.geometry.width as usize;
    let col_width = view.geometry.col_width();
    let cw = col_width as usize;

    let mut ops = Vec::with_capacity(height.saturating_mul(2) + 4);

    // Borders
    if height > HEADER_ROWS && cw < width {
        ops.push(DrawOp::VLine {
            row: HEADER_ROWS as u16,
            col: col_width,
            len: (height - HEADER_ROWS) as u16,
        });
    }
    if height > 1 && width > 0 {
        ops.push(DrawOp::HLine {
            row: 1,
            col: 0,
            len: view.geometry.width,
        });
    }

    // Header
    if height > 0 {
        push_text(&mut ops, 0, 0, clip_to_width(view.current_dir, cw), StyleToken::Path);
    }

    // Left pane
    let entry_width = cw.saturating_sub(1);
    for (i, entry) in view.entries.iter().enumerate() {
        if i + HEADER_ROWS >= height {
            break;
        }
        let style = StyleToken::for_entry(entry.is_dir(), view.cursor == Some(i));
        push_text(
            &mut ops,
            (i + HEADER_ROWS) as u16,
            0,
            clip_to_width(entry.name(), entry_width),
            style,
        );
    }

    // Right pane
    let preview_col = cw + 1;
    let preview_width = cw.saturating_sub(2);
    if preview_col < width {
        for (i, line) in view.preview.iter().enumerate() {
            if i + HEADER_ROWS >= height {
                break;
            }
            let expanded = line.replace('\t', TAB_EXPANSION);
            push_text(
                &mut ops,
                (i + HEADER_ROWS) as u16,
                preview_col as u16,
                clip_to_width(&expanded, preview_width),
                StyleToken::Normal,
            );
        }
    }

    // Status line, drawn last so it sits on top of both panes
    if let Some(status) = view.status
        && height > HEADER_ROWS
        && width > 0
    {
        ops.push(DrawOp::Text {
            row: (height - 1) as u16,
            col: 0,
            text: pad_to_width(status, width),
            style: StyleToken::Status,
        });
    }

    ops
}

fn push_text(ops: &mut Vec<DrawOp>, row: u16, col: u16, text: String, style: StyleToken) {
    if !text.is_empty() {
        ops.push(DrawOp::Text {
            row,
            col,
            text,
            style,
        });
    }
}

/// Truncates `text` to at most `max_cols` terminal cells.
///
/// Never splits a character; wide characters that would overflow are dropped whole.
/// Control characters are removed since they would move the terminal cursor.
pub fn clip_to_width(text: &str, max_cols: usize) -> String {
    let mut out = String::with_capacity(text.len().min(max_cols * 4));
    let mut used = 0;

    for ch in text.chars() {
        if ch.is_control() {
            continue;
        }
        let w = ch.width().unwrap_or(0);
        if used + w > max_cols {
            break;
        }
        out.push(ch);
        used += w;
    }
    out
}

/// Clips `text` to `cols` cells and pads with spaces up to exactly `cols`.
pub fn pad_to_width(text: &str, cols: usize) -> String {
    let mut out = clip_to_width(text, cols);
    let used = unicode_width::UnicodeWidthStr::width(out.as_str());
    out.extend(std::iter::repeat_n(' ', cols.saturating_sub(used)));
    out
}
