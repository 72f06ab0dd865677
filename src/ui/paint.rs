//! Applies [DrawOp]s to a ratatui [Buffer].
//!
//! The layout engine already keeps every op on screen; painting clips against the buffer
//! area once more so a resize between composing and drawing cannot panic.

use crate::config::Theme;
use crate::ui::layout::{DrawOp, StyleToken};

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

const VLINE_SYMBOL: &str = "│";
const HLINE_SYMBOL: &str = "─";

/// Paints a full frame of ops into `buf`.
pub fn paint(buf: &mut Buffer, ops: &[DrawOp], theme: &Theme) {
    let area = buf.area;
    let border = theme.style_for(StyleToken::Border);

    for op in ops {
        match op {
            DrawOp::Text {
                row,
                col,
                text,
                style,
            } => {
                let (x, y) = (area.x.saturating_add(*col), area.y.saturating_add(*row));
                if !contains(area, x, y) {
                    continue;
                }
                let max = (area.right() - x) as usize;
                buf.set_stringn(x, y, text, max, theme.style_for(*style));
            }
            DrawOp::VLine { row, col, len } => {
                for y in (*row..row.saturating_add(*len)).map(|r| area.y.saturating_add(r)) {
                    if let Some(cell) = buf.cell_mut((area.x.saturating_add(*col), y)) {
                        cell.set_symbol(VLINE_SYMBOL).set_style(border);
                    }
                }
            }
            DrawOp::HLine { row, col, len } => {
                for x in (*col..col.saturating_add(*len)).map(|c| area.x.saturating_add(c)) {
                    if let Some(cell) = buf.cell_mut((x, area.y.saturating_add(*row))) {
                        cell.set_symbol(HLINE_SYMBOL).set_style(border);
                    }
                }
            }
        }
    }
}

#[inline]
fn contains(area: Rect, x: u16, y: u16) -> bool {
    x >= area.x && x < area.right() && y >= area.y && y < area.bottom()
}
