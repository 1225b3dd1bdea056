//! Timeline progress line overlay
//!
//! Drawn over the page body after the document lines. The dashed track
//! spans the full metrics height; the solid segment grows with the
//! smoothed progress. Dots the fill has passed light up, and the end dot
//! switches to the accent colour once the line has completed.

use folio_core::LineFrame;
use ratatui::{buffer::Buffer, layout::Rect, style::Color};

use crate::tui::themes::Theme;

const TRACK: char = '┆';
const FILL: char = '┃';
const DOT: &str = "●";
const END_DOT: &str = "◆";
/// Background dot grid glyph; the line draws over it
const GRID: &str = "·";

pub fn render_timeline(
    buf: &mut Buffer,
    area: Rect,
    frame: &LineFrame,
    scroll_y: f64,
    theme: &Theme,
) {
    let metrics = frame.metrics;
    if !metrics.left_x.is_finite() || metrics.left_x < 0.0 {
        return;
    }
    let col = metrics.left_x.floor() as u16;
    if col >= area.width {
        return;
    }
    let x = area.x + col;

    let first = metrics.start_y.floor().max(0.0) as usize;
    let last = metrics.end_y().floor().max(0.0) as usize;
    let fill_to = metrics.start_y + frame.pixel_height;

    for row in first..=last {
        let screen = row as f64 - scroll_y;
        if screen < 0.0 || screen >= f64::from(area.height) {
            continue;
        }
        let y = area.y + screen as u16;
        let filled = row as f64 + 0.5 <= fill_to + f64::EPSILON;
        let color = if filled {
            theme.line_fill_color
        } else {
            theme.line_color
        };

        let Some(cell) = buf.cell_mut((x, y)) else {
            continue;
        };
        match cell.symbol() {
            END_DOT => {
                let end_color: Color = if frame.complete {
                    theme.accent_color
                } else {
                    color
                };
                cell.set_fg(end_color);
            }
            DOT => {
                cell.set_fg(color);
            }
            " " | GRID => {
                cell.set_char(if filled { FILL } else { TRACK }).set_fg(color);
            }
            // Never draw over text
            _ => {}
        }
    }
}
