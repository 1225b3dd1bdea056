//! Page body - the visible slice of the document
//!
//! Applies section motion while copying lines into the buffer: a section
//! still entering is drawn a few rows low and blended toward the
//! background. The biography and contact sections get a dot grid that
//! drifts with a parallax offset.

use folio_core::motion::parallax_offset;
use folio_core::SectionId;
use ratatui::{buffer::Buffer, layout::Rect};

use crate::tui::page::{PageDocument, PageMotion, PageTarget, SectionSpan};
use crate::tui::themes::{fade_color, Theme};

const GRID_ROWS: f64 = 3.0;
const GRID_COLS: u16 = 6;

pub fn render_page_body(
    buf: &mut Buffer,
    area: Rect,
    doc: &PageDocument,
    motion: &PageMotion,
    scroll: usize,
    parallax_factor: f64,
    theme: &Theme,
) {
    for y in 0..area.height {
        let row = scroll + y as usize;
        let Some(section) = doc.section_at(row) else {
            continue;
        };
        let screen_y = area.y + y;

        let shift = motion.offset_rows(section.id);
        let source = row.checked_sub(shift).filter(|r| *r >= section.top);
        if let Some(line) = source.and_then(|r| doc.line(r)) {
            buf.set_line(area.x, screen_y, line, area.width);
            let opacity = motion.fade(section.id).opacity;
            if opacity < 1.0 {
                for x in area.x..area.x + area.width {
                    if let Some(cell) = buf.cell_mut((x, screen_y)) {
                        cell.set_fg(fade_color(cell.fg, theme.bg_color, opacity));
                    }
                }
            }
        }

        if matches!(section.id, SectionId::About | SectionId::Contact) {
            draw_grid_row(buf, area, screen_y, row, section, scroll, parallax_factor, theme);
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_grid_row(
    buf: &mut Buffer,
    area: Rect,
    screen_y: u16,
    row: usize,
    section: &SectionSpan,
    scroll: usize,
    parallax_factor: f64,
    theme: &Theme,
) {
    let top_in_viewport = section.top as f64 - scroll as f64;
    let shift = parallax_offset(f64::from(area.height), top_in_viewport, parallax_factor).round();
    if !on_grid_row(row, shift) {
        return;
    }
    for x in (area.x + 2..area.x + area.width).step_by(GRID_COLS as usize) {
        if let Some(cell) = buf.cell_mut((x, screen_y)) {
            if cell.symbol() == " " {
                cell.set_char('·').set_fg(theme.dot_color);
            }
        }
    }
}

/// Screen rects of the click targets drawn by [`render_page_body`]
///
/// A target only counts where its line is actually drawn, entrance offset
/// included.
pub fn page_target_areas(
    area: Rect,
    doc: &PageDocument,
    motion: &PageMotion,
    scroll: usize,
) -> Vec<(Rect, PageTarget)> {
    doc.targets()
        .iter()
        .filter_map(|span| {
            let section = doc.section_at(span.row)?;
            let drawn = span.row + motion.offset_rows(section.id);
            if !section.contains(drawn) {
                return None;
            }
            let y = u16::try_from(drawn.checked_sub(scroll)?).ok()?;
            let col = u16::try_from(span.col).ok()?;
            if y >= area.height || col >= area.width {
                return None;
            }
            let width = u16::try_from(span.width).unwrap_or(u16::MAX).min(area.width - col);
            let rect = Rect::new(area.x + col, area.y + y, width, 1);
            Some((rect, span.target.clone()))
        })
        .collect()
}

/// Grid phase stays in f64 so any shift is safe
fn on_grid_row(row: usize, shift: f64) -> bool {
    let phase = (row as f64 + shift).rem_euclid(GRID_ROWS);
    phase.is_finite() && phase.round() % GRID_ROWS == 0.0
}
