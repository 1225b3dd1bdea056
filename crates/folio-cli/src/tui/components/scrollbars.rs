//! Scrollbar rendering
//!
//! 1-char wide filled track with the thumb inside.

use ratatui::{buffer::Buffer, layout::Rect, style::Color};

use crate::tui::themes::Theme;

/// Buffer-based scrollbar: ░ track, █ thumb
pub fn render_scrollbar(
    buf: &mut Buffer,
    area: Rect,
    offset: usize,
    total: usize,
    visible: usize,
    thumb_color: Color,
    track_color: Color,
) {
    // Clear first so no stale glyphs remain when the bar disappears
    for y in 0..area.height {
        if let Some(cell) = buf.cell_mut((area.x, area.y + y)) {
            cell.set_char(' ');
            cell.set_fg(Color::Reset);
        }
    }

    if total <= visible || area.height == 0 {
        return;
    }

    let height = area.height as usize;
    let (thumb_pos, thumb_size) = thumb_geometry(height, offset, total, visible);

    for y in 0..height {
        let is_thumb = y >= thumb_pos && y < thumb_pos + thumb_size;
        let (ch, color) = if is_thumb {
            ('█', thumb_color)
        } else {
            ('░', track_color)
        };
        if let Some(cell) = buf.cell_mut((area.x, area.y + y as u16)) {
            cell.set_char(ch).set_fg(color);
        }
    }
}

/// Thumb start row and length within a track of `height` rows
fn thumb_geometry(height: usize, offset: usize, total: usize, visible: usize) -> (usize, usize) {
    // Minimum 2 rows so it stays visible on long pages
    let thumb_size = ((visible as f32 / total as f32) * height as f32)
        .max(2.0)
        .min(height as f32)
        .round() as usize;

    let max_offset = total.saturating_sub(visible);
    let thumb_pos = if max_offset > 0 {
        ((offset.min(max_offset) as f32 / max_offset as f32)
            * height.saturating_sub(thumb_size) as f32)
            .round() as usize
    } else {
        0
    };
    (thumb_pos, thumb_size)
}

/// Scrollbar for the page body
pub fn render_page_scrollbar(
    buf: &mut Buffer,
    area: Rect,
    offset: usize,
    total_lines: usize,
    visible_height: usize,
    theme: &Theme,
) {
    render_scrollbar(
        buf,
        area,
        offset,
        total_lines,
        visible_height,
        theme.accent_color,
        theme.scrollbar_bg_color,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(buf: &Buffer, x: u16) -> String {
        (0..buf.area.height)
            .map(|y| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_thumb_tracks_offset() {
        let area = Rect::new(0, 0, 1, 10);
        let mut buf = Buffer::empty(area);
        render_scrollbar(&mut buf, area, 0, 100, 10, Color::White, Color::Gray);
        assert!(column(&buf, 0).starts_with("██░"));

        let mut buf = Buffer::empty(area);
        render_scrollbar(&mut buf, area, 90, 100, 10, Color::White, Color::Gray);
        assert!(column(&buf, 0).ends_with("░██"));
    }

    #[test]
    fn test_no_thumb_when_everything_fits() {
        let area = Rect::new(0, 0, 1, 5);
        let mut buf = Buffer::empty(area);
        render_scrollbar(&mut buf, area, 0, 3, 5, Color::White, Color::Gray);
        assert_eq!(column(&buf, 0), "     ");
    }

    #[test]
    fn test_thumb_geometry_clamps() {
        assert_eq!(thumb_geometry(10, 0, 20, 10), (0, 5));
        assert_eq!(thumb_geometry(10, 999, 20, 10), (5, 5));
    }
}
