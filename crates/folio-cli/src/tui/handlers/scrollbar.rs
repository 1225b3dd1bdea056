//! Scrollbar handling
//!
//! Click and drag on the page scrollbar jump to the matching position.

use crate::tui::app::App;

impl App {
    pub(crate) fn scrollbar_hit(&self, column: u16, row: u16) -> bool {
        self.layout.scrollbar_area.is_some_and(|area| {
            column >= area.x
                && column < area.x + area.width
                && row >= area.y
                && row < area.y + area.height
        })
    }

    /// Jump to the offset under `y` on the scrollbar track
    ///
    /// Returns true if the offset moved.
    pub(crate) fn scroll_to_track_position(&mut self, y: u16) -> bool {
        let Some(area) = self.layout.scrollbar_area else {
            return false;
        };
        let relative_y = y.saturating_sub(area.y) as f32;
        // Last row maps to the bottom
        let span = area.height.saturating_sub(1).max(1) as f32;
        let max_offset = self.scroll.max_scroll;
        let new_offset = ((relative_y / span).min(1.0) * max_offset as f32).round() as usize;
        self.scroll.scroll_to_line(new_offset)
    }
}
