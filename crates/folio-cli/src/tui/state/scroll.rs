//! Scroll State - page scroll and viewport management
//!
//! Owns the scroll offset into the page document and keeps it within
//! bounds as the document or viewport changes size.

/// Manages scroll state for the page body
#[derive(Debug, Clone, Default)]
pub struct ScrollState {
    /// Current scroll offset in rows (0 = top, max = bottom)
    pub offset: usize,
    /// Maximum scroll offset for bounds checking
    pub max_scroll: usize,
    /// Visible rows
    pub viewport_height: u16,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Core Scroll Operations
    // =========================================================================

    /// Scroll up by the given amount; returns true if the offset moved
    pub fn scroll_up(&mut self, amount: usize) -> bool {
        let before = self.offset;
        self.offset = self.offset.saturating_sub(amount);
        self.offset != before
    }

    /// Scroll down by the given amount; returns true if the offset moved
    pub fn scroll_down(&mut self, amount: usize) -> bool {
        let before = self.offset;
        self.offset = self.offset.saturating_add(amount).min(self.max_scroll);
        self.offset != before
    }

    /// Scroll to a specific line
    pub fn scroll_to_line(&mut self, line: usize) -> bool {
        let before = self.offset;
        self.offset = line.min(self.max_scroll);
        self.offset != before
    }

    pub fn scroll_to_top(&mut self) -> bool {
        self.scroll_to_line(0)
    }

    pub fn scroll_to_end(&mut self) -> bool {
        self.scroll_to_line(self.max_scroll)
    }

    /// One page, leaving a couple of rows of overlap
    pub fn page_size(&self) -> usize {
        (self.viewport_height as usize).saturating_sub(2).max(1)
    }

    // =========================================================================
    // Max Scroll Updates
    // =========================================================================

    /// Update the maximum scroll value based on total lines and viewport height
    pub fn update_max_scroll(&mut self, total_lines: usize, viewport_height: u16) {
        self.viewport_height = viewport_height;
        self.max_scroll = total_lines.saturating_sub(viewport_height as usize);

        // Clamp current offset to valid range
        if self.offset > self.max_scroll {
            self.offset = self.max_scroll;
        }
    }

    /// Check if scrollbar is needed (content exceeds viewport)
    pub fn needs_scrollbar(&self) -> bool {
        self.max_scroll > 0
    }
}
