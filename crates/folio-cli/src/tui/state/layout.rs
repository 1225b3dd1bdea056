//! Layout State - cached screen areas
//!
//! Updated each frame during rendering, used for mouse hit testing.

use folio_core::SectionId;
use ratatui::layout::Rect;

use crate::tui::page::PageTarget;

#[derive(Debug, Default, Clone)]
pub struct LayoutState {
    /// Clickable area of each tab
    pub tab_areas: Vec<(SectionId, Rect)>,
    /// Visible click targets in the page body
    pub page_targets: Vec<(Rect, PageTarget)>,
    /// Page scrollbar track
    pub scrollbar_area: Option<Rect>,
    /// Left button went down on the scrollbar and hasn't been released
    pub dragging_scrollbar: bool,
}

impl LayoutState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tab under a screen position
    pub fn tab_at(&self, column: u16, row: u16) -> Option<SectionId> {
        self.tab_areas
            .iter()
            .find(|(_, rect)| hit(rect, column, row))
            .map(|(id, _)| *id)
    }

    /// Page target under a screen position
    pub fn target_at(&self, column: u16, row: u16) -> Option<&PageTarget> {
        self.page_targets
            .iter()
            .find(|(rect, _)| hit(rect, column, row))
            .map(|(_, target)| target)
    }
}

fn hit(rect: &Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}
