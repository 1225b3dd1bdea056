//! Mouse event handling
//!
//! Wheel scrolling, tab clicks, page targets and scrollbar clicks/drags.
//! Scrollbar logic is in scrollbar.rs.

use std::time::Instant;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use folio_core::constants::ui::MOUSE_SCROLL_LINES;
use tracing::debug;

use crate::tui::app::App;
use crate::tui::page::PageTarget;

impl App {
    /// Handle mouse events for scrolling and clicking
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollDown => {
                self.scroll.scroll_down(MOUSE_SCROLL_LINES);
            }
            MouseEventKind::ScrollUp => {
                self.scroll.scroll_up(MOUSE_SCROLL_LINES);
            }
            MouseEventKind::Down(MouseButton::Left) => {
                self.handle_click(mouse.column, mouse.row, Instant::now());
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if self.layout.dragging_scrollbar {
                    self.scroll_to_track_position(mouse.row);
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.layout.dragging_scrollbar = false;
            }
            _ => {}
        }
    }

    fn handle_click(&mut self, column: u16, row: u16, now: Instant) {
        if let Some(id) = self.layout.tab_at(column, row) {
            self.jump_to_section(id);
            return;
        }
        if let Some(target) = self.layout.target_at(column, row).cloned() {
            self.activate_target(target, now);
            return;
        }
        if self.scrollbar_hit(column, row) {
            self.layout.dragging_scrollbar = true;
            self.scroll_to_track_position(row);
        }
    }

    pub(crate) fn activate_target(&mut self, target: PageTarget, now: Instant) {
        match target {
            PageTarget::BioKey(key) => {
                debug!(key, "Highlight bio field");
                self.highlight.set(key, now);
            }
            PageTarget::Link(url) => self.open_link(&url, "opening link"),
        }
    }
}
