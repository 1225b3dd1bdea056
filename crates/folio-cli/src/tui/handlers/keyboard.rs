//! Keyboard event handlers

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Instant;
use tracing::debug;

use folio_core::SectionId;

use crate::tui::app::App;

impl App {
    /// Main keyboard event dispatcher
    pub fn handle_key(&mut self, key_event: KeyEvent) {
        if key_event.kind == KeyEventKind::Release {
            return;
        }
        let code = key_event.code;
        let modifiers = key_event.modifiers;

        match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,

            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll.scroll_down(1);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll.scroll_up(1);
            }
            KeyCode::PageDown | KeyCode::Char(' ') => {
                let page = self.scroll.page_size();
                self.scroll.scroll_down(page);
            }
            KeyCode::PageUp => {
                let page = self.scroll.page_size();
                self.scroll.scroll_up(page);
            }
            KeyCode::Home | KeyCode::Char('g') => {
                self.scroll.scroll_to_top();
            }
            KeyCode::End | KeyCode::Char('G') => {
                self.scroll.scroll_to_end();
            }

            KeyCode::Char(c @ '1'..='5') => {
                let index = c as usize - '1' as usize;
                if let Some(id) = SectionId::from_index(index) {
                    self.jump_to_section(id);
                }
            }
            KeyCode::Tab => {
                let next = self.active_section().next();
                self.jump_to_section(next);
            }

            KeyCode::Char('p') => self.trigger_ping(Instant::now()),
            KeyCode::Char('t') => self.cycle_theme(),
            _ => {}
        }
    }

    /// Scroll so the section's top is the first visible row
    pub fn jump_to_section(&mut self, id: SectionId) {
        if let Some(span) = self.document.section(id) {
            let top = span.top;
            self.scroll.scroll_to_line(top);
            debug!(section = %id, row = top, "Jumped to section");
        }
    }

    /// Section under the middle of the viewport
    pub fn active_section(&self) -> SectionId {
        folio_core::nav::active_section(
            &self.document.section_tops(),
            self.scroll.offset as f64,
            f64::from(self.scroll.viewport_height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{FolioConfig, Portfolio};
    use ratatui::layout::Rect;

    fn app() -> App {
        let mut app = App::new(FolioConfig::default(), Portfolio::default());
        app.screen = Rect::new(0, 0, 100, 40);
        app.step(Instant::now());
        app
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_line_and_page_scrolling() {
        let mut app = app();
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Down);
        assert_eq!(app.scroll.offset, 2);
        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.scroll.offset, 1);

        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.scroll.offset, 1 + app.scroll.page_size());
        press(&mut app, KeyCode::Home);
        assert_eq!(app.scroll.offset, 0);
        press(&mut app, KeyCode::End);
        assert_eq!(app.scroll.offset, app.scroll.max_scroll);
    }

    #[test]
    fn test_number_keys_jump_to_sections() {
        let mut app = app();
        press(&mut app, KeyCode::Char('3'));
        let experience = app.document.section(SectionId::Experience).unwrap().top;
        assert_eq!(app.scroll.offset, experience);
        assert_eq!(app.active_section(), SectionId::Experience);

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.active_section(), SectionId::Projects);

        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.scroll.offset, 0);
    }

    #[test]
    fn test_quit_keys() {
        let mut ctrl_c = app();
        ctrl_c.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(ctrl_c.should_quit);

        let mut q = app();
        press(&mut q, KeyCode::Char('q'));
        assert!(q.should_quit);

        let mut esc = app();
        press(&mut esc, KeyCode::Esc);
        assert!(esc.should_quit);
    }

    #[test]
    fn test_release_events_ignored() {
        let mut app = app();
        let mut event = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE);
        event.kind = KeyEventKind::Release;
        app.handle_key(event);
        assert_eq!(app.scroll.offset, 0);
    }
}
