//! UI rendering coordinator
//!
//! Splits the screen and dispatches to the components.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Block,
    Frame,
};
use std::time::Instant;

use crate::tui::app::App;
use crate::tui::components::{
    page_target_areas, render_page_body, render_page_scrollbar, render_status_bar, render_tab_bar, render_timeline,
    render_toasts, StatusInfo,
};

/// Tab bar height including its border
const TAB_BAR_HEIGHT: u16 = 3;

/// Screen regions, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    pub tab_bar: Rect,
    pub page: Rect,
    pub scrollbar: Rect,
    pub status: Rect,
}

/// Tab bar on top, status bar at the bottom, page with a 1-column
/// scrollbar in between
pub fn split_screen(area: Rect) -> ScreenAreas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TAB_BAR_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(rows[1]);

    ScreenAreas {
        tab_bar: rows[0],
        page: cols[0],
        scrollbar: cols[1],
        status: rows[2],
    }
}

impl App {
    /// Main UI rendering dispatcher
    pub fn ui(&mut self, f: &mut Frame) {
        let area = f.area();
        let bg = Block::default().style(Style::default().bg(self.theme.bg_color));
        f.render_widget(bg, area);

        let areas = split_screen(area);
        let active = self.active_section();
        self.layout.tab_areas = render_tab_bar(
            f,
            areas.tab_bar,
            &self.theme,
            active,
            &self.portfolio.profile.name,
        );

        let buf = f.buffer_mut();
        render_page_body(
            buf,
            areas.page,
            &self.document,
            &self.motion,
            self.scroll.offset,
            self.config.motion.parallax_factor,
            &self.theme,
        );
        if let Some(line) = &self.line {
            render_timeline(buf, areas.page, line, self.scroll.offset as f64, &self.theme);
        }
        if self.scroll.needs_scrollbar() {
            render_page_scrollbar(
                buf,
                areas.scrollbar,
                self.scroll.offset,
                self.document.height(),
                areas.page.height as usize,
                &self.theme,
            );
        }

        render_status_bar(f, areas.status, &self.theme, self.status_info(active));

        // Toasts on top of everything
        render_toasts(f.buffer_mut(), area, &self.toasts, &self.theme, Instant::now());

        self.layout.scrollbar_area = Some(areas.scrollbar);
        self.layout.page_targets =
            page_target_areas(areas.page, &self.document, &self.motion, self.scroll.offset);
    }

    fn status_info(&self, section: folio_core::SectionId) -> StatusInfo {
        StatusInfo {
            section,
            percent: self.line.map_or(0.0, |line| line.percent),
            complete: self.controller.is_complete(),
            at_end: self.scroll.max_scroll > 0 && self.scroll.offset >= self.scroll.max_scroll,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{FolioConfig, Portfolio};
    use ratatui::{backend::TestBackend, Terminal};

    use crate::tui::page::PageTarget;

    #[test]
    fn test_split_screen() {
        let areas = split_screen(Rect::new(0, 0, 80, 24));
        assert_eq!(areas.tab_bar, Rect::new(0, 0, 80, 3));
        assert_eq!(areas.page, Rect::new(0, 3, 79, 20));
        assert_eq!(areas.scrollbar, Rect::new(79, 3, 1, 20));
        assert_eq!(areas.status, Rect::new(0, 23, 80, 1));
    }

    #[test]
    fn test_ui_draws_and_records_layout() {
        let mut app = App::new(FolioConfig::default(), Portfolio::default());
        app.screen = Rect::new(0, 0, 100, 30);
        app.step(Instant::now());

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| app.ui(f)).unwrap();

        assert_eq!(
            app.layout.scrollbar_area,
            Some(split_screen(app.screen).scrollbar)
        );
        assert_eq!(app.layout.tab_areas.len(), 5);
        // The hero fills the first viewport; nothing to click yet
        assert!(app.layout.page_targets.is_empty());

        let buffer = terminal.backend().buffer();
        let status: String = (0..100).map(|x| buffer[(x, 29)].symbol().to_string()).collect();
        assert!(status.contains("home.sh"));
        assert!(status.contains("quit"));
    }

    #[test]
    fn test_ui_records_bio_key_targets() {
        let mut app = App::new(FolioConfig::default(), Portfolio::default());
        app.screen = Rect::new(0, 0, 100, 40);
        let now = Instant::now();
        app.step(now);
        let about = app.document.section(folio_core::SectionId::About).unwrap().top;
        app.scroll.scroll_to_line(about);
        app.step(now + std::time::Duration::from_secs(2));

        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| app.ui(f)).unwrap();

        let buffer = terminal.backend().buffer();
        let (rect, _) = app
            .layout
            .page_targets
            .iter()
            .find(|(_, t)| *t == PageTarget::BioKey("skills"))
            .expect("skills key on screen");
        let cell_text: String = (rect.x..rect.x + rect.width)
            .map(|x| buffer[(x, rect.y)].symbol().to_string())
            .collect();
        assert_eq!(cell_text, "\"skills\"");
    }
}
