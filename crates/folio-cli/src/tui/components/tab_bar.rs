//! Tab bar component - top bar with one tab per page section

use folio_core::SectionId;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::tui::themes::Theme;

/// Render the tab bar; returns the clickable area of each tab
pub fn render_tab_bar(
    f: &mut Frame,
    area: Rect,
    theme: &Theme,
    active: SectionId,
    owner: &str,
) -> Vec<(SectionId, Rect)> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border_color))
        .style(Style::default().bg(theme.bg_color));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let (spans, areas) = tab_spans(inner, theme, active);
    f.render_widget(Paragraph::new(Line::from(spans)), inner);

    // Owner name on the right when it fits after the tabs
    let used: u16 = areas.iter().map(|(_, r)| r.width + 1).sum();
    let name = format!("{owner} ");
    if used + name.width() as u16 + 2 <= inner.width {
        f.render_widget(
            Paragraph::new(Span::styled(name, Style::default().fg(theme.dim_color)))
                .alignment(Alignment::Right),
            inner,
        );
    }

    areas
}

/// Tab labels with their screen areas; tabs that don't fit are dropped
fn tab_spans(
    inner: Rect,
    theme: &Theme,
    active: SectionId,
) -> (Vec<Span<'static>>, Vec<(SectionId, Rect)>) {
    let mut spans = Vec::new();
    let mut areas = Vec::new();
    let mut x = inner.x;
    let right = inner.x + inner.width;

    for (i, id) in SectionId::ALL.iter().enumerate() {
        let label = format!(" {} {} ", i + 1, id.label());
        let width = label.width() as u16;
        if x + width > right {
            break;
        }
        let style = if *id == active {
            Style::default()
                .bg(theme.accent_color)
                .fg(theme.bg_color)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.dim_color)
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
        areas.push((*id, Rect::new(x, inner.y, width, 1)));
        x += width + 1;
    }
    (spans, areas)
}
