//! Status bar component - bottom bar with section, timeline progress, shortcuts

use folio_core::SectionId;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::tui::themes::Theme;

/// What the status bar reports
#[derive(Debug, Clone, Copy)]
pub struct StatusInfo {
    pub section: SectionId,
    /// Drawn share of the timeline, 0-100
    pub percent: f64,
    pub complete: bool,
    /// Scrolled to the bottom of the page
    pub at_end: bool,
}

/// Render the status bar at the bottom of the screen
pub fn render_status_bar(f: &mut Frame, area: Rect, theme: &Theme, info: StatusInfo) {
    let bg = Paragraph::new("").style(Style::default().bg(theme.status_bar_bg_color));
    f.render_widget(bg, area);

    let left_spans = status_spans(theme, info);
    let left_width: u16 = left_spans.iter().map(|s| s.content.width() as u16).sum();

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(left_width), Constraint::Fill(1)])
        .split(area);

    f.render_widget(Paragraph::new(Line::from(left_spans)), chunks[0]);

    let commands = build_commands_for_width(chunks[1].width as usize, theme);
    f.render_widget(
        Paragraph::new(Line::from(commands)).alignment(Alignment::Right),
        chunks[1],
    );
}

fn status_spans(theme: &Theme, info: StatusInfo) -> Vec<Span<'static>> {
    let dim = Style::default().fg(theme.dim_color);
    // Fixed width so the bar does not jitter while the spring moves
    let percent = format!("{:>3.0}%", info.percent.clamp(0.0, 100.0));
    let (marker, marker_color) = if info.complete {
        ("◆", theme.accent_color)
    } else {
        ("◇", theme.dim_color)
    };

    let mut spans = vec![
        Span::raw(" "),
        Span::styled(info.section.label(), Style::default().fg(theme.title_color)),
        Span::styled(" │ ", dim),
        Span::styled("timeline ", dim),
        Span::styled(percent, Style::default().fg(theme.line_fill_color)),
        Span::raw(" "),
        Span::styled(marker, Style::default().fg(marker_color)),
    ];
    if info.at_end {
        spans.push(Span::styled(" │ ", dim));
        spans.push(Span::styled("end", dim));
    }
    spans
}

/// Build command spans based on available width
/// Priority (highest to lowest): quit, jump, ping, next, scroll
fn build_commands_for_width<'a>(width: usize, theme: &'a Theme) -> Vec<Span<'a>> {
    // (key_text, desc_text, total width)
    let commands: [(&str, &str, usize); 5] = [
        (" q ", "quit ", 8),
        (" 1-5 ", "jump ", 10),
        (" p ", "ping ", 8),
        (" Tab ", "next ", 10),
        (" j/k ", "scroll ", 12),
    ];

    let mut spans = Vec::new();
    let mut used_width = 0;

    for (key, desc, cmd_width) in commands {
        if used_width + cmd_width <= width {
            spans.push(Span::styled(
                key,
                Style::default().bg(theme.border_color).fg(theme.text_color),
            ));
            spans.push(Span::styled(desc, Style::default().fg(theme.dim_color)));
            used_width += cmd_width;
        }
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::themes::THEME_REGISTRY;

    fn text(spans: &[Span<'_>]) -> String {
        spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_command_widths_match_text() {
        let theme = THEME_REGISTRY.get_or_default("midnight");
        let spans = build_commands_for_width(200, theme);
        assert_eq!(text(&spans).width(), 48);
    }

    #[test]
    fn test_commands_drop_lowest_priority_first() {
        let theme = THEME_REGISTRY.get_or_default("midnight");
        let narrow = text(&build_commands_for_width(20, theme));
        assert!(narrow.contains("quit"));
        assert!(narrow.contains("jump"));
        assert!(!narrow.contains("scroll"));
        assert!(build_commands_for_width(4, theme).is_empty());
    }

    #[test]
    fn test_status_shows_section_and_percent() {
        let theme = THEME_REGISTRY.get_or_default("midnight");
        let info = StatusInfo {
            section: SectionId::Experience,
            percent: 42.4,
            complete: false,
            at_end: false,
        };
        let line = text(&status_spans(theme, info));
        assert!(line.contains("experience.sh"));
        assert!(line.contains(" 42%"));
        assert!(line.contains('◇'));
    }

    #[test]
    fn test_status_marks_completion() {
        let theme = THEME_REGISTRY.get_or_default("midnight");
        let info = StatusInfo {
            section: SectionId::Contact,
            percent: 100.0,
            complete: true,
            at_end: true,
        };
        let line = text(&status_spans(theme, info));
        assert!(line.contains("100% ◆"));
        assert!(line.ends_with("end"));
    }
}
