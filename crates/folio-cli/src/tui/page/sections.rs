//! Section layouts
//!
//! Each function appends one section's lines to a [`Sheet`]. Timeline dots
//! go through [`Sheet::dot`] so their rows are recorded.

use folio_core::content::web_url;
use folio_core::motion::{LoaderPhase, PingPhase};
use folio_core::timeline::MarkerRole;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::document::{PageTarget, PageView, TargetSpan, TIMELINE_COL};
use crate::tui::themes::Theme;
use crate::tui::utils::{display_width, pad_to_width, truncate_ellipsis, wrap_text};

/// Column where timeline entry text starts
const CONTENT_INDENT: usize = TIMELINE_COL as usize + 4;

/// Indent of headings and free text
const BODY_INDENT: usize = 4;

/// Width of the contact loading bar
const LOADER_BAR_WIDTH: usize = 20;

/// Widest the hero tagline gets
const TAGLINE_WIDTH: usize = 64;

/// Width of the `[Key]:` column in the system log
const FIELD_LABEL_WIDTH: usize = 16;

/// One run of a clickable line and what clicking it does
type Part = (Span<'static>, Option<PageTarget>);

/// Lines for one section plus the local rows of its timeline dots and
/// click targets
pub(super) struct Sheet<'t> {
    theme: &'t Theme,
    width: usize,
    lines: Vec<Line<'static>>,
    dots: Vec<(MarkerRole, usize)>,
    targets: Vec<TargetSpan>,
}

impl<'t> Sheet<'t> {
    pub(super) fn new(theme: &'t Theme, width: usize) -> Self {
        Self {
            theme,
            width,
            lines: Vec::new(),
            dots: Vec::new(),
            targets: Vec::new(),
        }
    }

    pub(super) fn finish(
        self,
    ) -> (Vec<Line<'static>>, Vec<(MarkerRole, usize)>, Vec<TargetSpan>) {
        (self.lines, self.dots, self.targets)
    }

    fn push(&mut self, line: Line<'static>) {
        self.lines.push(line);
    }

    fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    fn wrap_width(&self, indent: usize) -> usize {
        self.width.saturating_sub(indent + 2).max(10)
    }

    /// Timeline dot with text beside it
    fn dot(&mut self, role: MarkerRole, spans: Vec<Span<'static>>) {
        let glyph = if role == MarkerRole::End { "◆" } else { "●" };
        let mut line = vec![
            Span::raw(" ".repeat(TIMELINE_COL as usize)),
            Span::styled(glyph, Style::default().fg(self.theme.line_color)),
            Span::raw("   "),
        ];
        line.extend(spans);
        self.dots.push((role, self.lines.len()));
        self.push(Line::from(line));
    }

    fn indented(&mut self, indent: usize, spans: Vec<Span<'static>>) {
        let mut line = vec![Span::raw(" ".repeat(indent))];
        line.extend(spans);
        self.push(Line::from(line));
    }

    /// Indented line whose parts may be click targets
    fn clickable(&mut self, indent: usize, parts: Vec<Part>) {
        let row = self.lines.len();
        let mut col = indent;
        let mut spans = Vec::with_capacity(parts.len());
        for (span, target) in parts {
            let width = display_width(&span.content);
            if let Some(target) = target {
                self.targets.push(TargetSpan {
                    row,
                    col,
                    width,
                    target,
                });
            }
            col += width;
            spans.push(span);
        }
        self.indented(indent, spans);
    }

    fn paragraph(&mut self, text: &str, indent: usize, style: Style) {
        for row in wrap_text(text, self.wrap_width(indent)) {
            self.indented(indent, vec![Span::styled(row, style)]);
        }
    }

    fn centered(&mut self, spans: Vec<Span<'static>>) {
        let used: usize = spans.iter().map(|s| display_width(&s.content)).sum();
        let pad = self.width.saturating_sub(used) / 2;
        self.indented(pad, spans);
    }

    fn heading(&mut self, title: &str) {
        let style = Style::default()
            .fg(self.theme.title_color)
            .add_modifier(Modifier::BOLD);
        self.indented(BODY_INDENT, vec![Span::styled(title.to_string(), style)]);
        let rule = "─".repeat(display_width(title).max(3));
        self.indented(
            BODY_INDENT,
            vec![Span::styled(rule, Style::default().fg(self.theme.accent_color))],
        );
    }

    fn prompt(&mut self, command: &str) {
        self.indented(
            BODY_INDENT,
            vec![
                Span::styled("❯ ", Style::default().fg(self.theme.success_color)),
                Span::styled(command.to_string(), Style::default().fg(self.theme.dim_color)),
            ],
        );
    }

    /// `[React] [Rust] …`, wrapped
    fn tags(&mut self, tags: &[String], indent: usize) {
        if tags.is_empty() {
            return;
        }
        let style = Style::default().fg(self.theme.link_color);
        let max = self.wrap_width(indent);
        let mut row: Vec<Span<'static>> = Vec::new();
        let mut used = 0;
        for tag in tags {
            let label = format!("[{tag}]");
            let w = display_width(&label) + 1;
            if used > 0 && used + w > max {
                self.indented(indent, std::mem::take(&mut row));
                used = 0;
            }
            row.push(Span::styled(label, style));
            row.push(Span::raw(" "));
            used += w;
        }
        if !row.is_empty() {
            self.indented(indent, row);
        }
    }

    /// `[Key]:` column followed by a value
    fn field(&mut self, key: &str, value: String) {
        self.log_field(key, value, false);
    }

    /// System log row; a lit row glows in the accent colour
    fn log_field(&mut self, key: &str, value: String, lit: bool) {
        let label = pad_to_width(&format!("[{}]:", capitalize(key)), FIELD_LABEL_WIDTH);
        let (label_style, value_style) = if lit {
            let glow = Style::default()
                .fg(self.theme.accent_color)
                .add_modifier(Modifier::BOLD);
            (glow, glow)
        } else {
            (
                Style::default().fg(self.theme.secondary_color),
                Style::default().fg(self.theme.text_color),
            )
        };
        let mut spans = vec![
            Span::styled(label, label_style),
            Span::styled(value, value_style),
        ];
        if lit {
            spans.push(Span::styled(" ◂", label_style));
        }
        self.indented(BODY_INDENT, spans);
    }

    /// Pad the top so the content sits in the middle of a viewport
    pub(super) fn center_vertically(&mut self, viewport_height: usize) {
        let pad = viewport_height.saturating_sub(self.lines.len()) / 2;
        if pad == 0 {
            return;
        }
        let mut lines = vec![Line::default(); pad];
        lines.append(&mut self.lines);
        self.lines = lines;
        for (_, row) in self.dots.iter_mut() {
            *row += pad;
        }
        for target in self.targets.iter_mut() {
            target.row += pad;
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub(super) fn hero(sheet: &mut Sheet<'_>, view: &PageView<'_>) {
    let profile = &view.portfolio.profile;
    let theme = view.theme;
    let title = Style::default()
        .fg(theme.title_color)
        .add_modifier(Modifier::BOLD);
    let accent = Style::default().fg(theme.accent_color);
    let dim = Style::default().fg(theme.dim_color);

    let initials = profile.initials();
    let inner = display_width(&initials) + 2;
    sheet.centered(vec![Span::styled(format!("╭{}╮", "─".repeat(inner)), accent)]);
    sheet.centered(vec![
        Span::styled("│ ", accent),
        Span::styled(initials, title),
        Span::styled(" │", accent),
    ]);
    sheet.centered(vec![Span::styled(format!("╰{}╯", "─".repeat(inner)), accent)]);
    sheet.blank();

    sheet.centered(vec![Span::styled(profile.name.clone(), title)]);
    sheet.centered(vec![Span::styled(profile.headline.clone(), accent)]);
    sheet.blank();

    // Anchor the typed line on the longest phrase so it doesn't jump around
    let prefix = "I'm ";
    let longest = profile
        .phrases
        .iter()
        .map(|p| display_width(p))
        .max()
        .unwrap_or(0);
    let slot = display_width(prefix) + longest + 1;
    let pad = view.width as usize / 2 - (slot / 2).min(view.width as usize / 2);
    let room = (view.width as usize).saturating_sub(pad + display_width(prefix) + 1);
    let cursor = if view.cursor { "▌" } else { " " };
    sheet.indented(
        pad,
        vec![
            Span::styled(prefix, Style::default().fg(theme.text_color)),
            Span::styled(
                truncate_ellipsis(view.typed, room),
                Style::default().fg(theme.secondary_color),
            ),
            Span::styled(cursor, accent),
        ],
    );
    sheet.blank();

    let tagline_width = (view.width as usize).saturating_sub(4).min(TAGLINE_WIDTH);
    for row in wrap_text(&profile.tagline, tagline_width) {
        sheet.centered(vec![Span::styled(row, dim)]);
    }
    sheet.blank();

    let contact = &view.portfolio.contact;
    let links: Vec<String> = [contact.github.clone(), contact.linkedin.clone()]
        .into_iter()
        .flatten()
        .chain(std::iter::once(contact.email.clone()))
        .collect();
    let mut spans = Vec::new();
    for (i, link) in links.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" · ", dim));
        }
        spans.push(Span::styled(link, Style::default().fg(theme.link_color)));
    }
    sheet.centered(spans);
    sheet.blank();
    sheet.centered(vec![Span::styled("↓ scroll", dim)]);
}

pub(super) fn about(sheet: &mut Sheet<'_>, view: &PageView<'_>) {
    let bio = &view.portfolio.bio;
    let text = Style::default().fg(view.theme.text_color);

    sheet.blank();
    sheet.heading("About Me");
    sheet.blank();
    sheet.prompt("tail system_info.log");
    sheet.blank();
    for (key, value) in bio.fields() {
        sheet.log_field(key, value, view.highlight == Some(key));
    }
    sheet.blank();
    for paragraph in &bio.summary {
        sheet.paragraph(paragraph, BODY_INDENT, text);
        sheet.blank();
    }
    bio_card(sheet, view);
    sheet.blank();
}

/// `bio.json` window; each key lights up its system log row when clicked
fn bio_card(sheet: &mut Sheet<'_>, view: &PageView<'_>) {
    let bio = &view.portfolio.bio;
    let theme = view.theme;
    let dim = Style::default().fg(theme.dim_color);
    let key_style = Style::default()
        .fg(theme.secondary_color)
        .add_modifier(Modifier::UNDERLINED);
    let string = Style::default().fg(theme.success_color);

    sheet.indented(
        BODY_INDENT,
        vec![
            Span::styled("● ", Style::default().fg(theme.error_color)),
            Span::styled("● ", Style::default().fg(theme.warning_color)),
            Span::styled("● ", Style::default().fg(theme.success_color)),
            Span::styled(" bio.json", dim),
        ],
    );

    let key = |name: &'static str| -> Part {
        (
            Span::styled(format!("\"{name}\""), key_style),
            Some(PageTarget::BioKey(name)),
        )
    };
    let punct = |p: &'static str| -> Part { (Span::styled(p, dim), None) };
    let quoted = |value: &str| -> Part { (Span::styled(format!("\"{value}\""), string), None) };

    let mut rows: Vec<Vec<Part>> = vec![vec![punct("{")]];
    for (name, value) in [
        ("location", &bio.location),
        ("focus", &bio.focus),
        ("philosophy", &bio.philosophy),
    ] {
        rows.push(vec![
            punct("  "),
            key(name),
            punct(": "),
            quoted(value.as_str()),
            punct(","),
        ]);
    }
    for (name, items) in [("skills", &bio.skills), ("interests", &bio.interests)] {
        rows.push(vec![punct("  "), key(name), punct(": [")]);
        for (i, item) in items.iter().enumerate() {
            let comma = if i + 1 < items.len() { "," } else { "" };
            rows.push(vec![punct("    "), quoted(item.as_str()), punct(comma)]);
        }
        rows.push(vec![punct("  ],")]);
    }
    rows.push(vec![
        punct("  "),
        key("availability"),
        punct(": "),
        quoted(bio.availability.as_str()),
    ]);
    rows.push(vec![punct("}")]);

    for (i, parts) in rows.into_iter().enumerate() {
        let mut line = vec![(Span::styled(format!("{:>3}  ", i + 1), dim), None)];
        line.extend(parts);
        sheet.clickable(BODY_INDENT, line);
    }
}

pub(super) fn experience(sheet: &mut Sheet<'_>, view: &PageView<'_>) {
    let theme = view.theme;
    let title = Style::default()
        .fg(theme.title_color)
        .add_modifier(Modifier::BOLD);

    sheet.blank();
    sheet.heading("Experience");
    sheet.blank();
    for entry in &view.portfolio.experience {
        sheet.dot(
            MarkerRole::Milestone,
            vec![Span::styled(entry.position.clone(), title)],
        );
        sheet.indented(
            CONTENT_INDENT,
            vec![
                Span::styled(
                    entry.company.clone(),
                    Style::default().fg(theme.secondary_color),
                ),
                Span::styled(" · ", Style::default().fg(theme.dim_color)),
                Span::styled(entry.period.clone(), Style::default().fg(theme.dim_color)),
            ],
        );
        sheet.paragraph(
            &entry.description,
            CONTENT_INDENT,
            Style::default().fg(theme.text_color),
        );
        sheet.tags(&entry.technologies, CONTENT_INDENT);
        sheet.blank();
    }
}

pub(super) fn projects(sheet: &mut Sheet<'_>, view: &PageView<'_>) {
    let theme = view.theme;
    let portfolio = view.portfolio;
    let title = Style::default()
        .fg(theme.title_color)
        .add_modifier(Modifier::BOLD);
    let dim = Style::default().fg(theme.dim_color);
    let link = Style::default().fg(theme.link_color);

    sheet.blank();
    sheet.heading("Featured Projects");
    sheet.blank();
    if portfolio.projects.is_empty() {
        sheet.indented(CONTENT_INDENT, vec![Span::styled("Nothing here yet.", dim)]);
        sheet.blank();
    }
    for project in &portfolio.projects {
        sheet.dot(
            MarkerRole::Milestone,
            vec![Span::styled(project.title.clone(), title)],
        );
        sheet.paragraph(
            &project.description,
            CONTENT_INDENT,
            Style::default().fg(theme.text_color),
        );
        sheet.tags(&project.technologies, CONTENT_INDENT);

        let mut links = Vec::new();
        if let Some(github) = &project.github {
            links.push((Span::styled("code ", dim), None));
            links.push((
                Span::styled(github.clone(), link),
                Some(PageTarget::Link(web_url(github))),
            ));
            links.push((Span::raw("   "), None));
        }
        if let Some(live) = &project.live {
            links.push((Span::styled("live ", dim), None));
            links.push((
                Span::styled(live.clone(), link),
                Some(PageTarget::Link(web_url(live))),
            ));
        }
        if !links.is_empty() {
            sheet.clickable(CONTENT_INDENT, links);
        }
        sheet.blank();
    }

    if portfolio.marker_count() > 0 {
        sheet.dot(MarkerRole::End, vec![Span::styled("end of timeline", dim)]);
    }
}

pub(super) fn contact(sheet: &mut Sheet<'_>, view: &PageView<'_>) {
    let theme = view.theme;
    let contact = &view.portfolio.contact;
    let profile = &view.portfolio.profile;
    let dim = Style::default().fg(theme.dim_color);
    let link = Style::default().fg(theme.link_color);

    sheet.blank();
    sheet.heading("Contact");
    sheet.blank();
    sheet.prompt("./contact.sh");
    sheet.blank();

    match view.loader {
        LoaderPhase::Waiting | LoaderPhase::Loading(_) => {
            let percent = match view.loader {
                LoaderPhase::Loading(p) => p.min(100) as usize,
                _ => 0,
            };
            let filled = LOADER_BAR_WIDTH * percent / 100;
            sheet.indented(
                BODY_INDENT,
                vec![Span::styled("Establishing connection...", dim)],
            );
            sheet.indented(
                BODY_INDENT,
                vec![
                    Span::styled("[", dim),
                    Span::styled(
                        "█".repeat(filled),
                        Style::default().fg(theme.accent_color),
                    ),
                    Span::styled("░".repeat(LOADER_BAR_WIDTH - filled), dim),
                    Span::styled(format!("] {percent:>3}%"), dim),
                ],
            );
        }
        LoaderPhase::Loaded => {
            sheet.field("status", "Connection established".to_string());
            sheet.field("location", contact.location.clone());
            sheet.blank();
            sheet.indented(
                BODY_INDENT,
                vec![
                    Span::styled("> ", Style::default().fg(theme.title_color)),
                    Span::styled("Available channels:", dim),
                ],
            );
            let mut channels = vec![("mail", contact.email.clone(), contact.mailto())];
            if let Some(github) = &contact.github {
                channels.push(("github", github.clone(), web_url(github)));
            }
            if let Some(linkedin) = &contact.linkedin {
                channels.push(("linkedin", linkedin.clone(), web_url(linkedin)));
            }
            for (label, value, url) in channels {
                sheet.clickable(
                    BODY_INDENT + 2,
                    vec![
                        (Span::styled(pad_to_width(label, 10), dim), None),
                        (Span::styled(value, link), Some(PageTarget::Link(url))),
                    ],
                );
            }
            sheet.blank();

            let (badge, caption, color) = match view.ping {
                PingPhase::Idle => ("[p]", "ping", theme.accent_color),
                PingPhase::Pinging => ("[…]", "pinging...", theme.warning_color),
                PingPhase::Ponged => ("[✓]", "pong! opening mail client", theme.success_color),
            };
            sheet.indented(
                BODY_INDENT,
                vec![
                    Span::styled(badge, Style::default().fg(color).add_modifier(Modifier::BOLD)),
                    Span::raw(" "),
                    Span::styled(caption, Style::default().fg(color)),
                ],
            );
        }
    }

    sheet.blank();
    sheet.blank();
    sheet.centered(vec![Span::styled(
        format!(
            "© {} {}. Built with {}.",
            profile.year, profile.name, profile.built_with
        ),
        dim,
    )]);
}
