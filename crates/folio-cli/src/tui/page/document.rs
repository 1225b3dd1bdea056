//! Page document
//!
//! Lays the portfolio out as one tall column of styled lines, the way a
//! browser lays out a long single page. Section tops and timeline dot
//! positions are recorded as the lines are produced, so the marker
//! provider can report them without re-parsing anything.

use folio_core::motion::{LoaderPhase, PingPhase};
use folio_core::timeline::MarkerRole;
use folio_core::{Portfolio, SectionId};
use ratatui::text::Line;

use super::sections::{self, Sheet};
use crate::tui::themes::Theme;

/// Column of the timeline dots and line
pub const TIMELINE_COL: u16 = 4;

/// Everything the layout depends on
pub struct PageView<'a> {
    pub portfolio: &'a Portfolio,
    pub theme: &'a Theme,
    pub width: u16,
    pub viewport_height: u16,
    /// Current typewriter text and cursor
    pub typed: &'a str,
    pub cursor: bool,
    pub loader: LoaderPhase,
    pub ping: PingPhase,
    /// Biography field lit by a click on the bio.json card
    pub highlight: Option<&'a str>,
}

/// Rows owned by a section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpan {
    pub id: SectionId,
    pub top: usize,
    pub height: usize,
}

impl SectionSpan {
    pub fn contains(&self, row: usize) -> bool {
        row >= self.top && row < self.top + self.height
    }
}

/// A timeline dot in document rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerRow {
    pub role: MarkerRole,
    pub row: usize,
    pub col: u16,
    pub section: SectionId,
}

/// What a click on part of the page does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageTarget {
    /// Light up a biography field
    BioKey(&'static str),
    /// Open in the browser or mail client
    Link(String),
}

/// A clickable run of cells in document rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetSpan {
    pub row: usize,
    pub col: usize,
    pub width: usize,
    pub target: PageTarget,
}

#[derive(Debug, Clone, Default)]
pub struct PageDocument {
    lines: Vec<Line<'static>>,
    sections: Vec<SectionSpan>,
    markers: Vec<MarkerRow>,
    targets: Vec<TargetSpan>,
}

impl PageDocument {
    pub fn build(view: &PageView<'_>) -> Self {
        let width = view.width as usize;
        let min_height = view.viewport_height as usize;
        let mut doc = PageDocument::default();

        for id in SectionId::ALL {
            let mut sheet = Sheet::new(view.theme, width);
            match id {
                SectionId::Hero => sections::hero(&mut sheet, view),
                SectionId::About => sections::about(&mut sheet, view),
                SectionId::Experience => sections::experience(&mut sheet, view),
                SectionId::Projects => sections::projects(&mut sheet, view),
                SectionId::Contact => sections::contact(&mut sheet, view),
            }
            if id == SectionId::Hero {
                sheet.center_vertically(min_height);
            }
            doc.append(id, sheet, min_height);
        }

        doc.assign_marker_roles();
        doc
    }

    fn append(&mut self, id: SectionId, sheet: Sheet<'_>, min_height: usize) {
        let top = self.lines.len();
        let (mut lines, dots, targets) = sheet.finish();
        while lines.len() < min_height {
            lines.push(Line::default());
        }
        let height = lines.len();
        self.markers.extend(dots.into_iter().map(|(role, local)| MarkerRow {
            role,
            row: top + local,
            col: TIMELINE_COL,
            section: id,
        }));
        self.targets.extend(targets.into_iter().map(|mut target| {
            target.row += top;
            target
        }));
        self.lines.extend(lines);
        self.sections.push(SectionSpan { id, top, height });
    }

    /// The first dot starts the line; the closing dot ends it
    fn assign_marker_roles(&mut self) {
        let last = self.markers.len().saturating_sub(1);
        for (i, marker) in self.markers.iter_mut().enumerate() {
            if marker.role == MarkerRole::End {
                continue;
            }
            marker.role = if i == 0 {
                MarkerRole::Start
            } else if i == last {
                MarkerRole::End
            } else {
                MarkerRole::Milestone
            };
        }
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, row: usize) -> Option<&Line<'static>> {
        self.lines.get(row)
    }

    pub fn sections(&self) -> &[SectionSpan] {
        &self.sections
    }

    pub fn section(&self, id: SectionId) -> Option<&SectionSpan> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn section_at(&self, row: usize) -> Option<&SectionSpan> {
        self.sections.iter().find(|s| s.contains(row))
    }

    /// Section tops for active-tab detection
    pub fn section_tops(&self) -> Vec<(SectionId, f64)> {
        self.sections.iter().map(|s| (s.id, s.top as f64)).collect()
    }

    pub fn markers(&self) -> &[MarkerRow] {
        &self.markers
    }

    pub fn targets(&self) -> &[TargetSpan] {
        &self.targets
    }
}
