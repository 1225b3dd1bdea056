//! Page sections and scroll-based active tab

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionId {
    Hero,
    About,
    Experience,
    Projects,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Experience,
        SectionId::Projects,
        SectionId::Contact,
    ];

    /// Tab label shown in the navigation bar
    pub fn label(self) -> &'static str {
        match self {
            SectionId::Hero => "home.sh",
            SectionId::About => "about_me.sh",
            SectionId::Experience => "experience.sh",
            SectionId::Projects => "projects.sh",
            SectionId::Contact => "contact.sh",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Next section, wrapping to the first
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Section whose top is the last one at or above the middle of the viewport
///
/// `tops` lists each section with its document-relative top, in page order.
/// Falls back to the first section when none qualifies.
pub fn active_section(
    tops: &[(SectionId, f64)],
    scroll_y: f64,
    viewport_height: f64,
) -> SectionId {
    let midpoint = scroll_y + viewport_height / 2.0;
    tops.iter()
        .filter(|(_, top)| *top <= midpoint)
        .last()
        .or_else(|| tops.first())
        .map(|(id, _)| *id)
        .unwrap_or(SectionId::Hero)
}
