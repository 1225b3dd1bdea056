//! Per-section fade state applied at render time

use folio_core::motion::FadeIn;
use folio_core::SectionId;

/// Fade of every section, indexed by [`SectionId::index`]
#[derive(Debug, Clone, PartialEq)]
pub struct PageMotion {
    fades: [FadeIn; SectionId::ALL.len()],
}

impl PageMotion {
    /// Everything fully shown
    pub fn settled() -> Self {
        Self {
            fades: [FadeIn::SHOWN; SectionId::ALL.len()],
        }
    }

    pub fn set(&mut self, id: SectionId, fade: FadeIn) {
        self.fades[id.index()] = fade;
    }

    pub fn fade(&self, id: SectionId) -> FadeIn {
        self.fades[id.index()]
    }

    /// Whole rows the section is drawn below its resting position
    pub fn offset_rows(&self, id: SectionId) -> usize {
        let offset = self.fade(id).offset;
        if offset.is_finite() && offset > 0.0 {
            offset.round() as usize
        } else {
            0
        }
    }

    /// Row offsets only; opacity changes don't move anything
    pub fn same_geometry(&self, other: &PageMotion) -> bool {
        SectionId::ALL
            .iter()
            .all(|id| self.offset_rows(*id) == other.offset_rows(*id))
    }
}

impl Default for PageMotion {
    fn default() -> Self {
        Self::settled()
    }
}
