//! Marker provider backed by the last page layout
//!
//! The app captures a [`LayoutSnapshot`] every frame, after layout. The
//! progress line controller reads marker boxes from it through
//! [`MarkerProvider`], viewport-relative like a real layout engine would
//! report them.

use std::sync::Arc;

use folio_core::timeline::{MarkerProvider, MarkerRect, MarkerRole};
use parking_lot::RwLock;

use super::document::PageDocument;
use super::motion::PageMotion;

/// Marker position at capture time, in document rows
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapshotMarker {
    pub role: MarkerRole,
    pub row: f64,
    pub col: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutSnapshot {
    /// False until the page has been laid out once
    pub attached: bool,
    pub scroll_y: f64,
    pub markers: Vec<SnapshotMarker>,
}

impl LayoutSnapshot {
    /// Marker rows as drawn: resting row plus the owning section's entrance offset
    pub fn capture(doc: &PageDocument, motion: &PageMotion, scroll_y: f64) -> Self {
        let markers = doc
            .markers()
            .iter()
            .map(|m| SnapshotMarker {
                role: m.role,
                row: (m.row + motion.offset_rows(m.section)) as f64,
                col: f64::from(m.col),
            })
            .collect();
        Self {
            attached: true,
            scroll_y,
            markers,
        }
    }

    /// Same markers in the same place, ignoring scroll
    pub fn same_geometry(&self, other: &LayoutSnapshot) -> bool {
        self.attached == other.attached && self.markers == other.markers
    }
}

/// Cloneable handle onto the shared snapshot
#[derive(Debug, Clone, Default)]
pub struct LayoutMarkerProvider {
    snapshot: Arc<RwLock<LayoutSnapshot>>,
}

impl LayoutMarkerProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the snapshot; returns true if marker geometry changed
    pub fn update(&self, next: LayoutSnapshot) -> bool {
        let mut current = self.snapshot.write();
        let changed = !current.same_geometry(&next);
        *current = next;
        changed
    }
}

impl MarkerProvider for LayoutMarkerProvider {
    fn container_attached(&self) -> bool {
        self.snapshot.read().attached
    }

    fn marker_rects(&self) -> Vec<MarkerRect> {
        let snapshot = self.snapshot.read();
        snapshot
            .markers
            .iter()
            .map(|m| MarkerRect::new(m.role, m.row - snapshot.scroll_y, m.col, 1.0, 1.0))
            .collect()
    }
}
