//! Scroll-to-progress mapping
//!
//! Progress is a pure function of the scroll offset for fixed metrics:
//! zero until the first marker is `lead_fraction` of a viewport away from
//! entering view, one once the scroll offset reaches the end marker.

use serde::{Deserialize, Serialize};

use super::metrics::TimelineMetrics;

/// Scroll offset and viewport height at one tick
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollSample {
    pub scroll_y: f64,
    pub viewport_height: f64,
}

impl ScrollSample {
    pub fn new(scroll_y: f64, viewport_height: f64) -> Self {
        Self {
            scroll_y,
            viewport_height,
        }
    }
}

/// Scroll offsets between which the line draws itself
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRange {
    pub start: f64,
    pub end: f64,
}

impl ScrollRange {
    pub fn new(metrics: &TimelineMetrics, viewport_height: f64, lead_fraction: f64) -> Self {
        Self {
            start: metrics.start_y - viewport_height * lead_fraction,
            end: metrics.start_y + metrics.height,
        }
    }

    /// Normalized progress at a scroll offset, in [0, 1]
    ///
    /// A zero-length range maps every offset to 0, as does any non-finite input.
    pub fn progress_at(&self, scroll_y: f64) -> f64 {
        let span = self.end - self.start;
        if span == 0.0 || !span.is_finite() || !scroll_y.is_finite() {
            return 0.0;
        }
        let p = (scroll_y - self.start) / span;
        if p.is_nan() {
            return 0.0;
        }
        p.clamp(0.0, 1.0)
    }
}

/// Curve applied to smoothed progress before it becomes a line length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Easing {
    #[default]
    Linear,
    /// p³: slow start, accelerating reveal
    Cubic,
}

impl Easing {
    pub fn apply(&self, p: f64) -> f64 {
        let p = p.clamp(0.0, 1.0);
        match self {
            Easing::Linear => p,
            Easing::Cubic => p * p * p,
        }
    }
}

/// Everything the view needs to draw the line for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineFrame {
    pub metrics: TimelineMetrics,
    /// Progress straight from the scroll offset
    pub raw_progress: f64,
    /// Spring-smoothed progress
    pub progress: f64,
    /// Smoothed progress after easing
    pub eased_progress: f64,
    /// Length of the filled segment in document units
    pub pixel_height: f64,
    /// Filled segment as a percentage of the full line
    pub percent: f64,
    /// Completion latch state
    pub complete: bool,
}

impl LineFrame {
    pub fn new(
        metrics: TimelineMetrics,
        raw_progress: f64,
        progress: f64,
        easing: Easing,
        complete: bool,
    ) -> Self {
        let eased_progress = easing.apply(progress);
        Self {
            metrics,
            raw_progress,
            progress,
            eased_progress,
            pixel_height: eased_progress * metrics.height,
            percent: eased_progress * 100.0,
            complete,
        }
    }
}
