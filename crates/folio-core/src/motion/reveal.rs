//! Scroll-triggered reveals, fade-ins and parallax

use std::time::{Duration, Instant};

use crate::constants::motion::ENTRANCE_OFFSET;

/// Fraction of a section's height inside the viewport, in [0, 1]
pub fn visible_fraction(
    section_top: f64,
    section_height: f64,
    scroll_y: f64,
    viewport_height: f64,
) -> f64 {
    if section_height <= 0.0 || !section_height.is_finite() {
        return 0.0;
    }
    let top = section_top.max(scroll_y);
    let bottom = (section_top + section_height).min(scroll_y + viewport_height);
    ((bottom - top) / section_height).clamp(0.0, 1.0)
}

/// Parallax shift for a decorative layer
///
/// `section_top` is relative to the viewport: the layer moves by `factor`
/// of the distance the section has travelled up from the viewport bottom.
pub fn parallax_offset(viewport_height: f64, section_top: f64, factor: f64) -> f64 {
    let offset = (viewport_height - section_top) * factor;
    if offset.is_finite() {
        offset
    } else {
        0.0
    }
}

/// Opacity and entrance offset of a fading section
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeIn {
    /// 0.0 hidden → 1.0 fully shown
    pub opacity: f64,
    /// Rows below the resting position, shrinking to 0
    pub offset: f64,
}

impl FadeIn {
    pub const HIDDEN: FadeIn = FadeIn {
        opacity: 0.0,
        offset: ENTRANCE_OFFSET,
    };

    pub const SHOWN: FadeIn = FadeIn {
        opacity: 1.0,
        offset: 0.0,
    };

    pub fn is_settled(&self) -> bool {
        self.opacity >= 1.0
    }
}

/// One-shot visibility latch: once a section has been seen it stays revealed
#[derive(Debug, Clone)]
pub struct RevealTracker {
    threshold: f64,
    fade: Duration,
    revealed_at: Option<Instant>,
}

impl RevealTracker {
    pub fn new(threshold: f64, fade: Duration) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            fade,
            revealed_at: None,
        }
    }

    /// Feed the section's visible fraction; returns true when it first reveals
    pub fn observe(&mut self, fraction: f64, now: Instant) -> bool {
        if self.revealed_at.is_some() {
            return false;
        }
        // A zero threshold still needs the section to be on screen
        let visible = fraction > 0.0 && fraction >= self.threshold;
        if visible {
            self.revealed_at = Some(now);
        }
        visible
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed_at.is_some()
    }

    /// Fade state at `now`, eased out
    pub fn fade(&self, now: Instant) -> FadeIn {
        let Some(at) = self.revealed_at else {
            return FadeIn::HIDDEN;
        };
        if self.fade.is_zero() {
            return FadeIn::SHOWN;
        }
        let t = (now.saturating_duration_since(at).as_secs_f64() / self.fade.as_secs_f64())
            .clamp(0.0, 1.0);
        let eased = 1.0 - (1.0 - t).powi(3);
        FadeIn {
            opacity: eased,
            offset: ENTRANCE_OFFSET * (1.0 - eased),
        }
    }

    /// Whether the fade is still running at `now`
    pub fn is_animating(&self, now: Instant) -> bool {
        self.is_revealed() && !self.fade(now).is_settled()
    }
}
