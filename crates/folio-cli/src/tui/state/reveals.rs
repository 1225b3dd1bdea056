//! Reveal State - which sections have scrolled into view
//!
//! The hero is always shown. Every other section fades in the first time
//! enough of it is visible, and stays shown after that.

use std::time::{Duration, Instant};

use folio_core::motion::{visible_fraction, RevealTracker};
use folio_core::{MotionConfig, SectionId};

use crate::tui::page::{PageDocument, PageMotion};

#[derive(Debug, Clone)]
pub struct RevealState {
    trackers: Vec<(SectionId, RevealTracker)>,
}

impl RevealState {
    pub fn new(config: &MotionConfig) -> Self {
        let fade = Duration::from_millis(config.fade_duration_ms);
        let trackers = SectionId::ALL
            .iter()
            .filter(|id| **id != SectionId::Hero)
            .map(|id| {
                let threshold = match id {
                    SectionId::Contact => config.contact_reveal_threshold,
                    _ => config.about_reveal_threshold,
                };
                (*id, RevealTracker::new(threshold, fade))
            })
            .collect();
        Self { trackers }
    }

    /// Feed the current viewport; returns the sections that revealed just now
    pub fn observe(
        &mut self,
        doc: &PageDocument,
        scroll: usize,
        viewport_height: u16,
        now: Instant,
    ) -> Vec<SectionId> {
        let mut revealed = Vec::new();
        for (id, tracker) in &mut self.trackers {
            let Some(span) = doc.section(*id) else {
                continue;
            };
            let fraction = visible_fraction(
                span.top as f64,
                span.height as f64,
                scroll as f64,
                f64::from(viewport_height),
            );
            if tracker.observe(fraction, now) {
                revealed.push(*id);
            }
        }
        revealed
    }

    pub fn is_revealed(&self, id: SectionId) -> bool {
        self.trackers
            .iter()
            .find(|(tracked, _)| *tracked == id)
            .map_or(true, |(_, tracker)| tracker.is_revealed())
    }

    /// Fade of every section at `now`
    pub fn motion(&self, now: Instant) -> PageMotion {
        let mut motion = PageMotion::settled();
        for (id, tracker) in &self.trackers {
            motion.set(*id, tracker.fade(now));
        }
        motion
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.trackers.iter().any(|(_, t)| t.is_animating(now))
    }
}
