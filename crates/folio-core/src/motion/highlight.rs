//! Short-lived highlight of one biography field
//!
//! Clicking a key in the `bio.json` card lights up the matching log row
//! for [`HIGHLIGHT_DURATION`]. A newer click replaces the key and restarts
//! the timer.

use std::time::{Duration, Instant};

use crate::constants::motion::HIGHLIGHT_DURATION;

#[derive(Debug, Clone)]
pub struct Highlight {
    key: Option<String>,
    until: Option<Instant>,
    duration: Duration,
}

impl Default for Highlight {
    fn default() -> Self {
        Self::new(HIGHLIGHT_DURATION)
    }
}

impl Highlight {
    pub fn new(duration: Duration) -> Self {
        Self {
            key: None,
            until: None,
            duration,
        }
    }

    pub fn set(&mut self, key: impl Into<String>, now: Instant) {
        self.key = Some(key.into());
        self.until = Some(now + self.duration);
    }

    /// Key lit at `now`, if any
    pub fn active(&self, now: Instant) -> Option<&str> {
        match self.until {
            Some(until) if now < until => self.key.as_deref(),
            _ => None,
        }
    }

    /// Drop an expired key. Returns true if one was dropped.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.until {
            Some(until) if now >= until => {
                self.key = None;
                self.until = None;
                true
            }
            _ => false,
        }
    }
}
