//! Completion latch for the timeline's terminal marker
//!
//! By default completion is a permanent "visited" state: once the line has
//! been fully drawn the end marker stays lit even if the reader scrolls
//! back up. `Reversible` clears it again when progress drops.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LatchMode {
    #[default]
    OneWay,
    Reversible,
}

#[derive(Debug, Clone)]
pub struct CompletionLatch {
    mode: LatchMode,
    /// Progress at or above `1.0 - tolerance` counts as complete
    tolerance: f64,
    complete: bool,
}

impl CompletionLatch {
    pub fn new(mode: LatchMode, tolerance: f64) -> Self {
        Self {
            mode,
            tolerance: tolerance.max(0.0),
            complete: false,
        }
    }

    /// Feed the current progress; returns true if the state changed
    pub fn observe(&mut self, progress: f64) -> bool {
        let reached = progress >= 1.0 - self.tolerance;
        let next = match self.mode {
            LatchMode::OneWay => self.complete || reached,
            LatchMode::Reversible => reached,
        };
        let changed = next != self.complete;
        self.complete = next;
        changed
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn reset(&mut self) {
        self.complete = false;
    }
}
