//! Typewriter text effect
//!
//! Types a phrase one character at a time, holds it, deletes it and moves
//! on to the next phrase. A single-phrase `once` writer stops after typing.
//! Time is passed in explicitly so the effect advances with the frame loop.

use std::time::{Duration, Instant};

use crate::config::MotionConfig;
use crate::constants::motion::CURSOR_BLINK;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterTimings {
    pub type_interval: Duration,
    pub delete_interval: Duration,
    pub hold: Duration,
}

impl Default for TypewriterTimings {
    fn default() -> Self {
        Self::from(&MotionConfig::default())
    }
}

impl From<&MotionConfig> for TypewriterTimings {
    fn from(config: &MotionConfig) -> Self {
        Self {
            type_interval: Duration::from_millis(config.type_interval_ms),
            delete_interval: Duration::from_millis(config.delete_interval_ms),
            hold: Duration::from_millis(config.phrase_hold_ms),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypewriterPhase {
    Typing,
    Holding,
    Deleting,
    /// Single-shot writer finished
    Done,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<Vec<char>>,
    index: usize,
    shown: usize,
    phase: TypewriterPhase,
    cycle: bool,
    timings: TypewriterTimings,
    next_at: Instant,
    started: Instant,
}

impl Typewriter {
    /// Cycle through phrases forever
    pub fn cycling(phrases: &[String], timings: TypewriterTimings, now: Instant) -> Self {
        Self::build(phrases, true, timings, now)
    }

    /// Type one phrase and stop
    pub fn once(text: &str, timings: TypewriterTimings, now: Instant) -> Self {
        Self::build(&[text.to_string()], false, timings, now)
    }

    fn build(phrases: &[String], cycle: bool, timings: TypewriterTimings, now: Instant) -> Self {
        // Zero intervals would never let advance() catch up
        let floor = Duration::from_millis(1);
        let timings = TypewriterTimings {
            type_interval: timings.type_interval.max(floor),
            delete_interval: timings.delete_interval.max(floor),
            hold: timings.hold,
        };
        let phrases: Vec<Vec<char>> = phrases.iter().map(|p| p.chars().collect()).collect();
        let phase = if phrases.iter().all(|p| p.is_empty()) {
            TypewriterPhase::Done
        } else {
            TypewriterPhase::Typing
        };
        Self {
            phrases,
            index: 0,
            shown: 0,
            phase,
            cycle,
            timings,
            next_at: now + timings.type_interval,
            started: now,
        }
    }

    pub fn phase(&self) -> TypewriterPhase {
        self.phase
    }

    pub fn phrase_index(&self) -> usize {
        self.index
    }

    /// Currently visible text
    pub fn text(&self) -> String {
        self.phrases
            .get(self.index)
            .map(|p| p.iter().take(self.shown).collect())
            .unwrap_or_default()
    }

    pub fn is_done(&self) -> bool {
        self.phase == TypewriterPhase::Done
    }

    /// Blinking cursor state
    pub fn cursor_visible(&self, now: Instant) -> bool {
        let elapsed = now.saturating_duration_since(self.started).as_millis();
        (elapsed / CURSOR_BLINK.as_millis()) % 2 == 0
    }

    /// Catch up to `now`. Returns true if the visible text changed.
    pub fn advance(&mut self, now: Instant) -> bool {
        let mut changed = false;
        while self.phase != TypewriterPhase::Done && self.next_at <= now {
            changed |= self.step();
        }
        changed
    }

    fn step(&mut self) -> bool {
        let len = self.phrases.get(self.index).map_or(0, Vec::len);
        match self.phase {
            TypewriterPhase::Typing => {
                if self.shown < len {
                    self.shown += 1;
                }
                if self.shown >= len {
                    if self.cycle {
                        self.phase = TypewriterPhase::Holding;
                        self.next_at += self.timings.hold;
                    } else {
                        self.phase = TypewriterPhase::Done;
                    }
                } else {
                    self.next_at += self.timings.type_interval;
                }
                true
            }
            TypewriterPhase::Holding => {
                self.phase = TypewriterPhase::Deleting;
                self.next_at += self.timings.delete_interval;
                false
            }
            TypewriterPhase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.index = (self.index + 1) % self.phrases.len().max(1);
                    self.phase = TypewriterPhase::Typing;
                    self.next_at += self.timings.type_interval;
                } else {
                    self.next_at += self.timings.delete_interval;
                }
                true
            }
            TypewriterPhase::Done => false,
        }
    }
}
