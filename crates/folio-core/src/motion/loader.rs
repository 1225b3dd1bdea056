//! Contact section loading bar and ping button

use std::time::{Duration, Instant};

use crate::constants::motion::{LOADER_INTERVAL, LOADER_LINGER, LOADER_STEP, PING_DELAY, PONG_HOLD};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderPhase {
    /// Not started yet
    Waiting,
    /// Bar visible at this percentage
    Loading(u8),
    /// Bar hidden, content shown
    Loaded,
}

/// Fake "establishing connection" bar
///
/// Fills by [`LOADER_STEP`] percent every [`LOADER_INTERVAL`] once started,
/// then lingers at 100 % for [`LOADER_LINGER`] before hiding.
#[derive(Debug, Clone, Default)]
pub struct ConnectionLoader {
    started: Option<Instant>,
    phase: Option<LoaderPhase>,
}

impl ConnectionLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start filling. Later calls are ignored.
    pub fn start(&mut self, now: Instant) {
        if self.started.is_none() {
            self.started = Some(now);
            self.phase = Some(LoaderPhase::Loading(0));
        }
    }

    pub fn phase(&self) -> LoaderPhase {
        self.phase.unwrap_or(LoaderPhase::Waiting)
    }

    pub fn progress(&self) -> u8 {
        match self.phase() {
            LoaderPhase::Waiting => 0,
            LoaderPhase::Loading(p) => p,
            LoaderPhase::Loaded => 100,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.phase() == LoaderPhase::Loaded
    }

    /// Update to `now`. Returns true if the phase changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(started) = self.started else {
            return false;
        };
        let next = Self::phase_at(now.saturating_duration_since(started));
        if Some(next) == self.phase {
            return false;
        }
        self.phase = Some(next);
        true
    }

    fn phase_at(elapsed: Duration) -> LoaderPhase {
        let steps_to_full = 100u32.div_ceil(u32::from(LOADER_STEP.max(1)));
        let full_at = LOADER_INTERVAL * steps_to_full;
        if elapsed >= full_at + LOADER_LINGER {
            return LoaderPhase::Loaded;
        }
        let steps = elapsed.as_millis() / LOADER_INTERVAL.as_millis().max(1);
        let percent = (steps * u128::from(LOADER_STEP)).min(100) as u8;
        LoaderPhase::Loading(percent)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PingPhase {
    Idle,
    Pinging,
    Ponged,
}

/// Ping button: a short delay, then "pong" and the mail link opens
#[derive(Debug, Clone)]
pub struct Ping {
    phase: PingPhase,
    since: Option<Instant>,
}

impl Default for Ping {
    fn default() -> Self {
        Self {
            phase: PingPhase::Idle,
            since: None,
        }
    }
}

impl Ping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> PingPhase {
        self.phase
    }

    /// Press the button. Returns false if a ping is already in flight.
    pub fn trigger(&mut self, now: Instant) -> bool {
        if self.phase != PingPhase::Idle {
            return false;
        }
        self.phase = PingPhase::Pinging;
        self.since = Some(now);
        true
    }

    /// Update to `now`. Returns true exactly once per ping, when it enters
    /// `Ponged` and the caller should open the mail link.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(since) = self.since else {
            return false;
        };
        let elapsed = now.saturating_duration_since(since);
        match self.phase {
            PingPhase::Pinging if elapsed >= PING_DELAY => {
                self.phase = PingPhase::Ponged;
                self.since = Some(since + PING_DELAY);
                // A single late tick may also cover the pong hold
                if now.saturating_duration_since(since + PING_DELAY) >= PONG_HOLD {
                    self.phase = PingPhase::Idle;
                    self.since = None;
                }
                true
            }
            PingPhase::Ponged if elapsed >= PONG_HOLD => {
                self.phase = PingPhase::Idle;
                self.since = None;
                false
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_loader_waits_until_started() {
        let now = Instant::now();
        let mut loader = ConnectionLoader::new();
        assert!(!loader.tick(now + ms(5000)));
        assert_eq!(loader.phase(), LoaderPhase::Waiting);
    }

    #[test]
    fn test_loader_fills_in_steps() {
        let now = Instant::now();
        let mut loader = ConnectionLoader::new();
        loader.start(now);
        assert_eq!(loader.progress(), 0);

        loader.tick(now + ms(29));
        assert_eq!(loader.progress(), 0);
        loader.tick(now + ms(30));
        assert_eq!(loader.progress(), 2);
        loader.tick(now + ms(300));
        assert_eq!(loader.progress(), 20);
    }

    #[test]
    fn test_loader_lingers_then_hides() {
        let now = Instant::now();
        let mut loader = ConnectionLoader::new();
        loader.start(now);

        // 50 steps of 30 ms reach 100 %
        loader.tick(now + ms(1500));
        assert_eq!(loader.phase(), LoaderPhase::Loading(100));
        loader.tick(now + ms(1799));
        assert_eq!(loader.phase(), LoaderPhase::Loading(100));
        assert!(loader.tick(now + ms(1800)));
        assert!(loader.is_loaded());
    }

    #[test]
    fn test_loader_start_is_once() {
        let now = Instant::now();
        let mut loader = ConnectionLoader::new();
        loader.start(now);
        loader.start(now + ms(1000));
        loader.tick(now + ms(1000));
        assert!(loader.progress() > 60);
    }

    #[test]
    fn test_ping_cycle() {
        let now = Instant::now();
        let mut ping = Ping::new();
        assert!(ping.trigger(now));
        assert!(!ping.trigger(now + ms(10)));
        assert_eq!(ping.phase(), PingPhase::Pinging);

        assert!(!ping.tick(now + ms(599)));
        assert!(ping.tick(now + ms(600)));
        assert_eq!(ping.phase(), PingPhase::Ponged);
        assert!(!ping.tick(now + ms(700)));

        assert!(!ping.tick(now + ms(2600)));
        assert_eq!(ping.phase(), PingPhase::Idle);
        assert!(ping.trigger(now + ms(2700)));
    }

    #[test]
    fn test_late_tick_still_reports_pong_once() {
        let now = Instant::now();
        let mut ping = Ping::new();
        ping.trigger(now);
        assert!(ping.tick(now + ms(10_000)));
        assert_eq!(ping.phase(), PingPhase::Idle);
        assert!(!ping.tick(now + ms(20_000)));
    }
}
