//! Delayed marker resampling
//!
//! Entrance animations move markers after the first layout. The schedule
//! re-reads marker geometry at fixed delays after attach (500 ms and
//! 1000 ms by default). This is a settling heuristic: it does not know when
//! layout is actually done, it just looks again later.

use std::time::{Duration, Instant};

use crate::constants::timeline::RESAMPLE_DELAYS;

/// Handle to one scheduled resample
///
/// Tickets from before a [`ResampleSchedule::cancel`] carry a stale
/// generation and are ignored when fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResampleTicket {
    pub generation: u64,
    pub deadline: Instant,
}

/// Pending delayed resamples
#[derive(Debug, Clone)]
pub struct ResampleSchedule {
    delays: Vec<Duration>,
    pending: Vec<ResampleTicket>,
    generation: u64,
}

impl ResampleSchedule {
    pub fn new(delays: Vec<Duration>) -> Self {
        Self {
            delays,
            pending: Vec::new(),
            generation: 0,
        }
    }

    pub fn delays(&self) -> &[Duration] {
        &self.delays
    }

    /// Schedule one resample per configured delay, measured from `now`
    pub fn arm(&mut self, now: Instant) {
        let generation = self.generation;
        self.pending = self
            .delays
            .iter()
            .map(|delay| ResampleTicket {
                generation,
                deadline: now + *delay,
            })
            .collect();
        self.pending.sort_by_key(|t| t.deadline);
    }

    /// Remove and return every ticket whose deadline has passed
    pub fn take_due(&mut self, now: Instant) -> Vec<ResampleTicket> {
        let split = self
            .pending
            .iter()
            .position(|t| t.deadline > now)
            .unwrap_or(self.pending.len());
        self.pending.drain(..split).collect()
    }

    /// Tickets not yet due
    pub fn pending(&self) -> &[ResampleTicket] {
        &self.pending
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.first().map(|t| t.deadline)
    }

    /// Whether a ticket belongs to the current generation
    pub fn is_current(&self, ticket: &ResampleTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Drop pending tickets and invalidate any already handed out
    pub fn cancel(&mut self) {
        self.pending.clear();
        self.generation = self.generation.wrapping_add(1);
    }
}

impl Default for ResampleSchedule {
    fn default() -> Self {
        Self::new(RESAMPLE_DELAYS.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arm_uses_configured_delays() {
        let now = Instant::now();
        let mut schedule = ResampleSchedule::default();
        schedule.arm(now);
        let deadlines: Vec<_> = schedule.pending().iter().map(|t| t.deadline).collect();
        assert_eq!(
            deadlines,
            vec![now + Duration::from_millis(500), now + Duration::from_millis(1000)]
        );
        assert_eq!(schedule.next_deadline(), Some(now + Duration::from_millis(500)));
    }

    #[test]
    fn test_take_due_in_order() {
        let now = Instant::now();
        let mut schedule = ResampleSchedule::default();
        schedule.arm(now);

        assert!(schedule.take_due(now + Duration::from_millis(499)).is_empty());
        assert_eq!(schedule.take_due(now + Duration::from_millis(500)).len(), 1);
        assert_eq!(schedule.pending().len(), 1);
        assert_eq!(schedule.take_due(now + Duration::from_secs(5)).len(), 1);
        assert!(schedule.pending().is_empty());
        assert_eq!(schedule.next_deadline(), None);
    }

    #[test]
    fn test_cancel_invalidates_handed_out_tickets() {
        let now = Instant::now();
        let mut schedule = ResampleSchedule::default();
        schedule.arm(now);
        let ticket = schedule.pending()[0];
        assert!(schedule.is_current(&ticket));

        schedule.cancel();
        assert!(schedule.pending().is_empty());
        assert!(!schedule.is_current(&ticket));
    }

    #[test]
    fn test_rearm_replaces_pending() {
        let now = Instant::now();
        let mut schedule = ResampleSchedule::new(vec![Duration::from_millis(300)]);
        schedule.arm(now);
        schedule.arm(now + Duration::from_secs(1));
        assert_eq!(schedule.pending().len(), 1);
        assert_eq!(
            schedule.next_deadline(),
            Some(now + Duration::from_millis(1300))
        );
    }
}
