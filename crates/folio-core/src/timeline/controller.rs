//! Scroll-synchronized progress line controller
//!
//! Owns everything one timeline view needs: the marker provider, the
//! current metrics, the host subscription, the settle schedule, the spring
//! and the completion latch. The host drives it with three calls:
//!
//! - [`attach`](ProgressLineController::attach) once the view is mounted
//! - [`pump`](ProgressLineController::pump) + [`frame`](ProgressLineController::frame)
//!   once per rendered frame
//! - [`detach`](ProgressLineController::detach) on teardown

use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::config::TimelineConfig;
use crate::constants::timeline::MAX_FRAME_DELTA;
use crate::error::TimelineError;

use super::latch::CompletionLatch;
use super::marker::{discover, MarkerProvider};
use super::metrics::TimelineMetrics;
use super::progress::{LineFrame, ScrollRange, ScrollSample};
use super::schedule::{ResampleSchedule, ResampleTicket};
use super::spring::Spring;
use super::subscription::{HostEvent, HostEventKind, HostSurface, Subscription};

/// Lifecycle phase of a controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerPhase {
    /// Not yet attached to a host surface
    Detached,
    /// Attached, but no markers found yet
    Uncomputed,
    /// Attached with metrics
    Computed,
    /// Torn down; never comes back
    Disposed,
}

pub struct ProgressLineController<P: MarkerProvider> {
    provider: P,
    config: TimelineConfig,
    sample: ScrollSample,
    metrics: Option<TimelineMetrics>,
    spring: Spring,
    latch: CompletionLatch,
    schedule: ResampleSchedule,
    subscription: Option<Subscription>,
    last_frame: Option<Instant>,
    disposed: bool,
    resamples: u64,
}

impl<P: MarkerProvider> ProgressLineController<P> {
    pub fn new(provider: P, config: TimelineConfig) -> Self {
        let spring = Spring::new(config.spring);
        let latch = CompletionLatch::new(config.latch, config.spring.rest_delta);
        let schedule = ResampleSchedule::new(config.resample_delays());
        Self {
            provider,
            config,
            sample: ScrollSample::default(),
            metrics: None,
            spring,
            latch,
            schedule,
            subscription: None,
            last_frame: None,
            disposed: false,
            resamples: 0,
        }
    }

    pub fn phase(&self) -> ControllerPhase {
        if self.disposed {
            ControllerPhase::Disposed
        } else if self.subscription.is_none() {
            ControllerPhase::Detached
        } else if self.metrics.is_none() {
            ControllerPhase::Uncomputed
        } else {
            ControllerPhase::Computed
        }
    }

    pub fn metrics(&self) -> Option<TimelineMetrics> {
        self.metrics
    }

    pub fn sample(&self) -> ScrollSample {
        self.sample
    }

    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }

    pub fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }

    pub fn schedule(&self) -> &ResampleSchedule {
        &self.schedule
    }

    /// Number of marker samples taken so far
    pub fn resample_count(&self) -> u64 {
        self.resamples
    }

    pub fn is_complete(&self) -> bool {
        self.latch.is_complete()
    }

    /// True while the spring is moving or a settle resample is pending
    pub fn is_animating(&self) -> bool {
        !self.disposed && (!self.spring.is_at_rest() || !self.schedule.pending().is_empty())
    }

    /// Subscribe to host scroll/resize/layout, sample markers now and schedule the
    /// settle resamples
    pub fn attach(
        &mut self,
        surface: &HostSurface,
        sample: ScrollSample,
        now: Instant,
    ) -> Result<(), TimelineError> {
        if self.disposed {
            return Err(TimelineError::Disposed);
        }
        if self.subscription.is_some() {
            return Err(TimelineError::AlreadyAttached);
        }

        self.subscription =
            Some(surface.subscribe(&[
                HostEventKind::Scroll,
                HostEventKind::Resize,
                HostEventKind::Layout,
            ]));
        self.sample = sample;
        self.resample();
        self.schedule.arm(now);
        self.last_frame = None;

        info!(
            delays = ?self.schedule.delays(),
            has_metrics = self.metrics.is_some(),
            "Progress line attached"
        );
        Ok(())
    }

    /// Apply host events delivered since the last pump
    ///
    /// Returns true if any event arrived.
    pub fn pump(&mut self) -> bool {
        let events = match self.subscription.as_mut() {
            Some(sub) => sub.drain(),
            None => return false,
        };
        let any = !events.is_empty();
        for event in events {
            match event {
                HostEvent::Scroll(sample) => self.sample = sample,
                HostEvent::Resize(sample) | HostEvent::Layout(sample) => {
                    self.sample = sample;
                    self.resample();
                }
            }
        }
        any
    }

    /// Re-read marker geometry and derive metrics
    ///
    /// Returns true if the metrics changed. Does nothing after detach.
    pub fn resample(&mut self) -> bool {
        if self.disposed {
            return false;
        }
        self.resamples += 1;

        let next = discover(&self.provider, self.sample.scroll_y)
            .map(|span| TimelineMetrics::from_span(&span));
        if next == self.metrics {
            return false;
        }

        match (self.metrics, next) {
            (None, Some(metrics)) => {
                debug!(
                    start_y = metrics.start_y,
                    height = metrics.height,
                    left_x = metrics.left_x,
                    "Timeline metrics computed"
                );
                // Start the spring where the scroll already is
                let raw = self.raw_progress(&metrics);
                self.spring.jump_to(raw);
            }
            (Some(_), Some(metrics)) => {
                debug!(
                    start_y = metrics.start_y,
                    height = metrics.height,
                    left_x = metrics.left_x,
                    "Timeline metrics recomputed"
                );
            }
            (Some(_), None) => debug!("Timeline markers gone; line hidden"),
            (None, None) => {}
        }
        self.metrics = next;
        true
    }

    /// Run a delayed resample if it still belongs to this view
    ///
    /// Stale tickets (from before detach) are no-ops. Returns true if the
    /// resample ran.
    pub fn fire(&mut self, ticket: ResampleTicket) -> bool {
        if self.disposed || !self.schedule.is_current(&ticket) {
            debug!("Ignoring stale resample");
            return false;
        }
        self.resample();
        true
    }

    /// Advance one rendered frame
    ///
    /// Runs due settle resamples, maps the scroll offset to raw progress,
    /// steps the spring by the time since the previous frame and updates
    /// the latch. `None` while there are no metrics or after detach.
    pub fn frame(&mut self, now: Instant) -> Option<LineFrame> {
        if self.disposed {
            return None;
        }

        for ticket in self.schedule.take_due(now) {
            self.fire(ticket);
        }

        let metrics = self.metrics?;
        let raw = self.raw_progress(&metrics);
        self.spring.set_target(raw);

        let dt = self
            .last_frame
            .map(|prev| now.saturating_duration_since(prev))
            .unwrap_or(Duration::ZERO)
            .min(MAX_FRAME_DELTA);
        self.last_frame = Some(now);
        self.spring.step(dt);

        let progress = self.spring.position().clamp(0.0, 1.0);
        if self.latch.observe(progress) {
            debug!(complete = self.latch.is_complete(), "Timeline latch changed");
        }

        Some(LineFrame::new(
            metrics,
            raw,
            progress,
            self.config.easing,
            self.latch.is_complete(),
        ))
    }

    /// Tear down: remove the host listener, cancel pending resamples and
    /// discard metrics. Safe to call more than once.
    pub fn detach(&mut self) {
        if self.disposed {
            return;
        }
        if let Some(mut sub) = self.subscription.take() {
            sub.dispose();
        }
        self.schedule.cancel();
        self.metrics = None;
        self.last_frame = None;
        self.disposed = true;
        info!(resamples = self.resamples, "Progress line detached");
    }

    fn raw_progress(&self, metrics: &TimelineMetrics) -> f64 {
        ScrollRange::new(
            metrics,
            self.sample.viewport_height,
            self.config.lead_fraction,
        )
        .progress_at(self.sample.scroll_y)
    }
}

impl<P: MarkerProvider> Drop for ProgressLineController<P> {
    fn drop(&mut self) {
        self.detach();
    }
}
