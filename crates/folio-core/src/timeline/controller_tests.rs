//! Tests for the progress line controller lifecycle
//!
//! These tests drive the controller the way a host does:
//! - attach against a host surface with synthetic marker geometry
//! - emit scroll/resize/layout events and render frames on a simulated clock
//! - detach and check that nothing survives the teardown

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use crate::config::TimelineConfig;
    use crate::error::TimelineError;
    use crate::timeline::{
        ControllerPhase, HostEvent, HostSurface, LatchMode, MarkerProvider, MarkerRect,
        MarkerRole, ProgressLineController, ScrollSample,
    };

    const FRAME: Duration = Duration::from_micros(16_667);
    const VIEWPORT: f64 = 800.0;

    /// Synthetic layout: markers at fixed document positions, reported
    /// relative to the current scroll offset like a real layout engine
    #[derive(Default)]
    struct SyntheticLayout {
        attached: bool,
        /// (role, document top)
        markers: Vec<(MarkerRole, f64)>,
        scroll_y: f64,
    }

    impl SyntheticLayout {
        /// Dots of height 12 whose centres sit at 1000 and 1500
        fn worked_example() -> Self {
            Self {
                attached: true,
                markers: vec![
                    (MarkerRole::Start, 994.0),
                    (MarkerRole::Milestone, 1200.0),
                    (MarkerRole::Milestone, 1494.0),
                ],
                scroll_y: 0.0,
            }
        }
    }

    impl MarkerProvider for SyntheticLayout {
        fn container_attached(&self) -> bool {
            self.attached
        }

        fn marker_rects(&self) -> Vec<MarkerRect> {
            self.markers
                .iter()
                .map(|(role, top)| MarkerRect::new(*role, top - self.scroll_y, 118.0, 12.0, 12.0))
                .collect()
        }
    }

    fn controller(layout: SyntheticLayout) -> ProgressLineController<SyntheticLayout> {
        ProgressLineController::new(layout, TimelineConfig::default())
    }

    fn scroll_to(
        surface: &HostSurface,
        ctrl: &mut ProgressLineController<SyntheticLayout>,
        y: f64,
    ) {
        ctrl.provider_mut().scroll_y = y;
        surface.emit(HostEvent::Scroll(ScrollSample::new(y, VIEWPORT)));
        ctrl.pump();
    }

    /// Render frames for `secs` simulated seconds, returning the clock
    fn settle(
        ctrl: &mut ProgressLineController<SyntheticLayout>,
        mut now: Instant,
        secs: u64,
    ) -> Instant {
        let frames = secs * 60;
        for _ in 0..frames {
            now += FRAME;
            ctrl.frame(now);
        }
        now
    }

    #[test]
    fn test_worked_example_through_controller() {
        let surface = HostSurface::new();
        let mut ctrl = controller(SyntheticLayout::worked_example());
        let now = Instant::now();
        ctrl.attach(&surface, ScrollSample::new(0.0, VIEWPORT), now)
            .unwrap();

        let metrics = ctrl.metrics().unwrap();
        assert_eq!(metrics.start_y, 1000.0);
        assert_eq!(metrics.height, 500.0);
        assert_eq!(metrics.left_x, 124.0);
        assert_eq!(ctrl.phase(), ControllerPhase::Computed);

        scroll_to(&surface, &mut ctrl, 1050.0);
        let now = settle(&mut ctrl, now, 10);
        let frame = ctrl.frame(now).unwrap();
        assert_eq!(frame.raw_progress, 0.5);
        assert!((frame.progress - 0.5).abs() <= 0.001);
        assert!((frame.pixel_height - 250.0).abs() <= 0.5);
        assert!(!frame.complete);
    }

    #[test]
    fn test_zero_markers_is_not_ready_and_recovers() {
        let surface = HostSurface::new();
        let layout = SyntheticLayout {
            attached: true,
            ..SyntheticLayout::default()
        };
        let mut ctrl = controller(layout);
        let now = Instant::now();
        ctrl.attach(&surface, ScrollSample::new(0.0, VIEWPORT), now)
            .unwrap();

        assert_eq!(ctrl.phase(), ControllerPhase::Uncomputed);
        assert!(ctrl.metrics().is_none());
        assert!(ctrl.frame(now + FRAME).is_none());

        // Markers show up after first paint; the first settle resample finds them
        ctrl.provider_mut().markers = SyntheticLayout::worked_example().markers;
        assert!(ctrl.frame(now + Duration::from_millis(499)).is_none());
        assert!(ctrl.frame(now + Duration::from_millis(500)).is_some());
        assert_eq!(ctrl.phase(), ControllerPhase::Computed);
    }

    #[test]
    fn test_missing_container_yields_no_metrics() {
        let surface = HostSurface::new();
        let mut ctrl = controller(SyntheticLayout::default());
        ctrl.attach(&surface, ScrollSample::new(0.0, VIEWPORT), Instant::now())
            .unwrap();
        assert!(ctrl.metrics().is_none());
    }

    #[test]
    fn test_settle_resamples_absorb_layout_shift() {
        let surface = HostSurface::new();
        let mut ctrl = controller(SyntheticLayout::worked_example());
        let now = Instant::now();
        ctrl.attach(&surface, ScrollSample::new(0.0, VIEWPORT), now)
            .unwrap();
        assert_eq!(ctrl.resample_count(), 1);

        // Entrance animation slides everything down by 40 units
        for (_, top) in ctrl.provider_mut().markers.iter_mut() {
            *top += 40.0;
        }
        ctrl.frame(now + Duration::from_millis(100));
        assert_eq!(ctrl.metrics().unwrap().start_y, 1000.0);

        ctrl.frame(now + Duration::from_millis(500));
        assert_eq!(ctrl.metrics().unwrap().start_y, 1040.0);
        assert_eq!(ctrl.resample_count(), 2);

        ctrl.frame(now + Duration::from_millis(1000));
        assert_eq!(ctrl.resample_count(), 3);
        assert!(ctrl.schedule().pending().is_empty());
    }

    #[test]
    fn test_resize_resamples() {
        let surface = HostSurface::new();
        let mut ctrl = controller(SyntheticLayout::worked_example());
        ctrl.attach(&surface, ScrollSample::new(0.0, VIEWPORT), Instant::now())
            .unwrap();

        ctrl.provider_mut().markers.last_mut().unwrap().1 = 1794.0;
        surface.emit(HostEvent::Resize(ScrollSample::new(0.0, 600.0)));
        assert!(ctrl.pump());

        assert_eq!(ctrl.metrics().unwrap().height, 800.0);
        assert_eq!(ctrl.sample().viewport_height, 600.0);
    }

    #[test]
    fn test_layout_change_resamples() {
        let surface = HostSurface::new();
        let mut ctrl = controller(SyntheticLayout::worked_example());
        ctrl.attach(&surface, ScrollSample::new(0.0, VIEWPORT), Instant::now())
            .unwrap();
        let before = ctrl.resample_count();

        // A section finished its entrance and its markers moved up
        for (_, top) in ctrl.provider_mut().markers.iter_mut() {
            *top -= 20.0;
        }
        surface.emit(HostEvent::Layout(ScrollSample::new(0.0, VIEWPORT)));
        assert!(ctrl.pump());

        assert_eq!(ctrl.resample_count(), before + 1);
        assert_eq!(ctrl.metrics().unwrap().start_y, 980.0);
    }

    #[test]
    fn test_scroll_does_not_resample() {
        let surface = HostSurface::new();
        let mut ctrl = controller(SyntheticLayout::worked_example());
        ctrl.attach(&surface, ScrollSample::new(0.0, VIEWPORT), Instant::now())
            .unwrap();
        let before = ctrl.resample_count();
        scroll_to(&surface, &mut ctrl, 700.0);
        assert_eq!(ctrl.resample_count(), before);
        assert_eq!(ctrl.sample().scroll_y, 700.0);
    }

    #[test]
    fn test_completion_latch_is_one_way_by_default() {
        let surface = HostSurface::new();
        let mut ctrl = controller(SyntheticLayout::worked_example());
        let now = Instant::now();
        ctrl.attach(&surface, ScrollSample::new(0.0, VIEWPORT), now)
            .unwrap();

        scroll_to(&surface, &mut ctrl, 2000.0);
        let now = settle(&mut ctrl, now, 10);
        let frame = ctrl.frame(now).unwrap();
        assert!((frame.progress - 1.0).abs() <= 0.001);
        assert!(frame.complete);

        scroll_to(&surface, &mut ctrl, 0.0);
        let now = settle(&mut ctrl, now, 10);
        let frame = ctrl.frame(now).unwrap();
        assert_eq!(frame.raw_progress, 0.0);
        assert!(frame.progress <= 0.001);
        assert!(frame.complete, "visited state must persist");
    }

    #[test]
    fn test_reversible_latch_clears_on_scroll_up() {
        let surface = HostSurface::new();
        let config = TimelineConfig {
            latch: LatchMode::Reversible,
            ..TimelineConfig::default()
        };
        let mut ctrl = ProgressLineController::new(SyntheticLayout::worked_example(), config);
        let now = Instant::now();
        ctrl.attach(&surface, ScrollSample::new(0.0, VIEWPORT), now)
            .unwrap();

        scroll_to(&surface, &mut ctrl, 2000.0);
        let now = settle(&mut ctrl, now, 10);
        assert!(ctrl.is_complete());

        scroll_to(&surface, &mut ctrl, 0.0);
        settle(&mut ctrl, now, 10);
        assert!(!ctrl.is_complete());
    }

    #[test]
    fn test_smoothed_progress_lags_and_converges() {
        let surface = HostSurface::new();
        let mut ctrl = controller(SyntheticLayout::worked_example());
        let now = Instant::now();
        ctrl.attach(&surface, ScrollSample::new(0.0, VIEWPORT), now)
            .unwrap();
        ctrl.frame(now);

        scroll_to(&surface, &mut ctrl, 1500.0);
        let first = ctrl.frame(now + FRAME).unwrap();
        assert_eq!(first.raw_progress, 1.0);
        assert!(first.progress < 0.1);
        assert!(ctrl.is_animating());

        let mut prev = first.progress;
        let mut t = now + FRAME;
        for _ in 0..600 {
            t += FRAME;
            let frame = ctrl.frame(t).unwrap();
            assert!(frame.progress >= prev);
            assert!(frame.progress <= 1.0);
            prev = frame.progress;
        }
        assert!((prev - 1.0).abs() <= 0.001);
        assert!(!ctrl.is_animating());
    }

    #[test]
    fn test_degenerate_geometry_never_produces_nan() {
        let surface = HostSurface::new();
        let layout = SyntheticLayout {
            attached: true,
            markers: vec![(MarkerRole::Start, 300.0)],
            scroll_y: 0.0,
        };
        let mut ctrl = controller(layout);
        let now = Instant::now();
        ctrl.attach(&surface, ScrollSample::new(0.0, 0.0), now)
            .unwrap();

        for y in [0.0, 300.0, 306.0, 10_000.0] {
            surface.emit(HostEvent::Scroll(ScrollSample::new(y, 0.0)));
            ctrl.pump();
            let frame = ctrl.frame(now + FRAME).unwrap();
            assert_eq!(frame.raw_progress, 0.0);
            assert!(frame.progress.is_finite());
            assert_eq!(frame.pixel_height, 0.0);
        }
    }

    #[test]
    fn test_inverted_markers_draw_nothing() {
        let surface = HostSurface::new();
        let layout = SyntheticLayout {
            attached: true,
            markers: vec![(MarkerRole::Start, 900.0), (MarkerRole::End, 100.0)],
            scroll_y: 0.0,
        };
        let mut ctrl = controller(layout);
        ctrl.attach(&surface, ScrollSample::new(0.0, VIEWPORT), Instant::now())
            .unwrap();
        let metrics = ctrl.metrics().unwrap();
        assert_eq!(metrics.height, 0.0);
    }

    #[test]
    fn test_teardown_makes_pending_resample_inert() {
        let surface = HostSurface::new();
        let mut ctrl = controller(SyntheticLayout::worked_example());
        let now = Instant::now();
        ctrl.attach(&surface, ScrollSample::new(0.0, VIEWPORT), now)
            .unwrap();
        let ticket = ctrl.schedule().pending()[0];
        let resamples = ctrl.resample_count();

        ctrl.detach();
        assert_eq!(ctrl.phase(), ControllerPhase::Disposed);
        assert!(ctrl.metrics().is_none());
        assert!(ctrl.schedule().pending().is_empty());

        // The layout keeps changing after unmount; the stale callback must not notice
        ctrl.provider_mut().markers.push((MarkerRole::End, 5000.0));
        assert!(!ctrl.fire(ticket));
        assert!(!ctrl.resample());
        assert!(ctrl.frame(now + Duration::from_secs(2)).is_none());
        assert!(ctrl.metrics().is_none());
        assert_eq!(ctrl.resample_count(), resamples);
        assert!(!ctrl.is_animating());
    }

    #[test]
    fn test_teardown_removes_listener_exactly_once() {
        let surface = HostSurface::new();
        let mut ctrl = controller(SyntheticLayout::worked_example());
        ctrl.attach(&surface, ScrollSample::new(0.0, VIEWPORT), Instant::now())
            .unwrap();
        assert_eq!(surface.listener_count(), 1);

        ctrl.detach();
        ctrl.detach();
        drop(ctrl);

        assert_eq!(surface.listener_count(), 0);
        assert_eq!(surface.lifetime_counts(), (1, 1));
        assert_eq!(
            surface.emit(HostEvent::Scroll(ScrollSample::new(1.0, VIEWPORT))),
            0
        );
    }

    #[test]
    fn test_drop_detaches() {
        let surface = HostSurface::new();
        {
            let mut ctrl = controller(SyntheticLayout::worked_example());
            ctrl.attach(&surface, ScrollSample::new(0.0, VIEWPORT), Instant::now())
                .unwrap();
        }
        assert_eq!(surface.listener_count(), 0);
    }

    #[test]
    fn test_attach_rules() {
        let surface = HostSurface::new();
        let mut ctrl = controller(SyntheticLayout::worked_example());
        assert_eq!(ctrl.phase(), ControllerPhase::Detached);
        assert!(!ctrl.pump());

        let now = Instant::now();
        ctrl.attach(&surface, ScrollSample::new(0.0, VIEWPORT), now)
            .unwrap();
        assert_eq!(
            ctrl.attach(&surface, ScrollSample::new(0.0, VIEWPORT), now),
            Err(TimelineError::AlreadyAttached)
        );

        ctrl.detach();
        assert_eq!(
            ctrl.attach(&surface, ScrollSample::new(0.0, VIEWPORT), now),
            Err(TimelineError::Disposed)
        );
        assert_eq!(surface.listener_count(), 0);
    }

    #[test]
    fn test_spring_starts_at_current_scroll() {
        let surface = HostSurface::new();
        let mut layout = SyntheticLayout::worked_example();
        layout.scroll_y = 1500.0;
        let mut ctrl = controller(layout);
        let now = Instant::now();
        ctrl.attach(&surface, ScrollSample::new(1500.0, VIEWPORT), now)
            .unwrap();

        // Metrics are document-relative regardless of the scroll at sampling time
        assert_eq!(ctrl.metrics().unwrap().start_y, 1000.0);
        let frame = ctrl.frame(now).unwrap();
        assert_eq!(frame.progress, 1.0);
    }
}
