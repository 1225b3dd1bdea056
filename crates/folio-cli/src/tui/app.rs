//! Main TUI application
//!
//! Core application state and event loop.
//! Handler implementations are in the handlers/ module.

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::{
    io,
    time::{Duration, Instant},
};
use tracing::{info, warn};

use folio_core::motion::{ConnectionLoader, Highlight, LoaderPhase, Ping, PingPhase, Typewriter};
use folio_core::timeline::{ControllerPhase, HostEvent, HostSurface, LineFrame, ScrollSample};
use folio_core::{FolioConfig, Portfolio, ProgressLineController, SectionId};

use crate::tui::components::ToastQueue;
use crate::tui::handlers::rendering::split_screen;
use crate::tui::page::{LayoutMarkerProvider, LayoutSnapshot, PageDocument, PageMotion, PageView};
use crate::tui::state::{LayoutState, RevealState, ScrollState};
use crate::tui::themes::{Theme, THEME_REGISTRY};

/// Frame cadence when no terminal event arrives
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Cadence once the line, reveals and loader are at rest
const IDLE_FRAME_INTERVAL: Duration = Duration::from_millis(50);

/// Inputs the page layout depends on; the document is rebuilt when any changes
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct LayoutKey {
    pub width: u16,
    pub height: u16,
    pub typed: String,
    pub cursor: bool,
    pub loader: LoaderPhase,
    pub ping: PingPhase,
    pub highlight: Option<String>,
}

pub struct App {
    pub config: FolioConfig,
    pub portfolio: Portfolio,
    pub theme: Theme,

    // Progress line
    pub surface: HostSurface,
    pub provider: LayoutMarkerProvider,
    pub controller: ProgressLineController<LayoutMarkerProvider>,
    pub line: Option<LineFrame>,
    /// Last sample reported to the host surface
    last_sample: Option<ScrollSample>,

    // Page
    pub document: PageDocument,
    pub(crate) layout_key: Option<LayoutKey>,
    pub scroll: ScrollState,
    pub layout: LayoutState,
    pub reveals: RevealState,
    pub motion: PageMotion,
    pub typewriter: Typewriter,
    pub cursor_visible: bool,
    pub loader: ConnectionLoader,
    pub ping: Ping,
    pub highlight: Highlight,
    pub toasts: ToastQueue,

    /// Full terminal area
    pub screen: Rect,
    pub needs_redraw: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: FolioConfig, portfolio: Portfolio) -> Self {
        let now = Instant::now();
        let theme = THEME_REGISTRY.get_or_default(&config.theme).clone();
        let provider = LayoutMarkerProvider::new();
        let controller = ProgressLineController::new(provider.clone(), config.timeline.clone());
        let typewriter = Typewriter::cycling(
            &portfolio.profile.phrases,
            (&config.motion).into(),
            now,
        );
        let reveals = RevealState::new(&config.motion);

        Self {
            config,
            portfolio,
            theme,
            surface: HostSurface::new(),
            provider,
            controller,
            line: None,
            last_sample: None,
            document: PageDocument::default(),
            layout_key: None,
            scroll: ScrollState::new(),
            layout: LayoutState::new(),
            reveals,
            motion: PageMotion::settled(),
            typewriter,
            cursor_visible: true,
            loader: ConnectionLoader::new(),
            ping: Ping::new(),
            highlight: Highlight::default(),
            toasts: ToastQueue::new(),
            screen: Rect::default(),
            needs_redraw: true,
            should_quit: false,
        }
    }

    /// Run the application
    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.main_loop(&mut terminal).await;

        // Listener goes before the terminal does
        self.controller.detach();

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        result
    }

    /// Main event loop
    async fn main_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();
        let size = terminal.size()?;
        self.screen = Rect::new(0, 0, size.width, size.height);
        info!(
            width = size.width,
            height = size.height,
            "Starting folio"
        );

        loop {
            let now = Instant::now();
            self.step(now);

            if self.needs_redraw {
                terminal.draw(|f| self.ui(f))?;
                self.needs_redraw = false;
            }
            let frame_interval = self.frame_interval(now);

            tokio::select! {
                biased; // Prefer events over timeout when both are ready

                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(e)) => warn!(error = %e, "Terminal event error"),
                        None => self.should_quit = true,
                    }
                }
                _ = tokio::time::sleep(frame_interval) => {
                    // Frame callback: animations and the progress line advance
                }
            }

            if self.should_quit {
                break;
            }
        }
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => {
                self.handle_key(key);
                self.needs_redraw = true;
            }
            Event::Mouse(mouse) => {
                self.handle_mouse_event(mouse);
                self.needs_redraw = true;
            }
            Event::Resize(width, height) => {
                self.screen = Rect::new(0, 0, width, height);
                self.needs_redraw = true;
            }
            _ => {}
        }
    }

    /// One frame: tick animations, lay out, tell the host surface what
    /// moved, then advance the progress line
    pub fn step(&mut self, now: Instant) {
        if self.tick(now) {
            self.needs_redraw = true;
        }
        let resized = self.relayout(now);
        self.update_reveals(now);
        self.sync_host(now, resized);

        self.controller.pump();
        let frame = self.controller.frame(now);
        if frame != self.line {
            self.needs_redraw = true;
        }
        self.line = frame;
    }

    /// Full frame rate while something is moving, slower when idle
    pub(crate) fn frame_interval(&self, now: Instant) -> Duration {
        let loading = matches!(self.loader.phase(), LoaderPhase::Loading(_));
        if self.controller.is_animating() || self.reveals.is_animating(now) || loading {
            FRAME_INTERVAL
        } else {
            IDLE_FRAME_INTERVAL
        }
    }

    /// Rebuild the document if its inputs changed; true when the viewport
    /// changed size
    fn relayout(&mut self, now: Instant) -> bool {
        let page = split_screen(self.screen).page;
        let key = LayoutKey {
            width: page.width,
            height: page.height,
            typed: self.typewriter.text(),
            cursor: self.cursor_visible,
            loader: self.loader.phase(),
            ping: self.ping.phase(),
            highlight: self.highlight.active(now).map(str::to_string),
        };
        if self.layout_key.as_ref() == Some(&key) {
            return false;
        }

        let resized = self
            .layout_key
            .as_ref()
            .is_some_and(|prev| (prev.width, prev.height) != (key.width, key.height));

        self.document = PageDocument::build(&PageView {
            portfolio: &self.portfolio,
            theme: &self.theme,
            width: key.width,
            viewport_height: key.height,
            typed: &key.typed,
            cursor: key.cursor,
            loader: key.loader,
            ping: key.ping,
            highlight: key.highlight.as_deref(),
        });
        self.scroll
            .update_max_scroll(self.document.height(), key.height);
        self.layout_key = Some(key);
        self.needs_redraw = true;
        resized
    }

    fn update_reveals(&mut self, now: Instant) {
        let revealed = self.reveals.observe(
            &self.document,
            self.scroll.offset,
            self.scroll.viewport_height,
            now,
        );
        for id in revealed {
            info!(section = %id, "Section revealed");
            if id == SectionId::Contact {
                self.loader.start(now);
            }
        }

        let motion = self.reveals.motion(now);
        if motion != self.motion {
            self.motion = motion;
            self.needs_redraw = true;
        }
    }

    /// Publish the layout to the marker provider and emit the matching
    /// host event. The first call attaches the controller.
    fn sync_host(&mut self, now: Instant, resized: bool) {
        let sample = ScrollSample::new(
            self.scroll.offset as f64,
            f64::from(self.scroll.viewport_height),
        );
        let snapshot = LayoutSnapshot::capture(&self.document, &self.motion, sample.scroll_y);
        let moved = self.provider.update(snapshot);

        match self.controller.phase() {
            ControllerPhase::Detached => {
                if let Err(e) = self.controller.attach(&self.surface, sample, now) {
                    warn!(error = %e, "Could not attach progress line");
                }
            }
            ControllerPhase::Disposed => {}
            ControllerPhase::Uncomputed | ControllerPhase::Computed => {
                if resized {
                    self.surface.emit(HostEvent::Resize(sample));
                } else if moved {
                    self.surface.emit(HostEvent::Layout(sample));
                } else if self.last_sample != Some(sample) {
                    self.surface.emit(HostEvent::Scroll(sample));
                }
            }
        }
        self.last_sample = Some(sample);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        let mut app = App::new(FolioConfig::default(), Portfolio::default());
        app.screen = Rect::new(0, 0, 100, 40);
        app
    }

    /// Run frames at 16 ms spacing
    fn run_frames(app: &mut App, start: Instant, frames: u32) -> Instant {
        let mut now = start;
        for _ in 0..frames {
            now += FRAME_INTERVAL;
            app.step(now);
        }
        now
    }

    #[test]
    fn test_first_step_attaches_and_computes() {
        let mut app = app();
        app.step(Instant::now());

        assert_eq!(app.controller.phase(), ControllerPhase::Computed);
        assert_eq!(app.surface.listener_count(), 1);
        assert!(app.document.height() > 0);
        let line = app.line.expect("line frame");
        assert_eq!(line.progress, 0.0);
    }

    #[test]
    fn test_scrolling_to_the_end_completes_the_line() {
        let mut app = app();
        let start = Instant::now();
        app.step(start);

        app.scroll.scroll_to_end();
        let now = run_frames(&mut app, start, 300);

        let line = app.line.expect("line frame");
        assert!(line.raw_progress > 0.999);
        assert!(app.controller.is_complete());

        // One-way latch holds at the top again
        app.scroll.scroll_to_top();
        run_frames(&mut app, now, 300);
        assert!(app.controller.is_complete());
        assert!(app.line.expect("line frame").progress < 0.01);
    }

    #[test]
    fn test_resize_resamples() {
        let mut app = app();
        let start = Instant::now();
        app.step(start);
        let before = app.controller.resample_count();

        app.screen = Rect::new(0, 0, 70, 30);
        app.step(start + FRAME_INTERVAL);

        assert!(app.controller.resample_count() > before);
        assert_eq!(app.controller.sample().viewport_height, 26.0);
    }

    #[test]
    fn test_reveal_starts_contact_loader() {
        let mut app = app();
        let start = Instant::now();
        app.step(start);
        assert_eq!(app.loader.phase(), LoaderPhase::Waiting);

        let contact = app.document.section(SectionId::Contact).map(|s| s.top);
        app.scroll.scroll_to_line(contact.unwrap_or(0));
        run_frames(&mut app, start, 2);
        assert!(app.reveals.is_revealed(SectionId::Contact));
        assert_ne!(app.loader.phase(), LoaderPhase::Waiting);
    }

    #[test]
    fn test_entrance_offset_settling_emits_layout() {
        let mut app = app();
        let start = Instant::now();
        app.step(start);

        // Experience holds the first marker; revealing it moves the markers
        let top = app.document.section(SectionId::Experience).map(|s| s.top);
        app.scroll.scroll_to_line(top.unwrap_or(0));
        let before = app.controller.resample_count();
        let fade = Duration::from_millis(app.config.motion.fade_duration_ms);
        run_frames(&mut app, start, (fade.as_millis() / 16) as u32 + 4);

        assert!(app.controller.resample_count() > before);
        let metrics = app.controller.metrics().expect("metrics");
        let first = app.document.markers()[0];
        assert_eq!(metrics.start_y, first.row as f64 + 0.5);
    }

    #[test]
    fn test_frame_rate_drops_when_idle() {
        let mut app = app();
        let start = Instant::now();
        app.step(start);
        // Settle resamples are still pending
        assert_eq!(app.frame_interval(start), FRAME_INTERVAL);

        let settled = run_frames(&mut app, start, 70);
        assert_eq!(app.frame_interval(settled), IDLE_FRAME_INTERVAL);

        app.scroll.scroll_to_end();
        let now = settled + FRAME_INTERVAL;
        app.step(now);
        assert_eq!(app.frame_interval(now), FRAME_INTERVAL);
    }

    #[test]
    fn test_highlight_relayouts_until_it_expires() {
        let mut app = app();
        let start = Instant::now();
        app.step(start);

        app.highlight.set("skills", start);
        app.step(start + FRAME_INTERVAL);
        let key = app.layout_key.as_ref().and_then(|k| k.highlight.clone());
        assert_eq!(key.as_deref(), Some("skills"));

        app.step(start + Duration::from_millis(2100));
        assert_eq!(app.layout_key.as_ref().and_then(|k| k.highlight.clone()), None);
    }

    #[test]
    fn test_detach_on_quit_removes_listener() {
        let mut app = app();
        app.step(Instant::now());
        app.controller.detach();
        assert_eq!(app.surface.listener_count(), 0);
        assert_eq!(app.controller.phase(), ControllerPhase::Disposed);

        // Later frames draw nothing
        app.step(Instant::now());
        assert!(app.line.is_none());
    }
}
