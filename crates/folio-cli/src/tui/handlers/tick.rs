//! Animation ticks
//!
//! Advances the decorative motion once per frame: typewriter and cursor,
//! contact loader, ping button, field highlight and toasts. Reveals run
//! after layout, in app.rs, since they need the current document.

use std::time::Instant;
use tracing::{info, warn};

use crate::tui::app::App;
use crate::tui::components::Toast;

impl App {
    /// Tick all animations. Returns true if anything visible changed.
    pub(crate) fn tick(&mut self, now: Instant) -> bool {
        let mut changed = self.typewriter.advance(now);

        let cursor = self.typewriter.cursor_visible(now);
        if cursor != self.cursor_visible {
            self.cursor_visible = cursor;
            changed = true;
        }

        if self.loader.tick(now) {
            changed = true;
            if self.loader.is_loaded() {
                info!("Contact channels loaded");
            }
        }

        let before = self.ping.phase();
        if self.ping.tick(now) {
            self.open_mail_link();
        }
        changed |= self.ping.phase() != before;
        changed |= self.highlight.tick(now);

        changed |= self.toasts.tick(now);
        changed
    }

    /// Start the ping button cycle; the mail link opens on pong
    pub fn trigger_ping(&mut self, now: Instant) {
        if !self.loader.is_loaded() {
            self.toasts.push(Toast::info("contact.sh is still connecting"));
            return;
        }
        if self.ping.trigger(now) {
            info!("Ping");
            self.toasts
                .push(Toast::info(format!("ping {}", self.portfolio.contact.email)));
        }
    }

    fn open_mail_link(&mut self) {
        let link = self.portfolio.contact.mailto();
        self.open_link(&link, "pong! opening your mail client");
    }

    /// Hand a URL to the system opener; toasts either way
    pub(crate) fn open_link(&mut self, link: &str, success: &str) {
        match open::that(link) {
            Ok(()) => {
                info!(link = %link, "Opened link");
                self.toasts.push(Toast::success(success.to_string()));
            }
            Err(e) => {
                warn!(error = %e, link = %link, "Failed to open link");
                self.toasts
                    .push(Toast::error(format!("Could not open {link}")));
            }
        }
    }
}
