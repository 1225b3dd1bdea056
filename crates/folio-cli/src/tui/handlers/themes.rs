//! Theme switching

use tracing::info;

use crate::tui::app::App;
use crate::tui::components::Toast;
use crate::tui::themes::THEME_REGISTRY;

impl App {
    /// Switch theme for this session
    pub fn set_theme(&mut self, name: &str) {
        let theme = THEME_REGISTRY.get_or_default(name);
        self.theme = theme.clone();
        self.config.theme = theme.name.clone();
        // Lines carry their colours, so the page has to be laid out again
        self.layout_key = None;
        self.needs_redraw = true;
        info!(theme = %theme.name, "Theme changed");
    }

    /// Next theme in registration order
    pub fn cycle_theme(&mut self) {
        let names: Vec<String> = THEME_REGISTRY
            .list()
            .into_iter()
            .map(|(name, _)| name.clone())
            .collect();
        let current = names.iter().position(|n| *n == self.theme.name);
        let next = current.map_or(0, |i| (i + 1) % names.len().max(1));
        if let Some(name) = names.get(next) {
            self.set_theme(name);
            self.toasts
                .push(Toast::info(format!("Theme: {}", self.theme.display_name)));
        }
    }
}
