//! Colour themes

mod definitions;
mod registry;

use once_cell::sync::Lazy;
use ratatui::style::Color;

pub use registry::ThemeRegistry;

/// Global registry of built-in themes
pub static THEME_REGISTRY: Lazy<ThemeRegistry> = Lazy::new(ThemeRegistry::new);

/// Colours used across the page
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub display_name: String,

    pub bg_color: Color,
    pub text_color: Color,
    pub dim_color: Color,
    pub title_color: Color,
    pub accent_color: Color,
    /// Keys in the biography card and terminal prompts
    pub secondary_color: Color,
    pub link_color: Color,
    pub border_color: Color,

    pub success_color: Color,
    pub warning_color: Color,
    pub error_color: Color,

    /// Background dot grid
    pub dot_color: Color,
    /// Unfilled part of the timeline
    pub line_color: Color,
    /// Filled part of the timeline and its markers
    pub line_fill_color: Color,

    pub scrollbar_bg_color: Color,
    pub status_bar_bg_color: Color,
}

/// Blend `fg` toward `bg` for a fade-in at `opacity`
///
/// Only RGB colours can be mixed; anything else stays as-is once it is more
/// than half visible and collapses to the background before that.
pub fn fade_color(fg: Color, bg: Color, opacity: f64) -> Color {
    let t = opacity.clamp(0.0, 1.0);
    if t >= 1.0 {
        return fg;
    }
    match (fg, bg) {
        (Color::Rgb(fr, fg_, fb), Color::Rgb(br, bg_, bb)) => {
            let mix = |f: u8, b: u8| (b as f64 + (f as f64 - b as f64) * t).round() as u8;
            Color::Rgb(mix(fr, br), mix(fg_, bg_), mix(fb, bb))
        }
        _ if t >= 0.5 => fg,
        _ => bg,
    }
}
