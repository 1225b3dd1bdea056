//! Application constants and configuration defaults
//!
//! Centralized location for magic numbers and default values

use std::time::Duration;

/// Scroll-synchronized timeline defaults
pub mod timeline {
    use super::*;

    /// Fraction of the viewport above the first marker at which progress starts
    pub const LEAD_FRACTION: f64 = 0.5;

    /// Delayed resamples after the immediate one, to absorb entrance-animation
    /// layout shifts. A heuristic, not a layout-settled signal.
    pub const RESAMPLE_DELAYS: [Duration; 2] =
        [Duration::from_millis(500), Duration::from_millis(1000)];

    /// Largest frame delta fed to the spring (a stalled terminal should not fling it)
    pub const MAX_FRAME_DELTA: Duration = Duration::from_millis(100);
}

/// Spring smoothing defaults
pub mod spring {
    pub const STIFFNESS: f64 = 50.0;
    pub const DAMPING: f64 = 20.0;
    pub const MASS: f64 = 1.0;

    /// Distance from target below which the spring may settle
    pub const REST_DELTA: f64 = 0.001;

    /// Speed below which the spring may settle
    pub const REST_SPEED: f64 = 0.01;

    /// Integration sub-step in seconds
    pub const MAX_SUBSTEP: f64 = 1.0 / 240.0;
}

/// Decorative motion defaults
pub mod motion {
    use super::*;

    /// Typewriter delay per typed character
    pub const TYPE_INTERVAL: Duration = Duration::from_millis(100);

    /// Typewriter delay per deleted character
    pub const DELETE_INTERVAL: Duration = Duration::from_millis(50);

    /// Pause with the full phrase shown before deleting
    pub const PHRASE_HOLD: Duration = Duration::from_millis(2000);

    /// Cursor blink half-period
    pub const CURSOR_BLINK: Duration = Duration::from_millis(530);

    /// Visible fraction at which the biography reveals
    pub const ABOUT_REVEAL_THRESHOLD: f64 = 0.2;

    /// Visible fraction at which the contact section reveals
    pub const CONTACT_REVEAL_THRESHOLD: f64 = 0.3;

    /// Fade-in duration once a section reveals
    pub const FADE_DURATION: Duration = Duration::from_millis(1000);

    /// Rows a section starts below its resting position before fading in
    pub const ENTRANCE_OFFSET: f64 = 2.0;

    /// Dot grid parallax factor
    pub const PARALLAX_FACTOR: f64 = 0.3;

    /// Contact loader step and cadence
    pub const LOADER_STEP: u8 = 2;
    pub const LOADER_INTERVAL: Duration = Duration::from_millis(30);
    pub const LOADER_LINGER: Duration = Duration::from_millis(300);

    /// Contact ping phases
    pub const PING_DELAY: Duration = Duration::from_millis(600);
    pub const PONG_HOLD: Duration = Duration::from_millis(2000);

    /// How long a clicked biography field stays lit
    pub const HIGHLIGHT_DURATION: Duration = Duration::from_millis(2000);
}

/// UI configuration
pub mod ui {
    /// Config directory name
    pub const CONFIG_DIR_NAME: &str = ".folio";

    /// Logs subdirectory name
    pub const LOGS_DIR_NAME: &str = "logs";

    /// Config file name
    pub const CONFIG_FILE_NAME: &str = "config.toml";

    /// Portfolio content file name
    pub const CONTENT_FILE_NAME: &str = "portfolio.toml";

    /// Default theme name
    pub const DEFAULT_THEME: &str = "midnight";

    /// Rows per mouse wheel notch
    pub const MOUSE_SCROLL_LINES: usize = 3;
}
