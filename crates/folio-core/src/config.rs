//! User configuration (~/.folio/config.toml)
//!
//! Every field has a default, so a missing file or a partial file is fine.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::constants::{motion, timeline, ui};
use crate::error::{FolioError, Result};
use crate::timeline::{Easing, LatchMode, SpringConfig};

/// Progress line behaviour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    /// Fraction of a viewport before the first marker at which drawing starts
    pub lead_fraction: f64,
    pub easing: Easing,
    pub latch: LatchMode,
    /// Settle resamples after the immediate one
    pub resample_delays_ms: Vec<u64>,
    pub spring: SpringConfig,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            lead_fraction: timeline::LEAD_FRACTION,
            easing: Easing::default(),
            latch: LatchMode::default(),
            resample_delays_ms: timeline::RESAMPLE_DELAYS
                .iter()
                .map(|d| d.as_millis() as u64)
                .collect(),
            spring: SpringConfig::default(),
        }
    }
}

impl TimelineConfig {
    pub fn resample_delays(&self) -> Vec<Duration> {
        self.resample_delays_ms
            .iter()
            .map(|ms| Duration::from_millis(*ms))
            .collect()
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.lead_fraction.is_finite() && (0.0..=1.0).contains(&self.lead_fraction)) {
            return Err(FolioError::InvalidConfig(format!(
                "timeline.lead_fraction must be within 0..=1, got {}",
                self.lead_fraction
            )));
        }
        self.spring.validate()
    }
}

/// Decorative animation timings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    pub type_interval_ms: u64,
    pub delete_interval_ms: u64,
    pub phrase_hold_ms: u64,
    pub fade_duration_ms: u64,
    pub about_reveal_threshold: f64,
    pub contact_reveal_threshold: f64,
    pub parallax_factor: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            type_interval_ms: motion::TYPE_INTERVAL.as_millis() as u64,
            delete_interval_ms: motion::DELETE_INTERVAL.as_millis() as u64,
            phrase_hold_ms: motion::PHRASE_HOLD.as_millis() as u64,
            fade_duration_ms: motion::FADE_DURATION.as_millis() as u64,
            about_reveal_threshold: motion::ABOUT_REVEAL_THRESHOLD,
            contact_reveal_threshold: motion::CONTACT_REVEAL_THRESHOLD,
            parallax_factor: motion::PARALLAX_FACTOR,
        }
    }
}

impl MotionConfig {
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("motion.about_reveal_threshold", self.about_reveal_threshold),
            (
                "motion.contact_reveal_threshold",
                self.contact_reveal_threshold,
            ),
        ] {
            if !(value.is_finite() && (0.0..=1.0).contains(&value)) {
                return Err(FolioError::InvalidConfig(format!(
                    "{name} must be within 0..=1, got {value}"
                )));
            }
        }
        if !(self.parallax_factor.is_finite() && (0.0..=1.0).contains(&self.parallax_factor)) {
            return Err(FolioError::InvalidConfig(format!(
                "motion.parallax_factor must be within 0..=1, got {}",
                self.parallax_factor
            )));
        }
        if self.type_interval_ms == 0 || self.delete_interval_ms == 0 {
            return Err(FolioError::InvalidConfig(
                "typewriter intervals must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    pub theme: String,
    pub timeline: TimelineConfig,
    pub motion: MotionConfig,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            theme: ui::DEFAULT_THEME.to_string(),
            timeline: TimelineConfig::default(),
            motion: MotionConfig::default(),
        }
    }
}

impl FolioConfig {
    /// Parse and validate a TOML document
    pub fn from_toml(source: &str) -> Result<Self> {
        let config: FolioConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file; a missing file yields the defaults
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        let source = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&source)?;
        info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.timeline.validate()?;
        self.motion.validate()
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
