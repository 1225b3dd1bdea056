//! Folio Core - Shared library for the folio portfolio viewer
//!
//! This crate provides the UI-independent pieces of the folio TUI:
//! - Scroll-synchronized timeline progress line (markers, metrics, spring, lifecycle)
//! - Time-driven page effects (typewriter, reveals, loader, ping)
//! - Section navigation
//! - Portfolio content and user configuration

pub mod config;
pub mod constants;
pub mod content;
pub mod error;
pub mod motion;
pub mod nav;
pub mod paths;
pub mod timeline;

// Re-exports for convenience
pub use config::{FolioConfig, MotionConfig, TimelineConfig};
pub use content::Portfolio;
pub use error::{FolioError, Result, TimelineError};
pub use nav::SectionId;
pub use timeline::{HostEvent, HostSurface, LineFrame, ProgressLineController, ScrollSample};
