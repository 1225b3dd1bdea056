//! Time-driven page effects: typewriter, reveals, loader, ping and field highlight

pub mod highlight;
pub mod loader;
pub mod reveal;
pub mod typewriter;

pub use highlight::Highlight;
pub use loader::{ConnectionLoader, LoaderPhase, Ping, PingPhase};
pub use reveal::{parallax_offset, visible_fraction, FadeIn, RevealTracker};
pub use typewriter::{Typewriter, TypewriterPhase, TypewriterTimings};
