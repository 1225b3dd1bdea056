//! Scroll-synchronized timeline progress line
//!
//! Pipeline: marker discovery → metrics → scroll-to-progress mapping →
//! spring smoothing → easing → rendered length. The controller wires these
//! to a host surface and owns their lifecycle.

pub mod controller;
pub mod latch;
pub mod marker;
pub mod metrics;
pub mod progress;
pub mod schedule;
pub mod spring;
pub mod subscription;

mod controller_tests;

pub use controller::{ControllerPhase, ProgressLineController};
pub use latch::{CompletionLatch, LatchMode};
pub use marker::{discover, Marker, MarkerProvider, MarkerRect, MarkerRole, MarkerSpan};
pub use metrics::TimelineMetrics;
pub use progress::{Easing, LineFrame, ScrollRange, ScrollSample};
pub use schedule::{ResampleSchedule, ResampleTicket};
pub use spring::{Spring, SpringConfig};
pub use subscription::{HostEvent, HostEventKind, HostSurface, Subscription};
