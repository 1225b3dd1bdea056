//! Page document, section motion and the layout-backed marker provider

mod document;
mod motion;
mod provider;
mod sections;

pub use document::{PageDocument, PageTarget, PageView, SectionSpan};
pub use motion::PageMotion;
pub use provider::{LayoutMarkerProvider, LayoutSnapshot};
