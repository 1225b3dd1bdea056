//! App State Components
//!
//! Scroll position, section reveals and cached layout areas for the page view.

mod layout;
mod reveals;
mod scroll;

pub use layout::LayoutState;
pub use reveals::RevealState;
pub use scroll::ScrollState;
