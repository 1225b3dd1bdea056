//! UI components for the folio TUI
//!
//! Rendering pieces: tab bar, page body, timeline overlay, scrollbar, status bar, toasts.

pub mod page_body;
pub mod scrollbars;
pub mod status_bar;
pub mod tab_bar;
pub mod timeline_line;
pub mod toast;

pub use page_body::{page_target_areas, render_page_body};
pub use scrollbars::render_page_scrollbar;
pub use status_bar::{render_status_bar, StatusInfo};
pub use tab_bar::render_tab_bar;
pub use timeline_line::render_timeline;
pub use toast::{render_toasts, Toast, ToastQueue};
