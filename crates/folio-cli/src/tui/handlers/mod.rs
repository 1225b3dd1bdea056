//! App handlers
//!
//! `impl App` blocks split by concern: input, animation ticks, themes and
//! rendering.

pub mod keyboard;
pub mod mouse;
pub mod rendering;
pub mod scrollbar;
pub mod themes;
pub mod tick;
