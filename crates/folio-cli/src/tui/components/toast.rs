//! Toast notifications in the top-right corner
//!
//! Used for the ping result, the mail link and content warnings.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
};
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthChar;

use crate::tui::themes::Theme;
use crate::tui::utils::truncate_ellipsis;

/// Maximum number of visible toasts
const MAX_VISIBLE_TOASTS: usize = 3;

/// Default toast duration
const DEFAULT_DURATION: Duration = Duration::from_secs(4);

const TOAST_WIDTH: u16 = 42;

/// Toast height (including borders)
const TOAST_HEIGHT: u16 = 3;

const TOAST_GAP: u16 = 1;

/// Rows left free above the first toast (tab bar)
const TOP_MARGIN: u16 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastType {
    Success,
    Info,
    Error,
}

impl ToastType {
    fn color(&self, theme: &Theme) -> Color {
        match self {
            ToastType::Success => theme.success_color,
            ToastType::Info => theme.accent_color,
            ToastType::Error => theme.error_color,
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            ToastType::Success => "✓",
            ToastType::Info => "›",
            ToastType::Error => "✗",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub toast_type: ToastType,
    pub duration: Duration,
    pub created_at: Instant,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastType::Success)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, ToastType::Info)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastType::Error)
    }

    fn new(message: impl Into<String>, toast_type: ToastType) -> Self {
        Self {
            message: message.into(),
            toast_type,
            duration: DEFAULT_DURATION,
            created_at: Instant::now(),
        }
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.duration
    }

    /// Remaining share of the lifetime (1.0 → 0.0), for the progress border
    pub fn remaining_at(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.created_at).as_secs_f32();
        let total = self.duration.as_secs_f32().max(f32::EPSILON);
        (1.0 - elapsed / total).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, toast: Toast) {
        // Already showing
        if self.toasts.iter().any(|t| t.message == toast.message) {
            return;
        }
        while self.toasts.len() >= MAX_VISIBLE_TOASTS {
            self.toasts.remove(0);
        }
        self.toasts.push(toast);
    }

    /// Drop expired toasts; true if the queue changed
    pub fn tick(&mut self, now: Instant) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| !t.is_expired_at(now));
        self.toasts.len() != before
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    /// Most recent first
    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter().rev().take(MAX_VISIBLE_TOASTS)
    }
}

/// Render toasts in the top-right corner
pub fn render_toasts(
    buf: &mut Buffer,
    area: Rect,
    queue: &ToastQueue,
    theme: &Theme,
    now: Instant,
) {
    if queue.is_empty() || area.width < 8 {
        return;
    }
    let width = TOAST_WIDTH.min(area.width.saturating_sub(2));
    let start_x = area.x + area.width.saturating_sub(width + 2);

    for (i, toast) in queue.visible().enumerate() {
        let y = area.y + TOP_MARGIN + (i as u16 * (TOAST_HEIGHT + TOAST_GAP));
        if y + TOAST_HEIGHT > area.y + area.height {
            break;
        }
        let toast_area = Rect::new(start_x, y, width, TOAST_HEIGHT);
        render_toast(buf, toast_area, toast, theme, now);
    }
}

fn render_toast(buf: &mut Buffer, area: Rect, toast: &Toast, theme: &Theme, now: Instant) {
    let color = toast.toast_type.color(theme);
    let border = Style::default().fg(color);
    let right = area.x + area.width - 1;
    let bottom = area.y + area.height - 1;
    let content_y = area.y + 1;

    for x in area.x + 1..right {
        if let Some(cell) = buf.cell_mut((x, content_y)) {
            cell.set_char(' ').set_bg(theme.bg_color);
        }
        if let Some(cell) = buf.cell_mut((x, area.y)) {
            cell.set_char('─').set_style(border);
        }
    }
    for (x, y, ch) in [
        (area.x, area.y, '╭'),
        (right, area.y, '╮'),
        (area.x, content_y, '│'),
        (right, content_y, '│'),
        (area.x, bottom, '╰'),
        (right, bottom, '╯'),
    ] {
        if let Some(cell) = buf.cell_mut((x, y)) {
            cell.set_char(ch).set_style(border);
        }
    }

    // Bottom border doubles as the time-left bar
    let filled = ((area.width - 2) as f32 * toast.remaining_at(now)) as u16;
    for (i, x) in (area.x + 1..right).enumerate() {
        if let Some(cell) = buf.cell_mut((x, bottom)) {
            if (i as u16) < filled {
                cell.set_char('━').set_fg(color);
            } else {
                cell.set_char('─').set_fg(theme.dim_color);
            }
        }
    }

    let mut cx = area.x + 2;
    for ch in toast.toast_type.icon().chars() {
        if let Some(cell) = buf.cell_mut((cx, content_y)) {
            cell.set_char(ch).set_fg(color).set_bg(theme.bg_color);
        }
        cx += UnicodeWidthChar::width(ch).unwrap_or(1) as u16;
    }
    cx += 1;

    let max_msg_width = area.width.saturating_sub(5) as usize;
    for ch in truncate_ellipsis(&toast.message, max_msg_width).chars() {
        if cx >= right - 1 {
            break;
        }
        if let Some(cell) = buf.cell_mut((cx, content_y)) {
            cell.set_char(ch).set_fg(theme.text_color).set_bg(theme.bg_color);
        }
        cx += UnicodeWidthChar::width(ch).unwrap_or(1) as u16;
    }
}
