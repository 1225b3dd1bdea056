//! Width-aware text helpers

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width in terminal cells
pub fn display_width(text: &str) -> usize {
    text.width()
}

/// Cut `text` to at most `max_width` cells, ending in "…" when shortened
pub fn truncate_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Right-pad with spaces to exactly `width` cells (truncating if longer)
pub fn pad_to_width(text: &str, width: usize) -> String {
    let mut out = truncate_ellipsis(text, width);
    let used = out.width();
    out.extend(std::iter::repeat(' ').take(width.saturating_sub(used)));
    out
}

/// Word-wrap to `width` cells; always returns at least one line
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![String::new()];
    }
    let lines: Vec<String> = textwrap::wrap(text, width)
        .into_iter()
        .map(|cow| cow.into_owned())
        .collect();
    if lines.is_empty() {
        vec![String::new()]
    } else {
        lines
    }
}
