//! Built-in theme definitions

use ratatui::style::Color;

use super::Theme;

/// Dark charcoal page with blue/purple accents
pub fn midnight() -> Theme {
    Theme {
        name: "midnight".to_string(),
        display_name: "Midnight".to_string(),
        bg_color: Color::Rgb(28, 28, 28),
        text_color: Color::Rgb(229, 231, 235),
        dim_color: Color::Rgb(156, 163, 175),
        title_color: Color::Rgb(255, 255, 255),
        accent_color: Color::Rgb(96, 165, 250),
        secondary_color: Color::Rgb(192, 132, 252),
        link_color: Color::Rgb(147, 197, 253),
        border_color: Color::Rgb(75, 85, 99),
        success_color: Color::Rgb(74, 222, 128),
        warning_color: Color::Rgb(250, 204, 21),
        error_color: Color::Rgb(248, 113, 113),
        dot_color: Color::Rgb(58, 58, 58),
        line_color: Color::Rgb(75, 85, 99),
        line_fill_color: Color::Rgb(167, 139, 250),
        scrollbar_bg_color: Color::Rgb(45, 45, 45),
        status_bar_bg_color: Color::Rgb(38, 38, 38),
    }
}

/// Light page for bright terminals
pub fn paper() -> Theme {
    Theme {
        name: "paper".to_string(),
        display_name: "Paper".to_string(),
        bg_color: Color::Rgb(250, 248, 243),
        text_color: Color::Rgb(31, 41, 55),
        dim_color: Color::Rgb(107, 114, 128),
        title_color: Color::Rgb(17, 24, 39),
        accent_color: Color::Rgb(37, 99, 235),
        secondary_color: Color::Rgb(126, 34, 206),
        link_color: Color::Rgb(29, 78, 216),
        border_color: Color::Rgb(209, 213, 219),
        success_color: Color::Rgb(22, 163, 74),
        warning_color: Color::Rgb(202, 138, 4),
        error_color: Color::Rgb(220, 38, 38),
        dot_color: Color::Rgb(226, 223, 214),
        line_color: Color::Rgb(209, 213, 219),
        line_fill_color: Color::Rgb(124, 58, 237),
        scrollbar_bg_color: Color::Rgb(235, 232, 225),
        status_bar_bg_color: Color::Rgb(240, 237, 230),
    }
}

/// Green-on-black phosphor
pub fn phosphor() -> Theme {
    Theme {
        name: "phosphor".to_string(),
        display_name: "Phosphor".to_string(),
        bg_color: Color::Rgb(5, 12, 5),
        text_color: Color::Rgb(134, 239, 172),
        dim_color: Color::Rgb(34, 139, 34),
        title_color: Color::Rgb(187, 247, 208),
        accent_color: Color::Rgb(74, 222, 128),
        secondary_color: Color::Rgb(163, 230, 53),
        link_color: Color::Rgb(110, 231, 183),
        border_color: Color::Rgb(22, 101, 52),
        success_color: Color::Rgb(74, 222, 128),
        warning_color: Color::Rgb(253, 224, 71),
        error_color: Color::Rgb(252, 165, 165),
        dot_color: Color::Rgb(15, 40, 15),
        line_color: Color::Rgb(22, 101, 52),
        line_fill_color: Color::Rgb(134, 239, 172),
        scrollbar_bg_color: Color::Rgb(10, 25, 10),
        status_bar_bg_color: Color::Rgb(8, 20, 8),
    }
}

/// Native terminal palette
pub fn terminal() -> Theme {
    Theme {
        name: "terminal".to_string(),
        display_name: "Terminal".to_string(),
        bg_color: Color::Reset,
        text_color: Color::Reset,
        dim_color: Color::DarkGray,
        title_color: Color::White,
        accent_color: Color::Blue,
        secondary_color: Color::Magenta,
        link_color: Color::Cyan,
        border_color: Color::DarkGray,
        success_color: Color::Green,
        warning_color: Color::Yellow,
        error_color: Color::Red,
        dot_color: Color::DarkGray,
        line_color: Color::DarkGray,
        line_fill_color: Color::Magenta,
        scrollbar_bg_color: Color::Reset,
        status_bar_bg_color: Color::Reset,
    }
}
