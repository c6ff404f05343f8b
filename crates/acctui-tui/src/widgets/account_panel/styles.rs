//! Styling helpers for account panel rendering

use ratatui::style::{Modifier, Style};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::theme::palette;

/// Layout constants for field rows
pub const INDICATOR_WIDTH: u16 = 3;
pub const LABEL_WIDTH: u16 = 22;
pub const VALUE_WIDTH: u16 = 34;

/// Style for labels
pub fn label_style(is_selected: bool) -> Style {
    if is_selected {
        Style::default()
            .fg(palette::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette::TEXT_SECONDARY)
    }
}

/// Style for an editable value that is not being edited
pub fn value_style(is_empty: bool, is_selected: bool) -> Style {
    let base = if is_selected {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    if is_empty {
        base.fg(palette::TEXT_MUTED)
    } else {
        base.fg(palette::TEXT_PRIMARY)
    }
}

/// Style for editing mode
pub fn editing_style() -> Style {
    Style::default()
        .fg(palette::STATUS_YELLOW)
        .bg(palette::BORDER_DIM)
}

/// Style for an open dropdown choice
pub fn choosing_style() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .bg(palette::BORDER_DIM)
        .add_modifier(Modifier::BOLD)
}

/// Style for read-only values
pub fn readonly_value_style() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

/// Style for link buttons
pub fn button_style(is_selected: bool) -> Style {
    if is_selected {
        Style::default()
            .fg(palette::CONTRAST_FG)
            .bg(palette::ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette::ACCENT)
    }
}

/// Style for section headers
pub fn section_header_style() -> Style {
    Style::default()
        .fg(palette::ACCENT_DIM)
        .add_modifier(Modifier::BOLD)
}

/// Style for selected row background
pub fn selected_row_bg() -> Style {
    Style::default().bg(palette::SELECTED_ROW_BG)
}

/// Style for description text after kbd keys
pub fn kbd_label_style() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

/// Style for emphasized keyboard shortcuts
pub fn kbd_accent_style() -> Style {
    Style::default().fg(palette::ACCENT)
}

/// Truncate to a display width, ending with "..." when cut
pub fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let budget = max_width - 3;
    let mut used = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}
