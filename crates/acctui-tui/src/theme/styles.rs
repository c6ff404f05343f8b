//! Semantic style builders.

use acctui_core::MessageTone;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// "Black on Cyan" - focused+selected items
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

// --- Message tone mapping ---

/// Style of a field's message region
pub fn tone_style(tone: MessageTone) -> Style {
    match tone {
        MessageTone::Help => Style::default()
            .fg(palette::TEXT_MUTED)
            .add_modifier(Modifier::ITALIC),
        MessageTone::Pending => Style::default().fg(palette::STATUS_YELLOW),
        MessageTone::Success => Style::default().fg(palette::STATUS_GREEN),
        MessageTone::Error => Style::default()
            .fg(palette::STATUS_RED)
            .add_modifier(Modifier::BOLD),
    }
}

/// Banner styles for the registration screen
pub fn success_banner() -> Style {
    Style::default()
        .fg(palette::STATUS_GREEN)
        .bg(palette::BANNER_SUCCESS_BG)
}

pub fn error_banner() -> Style {
    Style::default()
        .fg(palette::STATUS_RED)
        .bg(palette::BANNER_ERROR_BG)
}
