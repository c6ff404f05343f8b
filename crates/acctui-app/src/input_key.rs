//! Abstract input key event, independent of terminal library.
//!
//! The TUI converts crossterm key events into [`InputKey`] at its boundary so
//! the state machine in this crate can be driven from tests without a
//! terminal.

/// Keyboard input understood by the account console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c, ...)
    CharCtrl(char),

    Up,
    Down,
    Left,
    Right,
    Home,
    End,

    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
    Backspace,
    Delete,
}

impl InputKey {
    /// Text a key contributes to an input buffer, if any
    pub fn as_text(&self) -> Option<char> {
        match self {
            InputKey::Char(c) if !c.is_control() => Some(*c),
            _ => None,
        }
    }
}
