//! Key event handlers per screen

use crate::config::Screen;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;

/// Convert key events to messages based on the current screen
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Force quit with Ctrl+C from anywhere
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    match state.screen {
        Screen::Settings => handle_key_settings(state, key),
        Screen::Register => handle_key_register(state, key),
    }
}

fn handle_key_settings(state: &AppState, key: InputKey) -> Option<Message> {
    if state.settings_view_state.editing {
        return handle_key_settings_edit(key);
    }
    if state.settings_view_state.dropdown_cursor.is_some() {
        return handle_key_settings_dropdown(key);
    }

    match key {
        InputKey::Char('q') => Some(Message::Quit),
        InputKey::Tab | InputKey::BackTab => Some(Message::NextScreen),

        // Item navigation
        InputKey::Char('j') | InputKey::Down => Some(Message::SettingsNextItem),
        InputKey::Char('k') | InputKey::Up => Some(Message::SettingsPrevItem),

        InputKey::Enter | InputKey::Char(' ') => Some(Message::SettingsActivate),

        // Dropdown options
        InputKey::Char('h') | InputKey::Left => Some(Message::SettingsCycleOption(-1)),
        InputKey::Char('l') | InputKey::Right => Some(Message::SettingsCycleOption(1)),

        InputKey::Char('r') => Some(Message::LoadProfile),

        _ => None,
    }
}

fn handle_key_settings_edit(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::SettingsCancelEdit),
        InputKey::Enter => Some(Message::SettingsCommitEdit),
        InputKey::Backspace => Some(Message::SettingsBackspace),
        InputKey::CharCtrl('u') => Some(Message::SettingsClearBuffer),
        // Leaving the field commits a modified buffer
        InputKey::Down => Some(Message::SettingsNextItem),
        InputKey::Up => Some(Message::SettingsPrevItem),
        InputKey::Tab | InputKey::BackTab => Some(Message::NextScreen),
        other => other.as_text().map(Message::SettingsCharInput),
    }
}

fn handle_key_settings_dropdown(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::SettingsCancelEdit),
        InputKey::Enter | InputKey::Char(' ') => Some(Message::SettingsCommitEdit),
        InputKey::Char('h' | 'k') | InputKey::Left | InputKey::Up => {
            Some(Message::SettingsCycleOption(-1))
        }
        InputKey::Char('l' | 'j') | InputKey::Right | InputKey::Down => {
            Some(Message::SettingsCycleOption(1))
        }
        InputKey::Tab | InputKey::BackTab => Some(Message::NextScreen),
        _ => None,
    }
}

fn handle_key_register(state: &AppState, key: InputKey) -> Option<Message> {
    if state.registration.focused.is_some() {
        return match key {
            InputKey::Esc => Some(Message::RegisterBlur),
            InputKey::Enter => Some(Message::RegisterSubmit),
            InputKey::Down => Some(Message::RegisterNextInput),
            InputKey::Up => Some(Message::RegisterPrevInput),
            InputKey::Backspace => Some(Message::RegisterBackspace),
            InputKey::Tab | InputKey::BackTab => Some(Message::NextScreen),
            other => other.as_text().map(Message::RegisterCharInput),
        };
    }

    match key {
        InputKey::Char('q') => Some(Message::Quit),
        InputKey::Tab | InputKey::BackTab => Some(Message::NextScreen),
        InputKey::Char('j') | InputKey::Down => Some(Message::RegisterNextInput),
        InputKey::Char('k') | InputKey::Up => Some(Message::RegisterPrevInput),
        InputKey::Enter => Some(Message::RegisterSubmit),
        _ => None,
    }
}
