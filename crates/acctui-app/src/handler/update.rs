//! Main update function - handles state transitions (TEA pattern)

use acctui_core::AppPhase;
use tracing::{error, info};

use crate::message::Message;
use crate::state::{AppState, ProfileStatus};

use super::{fields, keys::handle_key, registration, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => UpdateResult::none(),

        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::NextScreen => {
            let result = fields::blur_edit(state);
            state.registration.blur();
            state.switch_screen();
            result
        }

        // ─────────────────────────────────────────────────────────
        // Profile Messages
        // ─────────────────────────────────────────────────────────
        Message::LoadProfile => {
            state.profile_status = ProfileStatus::Loading;
            UpdateResult::action(UpdateAction::FetchProfile)
        }

        Message::ProfileLoaded(profile) => {
            info!("Loaded profile for {}", profile.username);
            state.profile = profile;
            state.profile_status = ProfileStatus::Loaded;
            state.phase = AppPhase::Ready;
            UpdateResult::none()
        }

        Message::ProfileLoadFailed(reason) => {
            error!("Failed to load profile: {}", reason);
            state.profile_status = ProfileStatus::Failed(reason);
            state.phase = AppPhase::Ready;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Account Settings Messages
        // ─────────────────────────────────────────────────────────
        Message::SettingsNextItem => fields::handle_next_item(state),
        Message::SettingsPrevItem => fields::handle_prev_item(state),
        Message::SettingsActivate => fields::handle_activate(state),
        Message::SettingsCharInput(c) => fields::handle_char_input(state, c),
        Message::SettingsBackspace => fields::handle_backspace(state),
        Message::SettingsClearBuffer => fields::handle_clear_buffer(state),
        Message::SettingsCommitEdit => fields::handle_commit_edit(state),
        Message::SettingsCancelEdit => fields::handle_cancel_edit(state),
        Message::SettingsCycleOption(delta) => fields::handle_cycle_option(state, delta),

        Message::FieldSaveCompleted { index, outcome } => {
            fields::handle_save_completed(state, index, outcome)
        }
        Message::FieldSaveFailed { index, error } => {
            fields::handle_save_failed(state, index, &error)
        }
        Message::LinkCompleted { index, outcome } => {
            fields::handle_link_completed(state, index, outcome)
        }
        Message::LinkFailed { index, error } => fields::handle_link_failed(state, index, &error),

        // ─────────────────────────────────────────────────────────
        // Registration Messages
        // ─────────────────────────────────────────────────────────
        Message::RegisterFocus(index) => registration::handle_focus(state, index),
        Message::RegisterBlur => registration::handle_blur(state),
        Message::RegisterNextInput => registration::handle_next_input(state),
        Message::RegisterPrevInput => registration::handle_prev_input(state),
        Message::RegisterCharInput(c) => registration::handle_char_input(state, c),
        Message::RegisterBackspace => registration::handle_backspace(state),
        Message::RegisterSubmit => registration::handle_submit(state),
        Message::RegistrationCompleted(outcome) => registration::handle_completed(state, outcome),
        Message::RegistrationFailed(error) => registration::handle_failed(state, &error),
    }
}
