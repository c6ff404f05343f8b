//! Registration form handlers

use acctui_client::RegistrationOutcome;
use tracing::info;

use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

pub fn handle_focus(state: &mut AppState, index: usize) -> UpdateResult {
    state.registration.blur();
    state.registration.focus(index);
    UpdateResult::none()
}

pub fn handle_blur(state: &mut AppState) -> UpdateResult {
    state.registration.blur();
    UpdateResult::none()
}

pub fn handle_next_input(state: &mut AppState) -> UpdateResult {
    state.registration.focus_next();
    UpdateResult::none()
}

pub fn handle_prev_input(state: &mut AppState) -> UpdateResult {
    state.registration.focus_previous();
    UpdateResult::none()
}

pub fn handle_char_input(state: &mut AppState, c: char) -> UpdateResult {
    state.registration.insert_char(c);
    UpdateResult::none()
}

pub fn handle_backspace(state: &mut AppState) -> UpdateResult {
    state.registration.backspace();
    UpdateResult::none()
}

pub fn handle_submit(state: &mut AppState) -> UpdateResult {
    match state.registration.submit() {
        Some(pairs) => {
            info!("Submitting registration form");
            UpdateResult::action(UpdateAction::SubmitRegistration { pairs })
        }
        None => UpdateResult::none(),
    }
}

pub fn handle_completed(state: &mut AppState, outcome: RegistrationOutcome) -> UpdateResult {
    let host = state.settings.server.link_host();
    state.registration.on_completed(outcome, &host);
    UpdateResult::none()
}

pub fn handle_failed(state: &mut AppState, error: &str) -> UpdateResult {
    state.registration.on_failed(error);
    UpdateResult::none()
}
