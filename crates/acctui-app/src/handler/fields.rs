//! Account settings field handlers
//!
//! Handles navigation, editing, dropdown choice and link activation, and
//! applies server completions to the owning field view.

use acctui_client::{LinkOutcome, SaveOutcome};
use acctui_core::FieldKind;
use tracing::{debug, info};

use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

/// Fire the change event of field `index` with `value`
fn fire_change(state: &mut AppState, index: usize, value: String) -> UpdateResult {
    let Some(view) = state.fields.get_mut(index) else {
        return UpdateResult::none();
    };
    match view.on_value_changed(&mut state.profile, value) {
        Some(request) => {
            info!("Saving {} = {:?}", request.attribute, request.value);
            UpdateResult::action(UpdateAction::SaveField {
                index,
                attribute: request.attribute,
                value: request.value,
            })
        }
        None => UpdateResult::none(),
    }
}

/// Leave any in-progress edit. A modified text buffer is committed, like a
/// change event on blur; an open dropdown choice is dropped.
pub(crate) fn blur_edit(state: &mut AppState) -> UpdateResult {
    state.settings_view_state.dropdown_cursor = None;
    if !state.settings_view_state.editing {
        return UpdateResult::none();
    }
    let index = state.settings_view_state.selected_index;
    let modified = state.settings_view_state.is_modified();
    let value = std::mem::take(&mut state.settings_view_state.edit_buffer);
    state.settings_view_state.stop_editing();
    if modified {
        fire_change(state, index, value)
    } else {
        UpdateResult::none()
    }
}

/// Handle settings next item message
pub fn handle_next_item(state: &mut AppState) -> UpdateResult {
    let result = blur_edit(state);
    state.settings_view_state.select_next(state.fields.len());
    result
}

/// Handle settings previous item message
pub fn handle_prev_item(state: &mut AppState) -> UpdateResult {
    let result = blur_edit(state);
    state.settings_view_state.select_previous(state.fields.len());
    result
}

/// Enter on the selected field
pub fn handle_activate(state: &mut AppState) -> UpdateResult {
    let index = state.settings_view_state.selected_index;
    let Some(view) = state.fields.get(index) else {
        return UpdateResult::none();
    };
    if !state.can_edit() {
        debug!("Profile not loaded, ignoring activation of {}", view.descriptor.title);
        return UpdateResult::none();
    }

    match &view.descriptor.kind {
        FieldKind::Readonly => UpdateResult::none(),
        FieldKind::Text => {
            let current = state
                .profile
                .value(view.attribute())
                .unwrap_or_default()
                .to_string();
            state.settings_view_state.start_editing(&current);
            UpdateResult::none()
        }
        FieldKind::Dropdown { .. } => {
            state.settings_view_state.dropdown_cursor = Some(view.selected_option(&state.profile));
            UpdateResult::none()
        }
        FieldKind::Link { .. } | FieldKind::Password { .. } => {
            match view.on_activate(&state.profile) {
                Some(request) => {
                    info!("Activating {}", view.descriptor.title);
                    UpdateResult::action(UpdateAction::ActivateLink { index, request })
                }
                None => UpdateResult::none(),
            }
        }
    }
}

/// Handle character input while editing
pub fn handle_char_input(state: &mut AppState, c: char) -> UpdateResult {
    if state.settings_view_state.editing {
        state.settings_view_state.edit_buffer.push(c);
    }
    UpdateResult::none()
}

/// Handle backspace while editing
pub fn handle_backspace(state: &mut AppState) -> UpdateResult {
    if state.settings_view_state.editing {
        state.settings_view_state.edit_buffer.pop();
    }
    UpdateResult::none()
}

/// Handle clear (Ctrl+U) while editing
pub fn handle_clear_buffer(state: &mut AppState) -> UpdateResult {
    if state.settings_view_state.editing {
        state.settings_view_state.edit_buffer.clear();
    }
    UpdateResult::none()
}

/// Enter while editing a text field or choosing a dropdown option.
///
/// A text commit always fires the change event. A dropdown fires only when
/// the chosen value differs from the model's.
pub fn handle_commit_edit(state: &mut AppState) -> UpdateResult {
    let index = state.settings_view_state.selected_index;

    if state.settings_view_state.editing {
        let value = std::mem::take(&mut state.settings_view_state.edit_buffer);
        state.settings_view_state.stop_editing();
        return fire_change(state, index, value);
    }

    if let Some(cursor) = state.settings_view_state.dropdown_cursor.take() {
        let Some(view) = state.fields.get(index) else {
            return UpdateResult::none();
        };
        let Some(option) = view.dropdown_options().into_iter().nth(cursor) else {
            return UpdateResult::none();
        };
        // Index 0 is shown for an absent or unlisted value too
        let current = state.profile.value(view.attribute()).unwrap_or_default();
        if option.value == current {
            return UpdateResult::none();
        }
        return fire_change(state, index, option.value);
    }

    UpdateResult::none()
}

/// Handle cancel edit message
pub fn handle_cancel_edit(state: &mut AppState) -> UpdateResult {
    state.settings_view_state.stop_editing();
    state.settings_view_state.dropdown_cursor = None;
    UpdateResult::none()
}

/// Move the dropdown cursor, opening the choice on first use
pub fn handle_cycle_option(state: &mut AppState, delta: isize) -> UpdateResult {
    if !state.can_edit() {
        return UpdateResult::none();
    }
    let Some(view) = state.selected_field() else {
        return UpdateResult::none();
    };
    let count = view.dropdown_options().len();
    if count == 0 {
        return UpdateResult::none();
    }
    let cursor = state
        .settings_view_state
        .dropdown_cursor
        .unwrap_or_else(|| view.selected_option(&state.profile));
    let next = (cursor as isize + delta).rem_euclid(count as isize) as usize;
    state.settings_view_state.dropdown_cursor = Some(next);
    UpdateResult::none()
}

pub fn handle_save_completed(state: &mut AppState, index: usize, outcome: SaveOutcome) -> UpdateResult {
    if let Some(view) = state.fields.get_mut(index) {
        info!("Save of {} completed: {:?}", view.attribute(), outcome);
        view.on_save_completed(&outcome);
    }
    UpdateResult::none()
}

pub fn handle_save_failed(state: &mut AppState, index: usize, error: &str) -> UpdateResult {
    if let Some(view) = state.fields.get(index) {
        view.on_save_failed(error);
    }
    UpdateResult::none()
}

pub fn handle_link_completed(state: &mut AppState, index: usize, outcome: LinkOutcome) -> UpdateResult {
    if let Some(view) = state.fields.get_mut(index) {
        info!("{} completed: {:?}", view.descriptor.title, outcome);
        view.on_link_completed(&outcome, &state.profile);
    }
    UpdateResult::none()
}

pub fn handle_link_failed(state: &mut AppState, index: usize, error: &str) -> UpdateResult {
    if let Some(view) = state.fields.get_mut(index) {
        view.on_link_failed(error);
    }
    UpdateResult::none()
}
