//! Application state (Model in TEA pattern)

use acctui_core::{AppPhase, UserProfile};

use crate::catalog::account_settings_fields;
use crate::config::{Screen, Settings};
use crate::field_view::FieldView;
use crate::registration::RegistrationState;

/// Startup profile fetch status
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ProfileStatus {
    #[default]
    Loading,
    Loaded,
    /// Fetch failed; fields render but cannot be changed
    Failed(String),
}

/// Selection and in-progress edit on the account settings screen
#[derive(Debug, Clone, Default)]
pub struct SettingsViewState {
    /// Index into `AppState::fields`
    pub selected_index: usize,

    /// Whether a text field is being edited
    pub editing: bool,

    /// Text buffer for the field being edited
    pub edit_buffer: String,

    /// Value the edit started from
    pub original_value: String,

    /// Highlighted option while choosing from a dropdown
    pub dropdown_cursor: Option<usize>,
}

impl SettingsViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select next item
    pub fn select_next(&mut self, item_count: usize) {
        if item_count > 0 {
            self.selected_index = (self.selected_index + 1) % item_count;
        }
    }

    /// Select previous item
    pub fn select_previous(&mut self, item_count: usize) {
        if item_count > 0 {
            self.selected_index = if self.selected_index == 0 {
                item_count - 1
            } else {
                self.selected_index - 1
            };
        }
    }

    pub fn start_editing(&mut self, initial_value: &str) {
        self.editing = true;
        self.edit_buffer = initial_value.to_string();
        self.original_value = initial_value.to_string();
    }

    pub fn stop_editing(&mut self) {
        self.editing = false;
        self.edit_buffer.clear();
        self.original_value.clear();
    }

    pub fn is_modified(&self) -> bool {
        self.editing && self.edit_buffer != self.original_value
    }
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,

    pub screen: Screen,

    pub settings: Settings,

    /// The single profile record every field view reads and writes
    pub profile: UserProfile,

    pub profile_status: ProfileStatus,

    /// Account settings fields, in display order
    pub fields: Vec<FieldView>,

    pub settings_view_state: SettingsViewState,

    pub registration: RegistrationState,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        let fields = account_settings_fields(&settings)
            .into_iter()
            .map(FieldView::new)
            .collect();
        Self {
            phase: AppPhase::Loading,
            screen: settings.ui.start_screen,
            profile: UserProfile::default(),
            profile_status: ProfileStatus::Loading,
            fields,
            settings_view_state: SettingsViewState::new(),
            registration: RegistrationState::new(),
            settings,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Field views accept changes only once the profile is loaded
    pub fn can_edit(&self) -> bool {
        self.profile_status == ProfileStatus::Loaded
    }

    pub fn selected_field(&self) -> Option<&FieldView> {
        self.fields.get(self.settings_view_state.selected_index)
    }

    pub fn switch_screen(&mut self) {
        self.settings_view_state.stop_editing();
        self.settings_view_state.dropdown_cursor = None;
        self.registration.blur();
        self.screen = self.screen.next();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_wraps() {
        let mut view = SettingsViewState::new();
        view.select_previous(3);
        assert_eq!(view.selected_index, 2);
        view.select_next(3);
        assert_eq!(view.selected_index, 0);
    }

    #[test]
    fn test_select_with_no_items() {
        let mut view = SettingsViewState::new();
        view.select_next(0);
        assert_eq!(view.selected_index, 0);
    }

    #[test]
    fn test_edit_modified_tracking() {
        let mut view = SettingsViewState::new();
        view.start_editing("Legolas");
        assert!(!view.is_modified());
        view.edit_buffer.push('!');
        assert!(view.is_modified());
        view.stop_editing();
        assert!(!view.is_modified());
        assert!(view.edit_buffer.is_empty());
    }

    #[test]
    fn test_new_state_builds_catalog() {
        let state = AppState::new();
        assert_eq!(state.fields.len(), 11);
        assert_eq!(state.phase, AppPhase::Loading);
        assert_eq!(state.screen, Screen::Settings);
        assert!(!state.can_edit());
    }

    #[test]
    fn test_start_screen_from_settings() {
        let mut settings = Settings::default();
        settings.ui.start_screen = Screen::Register;
        let state = AppState::with_settings(settings);
        assert_eq!(state.screen, Screen::Register);
    }
}
