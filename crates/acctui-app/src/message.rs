//! Message types for the application (TEA pattern)

use acctui_client::{LinkOutcome, RegistrationOutcome, SaveOutcome};
use acctui_core::UserProfile;

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Quit (q, Ctrl+C)
    Quit,

    /// Toggle between account settings and registration
    NextScreen,

    // ─────────────────────────────────────────────────────────
    // Profile Messages
    // ─────────────────────────────────────────────────────────
    /// Fetch the profile (startup, or `r` to reload)
    LoadProfile,
    ProfileLoaded(UserProfile),
    ProfileLoadFailed(String),

    // ─────────────────────────────────────────────────────────
    // Account Settings Messages
    // ─────────────────────────────────────────────────────────
    SettingsNextItem,
    SettingsPrevItem,
    /// Enter on the selected field: edit, choose, or activate
    SettingsActivate,
    SettingsCharInput(char),
    SettingsBackspace,
    SettingsClearBuffer,
    SettingsCommitEdit,
    SettingsCancelEdit,
    /// Move the dropdown cursor by `delta`, opening the choice if needed
    SettingsCycleOption(isize),

    /// PATCH answered by the server
    FieldSaveCompleted {
        index: usize,
        outcome: SaveOutcome,
    },
    /// PATCH never completed
    FieldSaveFailed {
        index: usize,
        error: String,
    },
    LinkCompleted {
        index: usize,
        outcome: LinkOutcome,
    },
    LinkFailed {
        index: usize,
        error: String,
    },

    // ─────────────────────────────────────────────────────────
    // Registration Messages
    // ─────────────────────────────────────────────────────────
    RegisterFocus(usize),
    RegisterBlur,
    RegisterNextInput,
    RegisterPrevInput,
    RegisterCharInput(char),
    RegisterBackspace,
    RegisterSubmit,
    RegistrationCompleted(RegistrationOutcome),
    RegistrationFailed(String),
}
