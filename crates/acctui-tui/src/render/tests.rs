use super::*;
use crate::test_utils::{loaded_state, TestTerminal};
use acctui_app::handler::update;
use acctui_app::{InputKey, Message};

fn draw(state: &AppState) -> TestTerminal {
    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, state));
    term
}

#[test]
fn test_loading_line_until_profile_arrives() {
    let state = AppState::new();
    let term = draw(&state);
    assert!(term.buffer_contains("Loading account information..."));
    assert!(term.buffer_contains("not signed in"));
}

#[test]
fn test_failed_load_shows_error_line() {
    let mut state = AppState::new();
    update(&mut state, Message::ProfileLoadFailed("HTTP 401".into()));
    let term = draw(&state);
    assert!(term.buffer_contains("Could not load your account"));
    assert!(term.buffer_contains("HTTP 401"));
    // Settings stay visible read-only
    assert!(term.buffer_contains("Full Name"));
}

#[test]
fn test_loaded_profile_in_header() {
    let state = loaded_state();
    let term = draw(&state);
    assert!(term.line_contains(1, "Legolas"));
    assert!(!term.buffer_contains("Loading account information"));
}

#[test]
fn test_tab_switches_to_registration_screen() {
    let mut state = loaded_state();
    let mut msg = Some(Message::Key(InputKey::Tab));
    while let Some(m) = msg {
        msg = update(&mut state, m).message;
    }
    let term = draw(&state);
    assert!(term.buffer_contains("Public Username"));
    assert!(!term.buffer_contains("BASIC ACCOUNT INFORMATION"));
}
