//! Tests for account_panel widget module

use super::*;
use crate::test_utils::{loaded_state, TestTerminal};
use acctui_app::config::IconMode;
use acctui_app::AppState;

fn render(term: &mut TestTerminal, state: &AppState) {
    let area = term.area();
    term.render_widget(
        AccountPanel::new(
            &state.fields,
            &state.profile,
            &state.settings_view_state,
            IconSet::new(IconMode::Unicode),
        ),
        area,
    );
}

#[test]
fn test_panel_renders_sections_and_titles() {
    let state = loaded_state();
    let mut term = TestTerminal::new();
    render(&mut term, &state);

    assert!(term.buffer_contains("Account Settings"));
    assert!(term.buffer_contains("BASIC ACCOUNT INFORMATION"));
    assert!(term.buffer_contains("ADDITIONAL INFORMATION"));
    assert!(term.buffer_contains("Full Name"));
    assert!(term.buffer_contains("Legolas Thranduil"));
    assert!(term.buffer_contains("Mailing Address"));
}

#[test]
fn test_readonly_shows_value_and_help() {
    let state = loaded_state();
    let mut term = TestTerminal::new();
    render(&mut term, &state);

    assert!(term.buffer_contains("legolas@woodland.middlearth"));
    assert!(term.buffer_contains("The name that identifies you"));
}

#[test]
fn test_unset_optional_dropdown_shows_blank_choice() {
    let state = loaded_state();
    let mut term = TestTerminal::new();
    render(&mut term, &state);

    // Gender is unset: its row shows the blank option
    let content = term.content();
    let gender_line = content
        .lines()
        .find(|l| l.contains("Gender"))
        .expect("gender row");
    assert!(gender_line.contains("(none)"));
}

#[test]
fn test_required_dropdown_shows_current_label() {
    let state = loaded_state();
    let mut term = TestTerminal::new();
    render(&mut term, &state);
    assert!(term.buffer_contains("English ▾"));
}

#[test]
fn test_saving_message_replaces_help() {
    let mut state = loaded_state();
    let fields = &mut state.fields;
    fields[1].on_value_changed(&mut state.profile, "Legolas Greenleaf");

    let mut term = TestTerminal::new();
    render(&mut term, &state);
    assert!(term.buffer_contains("Saving..."));
    assert!(term.buffer_contains("Legolas Greenleaf"));
    assert!(!term.buffer_contains("The name that appears on your certificates"));
}

#[test]
fn test_edit_buffer_shows_cursor_and_footer_hints() {
    let mut state = loaded_state();
    state.settings_view_state.selected_index = 1;
    state.settings_view_state.start_editing("Legol");

    let mut term = TestTerminal::new();
    render(&mut term, &state);
    assert!(term.buffer_contains("Legol▌"));
    assert!(term.buffer_contains("Cancel"));
    assert!(!term.buffer_contains("Navigate"));
}

#[test]
fn test_open_dropdown_shows_cursor_option() {
    let mut state = loaded_state();
    state.settings_view_state.selected_index = 5;
    state.settings_view_state.dropdown_cursor = Some(2);
    let label = state.fields[5].dropdown_options()[2].label.clone();

    let mut term = TestTerminal::new();
    render(&mut term, &state);
    assert!(term.buffer_contains(&format!("‹ {} ›", label)));
    assert!(term.buffer_contains("Choose"));
}

#[test]
fn test_password_row_shows_button() {
    let state = loaded_state();
    let mut term = TestTerminal::new();
    render(&mut term, &state);
    assert!(term.buffer_contains("Reset Password"));
}

#[test]
fn test_scrolls_to_selected_field() {
    let mut state = loaded_state();
    state.settings_view_state.selected_index = state.fields.len() - 1;

    let mut term = TestTerminal::compact();
    render(&mut term, &state);
    assert!(term.buffer_contains("Mailing Address"));
    assert!(!term.buffer_contains("Username"));
}

#[test]
fn test_scroll_offset() {
    assert_eq!(scroll_offset(3, 10), 0);
    assert_eq!(scroll_offset(9, 10), 0);
    assert_eq!(scroll_offset(10, 10), 1);
    assert_eq!(scroll_offset(24, 10), 15);
}
