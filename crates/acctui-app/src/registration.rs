//! Registration form state: label focus flags, banners and the submit cycle.

use acctui_client::RegistrationOutcome;
use acctui_core::prelude::*;
use acctui_core::{new_user_link, RegistrationForm, GENERIC_ERROR_MESSAGE};

/// Success banner content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUserLink {
    pub username: String,
    pub href: String,
}

#[derive(Debug, Clone, Default)]
pub struct RegistrationState {
    pub form: RegistrationForm,
    /// Input holding the cursor
    pub focused: Option<usize>,
    /// `is-focused` flag per input label
    pub label_focused: Vec<bool>,
    pub success: Option<NewUserLink>,
    pub error: Option<String>,
    pub submitting: bool,
    /// Username captured at submit time for the new-user link
    submitted_username: String,
}

impl RegistrationState {
    pub fn new() -> Self {
        let form = RegistrationForm::default();
        let label_focused = vec![false; form.inputs.len()];
        Self {
            form,
            label_focused,
            ..Default::default()
        }
    }

    /// Focus an input: flags its label only
    pub fn focus(&mut self, index: usize) {
        if index >= self.form.inputs.len() {
            return;
        }
        self.focused = Some(index);
        if let Some(flag) = self.label_focused.get_mut(index) {
            *flag = true;
        }
    }

    /// Blur clears the flag on every label, not just the blurred one
    pub fn blur(&mut self) {
        self.focused = None;
        self.label_focused.iter_mut().for_each(|flag| *flag = false);
    }

    /// Blur-then-focus on the next input, wrapping
    pub fn focus_next(&mut self) {
        let count = self.form.inputs.len();
        if count == 0 {
            return;
        }
        let next = self.focused.map(|i| (i + 1) % count).unwrap_or(0);
        self.blur();
        self.focus(next);
    }

    pub fn focus_previous(&mut self) {
        let count = self.form.inputs.len();
        if count == 0 {
            return;
        }
        let prev = match self.focused {
            Some(0) | None => count - 1,
            Some(i) => i - 1,
        };
        self.blur();
        self.focus(prev);
    }

    pub fn is_label_focused(&self, index: usize) -> bool {
        self.label_focused.get(index).copied().unwrap_or(false)
    }

    pub fn insert_char(&mut self, c: char) {
        if let Some(input) = self.focused.and_then(|i| self.form.inputs.get_mut(i)) {
            input.value.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(input) = self.focused.and_then(|i| self.form.inputs.get_mut(i)) {
            input.value.pop();
        }
    }

    /// Start a submit cycle. Returns the serialized form, or `None` while a
    /// submission is already in flight.
    pub fn submit(&mut self) -> Option<Vec<(String, String)>> {
        if self.submitting {
            debug!("Registration already in flight, ignoring submit");
            return None;
        }
        self.success = None;
        self.submitting = true;
        self.submitted_username = self.form.value("username").unwrap_or_default().to_string();
        Some(self.form.pairs())
    }

    pub fn on_completed(&mut self, outcome: RegistrationOutcome, host: &str) {
        self.submitting = false;
        match outcome {
            RegistrationOutcome::Registered => {
                self.error = None;
                let username = std::mem::take(&mut self.submitted_username);
                info!("Registered new account {}", username);
                self.success = Some(NewUserLink {
                    href: new_user_link(host, &username),
                    username,
                });
            }
            RegistrationOutcome::Rejected { message } => {
                info!("Registration rejected: {}", message);
                self.error = Some(message);
            }
        }
    }

    pub fn on_failed(&mut self, error: &str) {
        warn!("Registration request did not complete: {}", error);
        self.submitting = false;
        self.error = Some(GENERIC_ERROR_MESSAGE.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> RegistrationState {
        let mut state = RegistrationState::new();
        for (i, value) in ["legolas@woodland.middlearth", "Legolas", "Legolas", "mellon"]
            .iter()
            .enumerate()
        {
            state.form.inputs[i].value = value.to_string();
        }
        state
    }

    #[test]
    fn test_focus_flags_only_its_label() {
        let mut state = RegistrationState::new();
        state.focus(1);
        assert!(state.is_label_focused(1));
        assert!(!state.is_label_focused(0));
    }

    #[test]
    fn test_blur_clears_every_label() {
        let mut state = RegistrationState::new();
        state.label_focused = vec![true, true, false, true];
        state.focused = Some(0);
        state.blur();
        assert!(state.label_focused.iter().all(|f| !f));
        assert_eq!(state.focused, None);
    }

    #[test]
    fn test_focus_next_is_blur_then_focus() {
        let mut state = RegistrationState::new();
        state.focus(0);
        state.focus_next();
        assert_eq!(state.focused, Some(1));
        assert!(!state.is_label_focused(0));
        assert!(state.is_label_focused(1));
    }

    #[test]
    fn test_focus_previous_wraps() {
        let mut state = RegistrationState::new();
        state.focus(0);
        state.focus_previous();
        assert_eq!(state.focused, Some(3));
    }

    #[test]
    fn test_typing_goes_to_focused_input() {
        let mut state = RegistrationState::new();
        state.focus(2);
        state.insert_char('L');
        state.insert_char('x');
        state.backspace();
        assert_eq!(state.form.value("username"), Some("L"));
    }

    #[test]
    fn test_submit_clears_success_and_serializes() {
        let mut state = filled();
        state.success = Some(NewUserLink {
            username: "old".into(),
            href: "http://x/u/old".into(),
        });
        let pairs = state.submit().unwrap();
        assert!(state.success.is_none());
        assert!(state.submitting);
        assert_eq!(pairs[2], ("username".to_string(), "Legolas".to_string()));
    }

    #[test]
    fn test_submit_ignored_while_in_flight() {
        let mut state = filled();
        assert!(state.submit().is_some());
        assert!(state.submit().is_none());
    }

    #[test]
    fn test_success_builds_link() {
        let mut state = filled();
        state.error = Some("previous failure".into());
        state.submit();
        state.on_completed(RegistrationOutcome::Registered, "studio.example.org");
        assert_eq!(state.error, None);
        assert_eq!(
            state.success,
            Some(NewUserLink {
                username: "Legolas".into(),
                href: "http://studio.example.org/u/Legolas".into()
            })
        );
        assert!(!state.submitting);
    }

    #[test]
    fn test_rejection_shows_server_value() {
        let mut state = filled();
        state.submit();
        state.on_completed(
            RegistrationOutcome::Rejected {
                message: "Username already exists".into(),
            },
            "studio.example.org",
        );
        assert_eq!(state.error.as_deref(), Some("Username already exists"));
        assert!(state.success.is_none());
    }

    #[test]
    fn test_transport_failure_shows_generic_error() {
        let mut state = filled();
        state.submit();
        state.on_failed("connection refused");
        assert_eq!(
            state.error.as_deref(),
            Some("An error occurred, please try again.")
        );
        assert!(!state.submitting);
    }
}
