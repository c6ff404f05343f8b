//! Field descriptors and per-field save state.
//!
//! A [`FieldDescriptor`] is the immutable configuration of one row on the
//! account settings screen. It names the profile attribute it binds to and the
//! kind of control it renders; it never owns the profile itself.

use std::sync::LazyLock;

use regex::Regex;

use crate::profile::ProfileAttribute;
use crate::types::MessageTone;

pub const SAVING_MESSAGE: &str = "Saving...";
pub const SUCCESS_MESSAGE: &str = "Successfully changed.";
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred, please try again.";
/// Shown for a 400 when the field has no configured error message
pub const INVALID_VALUE_MESSAGE: &str = "Please check the value and try again.";
pub const LINK_SENT_MESSAGE: &str = "Your request has been sent.";

static MARKUP_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("Invalid markup regex"));

/// Remove HTML-like tags (icons, emphasis) from a configured message.
pub fn strip_markup(text: &str) -> String {
    MARKUP_PATTERN
        .replace_all(text, "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Confirmation shown after a successful password reset request.
pub fn password_reset_message(email: &str) -> String {
    format!("Complete you password reset using the confirmation link emailed to {email}.")
}

/// One entry of a dropdown, in configured order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownOption {
    pub value: String,
    pub label: String,
}

impl DropdownOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// The blank choice offered ahead of a non-required dropdown's options
    pub fn empty() -> Self {
        Self::new("", "")
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// The control a field renders and how it talks to the server
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Readonly,
    Text,
    Dropdown {
        options: Vec<DropdownOption>,
        required: bool,
    },
    Link {
        link_title: String,
        link_href: String,
        success_message: Option<String>,
    },
    Password {
        link_title: String,
        link_href: String,
        email_attribute: ProfileAttribute,
    },
}

impl FieldKind {
    /// Whether committing a new value issues a PATCH
    pub fn is_editable(&self) -> bool {
        matches!(self, FieldKind::Text | FieldKind::Dropdown { .. })
    }
}

/// Configuration of one account settings field
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    pub title: String,
    pub value_attribute: ProfileAttribute,
    pub help_message: String,
    pub kind: FieldKind,
    /// Shown when the server rejects a value with 400
    pub error_message: Option<String>,
    /// Section header the field is grouped under
    pub section: String,
}

impl FieldDescriptor {
    pub fn new(title: impl Into<String>, value_attribute: ProfileAttribute) -> Self {
        Self {
            title: title.into(),
            value_attribute,
            help_message: String::new(),
            kind: FieldKind::Text,
            error_message: None,
            section: String::new(),
        }
    }

    pub fn help(mut self, message: impl Into<String>) -> Self {
        self.help_message = message.into();
        self
    }

    pub fn kind(mut self, kind: FieldKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn readonly(self) -> Self {
        self.kind(FieldKind::Readonly)
    }

    pub fn dropdown(self, options: Vec<DropdownOption>, required: bool) -> Self {
        self.kind(FieldKind::Dropdown { options, required })
    }

    pub fn error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    pub fn section(mut self, section: impl Into<String>) -> Self {
        self.section = section.into();
        self
    }

    /// Message for a 400 rejection, markup stripped
    pub fn invalid_value_message(&self) -> String {
        match &self.error_message {
            Some(message) => strip_markup(message),
            None => INVALID_VALUE_MESSAGE.to_string(),
        }
    }
}

/// Transient save/request state of a single field view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SaveState {
    #[default]
    Pristine,
    Saving,
    /// Completed; carries the confirmation text to show
    Success(String),
    Error(String),
}

impl SaveState {
    /// Plain success after a PATCH
    pub fn saved() -> Self {
        SaveState::Success(SUCCESS_MESSAGE.to_string())
    }

    /// Text for the field's message region
    pub fn message<'a>(&'a self, help_message: &'a str) -> &'a str {
        match self {
            SaveState::Pristine => help_message,
            SaveState::Saving => SAVING_MESSAGE,
            SaveState::Success(message) | SaveState::Error(message) => message,
        }
    }

    pub fn tone(&self) -> MessageTone {
        match self {
            SaveState::Pristine => MessageTone::Help,
            SaveState::Saving => MessageTone::Pending,
            SaveState::Success(_) => MessageTone::Success,
            SaveState::Error(_) => MessageTone::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_markup_removes_icon() {
        let raw = r#"<i class="fa fa-exclamation-triangle" aria-hidden="true"></i> Something went wrong"#;
        assert_eq!(strip_markup(raw), "Something went wrong");
    }

    #[test]
    fn test_strip_markup_leaves_plain_text() {
        assert_eq!(strip_markup("Enter a valid year."), "Enter a valid year.");
    }

    #[test]
    fn test_save_state_messages() {
        let help = "The name that appears on your certificates.";
        assert_eq!(SaveState::Pristine.message(help), help);
        assert_eq!(SaveState::Saving.message(help), "Saving...");
        assert_eq!(SaveState::saved().message(help), "Successfully changed.");
        assert_eq!(
            SaveState::Error(GENERIC_ERROR_MESSAGE.into()).message(help),
            "An error occurred, please try again."
        );
    }

    #[test]
    fn test_save_state_tone() {
        assert_eq!(SaveState::Pristine.tone(), MessageTone::Help);
        assert_eq!(SaveState::Saving.tone(), MessageTone::Pending);
        assert_eq!(SaveState::saved().tone(), MessageTone::Success);
        assert_eq!(SaveState::Error("x".into()).tone(), MessageTone::Error);
    }

    #[test]
    fn test_invalid_value_message_uses_configured_text() {
        let field = FieldDescriptor::new("Year of Birth", ProfileAttribute::YearOfBirth)
            .error_message("<i class=\"icon\"></i> Enter a valid year.");
        assert_eq!(field.invalid_value_message(), "Enter a valid year.");
    }

    #[test]
    fn test_invalid_value_message_fallback() {
        let field = FieldDescriptor::new("Full Name", ProfileAttribute::Name);
        assert_eq!(
            field.invalid_value_message(),
            "Please check the value and try again."
        );
    }

    #[test]
    fn test_password_reset_message() {
        assert_eq!(
            password_reset_message("legolas@woodland.middlearth"),
            "Complete you password reset using the confirmation link emailed to legolas@woodland.middlearth."
        );
    }

    #[test]
    fn test_builder_defaults_to_text() {
        let field = FieldDescriptor::new("Goals", ProfileAttribute::Goals).section("Additional");
        assert_eq!(field.kind, FieldKind::Text);
        assert!(field.kind.is_editable());
        assert_eq!(field.section, "Additional");
    }
}
