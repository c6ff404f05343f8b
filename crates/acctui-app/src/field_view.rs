//! Field views: a descriptor bound to the profile plus its save state.
//!
//! A view never owns the profile. Every operation borrows the single
//! [`UserProfile`] held by the application state, so all views observe the
//! same record.

use acctui_client::{LinkOutcome, SaveOutcome};
use acctui_core::prelude::*;
use acctui_core::{
    password_reset_message, DropdownOption, FieldDescriptor, FieldKind, MessageTone,
    ProfileAttribute, SaveState, UserProfile, GENERIC_ERROR_MESSAGE, LINK_SENT_MESSAGE,
};

/// Bound control as the renderer should draw it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldControl {
    /// Plain text, not editable
    Value(String),
    /// Editable text input
    Input(String),
    /// Select with the index of the selected option
    Select {
        options: Vec<DropdownOption>,
        selected: usize,
    },
    /// Activatable link labelled with `link_title`
    Button(String),
}

/// Pure projection of a field for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRender {
    pub title: String,
    pub message: String,
    pub tone: MessageTone,
    pub control: FieldControl,
}

/// A single-attribute PATCH produced by a change event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveRequest {
    pub attribute: ProfileAttribute,
    pub value: String,
}

/// POST produced by activating a link field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkRequest {
    Plain { href: String },
    PasswordReset { href: String, email: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldView {
    pub descriptor: FieldDescriptor,
    pub save_state: SaveState,
}

impl FieldView {
    pub fn new(descriptor: FieldDescriptor) -> Self {
        Self {
            descriptor,
            save_state: SaveState::Pristine,
        }
    }

    pub fn attribute(&self) -> ProfileAttribute {
        self.descriptor.value_attribute
    }

    pub fn render(&self, profile: &UserProfile) -> FieldRender {
        let value = profile.value(self.attribute()).unwrap_or_default();
        let control = match &self.descriptor.kind {
            FieldKind::Readonly => {
                let shown = match self.attribute() {
                    ProfileAttribute::DateJoined => {
                        profile.joined_display().unwrap_or_else(|| value.to_string())
                    }
                    _ => value.to_string(),
                };
                FieldControl::Value(shown)
            }
            FieldKind::Text => FieldControl::Input(value.to_string()),
            FieldKind::Dropdown { .. } => FieldControl::Select {
                options: self.dropdown_options(),
                selected: self.selected_option(profile),
            },
            FieldKind::Link { link_title, .. } | FieldKind::Password { link_title, .. } => {
                FieldControl::Button(link_title.clone())
            }
        };

        FieldRender {
            title: self.descriptor.title.clone(),
            message: self
                .save_state
                .message(&self.descriptor.help_message)
                .to_string(),
            tone: self.save_state.tone(),
            control,
        }
    }

    /// Options in display order; non-required dropdowns lead with a blank.
    pub fn dropdown_options(&self) -> Vec<DropdownOption> {
        match &self.descriptor.kind {
            FieldKind::Dropdown { options, required } => {
                let mut shown = Vec::with_capacity(options.len() + 1);
                if !required {
                    shown.push(DropdownOption::empty());
                }
                shown.extend(options.iter().cloned());
                shown
            }
            _ => Vec::new(),
        }
    }

    /// Index into [`Self::dropdown_options`] of the selected option
    pub fn selected_option(&self, profile: &UserProfile) -> usize {
        if !matches!(self.descriptor.kind, FieldKind::Dropdown { .. }) {
            return 0;
        }
        // No value: the blank option when not required, else the first option
        let Some(current) = profile.value(self.attribute()) else {
            return 0;
        };
        self.dropdown_options()
            .iter()
            .position(|option| option.value == current)
            .unwrap_or(0)
    }

    /// Change event of the bound control. Applies the value locally and
    /// returns the PATCH to send; read-only and link fields return `None`.
    pub fn on_value_changed(
        &mut self,
        profile: &mut UserProfile,
        new_value: impl Into<String>,
    ) -> Option<SaveRequest> {
        if !self.descriptor.kind.is_editable() {
            return None;
        }
        let attribute = self.attribute();
        let value = new_value.into();
        if let Err(e) = profile.set_value(attribute, value.clone()) {
            warn!("Refusing change of {}: {}", attribute, e);
            return None;
        }
        self.save_state = SaveState::Saving;
        Some(SaveRequest { attribute, value })
    }

    pub fn on_save_completed(&mut self, outcome: &SaveOutcome) {
        self.save_state = match outcome {
            SaveOutcome::Saved => SaveState::saved(),
            SaveOutcome::Invalid { user_message } => {
                let mut message = self.descriptor.invalid_value_message();
                if let Some(detail) = user_message {
                    message.push(' ');
                    message.push_str(detail);
                }
                SaveState::Error(message)
            }
            SaveOutcome::Failed { status } => {
                debug!("Save of {} failed with {}", self.attribute(), status);
                SaveState::Error(GENERIC_ERROR_MESSAGE.to_string())
            }
        };
    }

    /// The request never completed; the view keeps showing "Saving..."
    pub fn on_save_failed(&self, error: &str) {
        warn!("Save of {} did not complete: {}", self.attribute(), error);
    }

    /// Click on a link or password field
    pub fn on_activate(&self, profile: &UserProfile) -> Option<LinkRequest> {
        match &self.descriptor.kind {
            FieldKind::Link { link_href, .. } => Some(LinkRequest::Plain {
                href: link_href.clone(),
            }),
            FieldKind::Password {
                link_href,
                email_attribute,
                ..
            } => Some(LinkRequest::PasswordReset {
                href: link_href.clone(),
                email: profile
                    .value(*email_attribute)
                    .unwrap_or_default()
                    .to_string(),
            }),
            _ => None,
        }
    }

    pub fn on_link_completed(&mut self, outcome: &LinkOutcome, profile: &UserProfile) {
        self.save_state = match (outcome, &self.descriptor.kind) {
            (LinkOutcome::Failed { .. }, _) => SaveState::Error(GENERIC_ERROR_MESSAGE.to_string()),
            (
                LinkOutcome::Sent,
                FieldKind::Password {
                    email_attribute, ..
                },
            ) => SaveState::Success(password_reset_message(
                profile.value(*email_attribute).unwrap_or_default(),
            )),
            (
                LinkOutcome::Sent,
                FieldKind::Link {
                    success_message, ..
                },
            ) => SaveState::Success(
                success_message
                    .clone()
                    .unwrap_or_else(|| LINK_SENT_MESSAGE.to_string()),
            ),
            (LinkOutcome::Sent, _) => SaveState::saved(),
        };
    }

    /// A link request that never completed is reported like a failed one
    pub fn on_link_failed(&mut self, error: &str) {
        warn!("Link request for {} did not complete: {}", self.attribute(), error);
        self.save_state = SaveState::Error(GENERIC_ERROR_MESSAGE.to_string());
    }
}
