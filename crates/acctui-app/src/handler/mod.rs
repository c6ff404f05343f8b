//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per screen
//! - `fields`: Account settings field handlers
//! - `registration`: Registration form handlers

pub(crate) mod fields;
pub(crate) mod keys;
pub(crate) mod registration;
pub(crate) mod update;


use acctui_core::ProfileAttribute;

use crate::field_view::LinkRequest;
use crate::message::Message;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// GET the account endpoint
    FetchProfile,

    /// PATCH one attribute on behalf of field `index`
    SaveField {
        index: usize,
        attribute: ProfileAttribute,
        value: String,
    },

    /// POST a link or password reset on behalf of field `index`
    ActivateLink { index: usize, request: LinkRequest },

    /// POST the registration form
    SubmitRegistration { pairs: Vec<(String, String)> },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
