//! # acctui-app - Application State and Orchestration
//!
//! Headless TEA (The Elm Architecture) core of the account console. Everything
//! the terminal shows is a projection of [`AppState`]; every change goes through
//! [`handler::update`], and network work is described by [`UpdateAction`] and
//! run by [`actions::handle_action`] over an injected transport.
//!
//! ## Public API
//!
//! ### TEA
//! - [`AppState`] - Complete application state
//! - [`Message`] - Every event the application reacts to
//! - [`UpdateAction`], [`UpdateResult`] - Side effects requested by `update`
//! - [`process::process_message`] - Update loop with action dispatch
//! - [`signals::spawn_signal_handler`] - SIGINT/SIGTERM to `Message::Quit`
//!
//! ### Account settings
//! - [`FieldView`] - Descriptor + save state bound to the shared profile
//! - [`catalog::account_settings_fields`] - The settings page layout
//!
//! ### Registration
//! - [`RegistrationState`] - Label focus flags, banners, submit cycle
//!
//! ### Configuration (`config`)
//! - [`config::Settings`] with `load_settings` / `save_settings`

pub mod actions;
pub mod catalog;
pub mod config;
pub mod field_view;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod registration;
pub mod signals;
pub mod state;

pub use field_view::{FieldControl, FieldRender, FieldView, LinkRequest, SaveRequest};
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use registration::{NewUserLink, RegistrationState};
pub use state::{AppState, ProfileStatus, SettingsViewState};
