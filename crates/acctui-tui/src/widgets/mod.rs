//! Custom widget components

pub mod account_panel;
mod header;
mod registration_form;

pub use account_panel::AccountPanel;
pub use header::MainHeader;
pub use registration_form::RegistrationForm;
