//! # acctui-core - Core Domain Types
//!
//! Foundation crate for the account console. Provides the user profile record,
//! field descriptors, the registration form model, error handling and logging.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, regex, tracing).
//!
//! ## Public API
//!
//! ### Profile (`profile`)
//! - [`UserProfile`] - The account record fetched from and patched to the server
//! - [`ProfileAttribute`] - Closed set of attribute names with wire keys
//!
//! ### Fields (`field`)
//! - [`FieldDescriptor`] - Immutable configuration of one settings field
//! - [`FieldKind`] - Readonly, Text, Dropdown, Link, Password
//! - [`DropdownOption`] - Value/label pair in configured order
//! - [`SaveState`] - Pristine, Saving, Success, Error
//!
//! ### Registration (`form`)
//! - [`RegistrationForm`], [`FormInput`] - Ordered form inputs
//! - [`new_user_link()`] - Public profile URL of a new user
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use acctui_core::prelude::*;
//! ```

pub mod error;
pub mod field;
pub mod form;
pub mod logging;
pub mod profile;
pub mod types;

/// Prelude for common imports used throughout all account console crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use field::{
    password_reset_message, strip_markup, DropdownOption, FieldDescriptor, FieldKind, SaveState,
    GENERIC_ERROR_MESSAGE, INVALID_VALUE_MESSAGE, LINK_SENT_MESSAGE, SAVING_MESSAGE,
    SUCCESS_MESSAGE,
};
pub use form::{new_user_link, FormInput, RegistrationForm};
pub use profile::{ProfileAttribute, UserProfile};
pub use types::{AppPhase, MessageTone};
