//! # acctui-client - Platform HTTP Plumbing
//!
//! Request builders and response classifiers for the account, link/password
//! reset and registration endpoints, plus the [`HttpTransport`] capability the
//! application is generic over.
//!
//! ## Public API
//!
//! ### Transport (`transport`)
//! - [`HttpTransport`] - Send-able async transport trait (local variant: [`LocalHttpTransport`])
//! - [`HttpRequest`], [`HttpResponse`], [`RequestBody`], [`Method`]
//! - [`ReqwestTransport`] - Production implementation
//!
//! ### Client (`client`)
//! - [`ApiClient`] - Session-aware calls returning outcome values
//! - [`Endpoints`] - Configurable server paths
//! - [`Session`] - CSRF token and cookie
//!
//! ### Outcomes
//! - [`SaveOutcome`], [`LinkOutcome`], [`RegistrationOutcome`]

pub mod account;
pub mod client;
pub mod csrf;
pub mod link;
pub mod registration;
pub mod reqwest_transport;
pub mod transport;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use account::{SaveOutcome, DEFAULT_ACCOUNT_ENDPOINT};
pub use client::{ApiClient, Endpoints};
pub use csrf::{cookie_value, Session};
pub use link::{LinkOutcome, DEFAULT_PASSWORD_RESET_ENDPOINT};
pub use registration::{RegistrationOutcome, CSRF_HEADER, DEFAULT_REGISTRATION_ENDPOINT};
pub use reqwest_transport::ReqwestTransport;
pub use transport::{
    HttpRequest, HttpResponse, HttpTransport, LocalHttpTransport, Method, RequestBody,
};
