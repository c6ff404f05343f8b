//! Link activation and password reset requests

use crate::transport::{HttpRequest, HttpResponse};

pub const DEFAULT_PASSWORD_RESET_ENDPOINT: &str = "/password_reset";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOutcome {
    Sent,
    Failed { status: u16 },
}

/// Plain link: `POST <href>` with no body
pub fn link_request(href: &str) -> HttpRequest {
    HttpRequest::post(href)
}

/// Password reset: `POST <href>` with `email=<email>`
pub fn password_reset_request(href: &str, email: &str) -> HttpRequest {
    HttpRequest::post_form(href, vec![("email".to_string(), email.to_string())])
}

pub fn classify_link_response(response: &HttpResponse) -> LinkOutcome {
    if response.is_success() {
        LinkOutcome::Sent
    } else {
        LinkOutcome::Failed {
            status: response.status,
        }
    }
}
