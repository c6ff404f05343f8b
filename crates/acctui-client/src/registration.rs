//! New-account registration endpoint

use acctui_core::GENERIC_ERROR_MESSAGE;
use serde::Deserialize;

use crate::transport::{HttpRequest, HttpResponse};

pub const DEFAULT_REGISTRATION_ENDPOINT: &str = "/register_new_account";
pub const CSRF_HEADER: &str = "X-CSRFToken";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOutcome {
    Registered,
    Rejected { message: String },
}

#[derive(Debug, Deserialize)]
struct RejectionBody {
    value: Option<String>,
}

pub fn registration_request(endpoint: &str, pairs: Vec<(String, String)>) -> HttpRequest {
    HttpRequest::post_form(endpoint, pairs)
}

/// Failure bodies look like `{"success": false, "value": "<reason>"}`.
pub fn classify_registration_response(response: &HttpResponse) -> RegistrationOutcome {
    if response.is_success() {
        return RegistrationOutcome::Registered;
    }
    let message = serde_json::from_str::<RejectionBody>(&response.body)
        .ok()
        .and_then(|body| body.value)
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string());
    RegistrationOutcome::Rejected { message }
}
