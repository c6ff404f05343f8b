//! Account endpoint: profile fetch and single-attribute PATCH

use acctui_core::prelude::*;
use acctui_core::{ProfileAttribute, UserProfile};
use serde::Deserialize;
use serde_json::json;

use crate::transport::{HttpRequest, HttpResponse};

pub const DEFAULT_ACCOUNT_ENDPOINT: &str = "/api/user/v0/accounts/user";

/// How the server answered a field save
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    /// 400; the server may explain what is wrong with the value
    Invalid { user_message: Option<String> },
    Failed { status: u16 },
}

#[derive(Debug, Deserialize)]
struct ValidationErrors {
    #[serde(default)]
    field_errors: std::collections::HashMap<String, FieldError>,
}

#[derive(Debug, Deserialize)]
struct FieldError {
    user_message: Option<String>,
}

pub fn fetch_profile_request(endpoint: &str) -> HttpRequest {
    HttpRequest::get(endpoint)
}

pub fn parse_profile(response: &HttpResponse) -> Result<UserProfile> {
    if !response.is_success() {
        return Err(Error::unexpected_response(
            response.status,
            "failed to load account",
        ));
    }
    response.json()
}

/// Build the `{ <attribute>: <value> }` merge patch for one field.
pub fn patch_request(
    endpoint: &str,
    attribute: ProfileAttribute,
    value: &str,
) -> Result<HttpRequest> {
    if attribute.is_read_only() {
        return Err(Error::read_only_attribute(attribute.as_str()));
    }
    Ok(HttpRequest::patch(
        endpoint,
        json!({ attribute.as_str(): value }),
    ))
}

pub fn classify_save_response(response: &HttpResponse, attribute: ProfileAttribute) -> SaveOutcome {
    if response.is_success() {
        return SaveOutcome::Saved;
    }
    if response.status == 400 {
        let user_message = serde_json::from_str::<ValidationErrors>(&response.body)
            .ok()
            .and_then(|mut errors| errors.field_errors.remove(attribute.as_str()))
            .and_then(|error| error.user_message)
            .filter(|m| !m.is_empty());
        return SaveOutcome::Invalid { user_message };
    }
    SaveOutcome::Failed {
        status: response.status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::{Method, RequestBody};

    #[test]
    fn test_patch_request_body() {
        let request =
            patch_request(DEFAULT_ACCOUNT_ENDPOINT, ProfileAttribute::Language, "el").unwrap();
        assert_eq!(request.method, Method::Patch);
        assert_eq!(request.path, "/api/user/v0/accounts/user");
        assert_eq!(
            request.body,
            RequestBody::MergePatch(json!({"language": "el"}))
        );
    }

    #[test]
    fn test_patch_request_refuses_read_only() {
        let err = patch_request(DEFAULT_ACCOUNT_ENDPOINT, ProfileAttribute::Username, "x")
            .unwrap_err();
        assert!(matches!(err, Error::ReadOnlyAttribute { .. }));
    }

    #[test]
    fn test_classify_no_content_is_saved() {
        assert_eq!(
            classify_save_response(&HttpResponse::no_content(), ProfileAttribute::Name),
            SaveOutcome::Saved
        );
    }

    #[test]
    fn test_classify_bad_request_with_field_error() {
        let body = r#"{"field_errors": {"year_of_birth": {"developer_message": "bad", "user_message": "Year must be in the past."}}}"#;
        assert_eq!(
            classify_save_response(&HttpResponse::new(400, body), ProfileAttribute::YearOfBirth),
            SaveOutcome::Invalid {
                user_message: Some("Year must be in the past.".into())
            }
        );
    }

    #[test]
    fn test_classify_bad_request_for_other_field() {
        let body = r#"{"field_errors": {"name": {"user_message": "Too long."}}}"#;
        assert_eq!(
            classify_save_response(&HttpResponse::new(400, body), ProfileAttribute::Goals),
            SaveOutcome::Invalid { user_message: None }
        );
    }

    #[test]
    fn test_classify_bad_request_without_json() {
        assert_eq!(
            classify_save_response(&HttpResponse::new(400, "nope"), ProfileAttribute::Name),
            SaveOutcome::Invalid { user_message: None }
        );
    }

    #[test]
    fn test_classify_server_error() {
        assert_eq!(
            classify_save_response(&HttpResponse::new(500, ""), ProfileAttribute::Name),
            SaveOutcome::Failed { status: 500 }
        );
    }

    #[test]
    fn test_parse_profile_error_status() {
        let err = parse_profile(&HttpResponse::new(401, "")).unwrap_err();
        assert!(matches!(err, Error::UnexpectedResponse { status: 401, .. }));
    }

    #[test]
    fn test_parse_profile() {
        let response = HttpResponse::new(
            200,
            r#"{"username": "Legolas", "email": "legolas@woodland.middlearth", "country": "woodland"}"#,
        );
        let profile = parse_profile(&response).unwrap();
        assert_eq!(profile.username, "Legolas");
        assert_eq!(profile.value(ProfileAttribute::Country), Some("woodland"));
    }
}
