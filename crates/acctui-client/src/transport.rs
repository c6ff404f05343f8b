//! Transport-agnostic request/response types and the transport capability.
//!
//! Every request the console makes goes through [`HttpTransport`], so the
//! application can run against [`crate::ReqwestTransport`] in production and a
//! scripted fake in tests.

use std::fmt;

use acctui_core::prelude::*;
use serde::de::DeserializeOwned;
use url::form_urlencoded;

pub const MERGE_PATCH_CONTENT_TYPE: &str = "application/merge-patch+json";
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Patch,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Patch => write!(f, "PATCH"),
            Method::Post => write!(f, "POST"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    /// JSON merge patch, e.g. `{"name": "Legolas"}`
    MergePatch(serde_json::Value),
    /// urlencoded `name=value` pairs, kept in order
    Form(Vec<(String, String)>),
}

impl RequestBody {
    /// Content type and serialized body, if there is a body
    pub fn encode(&self) -> Option<(&'static str, String)> {
        match self {
            RequestBody::Empty => None,
            RequestBody::MergePatch(value) => Some((MERGE_PATCH_CONTENT_TYPE, value.to_string())),
            RequestBody::Form(pairs) => {
                let encoded = form_urlencoded::Serializer::new(String::new())
                    .extend_pairs(pairs.iter())
                    .finish();
                Some((FORM_CONTENT_TYPE, encoded))
            }
        }
    }
}

/// A request relative to the configured base URL
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: RequestBody,
}

impl HttpRequest {
    fn new(method: Method, path: impl Into<String>, body: RequestBody) -> Self {
        Self {
            method,
            path: path.into(),
            headers: Vec::new(),
            body,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path, RequestBody::Empty)
    }

    pub fn patch(path: impl Into<String>, patch: serde_json::Value) -> Self {
        Self::new(Method::Patch, path, RequestBody::MergePatch(patch))
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path, RequestBody::Empty)
    }

    pub fn post_form(path: impl Into<String>, pairs: Vec<(String, String)>) -> Self {
        Self::new(Method::Post, path, RequestBody::Form(pairs))
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Status and raw body of a completed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn no_content() -> Self {
        Self::new(204, "")
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Sends requests to the platform.
///
/// `Err` means the request never produced a response (connection refused,
/// reset, unreadable body). Any HTTP status, including 4xx/5xx, is `Ok`.
#[trait_variant::make(HttpTransport: Send)]
pub trait LocalHttpTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_form_body_is_urlencoded_in_order() {
        let body = RequestBody::Form(vec![
            ("email".into(), "legolas@woodland.middlearth".into()),
            ("name".into(), "Legolas Thranduil".into()),
        ]);
        let (content_type, encoded) = body.encode().unwrap();
        assert_eq!(content_type, FORM_CONTENT_TYPE);
        assert_eq!(
            encoded,
            "email=legolas%40woodland.middlearth&name=Legolas+Thranduil"
        );
    }

    #[test]
    fn test_merge_patch_body() {
        let body = RequestBody::MergePatch(json!({"language": "el"}));
        let (content_type, encoded) = body.encode().unwrap();
        assert_eq!(content_type, "application/merge-patch+json");
        assert_eq!(encoded, r#"{"language":"el"}"#);
    }

    #[test]
    fn test_empty_body_has_no_content_type() {
        assert!(RequestBody::Empty.encode().is_none());
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let request = HttpRequest::post("/password_reset").header("X-CSRFToken", "abc");
        assert_eq!(request.header_value("x-csrftoken"), Some("abc"));
        assert_eq!(request.header_value("Cookie"), None);
    }

    #[test]
    fn test_response_success_range() {
        assert!(HttpResponse::no_content().is_success());
        assert!(HttpResponse::new(200, "{}").is_success());
        assert!(!HttpResponse::new(400, "").is_success());
        assert!(!HttpResponse::new(500, "").is_success());
    }
}
