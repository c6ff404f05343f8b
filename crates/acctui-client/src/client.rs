//! High-level client over an [`HttpTransport`]

use std::sync::Arc;

use acctui_core::prelude::*;
use acctui_core::{ProfileAttribute, UserProfile};

use crate::account::{
    classify_save_response, fetch_profile_request, parse_profile, patch_request, SaveOutcome,
    DEFAULT_ACCOUNT_ENDPOINT,
};
use crate::csrf::Session;
use crate::link::{
    classify_link_response, link_request, password_reset_request, LinkOutcome,
    DEFAULT_PASSWORD_RESET_ENDPOINT,
};
use crate::registration::{
    classify_registration_response, registration_request, RegistrationOutcome, CSRF_HEADER,
    DEFAULT_REGISTRATION_ENDPOINT,
};
use crate::transport::{HttpRequest, HttpTransport, Method};

/// Server paths, joined onto the transport's base URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub account: String,
    pub registration: String,
    pub password_reset: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            account: DEFAULT_ACCOUNT_ENDPOINT.to_string(),
            registration: DEFAULT_REGISTRATION_ENDPOINT.to_string(),
            password_reset: DEFAULT_PASSWORD_RESET_ENDPOINT.to_string(),
        }
    }
}

/// Account, link and registration calls sharing one transport and session.
///
/// `Err` from any method is a transport failure; HTTP statuses come back as
/// outcome values.
pub struct ApiClient<T> {
    transport: Arc<T>,
    endpoints: Endpoints,
    session: Session,
}

impl<T> Clone for ApiClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            endpoints: self.endpoints.clone(),
            session: self.session.clone(),
        }
    }
}

impl<T: HttpTransport + Sync> ApiClient<T> {
    pub fn new(transport: Arc<T>, endpoints: Endpoints, session: Session) -> Self {
        Self {
            transport,
            endpoints,
            session,
        }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub fn transport(&self) -> &Arc<T> {
        &self.transport
    }

    /// Attach session headers. The CSRF token goes on every unsafe method.
    fn with_session(&self, mut request: HttpRequest) -> HttpRequest {
        if let Some(cookie) = &self.session.cookie {
            request = request.header("Cookie", cookie.as_str());
        }
        if request.method != Method::Get {
            if let Some(token) = &self.session.csrf_token {
                request = request.header(CSRF_HEADER, token.as_str());
            }
        }
        request
    }

    pub async fn fetch_profile(&self) -> Result<UserProfile> {
        let request = self.with_session(fetch_profile_request(&self.endpoints.account));
        let response = self.transport.send(request).await?;
        parse_profile(&response)
    }

    pub async fn save_field(&self, attribute: ProfileAttribute, value: &str) -> Result<SaveOutcome> {
        let request = self.with_session(patch_request(&self.endpoints.account, attribute, value)?);
        let response = self.transport.send(request).await?;
        let outcome = classify_save_response(&response, attribute);
        debug!("PATCH {} -> {:?}", attribute, outcome);
        Ok(outcome)
    }

    pub async fn activate_link(&self, href: &str) -> Result<LinkOutcome> {
        let request = self.with_session(link_request(href));
        let response = self.transport.send(request).await?;
        Ok(classify_link_response(&response))
    }

    pub async fn request_password_reset(&self, href: &str, email: &str) -> Result<LinkOutcome> {
        let request = self.with_session(password_reset_request(href, email));
        let response = self.transport.send(request).await?;
        Ok(classify_link_response(&response))
    }

    pub async fn register(&self, pairs: Vec<(String, String)>) -> Result<RegistrationOutcome> {
        let request = self.with_session(registration_request(&self.endpoints.registration, pairs));
        let response = self.transport.send(request).await?;
        Ok(classify_registration_response(&response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::FakeTransport;
    use crate::transport::HttpResponse;

    fn client(fake: Arc<FakeTransport>, session: Session) -> ApiClient<FakeTransport> {
        ApiClient::new(fake, Endpoints::default(), session)
    }

    #[tokio::test]
    async fn test_register_sends_csrf_header() {
        let fake = Arc::new(FakeTransport::new());
        let session = Session::new(None, Some("csrftoken=T0K3N".into()), "csrftoken");
        let api = client(fake.clone(), session);

        let outcome = api
            .register(vec![("username".into(), "Legolas".into())])
            .await
            .unwrap();

        assert_eq!(outcome, RegistrationOutcome::Registered);
        let sent = fake.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].path, "/register_new_account");
        assert_eq!(sent[0].header_value("X-CSRFToken"), Some("T0K3N"));
        assert_eq!(sent[0].header_value("Cookie"), Some("csrftoken=T0K3N"));
    }

    #[tokio::test]
    async fn test_fetch_has_no_csrf_header() {
        let fake = Arc::new(FakeTransport::new());
        fake.push_response(HttpResponse::new(
            200,
            r#"{"username": "Legolas", "email": "legolas@woodland.middlearth"}"#,
        ));
        let api = client(fake.clone(), Session::new(Some("tok".into()), None, "csrftoken"));

        let profile = api.fetch_profile().await.unwrap();

        assert_eq!(profile.username, "Legolas");
        assert_eq!(fake.requests()[0].header_value("X-CSRFToken"), None);
    }

    #[tokio::test]
    async fn test_save_field_transport_failure_is_err() {
        let fake = Arc::new(FakeTransport::new());
        fake.push_failure("connection refused");
        let api = client(fake, Session::default());

        let err = api
            .save_field(ProfileAttribute::Name, "Legolas")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Http { .. }));
    }

    #[tokio::test]
    async fn test_password_reset_posts_email() {
        let fake = Arc::new(FakeTransport::new());
        let api = client(fake.clone(), Session::default());

        let outcome = api
            .request_password_reset("/password_reset", "legolas@woodland.middlearth")
            .await
            .unwrap();

        assert_eq!(outcome, LinkOutcome::Sent);
        let (_, body) = fake.requests()[0].body.encode().unwrap();
        assert_eq!(body, "email=legolas%40woodland.middlearth");
    }
}
