//! CSRF token lookup from configured session data

/// Read cookie `name` out of a raw `Cookie` header value.
pub fn cookie_value(cookie_header: &str, name: &str) -> Option<String> {
    cookie_header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim_matches('"').to_string())
        .filter(|value| !value.is_empty())
}

/// Session credentials attached to outgoing requests
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub csrf_token: Option<String>,
    /// Raw `Cookie` header
    pub cookie: Option<String>,
}

impl Session {
    /// An explicit token wins over the one found in the cookie.
    pub fn new(csrf_token: Option<String>, cookie: Option<String>, csrf_cookie_name: &str) -> Self {
        let csrf_token = csrf_token.filter(|t| !t.is_empty()).or_else(|| {
            cookie
                .as_deref()
                .and_then(|c| cookie_value(c, csrf_cookie_name))
        });
        Self { csrf_token, cookie }
    }
}
