//! Configuration types

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use url::Url;

use acctui_client::{
    Endpoints, DEFAULT_ACCOUNT_ENDPOINT, DEFAULT_PASSWORD_RESET_ENDPOINT,
    DEFAULT_REGISTRATION_ENDPOINT,
};
use acctui_core::DropdownOption;

/// Top-level settings from `config.toml`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub session: SessionSettings,

    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub options: OptionSettings,
}

/// Where the platform lives
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_account_endpoint")]
    pub account_endpoint: String,

    #[serde(default = "default_registration_endpoint")]
    pub registration_endpoint: String,

    #[serde(default = "default_password_reset_endpoint")]
    pub password_reset_endpoint: String,

    /// Host used in new-user profile links (defaults to the base URL host)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,

    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            account_endpoint: default_account_endpoint(),
            registration_endpoint: default_registration_endpoint(),
            password_reset_endpoint: default_password_reset_endpoint(),
            hostname: None,
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

impl ServerSettings {
    pub fn endpoints(&self) -> Endpoints {
        Endpoints {
            account: self.account_endpoint.clone(),
            registration: self.registration_endpoint.clone(),
            password_reset: self.password_reset_endpoint.clone(),
        }
    }

    /// Host for `http://<host>/u/<username>` links
    pub fn link_host(&self) -> String {
        if let Some(host) = self.hostname.as_deref().filter(|h| !h.is_empty()) {
            return host.to_string();
        }
        Url::parse(&self.base_url)
            .ok()
            .and_then(|url| url.host_str().map(str::to_string))
            .unwrap_or_else(|| "localhost".to_string())
    }
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_account_endpoint() -> String {
    DEFAULT_ACCOUNT_ENDPOINT.to_string()
}

fn default_registration_endpoint() -> String {
    DEFAULT_REGISTRATION_ENDPOINT.to_string()
}

fn default_password_reset_endpoint() -> String {
    DEFAULT_PASSWORD_RESET_ENDPOINT.to_string()
}

fn default_connect_timeout_secs() -> u64 {
    10
}

/// Session credentials
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionSettings {
    /// Explicit CSRF token; wins over the cookie
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub csrf_token: Option<String>,

    /// Raw `Cookie` header sent with every request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cookie: Option<String>,

    #[serde(default = "default_csrf_cookie_name")]
    pub csrf_cookie_name: String,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            csrf_token: None,
            cookie: None,
            csrf_cookie_name: default_csrf_cookie_name(),
        }
    }
}

impl SessionSettings {
    pub fn to_session(&self) -> acctui_client::Session {
        acctui_client::Session::new(
            self.csrf_token.clone(),
            self.cookie.clone(),
            &self.csrf_cookie_name,
        )
    }
}

fn default_csrf_cookie_name() -> String {
    "csrftoken".to_string()
}

/// Icon rendering mode for the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    /// Safe Unicode characters that work in all terminals (default)
    #[default]
    Unicode,
    /// Nerd Font glyphs; requires a Nerd Font installed in the terminal
    NerdFonts,
}

impl std::fmt::Display for IconMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconMode::Unicode => write!(f, "unicode"),
            IconMode::NerdFonts => write!(f, "nerd_fonts"),
        }
    }
}

/// Top-level screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    #[default]
    Settings,
    Register,
}

impl Screen {
    pub fn label(&self) -> &'static str {
        match self {
            Screen::Settings => "Account Settings",
            Screen::Register => "Register",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Screen::Settings => Screen::Register,
            Screen::Register => Screen::Settings,
        }
    }
}

/// UI settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct UiSettings {
    #[serde(default)]
    pub icons: IconMode,

    #[serde(default)]
    pub start_screen: Screen,
}

/// Dropdown option lists, each `[[value, label], ...]`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OptionSettings {
    #[serde(default = "default_language_options")]
    pub language: Vec<(String, String)>,

    #[serde(default = "default_country_options")]
    pub country: Vec<(String, String)>,

    #[serde(default = "default_gender_options")]
    pub gender: Vec<(String, String)>,

    #[serde(default = "default_education_options")]
    pub level_of_education: Vec<(String, String)>,

    /// Empty means "the last 120 years"
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub year_of_birth: Vec<(String, String)>,
}

impl Default for OptionSettings {
    fn default() -> Self {
        Self {
            language: default_language_options(),
            country: default_country_options(),
            gender: default_gender_options(),
            level_of_education: default_education_options(),
            year_of_birth: Vec::new(),
        }
    }
}

impl OptionSettings {
    pub fn to_options(pairs: &[(String, String)]) -> Vec<DropdownOption> {
        pairs
            .iter()
            .map(|(value, label)| DropdownOption::new(value.as_str(), label.as_str()))
            .collect()
    }

    /// Configured years, or the current year back 120 years
    pub fn year_of_birth_options(&self) -> Vec<DropdownOption> {
        if !self.year_of_birth.is_empty() {
            return Self::to_options(&self.year_of_birth);
        }
        let current = chrono::Local::now().year();
        (current - 120..=current)
            .rev()
            .map(|year| DropdownOption::new(year.to_string(), year.to_string()))
            .collect()
    }
}

fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
    items
        .iter()
        .map(|(v, l)| (v.to_string(), l.to_string()))
        .collect()
}

fn default_language_options() -> Vec<(String, String)> {
    pairs(&[
        ("en", "English"),
        ("es-419", "Español (Latinoamérica)"),
        ("fr", "Français"),
        ("de-de", "Deutsch"),
        ("pt-br", "Português (Brasil)"),
        ("zh-cn", "中文 (简体)"),
    ])
}

fn default_country_options() -> Vec<(String, String)> {
    pairs(&[
        ("BR", "Brazil"),
        ("CA", "Canada"),
        ("CN", "China"),
        ("FR", "France"),
        ("DE", "Germany"),
        ("IN", "India"),
        ("MX", "Mexico"),
        ("GB", "United Kingdom"),
        ("US", "United States"),
    ])
}

fn default_gender_options() -> Vec<(String, String)> {
    pairs(&[("m", "Male"), ("f", "Female"), ("o", "Other")])
}

fn default_education_options() -> Vec<(String, String)> {
    pairs(&[
        ("p", "Doctorate"),
        ("m", "Master's or professional degree"),
        ("b", "Bachelor's degree"),
        ("a", "Associate degree"),
        ("hs", "Secondary/high school"),
        ("jhs", "Junior secondary/junior high/middle school"),
        ("el", "Elementary/primary school"),
        ("none", "None"),
        ("other", "Other"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_host_from_base_url() {
        let server = ServerSettings {
            base_url: "https://courses.example.org:8443".into(),
            ..Default::default()
        };
        assert_eq!(server.link_host(), "courses.example.org");
    }

    #[test]
    fn test_link_host_override() {
        let server = ServerSettings {
            hostname: Some("studio.example.org".into()),
            ..Default::default()
        };
        assert_eq!(server.link_host(), "studio.example.org");
    }

    #[test]
    fn test_year_of_birth_defaults_to_120_years() {
        let years = OptionSettings::default().year_of_birth_options();
        assert_eq!(years.len(), 121);
        assert_eq!(
            years[0].value,
            chrono::Local::now().year().to_string()
        );
    }

    #[test]
    fn test_screen_cycles() {
        assert_eq!(Screen::Settings.next(), Screen::Register);
        assert_eq!(Screen::Register.next(), Screen::Settings);
    }

    #[test]
    fn test_endpoints_from_settings() {
        let endpoints = ServerSettings::default().endpoints();
        assert_eq!(endpoints, Endpoints::default());
    }
}
