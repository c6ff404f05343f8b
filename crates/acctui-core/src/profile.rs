//! The remote-backed user profile record.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};

/// Names of the profile attributes a field can bind to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileAttribute {
    Username,
    Name,
    Email,
    Password,
    Language,
    Country,
    DateJoined,
    Gender,
    Goals,
    LevelOfEducation,
    MailingAddress,
    YearOfBirth,
}

impl ProfileAttribute {
    pub const ALL: [ProfileAttribute; 12] = [
        ProfileAttribute::Username,
        ProfileAttribute::Name,
        ProfileAttribute::Email,
        ProfileAttribute::Password,
        ProfileAttribute::Language,
        ProfileAttribute::Country,
        ProfileAttribute::DateJoined,
        ProfileAttribute::Gender,
        ProfileAttribute::Goals,
        ProfileAttribute::LevelOfEducation,
        ProfileAttribute::MailingAddress,
        ProfileAttribute::YearOfBirth,
    ];

    /// Key used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileAttribute::Username => "username",
            ProfileAttribute::Name => "name",
            ProfileAttribute::Email => "email",
            ProfileAttribute::Password => "password",
            ProfileAttribute::Language => "language",
            ProfileAttribute::Country => "country",
            ProfileAttribute::DateJoined => "date_joined",
            ProfileAttribute::Gender => "gender",
            ProfileAttribute::Goals => "goals",
            ProfileAttribute::LevelOfEducation => "level_of_education",
            ProfileAttribute::MailingAddress => "mailing_address",
            ProfileAttribute::YearOfBirth => "year_of_birth",
        }
    }

    /// Attributes the account API never accepts from a field view.
    pub fn is_read_only(&self) -> bool {
        matches!(self, ProfileAttribute::Username | ProfileAttribute::Email)
    }
}

impl fmt::Display for ProfileAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProfileAttribute {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ProfileAttribute::ALL
            .iter()
            .copied()
            .find(|attr| attr.as_str() == s)
            .ok_or_else(|| Error::unknown_attribute(s))
    }
}

/// User profile as returned by the account endpoint.
///
/// Everything except `username` and `email` may be missing or `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, skip_serializing)]
    pub password: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub date_joined: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub goals: Option<String>,
    #[serde(default)]
    pub level_of_education: Option<String>,
    #[serde(default)]
    pub mailing_address: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub year_of_birth: Option<String>,
}

impl UserProfile {
    /// Current value of `attr`. Absent, `null` and empty all read as `None`.
    pub fn value(&self, attr: ProfileAttribute) -> Option<&str> {
        let raw = match attr {
            ProfileAttribute::Username => Some(self.username.as_str()),
            ProfileAttribute::Email => Some(self.email.as_str()),
            ProfileAttribute::Name => self.name.as_deref(),
            ProfileAttribute::Password => self.password.as_deref(),
            ProfileAttribute::Language => self.language.as_deref(),
            ProfileAttribute::Country => self.country.as_deref(),
            ProfileAttribute::DateJoined => self.date_joined.as_deref(),
            ProfileAttribute::Gender => self.gender.as_deref(),
            ProfileAttribute::Goals => self.goals.as_deref(),
            ProfileAttribute::LevelOfEducation => self.level_of_education.as_deref(),
            ProfileAttribute::MailingAddress => self.mailing_address.as_deref(),
            ProfileAttribute::YearOfBirth => self.year_of_birth.as_deref(),
        };
        raw.filter(|v| !v.is_empty())
    }

    /// Optimistically assign `value` before the server confirms it.
    pub fn set_value(&mut self, attr: ProfileAttribute, value: impl Into<String>) -> Result<()> {
        let slot = match attr {
            ProfileAttribute::Username | ProfileAttribute::Email => {
                return Err(Error::read_only_attribute(attr.as_str()));
            }
            ProfileAttribute::Name => &mut self.name,
            ProfileAttribute::Password => &mut self.password,
            ProfileAttribute::Language => &mut self.language,
            ProfileAttribute::Country => &mut self.country,
            ProfileAttribute::DateJoined => &mut self.date_joined,
            ProfileAttribute::Gender => &mut self.gender,
            ProfileAttribute::Goals => &mut self.goals,
            ProfileAttribute::LevelOfEducation => &mut self.level_of_education,
            ProfileAttribute::MailingAddress => &mut self.mailing_address,
            ProfileAttribute::YearOfBirth => &mut self.year_of_birth,
        };
        *slot = Some(value.into());
        Ok(())
    }

    /// `date_joined` rendered as e.g. "March 4, 2014", if it parses.
    pub fn joined_display(&self) -> Option<String> {
        let raw = self.value(ProfileAttribute::DateJoined)?;
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.with_timezone(&Utc).format("%B %-d, %Y").to_string())
    }
}

fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}
