//! Field catalog for the account settings screen.
//!
//! Builds the list of field descriptors, used by both the field handlers (for
//! editing) and the account settings panel (for rendering).

use acctui_core::{FieldDescriptor, FieldKind, ProfileAttribute};

use crate::config::{OptionSettings, Settings};

pub const BASIC_SECTION: &str = "Basic Account Information";
pub const ADDITIONAL_SECTION: &str = "Additional Information";

/// All account settings fields, in display order
pub fn account_settings_fields(settings: &Settings) -> Vec<FieldDescriptor> {
    let options = &settings.options;
    let mut fields = basic_fields(options, &settings.server.password_reset_endpoint);
    fields.extend(additional_fields(options));
    fields
}

fn basic_fields(options: &OptionSettings, password_reset_href: &str) -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::new("Username", ProfileAttribute::Username)
            .help("The name that identifies you throughout the platform. You cannot change your username.")
            .readonly()
            .section(BASIC_SECTION),
        FieldDescriptor::new("Full Name", ProfileAttribute::Name)
            .help("The name that appears on your certificates. Other learners never see your full name.")
            .error_message("Enter your full name.")
            .section(BASIC_SECTION),
        FieldDescriptor::new("Email Address", ProfileAttribute::Email)
            .help("The email address you use to sign in. Communications from the platform are sent to this address.")
            .readonly()
            .section(BASIC_SECTION),
        FieldDescriptor::new("Password", ProfileAttribute::Password)
            .help("When you reset your password, a message is sent to your email address. Click the link in the message to reset your password.")
            .kind(FieldKind::Password {
                link_title: "Reset Password".to_string(),
                link_href: password_reset_href.to_string(),
                email_attribute: ProfileAttribute::Email,
            })
            .section(BASIC_SECTION),
        FieldDescriptor::new("Language", ProfileAttribute::Language)
            .help("The language used throughout this site.")
            .dropdown(OptionSettings::to_options(&options.language), true)
            .section(BASIC_SECTION),
        FieldDescriptor::new("Country or Region", ProfileAttribute::Country)
            .help("The country or region where you live.")
            .dropdown(OptionSettings::to_options(&options.country), false)
            .section(BASIC_SECTION),
    ]
}

fn additional_fields(options: &OptionSettings) -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::new("Education Completed", ProfileAttribute::LevelOfEducation)
            .dropdown(
                OptionSettings::to_options(&options.level_of_education),
                false,
            )
            .section(ADDITIONAL_SECTION),
        FieldDescriptor::new("Gender", ProfileAttribute::Gender)
            .dropdown(OptionSettings::to_options(&options.gender), false)
            .section(ADDITIONAL_SECTION),
        FieldDescriptor::new("Year of Birth", ProfileAttribute::YearOfBirth)
            .dropdown(options.year_of_birth_options(), false)
            .section(ADDITIONAL_SECTION),
        FieldDescriptor::new("Goals", ProfileAttribute::Goals)
            .help("Tell us why you're here.")
            .section(ADDITIONAL_SECTION),
        FieldDescriptor::new("Mailing Address", ProfileAttribute::MailingAddress)
            .section(ADDITIONAL_SECTION),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_and_sections() {
        let fields = account_settings_fields(&Settings::default());
        let titles: Vec<_> = fields.iter().map(|f| f.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Username",
                "Full Name",
                "Email Address",
                "Password",
                "Language",
                "Country or Region",
                "Education Completed",
                "Gender",
                "Year of Birth",
                "Goals",
                "Mailing Address",
            ]
        );
        assert!(fields[..6].iter().all(|f| f.section == BASIC_SECTION));
        assert!(fields[6..].iter().all(|f| f.section == ADDITIONAL_SECTION));
    }

    #[test]
    fn test_read_only_attributes_are_readonly_fields() {
        for field in account_settings_fields(&Settings::default()) {
            if field.value_attribute.is_read_only() {
                assert_eq!(field.kind, FieldKind::Readonly, "{}", field.title);
            }
        }
    }

    #[test]
    fn test_only_language_is_required() {
        let required: Vec<_> = account_settings_fields(&Settings::default())
            .into_iter()
            .filter(|f| matches!(f.kind, FieldKind::Dropdown { required: true, .. }))
            .map(|f| f.value_attribute)
            .collect();
        assert_eq!(required, vec![ProfileAttribute::Language]);
    }

    #[test]
    fn test_password_link_uses_configured_endpoint() {
        let mut settings = Settings::default();
        settings.server.password_reset_endpoint = "/account/password".into();
        let fields = account_settings_fields(&settings);
        let password = fields
            .iter()
            .find(|f| f.value_attribute == ProfileAttribute::Password)
            .unwrap();
        assert!(matches!(
            &password.kind,
            FieldKind::Password { link_href, .. } if link_href == "/account/password"
        ));
    }
}
