//! New-account registration form model

/// A labelled input of the registration form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormInput {
    /// Form field name, also the id the label points at
    pub id: String,
    pub label: String,
    pub value: String,
    /// Render the value masked
    pub secret: bool,
}

impl FormInput {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            value: String::new(),
            secret: false,
        }
    }

    pub fn secret(mut self) -> Self {
        self.secret = true;
        self
    }
}

/// Ordered set of inputs submitted as one urlencoded body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationForm {
    pub inputs: Vec<FormInput>,
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self {
            inputs: vec![
                FormInput::new("email", "E-mail"),
                FormInput::new("name", "Full Name"),
                FormInput::new("username", "Public Username"),
                FormInput::new("password", "Password").secret(),
            ],
        }
    }
}

impl RegistrationForm {
    pub fn value(&self, id: &str) -> Option<&str> {
        self.inputs
            .iter()
            .find(|input| input.id == id)
            .map(|input| input.value.as_str())
    }

    /// `(name, value)` pairs in input order
    pub fn pairs(&self) -> Vec<(String, String)> {
        self.inputs
            .iter()
            .map(|input| (input.id.clone(), input.value.clone()))
            .collect()
    }
}

/// Public profile link for a freshly registered user
pub fn new_user_link(host: &str, username: &str) -> String {
    format!("http://{host}/u/{username}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_form_order() {
        let form = RegistrationForm::default();
        let ids: Vec<_> = form.inputs.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["email", "name", "username", "password"]);
        assert!(form.inputs[3].secret);
    }

    #[test]
    fn test_value_lookup() {
        let mut form = RegistrationForm::default();
        form.inputs[2].value = "Legolas".into();
        assert_eq!(form.value("username"), Some("Legolas"));
        assert_eq!(form.value("missing"), None);
    }

    #[test]
    fn test_new_user_link() {
        assert_eq!(
            new_user_link("studio.example.org", "Legolas"),
            "http://studio.example.org/u/Legolas"
        );
    }
}
