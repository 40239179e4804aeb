use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

const MIN_NAME: usize = 2;
const MIN_SUBJECT: usize = 5;
const MIN_MESSAGE: usize = 10;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("Name must be at least {min} characters.")]
    NameTooShort { min: usize },
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Subject must be at least {min} characters.")]
    SubjectTooShort { min: usize },
    #[error("Message must be at least {min} characters.")]
    MessageTooShort { min: usize },
}

impl ContactError {
    pub fn field(&self) -> ContactField {
        match self {
            ContactError::NameTooShort { .. } => ContactField::Name,
            ContactError::InvalidEmail => ContactField::Email,
            ContactError::SubjectTooShort { .. } => ContactField::Subject,
            ContactError::MessageTooShort { .. } => ContactField::Message,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    /// Check every field, reporting all failures at once.
    pub fn validate(&self) -> Result<(), Vec<ContactError>> {
        let mut errors = Vec::new();

        if char_len(&self.name) < MIN_NAME {
            errors.push(ContactError::NameTooShort { min: MIN_NAME });
        }
        if !EMAIL_RE.is_match(self.email.trim()) {
            errors.push(ContactError::InvalidEmail);
        }
        if char_len(&self.subject) < MIN_SUBJECT {
            errors.push(ContactError::SubjectTooShort { min: MIN_SUBJECT });
        }
        if char_len(&self.message) < MIN_MESSAGE {
            errors.push(ContactError::MessageTooShort { min: MIN_MESSAGE });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn char_len(value: &str) -> usize {
    value.trim().chars().count()
}

/// First error reported for `field`, if any.
pub fn error_for(errors: &[ContactError], field: ContactField) -> Option<&ContactError> {
    errors.iter().find(|e| e.field() == field)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ContactForm {
        ContactForm {
            name: "Layla".to_string(),
            email: "layla@example.com".to_string(),
            subject: "New website".to_string(),
            message: "We need a bilingual landing page.".to_string(),
        }
    }

    #[test]
    fn test_valid_form() {
        assert_eq!(valid().validate(), Ok(()));
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let errors = ContactForm::default().validate().unwrap_err();
        assert_eq!(
            errors,
            vec![
                ContactError::NameTooShort { min: 2 },
                ContactError::InvalidEmail,
                ContactError::SubjectTooShort { min: 5 },
                ContactError::MessageTooShort { min: 10 },
            ]
        );
        assert_eq!(
            error_for(&errors, ContactField::Subject).map(|e| e.to_string()),
            Some("Subject must be at least 5 characters.".to_string())
        );
    }

    #[test]
    fn test_email_shapes() {
        let mut form = valid();
        for bad in ["plainaddress", "a@b", "@example.com", "a b@example.com"] {
            form.email = bad.to_string();
            assert_eq!(form.validate(), Err(vec![ContactError::InvalidEmail]), "{}", bad);
        }
        form.email = "  first.last+tag@sub.example.org ".to_string();
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn test_lengths_count_characters() {
        let mut form = valid();
        // Two Arabic letters are two characters, not four bytes
        form.name = "لي".to_string();
        assert_eq!(form.validate(), Ok(()));

        form.name = "  a  ".to_string();
        assert_eq!(form.validate(), Err(vec![ContactError::NameTooShort { min: 2 }]));
    }

    #[test]
    fn test_set_and_get() {
        let mut form = ContactForm::default();
        form.set(ContactField::Message, "hello there".to_string());
        assert_eq!(form.get(ContactField::Message), "hello there");
        assert_eq!(form.get(ContactField::Name), "");
    }
}
