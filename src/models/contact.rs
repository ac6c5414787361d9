use chrono::{NaiveDateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::FieldError;

/// Write-once message from the contact form; admins only read these.
#[derive(Debug, Clone)]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

impl ContactRequest {
    pub fn validate(self) -> Result<ContactMessage, Vec<FieldError>> {
        let mut errors = vec![];

        let name = self.name.trim().to_string();
        if name.chars().count() < 2 {
            errors.push(FieldError::new("name", "Name must be at least 2 characters"));
        }

        let email = self.email.trim().to_string();
        if !email.split_once('@').is_some_and(|(local, domain)| {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        }) {
            errors.push(FieldError::new("email", "Please enter a valid email"));
        }

        let phone = self.phone.trim().to_string();
        if phone.chars().filter(|c| c.is_ascii_digit()).count() < 10 {
            errors.push(FieldError::new(
                "phone",
                "Phone number must be at least 10 digits",
            ));
        }

        let subject = self.subject.trim().to_string();
        if subject.chars().count() < 5 {
            errors.push(FieldError::new(
                "subject",
                "Subject must be at least 5 characters",
            ));
        }

        let message = self.message.trim().to_string();
        if message.chars().count() < 10 {
            errors.push(FieldError::new(
                "message",
                "Message must be at least 10 characters",
            ));
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ContactMessage {
            id: Uuid::new_v4().to_string(),
            name,
            email,
            phone,
            subject,
            message,
            created_at: Utc::now().naive_utc(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> ContactRequest {
        ContactRequest {
            name: "Ravi Kumar".to_string(),
            email: "ravi@example.com".to_string(),
            phone: "9359525834".to_string(),
            subject: "Catering query".to_string(),
            message: "Do you cater for 300 guests?".to_string(),
        }
    }

    #[test]
    fn test_valid_message() {
        let msg = request().validate().unwrap();
        assert_eq!(msg.subject, "Catering query");
        assert!(!msg.id.is_empty());
    }

    #[test]
    fn test_short_subject_rejected() {
        let mut req = request();
        req.subject = "Hi".to_string();
        let errors = req.validate().unwrap_err();
        assert_eq!(errors[0].field, "subject");
    }

    #[test]
    fn test_short_message_rejected() {
        let mut req = request();
        req.message = "Hello".to_string();
        let errors = req.validate().unwrap_err();
        assert_eq!(errors[0].field, "message");
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let req = ContactRequest {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            subject: String::new(),
            message: String::new(),
        };
        let errors = req.validate().unwrap_err();
        assert_eq!(errors.len(), 5);
    }
}
