//! Contact form service implementation

use std::collections::HashMap;
use tracing::info;
use crate::database::repositories::FeedbackRepository;
use crate::models::feedback::{ContactMessage, CreateContactMessageRequest};
use crate::utils::errors::Result;
use crate::utils::validation::{self, FieldError};

/// Raw contact form fields, exactly as submitted
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactForm {
    /// Build a form from parsed body parameters; missing fields become empty
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let field = |name: &str| params.get(name).cloned().unwrap_or_default();

        Self {
            name: field("name"),
            email: field("email"),
            phone: field("phone"),
            message: field("message"),
        }
    }
}

/// Contact service for storing visitor messages
#[derive(Debug, Clone)]
pub struct ContactService {
    feedback: FeedbackRepository,
}

impl ContactService {
    /// Create a new ContactService instance
    pub fn new(feedback: FeedbackRepository) -> Self {
        Self { feedback }
    }

    /// Validate a contact form: name and message are required, email only
    /// needs to be well-formed when present
    pub fn validate(
        &self,
        form: &ContactForm,
    ) -> std::result::Result<CreateContactMessageRequest, Vec<FieldError>> {
        let mut errors = Vec::new();

        if form.name.trim().is_empty() {
            errors.push(FieldError::new("name", "Name is required."));
        }

        if form.message.trim().is_empty() {
            errors.push(FieldError::new("message", "Message is required."));
        }

        let email = {
            let trimmed = form.email.trim();
            if trimmed.is_empty() {
                None
            } else {
                if let Err(message) = validation::validate_email(trimmed) {
                    errors.push(FieldError::new("email", message));
                }
                Some(trimmed.to_string())
            }
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        let phone = {
            let trimmed = form.phone.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        };

        Ok(CreateContactMessageRequest {
            name: form.name.trim().to_string(),
            email,
            phone,
            message: form.message.trim().to_string(),
        })
    }

    /// Store a validated contact message
    pub async fn submit(&self, request: CreateContactMessageRequest) -> Result<ContactMessage> {
        let message = self.feedback.create_contact_message(request).await?;
        info!(contact_message_id = message.id, "Contact message stored");
        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::postgres::PgPoolOptions;

    fn service() -> ContactService {
        let pool = PgPoolOptions::new()
            .connect_lazy("postgresql://localhost/vidyasetu_test")
            .expect("lazy pool");
        ContactService::new(FeedbackRepository::new(pool))
    }

    #[tokio::test]
    async fn test_valid_contact_form() {
        let form = ContactForm {
            name: "Meena Joshi".to_string(),
            email: "meena@example.com".to_string(),
            phone: String::new(),
            message: "Do you offer weekend batches?".to_string(),
        };
        let request = service().validate(&form).expect("form is valid");
        assert_eq!(request.name, "Meena Joshi");
        assert!(request.phone.is_none());
    }

    #[tokio::test]
    async fn test_missing_name_and_message_rejected() {
        let errors = service().validate(&ContactForm::default()).expect_err("empty form");
        let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
        assert!(fields.contains(&"name"));
        assert!(fields.contains(&"message"));
    }

    #[tokio::test]
    async fn test_bad_email_rejected() {
        let form = ContactForm {
            name: "Meena".to_string(),
            email: "not-an-email".to_string(),
            phone: String::new(),
            message: "Hello".to_string(),
        };
        let errors = service().validate(&form).expect_err("bad email");
        assert!(errors.iter().any(|e| e.field == "email"));
    }
}
