//! Registration service implementation
//!
//! This service validates submitted registration forms field by field and
//! persists accepted registrations against an active course.

use std::collections::HashMap;
use chrono::NaiveDate;
use tracing::{debug, info};
use crate::database::repositories::{CourseRepository, ParticipantRepository};
use crate::models::participant::{CreateParticipantRequest, Gender, Participant};
use crate::utils::errors::{Result, VidyaSetuError};
use crate::utils::logging;
use crate::utils::validation::{
    self, FieldError, FormValidator,
};

/// Raw registration form fields, exactly as submitted
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub full_name: String,
    pub dob: String,
    pub gender: String,
    pub photo: String,
    pub photo_size: String,
    pub school_name: String,
    pub school_class: String,
    pub school_address: String,
    pub phone_number: String,
    pub email: String,
    pub course_id: String,
}

impl RegistrationForm {
    /// Build a form from parsed body parameters; missing fields become empty
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let field = |name: &str| params.get(name).cloned().unwrap_or_default();

        Self {
            full_name: field("full_name"),
            dob: field("dob"),
            gender: field("gender"),
            photo: field("photo"),
            photo_size: field("photo_size"),
            school_name: field("school_name"),
            school_class: field("school_class"),
            school_address: field("school_address"),
            phone_number: field("phone_number"),
            email: field("email"),
            course_id: field("course_id"),
        }
    }
}

/// Registration service for validating and persisting participants
#[derive(Debug, Clone)]
pub struct RegistrationService {
    participants: ParticipantRepository,
    courses: CourseRepository,
    validator: FormValidator,
}

impl RegistrationService {
    /// Create a new RegistrationService instance
    pub fn new(participants: ParticipantRepository, courses: CourseRepository) -> Result<Self> {
        Ok(Self {
            participants,
            courses,
            validator: FormValidator::new()?,
        })
    }

    /// Validate every field of a submitted form.
    ///
    /// All failures are collected so the form can re-render with a message
    /// per field rather than stopping at the first problem.
    pub fn validate(
        &self,
        form: &RegistrationForm,
        today: NaiveDate,
    ) -> std::result::Result<CreateParticipantRequest, Vec<FieldError>> {
        let mut errors = Vec::new();

        if let Err(message) = self.validator.validate_full_name(&form.full_name) {
            errors.push(FieldError::new("full_name", message));
        }

        let dob = match NaiveDate::parse_from_str(form.dob.trim(), "%Y-%m-%d") {
            Ok(dob) => {
                if let Err(message) = validation::validate_dob(dob, today) {
                    errors.push(FieldError::new("dob", message));
                }
                Some(dob)
            }
            Err(_) => {
                errors.push(FieldError::new("dob", "Enter a valid date of birth."));
                None
            }
        };

        let gender = match Gender::parse(form.gender.trim()) {
            Some(gender) => Some(gender),
            None => {
                errors.push(FieldError::new("gender", "Select a gender."));
                None
            }
        };

        let photo_size = form.photo_size.trim().parse::<u64>().ok();
        if let Err(message) = validation::validate_photo(&form.photo, photo_size) {
            errors.push(FieldError::new("photo", message));
        }

        if let Err(message) = validation::validate_school_name(&form.school_name) {
            errors.push(FieldError::new("school_name", message));
        }

        let school_class = match form.school_class.trim().parse::<i32>() {
            Ok(class) => {
                if let Err(message) = validation::validate_school_class(class) {
                    errors.push(FieldError::new("school_class", message));
                }
                Some(class)
            }
            Err(_) => {
                errors.push(FieldError::new("school_class", "Enter a valid class number."));
                None
            }
        };

        if let Err(message) = validation::validate_school_address(&form.school_address) {
            errors.push(FieldError::new("school_address", message));
        }

        if let Err(message) = self.validator.validate_phone(&form.phone_number) {
            errors.push(FieldError::new("phone_number", message));
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

        let course_id = match form.course_id.trim().parse::<i64>() {
            Ok(id) => Some(id),
            Err(_) => {
                errors.push(FieldError::new("course_id", "Select a course."));
                None
            }
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        // Every None above pushed an error, so this only binds on a clean form.
        match (dob, gender, school_class, course_id) {
            (Some(dob), Some(gender), Some(school_class), Some(course_id)) => {
                Ok(CreateParticipantRequest {
                    full_name: form.full_name.trim().to_string(),
                    dob,
                    gender,
                    photo: form.photo.trim().to_string(),
                    school_name: form.school_name.trim().to_string(),
                    school_class,
                    school_address: form.school_address.trim().to_string(),
                    phone_number: form.phone_number.trim().to_string(),
                    email,
                    course_id,
                })
            }
            _ => Err(vec![FieldError::new("form", "Form could not be processed.")]),
        }
    }

    /// Persist a validated registration against an active course
    pub async fn register(&self, request: CreateParticipantRequest) -> Result<Participant> {
        debug!(course_id = request.course_id, "Persisting registration");

        let course = self.courses.find_by_id(request.course_id).await?
            .ok_or(VidyaSetuError::CourseNotFound { course_id: request.course_id })?;

        if !course.is_active {
            return Err(VidyaSetuError::InvalidInput(
                format!("Course '{}' is not open for registration", course.title)
            ));
        }

        let participant = self.participants.create(request).await?;
        logging::log_registration(participant.id, participant.course_id);
        info!(participant_id = participant.id, "New participant registered");

        Ok(participant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::postgres::PgPoolOptions;

    fn service() -> RegistrationService {
        let pool = PgPoolOptions::new()
            .connect_lazy("postgresql://localhost/vidyasetu_test")
            .expect("lazy pool");
        RegistrationService::new(
            ParticipantRepository::new(pool.clone()),
            CourseRepository::new(pool),
        )
        .expect("validator patterns compile")
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 6).expect("valid date")
    }

    fn valid_form() -> RegistrationForm {
        RegistrationForm {
            full_name: "Asha R. Kulkarni".to_string(),
            dob: "2012-04-15".to_string(),
            gender: "Female".to_string(),
            photo: "asha.jpg".to_string(),
            photo_size: "204800".to_string(),
            school_name: "DAV Public School".to_string(),
            school_class: "8".to_string(),
            school_address: "12 MG Road, Pune".to_string(),
            phone_number: "9876543210".to_string(),
            email: "asha@example.com".to_string(),
            course_id: "1".to_string(),
        }
    }

    #[tokio::test]
    async fn test_valid_form_produces_request() {
        let request = service().validate(&valid_form(), today()).expect("form is valid");
        assert_eq!(request.full_name, "Asha R. Kulkarni");
        assert_eq!(request.school_class, 8);
        assert_eq!(request.gender, Gender::Female);
        assert_eq!(request.email.as_deref(), Some("asha@example.com"));
        assert_eq!(request.course_id, 1);
    }

    #[tokio::test]
    async fn test_empty_email_is_optional() {
        let mut form = valid_form();
        form.email = String::new();
        let request = service().validate(&form, today()).expect("form is valid");
        assert!(request.email.is_none());
    }

    #[tokio::test]
    async fn test_invalid_phone_rejected() {
        let mut form = valid_form();
        form.phone_number = "12345".to_string();
        let errors = service().validate(&form, today()).expect_err("phone is invalid");
        assert!(errors.iter().any(|e| e.field == "phone_number"));
    }

    #[tokio::test]
    async fn test_future_dob_rejected() {
        let mut form = valid_form();
        form.dob = "2027-01-01".to_string();
        let errors = service().validate(&form, today()).expect_err("dob in future");
        assert!(errors.iter().any(|e| e.field == "dob"));
    }

    #[tokio::test]
    async fn test_unparseable_dob_rejected() {
        let mut form = valid_form();
        form.dob = "15/04/2012".to_string();
        let errors = service().validate(&form, today()).expect_err("dob malformed");
        assert!(errors.iter().any(|e| e.field == "dob"));
    }

    #[tokio::test]
    async fn test_class_out_of_range_rejected() {
        let mut form = valid_form();
        form.school_class = "13".to_string();
        let errors = service().validate(&form, today()).expect_err("class out of range");
        assert!(errors.iter().any(|e| e.field == "school_class"));
    }

    #[tokio::test]
    async fn test_missing_course_rejected() {
        let mut form = valid_form();
        form.course_id = String::new();
        let errors = service().validate(&form, today()).expect_err("course missing");
        assert!(errors.iter().any(|e| e.field == "course_id"));
    }

    #[tokio::test]
    async fn test_all_failures_collected() {
        let form = RegistrationForm::default();
        let errors = service().validate(&form, today()).expect_err("everything is empty");
        let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
        for expected in [
            "full_name",
            "dob",
            "gender",
            "photo",
            "school_name",
            "school_class",
            "school_address",
            "phone_number",
            "course_id",
        ] {
            assert!(fields.contains(&expected), "missing error for {}", expected);
        }
    }
}
