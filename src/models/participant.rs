//! Participant model

use serde::{Deserialize, Serialize};
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Participant {
    pub id: i64,
    pub full_name: String,
    pub dob: NaiveDate,
    pub gender: String,
    pub photo: String,
    pub school_name: String,
    pub school_class: i32,
    pub school_address: String,
    pub phone_number: String,
    pub email: Option<String>,
    pub course_id: i64,
    pub payment_completed: bool,
    pub gateway_order_id: Option<String>,
    pub gateway_payment_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateParticipantRequest {
    pub full_name: String,
    pub dob: NaiveDate,
    pub gender: Gender,
    pub photo: String,
    pub school_name: String,
    pub school_class: i32,
    pub school_address: String,
    pub phone_number: String,
    pub email: Option<String>,
    pub course_id: i64,
}

/// Gender as collected by the registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Male" => Some(Gender::Male),
            "Female" => Some(Gender::Female),
            "Other" => Some(Gender::Other),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_round_trip() {
        for gender in [Gender::Male, Gender::Female, Gender::Other] {
            assert_eq!(Gender::parse(gender.as_str()), Some(gender));
        }
    }

    #[test]
    fn test_gender_rejects_unknown_values() {
        assert_eq!(Gender::parse(""), None);
        assert_eq!(Gender::parse("male"), None);
    }
}
