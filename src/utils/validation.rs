//! Registration form field validation
//!
//! Field rules for the participant registration form. Each function returns
//! the offending message rather than logging, so handlers can re-render the
//! form with per-field errors.

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use crate::utils::errors::{Result, VidyaSetuError};

/// Maximum accepted photo size in megabytes
pub const MAX_PHOTO_MB: u64 = 5;

/// Minimum participant age in years
pub const MIN_AGE_YEARS: i32 = 5;

/// A single form field that failed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Compiled field patterns shared by all registration submissions
#[derive(Debug, Clone)]
pub struct FormValidator {
    name_pattern: Regex,
    phone_pattern: Regex,
}

impl FormValidator {
    pub fn new() -> Result<Self> {
        let name_pattern = Regex::new(r"^[A-Za-z\s\.]+$")
            .map_err(|e| VidyaSetuError::Config(format!("Invalid name pattern: {}", e)))?;
        let phone_pattern = Regex::new(r"^\d{10}$")
            .map_err(|e| VidyaSetuError::Config(format!("Invalid phone pattern: {}", e)))?;

        Ok(Self {
            name_pattern,
            phone_pattern,
        })
    }

    /// Letters, spaces and dots only, at most 100 characters
    pub fn validate_full_name(&self, name: &str) -> std::result::Result<(), String> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err("Full name is required.".to_string());
        }
        if trimmed.len() > 100 {
            return Err("Full name must be at most 100 characters.".to_string());
        }
        if !self.name_pattern.is_match(trimmed) {
            return Err("Name can contain letters, spaces and dots only.".to_string());
        }
        Ok(())
    }

    /// Exactly 10 ASCII digits
    pub fn validate_phone(&self, phone: &str) -> std::result::Result<(), String> {
        if !self.phone_pattern.is_match(phone.trim()) {
            return Err("Enter a valid 10-digit phone number.".to_string());
        }
        Ok(())
    }
}

/// Basic well-formedness check for an optional email address
pub fn validate_email(email: &str) -> std::result::Result<(), String> {
    let trimmed = email.trim();
    let well_formed = trimmed.len() > 5
        && trimmed.split_once('@').is_some_and(|(local, domain)| {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        });
    if !well_formed {
        return Err("Enter a valid email address.".to_string());
    }
    Ok(())
}

/// Not in the future, and at least [`MIN_AGE_YEARS`] old on the given day
pub fn validate_dob(dob: NaiveDate, today: NaiveDate) -> std::result::Result<(), String> {
    if dob > today {
        return Err("Date of birth cannot be in the future.".to_string());
    }

    let mut age = today.year() - dob.year();
    if (today.month(), today.day()) < (dob.month(), dob.day()) {
        age -= 1;
    }
    if age < MIN_AGE_YEARS {
        return Err(format!("Participant must be at least {} years old.", MIN_AGE_YEARS));
    }

    Ok(())
}

/// Class must be between 1 and 12
pub fn validate_school_class(class: i32) -> std::result::Result<(), String> {
    if !(1..=12).contains(&class) {
        return Err("Class must be between 1 and 12.".to_string());
    }
    Ok(())
}

pub fn validate_school_name(name: &str) -> std::result::Result<(), String> {
    if name.trim().len() < 2 {
        return Err("Enter a valid school name.".to_string());
    }
    Ok(())
}

pub fn validate_school_address(address: &str) -> std::result::Result<(), String> {
    if address.trim().len() < 5 {
        return Err("Address must be at least 5 characters.".to_string());
    }
    Ok(())
}

/// JPG/PNG only; declared size, when known, capped at [`MAX_PHOTO_MB`]
pub fn validate_photo(filename: &str, declared_size: Option<u64>) -> std::result::Result<(), String> {
    let lowered = filename.trim().to_lowercase();
    if lowered.is_empty() {
        return Err("Photo is required.".to_string());
    }

    let allowed = [".jpg", ".jpeg", ".png"];
    if !allowed.iter().any(|ext| lowered.ends_with(ext)) {
        return Err("Only JPG and PNG images are allowed.".to_string());
    }

    if let Some(size) = declared_size {
        if size > MAX_PHOTO_MB * 1024 * 1024 {
            return Err(format!("Photo file size must be <= {} MB.", MAX_PHOTO_MB));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> FormValidator {
        FormValidator::new().expect("patterns compile")
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn test_full_name_accepts_letters_spaces_dots() {
        let v = validator();
        assert!(v.validate_full_name("Asha R. Kulkarni").is_ok());
        assert!(v.validate_full_name("  Ravi Kumar  ").is_ok());
    }

    #[test]
    fn test_full_name_rejects_digits_and_empty() {
        let v = validator();
        assert!(v.validate_full_name("Ravi2").is_err());
        assert!(v.validate_full_name("").is_err());
        assert!(v.validate_full_name(&"a".repeat(101)).is_err());
    }

    #[test]
    fn test_phone_requires_exactly_ten_digits() {
        let v = validator();
        assert!(v.validate_phone("9876543210").is_ok());
        assert!(v.validate_phone("98765").is_err());
        assert!(v.validate_phone("98765432101").is_err());
        assert!(v.validate_phone("98765-4321").is_err());
    }

    #[test]
    fn test_email_well_formedness() {
        assert!(validate_email("student@example.com").is_ok());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("a@b").is_err());
        assert!(validate_email("@example.com").is_err());
    }

    #[test]
    fn test_dob_in_future_rejected() {
        let today = day(2026, 8, 6);
        assert!(validate_dob(day(2026, 8, 7), today).is_err());
    }

    #[test]
    fn test_dob_minimum_age() {
        let today = day(2026, 8, 6);
        // Turns five tomorrow: still four today.
        assert!(validate_dob(day(2021, 8, 7), today).is_err());
        // Turned five exactly today.
        assert!(validate_dob(day(2021, 8, 6), today).is_ok());
        assert!(validate_dob(day(2010, 1, 15), today).is_ok());
    }

    #[test]
    fn test_school_class_bounds() {
        assert!(validate_school_class(0).is_err());
        assert!(validate_school_class(1).is_ok());
        assert!(validate_school_class(12).is_ok());
        assert!(validate_school_class(13).is_err());
    }

    #[test]
    fn test_school_name_and_address_lengths() {
        assert!(validate_school_name("Z").is_err());
        assert!(validate_school_name("DAV Public School").is_ok());
        assert!(validate_school_address("abc").is_err());
        assert!(validate_school_address("12 MG Road, Pune").is_ok());
    }

    #[test]
    fn test_photo_extension_and_size() {
        assert!(validate_photo("me.jpg", None).is_ok());
        assert!(validate_photo("ME.PNG", None).is_ok());
        assert!(validate_photo("scan.pdf", None).is_err());
        assert!(validate_photo("", None).is_err());
        assert!(validate_photo("me.jpg", Some(5 * 1024 * 1024)).is_ok());
        assert!(validate_photo("me.jpg", Some(5 * 1024 * 1024 + 1)).is_err());
    }
}
