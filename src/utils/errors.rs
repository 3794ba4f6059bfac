//! Error handling for VidyaSetu
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for the VidyaSetu application
#[derive(Error, Debug)]
pub enum VidyaSetuError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Payment gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Participant not found: {participant_id}")]
    ParticipantNotFound { participant_id: i64 },

    #[error("Course not found: {course_id}")]
    CourseNotFound { course_id: i64 },

    #[error("No registration for gateway order: {order_id}")]
    OrderNotFound { order_id: String },

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

/// Payment gateway specific errors
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Gateway request failed: {0}")]
    RequestFailed(String),

    #[error("Gateway request timeout")]
    Timeout,

    #[error("Invalid gateway response: {0}")]
    InvalidResponse(String),

    #[error("Gateway service unavailable")]
    ServiceUnavailable,

    #[error("Payment signature verification failed")]
    SignatureMismatch,
}

/// Result type alias for VidyaSetu operations
pub type Result<T> = std::result::Result<T, VidyaSetuError>;

/// Result type alias for gateway operations
pub type GatewayResult<T> = std::result::Result<T, GatewayError>;

impl VidyaSetuError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            VidyaSetuError::Database(_) => false,
            VidyaSetuError::Migration(_) => false,
            VidyaSetuError::Gateway(_) => true,
            VidyaSetuError::Config(_) => false,
            VidyaSetuError::ParticipantNotFound { .. } => false,
            VidyaSetuError::CourseNotFound { .. } => false,
            VidyaSetuError::OrderNotFound { .. } => false,
            VidyaSetuError::Http(_) => true,
            VidyaSetuError::Serialization(_) => false,
            VidyaSetuError::Io(_) => true,
            VidyaSetuError::UrlParse(_) => false,
            VidyaSetuError::InvalidInput(_) => false,
            VidyaSetuError::ServiceUnavailable(_) => true,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            VidyaSetuError::Database(_) => ErrorSeverity::Critical,
            VidyaSetuError::Migration(_) => ErrorSeverity::Critical,
            VidyaSetuError::Config(_) => ErrorSeverity::Critical,
            VidyaSetuError::Gateway(GatewayError::SignatureMismatch) => ErrorSeverity::Warning,
            VidyaSetuError::ParticipantNotFound { .. } => ErrorSeverity::Info,
            VidyaSetuError::CourseNotFound { .. } => ErrorSeverity::Info,
            VidyaSetuError::OrderNotFound { .. } => ErrorSeverity::Warning,
            VidyaSetuError::InvalidInput(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_mismatch_is_warning() {
        let err = VidyaSetuError::Gateway(GatewayError::SignatureMismatch);
        assert_eq!(err.severity(), ErrorSeverity::Warning);
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_config_error_is_critical() {
        let err = VidyaSetuError::Config("missing database url".to_string());
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert!(!err.is_recoverable());
    }
}
