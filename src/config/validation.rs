//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{Result, VidyaSetuError};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_server_config(&settings.server)?;
    validate_database_config(&settings.database)?;
    validate_gateway_config(&settings.gateway)?;
    validate_logging_config(&settings.logging)?;

    if let Some(ref email_config) = settings.email {
        validate_email_config(email_config)?;
    }

    Ok(())
}

/// Validate HTTP server configuration
fn validate_server_config(config: &super::ServerConfig) -> Result<()> {
    if config.host.is_empty() {
        return Err(VidyaSetuError::Config(
            "Server host is required".to_string()
        ));
    }

    if config.port == 0 {
        return Err(VidyaSetuError::Config(
            "Server port must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate database configuration
fn validate_database_config(config: &super::DatabaseConfig) -> Result<()> {
    if config.url.is_empty() {
        return Err(VidyaSetuError::Config(
            "Database URL is required".to_string()
        ));
    }

    if config.max_connections == 0 {
        return Err(VidyaSetuError::Config(
            "Max connections must be greater than 0".to_string()
        ));
    }

    if config.min_connections > config.max_connections {
        return Err(VidyaSetuError::Config(
            "Min connections cannot be greater than max connections".to_string()
        ));
    }

    Ok(())
}

/// Validate payment gateway configuration
fn validate_gateway_config(config: &super::GatewayConfig) -> Result<()> {
    if config.key_id.is_empty() {
        return Err(VidyaSetuError::Config(
            "Gateway key id is required".to_string()
        ));
    }

    if config.key_secret.is_empty() {
        return Err(VidyaSetuError::Config(
            "Gateway key secret is required".to_string()
        ));
    }

    if config.api_url.is_empty() {
        return Err(VidyaSetuError::Config(
            "Gateway API URL is required".to_string()
        ));
    }

    if config.currency.is_empty() {
        return Err(VidyaSetuError::Config(
            "Gateway currency is required".to_string()
        ));
    }

    if config.timeout_seconds == 0 {
        return Err(VidyaSetuError::Config(
            "Gateway timeout must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate email configuration
fn validate_email_config(config: &super::EmailConfig) -> Result<()> {
    if config.host.is_empty() {
        return Err(VidyaSetuError::Config(
            "Email host is required".to_string()
        ));
    }

    if config.port == 0 {
        return Err(VidyaSetuError::Config(
            "Email port must be greater than 0".to_string()
        ));
    }

    if config.from_address.is_empty() {
        return Err(VidyaSetuError::Config(
            "Email from address is required".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(VidyaSetuError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(VidyaSetuError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}
