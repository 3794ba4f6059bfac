//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub gateway: GatewayConfig,
    pub email: Option<EmailConfig>,
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Database configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// Payment gateway configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GatewayConfig {
    pub key_id: String,
    pub key_secret: String,
    pub api_url: String,
    pub currency: String,
    pub timeout_seconds: u64,
}

/// SMTP credentials, handed to the mail relay outside this service
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmailConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub use_tls: bool,
    pub from_address: String,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: String,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("VIDYASETU").separator("__"))
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::VidyaSetuError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
            },
            database: DatabaseConfig {
                url: "postgresql://localhost/vidyasetu".to_string(),
                max_connections: 10,
                min_connections: 1,
            },
            gateway: GatewayConfig {
                key_id: String::new(),
                key_secret: String::new(),
                api_url: "https://api.razorpay.com".to_string(),
                currency: "INR".to_string(),
                timeout_seconds: 10,
            },
            email: None,
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: "/var/log/vidyasetu".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid_apart_from_gateway_keys() {
        let settings = Settings::default();
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.gateway.currency, "INR");
        assert!(settings.database.url.contains("postgresql://"));
        // Gateway keys are deliberately empty in defaults and must be
        // supplied via environment, so validation rejects the defaults.
        assert!(settings.validate().is_err());
    }
}
