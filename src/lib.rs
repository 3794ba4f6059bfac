//! VidyaSetu coaching institute website backend
//!
//! A small institutional website backend: course catalog, participant
//! registration, online fee payment through an external gateway, study
//! materials, live lectures, testimonials and a contact form.

#![allow(non_snake_case)]

pub mod config;
pub mod database;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod server;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{Result, VidyaSetuError};

// Re-export main components for easy access
pub use database::DatabaseService;
pub use handlers::AppContext;
pub use services::ServiceFactory;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
