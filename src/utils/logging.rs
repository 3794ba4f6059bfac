//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the VidyaSetu application.

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use crate::config::LoggingConfig;
use crate::utils::errors::Result;

/// Initialize logging based on configuration
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let file_appender = tracing_appender::rolling::daily(&config.file_path, "vidyasetu.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(tracing_subscriber::fmt::layer().with_writer(non_blocking))
        .init();

    info!("Logging initialized with level: {}", config.level);
    Ok(())
}

/// Log a completed registration
pub fn log_registration(participant_id: i64, course_id: i64) {
    info!(
        participant_id = participant_id,
        course_id = course_id,
        "Registration persisted"
    );
}

/// Log a gateway order creation
pub fn log_order_created(participant_id: i64, order_id: &str, amount_paise: i64) {
    info!(
        participant_id = participant_id,
        order_id = order_id,
        amount_paise = amount_paise,
        "Gateway order created"
    );
}

/// Log the outcome of a payment callback
pub fn log_payment_callback(order_id: &str, verified: bool) {
    if verified {
        info!(order_id = order_id, "Payment callback verified");
    } else {
        warn!(order_id = order_id, "Payment callback rejected");
    }
}
