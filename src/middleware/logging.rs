//! Request logging middleware
//!
//! Gives every request a id and logs method, path, status and duration
//! once the response is built.

use std::time::Instant;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Threshold above which a request is logged as slow
const SLOW_REQUEST_MS: u128 = 1000;

/// Logging middleware for incoming HTTP requests
#[derive(Debug, Clone)]
pub struct RequestLogger {
    log_requests: bool,
}

impl RequestLogger {
    /// Create a new RequestLogger instance
    pub fn new(log_requests: bool) -> Self {
        Self { log_requests }
    }

    /// Start tracking a request; returns None when request logging is off
    pub fn start(&self, method: &str, path: &str) -> Option<RequestSpan> {
        if !self.log_requests {
            return None;
        }

        let span = RequestSpan {
            request_id: Uuid::new_v4(),
            method: method.to_string(),
            path: path.to_string(),
            start: Instant::now(),
        };
        debug!(
            request_id = %span.request_id,
            method = %span.method,
            path = %span.path,
            "Request received"
        );

        Some(span)
    }
}

impl Default for RequestLogger {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Tracks a single request from accept to response
pub struct RequestSpan {
    request_id: Uuid,
    method: String,
    path: String,
    start: Instant,
}

impl RequestSpan {
    /// Complete the request tracking and log the outcome
    pub fn complete(self, status: u16) {
        let duration_ms = self.start.elapsed().as_millis();

        info!(
            request_id = %self.request_id,
            method = %self.method,
            path = %self.path,
            status = status,
            duration_ms = duration_ms,
            "Request completed"
        );

        if duration_ms > SLOW_REQUEST_MS {
            warn!(
                request_id = %self.request_id,
                path = %self.path,
                duration_ms = duration_ms,
                "Slow request detected"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_logger_disabled_returns_no_span() {
        let logger = RequestLogger::new(false);
        assert!(logger.start("GET", "/").is_none());
    }

    #[test]
    fn test_request_span_completes() {
        let logger = RequestLogger::default();
        let span = logger.start("POST", "/register").expect("logging enabled");
        span.complete(303);
    }
}
