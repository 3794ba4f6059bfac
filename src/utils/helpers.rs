//! Helper functions and utilities
//!
//! This module contains common helper functions used throughout the application.

use std::collections::HashMap;
use chrono::{DateTime, Utc};

/// Escape HTML special characters before interpolating user content into a page
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Parse an `application/x-www-form-urlencoded` body into a field map.
///
/// Repeated fields keep the last value, matching what a plain HTML form
/// submits.
pub fn parse_form_params(body: &[u8]) -> HashMap<String, String> {
    url::form_urlencoded::parse(body)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect()
}

/// Parse the query string of a request path into a field map
pub fn parse_query_params(path_and_query: &str) -> HashMap<String, String> {
    match path_and_query.split_once('?') {
        Some((_, query)) => parse_form_params(query.as_bytes()),
        None => HashMap::new(),
    }
}

/// Format a rupee amount for display
pub fn format_fee(rupees: i32) -> String {
    if rupees == 0 {
        "Free".to_string()
    } else {
        format!("Rs. {}", rupees)
    }
}

/// Format a timestamp for display
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M UTC").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<b>hi</b>"), "&lt;b&gt;hi&lt;/b&gt;");
        assert_eq!(escape_html(r#"a "quoted" & 'single'"#), "a &quot;quoted&quot; &amp; &#x27;single&#x27;");
    }

    #[test]
    fn test_parse_form_params() {
        let params = parse_form_params(b"full_name=Asha+Rao&school_class=7&email=");
        assert_eq!(params.get("full_name").map(String::as_str), Some("Asha Rao"));
        assert_eq!(params.get("school_class").map(String::as_str), Some("7"));
        assert_eq!(params.get("email").map(String::as_str), Some(""));
    }

    #[test]
    fn test_parse_query_params() {
        let params = parse_query_params("/register?error=Payment%20failed");
        assert_eq!(params.get("error").map(String::as_str), Some("Payment failed"));
        assert!(parse_query_params("/register").is_empty());
    }

    #[test]
    fn test_format_fee() {
        assert_eq!(format_fee(0), "Free");
        assert_eq!(format_fee(1500), "Rs. 1500");
    }
}
