//! Payment gateway handshake tests
//!
//! Exercises order creation against a mock gateway and signature
//! verification of callbacks. No database is required here.

mod helpers;

use assert_matches::assert_matches;
use helpers::{sign_callback, test_gateway_secret, test_settings, GatewayMockServer};
use VidyaSetu::services::payment::{GatewayClient, PaymentService};
use VidyaSetu::utils::errors::GatewayError;

fn gateway_client(api_url: &str) -> GatewayClient {
    GatewayClient::new(test_settings(api_url).gateway).expect("client builds")
}

#[tokio::test]
async fn test_order_amount_is_fee_times_hundred() {
    let mock = GatewayMockServer::new().await;
    // Course fee of 1500 rupees must reach the gateway as 150000 paise,
    // with the registration id as receipt.
    mock.expect_order("order_test_42", 150_000, "42").await;

    let client = gateway_client(&mock.uri());
    let amount = PaymentService::to_minor_units(1_500);
    let order = client
        .create_order(amount, "42")
        .await
        .expect("order is created");

    assert_eq!(order.id, "order_test_42");
    assert_eq!(order.amount, 150_000);
    assert_eq!(order.currency, "INR");
    assert_eq!(order.receipt.as_deref(), Some("42"));
}

#[tokio::test]
async fn test_gateway_server_error_is_reported() {
    let mock = GatewayMockServer::new().await;
    mock.mock_order_failure(500).await;

    let client = gateway_client(&mock.uri());
    let result = client.create_order(10_000, "7").await;

    assert_matches!(result, Err(GatewayError::RequestFailed(_)));
}

#[tokio::test]
async fn test_gateway_unreachable_is_service_unavailable() {
    // Port 1 refuses connections immediately.
    let client = gateway_client("http://127.0.0.1:1");
    let result = client.create_order(10_000, "7").await;

    assert_matches!(
        result,
        Err(GatewayError::ServiceUnavailable) | Err(GatewayError::RequestFailed(_))
    );
}

#[tokio::test]
async fn test_malformed_order_response_is_invalid() {
    let mock = GatewayMockServer::new().await;
    wiremock::Mock::given(wiremock::matchers::method("POST"))
        .and(wiremock::matchers::path("/v1/orders"))
        .respond_with(wiremock::ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock.server)
        .await;

    let client = gateway_client(&mock.uri());
    let result = client.create_order(10_000, "7").await;

    assert_matches!(result, Err(GatewayError::InvalidResponse(_)));
}

#[test]
fn test_callback_signature_round_trip() {
    let client = gateway_client("http://gateway.invalid");
    let signature = sign_callback(&test_gateway_secret(), "order_abc", "pay_def");

    assert!(client.verify_signature("order_abc", "pay_def", &signature));
    assert!(!client.verify_signature("order_abc", "pay_other", &signature));
    assert!(!client.verify_signature("order_other", "pay_def", &signature));
    assert!(!client.verify_signature("order_abc", "pay_def", "deadbeef"));
}
