//! Mock payment gateway server
//!
//! Wraps wiremock with the order endpoint the gateway client talks to.

use serde_json::json;
use wiremock::matchers::{body_partial_json, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mock of the gateway's order API
pub struct GatewayMockServer {
    pub server: MockServer,
}

impl GatewayMockServer {
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Base URL for pointing the gateway client at this mock
    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Accept only an order matching the expected amount and receipt
    pub async fn expect_order(&self, order_id: &str, amount_paise: i64, receipt: &str) {
        Mock::given(method("POST"))
            .and(path("/v1/orders"))
            .and(header_exists("authorization"))
            .and(body_partial_json(json!({
                "amount": amount_paise,
                "currency": "INR",
                "receipt": receipt,
                "payment_capture": 1,
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": order_id,
                "entity": "order",
                "amount": amount_paise,
                "currency": "INR",
                "receipt": receipt,
                "status": "created",
            })))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Fail every order call with the given HTTP status
    pub async fn mock_order_failure(&self, status: u16) {
        Mock::given(method("POST"))
            .and(path("/v1/orders"))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({
                "error": {"code": "SERVER_ERROR", "description": "mock failure"}
            })))
            .mount(&self.server)
            .await;
    }
}
