//! Payment gateway service implementation
//!
//! This service handles the order-creation and callback-verification
//! handshake with the external payment gateway, including HTTP client
//! setup, response parsing, signature checks, and error handling.

use std::time::Duration;
use hmac::{Hmac, Mac};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use tracing::{debug, info, warn};
use crate::config::GatewayConfig;
use crate::database::repositories::{CourseRepository, ParticipantRepository};
use crate::models::participant::Participant;
use crate::utils::errors::{GatewayError, GatewayResult, Result, VidyaSetuError};
use crate::utils::logging;

type HmacSha256 = Hmac<Sha256>;

/// Order as returned by the gateway
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GatewayOrder {
    pub id: String,
    pub amount: i64,
    pub currency: String,
    pub receipt: Option<String>,
    pub status: String,
}

/// Order-creation request body
#[derive(Debug, Serialize)]
struct CreateOrderBody<'a> {
    amount: i64,
    currency: &'a str,
    receipt: &'a str,
    payment_capture: u8,
}

/// Signed confirmation posted back by the gateway
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PaymentCallback {
    #[serde(rename = "razorpay_payment_id", alias = "payment_id")]
    pub payment_id: String,
    #[serde(rename = "razorpay_order_id", alias = "order_id")]
    pub order_id: String,
    #[serde(rename = "razorpay_signature", alias = "signature")]
    pub signature: String,
}

/// HTTP client for the payment gateway order API
#[derive(Debug, Clone)]
pub struct GatewayClient {
    client: Client,
    config: GatewayConfig,
}

impl GatewayClient {
    /// Create a new GatewayClient instance
    pub fn new(config: GatewayConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent("VidyaSetu/1.0")
            .build()
            .map_err(VidyaSetuError::Http)?;

        Ok(Self { client, config })
    }

    /// Key id handed to the checkout page so the gateway widget can open
    pub fn key_id(&self) -> &str {
        &self.config.key_id
    }

    /// Create an order for the given minor-unit amount
    pub async fn create_order(&self, amount_paise: i64, receipt: &str) -> GatewayResult<GatewayOrder> {
        let url = format!("{}/v1/orders", self.config.api_url);
        let body = CreateOrderBody {
            amount: amount_paise,
            currency: &self.config.currency,
            receipt,
            payment_capture: 1,
        };

        debug!(amount_paise = amount_paise, receipt = receipt, "Creating gateway order");

        let response = self.client
            .post(&url)
            .basic_auth(&self.config.key_id, Some(&self.config.key_secret))
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GatewayError::Timeout
                } else if e.is_connect() {
                    GatewayError::ServiceUnavailable
                } else {
                    GatewayError::RequestFailed(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(GatewayError::RequestFailed(
                format!("HTTP {}: {}", status, error_text)
            ));
        }

        let order: GatewayOrder = response.json().await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

        info!(order_id = %order.id, amount_paise = order.amount, "Gateway order created");
        Ok(order)
    }

    /// Verify a callback signature.
    ///
    /// The gateway signs `"{order_id}|{payment_id}"` with HMAC-SHA256 under
    /// the key secret and sends the hex digest. Comparison runs in constant
    /// time via `verify_slice`.
    pub fn verify_signature(&self, order_id: &str, payment_id: &str, signature: &str) -> bool {
        let mut mac = match HmacSha256::new_from_slice(self.config.key_secret.as_bytes()) {
            Ok(mac) => mac,
            Err(_) => return false,
        };
        mac.update(format!("{}|{}", order_id, payment_id).as_bytes());

        let provided = match hex::decode(signature.trim()) {
            Ok(bytes) => bytes,
            Err(_) => return false,
        };

        mac.verify_slice(&provided).is_ok()
    }
}

/// What the payment page should show for a registration
#[derive(Debug, Clone)]
pub enum CheckoutPage {
    /// Fee already collected; send the user straight to the thank-you page
    AlreadyPaid,
    /// A fresh order was created and stored on the registration
    Checkout {
        participant: Participant,
        order: GatewayOrder,
        key_id: String,
    },
}

/// Payment service wiring the gateway handshake to stored registrations
#[derive(Debug, Clone)]
pub struct PaymentService {
    gateway: GatewayClient,
    participants: ParticipantRepository,
    courses: CourseRepository,
}

impl PaymentService {
    /// Create a new PaymentService instance
    pub fn new(
        gateway: GatewayClient,
        participants: ParticipantRepository,
        courses: CourseRepository,
    ) -> Self {
        Self {
            gateway,
            participants,
            courses,
        }
    }

    /// Convert a whole-rupee fee to the gateway's minor unit (paise)
    pub fn to_minor_units(fee_rupees: i32) -> i64 {
        i64::from(fee_rupees) * 100
    }

    /// Create a gateway order for an unpaid registration.
    ///
    /// The receipt is the registration id, and the returned order id is
    /// stored on the registration before the checkout page renders. A paid
    /// registration short-circuits to [`CheckoutPage::AlreadyPaid`].
    pub async fn prepare_checkout(&self, participant_id: i64) -> Result<CheckoutPage> {
        let participant = self.participants.find_by_id(participant_id).await?
            .ok_or(VidyaSetuError::ParticipantNotFound { participant_id })?;

        if participant.payment_completed {
            debug!(participant_id = participant_id, "Registration already paid");
            return Ok(CheckoutPage::AlreadyPaid);
        }

        let course = self.courses.find_by_id(participant.course_id).await?
            .ok_or(VidyaSetuError::CourseNotFound { course_id: participant.course_id })?;

        let amount_paise = Self::to_minor_units(course.fee);
        let receipt = participant.id.to_string();
        let order = self.gateway.create_order(amount_paise, &receipt).await?;

        let participant = self.participants.set_order_id(participant.id, &order.id).await?;
        logging::log_order_created(participant.id, &order.id, amount_paise);

        Ok(CheckoutPage::Checkout {
            participant,
            order,
            key_id: self.gateway.key_id().to_string(),
        })
    }

    /// Verify a gateway callback and mark the registration paid.
    ///
    /// Nothing is mutated unless the signature checks out against the stored
    /// order id.
    pub async fn confirm_payment(&self, callback: &PaymentCallback) -> Result<Participant> {
        let participant = self.participants.find_by_order_id(&callback.order_id).await?
            .ok_or_else(|| VidyaSetuError::OrderNotFound { order_id: callback.order_id.clone() })?;

        if !self.gateway.verify_signature(&callback.order_id, &callback.payment_id, &callback.signature) {
            logging::log_payment_callback(&callback.order_id, false);
            return Err(VidyaSetuError::Gateway(GatewayError::SignatureMismatch));
        }

        if participant.payment_completed {
            warn!(
                participant_id = participant.id,
                order_id = %callback.order_id,
                "Duplicate payment callback for paid registration"
            );
        }

        let participant = self.participants.mark_paid(participant.id, &callback.payment_id).await?;
        logging::log_payment_callback(&callback.order_id, true);

        Ok(participant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    fn gateway_client(secret: &str) -> GatewayClient {
        let mut config = Settings::default().gateway;
        config.key_id = "rzp_test_key".to_string();
        config.key_secret = secret.to_string();
        GatewayClient::new(config).expect("client builds")
    }

    fn sign(secret: &str, order_id: &str, payment_id: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).expect("any key size works");
        mac.update(format!("{}|{}", order_id, payment_id).as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    #[test]
    fn test_fee_to_minor_units() {
        assert_eq!(PaymentService::to_minor_units(100), 10_000);
        assert_eq!(PaymentService::to_minor_units(0), 0);
        assert_eq!(PaymentService::to_minor_units(1_500), 150_000);
    }

    #[test]
    fn test_valid_signature_accepted() {
        let client = gateway_client("test_secret");
        let signature = sign("test_secret", "order_123", "pay_456");
        assert!(client.verify_signature("order_123", "pay_456", &signature));
    }

    #[test]
    fn test_tampered_signature_rejected() {
        let client = gateway_client("test_secret");
        let signature = sign("test_secret", "order_123", "pay_456");
        assert!(!client.verify_signature("order_123", "pay_999", &signature));
        assert!(!client.verify_signature("order_999", "pay_456", &signature));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let client = gateway_client("test_secret");
        let signature = sign("other_secret", "order_123", "pay_456");
        assert!(!client.verify_signature("order_123", "pay_456", &signature));
    }

    #[test]
    fn test_garbage_signature_rejected() {
        let client = gateway_client("test_secret");
        assert!(!client.verify_signature("order_123", "pay_456", "not-hex"));
        assert!(!client.verify_signature("order_123", "pay_456", ""));
    }

    #[test]
    fn test_callback_accepts_gateway_field_names() {
        let json = r#"{"razorpay_payment_id":"pay_1","razorpay_order_id":"order_1","razorpay_signature":"aa"}"#;
        let callback: PaymentCallback = serde_json::from_str(json).expect("deserializes");
        assert_eq!(callback.payment_id, "pay_1");
        assert_eq!(callback.order_id, "order_1");

        let short = r#"{"payment_id":"pay_2","order_id":"order_2","signature":"bb"}"#;
        let callback: PaymentCallback = serde_json::from_str(short).expect("aliases work");
        assert_eq!(callback.payment_id, "pay_2");
    }

    #[test]
    fn test_order_response_deserialization() {
        let json = r#"{"id":"order_9A33XWu170gUtm","entity":"order","amount":50000,"currency":"INR","receipt":"42","status":"created"}"#;
        let order: GatewayOrder = serde_json::from_str(json).expect("deserializes");
        assert_eq!(order.id, "order_9A33XWu170gUtm");
        assert_eq!(order.amount, 50000);
        assert_eq!(order.receipt.as_deref(), Some("42"));
    }
}
