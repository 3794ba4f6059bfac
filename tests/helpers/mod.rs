//! Shared test helpers

pub mod database_helper;
pub mod gateway_mock;

#[allow(unused_imports)]
pub use database_helper::TestDatabase;
#[allow(unused_imports)]
pub use gateway_mock::GatewayMockServer;

use hmac::{Hmac, Mac};
use sha2::Sha256;
use VidyaSetu::config::Settings;

/// Gateway secret used across tests
pub fn test_gateway_secret() -> String {
    "test_gateway_secret".to_string()
}

/// Settings preconfigured for tests, pointing the gateway at `api_url`
pub fn test_settings(api_url: &str) -> Settings {
    let mut settings = Settings::default();
    settings.gateway.key_id = "rzp_test_key".to_string();
    settings.gateway.key_secret = test_gateway_secret();
    settings.gateway.api_url = api_url.to_string();
    settings.database.url = "postgresql://localhost/vidyasetu_test".to_string();
    settings
}

/// Compute the signature the gateway would send for a captured payment
pub fn sign_callback(secret: &str, order_id: &str, payment_id: &str) -> String {
    let mut mac = Hmac::<Sha256>::new_from_slice(secret.as_bytes()).expect("any key size works");
    mac.update(format!("{}|{}", order_id, payment_id).as_bytes());
    hex::encode(mac.finalize().into_bytes())
}
