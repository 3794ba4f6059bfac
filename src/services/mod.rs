//! Services module
//!
//! This module contains business logic services

pub mod catalog;
pub mod contact;
pub mod payment;
pub mod registration;

// Re-export commonly used services
pub use catalog::{CatalogService, HomePage};
pub use contact::{ContactForm, ContactService};
pub use payment::{CheckoutPage, GatewayClient, GatewayOrder, PaymentCallback, PaymentService};
pub use registration::{RegistrationForm, RegistrationService};

use crate::config::Settings;
use crate::database::DatabaseService;
use crate::utils::errors::Result;

/// Service factory for creating and managing all services
#[derive(Clone)]
pub struct ServiceFactory {
    pub registration_service: RegistrationService,
    pub payment_service: PaymentService,
    pub catalog_service: CatalogService,
    pub contact_service: ContactService,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services initialized
    pub fn new(settings: Settings, database: DatabaseService) -> Result<Self> {
        let gateway = GatewayClient::new(settings.gateway.clone())?;

        let registration_service = RegistrationService::new(
            database.participants.clone(),
            database.courses.clone(),
        )?;
        let payment_service = PaymentService::new(
            gateway,
            database.participants.clone(),
            database.courses.clone(),
        );
        let catalog_service = CatalogService::new(
            database.courses.clone(),
            database.content.clone(),
            database.feedback.clone(),
        );
        let contact_service = ContactService::new(database.feedback);

        Ok(Self {
            registration_service,
            payment_service,
            catalog_service,
            contact_service,
        })
    }
}
