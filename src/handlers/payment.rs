//! Payment flow handlers
//!
//! The checkout page creates a gateway order for an unpaid registration;
//! the callback endpoint verifies the gateway's signed confirmation before
//! the registration is marked paid.

use std::sync::Arc;
use hyper::StatusCode;
use tracing::warn;
use crate::services::payment::{CheckoutPage, PaymentCallback};
use crate::utils::errors::VidyaSetuError;
use crate::utils::helpers::{escape_html, format_fee};
use super::{handle_error, html, not_found, pages, redirect, AppContext, HttpResponse};

/// Render the checkout page handed to the gateway's browser widget
fn render_checkout(page: &CheckoutPage) -> Option<String> {
    let CheckoutPage::Checkout {
        participant,
        order,
        key_id,
    } = page
    else {
        return None;
    };

    let body = format!(
        r#"<h1>Pay Registration Fee</h1>
<p>Registration for <strong>{name}</strong>.</p>
<p>Amount due: {amount} ({currency})</p>
<div id="checkout"
     data-key-id="{key_id}"
     data-order-id="{order_id}"
     data-amount="{amount_paise}"
     data-currency="{currency}"
     data-callback-url="/payment/callback"></div>
<p>Complete the payment in the gateway window. You will be redirected once it is confirmed.</p>"#,
        name = escape_html(&participant.full_name),
        amount = format_fee((order.amount / 100) as i32),
        currency = escape_html(&order.currency),
        key_id = escape_html(key_id),
        order_id = escape_html(&order.id),
        amount_paise = order.amount,
    );

    Some(pages::layout("Payment", &body))
}

/// GET /payment/{participant_id}
pub async fn checkout(ctx: Arc<AppContext>, participant_id: i64) -> HttpResponse {
    match ctx.services.payment_service.prepare_checkout(participant_id).await {
        Ok(CheckoutPage::AlreadyPaid) => redirect("/thank-you"),
        Ok(page) => match render_checkout(&page) {
            Some(markup) => html(StatusCode::OK, markup),
            None => redirect("/thank-you"),
        },
        Err(VidyaSetuError::ParticipantNotFound { participant_id }) => {
            warn!(participant_id = participant_id, "Checkout requested for unknown registration");
            not_found()
        }
        Err(e) => handle_error(
            &e,
            "/courses",
            "Payment service is temporarily unavailable. Please try again.",
        ),
    }
}

/// POST /payment/callback
///
/// Every failure mode lands on the failure page: unknown order, bad
/// signature, malformed body, or a store error. Only a verified signature
/// marks the registration paid.
pub async fn callback(ctx: Arc<AppContext>, body: &[u8]) -> HttpResponse {
    let callback: PaymentCallback = match serde_json::from_slice(body) {
        Ok(callback) => callback,
        Err(e) => {
            warn!(error = %e, "Malformed payment callback body");
            return redirect("/payment-failed");
        }
    };

    match ctx.services.payment_service.confirm_payment(&callback).await {
        Ok(_) => redirect("/payment-success"),
        Err(e) => {
            warn!(error = %e, order_id = %callback.order_id, "Payment callback rejected");
            redirect("/payment-failed")
        }
    }
}
