//! HTTP handlers module
//!
//! This module routes incoming requests to page, registration, payment and
//! contact handlers, and provides the shared response helpers they use.

pub mod pages;
pub mod registration;
pub mod payment;
pub mod contact;

use std::sync::Arc;
use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::body::Body;
use hyper::{Method, Request, Response, StatusCode};
use tracing::{error, warn};

use crate::config::Settings;
use crate::services::ServiceFactory;
use crate::utils::errors::{ErrorSeverity, VidyaSetuError};

/// Shared state handed to every handler
pub struct AppContext {
    pub services: ServiceFactory,
    pub settings: Settings,
}

pub type HttpResponse = Response<Full<Bytes>>;

/// Route a request to its handler.
///
/// Every failure below this point becomes a user-facing redirect with a
/// flash message; nothing here is fatal to the process.
pub async fn route<B>(req: Request<B>, ctx: Arc<AppContext>) -> HttpResponse
where
    B: Body,
    B::Error: std::fmt::Display,
{
    let method = req.method().clone();
    let path_and_query = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| "/".to_string());
    let path = req.uri().path().to_string();

    match (&method, path.as_str()) {
        (&Method::GET, "/") => pages::home(ctx).await,
        (&Method::GET, "/courses") => pages::courses(ctx, &path_and_query).await,
        (&Method::GET, "/materials") => pages::materials(ctx).await,
        (&Method::GET, "/lectures") => pages::lectures(ctx).await,
        (&Method::GET, "/about") => pages::about(),
        (&Method::GET, "/testimonials") => pages::testimonials(ctx).await,
        (&Method::GET, "/register") => registration::form_page(ctx, &path_and_query).await,
        (&Method::POST, "/register") => {
            match read_body(req).await {
                Ok(body) => registration::submit(ctx, &body).await,
                Err(response) => response,
            }
        }
        (&Method::GET, "/contact") => contact::form_page(ctx, &path_and_query),
        (&Method::POST, "/contact") => {
            match read_body(req).await {
                Ok(body) => contact::submit(ctx, &body).await,
                Err(response) => response,
            }
        }
        (&Method::POST, "/payment/callback") => {
            match read_body(req).await {
                Ok(body) => payment::callback(ctx, &body).await,
                Err(response) => response,
            }
        }
        (&Method::GET, "/payment-success") => pages::payment_success(),
        (&Method::GET, "/payment-failed") => pages::payment_failed(),
        (&Method::GET, "/thank-you") => pages::thank_you(),
        (&Method::GET, "/health") => health(),
        (&Method::GET, _) if path.starts_with("/payment/") => {
            match path.trim_start_matches("/payment/").parse::<i64>() {
                Ok(participant_id) => payment::checkout(ctx, participant_id).await,
                Err(_) => not_found(),
            }
        }
        _ => not_found(),
    }
}

/// Collect a request body, answering 400 when it cannot be read
async fn read_body<B>(req: Request<B>) -> Result<Bytes, HttpResponse>
where
    B: Body,
    B::Error: std::fmt::Display,
{
    match req.into_body().collect().await {
        Ok(collected) => Ok(collected.to_bytes()),
        Err(e) => {
            warn!(error = %e, "Failed to read request body");
            Err(html(StatusCode::BAD_REQUEST, pages::error_page("Bad request")))
        }
    }
}

/// Build an HTML response
pub fn html(status: StatusCode, body: String) -> HttpResponse {
    Response::builder()
        .status(status)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Full::new(Bytes::from(body)))
        .expect("static response should not fail")
}

/// 303 redirect after a form submission or a handled failure
pub fn redirect(location: &str) -> HttpResponse {
    Response::builder()
        .status(StatusCode::SEE_OTHER)
        .header("Location", location)
        .body(Full::new(Bytes::new()))
        .expect("static response should not fail")
}

/// Redirect carrying a flash message in the query string
pub fn redirect_with_flash(path: &str, message: &str) -> HttpResponse {
    redirect(&format!("{}?error={}", path, urlencoding::encode(message)))
}

pub fn not_found() -> HttpResponse {
    html(StatusCode::NOT_FOUND, pages::error_page("Page not found"))
}

fn health() -> HttpResponse {
    Response::builder()
        .status(StatusCode::OK)
        .body(Full::new(Bytes::from("ok")))
        .expect("static response should not fail")
}

/// Convert a handler error into a redirect with a flash message, logged at
/// the severity the error reports
pub fn handle_error(err: &VidyaSetuError, fallback_path: &str, flash: &str) -> HttpResponse {
    match err.severity() {
        ErrorSeverity::Info | ErrorSeverity::Warning => {
            warn!(error = %err, path = fallback_path, "Request failed");
        }
        ErrorSeverity::Error | ErrorSeverity::Critical => {
            error!(error = %err, path = fallback_path, "Request failed");
        }
    }

    redirect_with_flash(fallback_path, flash)
}
