//! Contact form handlers

use std::sync::Arc;
use hyper::StatusCode;
use tracing::info;
use crate::services::ContactForm;
use crate::utils::helpers::{escape_html, parse_form_params};
use crate::utils::validation::FieldError;
use super::{handle_error, html, pages, redirect, AppContext, HttpResponse};

fn field_error_for(errors: &[FieldError], field: &str) -> String {
    errors
        .iter()
        .find(|e| e.field == field)
        .map(|e| format!(r#" <span class="field-error">{}</span>"#, escape_html(&e.message)))
        .unwrap_or_default()
}

fn render_form(form: &ContactForm, errors: &[FieldError], flash: &str) -> String {
    let body = format!(
        r#"{flash}<h1>Contact Us</h1>
<form method="post" action="/contact">
<p><label>Name <input name="name" value="{name}"></label>{e_name}</p>
<p><label>Email (optional) <input name="email" value="{email}"></label>{e_email}</p>
<p><label>Phone (optional) <input name="phone" value="{phone}"></label></p>
<p><label>Message <textarea name="message">{message}</textarea></label>{e_message}</p>
<p><button type="submit">Send</button></p>
</form>"#,
        flash = flash,
        name = escape_html(&form.name),
        email = escape_html(&form.email),
        phone = escape_html(&form.phone),
        message = escape_html(&form.message),
        e_name = field_error_for(errors, "name"),
        e_email = field_error_for(errors, "email"),
        e_message = field_error_for(errors, "message"),
    );

    pages::layout("Contact", &body)
}

/// GET /contact
pub fn form_page(_ctx: Arc<AppContext>, path_and_query: &str) -> HttpResponse {
    let flash = pages::flash_banner(path_and_query);
    html(StatusCode::OK, render_form(&ContactForm::default(), &[], &flash))
}

/// POST /contact
pub async fn submit(ctx: Arc<AppContext>, body: &[u8]) -> HttpResponse {
    let params = parse_form_params(body);
    let form = ContactForm::from_params(&params);

    let request = match ctx.services.contact_service.validate(&form) {
        Ok(request) => request,
        Err(errors) => {
            info!(error_count = errors.len(), "Contact form rejected");
            return html(StatusCode::OK, render_form(&form, &errors, ""));
        }
    };

    match ctx.services.contact_service.submit(request).await {
        Ok(_) => redirect("/thank-you"),
        Err(e) => handle_error(&e, "/contact", "Could not send your message. Please try again."),
    }
}
