//! Public page handlers
//!
//! Server-rendered listings and static-ish pages. Markup is deliberately
//! minimal; presentation lives with the deployed templates and assets.

use std::sync::Arc;
use hyper::StatusCode;
use crate::models::{Branch, Course, LiveLecture, StudyMaterial, Testimonial};
use crate::utils::helpers::{escape_html, format_fee, format_timestamp, parse_query_params};
use super::{handle_error, html, AppContext, HttpResponse};

/// Wrap page content in the shared document shell
pub fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>{} - VidyaSetu</title></head>
<body>
<nav><a href="/">Home</a> <a href="/courses">Courses</a> <a href="/materials">Materials</a> <a href="/lectures">Lectures</a> <a href="/register">Register</a> <a href="/testimonials">Testimonials</a> <a href="/about">About</a> <a href="/contact">Contact</a></nav>
<main>
{}
</main>
</body>
</html>"#,
        escape_html(title),
        body
    )
}

/// Simple error page body for 4xx responses
pub fn error_page(message: &str) -> String {
    layout("Error", &format!("<h1>{}</h1>", escape_html(message)))
}

/// Flash banner pulled from the `error` query parameter, if any
pub fn flash_banner(path_and_query: &str) -> String {
    match parse_query_params(path_and_query).get("error") {
        Some(message) => format!(r#"<p class="flash">{}</p>"#, escape_html(message)),
        None => String::new(),
    }
}

fn course_item(course: &Course) -> String {
    let short_desc = course.short_desc.as_deref().unwrap_or("");
    let duration = course.duration.as_deref().unwrap_or("");
    format!(
        "<li><strong>{}</strong> ({}) - {} <em>{}</em></li>",
        escape_html(&course.title),
        escape_html(duration),
        format_fee(course.fee),
        escape_html(short_desc),
    )
}

fn branch_item(branch: &Branch) -> String {
    format!(
        "<li><strong>{}</strong>, {}</li>",
        escape_html(&branch.name),
        escape_html(&branch.address),
    )
}

fn material_item(material: &StudyMaterial) -> String {
    format!(
        "<li>{} - {}</li>",
        escape_html(&material.title),
        format_fee(material.price),
    )
}

fn lecture_item(lecture: &LiveLecture) -> String {
    let speaker = lecture.speaker.as_deref().unwrap_or("TBA");
    format!(
        "<li>{} by {} at {}</li>",
        escape_html(&lecture.title),
        escape_html(speaker),
        format_timestamp(lecture.schedule_time),
    )
}

fn testimonial_item(testimonial: &Testimonial) -> String {
    format!(
        "<li><blockquote>{}</blockquote> - {}</li>",
        escape_html(&testimonial.message),
        escape_html(&testimonial.author_name),
    )
}

fn list<T>(items: &[T], render: impl Fn(&T) -> String) -> String {
    if items.is_empty() {
        "<p>Nothing here yet.</p>".to_string()
    } else {
        format!(
            "<ul>{}</ul>",
            items.iter().map(render).collect::<Vec<_>>().join("\n")
        )
    }
}

/// GET /
pub async fn home(ctx: Arc<AppContext>) -> HttpResponse {
    let page = ctx.services.catalog_service.home_page().await;

    let body = format!(
        "<h1>Welcome to VidyaSetu</h1>\n<h2>Our Branches</h2>\n{}\n<h2>Featured Courses</h2>\n{}\n<h2>Latest Study Materials</h2>\n{}\n<h2>Upcoming Live Lectures</h2>\n{}",
        list(&page.branches, branch_item),
        list(&page.featured_courses, course_item),
        list(&page.latest_materials, material_item),
        list(&page.upcoming_lectures, lecture_item),
    );

    html(StatusCode::OK, layout("Home", &body))
}

/// GET /courses
pub async fn courses(ctx: Arc<AppContext>, path_and_query: &str) -> HttpResponse {
    match ctx.services.catalog_service.active_courses().await {
        Ok(courses) => {
            let body = format!(
                "{}<h1>Courses</h1>\n{}\n<p><a href=\"/register\">Register now</a></p>",
                flash_banner(path_and_query),
                list(&courses, course_item),
            );
            html(StatusCode::OK, layout("Courses", &body))
        }
        Err(e) => handle_error(&e, "/", "Courses are unavailable right now."),
    }
}

/// GET /materials
pub async fn materials(ctx: Arc<AppContext>) -> HttpResponse {
    match ctx.services.catalog_service.materials().await {
        Ok(materials) => {
            let body = format!("<h1>Study Materials</h1>\n{}", list(&materials, material_item));
            html(StatusCode::OK, layout("Study Materials", &body))
        }
        Err(e) => handle_error(&e, "/", "Study materials are unavailable right now."),
    }
}

/// GET /lectures
pub async fn lectures(ctx: Arc<AppContext>) -> HttpResponse {
    match ctx.services.catalog_service.lectures().await {
        Ok(lectures) => {
            let body = format!("<h1>Live Lectures</h1>\n{}", list(&lectures, lecture_item));
            html(StatusCode::OK, layout("Live Lectures", &body))
        }
        Err(e) => handle_error(&e, "/", "Live lectures are unavailable right now."),
    }
}

/// GET /testimonials
pub async fn testimonials(ctx: Arc<AppContext>) -> HttpResponse {
    match ctx.services.catalog_service.testimonials().await {
        Ok(testimonials) => {
            let body = format!(
                "<h1>What Our Students Say</h1>\n{}",
                list(&testimonials, testimonial_item)
            );
            html(StatusCode::OK, layout("Testimonials", &body))
        }
        Err(e) => handle_error(&e, "/", "Testimonials are unavailable right now."),
    }
}

/// GET /about
pub fn about() -> HttpResponse {
    let body = "<h1>About Us</h1>\n<p>VidyaSetu prepares school students for competitive examinations across our branches.</p>";
    html(StatusCode::OK, layout("About", body))
}

/// GET /payment-success
pub fn payment_success() -> HttpResponse {
    let body = "<h1>Payment Successful</h1>\n<p>Your registration fee has been received.</p>\n<p><a href=\"/thank-you\">Continue</a></p>";
    html(StatusCode::OK, layout("Payment Successful", body))
}

/// GET /payment-failed
pub fn payment_failed() -> HttpResponse {
    let body = "<h1>Payment Failed</h1>\n<p>We could not confirm your payment. If any amount was deducted it will be refunded by the gateway.</p>\n<p><a href=\"/courses\">Back to courses</a></p>";
    html(StatusCode::OK, layout("Payment Failed", body))
}

/// GET /thank-you
pub fn thank_you() -> HttpResponse {
    let body = "<h1>Thank You!</h1>\n<p>Your registration is complete. We will contact you before the batch starts.</p>";
    html(StatusCode::OK, layout("Thank You", body))
}
