//! Registration form handlers

use std::sync::Arc;
use chrono::Utc;
use hyper::StatusCode;
use tracing::info;
use crate::models::Course;
use crate::services::RegistrationForm;
use crate::utils::helpers::{escape_html, format_fee, parse_form_params};
use crate::utils::validation::FieldError;
use super::{handle_error, html, pages, redirect, AppContext, HttpResponse};

fn field_error_for(errors: &[FieldError], field: &str) -> String {
    errors
        .iter()
        .find(|e| e.field == field)
        .map(|e| format!(r#" <span class="field-error">{}</span>"#, escape_html(&e.message)))
        .unwrap_or_default()
}

fn course_options(courses: &[Course], selected: &str) -> String {
    let mut options = String::from(r#"<option value="">Select a course</option>"#);
    for course in courses {
        let value = course.id.to_string();
        let marker = if value == selected { " selected" } else { "" };
        options.push_str(&format!(
            r#"<option value="{}"{}>{} ({})</option>"#,
            value,
            marker,
            escape_html(&course.title),
            format_fee(course.fee),
        ));
    }
    options
}

/// Render the registration form, echoing prior input and per-field errors
fn render_form(
    courses: &[Course],
    form: &RegistrationForm,
    errors: &[FieldError],
    flash: &str,
) -> String {
    let body = format!(
        r#"{flash}<h1>Participant Registration</h1>
<form method="post" action="/register">
<p><label>Full name <input name="full_name" value="{full_name}"></label>{e_full_name}</p>
<p><label>Date of birth <input type="date" name="dob" value="{dob}"></label>{e_dob}</p>
<p><label>Gender <select name="gender">
<option value="">Select Gender</option>
<option value="Male"{male}>Male</option>
<option value="Female"{female}>Female</option>
<option value="Other"{other}>Other</option>
</select></label>{e_gender}</p>
<p><label>Photo (uploaded file name) <input name="photo" value="{photo}"></label>{e_photo}</p>
<input type="hidden" name="photo_size" value="{photo_size}">
<p><label>School name <input name="school_name" value="{school_name}"></label>{e_school_name}</p>
<p><label>Class (1-12) <input name="school_class" value="{school_class}"></label>{e_school_class}</p>
<p><label>School address <input name="school_address" value="{school_address}"></label>{e_school_address}</p>
<p><label>Phone number <input name="phone_number" inputmode="numeric" value="{phone_number}"></label>{e_phone_number}</p>
<p><label>Email (optional) <input name="email" value="{email}"></label>{e_email}</p>
<p><label>Course <select name="course_id">{courses}</select></label>{e_course_id}</p>
<p><button type="submit">Register</button></p>
</form>"#,
        flash = flash,
        full_name = escape_html(&form.full_name),
        dob = escape_html(&form.dob),
        male = if form.gender == "Male" { " selected" } else { "" },
        female = if form.gender == "Female" { " selected" } else { "" },
        other = if form.gender == "Other" { " selected" } else { "" },
        photo = escape_html(&form.photo),
        photo_size = escape_html(&form.photo_size),
        school_name = escape_html(&form.school_name),
        school_class = escape_html(&form.school_class),
        school_address = escape_html(&form.school_address),
        phone_number = escape_html(&form.phone_number),
        email = escape_html(&form.email),
        courses = course_options(courses, form.course_id.trim()),
        e_full_name = field_error_for(errors, "full_name"),
        e_dob = field_error_for(errors, "dob"),
        e_gender = field_error_for(errors, "gender"),
        e_photo = field_error_for(errors, "photo"),
        e_school_name = field_error_for(errors, "school_name"),
        e_school_class = field_error_for(errors, "school_class"),
        e_school_address = field_error_for(errors, "school_address"),
        e_phone_number = field_error_for(errors, "phone_number"),
        e_email = field_error_for(errors, "email"),
        e_course_id = field_error_for(errors, "course_id"),
    );

    pages::layout("Register", &body)
}

/// GET /register
pub async fn form_page(ctx: Arc<AppContext>, path_and_query: &str) -> HttpResponse {
    let courses = match ctx.services.catalog_service.active_courses().await {
        Ok(courses) => courses,
        Err(e) => return handle_error(&e, "/", "Registration is unavailable right now."),
    };

    let flash = pages::flash_banner(path_and_query);
    html(
        StatusCode::OK,
        render_form(&courses, &RegistrationForm::default(), &[], &flash),
    )
}

/// POST /register
pub async fn submit(ctx: Arc<AppContext>, body: &[u8]) -> HttpResponse {
    let params = parse_form_params(body);
    let form = RegistrationForm::from_params(&params);

    let request = match ctx
        .services
        .registration_service
        .validate(&form, Utc::now().date_naive())
    {
        Ok(request) => request,
        Err(errors) => {
            info!(error_count = errors.len(), "Registration form rejected");
            let courses = ctx
                .services
                .catalog_service
                .active_courses()
                .await
                .unwrap_or_default();
            return html(StatusCode::OK, render_form(&courses, &form, &errors, ""));
        }
    };

    match ctx.services.registration_service.register(request).await {
        Ok(participant) => redirect(&format!("/payment/{}", participant.id)),
        Err(e) => handle_error(&e, "/register", "Could not save your registration. Please try again."),
    }
}
