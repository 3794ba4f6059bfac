//! Catalog listing tests
//!
//! Seeds content through the repositories and checks what the public
//! listings return. Ignored by default: requires Docker or
//! TEST_DATABASE_URL.

mod helpers;

use chrono::{Duration, Utc};
use serial_test::serial;
use helpers::TestDatabase;
use VidyaSetu::models::{
    CreateContactMessageRequest, CreateLiveLectureRequest, CreateStudyMaterialRequest,
    CreateTestimonialRequest,
};
use VidyaSetu::services::CatalogService;

fn catalog(db: &TestDatabase) -> CatalogService {
    let service = db.service();
    CatalogService::new(service.courses, service.content, service.feedback)
}

#[tokio::test]
#[serial]
#[ignore = "requires Docker or TEST_DATABASE_URL"]
async fn test_home_page_sections() {
    let db = TestDatabase::new().await.expect("test database");
    db.truncate_all().await.expect("clean slate");
    let course = db.seed_course(1_000).await.expect("seed course");

    let service = db.service();
    service
        .content
        .create_material(CreateStudyMaterialRequest {
            course_id: Some(course.id),
            title: "Algebra Notes".to_string(),
            file_path: "materials/algebra.pdf".to_string(),
            price: 0,
        })
        .await
        .expect("material persists");
    service
        .content
        .create_lecture(CreateLiveLectureRequest {
            course_id: Some(course.id),
            title: "Geometry Doubt Session".to_string(),
            speaker: Some("S. Iyer".to_string()),
            stream_url: "https://stream.example.com/geometry".to_string(),
            schedule_time: Utc::now() + Duration::days(2),
        })
        .await
        .expect("lecture persists");

    let page = catalog(&db).home_page().await;
    assert_eq!(page.branches.len(), 1);
    assert_eq!(page.featured_courses.len(), 1);
    assert_eq!(page.latest_materials.len(), 1);
    assert_eq!(page.upcoming_lectures.len(), 1);
    assert_eq!(page.latest_materials[0].title, "Algebra Notes");
}

#[tokio::test]
#[serial]
#[ignore = "requires Docker or TEST_DATABASE_URL"]
async fn test_only_published_testimonials_listed() {
    let db = TestDatabase::new().await.expect("test database");
    db.truncate_all().await.expect("clean slate");
    let service = db.service();

    service
        .feedback
        .create_testimonial(CreateTestimonialRequest {
            author_name: "Priya".to_string(),
            message: "Cleared the entrance in my first attempt.".to_string(),
            is_published: true,
        })
        .await
        .expect("testimonial persists");
    service
        .feedback
        .create_testimonial(CreateTestimonialRequest {
            author_name: "Draft".to_string(),
            message: "Pending moderation.".to_string(),
            is_published: false,
        })
        .await
        .expect("testimonial persists");

    let testimonials = catalog(&db).testimonials().await.expect("listing works");
    assert_eq!(testimonials.len(), 1);
    assert_eq!(testimonials[0].author_name, "Priya");
}

#[tokio::test]
#[serial]
#[ignore = "requires Docker or TEST_DATABASE_URL"]
async fn test_contact_message_stored() {
    let db = TestDatabase::new().await.expect("test database");
    db.truncate_all().await.expect("clean slate");
    let service = db.service();

    let message = service
        .feedback
        .create_contact_message(CreateContactMessageRequest {
            name: "Meena Joshi".to_string(),
            email: Some("meena@example.com".to_string()),
            phone: None,
            message: "Do you offer weekend batches?".to_string(),
        })
        .await
        .expect("message persists");

    assert!(!message.responded);
    assert_eq!(message.name, "Meena Joshi");
}

#[tokio::test]
#[serial]
#[ignore = "requires Docker or TEST_DATABASE_URL"]
async fn test_inactive_courses_hidden() {
    let db = TestDatabase::new().await.expect("test database");
    db.truncate_all().await.expect("clean slate");
    let course = db.seed_course(1_000).await.expect("seed course");

    sqlx::query("UPDATE courses SET is_active = FALSE WHERE id = $1")
        .bind(course.id)
        .execute(&db.pool)
        .await
        .expect("deactivate course");

    let courses = catalog(&db).active_courses().await.expect("listing works");
    assert!(courses.is_empty());
}
