//! Contact message and testimonial repository implementation

use sqlx::PgPool;
use crate::models::feedback::{
    ContactMessage, CreateContactMessageRequest, CreateTestimonialRequest, Testimonial,
};
use crate::utils::errors::VidyaSetuError;

const CONTACT_COLUMNS: &str = "id, name, email, phone, message, responded, created_at";
const TESTIMONIAL_COLUMNS: &str = "id, author_name, message, is_published, created_at";

#[derive(Debug, Clone)]
pub struct FeedbackRepository {
    pool: PgPool,
}

impl FeedbackRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Store a submitted contact message
    pub async fn create_contact_message(&self, request: CreateContactMessageRequest) -> Result<ContactMessage, VidyaSetuError> {
        let message = sqlx::query_as::<_, ContactMessage>(&format!(
            r#"
            INSERT INTO contact_messages (name, email, phone, message)
            VALUES ($1, $2, $3, $4)
            RETURNING {CONTACT_COLUMNS}
            "#
        ))
        .bind(request.name)
        .bind(request.email)
        .bind(request.phone)
        .bind(request.message)
        .fetch_one(&self.pool)
        .await?;

        Ok(message)
    }

    /// Add a testimonial (admin entry)
    pub async fn create_testimonial(&self, request: CreateTestimonialRequest) -> Result<Testimonial, VidyaSetuError> {
        let testimonial = sqlx::query_as::<_, Testimonial>(&format!(
            r#"
            INSERT INTO testimonials (author_name, message, is_published)
            VALUES ($1, $2, $3)
            RETURNING {TESTIMONIAL_COLUMNS}
            "#
        ))
        .bind(request.author_name)
        .bind(request.message)
        .bind(request.is_published)
        .fetch_one(&self.pool)
        .await?;

        Ok(testimonial)
    }

    /// List published testimonials, newest first
    pub async fn list_published_testimonials(&self) -> Result<Vec<Testimonial>, VidyaSetuError> {
        let testimonials = sqlx::query_as::<_, Testimonial>(&format!(
            "SELECT {TESTIMONIAL_COLUMNS} FROM testimonials WHERE is_published = TRUE ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(testimonials)
    }
}
