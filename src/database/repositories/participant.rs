//! Participant repository implementation

use sqlx::PgPool;
use chrono::Utc;
use crate::models::participant::{CreateParticipantRequest, Participant};
use crate::utils::errors::VidyaSetuError;

const PARTICIPANT_COLUMNS: &str = "id, full_name, dob, gender, photo, school_name, school_class, school_address, phone_number, email, course_id, payment_completed, gateway_order_id, gateway_payment_id, created_at, updated_at";

#[derive(Debug, Clone)]
pub struct ParticipantRepository {
    pool: PgPool,
}

impl ParticipantRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persist a validated registration
    pub async fn create(&self, request: CreateParticipantRequest) -> Result<Participant, VidyaSetuError> {
        let participant = sqlx::query_as::<_, Participant>(&format!(
            r#"
            INSERT INTO participants (full_name, dob, gender, photo, school_name, school_class, school_address, phone_number, email, course_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING {PARTICIPANT_COLUMNS}
            "#
        ))
        .bind(request.full_name)
        .bind(request.dob)
        .bind(request.gender.as_str())
        .bind(request.photo)
        .bind(request.school_name)
        .bind(request.school_class)
        .bind(request.school_address)
        .bind(request.phone_number)
        .bind(request.email)
        .bind(request.course_id)
        .bind(Utc::now())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(participant)
    }

    /// Find participant by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Participant>, VidyaSetuError> {
        let participant = sqlx::query_as::<_, Participant>(&format!(
            "SELECT {PARTICIPANT_COLUMNS} FROM participants WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(participant)
    }

    /// Find participant by the gateway order stored on it
    pub async fn find_by_order_id(&self, order_id: &str) -> Result<Option<Participant>, VidyaSetuError> {
        let participant = sqlx::query_as::<_, Participant>(&format!(
            "SELECT {PARTICIPANT_COLUMNS} FROM participants WHERE gateway_order_id = $1"
        ))
        .bind(order_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(participant)
    }

    /// Store the gateway order created for this registration
    pub async fn set_order_id(&self, id: i64, order_id: &str) -> Result<Participant, VidyaSetuError> {
        let participant = sqlx::query_as::<_, Participant>(&format!(
            r#"
            UPDATE participants
            SET gateway_order_id = $2, updated_at = $3
            WHERE id = $1
            RETURNING {PARTICIPANT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(order_id)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(participant)
    }

    /// Mark a registration paid and record the gateway payment id.
    ///
    /// Re-running this for an already-paid registration is a no-op update:
    /// the flag stays true, so the false-to-true transition happens at most
    /// once per registration.
    pub async fn mark_paid(&self, id: i64, payment_id: &str) -> Result<Participant, VidyaSetuError> {
        let participant = sqlx::query_as::<_, Participant>(&format!(
            r#"
            UPDATE participants
            SET payment_completed = TRUE, gateway_payment_id = $2, updated_at = $3
            WHERE id = $1
            RETURNING {PARTICIPANT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(payment_id)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(participant)
    }

    /// Count total registrations
    pub async fn count(&self) -> Result<i64, VidyaSetuError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM participants")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }
}
