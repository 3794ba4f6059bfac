//! Study material and live lecture models

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StudyMaterial {
    pub id: i64,
    pub course_id: Option<i64>,
    pub title: String,
    pub file_path: String,
    /// Whole rupees; 0 means free
    pub price: i32,
    pub published_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LiveLecture {
    pub id: i64,
    pub course_id: Option<i64>,
    pub title: String,
    pub speaker: Option<String>,
    pub stream_url: String,
    pub schedule_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateStudyMaterialRequest {
    pub course_id: Option<i64>,
    pub title: String,
    pub file_path: String,
    pub price: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLiveLectureRequest {
    pub course_id: Option<i64>,
    pub title: String,
    pub speaker: Option<String>,
    pub stream_url: String,
    pub schedule_time: DateTime<Utc>,
}
