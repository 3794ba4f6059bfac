//! Study material and live lecture repository implementation

use sqlx::PgPool;
use crate::models::content::{
    CreateLiveLectureRequest, CreateStudyMaterialRequest, LiveLecture, StudyMaterial,
};
use crate::utils::errors::VidyaSetuError;

const MATERIAL_COLUMNS: &str = "id, course_id, title, file_path, price, published_at";
const LECTURE_COLUMNS: &str = "id, course_id, title, speaker, stream_url, schedule_time, created_at";

#[derive(Debug, Clone)]
pub struct ContentRepository {
    pool: PgPool,
}

impl ContentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Publish a study material (admin entry)
    pub async fn create_material(&self, request: CreateStudyMaterialRequest) -> Result<StudyMaterial, VidyaSetuError> {
        let material = sqlx::query_as::<_, StudyMaterial>(&format!(
            r#"
            INSERT INTO study_materials (course_id, title, file_path, price)
            VALUES ($1, $2, $3, $4)
            RETURNING {MATERIAL_COLUMNS}
            "#
        ))
        .bind(request.course_id)
        .bind(request.title)
        .bind(request.file_path)
        .bind(request.price)
        .fetch_one(&self.pool)
        .await?;

        Ok(material)
    }

    /// List materials, newest first
    pub async fn list_materials(&self) -> Result<Vec<StudyMaterial>, VidyaSetuError> {
        let materials = sqlx::query_as::<_, StudyMaterial>(&format!(
            "SELECT {MATERIAL_COLUMNS} FROM study_materials ORDER BY published_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(materials)
    }

    /// List the latest materials for the home page
    pub async fn list_latest_materials(&self, limit: i64) -> Result<Vec<StudyMaterial>, VidyaSetuError> {
        let materials = sqlx::query_as::<_, StudyMaterial>(&format!(
            "SELECT {MATERIAL_COLUMNS} FROM study_materials ORDER BY published_at DESC LIMIT $1"
        ))
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(materials)
    }

    /// Schedule a live lecture (admin entry)
    pub async fn create_lecture(&self, request: CreateLiveLectureRequest) -> Result<LiveLecture, VidyaSetuError> {
        let lecture = sqlx::query_as::<_, LiveLecture>(&format!(
            r#"
            INSERT INTO live_lectures (course_id, title, speaker, stream_url, schedule_time)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {LECTURE_COLUMNS}
            "#
        ))
        .bind(request.course_id)
        .bind(request.title)
        .bind(request.speaker)
        .bind(request.stream_url)
        .bind(request.schedule_time)
        .fetch_one(&self.pool)
        .await?;

        Ok(lecture)
    }

    /// List lectures by schedule time
    pub async fn list_lectures(&self) -> Result<Vec<LiveLecture>, VidyaSetuError> {
        let lectures = sqlx::query_as::<_, LiveLecture>(&format!(
            "SELECT {LECTURE_COLUMNS} FROM live_lectures ORDER BY schedule_time"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(lectures)
    }

    /// List the next few lectures for the home page
    pub async fn list_upcoming_lectures(&self, limit: i64) -> Result<Vec<LiveLecture>, VidyaSetuError> {
        let lectures = sqlx::query_as::<_, LiveLecture>(&format!(
            "SELECT {LECTURE_COLUMNS} FROM live_lectures ORDER BY schedule_time LIMIT $1"
        ))
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(lectures)
    }
}
