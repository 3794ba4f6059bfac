//! Course and branch repository implementation

use sqlx::PgPool;
use chrono::Utc;
use crate::models::course::{Branch, Course, CreateBranchRequest, CreateCourseRequest};
use crate::utils::errors::VidyaSetuError;

const COURSE_COLUMNS: &str = "id, branch_id, title, short_desc, description, fee, duration, thumbnail, is_active, created_at, updated_at";
const BRANCH_COLUMNS: &str = "id, name, address, phone, map_embed, created_at";

#[derive(Debug, Clone)]
pub struct CourseRepository {
    pool: PgPool,
}

impl CourseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new course (admin entry)
    pub async fn create(&self, request: CreateCourseRequest) -> Result<Course, VidyaSetuError> {
        let course = sqlx::query_as::<_, Course>(&format!(
            r#"
            INSERT INTO courses (branch_id, title, short_desc, description, fee, duration, thumbnail, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {COURSE_COLUMNS}
            "#
        ))
        .bind(request.branch_id)
        .bind(request.title)
        .bind(request.short_desc)
        .bind(request.description)
        .bind(request.fee)
        .bind(request.duration)
        .bind(request.thumbnail)
        .bind(Utc::now())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(course)
    }

    /// Find course by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Course>, VidyaSetuError> {
        let course = sqlx::query_as::<_, Course>(&format!(
            "SELECT {COURSE_COLUMNS} FROM courses WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(course)
    }

    /// List active courses
    pub async fn list_active(&self) -> Result<Vec<Course>, VidyaSetuError> {
        let courses = sqlx::query_as::<_, Course>(&format!(
            "SELECT {COURSE_COLUMNS} FROM courses WHERE is_active = TRUE ORDER BY created_at"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(courses)
    }

    /// List the first few active courses for the home page
    pub async fn list_featured(&self, limit: i64) -> Result<Vec<Course>, VidyaSetuError> {
        let courses = sqlx::query_as::<_, Course>(&format!(
            "SELECT {COURSE_COLUMNS} FROM courses WHERE is_active = TRUE ORDER BY created_at LIMIT $1"
        ))
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(courses)
    }

    /// Create a new branch (admin entry)
    pub async fn create_branch(&self, request: CreateBranchRequest) -> Result<Branch, VidyaSetuError> {
        let branch = sqlx::query_as::<_, Branch>(&format!(
            r#"
            INSERT INTO branches (name, address, phone, map_embed, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {BRANCH_COLUMNS}
            "#
        ))
        .bind(request.name)
        .bind(request.address)
        .bind(request.phone)
        .bind(request.map_embed)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(branch)
    }

    /// List all branches
    pub async fn list_branches(&self) -> Result<Vec<Branch>, VidyaSetuError> {
        let branches = sqlx::query_as::<_, Branch>(&format!(
            "SELECT {BRANCH_COLUMNS} FROM branches ORDER BY name"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(branches)
    }
}
