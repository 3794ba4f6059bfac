//! Course and branch models

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Branch {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
    pub map_embed: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Course {
    pub id: i64,
    pub branch_id: i64,
    pub title: String,
    pub short_desc: Option<String>,
    pub description: Option<String>,
    /// Whole rupees; converted to paise only when a gateway order is created
    pub fee: i32,
    pub duration: Option<String>,
    pub thumbnail: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBranchRequest {
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
    pub map_embed: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCourseRequest {
    pub branch_id: i64,
    pub title: String,
    pub short_desc: Option<String>,
    pub description: Option<String>,
    pub fee: i32,
    pub duration: Option<String>,
    pub thumbnail: Option<String>,
}
