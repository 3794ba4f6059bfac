//! Database service layer
//!
//! This module provides a high-level interface to database operations

use crate::database::{
    ContentRepository, CourseRepository, DatabasePool, FeedbackRepository, ParticipantRepository,
};

#[derive(Debug, Clone)]
pub struct DatabaseService {
    pub participants: ParticipantRepository,
    pub courses: CourseRepository,
    pub content: ContentRepository,
    pub feedback: FeedbackRepository,
}

impl DatabaseService {
    pub fn new(pool: DatabasePool) -> Self {
        Self {
            participants: ParticipantRepository::new(pool.clone()),
            courses: CourseRepository::new(pool.clone()),
            content: ContentRepository::new(pool.clone()),
            feedback: FeedbackRepository::new(pool),
        }
    }
}
