//! Catalog service implementation
//!
//! Read-side listings for the public site: branches, courses, study
//! materials, live lectures and testimonials.

use tracing::{debug, warn};
use crate::database::repositories::{ContentRepository, CourseRepository, FeedbackRepository};
use crate::models::{Branch, Course, LiveLecture, StudyMaterial, Testimonial};
use crate::utils::errors::Result;

/// Home page section limits
const FEATURED_COURSES: i64 = 6;
const LATEST_MATERIALS: i64 = 6;
const UPCOMING_LECTURES: i64 = 5;

/// Everything the home page shows
#[derive(Debug, Clone, Default)]
pub struct HomePage {
    pub branches: Vec<Branch>,
    pub featured_courses: Vec<Course>,
    pub latest_materials: Vec<StudyMaterial>,
    pub upcoming_lectures: Vec<LiveLecture>,
}

/// Catalog service for public listings
#[derive(Debug, Clone)]
pub struct CatalogService {
    courses: CourseRepository,
    content: ContentRepository,
    feedback: FeedbackRepository,
}

impl CatalogService {
    /// Create a new CatalogService instance
    pub fn new(
        courses: CourseRepository,
        content: ContentRepository,
        feedback: FeedbackRepository,
    ) -> Self {
        Self {
            courses,
            content,
            feedback,
        }
    }

    /// Collect the home page sections.
    ///
    /// A failing section logs and renders empty; the home page itself never
    /// errors out.
    pub async fn home_page(&self) -> HomePage {
        let branches = match self.courses.list_branches().await {
            Ok(branches) => branches,
            Err(e) => {
                warn!(error = %e, "Failed to load branches for home page");
                Vec::new()
            }
        };

        let featured_courses = match self.courses.list_featured(FEATURED_COURSES).await {
            Ok(courses) => courses,
            Err(e) => {
                warn!(error = %e, "Failed to load featured courses for home page");
                Vec::new()
            }
        };

        let latest_materials = match self.content.list_latest_materials(LATEST_MATERIALS).await {
            Ok(materials) => materials,
            Err(e) => {
                warn!(error = %e, "Failed to load latest materials for home page");
                Vec::new()
            }
        };

        let upcoming_lectures = match self.content.list_upcoming_lectures(UPCOMING_LECTURES).await {
            Ok(lectures) => lectures,
            Err(e) => {
                warn!(error = %e, "Failed to load upcoming lectures for home page");
                Vec::new()
            }
        };

        HomePage {
            branches,
            featured_courses,
            latest_materials,
            upcoming_lectures,
        }
    }

    /// Active courses for the catalog and the registration form select
    pub async fn active_courses(&self) -> Result<Vec<Course>> {
        debug!("Listing active courses");
        self.courses.list_active().await
    }

    /// All study materials, newest first
    pub async fn materials(&self) -> Result<Vec<StudyMaterial>> {
        debug!("Listing study materials");
        self.content.list_materials().await
    }

    /// All live lectures by schedule time
    pub async fn lectures(&self) -> Result<Vec<LiveLecture>> {
        debug!("Listing live lectures");
        self.content.list_lectures().await
    }

    /// Published testimonials
    pub async fn testimonials(&self) -> Result<Vec<Testimonial>> {
        debug!("Listing testimonials");
        self.feedback.list_published_testimonials().await
    }
}
