//! Data models module
//!
//! This module contains all data structures used throughout the application

pub mod participant;
pub mod course;
pub mod content;
pub mod feedback;

// Re-export commonly used models
pub use participant::{Participant, CreateParticipantRequest, Gender};
pub use course::{Branch, Course, CreateBranchRequest, CreateCourseRequest};
pub use content::{StudyMaterial, LiveLecture, CreateStudyMaterialRequest, CreateLiveLectureRequest};
pub use feedback::{ContactMessage, Testimonial, CreateContactMessageRequest, CreateTestimonialRequest};
