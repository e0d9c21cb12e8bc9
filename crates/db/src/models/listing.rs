//! Read-only rows produced by the listing queries.

use portal_core::application::ApplicationStatus;
use portal_core::project::ProjectStatus;
use portal_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A project with its owner and applicant count, for the public catalogue.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectListing {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub domain: String,
    pub required_skills: Vec<String>,
    pub seats_required: i32,
    pub application_deadline: Option<Timestamp>,
    #[sqlx(try_from = "String")]
    pub status: ProjectStatus,
    pub members: Vec<String>,
    pub attachment_urls: Vec<String>,
    pub created_at: Timestamp,
    pub faculty_id: DbId,
    pub faculty_name: String,
    pub faculty_email: String,
    pub applicant_count: i64,
}

/// An application on one of a faculty member's projects.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FacultyApplicationListing {
    pub id: DbId,
    pub project_id: DbId,
    pub project_title: String,
    pub student_id: DbId,
    pub student_name: String,
    pub student_email: String,
    pub student_program: Option<String>,
    pub student_skills: Vec<String>,
    pub cover_letter: String,
    #[sqlx(try_from = "String")]
    pub status: ApplicationStatus,
    pub feedback: Option<String>,
    pub interview_date: Option<Timestamp>,
    pub interview_location: Option<String>,
    pub interview_notes: Option<String>,
    pub version: i32,
    pub applied_at: Timestamp,
}

/// One entry of a student's own application list.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StudentApplicationView {
    pub id: DbId,
    pub project_id: DbId,
    pub project_title: String,
    pub faculty_id: DbId,
    pub faculty_name: String,
    #[sqlx(try_from = "String")]
    pub status: ApplicationStatus,
    pub applied_at: Timestamp,
    pub cover_letter: String,
}

/// One entry of the admin-wide application list.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AdminApplicationListing {
    pub id: DbId,
    pub project_id: DbId,
    pub project_title: String,
    pub faculty_id: DbId,
    pub faculty_name: String,
    pub student_id: DbId,
    pub student_name: String,
    pub student_email: String,
    pub applied_at: Timestamp,
    #[sqlx(try_from = "String")]
    pub status: ApplicationStatus,
}
