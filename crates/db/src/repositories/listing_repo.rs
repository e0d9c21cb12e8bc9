//! Read-only projection queries.
//!
//! Each listing is one join over `users`, `projects` and `applications`.
//! Nothing is cached, so every call reflects committed state.

use portal_core::types::DbId;
use sqlx::PgPool;

use crate::models::listing::{
    AdminApplicationListing, FacultyApplicationListing, ProjectListing, StudentApplicationView,
};

/// Provides the listing views.
pub struct ListingRepo;

impl ListingRepo {
    /// Every project with its owner and applicant count, newest first.
    pub async fn list_projects(pool: &PgPool) -> Result<Vec<ProjectListing>, sqlx::Error> {
        sqlx::query_as::<_, ProjectListing>(
            "SELECT p.id, p.title, p.description, p.domain, p.required_skills,
                    p.seats_required, p.application_deadline, p.status, p.members,
                    p.attachment_urls, p.created_at,
                    u.id AS faculty_id, u.name AS faculty_name, u.email AS faculty_email,
                    (SELECT COUNT(*) FROM applications a WHERE a.project_id = p.id)
                        AS applicant_count
             FROM projects p
             JOIN users u ON u.id = p.faculty_id
             ORDER BY p.created_at DESC, p.id DESC",
        )
        .fetch_all(pool)
        .await
    }

    /// Every application on any of `faculty_id`'s projects.
    pub async fn list_for_faculty(
        pool: &PgPool,
        faculty_id: DbId,
    ) -> Result<Vec<FacultyApplicationListing>, sqlx::Error> {
        sqlx::query_as::<_, FacultyApplicationListing>(
            "SELECT a.id, a.project_id, p.title AS project_title, a.student_id,
                    a.student_name, a.student_email, a.student_program, a.student_skills,
                    a.cover_letter, a.status, a.feedback, a.interview_date,
                    a.interview_location, a.interview_notes, a.version, a.applied_at
             FROM applications a
             JOIN projects p ON p.id = a.project_id
             WHERE p.faculty_id = $1
             ORDER BY a.applied_at DESC, a.id DESC",
        )
        .bind(faculty_id)
        .fetch_all(pool)
        .await
    }

    /// A student's own applications with project and faculty details.
    pub async fn list_for_student(
        pool: &PgPool,
        student_id: DbId,
    ) -> Result<Vec<StudentApplicationView>, sqlx::Error> {
        sqlx::query_as::<_, StudentApplicationView>(
            "SELECT a.id, a.project_id, p.title AS project_title,
                    u.id AS faculty_id, u.name AS faculty_name,
                    a.status, a.applied_at, a.cover_letter
             FROM applications a
             JOIN projects p ON p.id = a.project_id
             JOIN users u ON u.id = p.faculty_id
             WHERE a.student_id = $1
             ORDER BY a.applied_at DESC, a.id DESC",
        )
        .bind(student_id)
        .fetch_all(pool)
        .await
    }

    /// Every application in the system.
    pub async fn list_applications(
        pool: &PgPool,
    ) -> Result<Vec<AdminApplicationListing>, sqlx::Error> {
        sqlx::query_as::<_, AdminApplicationListing>(
            "SELECT a.id, a.project_id, p.title AS project_title,
                    u.id AS faculty_id, u.name AS faculty_name,
                    a.student_id, a.student_name, a.student_email,
                    a.applied_at, a.status
             FROM applications a
             JOIN projects p ON p.id = a.project_id
             JOIN users u ON u.id = p.faculty_id
             ORDER BY a.applied_at DESC, a.id DESC",
        )
        .fetch_all(pool)
        .await
    }
}
