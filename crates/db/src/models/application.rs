//! Application entity model and DTOs.

use portal_core::application::ApplicationStatus;
use portal_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

/// An application row from the `applications` table.
///
/// The `student_*` columns are a snapshot taken at submission and are
/// never refreshed from `users`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Application {
    pub id: DbId,
    pub project_id: DbId,
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
    /// Incremented on every status transition.
    pub version: i32,
    pub applied_at: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting an application. Status always starts at `Applied`.
#[derive(Debug, Clone)]
pub struct CreateApplication {
    pub project_id: DbId,
    pub student_id: DbId,
    pub student_name: String,
    pub student_email: String,
    pub student_program: Option<String>,
    pub student_skills: Vec<String>,
    pub cover_letter: String,
}

/// Submission request body.
///
/// `student_id` is taken from the path or the bearer token, never from
/// the body. The target ids stay raw JSON so a missing or mistyped id is
/// reported by the lifecycle after its authorization check.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitApplication {
    pub project_id: Option<Value>,
    pub faculty_id: Option<Value>,
    pub cover_letter: Option<String>,
    pub student_program: Option<String>,
    pub student_skills: Option<Vec<String>>,
}

impl SubmitApplication {
    pub fn project_id(&self) -> Option<DbId> {
        self.project_id.as_ref().and_then(Value::as_i64)
    }

    pub fn faculty_id(&self) -> Option<DbId> {
        self.faculty_id.as_ref().and_then(Value::as_i64)
    }
}

/// Transition request body.
///
/// `status` stays raw JSON so an absent, null, mistyped or out-of-range
/// value surfaces as a validation error in the lifecycle's check order
/// instead of a JSON rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct TransitionRequest {
    pub status: Option<Value>,
    pub expected_version: Option<i32>,
    pub feedback: Option<String>,
    pub interview_date: Option<Timestamp>,
    pub interview_location: Option<String>,
    pub interview_notes: Option<String>,
}

impl TransitionRequest {
    /// The requested status text, if the body carried a string.
    pub fn status_text(&self) -> Option<&str> {
        self.status.as_ref().and_then(Value::as_str)
    }
}

/// Column values written by a transition. `None` extras keep their value.
#[derive(Debug, Clone)]
pub struct StatusUpdate {
    pub status: ApplicationStatus,
    pub feedback: Option<String>,
    pub interview_date: Option<Timestamp>,
    pub interview_location: Option<String>,
    pub interview_notes: Option<String>,
}
