//! Project entity model and DTOs.

use portal_core::project::ProjectStatus;
use portal_core::types::{DbId, Timestamp};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub faculty_id: DbId,
    pub title: String,
    pub description: String,
    pub domain: String,
    pub required_skills: Vec<String>,
    pub seats_required: i32,
    pub application_deadline: Option<Timestamp>,
    #[sqlx(try_from = "String")]
    pub status: ProjectStatus,
    /// Ordered team-member names. Selected applicants are appended here.
    pub members: Vec<String>,
    pub attachment_urls: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a project. The owning faculty comes from the path.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub title: String,
    pub description: String,
    pub domain: Option<String>,
    pub required_skills: Option<Vec<String>>,
    /// Defaults to 1 if omitted.
    pub seats_required: Option<i32>,
    pub application_deadline: Option<Timestamp>,
    /// Defaults to `Planning` if omitted.
    pub status: Option<ProjectStatus>,
    pub members: Option<Vec<String>>,
    pub attachment_urls: Option<Vec<String>>,
}

/// DTO for updating an existing project. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProject {
    pub title: Option<String>,
    pub description: Option<String>,
    pub domain: Option<String>,
    pub required_skills: Option<Vec<String>>,
    pub seats_required: Option<i32>,
    /// Absent keeps the stored deadline, `null` clears it.
    #[serde(default, deserialize_with = "present")]
    pub application_deadline: Option<Option<Timestamp>>,
    pub status: Option<ProjectStatus>,
    pub members: Option<Vec<String>>,
    pub attachment_urls: Option<Vec<String>>,
}

/// Mark a field as present even when its value is `null`, so a patch can
/// tell "clear" apart from "leave alone".
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
