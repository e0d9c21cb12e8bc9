//! Faculty-scoped application views and the path-addressed transition.

use axum::extract::{Path, State};
use axum::Json;
use portal_core::access::{can_view_applications, require};
use portal_core::error::CoreError;
use portal_core::types::DbId;
use portal_db::models::application::{Application, TransitionRequest};
use portal_db::models::listing::FacultyApplicationListing;
use portal_db::repositories::{ApplicationRepo, ListingRepo, ProjectRepo};

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::handlers::project::ensure_faculty;
use crate::lifecycle::ApplicationLifecycle;
use crate::middleware::auth::AuthUser;
use crate::response::TransitionResponse;
use crate::state::AppState;

/// GET /api/v1/faculty/{faculty_id}/applications
///
/// Every application across the faculty member's projects.
pub async fn list_applications(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(faculty_id): Path<DbId>,
) -> AppResult<Json<Vec<FacultyApplicationListing>>> {
    require(
        can_view_applications(&auth.principal(), faculty_id),
        "Not authorized to view these applications",
    )?;
    ensure_faculty(&state, faculty_id).await?;
    let applications = ListingRepo::list_for_faculty(&state.pool, faculty_id).await?;
    Ok(Json(applications))
}

/// GET /api/v1/faculty/{faculty_id}/projects/{project_id}/applications
pub async fn list_project_applications(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((faculty_id, project_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<Vec<Application>>> {
    require(
        can_view_applications(&auth.principal(), faculty_id),
        "Not authorized to view these applications",
    )?;
    ensure_faculty(&state, faculty_id).await?;
    ProjectRepo::find_for_faculty(&state.pool, faculty_id, project_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        })?;
    let applications = ApplicationRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(applications))
}

/// PUT /api/v1/faculty/{faculty_id}/projects/{project_id}/applications/{application_id}
pub async fn transition(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((faculty_id, project_id, application_id)): Path<(DbId, DbId, DbId)>,
    AppJson(input): AppJson<TransitionRequest>,
) -> AppResult<Json<TransitionResponse>> {
    let application = ApplicationLifecycle::from_state(&state)
        .transition(faculty_id, project_id, application_id, &input, &auth.principal())
        .await?;
    Ok(Json(TransitionResponse {
        message: "Application status updated successfully".to_string(),
        application,
    }))
}
