//! Handlers for projects: the public catalogue and faculty-owned CRUD.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use portal_core::access::{can_mutate_project, require};
use portal_core::error::CoreError;
use portal_core::project::{clean_list, validate_required_text, validate_seats_required};
use portal_core::roles::Role;
use portal_core::types::DbId;
use portal_db::models::listing::ProjectListing;
use portal_db::models::project::{CreateProject, Project, UpdateProject};
use portal_db::repositories::{ListingRepo, ProjectRepo, UserRepo};

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /api/v1/projects
///
/// Public. Every project with its owner and applicant count.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ProjectListing>>> {
    let projects = ListingRepo::list_projects(&state.pool).await?;
    Ok(Json(projects))
}

/// GET /api/v1/faculty/{faculty_id}/projects
pub async fn list_for_faculty(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(faculty_id): Path<DbId>,
) -> AppResult<Json<Vec<Project>>> {
    require(
        can_mutate_project(&auth.principal(), faculty_id),
        "Not authorized to view these projects",
    )?;
    ensure_faculty(&state, faculty_id).await?;
    let projects = ProjectRepo::list_by_faculty(&state.pool, faculty_id).await?;
    Ok(Json(projects))
}

/// POST /api/v1/faculty/{faculty_id}/projects
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(faculty_id): Path<DbId>,
    AppJson(mut input): AppJson<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    require(
        can_mutate_project(&auth.principal(), faculty_id),
        "Not authorized to add projects for this faculty",
    )?;
    ensure_faculty(&state, faculty_id).await?;

    validate_required_text("title", &input.title)?;
    validate_required_text("description", &input.description)?;
    if let Some(seats) = input.seats_required {
        validate_seats_required(seats)?;
    }
    input.required_skills = input.required_skills.map(clean_list);
    input.members = input.members.map(clean_list);
    input.attachment_urls = input.attachment_urls.map(clean_list);

    let project = ProjectRepo::create(&state.pool, faculty_id, &input).await?;
    tracing::info!(user_id = auth.user_id, project_id = project.id, faculty_id, "Project created");
    Ok((StatusCode::CREATED, Json(project)))
}

/// PUT /api/v1/faculty/{faculty_id}/projects/{project_id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((faculty_id, project_id)): Path<(DbId, DbId)>,
    AppJson(mut input): AppJson<UpdateProject>,
) -> AppResult<Json<Project>> {
    require(
        can_mutate_project(&auth.principal(), faculty_id),
        "Not authorized to update this project",
    )?;
    ensure_faculty(&state, faculty_id).await?;

    if let Some(title) = &input.title {
        validate_required_text("title", title)?;
    }
    if let Some(description) = &input.description {
        validate_required_text("description", description)?;
    }
    if let Some(seats) = input.seats_required {
        validate_seats_required(seats)?;
    }
    input.required_skills = input.required_skills.map(clean_list);
    input.members = input.members.map(clean_list);
    input.attachment_urls = input.attachment_urls.map(clean_list);

    let project = ProjectRepo::update(&state.pool, faculty_id, project_id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        })?;
    Ok(Json(project))
}

/// DELETE /api/v1/faculty/{faculty_id}/projects/{project_id}
///
/// Applications on the project go with it.
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((faculty_id, project_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<MessageResponse>> {
    require(
        can_mutate_project(&auth.principal(), faculty_id),
        "Not authorized to delete this project",
    )?;
    ensure_faculty(&state, faculty_id).await?;

    let deleted = ProjectRepo::delete(&state.pool, faculty_id, project_id).await?;
    if !deleted {
        return Err(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        }
        .into());
    }
    tracing::info!(user_id = auth.user_id, project_id, faculty_id, "Project deleted");
    Ok(Json(MessageResponse::new("Project deleted successfully")))
}

/// The path's faculty must be an existing faculty account.
pub(crate) async fn ensure_faculty(state: &AppState, faculty_id: DbId) -> AppResult<()> {
    UserRepo::find_with_role(&state.pool, faculty_id, Role::Faculty)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Faculty",
            id: faculty_id,
        })?;
    Ok(())
}
