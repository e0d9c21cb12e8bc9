//! Student-scoped application routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use portal_core::access::{can_view_student_applications, require};
use portal_core::error::CoreError;
use portal_core::types::DbId;
use portal_db::models::application::{Application, SubmitApplication};
use portal_db::models::listing::StudentApplicationView;
use portal_db::repositories::{ListingRepo, UserRepo};

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::lifecycle::ApplicationLifecycle;
use crate::middleware::auth::AuthUser;
use crate::response::MessageResponse;
use crate::state::AppState;

/// POST /api/v1/students/{student_id}/applications
pub async fn submit(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(student_id): Path<DbId>,
    AppJson(input): AppJson<SubmitApplication>,
) -> AppResult<(StatusCode, Json<Application>)> {
    let application = ApplicationLifecycle::from_state(&state)
        .submit(student_id, &input, &auth.principal())
        .await?;
    Ok((StatusCode::CREATED, Json(application)))
}

/// GET /api/v1/students/{student_id}/applications
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(student_id): Path<DbId>,
) -> AppResult<Json<Vec<StudentApplicationView>>> {
    require(
        can_view_student_applications(&auth.principal(), student_id),
        "Not authorized to view these applications",
    )?;
    UserRepo::find_by_id(&state.pool, student_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Student",
            id: student_id,
        })?;
    let applications = ListingRepo::list_for_student(&state.pool, student_id).await?;
    Ok(Json(applications))
}

/// DELETE /api/v1/students/{student_id}/applications/{application_id}
///
/// The path's student must be the caller, whether or not the application
/// exists.
pub async fn withdraw(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((student_id, application_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<MessageResponse>> {
    require(
        auth.user_id == student_id,
        "Not authorized to withdraw application for another student",
    )?;
    ApplicationLifecycle::from_state(&state)
        .withdraw(application_id, &auth.principal())
        .await?;
    Ok(Json(MessageResponse::new("Application withdrawn successfully")))
}
