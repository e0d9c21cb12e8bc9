//! Handlers for the `/applications` resource, which address an
//! application by its own ID rather than through its owners.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use portal_core::types::DbId;
use portal_db::models::application::{Application, SubmitApplication, TransitionRequest};

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::lifecycle::ApplicationLifecycle;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireStudent;
use crate::response::{MessageResponse, TransitionResponse};
use crate::state::AppState;

/// POST /api/v1/applications
///
/// Submit on behalf of the calling student.
pub async fn submit(
    State(state): State<AppState>,
    RequireStudent(auth): RequireStudent,
    AppJson(input): AppJson<SubmitApplication>,
) -> AppResult<(StatusCode, Json<Application>)> {
    let application = ApplicationLifecycle::from_state(&state)
        .submit(auth.user_id, &input, &auth.principal())
        .await?;
    Ok((StatusCode::CREATED, Json(application)))
}

/// PUT /api/v1/applications/{application_id}/status
pub async fn update_status(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(application_id): Path<DbId>,
    AppJson(input): AppJson<TransitionRequest>,
) -> AppResult<Json<TransitionResponse>> {
    let application = ApplicationLifecycle::from_state(&state)
        .transition_by_id(application_id, &input, &auth.principal())
        .await?;
    Ok(Json(TransitionResponse {
        message: "Application status updated successfully".to_string(),
        application,
    }))
}

/// DELETE /api/v1/applications/{application_id}
pub async fn withdraw(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(application_id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    ApplicationLifecycle::from_state(&state)
        .withdraw(application_id, &auth.principal())
        .await?;
    Ok(Json(MessageResponse::new("Application withdrawn successfully")))
}
