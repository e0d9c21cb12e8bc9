//! Admin-only handlers: user management and global listings.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use portal_db::models::listing::{AdminApplicationListing, ProjectListing};
use portal_db::models::user::UserResponse;
use portal_db::repositories::{ListingRepo, UserRepo};

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::handlers::auth::{register_user, SignupRequest};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// GET /api/v1/admin/users
pub async fn list_users(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<UserResponse>>> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(users.iter().map(UserResponse::from).collect()))
}

/// POST /api/v1/admin/users
///
/// Unlike signup, any role may be created here, including another admin.
pub async fn create_user(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    AppJson(input): AppJson<SignupRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let user = register_user(&state, &input).await?;
    tracing::info!(admin_id = admin.user_id, user_id = user.id, role = %user.role, "Admin created user");
    Ok((StatusCode::CREATED, Json(UserResponse::from(&user))))
}

/// GET /api/v1/admin/projects
pub async fn list_projects(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ProjectListing>>> {
    let projects = ListingRepo::list_projects(&state.pool).await?;
    Ok(Json(projects))
}

/// GET /api/v1/admin/applications
pub async fn list_applications(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<AdminApplicationListing>>> {
    let applications = ListingRepo::list_applications(&state.pool).await?;
    Ok(Json(applications))
}
