//! Route definitions for the `/faculty` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::{faculty, project};
use crate::state::AppState;

/// Routes mounted at `/faculty`.
///
/// ```text
/// GET    /{faculty_id}/projects                                          -> project::list_for_faculty
/// POST   /{faculty_id}/projects                                          -> project::create
/// PUT    /{faculty_id}/projects/{project_id}                             -> project::update
/// DELETE /{faculty_id}/projects/{project_id}                             -> project::delete
/// GET    /{faculty_id}/applications                                      -> list_applications
/// GET    /{faculty_id}/projects/{project_id}/applications                -> list_project_applications
/// PUT    /{faculty_id}/projects/{project_id}/applications/{application_id} -> transition
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{faculty_id}/projects",
            get(project::list_for_faculty).post(project::create),
        )
        .route(
            "/{faculty_id}/projects/{project_id}",
            put(project::update).delete(project::delete),
        )
        .route("/{faculty_id}/applications", get(faculty::list_applications))
        .route(
            "/{faculty_id}/projects/{project_id}/applications",
            get(faculty::list_project_applications),
        )
        .route(
            "/{faculty_id}/projects/{project_id}/applications/{application_id}",
            put(faculty::transition),
        )
}
