//! Route definitions for the `/admin` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin`. All require the admin role.
///
/// ```text
/// GET  /users          -> list_users
/// POST /users          -> create_user
/// GET  /projects       -> list_projects
/// GET  /applications   -> list_applications
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(admin::list_users).post(admin::create_user))
        .route("/projects", get(admin::list_projects))
        .route("/applications", get(admin::list_applications))
}
