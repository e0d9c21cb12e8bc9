use axum::routing::{delete, post, put};
use axum::Router;

use crate::handlers::application;
use crate::state::AppState;

/// Routes mounted at `/applications`.
///
/// ```text
/// POST   /                          -> submit (student role)
/// DELETE /{application_id}          -> withdraw
/// PUT    /{application_id}/status   -> update_status
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(application::submit))
        .route("/{application_id}", delete(application::withdraw))
        .route("/{application_id}/status", put(application::update_status))
}
