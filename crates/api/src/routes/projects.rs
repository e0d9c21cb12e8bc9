use axum::routing::get;
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET /   -> list (public)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(project::list))
}
