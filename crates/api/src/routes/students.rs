use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::student;
use crate::state::AppState;

/// Routes mounted at `/students`.
///
/// ```text
/// POST   /{student_id}/applications                   -> submit
/// GET    /{student_id}/applications                   -> list
/// DELETE /{student_id}/applications/{application_id}  -> withdraw
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{student_id}/applications",
            get(student::list).post(student::submit),
        )
        .route(
            "/{student_id}/applications/{application_id}",
            delete(student::withdraw),
        )
}
