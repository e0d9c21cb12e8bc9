pub mod admin;
pub mod applications;
pub mod auth;
pub mod faculty;
pub mod health;
pub mod projects;
pub mod students;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/signup                                            signup (public)
/// /auth/login                                             login (public)
///
/// /projects                                               global listing (public)
///
/// /faculty/{faculty_id}/projects                          list, create (owner/admin)
/// /faculty/{faculty_id}/projects/{project_id}             update, delete (owner/admin)
/// /faculty/{faculty_id}/applications                      faculty's applications
/// /faculty/{faculty_id}/projects/{project_id}/applications
///                                                         project's applications
/// /faculty/{faculty_id}/projects/{project_id}/applications/{application_id}
///                                                         transition (PUT)
///
/// /students/{student_id}/applications                     submit, list
/// /students/{student_id}/applications/{application_id}    withdraw (DELETE)
///
/// /applications                                           submit as caller (student)
/// /applications/{application_id}                          withdraw (DELETE)
/// /applications/{application_id}/status                   transition (PUT)
///
/// /admin/users                                            list, create (admin)
/// /admin/projects                                         global listing (admin)
/// /admin/applications                                     global listing (admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/projects", projects::router())
        .nest("/faculty", faculty::router())
        .nest("/students", students::router())
        .nest("/applications", applications::router())
        .nest("/admin", admin::router())
}
