//! Request body extractor whose rejections use the API error shape.

use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use portal_core::error::CoreError;

use crate::error::AppError;

/// Drop-in for [`axum::Json`] on request bodies.
///
/// A malformed or mistyped body is answered with 400 `VALIDATION_ERROR`
/// in the usual `{"error", "code"}` form instead of axum's plain-text 422.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Core(CoreError::Validation(rejection.body_text()))
    }
}
