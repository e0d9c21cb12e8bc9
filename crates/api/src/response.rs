//! Response bodies shared by several handlers.

use portal_db::models::application::Application;
use serde::Serialize;

/// `{ "message": ... }` acknowledgement.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Result of a status transition: a message plus the updated record.
#[derive(Debug, Serialize)]
pub struct TransitionResponse {
    pub message: String,
    pub application: Application,
}
