//! Row models and DTOs.
//!
//! Entity modules hold a `FromRow` row struct plus the `Deserialize` DTOs
//! used to create or patch it. `listing` holds the read-only join rows
//! served by the projection queries.

pub mod application;
pub mod listing;
pub mod project;
pub mod user;
