//! Research portal API server library.
//!
//! Exposes the building blocks (config, state, error handling, the
//! application lifecycle, routes) so integration tests and the binaries
//! can share them.

pub mod auth;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod lifecycle;
pub mod middleware;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
