//! Domain types and pure rules for the research portal.
//!
//! Nothing in this crate performs I/O. The database and HTTP crates load
//! state, hand it to the functions here for a decision, and persist the
//! result.

pub mod access;
pub mod accounts;
pub mod application;
pub mod error;
pub mod lifecycle;
pub mod project;
pub mod roles;
pub mod team;
pub mod types;
