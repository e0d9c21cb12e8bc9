pub mod admin;
pub mod application;
pub mod auth;
pub mod faculty;
pub mod project;
pub mod student;
