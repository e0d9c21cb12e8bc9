//! Repository layer.
//!
//! Each repository is a zero-sized struct of async query functions. Plain
//! reads and writes take `&PgPool`. Functions the lifecycle manager calls
//! inside a transaction take any Postgres executor, and the row-locking
//! ones require a `&mut PgConnection` so they can only run inside one.

pub mod application_repo;
pub mod listing_repo;
pub mod project_repo;
pub mod user_repo;

pub use application_repo::ApplicationRepo;
pub use listing_repo::ListingRepo;
pub use project_repo::ProjectRepo;
pub use user_repo::UserRepo;
