/// Identifier of a user, project or application row (PostgreSQL BIGSERIAL).
pub type DbId = i64;

/// UTC timestamp used for creation, application and deadline times.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
