//! Primitive aliases shared by every crate.

/// Primary key of the `prompts` table (PostgreSQL `BIGSERIAL`).
pub type DbId = i64;

/// Row timestamps. Always UTC; serialises as RFC 3339 with a `Z` suffix.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
