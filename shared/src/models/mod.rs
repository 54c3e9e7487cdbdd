//! Data models
//!
//! Shared between the back-office server and its clients (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod zone;

// Re-exports
pub use zone::*;
