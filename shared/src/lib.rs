//! Shared types for the shop back-office
//!
//! Common types used across the server and the UI test helpers, including
//! the unified error system, the API response envelope and zone DTOs.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
