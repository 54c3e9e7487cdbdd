//! Utilities - logging and input validation
//!
//! Error types live in `shared::error` and are re-exported here so handlers
//! only import from one place.

pub mod logger;
pub mod validation;

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
