//! Unified error codes for the shop back-office
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 7xxx: Location (zone) errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so they serialize as plain
/// numbers for the back-office front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Required field missing
    RequiredField = 7,

    // ==================== 7xxx: Location ====================
    /// Zone not found
    ZoneNotFound = 7001,
    /// Zone id is not a positive integer
    ZoneInvalidId = 7002,
    /// Zone status could not be changed
    ZoneCannotToggleStatus = 7003,
    /// Zone could not be deleted
    ZoneCannotDelete = 7004,
    /// Some zones of a bulk delete could not be deleted
    ZoneBulkDeleteFailed = 7005,
    /// Some zones of a bulk status change could not be changed
    ZoneBulkToggleFailed = 7006,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Default human-readable message for this code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::RequiredField => "Required field is missing",

            // Location
            ErrorCode::ZoneNotFound => "Zone not found",
            ErrorCode::ZoneInvalidId => "Zone id must be a positive integer",
            ErrorCode::ZoneCannotToggleStatus => "Unable to toggle zone status",
            ErrorCode::ZoneCannotDelete => "Unable to delete zone",
            ErrorCode::ZoneBulkDeleteFailed => "Unable to delete some of the selected zones",
            ErrorCode::ZoneBulkToggleFailed => "Unable to toggle status of some of the selected zones",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            7 => Ok(ErrorCode::RequiredField),

            // Location
            7001 => Ok(ErrorCode::ZoneNotFound),
            7002 => Ok(ErrorCode::ZoneInvalidId),
            7003 => Ok(ErrorCode::ZoneCannotToggleStatus),
            7004 => Ok(ErrorCode::ZoneCannotDelete),
            7005 => Ok(ErrorCode::ZoneBulkDeleteFailed),
            7006 => Ok(ErrorCode::ZoneBulkToggleFailed),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
