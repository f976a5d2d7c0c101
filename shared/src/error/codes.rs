//! Unified error codes for the seating service
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 6xxx: Guest errors
//! - 7xxx: Table / layout errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so the admin dashboard and
/// the guest portal can switch on them without parsing messages.
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
    /// Invalid request
    InvalidRequest = 5,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,
    /// Too many requests in the current window
    RateLimited = 9,
    /// Feature switched off in event settings
    FeatureDisabled = 10,

    // ==================== 6xxx: Guest ====================
    /// Guest not found
    GuestNotFound = 6001,
    /// Party size outside the accepted range
    PartySizeOutOfRange = 6002,
    /// Guest name is empty
    GuestNameEmpty = 6003,

    // ==================== 7xxx: Table ====================
    /// Table not found
    TableNotFound = 7001,
    /// Assignment would exceed the table capacity
    TableCapacityExceeded = 7002,
    /// Another table already uses this name
    TableNameExists = 7003,
    /// Table name is empty
    TableNameEmpty = 7004,
    /// Layout label not found
    LabelNotFound = 7101,
    /// Layout shape not found
    ShapeNotFound = 7102,
    /// Reference object not found
    ReferenceObjectNotFound = 7103,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Store/database error
    DatabaseError = 9002,
    /// Configuration error
    ConfigError = 9005,
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

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",
            ErrorCode::RateLimited => "Too many requests, try again later",
            ErrorCode::FeatureDisabled => "This feature is disabled",

            // Guest
            ErrorCode::GuestNotFound => "Guest not found",
            ErrorCode::PartySizeOutOfRange => "Party size is out of range",
            ErrorCode::GuestNameEmpty => "Guest name cannot be empty",

            // Table
            ErrorCode::TableNotFound => "Table not found",
            ErrorCode::TableCapacityExceeded => "Table capacity exceeded",
            ErrorCode::TableNameExists => "A table with this name already exists",
            ErrorCode::TableNameEmpty => "Table name cannot be empty",
            ErrorCode::LabelNotFound => "Label not found",
            ErrorCode::ShapeNotFound => "Shape not found",
            ErrorCode::ReferenceObjectNotFound => "Reference object not found",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::ConfigError => "Configuration error",
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
            5 => Ok(ErrorCode::InvalidRequest),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),
            9 => Ok(ErrorCode::RateLimited),
            10 => Ok(ErrorCode::FeatureDisabled),

            // Guest
            6001 => Ok(ErrorCode::GuestNotFound),
            6002 => Ok(ErrorCode::PartySizeOutOfRange),
            6003 => Ok(ErrorCode::GuestNameEmpty),

            // Table
            7001 => Ok(ErrorCode::TableNotFound),
            7002 => Ok(ErrorCode::TableCapacityExceeded),
            7003 => Ok(ErrorCode::TableNameExists),
            7004 => Ok(ErrorCode::TableNameEmpty),
            7101 => Ok(ErrorCode::LabelNotFound),
            7102 => Ok(ErrorCode::ShapeNotFound),
            7103 => Ok(ErrorCode::ReferenceObjectNotFound),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),
            9005 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
