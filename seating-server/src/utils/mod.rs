//! Utilities - logging and input validation
//!
//! Error and response types live in `shared::error` and are re-exported here
//! so handlers have a single import path.

pub mod logger;
pub mod validation;

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
