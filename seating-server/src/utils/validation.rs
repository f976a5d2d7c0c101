//! Input validation helpers
//!
//! Length limits for free text coming in over HTTP. Emptiness and uniqueness
//! rules for names belong to the seating engine; these checks only keep
//! oversized input out of the store.

use shared::error::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Guest display names
pub const MAX_GUEST_NAME_LEN: usize = 255;

/// Table names, shown on the floor plan
pub const MAX_TABLE_NAME_LEN: usize = 50;

/// Phone numbers
pub const MAX_PHONE_LEN: usize = 20;

/// Postal addresses
pub const MAX_ADDRESS_LEN: usize = 500;

/// Event name and layout label text
pub const MAX_TITLE_LEN: usize = 200;

/// Home page text shown to guests
pub const MAX_PAGE_TEXT_LEN: usize = 5000;

/// Kind tags and colors on floor plan shapes and reference objects
pub const MAX_KIND_LEN: usize = 50;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    validate_len(value, field, max_len)
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    match value {
        Some(v) => validate_len(v, field, max_len),
        None => Ok(()),
    }
}

fn validate_len(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    let len = value.trim().chars().count();
    if len > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({len} chars, max {max_len})"
        ))
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate that a coordinate-like number is finite.
pub fn validate_finite(value: Option<f64>, field: &str) -> Result<(), AppError> {
    match value {
        Some(v) if !v.is_finite() => Err(AppError::validation(format!(
            "{field} must be a finite number"
        ))),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorCode;

    #[test]
    fn test_required_text() {
        assert!(validate_required_text("Rose", "name", 10).is_ok());
        let err = validate_required_text("   ", "name", 10).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.message, "name must not be empty");
        assert!(validate_required_text("abcdefghijk", "name", 10).is_err());
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        assert!(validate_required_text("Müller-Łukasz", "name", 13).is_ok());
    }

    #[test]
    fn test_optional_text() {
        assert!(validate_optional_text(&None, "phone", 3).is_ok());
        assert!(validate_optional_text(&Some("123".into()), "phone", 3).is_ok());
        let err = validate_optional_text(&Some("1234".into()), "phone", 3).unwrap_err();
        assert_eq!(err.message, "phone is too long (4 chars, max 3)");
    }

    #[test]
    fn test_finite() {
        assert!(validate_finite(None, "x").is_ok());
        assert!(validate_finite(Some(12.5), "x").is_ok());
        assert!(validate_finite(Some(f64::INFINITY), "x").is_err());
    }
}
