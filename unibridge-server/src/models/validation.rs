//! Validation error types

use std::fmt;

/// Maximum length for free-text columns (names, emails, phones, offices)
pub const MAX_TEXT_LEN: usize = 100;

/// Validation error for request payloads and path parameters
#[derive(Debug, Clone)]
pub enum ValidationError {
    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Field exceeds maximum length
    TooLong { field: &'static str, max: usize },

    /// String doesn't match required format (e.g., identifier charset)
    InvalidFormat { field: &'static str, reason: &'static str },

    /// Request body could not be decoded into the expected schema
    Body { reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
            Self::InvalidFormat { field, reason } => {
                write!(f, "{}: {}", field, reason)
            }
            Self::Body { reason } => write!(f, "invalid request body: {}", reason),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate a required free-text field; the value is passed through as sent.
pub(crate) fn required_text(field: &'static str, value: String) -> Result<String, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }

    if value.chars().count() > MAX_TEXT_LEN {
        return Err(ValidationError::TooLong {
            field,
            max: MAX_TEXT_LEN,
        });
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::TooLong {
            field: "fName",
            max: 100,
        };
        assert_eq!(
            err.to_string(),
            "fName exceeds maximum length of 100 characters"
        );
    }

    #[test]
    fn required_text_keeps_surrounding_whitespace() {
        let value = required_text("lName", "  Lovelace ".into()).unwrap();
        assert_eq!(value, "  Lovelace ");
    }

    #[test]
    fn required_text_rejects_blank() {
        let err = required_text("lName", "   ".into()).unwrap_err();
        assert!(matches!(err, ValidationError::Empty { field: "lName" }));
    }

    #[test]
    fn required_text_counts_chars_not_bytes() {
        // 100 multi-byte chars is still within the limit
        assert!(required_text("fName", "é".repeat(MAX_TEXT_LEN)).is_ok());

        let err = required_text("fName", "a".repeat(MAX_TEXT_LEN + 1)).unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { max: 100, .. }));
    }
}
