//! Identifier validation for path parameters and keys
//!
//! Identifiers (student numbers, professor ids) are short opaque tokens:
//! ASCII alphanumerics, hyphens and underscores.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};

use super::ValidationError;

/// Maximum length for identifiers, matching the VARCHAR(20) key columns
pub const MAX_IDENTIFIER_LEN: usize = 20;

static IDENTIFIER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_-]+$").expect("invalid identifier regex")
});

fn validate(field: &'static str, s: &str) -> Result<(), ValidationError> {
    if s.is_empty() {
        return Err(ValidationError::Empty { field });
    }

    if s.len() > MAX_IDENTIFIER_LEN {
        return Err(ValidationError::TooLong {
            field,
            max: MAX_IDENTIFIER_LEN,
        });
    }

    if !IDENTIFIER_RE.is_match(s) {
        return Err(ValidationError::InvalidFormat {
            field,
            reason: "must contain only letters, digits, hyphens and underscores",
        });
    }

    Ok(())
}

macro_rules! identifier {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(String);

        impl $name {
            /// Create a new identifier, validating length and charset.
            pub fn new(s: &str) -> Result<Self, ValidationError> {
                validate($field, s)?;
                Ok(Self(s.to_owned()))
            }

            /// Get the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.0)
            }
        }
    };
}

identifier!(
    /// Validated student number (`student.studentNum`)
    ///
    /// ```
    /// use unibridge_server::models::StudentNum;
    ///
    /// assert!(StudentNum::new("S1001").is_ok());
    /// assert!(StudentNum::new("S 1001").is_err());
    /// ```
    StudentNum,
    "studentNum"
);

identifier!(
    /// Validated professor id (`teaches.professorID`)
    ProfessorId,
    "professorID"
);
