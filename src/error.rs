//! Error type for hex color parsing.

use std::fmt;

/// Error returned when a string is not a valid 6-digit hex color.
///
/// Accepted input is an optional leading `#` followed by exactly six
/// hexadecimal digits. Anything else (shorthand `#fff`, surrounding
/// whitespace, signs, extra digits) is rejected with this error, which
/// keeps the offending string for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InvalidColorFormat {
    input: String,
}

impl InvalidColorFormat {
    /// Create an error for the given offending input.
    #[must_use]
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }

    /// The string that failed to parse, exactly as it was provided.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for InvalidColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid hex color {}", self.input)
    }
}

impl std::error::Error for InvalidColorFormat {}
