//! Error code definitions for parser diagnostics
//!
//! Error codes follow a naming convention: E{category}{number}
//! - E01xx: Lexical errors (invalid tokens)
//! - E02xx: Structural errors (unbalanced delimiters)

use std::fmt;

/// Error codes for parser diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ErrorCode {
    // =========================================================================
    // E01xx: Lexical errors (invalid tokens)
    // =========================================================================
    /// Invalid or unexpected character in source
    E0101,

    // =========================================================================
    // E02xx: Structural errors (unbalanced delimiters)
    // =========================================================================
    /// Unclosed brace `{`
    E0202,
    /// Unexpected closing delimiter
    E0205,
}

impl ErrorCode {
    /// Get the string representation of the error code (e.g., "E0202")
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::E0101 => "E0101",
            Self::E0202 => "E0202",
            Self::E0205 => "E0205",
        }
    }

    /// Get a short description of the error category
    pub fn category_description(&self) -> &'static str {
        match self {
            Self::E0101 => "lexical error",
            Self::E0202 | Self::E0205 => "structural error",
        }
    }

    /// Get the default message template for this error code
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::E0101 => "invalid character",
            Self::E0202 => "unclosed brace",
            Self::E0205 => "unexpected closing delimiter",
        }
    }

    /// Check if this is a structural error (delimiter-related)
    ///
    /// Structural errors end the parse; the statements recognized before
    /// them are kept.
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::E0202 | Self::E0205)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
