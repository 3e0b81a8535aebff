//! Parser error handling module
//!
//! This module provides the diagnostics produced while parsing headers:
//! - Categorized error codes for filtering and documentation
//! - Context-aware error messages
//! - Related span tracking (e.g., "opened here" for unclosed braces)
//!
//! Only structural errors stop the parser; everything it does not model
//! degrades to ignored statements instead of a diagnostic.

mod codes;
mod context;
mod error;

pub use codes::ErrorCode;
pub use context::ParseContext;
pub use error::{RelatedInfo, Severity, SyntaxError, SyntaxErrorBuilder};
pub(crate) use error::{unclosed_brace, unexpected_closing};
