//! Permissive parser for C/C++ headers
//!
//! This module turns raw header text into an ordered list of typed
//! statements:
//! - **logos** for fast lexing
//! - a backtracking descent grammar over the non-trivia tokens, keeping open
//!   braces on an explicit stack
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos) → Tokens with SyntaxKind
//!     ↓
//! Parser → Vec<Statement> + Vec<SyntaxError>
//! ```
//!
//! Constructs the grammar does not model become `Statement::Ignored`; only an
//! unbalanced brace stops the parse early.

#[allow(clippy::module_inception)]
mod parser;

pub mod ast;
pub mod errors;
mod lexer;
mod syntax_kind;

pub use ast::{IncludeRef, IncludeStyle, Statement, includes};
pub use errors::{ErrorCode, ParseContext, RelatedInfo, Severity, SyntaxError};
pub use lexer::{Lexer, Token, tokenize};
pub use parser::{Parse, parse};
pub use syntax_kind::SyntaxKind;

pub use text_size::{TextRange, TextSize};
