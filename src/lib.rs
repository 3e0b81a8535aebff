//! # incgraph
//!
//! C/C++ header parsing and include-path resolution for dependency graphs.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! project   → Language facade, file discovery, parallel batches
//!   ↓
//! resolve   → Include roots, allow-set, import/export extraction
//!   ↓
//! syntax    → FileInfo records, extension gating
//!   ↓
//! parser    → Logos lexer, recursive-descent statement grammar
//!   ↓
//! base      → Primitives (paths, LineIndex, TextRange)
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → syntax → resolve → project)
// ============================================================================

/// Foundation types: path cleaning, positions, constants
pub mod base;

/// Parser: Logos lexer, statement grammar, diagnostics
pub mod parser;

/// Syntax: parsed file records
pub mod syntax;

/// Include resolution: roots, allow-set, import and export records
pub mod resolve;

/// Driver-facing facade and file discovery
pub mod project;

mod error;

pub use error::{Error, Result};

// Re-export the types a graph driver needs
pub use base::{LineIndex, Position, TextRange, TextSize};
pub use parser::{Statement, SyntaxError};
pub use project::{Language, LanguageOptions, collect_file_paths};
pub use resolve::{AllowSet, ExportEntry, ImportEdge, IncludeRoot, ResolverConfig, RootMode};
pub use syntax::FileInfo;
