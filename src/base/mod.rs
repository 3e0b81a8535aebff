//! Foundation types for incgraph.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`Position`], [`LineIndex`] - Line/column conversion for diagnostics
//! - Path utilities ([`clean_path`], [`absolutize`]) for canonical include targets
//! - Domain constants (recognized file extensions, relative include marker)
//!
//! This module has NO dependencies on other incgraph modules.

pub mod constants;
mod paths;
mod position;

pub use paths::{absolutize, base_name, clean_path, relative_to};
pub use position::{LineIndex, Position};

// Re-export text-size types for convenience
pub use text_size::{TextRange, TextSize};
