//! Error types for file-level operations.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::parser::SyntaxError;

/// Errors that can occur while loading or parsing a file.
#[derive(Debug, Error)]
pub enum Error {
    /// The file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file has unbalanced braces (strict parsing only).
    #[error("syntax error in {}: {error}", path.display())]
    Grammar {
        path: PathBuf,
        #[source]
        error: SyntaxError,
    },
}

impl Error {
    /// Create an IO error for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a grammar error for `path`.
    pub fn grammar(path: impl Into<PathBuf>, error: SyntaxError) -> Self {
        Self::Grammar {
            path: path.into(),
            error,
        }
    }

    /// The file the error refers to.
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. } | Self::Grammar { path, .. } => path,
        }
    }
}

/// Result type for file-level operations.
pub type Result<T> = std::result::Result<T, Error>;
