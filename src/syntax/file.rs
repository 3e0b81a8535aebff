//! Parsed file record handed to the import/export extractors.

use std::path::{Path, PathBuf};

use crate::parser::{IncludeRef, Statement, SyntaxError, includes};

/// A parsed header or translation unit.
///
/// Built once per parse and not modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FileInfo {
    /// Clean absolute path of the file
    pub absolute_path: PathBuf,
    /// Path relative to the configured base directory
    pub relative_path: PathBuf,
    /// Number of newline characters in the content
    pub line_count: usize,
    /// Size of the content in bytes
    pub size_bytes: u64,
    /// Top-level statements in source order
    pub statements: Vec<Statement>,
    /// Diagnostics collected while parsing
    pub errors: Vec<SyntaxError>,
}

impl FileInfo {
    /// A file that was not read, e.g. because its extension is not recognized
    pub fn empty(absolute_path: impl Into<PathBuf>, relative_path: impl Into<PathBuf>) -> Self {
        Self {
            absolute_path: absolute_path.into(),
            relative_path: relative_path.into(),
            line_count: 0,
            size_bytes: 0,
            statements: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.absolute_path
    }

    /// Check if parsing reported any error-severity diagnostic
    pub fn has_errors(&self) -> bool {
        self.errors.iter().any(|e| e.severity.is_error())
    }

    /// The error that truncated the statement list, if any
    pub fn structural_error(&self) -> Option<&SyntaxError> {
        self.errors.iter().find(|e| e.is_structural())
    }

    /// All includes, including those nested in namespaces and blocks
    pub fn includes(&self) -> Vec<IncludeRef<'_>> {
        includes(&self.statements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file() {
        let file = FileInfo::empty("/proj/a.txt", "a.txt");
        assert_eq!(file.line_count, 0);
        assert_eq!(file.size_bytes, 0);
        assert!(file.statements.is_empty());
        assert!(!file.has_errors());
        assert!(file.includes().is_empty());
    }
}
