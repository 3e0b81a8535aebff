//! Syntax-level parsing interface.
//!
//! Turns a path plus raw bytes into a [`FileInfo`], gating on the file
//! extension and reporting truncated parses.

use std::path::Path;

use tracing::warn;

use crate::base::LineIndex;
use crate::error::{Error, Result};
use crate::parser::parse;
use crate::syntax::file::FileInfo;

/// Get the file extension from a path, if it is valid UTF-8
pub fn get_extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|e| e.to_str())
}

/// Check the extension against `extensions`, ignoring ASCII case
pub fn is_recognized_extension<S: AsRef<str>>(path: &Path, extensions: &[S]) -> bool {
    get_extension(path).is_some_and(|ext| {
        extensions
            .iter()
            .any(|known| known.as_ref().eq_ignore_ascii_case(ext))
    })
}

/// Load file contents
pub fn load_file(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|source| Error::io(path, source))
}

/// Parse in-memory content.
///
/// Invalid UTF-8 is replaced rather than rejected. A structural syntax error
/// keeps the statements parsed before it and is logged.
pub fn parse_source(absolute_path: &Path, relative_path: &Path, bytes: &[u8]) -> FileInfo {
    let text = String::from_utf8_lossy(bytes);
    let result = parse(&text);

    if let Some(error) = result.structural_error() {
        let position = LineIndex::new(&text).position(error.range.start());
        warn!(
            path = %absolute_path.display(),
            line = position.line + 1,
            column = position.column + 1,
            code = %error.code,
            "parse truncated: {}",
            error.message
        );
    }

    FileInfo {
        absolute_path: absolute_path.to_path_buf(),
        relative_path: relative_path.to_path_buf(),
        line_count: bytes.iter().filter(|&&b| b == b'\n').count(),
        size_bytes: bytes.len() as u64,
        statements: result.statements,
        errors: result.errors,
    }
}

/// Loads and parses a file if its extension is recognized.
///
/// Unrecognized extensions produce an empty [`FileInfo`] without reading the
/// file.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read.
pub fn load_and_parse<S: AsRef<str>>(
    absolute_path: &Path,
    relative_path: &Path,
    extensions: &[S],
) -> Result<FileInfo> {
    if !is_recognized_extension(absolute_path, extensions) {
        return Ok(FileInfo::empty(absolute_path, relative_path));
    }
    let content = load_file(absolute_path)?;
    Ok(parse_source(absolute_path, relative_path, &content))
}
