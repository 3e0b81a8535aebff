//! Source file discovery.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::syntax::is_recognized_extension;

/// Recursively collect files under `dir` whose extension is in `extensions`.
///
/// The result is sorted so batch runs visit files in a stable order.
pub fn collect_file_paths<S: AsRef<str>>(dir: &Path, extensions: &[S]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    collect_recursive(dir, extensions, &mut paths)?;
    paths.sort();
    Ok(paths)
}

fn collect_recursive<S: AsRef<str>>(
    dir: &Path,
    extensions: &[S],
    results: &mut Vec<PathBuf>,
) -> Result<()> {
    let entries = std::fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;

    for entry in entries {
        let path = entry.map_err(|e| Error::io(dir, e))?.path();

        if path.is_dir() {
            collect_recursive(&path, extensions, results)?;
        } else if path.is_file() && is_recognized_extension(&path, extensions) {
            results.push(path);
        }
    }

    Ok(())
}
