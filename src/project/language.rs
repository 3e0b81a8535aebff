//! Entry point used by a dependency-graph driver.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::debug;

use crate::base::{absolutize, relative_to};
use crate::error::{Error, Result};
use crate::resolve::{
    AllowSet, ExportEntry, ImportEdge, Resolver, ResolverConfig, resolve_exports,
    resolve_imports,
};
use crate::syntax::{FileInfo, load_and_parse, parse_source};

/// Options that do not affect resolution
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageOptions {
    /// Directory `FileInfo::relative_path` is computed against.
    /// Defaults to the current working directory.
    pub base_dir: Option<PathBuf>,
}

impl LanguageOptions {
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(base_dir.into());
        self
    }
}

/// C/C++ front end for one graph-build run.
///
/// Holds the run's configuration and allow-set. All methods take `&self`,
/// so one instance can be shared between worker threads.
///
/// # Examples
///
/// ```no_run
/// use incgraph::{Language, ResolverConfig};
///
/// let language = Language::new(ResolverConfig::new().with_recursive_root("src"));
/// let file = language.parse_file("src/main.cpp")?;
/// for edge in language.parse_imports(&file) {
///     println!("{} -> {}", edge.from.display(), edge.to.display());
/// }
/// # Ok::<(), incgraph::Error>(())
/// ```
#[derive(Debug)]
pub struct Language {
    config: ResolverConfig,
    allow_set: AllowSet,
    base_dir: PathBuf,
}

impl Language {
    pub fn new(config: ResolverConfig) -> Self {
        Self::with_options(config, LanguageOptions::default())
    }

    pub fn with_options(config: ResolverConfig, options: LanguageOptions) -> Self {
        let base_dir = absolutize(options.base_dir.as_deref().unwrap_or(Path::new(".")));
        Self {
            config,
            allow_set: AllowSet::new(),
            base_dir,
        }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Library headers unlocked so far in this run
    pub fn allow_set(&self) -> &AllowSet {
        &self.allow_set
    }

    pub fn resolver(&self) -> Resolver<'_> {
        Resolver::new(&self.config, &self.allow_set)
    }

    /// Read and parse a file.
    ///
    /// Files with an unrecognized extension yield an empty [`FileInfo`]
    /// without being read. Unbalanced braces keep the statements parsed up to
    /// that point; see [`FileInfo::errors`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<FileInfo> {
        let (absolute, relative) = self.paths_for(path.as_ref());
        load_and_parse(&absolute, &relative, &self.config.extensions)
    }

    /// Like [`Language::parse_file`], but a structural syntax error is
    /// returned as [`Error::Grammar`].
    pub fn parse_file_strict(&self, path: impl AsRef<Path>) -> Result<FileInfo> {
        let file = self.parse_file(path)?;
        match file.structural_error() {
            Some(error) => Err(Error::grammar(&file.absolute_path, error.clone())),
            None => Ok(file),
        }
    }

    /// Parse in-memory content as if it were read from `path`.
    ///
    /// The extension is not checked.
    pub fn parse_source(&self, path: impl AsRef<Path>, bytes: &[u8]) -> FileInfo {
        let (absolute, relative) = self.paths_for(path.as_ref());
        parse_source(&absolute, &relative, bytes)
    }

    /// Import edges of a parsed file; may unlock library headers
    pub fn parse_imports(&self, file: &FileInfo) -> Vec<ImportEdge> {
        resolve_imports(&self.resolver(), file)
    }

    /// Export entries of a parsed file
    pub fn parse_exports(&self, file: &FileInfo) -> Vec<ExportEntry> {
        resolve_exports(file)
    }

    /// Parse many files on the rayon thread pool, preserving input order
    pub fn parse_files(&self, paths: &[PathBuf]) -> Vec<(PathBuf, Result<FileInfo>)> {
        debug!(count = paths.len(), "parsing files");
        paths
            .par_iter()
            .map(|path| (path.clone(), self.parse_file(path)))
            .collect()
    }

    fn paths_for(&self, path: &Path) -> (PathBuf, PathBuf) {
        let absolute = absolutize(path);
        let relative = relative_to(&absolute, &self.base_dir);
        (absolute, relative)
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::new(ResolverConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Language>();
    }

    #[test]
    fn test_relative_path_uses_base_dir() {
        let language = Language::with_options(
            ResolverConfig::new(),
            LanguageOptions::default().with_base_dir("/proj"),
        );
        let file = language.parse_source("/proj/src/a.h", b"");
        assert_eq!(file.absolute_path, PathBuf::from("/proj/src/a.h"));
        assert_eq!(file.relative_path, PathBuf::from("src/a.h"));
    }
}
