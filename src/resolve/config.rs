//! Include search configuration.

use std::path::{Path, PathBuf};

use crate::base::absolutize;
use crate::base::constants::DEFAULT_EXTENSIONS;

/// How headers found under a root are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RootMode {
    /// Project code: every file below the root is tracked
    Recursive,
    /// Library code: files are tracked only once unlocked
    NonRecursive,
}

/// A directory searched for include targets
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct IncludeRoot {
    pub path: PathBuf,
    pub mode: RootMode,
}

impl IncludeRoot {
    /// Create a root; the path is made absolute and cleaned
    pub fn new(path: impl AsRef<Path>, mode: RootMode) -> Self {
        Self {
            path: absolutize(path.as_ref()),
            mode,
        }
    }

    pub fn is_recursive(&self) -> bool {
        self.mode == RootMode::Recursive
    }
}

/// Configuration for one graph-build run.
///
/// Root order is significant: the first matching root wins.
///
/// # Examples
///
/// ```
/// use incgraph::resolve::ResolverConfig;
///
/// let config = ResolverConfig::new()
///     .with_recursive_root("/proj/include")
///     .with_non_recursive_root("/usr/include");
/// assert_eq!(config.recursive_roots().count(), 1);
/// assert_eq!(config.non_recursive_roots().count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "ConfigFile"))]
pub struct ResolverConfig {
    pub roots: Vec<IncludeRoot>,
    /// Recognized file extensions, without the leading dot
    pub extensions: Vec<String>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            roots: Vec::new(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

impl ResolverConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a project root
    pub fn with_recursive_root(mut self, path: impl AsRef<Path>) -> Self {
        self.roots.push(IncludeRoot::new(path, RootMode::Recursive));
        self
    }

    /// Append a library root
    pub fn with_non_recursive_root(mut self, path: impl AsRef<Path>) -> Self {
        self.roots.push(IncludeRoot::new(path, RootMode::NonRecursive));
        self
    }

    /// Replace the recognized extensions
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions
            .into_iter()
            .map(|e| e.into().trim_start_matches('.').to_string())
            .collect();
        self
    }

    /// Recursive roots in configured order
    pub fn recursive_roots(&self) -> impl Iterator<Item = &Path> {
        self.roots_with(RootMode::Recursive)
    }

    /// Non-recursive roots in configured order
    pub fn non_recursive_roots(&self) -> impl Iterator<Item = &Path> {
        self.roots_with(RootMode::NonRecursive)
    }

    fn roots_with(&self, mode: RootMode) -> impl Iterator<Item = &Path> {
        self.roots
            .iter()
            .filter(move |root| root.mode == mode)
            .map(|root| root.path.as_path())
    }
}

/// On-disk shape of the configuration
#[cfg(feature = "serde")]
#[derive(Debug, serde::Deserialize)]
struct ConfigFile {
    #[serde(default)]
    recursive_include_paths: Vec<PathBuf>,
    #[serde(default)]
    non_recursive_include_paths: Vec<PathBuf>,
    #[serde(default)]
    extensions: Option<Vec<String>>,
}

#[cfg(feature = "serde")]
impl From<ConfigFile> for ResolverConfig {
    fn from(file: ConfigFile) -> Self {
        let mut config = file
            .recursive_include_paths
            .iter()
            .fold(Self::new(), |config, path| config.with_recursive_root(path));
        config = file
            .non_recursive_include_paths
            .iter()
            .fold(config, |config, path| config.with_non_recursive_root(path));
        if let Some(extensions) = file.extensions {
            config = config.with_extensions(extensions);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_extensions() {
        let config = ResolverConfig::default();
        assert!(config.extensions.iter().any(|e| e == "hpp"));
        assert!(config.roots.is_empty());
    }

    #[test]
    fn test_roots_keep_order_per_mode() {
        let config = ResolverConfig::new()
            .with_non_recursive_root("/lib/a")
            .with_recursive_root("/proj/one")
            .with_non_recursive_root("/lib/b")
            .with_recursive_root("/proj/two");

        let recursive: Vec<_> = config.recursive_roots().collect();
        let libraries: Vec<_> = config.non_recursive_roots().collect();
        assert_eq!(recursive, vec![Path::new("/proj/one"), Path::new("/proj/two")]);
        assert_eq!(libraries, vec![Path::new("/lib/a"), Path::new("/lib/b")]);
    }

    #[test]
    fn test_roots_are_cleaned() {
        let config = ResolverConfig::new().with_recursive_root("/proj/./src/../include/");
        assert_eq!(config.roots[0].path, PathBuf::from("/proj/include"));
        assert!(config.roots[0].is_recursive());
    }

    #[test]
    fn test_with_extensions_strips_dots() {
        let config = ResolverConfig::new().with_extensions([".h", "inl"]);
        assert_eq!(config.extensions, vec!["h".to_string(), "inl".to_string()]);
    }
}
