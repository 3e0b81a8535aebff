//! Root classification and include lookup.

use std::path::{Path, PathBuf};

use tracing::trace;

use super::allow_set::AllowSet;
use super::config::ResolverConfig;
use crate::base::clean_path;

/// Whether a file's own includes should be followed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification<'a> {
    Tracked { root: &'a Path, recursive: bool },
    NotTracked,
}

impl Classification<'_> {
    pub fn is_tracked(&self) -> bool {
        matches!(self, Self::Tracked { .. })
    }
}

/// An include target found under one of the roots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Located<'a> {
    pub path: PathBuf,
    pub root: &'a Path,
    pub recursive: bool,
}

/// Resolves paths against the configured roots for one run.
///
/// Borrowing the allow-set rather than owning it lets several resolvers (one
/// per worker) share the same run state.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    config: &'a ResolverConfig,
    allow_set: &'a AllowSet,
}

impl<'a> Resolver<'a> {
    pub fn new(config: &'a ResolverConfig, allow_set: &'a AllowSet) -> Self {
        Self { config, allow_set }
    }

    pub fn config(&self) -> &'a ResolverConfig {
        self.config
    }

    pub fn allow_set(&self) -> &'a AllowSet {
        self.allow_set
    }

    /// Classify an absolute file path.
    ///
    /// Recursive roots are checked first, in order, by path-component prefix.
    /// A path under a non-recursive root only counts once it has been unlocked.
    pub fn classify(&self, path: &Path) -> Classification<'a> {
        if let Some(root) = self.config.recursive_roots().find(|root| path.starts_with(root)) {
            return Classification::Tracked {
                root,
                recursive: true,
            };
        }

        if !self.allow_set.contains(path) {
            return Classification::NotTracked;
        }
        match self
            .config
            .non_recursive_roots()
            .find(|root| path.starts_with(root))
        {
            Some(root) => Classification::Tracked {
                root,
                recursive: false,
            },
            None => Classification::NotTracked,
        }
    }

    /// Find `target` under the roots: recursive roots first, then
    /// non-recursive ones, first existing regular file wins. A target that
    /// climbs out of a root with `..` does not count as found under it.
    pub fn locate(&self, target: &str) -> Option<Located<'a>> {
        self.search(self.config.recursive_roots(), true, target)
            .or_else(|| self.search(self.config.non_recursive_roots(), false, target))
    }

    fn search(
        &self,
        mut roots: impl Iterator<Item = &'a Path>,
        recursive: bool,
        target: &str,
    ) -> Option<Located<'a>> {
        roots.find_map(|root| {
            let candidate = clean_path(&root.join(target));
            if !candidate.starts_with(root) {
                trace!(candidate = %candidate.display(), root = %root.display(), "outside root");
                return None;
            }
            trace!(candidate = %candidate.display(), "probing");
            candidate.is_file().then(|| Located {
                path: candidate,
                root,
                recursive,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_classify_prefix_is_component_wise() {
        let config = ResolverConfig::new().with_recursive_root("/proj/src");
        let allow_set = AllowSet::new();
        let resolver = Resolver::new(&config, &allow_set);

        assert!(resolver.classify(Path::new("/proj/src/a.h")).is_tracked());
        assert!(!resolver.classify(Path::new("/proj/srcx/a.h")).is_tracked());
    }

    #[test]
    fn test_classify_library_needs_unlock() {
        let config = ResolverConfig::new().with_non_recursive_root("/usr/include");
        let allow_set = AllowSet::new();
        let resolver = Resolver::new(&config, &allow_set);
        let header = Path::new("/usr/include/stdio.h");

        assert_eq!(resolver.classify(header), Classification::NotTracked);
        allow_set.insert(header);
        assert_eq!(
            resolver.classify(header),
            Classification::Tracked {
                root: Path::new("/usr/include"),
                recursive: false
            }
        );
    }

    #[test]
    fn test_locate_prefers_recursive_roots() {
        let lib = tempfile::tempdir().unwrap();
        let proj = tempfile::tempdir().unwrap();
        fs::write(lib.path().join("foo.h"), "").unwrap();
        fs::write(proj.path().join("foo.h"), "").unwrap();

        let config = ResolverConfig::new()
            .with_non_recursive_root(lib.path())
            .with_recursive_root(proj.path());
        let allow_set = AllowSet::new();
        let located = Resolver::new(&config, &allow_set).locate("foo.h").unwrap();

        assert!(located.recursive);
        assert_eq!(located.path, clean_path(&proj.path().join("foo.h")));
    }

    #[test]
    fn test_locate_ignores_directories() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir(root.path().join("vector")).unwrap();

        let config = ResolverConfig::new().with_recursive_root(root.path());
        let allow_set = AllowSet::new();
        assert!(Resolver::new(&config, &allow_set).locate("vector").is_none());
    }
}
