//! Path normalization utilities for consistent include targets.
//!
//! Resolved include paths are compared and stored in the allow-set, so every
//! path that leaves the resolver goes through [`clean_path`]. Cleaning is
//! purely lexical: symlinks are not followed and the filesystem is not touched.

use std::path::{Component, Path, PathBuf};

/// Lexically normalize a path.
///
/// Removes `.` segments, folds `name/..` pairs and drops `..` that would climb
/// above the root of an absolute path. Relative paths keep leading `..`
/// segments. An empty result becomes `.`.
///
/// # Examples
///
/// ```
/// use incgraph::base::clean_path;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(clean_path(Path::new("/proj/src/a/../c.h")), PathBuf::from("/proj/src/c.h"));
/// assert_eq!(clean_path(Path::new("./x/./y.h")), PathBuf::from("x/y.h"));
/// ```
pub fn clean_path(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().collect()
}

/// Make a path absolute against the current working directory and clean it.
///
/// Falls back to cleaning the path as given when the working directory
/// cannot be determined.
pub fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return clean_path(path);
    }
    match std::path::absolute(path) {
        Ok(absolute) => clean_path(&absolute),
        Err(_) => clean_path(path),
    }
}

/// Express `path` relative to `base`, or return it unchanged when it does not
/// live under `base`.
pub fn relative_to(path: &Path, base: &Path) -> PathBuf {
    path.strip_prefix(base)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| path.to_path_buf())
}

/// Final path segment of an include target (`"a/b/c.h"` -> `"c.h"`).
pub fn base_name(target: &str) -> &str {
    Path::new(target)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_parent_segments() {
        assert_eq!(
            clean_path(Path::new("/proj/src/a/../c.h")),
            PathBuf::from("/proj/src/c.h")
        );
        assert_eq!(
            clean_path(Path::new("/proj/src/a/b/../../c.h")),
            PathBuf::from("/proj/src/c.h")
        );
    }

    #[test]
    fn test_clean_never_climbs_above_root() {
        assert_eq!(clean_path(Path::new("/../../x.h")), PathBuf::from("/x.h"));
    }

    #[test]
    fn test_clean_relative_keeps_leading_parents() {
        assert_eq!(clean_path(Path::new("../a/./b.h")), PathBuf::from("../a/b.h"));
        assert_eq!(clean_path(Path::new("a/..")), PathBuf::from("."));
    }

    #[test]
    fn test_clean_redundant_separators() {
        assert_eq!(clean_path(Path::new("/a//b///c.h")), PathBuf::from("/a/b/c.h"));
    }

    #[test]
    fn test_absolutize_relative() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(absolutize(Path::new("./inc/../x.h")), cwd.join("x.h"));
    }

    #[test]
    fn test_relative_to() {
        assert_eq!(
            relative_to(Path::new("/proj/src/a.h"), Path::new("/proj")),
            PathBuf::from("src/a.h")
        );
        assert_eq!(
            relative_to(Path::new("/other/a.h"), Path::new("/proj")),
            PathBuf::from("/other/a.h")
        );
    }

    #[test]
    fn test_base_name() {
        assert_eq!(base_name("a/b/c.h"), "c.h");
        assert_eq!(base_name("vector"), "vector");
        assert_eq!(base_name("../up.h"), "up.h");
    }
}
