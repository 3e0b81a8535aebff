//! Run-scoped set of unlocked library headers.

use std::hash::BuildHasherDefault;
use std::path::{Path, PathBuf};

use indexmap::IndexSet;
use parking_lot::RwLock;
use rustc_hash::FxHasher;

type FxIndexSet<T> = IndexSet<T, BuildHasherDefault<FxHasher>>;

/// Absolute paths reached from project code during one run.
///
/// The set only grows. Inserting a path that is already present is a no-op,
/// so concurrent unlocks of the same header from several threads are safe.
/// Paths are kept in unlock order.
#[derive(Debug, Default)]
pub struct AllowSet {
    paths: RwLock<FxIndexSet<PathBuf>>,
}

impl AllowSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `path` if absent. Returns `true` when this call unlocked it.
    pub fn insert(&self, path: impl Into<PathBuf>) -> bool {
        let path = path.into();
        if self.contains(&path) {
            return false;
        }
        self.paths.write().insert(path)
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.paths.read().contains(path)
    }

    pub fn len(&self) -> usize {
        self.paths.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.read().is_empty()
    }

    /// Copy of the current contents in unlock order
    pub fn snapshot(&self) -> Vec<PathBuf> {
        self.paths.read().iter().cloned().collect()
    }
}

impl<P: Into<PathBuf>> FromIterator<P> for AllowSet {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        let set = Self::new();
        for path in iter {
            set.insert(path);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rayon::prelude::*;

    #[test]
    fn test_insert_is_idempotent() {
        let set = AllowSet::new();
        assert!(set.insert("/usr/include/vector"));
        assert!(!set.insert("/usr/include/vector"));
        assert_eq!(set.len(), 1);
        assert!(set.contains(Path::new("/usr/include/vector")));
    }

    #[test]
    fn test_snapshot_keeps_unlock_order() {
        let set: AllowSet = ["/b.h", "/a.h", "/c.h", "/a.h"].into_iter().collect();
        assert_eq!(
            set.snapshot(),
            vec![
                PathBuf::from("/b.h"),
                PathBuf::from("/a.h"),
                PathBuf::from("/c.h")
            ]
        );
    }

    #[test]
    fn test_concurrent_inserts_unlock_once() {
        let set = AllowSet::new();
        let unlocked: usize = (0..64)
            .into_par_iter()
            .map(|i| set.insert(format!("/lib/h{}.h", i % 8)) as usize)
            .sum();

        assert_eq!(unlocked, 8);
        assert_eq!(set.len(), 8);
        assert!(!set.is_empty());
    }
}
