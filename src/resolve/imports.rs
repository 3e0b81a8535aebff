//! Import edge extraction.

use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use super::resolver::{Classification, Resolver};
use crate::base::constants::RELATIVE_INCLUDE_MARKER;
use crate::base::clean_path;
use crate::syntax::FileInfo;

/// A dependency from one file to another
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ImportEdge {
    pub from: PathBuf,
    pub to: PathBuf,
    /// The include targets as written in the source
    pub raw_symbols: Vec<String>,
}

/// Resolve the includes of `file` into edges.
///
/// Files that are neither under a recursive root nor unlocked produce no
/// edges. Relative targets are joined to the including file's directory;
/// everything else is looked up under the roots, and a hit is unlocked in the
/// allow-set before its edge is emitted. Targets that cannot be found are
/// dropped.
pub fn resolve_imports(resolver: &Resolver<'_>, file: &FileInfo) -> Vec<ImportEdge> {
    if let Classification::NotTracked = resolver.classify(&file.absolute_path) {
        debug!(path = %file.absolute_path.display(), "skipping untracked file");
        return Vec::new();
    }

    let directory = file.absolute_path.parent().unwrap_or(Path::new("/"));
    let mut edges = Vec::new();

    for include in file.includes() {
        let target = include.target;

        if target.starts_with(RELATIVE_INCLUDE_MARKER) || Path::new(target).is_absolute() {
            let to = clean_path(&directory.join(target));
            edges.push(edge(file, to, target));
            continue;
        }

        let Some(located) = resolver.locate(target) else {
            trace!(include = target, from = %file.absolute_path.display(), "unresolved include");
            continue;
        };

        debug!(
            root = %located.root.display(),
            path = %located.path.display(),
            "resolved include"
        );
        if resolver.allow_set().insert(located.path.clone()) && !located.recursive {
            debug!(path = %located.path.display(), "unlocked library header");
        }
        edges.push(edge(file, located.path, target));
    }

    edges
}

fn edge(file: &FileInfo, to: PathBuf, target: &str) -> ImportEdge {
    ImportEdge {
        from: file.absolute_path.clone(),
        to,
        raw_symbols: vec![target.to_string()],
    }
}
