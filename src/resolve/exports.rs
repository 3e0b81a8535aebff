//! Export extraction.
//!
//! Without symbol-level analysis, a file is taken to export the headers it
//! directly includes.

use std::path::PathBuf;

use crate::base::base_name;
use crate::syntax::FileInfo;

/// A name made visible by a file
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ExportEntry {
    pub owner: PathBuf,
    pub exported_name: String,
}

/// One entry per include, named after the base filename of its target
pub fn resolve_exports(file: &FileInfo) -> Vec<ExportEntry> {
    file.includes()
        .into_iter()
        .map(|include| ExportEntry {
            owner: file.absolute_path.clone(),
            exported_name: base_name(include.target).to_string(),
        })
        .collect()
}
