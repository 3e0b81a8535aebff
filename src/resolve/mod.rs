//! Include path resolution
//!
//! Maps raw include targets to clean absolute paths using an ordered list of
//! include roots and the run's [`AllowSet`]:
//!
//! - [`Resolver::classify`] decides whether a file's own includes are followed
//! - [`Resolver::locate`] finds an include target under the roots
//! - [`resolve_imports`] and [`resolve_exports`] turn a parsed file into
//!   graph records

mod allow_set;
mod config;
mod exports;
mod imports;
mod resolver;

pub use allow_set::AllowSet;
pub use config::{IncludeRoot, ResolverConfig, RootMode};
pub use exports::{ExportEntry, resolve_exports};
pub use imports::{ImportEdge, resolve_imports};
pub use resolver::{Classification, Located, Resolver};
