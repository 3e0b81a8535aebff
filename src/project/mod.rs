pub mod file_loader;
mod language;

pub use file_loader::collect_file_paths;
pub use language::{Language, LanguageOptions};
