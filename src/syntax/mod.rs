// Parsed file records built from paths and bytes
pub mod file;
pub mod parser;

pub use file::FileInfo;
pub use parser::{is_recognized_extension, load_and_parse, load_file, parse_source};
