//! Domain constants.

/// Extensions recognized as C/C++ headers or translation units by default.
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    "h", "hh", "hpp", "hxx", "c", "cc", "cpp", "cxx", "cppm", "ixx",
];

/// Include targets starting with this marker are resolved against the
/// including file's directory instead of the include roots.
pub const RELATIVE_INCLUDE_MARKER: char = '.';

/// Preprocessor directive names that introduce an include.
pub const INCLUDE_DIRECTIVES: &[&str] = &["include", "include_next", "import"];
