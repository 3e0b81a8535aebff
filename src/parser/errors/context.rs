//! Parse context tracking for context-aware error messages

/// Where in the file a brace-delimited region was opened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseContext {
    /// At the top level of a file
    TopLevel,
    /// Inside a `namespace name { ... }` body
    NamespaceBody,
    /// Inside a brace block the grammar does not model (class bodies,
    /// `extern "C"` blocks, initializers)
    Block,
}

impl ParseContext {
    /// Get a human-readable description of this context for error messages
    pub fn description(&self) -> &'static str {
        match self {
            Self::TopLevel => "at top level",
            Self::NamespaceBody => "in namespace body",
            Self::Block => "in block",
        }
    }
}
