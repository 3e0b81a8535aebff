//! Typed statements produced by the grammar.
//!
//! A parsed file is a flat, ordered `Vec<Statement>`; only namespaces nest.
//! Each statement is exactly one variant, so there is never a question of
//! which construct a value describes.

/// One recognized top-level (or namespace-level) construct
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Statement {
    /// `#include "target"`
    QuotedInclude { target: String },
    /// `#include <target>`
    AngledInclude { target: String },
    /// `namespace name { body }`; anonymous namespaces have an empty name
    Namespace { name: String, body: Vec<Statement> },
    /// `using namespace a::b;`
    UsingDirective { namespace_path: String },
    /// `using a::b, c::d;`
    UsingDeclaration { qualified_names: Vec<String> },
    /// `using alias = target;` or `typedef target alias;`
    TypeAlias { alias: String, target: String },
    /// `class name;`
    ForwardClass { name: String },
    /// Best-effort function signature, with or without a body
    FunctionDeclaration {
        return_type: String,
        name: String,
        parameters: Vec<String>,
        qualifiers: Vec<String>,
    },
    /// A non-include preprocessor line or one unrecognized token
    Ignored { text: String },
    /// A lone `;`
    Empty,
}

/// Which delimiter an include used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum IncludeStyle {
    Quoted,
    Angled,
}

/// A borrowed view of an include statement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IncludeRef<'a> {
    pub target: &'a str,
    pub style: IncludeStyle,
}

impl Statement {
    /// The include this statement represents, if any
    pub fn as_include(&self) -> Option<IncludeRef<'_>> {
        match self {
            Self::QuotedInclude { target } => Some(IncludeRef {
                target,
                style: IncludeStyle::Quoted,
            }),
            Self::AngledInclude { target } => Some(IncludeRef {
                target,
                style: IncludeStyle::Angled,
            }),
            _ => None,
        }
    }

    pub fn is_include(&self) -> bool {
        self.as_include().is_some()
    }

    /// Shorthand used by tests and callers building expected statements
    pub fn ignored(text: impl Into<String>) -> Self {
        Self::Ignored { text: text.into() }
    }
}

/// Every include in `statements`, depth-first in source order.
///
/// Includes written inside namespace bodies are reported where they appear.
/// The walk keeps its own stack, so nesting depth is bounded by memory only.
pub fn includes(statements: &[Statement]) -> Vec<IncludeRef<'_>> {
    let mut found = Vec::new();
    let mut pending = vec![statements.iter()];
    while let Some(level) = pending.last_mut() {
        let Some(statement) = level.next() else {
            pending.pop();
            continue;
        };
        match statement {
            Statement::Namespace { body, .. } => pending.push(body.iter()),
            other => found.extend(other.as_include()),
        }
    }
    found
}

impl Drop for Statement {
    // Unnest bodies before they drop so deep namespace chains do not recurse
    fn drop(&mut self) {
        let Self::Namespace { body, .. } = self else {
            return;
        };
        let mut pending = std::mem::take(body);
        while let Some(mut statement) = pending.pop() {
            if let Self::Namespace { body, .. } = &mut statement {
                pending.append(body);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_include() {
        let quoted = Statement::QuotedInclude {
            target: "file.h".to_string(),
        };
        let include = quoted.as_include().unwrap();
        assert_eq!(include.target, "file.h");
        assert_eq!(include.style, IncludeStyle::Quoted);

        assert!(Statement::Empty.as_include().is_none());
        assert!(!Statement::ignored("#pragma once").is_include());
    }

    #[test]
    fn test_includes_descend_into_namespaces() {
        let statements = vec![
            Statement::AngledInclude {
                target: "vector".to_string(),
            },
            Statement::Namespace {
                name: "outer".to_string(),
                body: vec![Statement::Namespace {
                    name: "inner".to_string(),
                    body: vec![Statement::QuotedInclude {
                        target: "deep.h".to_string(),
                    }],
                }],
            },
            Statement::QuotedInclude {
                target: "last.h".to_string(),
            },
        ];

        let targets: Vec<_> = includes(&statements).iter().map(|i| i.target).collect();
        assert_eq!(targets, vec!["vector", "deep.h", "last.h"]);
    }

    #[test]
    fn test_deep_namespace_chain_walks_and_drops() {
        let mut statement = Statement::QuotedInclude {
            target: "innermost.h".to_string(),
        };
        for _ in 0..200_000 {
            statement = Statement::Namespace {
                name: "n".to_string(),
                body: vec![statement],
            };
        }
        let statements = vec![statement];

        let targets: Vec<_> = includes(&statements).iter().map(|i| i.target).collect();
        assert_eq!(targets, vec!["innermost.h"]);
    }
}
