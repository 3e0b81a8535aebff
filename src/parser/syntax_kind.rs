//! Token kinds produced by the lexer
//!
//! The grammar works on a flat token stream, so unlike a CST there are no
//! node kinds here: every variant is a leaf token.

/// All token kinds of the C/C++ surface syntax we recognize
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA (whitespace and comments - elided before grammar matching)
    // =========================================================================
    WHITESPACE = 0,
    LINE_COMMENT,
    BLOCK_COMMENT,

    // =========================================================================
    // PREPROCESSOR
    // =========================================================================
    INCLUDE_KW,   // #include, #include_next, #import
    PREPROC_LINE, // any other directive, up to the end of the (continued) line

    // =========================================================================
    // LITERALS
    // =========================================================================
    IDENT,  // foo, ::std::vector, A::~A
    NUMBER, // 42, 0x1Fu, 1.5e3
    STRING, // "file.h"
    CHAR,   // 'a'
    ANGLED, // <vector>, only directly after INCLUDE_KW

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    L_BRACE,     // {
    R_BRACE,     // }
    L_BRACKET,   // [
    R_BRACKET,   // ]
    L_PAREN,     // (
    R_PAREN,     // )
    SEMICOLON,   // ;
    COLON,       // :
    COLON_COLON, // ::
    COMMA,       // ,
    DOT,         // .
    ELLIPSIS,    // ...
    EQ,          // =
    LT,          // <
    GT,          // >
    ARROW,       // ->
    STAR,        // *
    AMP,         // &
    AMP_AMP,     // &&
    TILDE,       // ~
    HASH,        // #
    OTHER_PUNCT, // any other operator character

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    NAMESPACE_KW,
    USING_KW,
    CLASS_KW,
    STRUCT_KW,
    UNION_KW,
    ENUM_KW,
    TEMPLATE_KW,
    TYPENAME_KW,
    TYPEDEF_KW,
    INLINE_KW,
    EXPORT_KW,
    IMPORT_KW,
    MODULE_KW,
    EXTERN_KW,
    OPERATOR_KW,
    STATIC_KW,
    VIRTUAL_KW,
    EXPLICIT_KW,
    FRIEND_KW,
    CONSTEXPR_KW,
    CONST_KW,
    VOLATILE_KW,
    NOEXCEPT_KW,
    OVERRIDE_KW,
    FINAL_KW,
    THROW_KW,

    // =========================================================================
    // SPECIAL
    // =========================================================================
    ERROR,
}

impl SyntaxKind {
    /// Whitespace and comments
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::WHITESPACE | Self::LINE_COMMENT | Self::BLOCK_COMMENT)
    }

    /// Check if this is a keyword
    pub fn is_keyword(self) -> bool {
        (self as u16) >= (Self::NAMESPACE_KW as u16) && (self as u16) <= (Self::THROW_KW as u16)
    }

    /// Tokens that need a separating space when rendered next to each other
    pub fn is_word(self) -> bool {
        matches!(self, Self::IDENT | Self::NUMBER) || self.is_keyword()
    }

    /// Keywords that may appear among the declaration specifiers of a
    /// function, before its name
    pub fn is_decl_specifier(self) -> bool {
        matches!(
            self,
            Self::INLINE_KW
                | Self::EXTERN_KW
                | Self::STATIC_KW
                | Self::VIRTUAL_KW
                | Self::EXPLICIT_KW
                | Self::FRIEND_KW
                | Self::CONSTEXPR_KW
                | Self::CONST_KW
                | Self::VOLATILE_KW
                | Self::TYPENAME_KW
                | Self::EXPORT_KW
                | Self::STRUCT_KW
                | Self::CLASS_KW
                | Self::UNION_KW
                | Self::ENUM_KW
        )
    }

    /// Class keys accepted by forward declarations
    pub fn is_class_key(self) -> bool {
        matches!(self, Self::CLASS_KW | Self::STRUCT_KW | Self::UNION_KW)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trivia() {
        assert!(SyntaxKind::WHITESPACE.is_trivia());
        assert!(SyntaxKind::BLOCK_COMMENT.is_trivia());
        assert!(!SyntaxKind::PREPROC_LINE.is_trivia());
    }

    #[test]
    fn test_keyword_range() {
        assert!(SyntaxKind::NAMESPACE_KW.is_keyword());
        assert!(SyntaxKind::THROW_KW.is_keyword());
        assert!(!SyntaxKind::IDENT.is_keyword());
        assert!(!SyntaxKind::ERROR.is_keyword());
    }

    #[test]
    fn test_word_tokens() {
        assert!(SyntaxKind::IDENT.is_word());
        assert!(SyntaxKind::CONST_KW.is_word());
        assert!(!SyntaxKind::LT.is_word());
    }
}
