//! Logos-based lexer for C/C++ headers
//!
//! Fast tokenization using the logos crate. The lexer is context-free except
//! for one rule: directly after an include directive, `<...>` on the same line
//! is a single angle literal. Everywhere else `<` and `>` stay punctuation so
//! template arguments and comparisons lex normally.

use super::syntax_kind::SyntaxKind;
use crate::base::constants::INCLUDE_DIRECTIVES;
use logos::Logos;
use text_size::TextSize;

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
    pub offset: TextSize,
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
    after_include: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
            after_include: false,
        }
    }

    /// Lex `<target>` following an include directive.
    ///
    /// The literal must close on the same line; otherwise lexing falls back
    /// to ordinary punctuation.
    fn angled_literal(&mut self) -> Option<Token<'a>> {
        let rest: &'a str = self.inner.remainder();
        let tail = rest.trim_start_matches([' ', '\t']);
        let leading = rest.len() - tail.len();

        if !tail.starts_with('<') {
            return None;
        }
        let close = tail.find(['>', '\n'])?;
        if tail.as_bytes()[close] != b'>' {
            return None;
        }

        let text = &tail[..=close];
        let offset = TextSize::new((self.inner.span().end + leading) as u32);
        self.inner.bump(leading + close + 1);

        Some(Token {
            kind: SyntaxKind::ANGLED,
            text,
            offset,
        })
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if std::mem::take(&mut self.after_include)
            && let Some(token) = self.angled_literal()
        {
            return Some(token);
        }

        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let offset = TextSize::new(self.inner.span().start as u32);

        let kind = match logos_token {
            Ok(t) => t.into(),
            Err(()) => SyntaxKind::ERROR,
        };
        self.after_include = kind == SyntaxKind::INCLUDE_KW;

        Some(Token { kind, text, offset })
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// What a `#name` directive turned out to be
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveKind {
    Include,
    Other,
}

/// Classify a directive and, unless it is an include, swallow the rest of
/// its line including backslash continuations.
fn directive(lex: &mut logos::Lexer<LogosToken>) -> DirectiveKind {
    let name = lex.slice().trim_start_matches('#').trim_start();
    if INCLUDE_DIRECTIVES.contains(&name) {
        return DirectiveKind::Include;
    }

    let bytes = lex.remainder().as_bytes();
    let mut end = 0;
    while end < bytes.len() {
        match bytes[end] {
            b'\n' => break,
            b'\\' if bytes.get(end + 1) == Some(&b'\n') => end += 2,
            b'\\' if bytes.get(end + 1) == Some(&b'\r') && bytes.get(end + 2) == Some(&b'\n') => {
                end += 3
            }
            _ => end += 1,
        }
    }
    lex.bump(end);
    DirectiveKind::Other
}

/// Logos token enum - maps to SyntaxKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LogosToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\r\n\f\v]+")]
    Whitespace,

    #[regex(r"//[^\n]*")]
    LineComment,

    #[regex(r"/\*[^*]*\*+([^/*][^*]*\*+)*/")]
    BlockComment,

    // =========================================================================
    // PREPROCESSOR
    // =========================================================================
    #[regex(r"#[ \t]*[A-Za-z_][A-Za-z0-9_]*", directive)]
    Directive(DirectiveKind),

    // =========================================================================
    // LITERALS
    // =========================================================================
    #[regex(r"(::)?[A-Za-z_][A-Za-z0-9_]*(::~?[A-Za-z_][A-Za-z0-9_]*)*")]
    Ident,

    #[regex(r"[0-9][0-9A-Za-z_.']*")]
    Number,

    #[regex(r#""([^"\\\n]|\\.)*""#)]
    String,

    #[regex(r"'([^'\\\n]|\\.)*'")]
    Char,

    // =========================================================================
    // MULTI-CHARACTER PUNCTUATION (must come before single-char)
    // =========================================================================
    #[token("::")]
    ColonColon,

    #[token("...")]
    Ellipsis,

    #[token("->")]
    Arrow,

    #[token("&&")]
    AmpAmp,

    // =========================================================================
    // SINGLE-CHARACTER PUNCTUATION
    // =========================================================================
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("=")]
    Eq,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("*")]
    Star,
    #[token("&")]
    Amp,
    #[token("~")]
    Tilde,
    #[token("#")]
    Hash,
    #[regex(r"[-+/%^|!?@$\\`]")]
    OtherPunct,

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    #[token("namespace")]
    NamespaceKw,
    #[token("using")]
    UsingKw,
    #[token("class")]
    ClassKw,
    #[token("struct")]
    StructKw,
    #[token("union")]
    UnionKw,
    #[token("enum")]
    EnumKw,
    #[token("template")]
    TemplateKw,
    #[token("typename")]
    TypenameKw,
    #[token("typedef")]
    TypedefKw,
    #[token("inline")]
    InlineKw,
    #[token("export")]
    ExportKw,
    #[token("import")]
    ImportKw,
    #[token("module")]
    ModuleKw,
    #[token("extern")]
    ExternKw,
    #[token("operator")]
    OperatorKw,
    #[token("static")]
    StaticKw,
    #[token("virtual")]
    VirtualKw,
    #[token("explicit")]
    ExplicitKw,
    #[token("friend")]
    FriendKw,
    #[token("constexpr")]
    ConstexprKw,
    #[token("const")]
    ConstKw,
    #[token("volatile")]
    VolatileKw,
    #[token("noexcept")]
    NoexceptKw,
    #[token("override")]
    OverrideKw,
    #[token("final")]
    FinalKw,
    #[token("throw")]
    ThrowKw,
}

impl From<LogosToken> for SyntaxKind {
    fn from(token: LogosToken) -> Self {
        use LogosToken::*;
        match token {
            // Trivia
            Whitespace => SyntaxKind::WHITESPACE,
            LineComment => SyntaxKind::LINE_COMMENT,
            BlockComment => SyntaxKind::BLOCK_COMMENT,

            // Preprocessor
            Directive(DirectiveKind::Include) => SyntaxKind::INCLUDE_KW,
            Directive(DirectiveKind::Other) => SyntaxKind::PREPROC_LINE,

            // Literals
            Ident => SyntaxKind::IDENT,
            Number => SyntaxKind::NUMBER,
            String => SyntaxKind::STRING,
            Char => SyntaxKind::CHAR,

            // Multi-char punctuation
            ColonColon => SyntaxKind::COLON_COLON,
            Ellipsis => SyntaxKind::ELLIPSIS,
            Arrow => SyntaxKind::ARROW,
            AmpAmp => SyntaxKind::AMP_AMP,

            // Single-char punctuation
            LBrace => SyntaxKind::L_BRACE,
            RBrace => SyntaxKind::R_BRACE,
            LBracket => SyntaxKind::L_BRACKET,
            RBracket => SyntaxKind::R_BRACKET,
            LParen => SyntaxKind::L_PAREN,
            RParen => SyntaxKind::R_PAREN,
            Semicolon => SyntaxKind::SEMICOLON,
            Colon => SyntaxKind::COLON,
            Comma => SyntaxKind::COMMA,
            Dot => SyntaxKind::DOT,
            Eq => SyntaxKind::EQ,
            Lt => SyntaxKind::LT,
            Gt => SyntaxKind::GT,
            Star => SyntaxKind::STAR,
            Amp => SyntaxKind::AMP,
            Tilde => SyntaxKind::TILDE,
            Hash => SyntaxKind::HASH,
            OtherPunct => SyntaxKind::OTHER_PUNCT,

            // Keywords
            NamespaceKw => SyntaxKind::NAMESPACE_KW,
            UsingKw => SyntaxKind::USING_KW,
            ClassKw => SyntaxKind::CLASS_KW,
            StructKw => SyntaxKind::STRUCT_KW,
            UnionKw => SyntaxKind::UNION_KW,
            EnumKw => SyntaxKind::ENUM_KW,
            TemplateKw => SyntaxKind::TEMPLATE_KW,
            TypenameKw => SyntaxKind::TYPENAME_KW,
            TypedefKw => SyntaxKind::TYPEDEF_KW,
            InlineKw => SyntaxKind::INLINE_KW,
            ExportKw => SyntaxKind::EXPORT_KW,
            ImportKw => SyntaxKind::IMPORT_KW,
            ModuleKw => SyntaxKind::MODULE_KW,
            ExternKw => SyntaxKind::EXTERN_KW,
            OperatorKw => SyntaxKind::OPERATOR_KW,
            StaticKw => SyntaxKind::STATIC_KW,
            VirtualKw => SyntaxKind::VIRTUAL_KW,
            ExplicitKw => SyntaxKind::EXPLICIT_KW,
            FriendKw => SyntaxKind::FRIEND_KW,
            ConstexprKw => SyntaxKind::CONSTEXPR_KW,
            ConstKw => SyntaxKind::CONST_KW,
            VolatileKw => SyntaxKind::VOLATILE_KW,
            NoexceptKw => SyntaxKind::NOEXCEPT_KW,
            OverrideKw => SyntaxKind::OVERRIDE_KW,
            FinalKw => SyntaxKind::FINAL_KW,
            ThrowKw => SyntaxKind::THROW_KW,
        }
    }
}
