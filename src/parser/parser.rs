//! Backtracking descent parser for C/C++ headers
//!
//! Builds an ordered statement list from the non-trivia tokens. At every
//! statement boundary the alternatives are tried in a fixed order and the
//! first one that matches wins; a failed alternative rewinds to where it
//! started. Whatever no alternative models falls through to a catch-all that
//! turns single tokens into [`Statement::Ignored`], so the parse only stops on
//! an unbalanced brace.

use std::ops::Range;

use text_size::{TextRange, TextSize};

use super::ast::Statement;
use super::errors::{ErrorCode, ParseContext, Severity, SyntaxError};
use super::errors::{unclosed_brace, unexpected_closing};
use super::lexer::{Lexer, Token};
use super::syntax_kind::SyntaxKind;

/// Parse result containing the statements and any diagnostics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parse {
    pub statements: Vec<Statement>,
    pub errors: Vec<SyntaxError>,
}

impl Parse {
    /// Check if parsing succeeded without errors (warnings are allowed)
    pub fn ok(&self) -> bool {
        !self.errors.iter().any(|e| e.severity.is_error())
    }

    /// The structural error that stopped the parse, if any
    pub fn structural_error(&self) -> Option<&SyntaxError> {
        self.errors.iter().find(|e| e.is_structural())
    }

    /// Strict view: the statements, or the error that truncated them
    pub fn into_result(self) -> Result<Vec<Statement>, SyntaxError> {
        match self.errors.into_iter().find(SyntaxError::is_structural) {
            Some(error) => Err(error),
            None => Ok(self.statements),
        }
    }
}

/// Parse header or source text into statements
pub fn parse(input: &str) -> Parse {
    let tokens: Vec<_> = Lexer::new(input).filter(|t| !t.kind.is_trivia()).collect();
    let mut parser = Parser::new(&tokens, TextSize::of(input));
    let statements = parser.parse_source_file();
    parser.finish(statements)
}

/// The parser state
struct Parser<'a> {
    tokens: &'a [Token<'a>],
    pos: usize,
    eof: TextSize,
    errors: Vec<SyntaxError>,
    /// Start positions from which no function signature can be scanned
    no_signature: Range<usize>,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token<'a>], eof: TextSize) -> Self {
        Self {
            tokens,
            pos: 0,
            eof,
            errors: Vec::new(),
            no_signature: 0..0,
        }
    }

    fn finish(self, statements: Vec<Statement>) -> Parse {
        Parse {
            statements,
            errors: self.errors,
        }
    }

    // =========================================================================
    // Token inspection
    // =========================================================================

    fn current(&self) -> Option<&'a Token<'a>> {
        self.tokens.get(self.pos)
    }

    fn nth(&self, n: usize) -> Option<SyntaxKind> {
        self.tokens.get(self.pos + n).map(|t| t.kind)
    }

    fn at(&self, kind: SyntaxKind) -> bool {
        self.nth(0) == Some(kind)
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Tokens consumed since `start`
    fn since(&self, start: usize) -> &'a [Token<'a>] {
        let tokens = self.tokens;
        &tokens[start..self.pos]
    }

    // =========================================================================
    // Token consumption
    // =========================================================================

    fn bump(&mut self) -> Option<&'a Token<'a>> {
        let token = self.current()?;
        self.pos += 1;
        Some(token)
    }

    fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: SyntaxKind) -> Option<()> {
        self.eat(kind).then_some(())
    }

    fn expect_ident(&mut self) -> Option<&'a str> {
        if self.at(SyntaxKind::IDENT) {
            self.bump().map(|t| t.text)
        } else {
            None
        }
    }

    /// Run `rule`, rewinding to the starting token if it does not match
    fn attempt<T>(&mut self, rule: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        let checkpoint = self.pos;
        let result = rule(self);
        if result.is_none() {
            self.pos = checkpoint;
        }
        result
    }

    /// Consume tokens up to (not including) the first `stop` token at
    /// nesting depth zero. Fails on end of input or an unbalanced closer.
    fn tokens_until(&mut self, stop: &[SyntaxKind]) -> Option<&'a [Token<'a>]> {
        let start = self.pos;
        let mut depth = 0usize;
        loop {
            let kind = self.nth(0)?;
            if depth == 0 && stop.contains(&kind) {
                return Some(self.since(start));
            }
            match kind {
                SyntaxKind::L_PAREN | SyntaxKind::L_BRACKET | SyntaxKind::L_BRACE => depth += 1,
                SyntaxKind::R_PAREN | SyntaxKind::R_BRACKET | SyntaxKind::R_BRACE => {
                    depth = depth.checked_sub(1)?;
                }
                _ => {}
            }
            self.pos += 1;
        }
    }

    /// Skip a balanced `open ... close` group starting at the current token
    fn skip_balanced(&mut self, open: SyntaxKind, close: SyntaxKind) -> Option<()> {
        self.expect(open)?;
        let mut depth = 1usize;
        while depth > 0 {
            let kind = self.bump()?.kind;
            if kind == open {
                depth += 1;
            } else if kind == close {
                depth -= 1;
            }
        }
        Some(())
    }

    /// Skip an optional `template <...>` header
    fn skip_template_header(&mut self) -> Option<()> {
        if !self.at(SyntaxKind::TEMPLATE_KW) {
            return Some(());
        }
        self.bump();
        self.expect(SyntaxKind::LT)?;
        let mut depth = 1usize;
        while depth > 0 {
            match self.bump()?.kind {
                SyntaxKind::LT => depth += 1,
                SyntaxKind::GT => depth -= 1,
                SyntaxKind::SEMICOLON | SyntaxKind::L_BRACE | SyntaxKind::R_BRACE => return None,
                _ => {}
            }
        }
        Some(())
    }

    // =========================================================================
    // Statement sequences
    // =========================================================================

    /// SourceFile = Statement*
    ///
    /// Open braces live on an explicit frame stack rather than the call
    /// stack, so nesting depth is bounded by memory only.
    fn parse_source_file(&mut self) -> Vec<Statement> {
        let mut out = Vec::new();
        let mut open: Vec<Frame> = Vec::new();

        while let Some(token) = self.current() {
            if token.kind == SyntaxKind::R_BRACE {
                let Some(frame) = open.pop() else {
                    self.errors
                        .push(unexpected_closing(ParseContext::TopLevel, token_range(token)));
                    return out;
                };
                self.bump();
                frame.close(&mut out, true);
                continue;
            }
            if let Some(frame) = self.parse_statement(&mut out) {
                open.push(frame);
            }
        }

        // Input ended inside a body: report the innermost brace, keep the
        // partial statements of every open level
        if let Some(innermost) = open.last() {
            self.errors
                .push(unclosed_brace(innermost.context(), innermost.opened(), self.eof));
        }
        while let Some(frame) = open.pop() {
            frame.close(&mut out, false);
        }
        out
    }

    /// Statement = QuotedInclude | AngledInclude | Namespace | Using
    ///           | ForwardClass | Function | Empty | Preprocessor | Ignored
    ///
    /// Returns the frame to push when the statement opens a body.
    fn parse_statement(&mut self, out: &mut Vec<Statement>) -> Option<Frame> {
        if let Some(statement) = self.attempt(Self::quoted_include) {
            out.push(statement);
            return None;
        }
        if let Some(statement) = self.attempt(Self::angled_include) {
            out.push(statement);
            return None;
        }
        if let Some((name, opened)) = self.attempt(Self::namespace_header) {
            return Some(Frame::Namespace {
                name,
                opened,
                outer: std::mem::take(out),
            });
        }

        let rules: [fn(&mut Self) -> Option<Statement>; 5] = [
            Self::using_statement,
            Self::forward_class,
            Self::function_declaration,
            Self::empty_statement,
            Self::preprocessor_line,
        ];
        for rule in rules {
            if let Some(statement) = self.attempt(rule) {
                out.push(statement);
                return None;
            }
        }

        self.catch_all(out)
    }

    // =========================================================================
    // Grammar rules
    // =========================================================================

    /// QuotedInclude = '#include' STRING
    fn quoted_include(&mut self) -> Option<Statement> {
        self.expect(SyntaxKind::INCLUDE_KW)?;
        let token = self.current().filter(|t| t.kind == SyntaxKind::STRING)?;
        self.bump();
        Some(Statement::QuotedInclude {
            target: strip_delimiters(token.text).to_string(),
        })
    }

    /// AngledInclude = '#include' ANGLED
    fn angled_include(&mut self) -> Option<Statement> {
        self.expect(SyntaxKind::INCLUDE_KW)?;
        let token = self.current().filter(|t| t.kind == SyntaxKind::ANGLED)?;
        self.bump();
        Some(Statement::AngledInclude {
            target: strip_delimiters(token.text).to_string(),
        })
    }

    /// NamespaceHeader = 'inline'? 'namespace' Name? '{'
    fn namespace_header(&mut self) -> Option<(String, TextRange)> {
        self.eat(SyntaxKind::INLINE_KW);
        self.expect(SyntaxKind::NAMESPACE_KW)?;

        let mut name = String::new();
        while let Some(token) = self.current() {
            match token.kind {
                SyntaxKind::IDENT | SyntaxKind::COLON_COLON => name.push_str(token.text),
                SyntaxKind::INLINE_KW => {}
                _ => break,
            }
            self.bump();
        }

        let brace = self.current().filter(|t| t.kind == SyntaxKind::L_BRACE)?;
        self.bump();
        Some((name, token_range(brace)))
    }

    /// Using = 'using' 'namespace' Name ';'
    ///       | Template? 'using' IDENT '=' Type ';'
    ///       | 'using' 'typename'? Name (',' 'typename'? Name)* ';'
    ///       | 'typedef' Type IDENT ';'
    fn using_statement(&mut self) -> Option<Statement> {
        if self.eat(SyntaxKind::TYPEDEF_KW) {
            return self.typedef_alias();
        }

        self.skip_template_header()?;
        self.expect(SyntaxKind::USING_KW)?;

        if self.eat(SyntaxKind::NAMESPACE_KW) {
            let namespace_path = self.expect_ident()?.to_string();
            self.expect(SyntaxKind::SEMICOLON)?;
            return Some(Statement::UsingDirective { namespace_path });
        }

        if self.at(SyntaxKind::IDENT) && self.nth(1) == Some(SyntaxKind::EQ) {
            let alias = self.expect_ident()?.to_string();
            self.bump();
            let target = self.tokens_until(&[SyntaxKind::SEMICOLON, SyntaxKind::L_BRACE])?;
            self.expect(SyntaxKind::SEMICOLON)?;
            if target.is_empty() {
                return None;
            }
            return Some(Statement::TypeAlias {
                alias,
                target: render(target),
            });
        }

        let mut qualified_names = Vec::new();
        loop {
            self.eat(SyntaxKind::TYPENAME_KW);
            qualified_names.push(self.expect_ident()?.to_string());
            if !self.eat(SyntaxKind::COMMA) {
                break;
            }
        }
        self.expect(SyntaxKind::SEMICOLON)?;
        Some(Statement::UsingDeclaration { qualified_names })
    }

    /// Simple `typedef T Alias;`. Function pointers, arrays and multiple
    /// declarators are left to the catch-all.
    fn typedef_alias(&mut self) -> Option<Statement> {
        let tokens = self.tokens_until(&[SyntaxKind::SEMICOLON, SyntaxKind::L_BRACE])?;
        self.expect(SyntaxKind::SEMICOLON)?;

        let (alias, target) = tokens.split_last()?;
        let mut angle_depth = 0usize;
        let mut plain = true;
        for token in tokens {
            match token.kind {
                SyntaxKind::LT => angle_depth += 1,
                SyntaxKind::GT => angle_depth = angle_depth.saturating_sub(1),
                SyntaxKind::COMMA if angle_depth == 0 => plain = false,
                SyntaxKind::L_PAREN | SyntaxKind::L_BRACKET => plain = false,
                _ => {}
            }
        }
        if alias.kind != SyntaxKind::IDENT || target.is_empty() || !plain {
            return None;
        }
        Some(Statement::TypeAlias {
            alias: alias.text.to_string(),
            target: render(target),
        })
    }

    /// ForwardClass = Template? ClassKey IDENT? IDENT ';'
    ///              | 'enum' ('class' | 'struct') IDENT (':' Type)? ';'
    ///              | 'enum' IDENT ':' Type ';'
    fn forward_class(&mut self) -> Option<Statement> {
        self.skip_template_header()?;

        if self.eat(SyntaxKind::ENUM_KW) {
            let scoped = self.eat(SyntaxKind::CLASS_KW) || self.eat(SyntaxKind::STRUCT_KW);
            let name = self.expect_ident()?.to_string();
            if self.eat(SyntaxKind::COLON) {
                let base = self.tokens_until(&[SyntaxKind::SEMICOLON, SyntaxKind::L_BRACE])?;
                if base.is_empty() {
                    return None;
                }
            } else if !scoped {
                return None;
            }
            self.expect(SyntaxKind::SEMICOLON)?;
            return Some(Statement::ForwardClass { name });
        }

        if !self.current()?.kind.is_class_key() {
            return None;
        }
        self.bump();

        // `class EXPORT_MACRO Name;` keeps the last identifier
        let mut name = self.expect_ident()?;
        if let Some(second) = self.expect_ident() {
            name = second;
        }
        self.expect(SyntaxKind::SEMICOLON)?;
        Some(Statement::ForwardClass {
            name: name.to_string(),
        })
    }

    /// Function = Template? Specifiers Name '(' Params ')' Qualifiers
    ///            (';' | '{' ... '}')
    fn function_declaration(&mut self) -> Option<Statement> {
        self.skip_template_header()?;
        if self.no_signature.contains(&self.pos) {
            return None;
        }

        let start = self.pos;
        let mut name_start = None;
        let mut angle_depth = 0usize;

        while !self.at(SyntaxKind::L_PAREN) || angle_depth > 0 {
            let Some(token) = self.current() else {
                return self.dead_end(start);
            };
            match token.kind {
                SyntaxKind::OPERATOR_KW => {
                    name_start = Some(self.pos);
                    self.bump();
                    self.operator_symbol()?;
                    break;
                }
                SyntaxKind::IDENT if is_qualified_operator(token.text) => {
                    name_start = Some(self.pos);
                    self.bump();
                    self.operator_symbol()?;
                    break;
                }
                SyntaxKind::LT => angle_depth += 1,
                SyntaxKind::GT => match angle_depth.checked_sub(1) {
                    Some(depth) => angle_depth = depth,
                    None => return self.dead_end(start),
                },
                SyntaxKind::IDENT
                | SyntaxKind::STAR
                | SyntaxKind::AMP
                | SyntaxKind::AMP_AMP
                | SyntaxKind::COLON_COLON => {}
                SyntaxKind::COMMA | SyntaxKind::NUMBER if angle_depth > 0 => {}
                SyntaxKind::STRING if self.previous_kind() == Some(SyntaxKind::EXTERN_KW) => {}
                kind if kind.is_decl_specifier() => {}
                SyntaxKind::L_PAREN => return None,
                _ => return self.dead_end(start),
            }
            self.bump();
        }

        let prefix = self.since(start);
        let (return_tokens, name_tokens) = match name_start {
            Some(at) => prefix.split_at(at - start),
            None => {
                let (last, _) = prefix.split_last()?;
                if last.kind != SyntaxKind::IDENT {
                    return None;
                }
                prefix.split_at(prefix.len() - 1)
            }
        };
        let has_type = return_tokens.iter().any(|t| t.kind.is_word());
        if !has_type && name_start.is_none() {
            return None;
        }

        let parameters = self.parameter_list()?;
        let qualifiers = self.function_tail()?;

        Some(Statement::FunctionDeclaration {
            return_type: render(return_tokens),
            name: render(name_tokens),
            parameters,
            qualifiers,
        })
    }

    /// The prefix scan from `start` stopped at a token no later start in the
    /// same run can get past either, so those starts are skipped.
    fn dead_end(&mut self, start: usize) -> Option<Statement> {
        self.no_signature = start..self.pos + 1;
        None
    }

    /// Tokens after `operator` up to the parameter list
    fn operator_symbol(&mut self) -> Option<()> {
        // `operator()` carries its own parentheses
        if self.at(SyntaxKind::L_PAREN) && self.nth(1) == Some(SyntaxKind::R_PAREN) {
            self.pos += 2;
            return self.at(SyntaxKind::L_PAREN).then_some(());
        }
        let mut consumed = 0;
        while !self.at(SyntaxKind::L_PAREN) {
            match self.current()?.kind {
                SyntaxKind::SEMICOLON | SyntaxKind::L_BRACE | SyntaxKind::R_BRACE => return None,
                _ => {}
            }
            self.bump();
            consumed += 1;
            if consumed > 4 {
                return None;
            }
        }
        (consumed > 0).then_some(())
    }

    fn previous_kind(&self) -> Option<SyntaxKind> {
        self.pos
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .map(|t| t.kind)
    }

    /// '(' Param (',' Param)* ')'
    fn parameter_list(&mut self) -> Option<Vec<String>> {
        self.expect(SyntaxKind::L_PAREN)?;
        let inner = self.tokens_until(&[SyntaxKind::R_PAREN])?;
        self.expect(SyntaxKind::R_PAREN)?;

        let mut parameters = Vec::new();
        let mut depth = 0usize;
        let mut angle_depth = 0usize;
        let mut start = 0;
        for (i, token) in inner.iter().enumerate() {
            match token.kind {
                SyntaxKind::L_PAREN | SyntaxKind::L_BRACKET | SyntaxKind::L_BRACE => depth += 1,
                SyntaxKind::R_PAREN | SyntaxKind::R_BRACKET | SyntaxKind::R_BRACE => {
                    depth = depth.saturating_sub(1)
                }
                SyntaxKind::LT => angle_depth += 1,
                SyntaxKind::GT => angle_depth = angle_depth.saturating_sub(1),
                SyntaxKind::COMMA if depth == 0 && angle_depth == 0 => {
                    parameters.push(render(&inner[start..i]));
                    start = i + 1;
                }
                _ => {}
            }
        }
        if !inner.is_empty() {
            parameters.push(render(&inner[start..]));
        }
        Some(parameters)
    }

    /// Qualifiers after the parameter list, then `;` or a balanced body
    fn function_tail(&mut self) -> Option<Vec<String>> {
        let mut qualifiers = Vec::new();
        loop {
            let token = self.current()?;
            match token.kind {
                SyntaxKind::SEMICOLON => {
                    self.bump();
                    return Some(qualifiers);
                }
                SyntaxKind::L_BRACE => {
                    self.skip_balanced(SyntaxKind::L_BRACE, SyntaxKind::R_BRACE)?;
                    return Some(qualifiers);
                }
                SyntaxKind::CONST_KW
                | SyntaxKind::VOLATILE_KW
                | SyntaxKind::OVERRIDE_KW
                | SyntaxKind::FINAL_KW
                | SyntaxKind::AMP
                | SyntaxKind::AMP_AMP => {
                    self.bump();
                    qualifiers.push(token.text.to_string());
                }
                SyntaxKind::NOEXCEPT_KW | SyntaxKind::THROW_KW => {
                    let start = self.pos;
                    self.bump();
                    if self.at(SyntaxKind::L_PAREN) {
                        self.skip_balanced(SyntaxKind::L_PAREN, SyntaxKind::R_PAREN)?;
                    }
                    qualifiers.push(render(self.since(start)));
                }
                SyntaxKind::ARROW => {
                    let start = self.pos;
                    self.bump();
                    self.tokens_until(&[
                        SyntaxKind::SEMICOLON,
                        SyntaxKind::L_BRACE,
                        SyntaxKind::EQ,
                        SyntaxKind::OVERRIDE_KW,
                        SyntaxKind::FINAL_KW,
                    ])?;
                    qualifiers.push(render(self.since(start)));
                }
                SyntaxKind::EQ => {
                    self.bump();
                    let value = self.bump()?;
                    let pure = value.kind == SyntaxKind::NUMBER && value.text == "0";
                    let special = value.kind == SyntaxKind::IDENT
                        && matches!(value.text, "default" | "delete");
                    if !pure && !special {
                        return None;
                    }
                    qualifiers.push(format!("= {}", value.text));
                    self.expect(SyntaxKind::SEMICOLON)?;
                    return Some(qualifiers);
                }
                SyntaxKind::COLON => {
                    // constructor initializer list
                    self.bump();
                    self.tokens_until(&[SyntaxKind::L_BRACE, SyntaxKind::SEMICOLON])?;
                    self.skip_initializers()?;
                }
                _ => return None,
            }
        }
    }

    /// Member initializers may use braces (`a{1}`); the body is the first
    /// `{` that does not directly follow an identifier or `>`.
    fn skip_initializers(&mut self) -> Option<()> {
        while self.at(SyntaxKind::L_BRACE)
            && matches!(self.previous_kind(), Some(SyntaxKind::IDENT | SyntaxKind::GT))
        {
            self.skip_balanced(SyntaxKind::L_BRACE, SyntaxKind::R_BRACE)?;
            self.tokens_until(&[SyntaxKind::L_BRACE, SyntaxKind::SEMICOLON])?;
        }
        self.at(SyntaxKind::L_BRACE).then_some(())
    }

    /// Empty = ';'
    fn empty_statement(&mut self) -> Option<Statement> {
        self.expect(SyntaxKind::SEMICOLON)?;
        Some(Statement::Empty)
    }

    /// Preprocessor = PREPROC_LINE
    fn preprocessor_line(&mut self) -> Option<Statement> {
        let token = self.current().filter(|t| t.kind == SyntaxKind::PREPROC_LINE)?;
        self.bump();
        Some(Statement::ignored(token.text))
    }

    /// Ignore one token. A `{` is kept as a marker and opens a block whose
    /// contents are parsed in place, so includes inside `extern "C" { ... }`
    /// survive.
    fn catch_all(&mut self, out: &mut Vec<Statement>) -> Option<Frame> {
        let token = self.bump()?;

        match token.kind {
            SyntaxKind::L_BRACE => {
                out.push(Statement::ignored(token.text));
                return Some(Frame::Block {
                    opened: token_range(token),
                });
            }
            SyntaxKind::ERROR => {
                self.errors.push(
                    SyntaxError::new(
                        format!("invalid character {:?}", token.text),
                        token_range(token),
                        ErrorCode::E0101,
                    )
                    .with_severity(Severity::Warning),
                );
                out.push(Statement::ignored(token.text));
            }
            _ => out.push(Statement::ignored(token.text)),
        }
        None
    }
}

/// A `{` whose matching `}` has not been reached yet
enum Frame {
    /// Statements before the namespace wait in `outer` while the body fills
    Namespace {
        name: String,
        opened: TextRange,
        outer: Vec<Statement>,
    },
    /// Block contents are spliced into the enclosing list
    Block { opened: TextRange },
}

impl Frame {
    fn context(&self) -> ParseContext {
        match self {
            Self::Namespace { .. } => ParseContext::NamespaceBody,
            Self::Block { .. } => ParseContext::Block,
        }
    }

    fn opened(&self) -> TextRange {
        match self {
            Self::Namespace { opened, .. } | Self::Block { opened } => *opened,
        }
    }

    /// Fold the finished level into the enclosing list held in `out`
    fn close(self, out: &mut Vec<Statement>, balanced: bool) {
        match self {
            Self::Namespace { name, outer, .. } => {
                let body = std::mem::replace(out, outer);
                out.push(Statement::Namespace { name, body });
            }
            Self::Block { .. } if balanced => out.push(Statement::ignored("}")),
            Self::Block { .. } => {}
        }
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn token_range(token: &Token<'_>) -> TextRange {
    TextRange::at(token.offset, TextSize::of(token.text))
}

/// `"file.h"` -> `file.h`, `<vector>` -> `vector`
fn strip_delimiters(text: &str) -> &str {
    if text.len() >= 2 { &text[1..text.len() - 1] } else { text }
}

/// `Foo::operator` lexes as one identifier
fn is_qualified_operator(text: &str) -> bool {
    text.ends_with("::operator")
}

/// Render tokens back into source-like text.
///
/// Adjacent words are separated by one space; a word also gets a space after
/// `,`, `>`, `*`, `&`, `&&`, `...` and `->`, and `=` is spaced on both sides.
/// Everything else is joined directly, so `Ptr<Bar>` stays `Ptr<Bar>`.
pub(crate) fn render(tokens: &[Token<'_>]) -> String {
    let mut text = String::new();
    let mut previous: Option<SyntaxKind> = None;

    for token in tokens {
        if let Some(prev) = previous {
            let spaced = match (prev, token.kind) {
                (SyntaxKind::OPERATOR_KW, next) => is_wordlike(next),
                (SyntaxKind::COMMA, _) => true,
                (SyntaxKind::EQ, _) | (_, SyntaxKind::EQ) => true,
                (
                    SyntaxKind::GT
                    | SyntaxKind::STAR
                    | SyntaxKind::AMP
                    | SyntaxKind::AMP_AMP
                    | SyntaxKind::ELLIPSIS
                    | SyntaxKind::ARROW,
                    next,
                ) => is_wordlike(next),
                (prev, next) => is_wordlike(prev) && is_wordlike(next),
            };
            if spaced {
                text.push(' ');
            }
        }
        text.push_str(token.text);
        previous = Some(token.kind);
    }
    text
}

fn is_wordlike(kind: SyntaxKind) -> bool {
    kind.is_word() || matches!(kind, SyntaxKind::STRING | SyntaxKind::CHAR)
}
