//! # Analysis - Structural Checks and Top-Level Facts
//!
//! Second stage: walk the token stream once and either report the first
//! [`SyntaxError`] or produce an [`Analysis`] holding everything the
//! extractor needs (tokens, top-level declarations, module syntax, line
//! counts).
//!
//! ## What Is Checked
//!
//! - Unterminated strings, templates, regular expressions and block
//!   comments
//! - Brackets: every `)`, `]`, `}` must close the innermost open bracket, and
//!   nothing may be left open at end of input
//! - Template literals require ECMAScript 2015 or later
//! - Top-level `import`/`export` is rejected for [`SourceType::Script`]
//!
//! Anything deeper (expression grammar, ASI rules) is out of reach for a
//! token-level checker and is accepted as-is.

use std::ops::Range;

use crate::lexer::{Token, TokenKind, lex};
use crate::line_index::LineIndex;

/// How top-level `import`/`export` is treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SourceType {
    Script,
    Module,
    /// Module if any top-level `import`/`export` statement is present.
    #[default]
    Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzeOptions {
    pub ecma_version: u16,
    pub source_type: SourceType,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            ecma_version: 2020,
            source_type: SourceType::Auto,
        }
    }
}

/// A syntax error at a byte offset of the analysed source.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} (offset {offset})")]
pub struct SyntaxError {
    pub message: String,
    pub offset: usize,
}

impl SyntaxError {
    fn new(message: impl Into<String>, offset: usize) -> Self {
        Self {
            message: message.into(),
            offset,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationKind {
    Var,
    Let,
    Const,
    Function,
    Class,
}

impl DeclarationKind {
    fn from_keyword(text: &str) -> Option<Self> {
        match text {
            "var" => Some(Self::Var),
            "let" => Some(Self::Let),
            "const" => Some(Self::Const),
            "function" => Some(Self::Function),
            "class" => Some(Self::Class),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Var => "var",
            Self::Let => "let",
            Self::Const => "const",
            Self::Function => "function",
            Self::Class => "class",
        }
    }
}

/// A binding introduced at the top level of the source.
///
/// Only the first simple binding of a declaration is recorded; destructuring
/// patterns are skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration<'a> {
    pub kind: DeclarationKind,
    pub name: &'a str,
    pub span: Range<usize>,
}

/// Lines touched by code and by comments. A line holding both counts once in
/// each.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineCounts {
    pub code: usize,
    pub comments: usize,
}

#[derive(Debug, Clone)]
pub struct Analysis<'a> {
    pub tokens: Vec<Token<'a>>,
    pub declarations: Vec<Declaration<'a>>,
    pub is_module: bool,
    pub lines: LineCounts,
}

impl Analysis<'_> {
    pub fn comments(&self) -> impl Iterator<Item = &Token<'_>> {
        self.tokens.iter().filter(|t| t.kind.is_comment())
    }
}

/// Lex and check `source`, returning the first syntax error found.
pub fn analyze<'a>(source: &'a str, options: AnalyzeOptions) -> Result<Analysis<'a>, SyntaxError> {
    let tokens = lex(source);
    let significant: Vec<&Token<'a>> = tokens
        .iter()
        .filter(|t| !t.kind.is_trivia() && !t.kind.is_comment())
        .collect();

    check_tokens(&tokens, options)?;
    check_brackets(&significant, source.len())?;

    let top_level = top_level_statements(&tokens);
    let module_keyword = top_level
        .iter()
        .find(|s| is_module_statement(&significant, s.index));
    let is_module = match (options.source_type, module_keyword) {
        (SourceType::Script, Some(stmt)) => {
            return Err(SyntaxError::new(
                "'import' and 'export' may appear only with 'sourceType: module'",
                significant[stmt.index].span.start,
            ));
        }
        (SourceType::Module, _) => true,
        (_, found) => found.is_some(),
    };

    let declarations = top_level
        .iter()
        .filter_map(|s| declaration_at(&significant, s.index))
        .collect();
    let lines = count_lines(source, &tokens);

    Ok(Analysis {
        tokens,
        declarations,
        is_module,
        lines,
    })
}

fn check_tokens(tokens: &[Token<'_>], options: AnalyzeOptions) -> Result<(), SyntaxError> {
    for token in tokens {
        let at = token.span.start;
        match token.kind {
            TokenKind::UnterminatedString => {
                return Err(SyntaxError::new("Unterminated string constant", at));
            }
            TokenKind::UnterminatedBlockComment => {
                return Err(SyntaxError::new("Unterminated comment", at));
            }
            TokenKind::UnterminatedTemplate => {
                return Err(SyntaxError::new("Unterminated template", at));
            }
            TokenKind::UnterminatedRegex => {
                return Err(SyntaxError::new("Unterminated regular expression", at));
            }
            TokenKind::Template if options.ecma_version < 2015 => {
                return Err(SyntaxError::new("Unexpected character '`'", at));
            }
            TokenKind::Unknown => {
                return Err(SyntaxError::new(
                    format!("Unexpected character '{}'", token.text),
                    at,
                ));
            }
            _ => {}
        }
    }
    Ok(())
}

fn check_brackets(significant: &[&Token<'_>], end: usize) -> Result<(), SyntaxError> {
    let mut open: Vec<TokenKind> = Vec::new();
    for token in significant {
        if let Some(closer) = token.kind.closer() {
            open.push(closer);
        } else if token.kind.is_closer() && open.pop() != Some(token.kind) {
            return Err(SyntaxError::new("Unexpected token", token.span.start));
        }
    }
    if open.is_empty() {
        Ok(())
    } else {
        Err(SyntaxError::new("Unexpected end of input", end))
    }
}

/// Start of a statement at bracket depth zero, as an index into the
/// significant tokens.
#[derive(Debug, Clone, Copy)]
struct StatementStart {
    index: usize,
}

/// Finds statement starts at depth zero: the first token, anything after
/// `;` or `}`, and anything that begins a new line.
fn top_level_statements(tokens: &[Token<'_>]) -> Vec<StatementStart> {
    let mut starts = Vec::new();
    let mut depth = 0usize;
    let mut index = 0usize;
    let mut at_start = true;

    for token in tokens {
        if token.kind == TokenKind::Newline {
            if depth == 0 {
                at_start = true;
            }
            continue;
        }
        if token.kind.is_trivia() || token.kind.is_comment() {
            continue;
        }
        if depth == 0 && at_start {
            starts.push(StatementStart { index });
        }
        at_start = false;

        if token.kind.closer().is_some() {
            depth += 1;
        } else if token.kind.is_closer() {
            depth = depth.saturating_sub(1);
            at_start = depth == 0 && token.kind == TokenKind::RBrace;
        } else if depth == 0 && token.text == ";" {
            at_start = true;
        }
        index += 1;
    }
    starts
}

fn is_module_statement(significant: &[&Token<'_>], index: usize) -> bool {
    let token = significant[index];
    if token.kind != TokenKind::Ident || !matches!(token.text, "import" | "export") {
        return false;
    }
    // `import(...)` and `import.meta` are expressions, valid in scripts too.
    !matches!(
        significant.get(index + 1),
        Some(next) if next.kind == TokenKind::LParen || next.text == "."
    )
}

fn declaration_at<'a>(significant: &[&Token<'a>], mut index: usize) -> Option<Declaration<'a>> {
    let text_at = |i: usize| significant.get(i).map(|t| t.text);

    if matches!(text_at(index), Some("export")) {
        index += 1;
        if matches!(text_at(index), Some("default")) {
            index += 1;
        }
    }
    if matches!(text_at(index), Some("async")) {
        index += 1;
    }

    let kind = DeclarationKind::from_keyword(text_at(index)?)?;
    index += 1;
    if kind == DeclarationKind::Function && matches!(text_at(index), Some("*")) {
        index += 1;
    }

    let name = significant.get(index)?;
    (name.kind == TokenKind::Ident).then(|| Declaration {
        kind,
        name: name.text,
        span: name.span.clone(),
    })
}

fn count_lines(source: &str, tokens: &[Token<'_>]) -> LineCounts {
    let index = LineIndex::new(source);
    let mut code = vec![false; index.line_count()];
    let mut comments = vec![false; index.line_count()];

    for token in tokens.iter().filter(|t| !t.kind.is_trivia()) {
        let first = index.line_of(token.span.start);
        let last = index.line_of(token.span.end.saturating_sub(1).max(token.span.start));
        let marks = if token.kind.is_comment() {
            &mut comments
        } else {
            &mut code
        };
        for line in first..=last {
            if let Some(mark) = marks.get_mut(line) {
                *mark = true;
            }
        }
    }

    LineCounts {
        code: code.iter().filter(|&&m| m).count(),
        comments: comments.iter().filter(|&&m| m).count(),
    }
}
