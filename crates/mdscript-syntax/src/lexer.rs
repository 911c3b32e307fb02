//! # Lexer - Tokenizing JavaScript Snippets
//!
//! First stage of snippet analysis: breaking source text into tokens using
//! the [Logos] lexer generator.
//!
//! [Logos]: https://docs.rs/logos
//!
//! ## The Lossless Guarantee
//!
//! Every byte in the input appears in exactly one token. Nothing is skipped,
//! so token spans can be mapped back to exact snippet positions:
//!
//! ```
//! use mdscript_syntax::lexer::lex;
//!
//! let input = "let x = 1; // one\n";
//! let tokens = lex(input);
//!
//! let reconstructed: String = tokens.iter().map(|t| t.text).collect();
//! assert_eq!(input, reconstructed);
//! ```
//!
//! ## Unterminated Literals
//!
//! Strings, templates and block comments each have a second, "unterminated"
//! rule. Logos always prefers the longest match, so a properly closed
//! literal wins and the unterminated rule only fires when the closing
//! delimiter is missing. The structural checker turns those tokens into
//! parse errors.
//!
//! ## Regular Expression Literals
//!
//! A `/` is either division or the start of a regular expression, and only
//! the previous significant token can tell. [`lex`] tracks it: after an
//! operator, an opening bracket, `}` or a keyword such as `return`, a `/`
//! starts a literal that runs to the next unescaped `/` outside a character
//! class, followed by its flags. A literal with no closing `/` on its line
//! becomes [`TokenKind::UnterminatedRegex`].
//!
//! ```
//! use mdscript_syntax::lexer::{TokenKind, lex};
//!
//! let tokens = lex("s.replace(/'/g, \"\")");
//! assert_eq!(tokens[4].kind, TokenKind::Regex);
//! assert_eq!(tokens[4].text, "/'/g");
//! ```
//!
//! ## Limitations
//!
//! `${}` substitutions inside template literals are not re-lexed.

use std::ops::Range;

use logos::Logos;

/// Token kinds produced by the Logos lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Horizontal whitespace (spaces, tabs, form feeds)
    #[regex(r"[ \t\x0C]+")]
    Whitespace,

    /// Line ending (LF or CRLF)
    #[regex(r"\r?\n")]
    Newline,

    /// `// ...` up to the end of the line
    #[regex(r"//[^\r\n]*")]
    LineComment,

    /// `/* ... */`
    #[regex(r"/\*([^*]|\*+[^*/])*\*+/")]
    BlockComment,

    /// `/* ...` with no closing `*/`
    #[regex(r"/\*([^*]|\*+[^*/])*\**")]
    UnterminatedBlockComment,

    #[regex(r#""([^"\\\r\n]|\\[^\r\n])*""#)]
    #[regex(r"'([^'\\\r\n]|\\[^\r\n])*'")]
    String,

    #[regex(r#""([^"\\\r\n]|\\[^\r\n])*"#)]
    #[regex(r"'([^'\\\r\n]|\\[^\r\n])*")]
    UnterminatedString,

    #[regex(r"`([^`\\]|\\[\s\S])*`")]
    Template,

    #[regex(r"`([^`\\]|\\[\s\S])*")]
    UnterminatedTemplate,

    #[regex(r"[0-9][0-9A-Za-z_]*(\.[0-9A-Za-z_]*)?")]
    #[regex(r"\.[0-9][0-9A-Za-z_]*")]
    Number,

    /// Identifiers and keywords; keywords are told apart by text.
    #[regex(r"[A-Za-z_$\x{80}-\x{10FFFF}][A-Za-z0-9_$\x{80}-\x{10FFFF}]*")]
    Ident,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    /// Operators and separators, one character at a time.
    #[regex(r"[-+*/%=<>!&|^~?:;,.@#]")]
    Punct,

    /// `/pattern/flags`; produced by [`lex`], never by Logos directly.
    Regex,

    /// `/pattern` with no closing `/` before the end of the line.
    UnterminatedRegex,

    /// Anything the rules above do not recognise.
    Unknown,
}

/// Keywords after which a `/` opens a regular expression.
const REGEX_KEYWORDS: &[&str] = &[
    "await", "case", "delete", "do", "else", "in", "instanceof", "new", "of", "return", "throw",
    "typeof", "void", "yield",
];

impl TokenKind {
    /// Whitespace and line endings carry no meaning for the checker.
    pub fn is_trivia(self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::Newline)
    }

    pub fn is_comment(self) -> bool {
        matches!(
            self,
            TokenKind::LineComment | TokenKind::BlockComment | TokenKind::UnterminatedBlockComment
        )
    }

    /// The closing bracket matching an opening one.
    pub fn closer(self) -> Option<TokenKind> {
        match self {
            TokenKind::LParen => Some(TokenKind::RParen),
            TokenKind::LBracket => Some(TokenKind::RBracket),
            TokenKind::LBrace => Some(TokenKind::RBrace),
            _ => None,
        }
    }

    pub fn is_closer(self) -> bool {
        matches!(
            self,
            TokenKind::RParen | TokenKind::RBracket | TokenKind::RBrace
        )
    }
}

/// A lexed token with its kind, text slice and byte span in the snippet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub span: Range<usize>,
}

/// Lex the input into a sequence of tokens.
///
/// Guarantees that all bytes from the input appear in the output tokens.
pub fn lex(input: &str) -> Vec<Token<'_>> {
    let mut tokens: Vec<Token<'_>> = Vec::new();
    let mut lexer = TokenKind::lexer(input);
    let mut regex_allowed = true;

    while let Some(result) = lexer.next() {
        // Logos error means unrecognized character
        let mut kind = result.unwrap_or(TokenKind::Unknown);
        if kind == TokenKind::Punct && regex_allowed && lexer.slice() == "/" {
            kind = match regex_tail(lexer.remainder()) {
                Ok(len) => {
                    lexer.bump(len);
                    TokenKind::Regex
                }
                Err(len) => {
                    lexer.bump(len);
                    TokenKind::UnterminatedRegex
                }
            };
        }
        if !kind.is_trivia() && !kind.is_comment() {
            regex_allowed = regex_may_follow(kind, lexer.slice(), tokens.last());
        }
        tokens.push(Token {
            kind,
            text: lexer.slice(),
            span: lexer.span(),
        });
    }

    tokens
}

/// Length of the rest of a regular expression literal after its opening
/// `/`, flags included. `Err` holds the length up to the end of the line
/// when the literal is never closed.
fn regex_tail(rest: &str) -> Result<usize, usize> {
    let mut in_class = false;
    let mut escaped = false;
    for (i, c) in rest.char_indices() {
        if c == '\n' || c == '\r' {
            return Err(i);
        }
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '[' => in_class = true,
            ']' => in_class = false,
            '/' if !in_class => {
                let body = i + 1;
                let flags = rest[body..]
                    .find(|c: char| !(c.is_alphanumeric() || c == '_' || c == '$'))
                    .unwrap_or(rest.len() - body);
                return Ok(body + flags);
            }
            _ => {}
        }
    }
    Err(rest.len())
}

/// Whether a `/` after the significant token `kind`/`text` starts a regular
/// expression rather than a division.
fn regex_may_follow(kind: TokenKind, text: &str, previous: Option<&Token<'_>>) -> bool {
    match kind {
        // `x++ / 2` and `x-- / 2` divide
        TokenKind::Punct if text == "+" || text == "-" => {
            !previous.is_some_and(|p| p.kind == TokenKind::Punct && p.text == text)
        }
        TokenKind::Punct
        | TokenKind::LParen
        | TokenKind::LBracket
        | TokenKind::LBrace
        | TokenKind::RBrace => true,
        TokenKind::Ident => REGEX_KEYWORDS.contains(&text),
        _ => false,
    }
}
