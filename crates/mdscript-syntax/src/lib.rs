//! # mdscript-syntax
//!
//! Token-level JavaScript analysis for code snippets lifted out of Markdown
//! documents, built on [Logos].
//!
//! [Logos]: https://docs.rs/logos
//!
//! ## Architecture Overview
//!
//! ```text
//! Snippet Text → Lexer → Tokens → Analysis → Declarations, LineCounts
//!                (Logos)          (brackets, literals, module syntax)
//! ```
//!
//! ### 1. Lexer ([`lexer`] module)
//!
//! Tokenizes the input into a flat, lossless token sequence. Every byte
//! belongs to exactly one token, so spans map back to exact source positions.
//!
//! ### 2. Analysis ([`analysis`] module)
//!
//! Walks the tokens once. Either the first [`SyntaxError`] is reported, with
//! a byte offset into the snippet, or an [`Analysis`] is returned carrying
//! top-level declarations, whether the snippet uses module syntax, and how
//! many lines hold code and comments.
//!
//! ### 3. Positions ([`line_index`] module)
//!
//! [`LineIndex`] converts byte offsets into one-based line/column pairs in
//! the snippet's own coordinate space. Mapping those back to the enclosing
//! document is the caller's job.
//!
//! ## Quick Start
//!
//! ```
//! use mdscript_syntax::{analyze, AnalyzeOptions, LineIndex};
//!
//! let source = "let x = 1;\nf(x]\n";
//! let err = analyze(source, AnalyzeOptions::default()).unwrap_err();
//!
//! assert_eq!(err.message, "Unexpected token");
//! assert_eq!(LineIndex::new(source).position(err.offset), (2, 4));
//! ```

pub mod analysis;
pub mod lexer;
pub mod line_index;

pub use analysis::{
    Analysis, AnalyzeOptions, Declaration, DeclarationKind, LineCounts, SourceType, SyntaxError,
    analyze,
};
pub use lexer::{Token, TokenKind, lex};
pub use line_index::LineIndex;

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    /// Formats tokens one per line for snapshot testing.
    fn format_tokens(source: &str) -> String {
        lex(source)
            .iter()
            .map(|t| format!("{:?}@{:?} {:?}", t.kind, t.span, t.text))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn snapshot_function_declaration() {
        assert_snapshot!(format_tokens("function add(a, b) {\n  return a + b;\n}\n"), @r#"
        Ident@0..8 "function"
        Whitespace@8..9 " "
        Ident@9..12 "add"
        LParen@12..13 "("
        Ident@13..14 "a"
        Punct@14..15 ","
        Whitespace@15..16 " "
        Ident@16..17 "b"
        RParen@17..18 ")"
        Whitespace@18..19 " "
        LBrace@19..20 "{"
        Newline@20..21 "\n"
        Whitespace@21..23 "  "
        Ident@23..29 "return"
        Whitespace@29..30 " "
        Ident@30..31 "a"
        Whitespace@31..32 " "
        Punct@32..33 "+"
        Whitespace@33..34 " "
        Ident@34..35 "b"
        Punct@35..36 ";"
        Newline@36..37 "\n"
        RBrace@37..38 "}"
        Newline@38..39 "\n"
        "#);
    }

    #[test]
    fn snapshot_literals_and_comments() {
        assert_snapshot!(format_tokens("/* c */ 'a' `b` 1.5 // d"), @r#"
        BlockComment@0..7 "/* c */"
        Whitespace@7..8 " "
        String@8..11 "'a'"
        Whitespace@11..12 " "
        Template@12..15 "`b`"
        Whitespace@15..16 " "
        Number@16..19 "1.5"
        Whitespace@19..20 " "
        LineComment@20..24 "// d"
        "#);
    }

    #[test]
    fn error_offsets_resolve_to_snippet_positions() {
        let source = "const a = [\n  1,\n  2\n";
        let err = analyze(source, AnalyzeOptions::default()).unwrap_err();
        assert_eq!(err.message, "Unexpected end of input");
        assert_eq!(LineIndex::new(source).position(err.offset), (4, 1));
    }

    #[test]
    fn roundtrip_preserves_text() {
        let inputs = [
            "let x = 1;\n",
            "// only a comment",
            "'unterminated",
            "`multi\nline`",
            "a /* b */ c",
            "\r\n\r\n",
        ];

        for input in inputs {
            let text: String = lex(input).iter().map(|t| t.text).collect();
            assert_eq!(text, input, "Roundtrip failed for: {:?}", input);
        }
    }
}
