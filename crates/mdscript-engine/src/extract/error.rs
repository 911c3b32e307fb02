use std::io;

use crate::models::SourceFile;
use crate::position::Position;

use super::translator::LocationTranslator;

/// A snippet that failed to parse. The position is in whatever space the
/// producer used: snippet space out of an extractor, document space once
/// translated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} ({position})")]
pub struct ParseError {
    pub message: String,
    pub position: Position,
}

impl ParseError {
    pub fn new(message: impl Into<String>, position: Position) -> Self {
        Self {
            message: message.into(),
            position,
        }
    }

    /// Same error, repositioned through `translator`.
    pub fn translated(self, translator: &LocationTranslator) -> Self {
        Self {
            position: translator.translate(self.position),
            ..self
        }
    }
}

/// Failure of a single extractor invocation.
#[derive(Debug, thiserror::Error)]
pub enum SnippetError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("failed to write facts: {0}")]
    Sink(#[from] io::Error),
}

/// Failure that aborts extraction of one document.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// Parse error with its position in document space.
    #[error("{file}:{}: {}", .error.position, .error.message)]
    Syntax { file: SourceFile, error: ParseError },

    #[error("failed to write facts: {0}")]
    Sink(#[from] io::Error),
}

impl ExtractError {
    /// Document position of a syntax error.
    pub fn position(&self) -> Option<Position> {
        match self {
            ExtractError::Syntax { error, .. } => Some(error.position),
            ExtractError::Sink(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translation_keeps_message() {
        let err = ParseError::new("Unexpected token", Position::new(1, 1));
        let moved = err.translated(&LocationTranslator::new(Position::new(3, 1)));
        assert_eq!(moved, ParseError::new("Unexpected token", Position::new(3, 1)));
    }

    #[test]
    fn syntax_errors_read_like_compiler_output() {
        let err = ExtractError::Syntax {
            file: SourceFile::from("docs/guide.md"),
            error: ParseError::new("Unterminated string constant", Position::new(12, 9)),
        };
        assert_eq!(
            err.to_string(),
            "docs/guide.md:12:9: Unterminated string constant"
        );
        assert_eq!(err.position(), Some(Position::new(12, 9)));
    }
}
