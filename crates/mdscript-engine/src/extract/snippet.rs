use crate::facts::{FactSink, Label, TopLevelKind};
use crate::models::Document;
use crate::parsing::blocks::CodeBlockMatch;
use crate::position::Position;

use super::error::{ExtractError, SnippetError};
use super::loc::LocInfo;
use super::scope::ExtractionScope;
use super::translator::LocationTranslator;

/// Lines between the line a match begins on (the newline before the
/// opening fence) and the first content line: that line itself plus the
/// fence line. Tied to single-line fence headers.
///
/// A fence opening the document has no preceding newline; its match
/// starts at offset 0 on line 1, so its anchor lands one line below the
/// content.
pub const MATCH_TO_CONTENT_LINES: u32 = 2;

/// One piece of script handed to a [`SnippetExtractor`].
#[derive(Debug, Clone, Copy)]
pub struct Snippet<'a> {
    /// Exact block content; fence lines excluded.
    pub source: &'a str,
    pub kind: TopLevelKind,
    /// Maps snippet positions back to the enclosing document.
    pub translator: LocationTranslator,
    /// Label of the enclosing file.
    pub file: Label,
}

/// Extracts a single snippet. Reports errors in snippet space; emitted
/// facts are already in document space.
pub trait SnippetExtractor {
    fn extract(
        &self,
        snippet: &Snippet<'_>,
        scope: &mut ExtractionScope,
        sink: &mut dyn FactSink,
    ) -> Result<LocInfo, SnippetError>;
}

impl<E: SnippetExtractor + ?Sized> SnippetExtractor for &E {
    fn extract(
        &self,
        snippet: &Snippet<'_>,
        scope: &mut ExtractionScope,
        sink: &mut dyn FactSink,
    ) -> Result<LocInfo, SnippetError> {
        (**self).extract(snippet, scope, sink)
    }
}

/// Document position a block's snippet is translated against: the first
/// content character, except for a fence opening the document.
pub fn anchor_of(document: &Document, block: &CodeBlockMatch) -> Position {
    let match_line = document.line_of(block.match_offset.unwrap_or(0));
    Position::new(match_line + MATCH_TO_CONTENT_LINES, 1)
}

/// Runs one extractor over the blocks of a single document.
pub struct SnippetProcessor<'a, E: ?Sized> {
    extractor: &'a E,
    document: &'a Document,
    file: Label,
}

impl<'a, E: SnippetExtractor + ?Sized> SnippetProcessor<'a, E> {
    pub fn new(extractor: &'a E, document: &'a Document, file: Label) -> Self {
        Self {
            extractor,
            document,
            file,
        }
    }

    /// Extract `block`, translating any parse error into document space.
    pub fn process(
        &self,
        block: &CodeBlockMatch,
        scope: &mut ExtractionScope,
        sink: &mut dyn FactSink,
    ) -> Result<LocInfo, ExtractError> {
        let translator = LocationTranslator::new(anchor_of(self.document, block));
        log::trace!(
            "{}: block at byte {} anchored at {}",
            self.document.source(),
            block.start_offset,
            translator.anchor()
        );
        let snippet = Snippet {
            source: &block.content,
            kind: TopLevelKind::InlineScript,
            translator,
            file: self.file,
        };
        self.extractor
            .extract(&snippet, scope, sink)
            .map_err(|e| match e {
                SnippetError::Parse(error) => ExtractError::Syntax {
                    file: self.document.source().clone(),
                    error: error.translated(&translator),
                },
                SnippetError::Sink(e) => ExtractError::Sink(e),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::error::ParseError;
    use crate::facts::FactLog;
    use crate::models::SourceFile;
    use rstest::rstest;

    fn first_block(text: &str) -> (Document, CodeBlockMatch) {
        let document = Document::new(SourceFile::from("t.md"), text);
        let block = document.code_blocks().next().unwrap();
        (document, block)
    }

    #[rstest]
    #[case("intro\n```js\nlet x = 1;\n```\nend", 3)]
    #[case("a\n\nb\n```javascript\nx;\n```\n", 5)]
    #[case("a\r\n```js\r\nx;\r\n```\r\n", 3)]
    fn anchors_on_first_content_line(#[case] text: &str, #[case] line: u32) {
        let (document, block) = first_block(text);
        assert_eq!(anchor_of(&document, &block), Position::new(line, 1));
        assert_eq!(document.position_of(block.start_offset), Position::new(line, 1));
    }

    #[test]
    fn fence_opening_the_document_anchors_one_line_below_its_content() {
        let (document, block) = first_block("```js\nx;\n```\n");
        assert_eq!(block.match_offset, None);
        assert_eq!(document.position_of(block.start_offset), Position::new(2, 1));
        assert_eq!(anchor_of(&document, &block), Position::new(3, 1));
    }

    struct FailAt(Position);

    impl SnippetExtractor for FailAt {
        fn extract(
            &self,
            _: &Snippet<'_>,
            _: &mut ExtractionScope,
            _: &mut dyn FactSink,
        ) -> Result<LocInfo, SnippetError> {
            Err(ParseError::new("Unexpected token", self.0).into())
        }
    }

    #[rstest]
    #[case(Position::new(1, 1), Position::new(3, 1))]
    #[case(Position::new(1, 5), Position::new(3, 5))]
    #[case(Position::new(2, 4), Position::new(4, 4))]
    fn parse_errors_move_into_document_space(#[case] snippet: Position, #[case] document: Position) {
        let (doc, block) = first_block("intro\n```js\nlet x = 1;\nf(]\n```\nend");
        let extractor = FailAt(snippet);
        let processor = SnippetProcessor::new(&extractor, &doc, Label(1));
        let err = processor
            .process(&block, &mut ExtractionScope::new(), &mut FactLog::new())
            .unwrap_err();
        assert_eq!(err.position(), Some(document));
        assert_eq!(err.to_string(), format!("t.md:{document}: Unexpected token"));
    }
}
