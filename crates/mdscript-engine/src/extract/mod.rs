//! # Extraction
//!
//! Drives a [`SnippetExtractor`] over every fenced JavaScript block of a
//! Markdown document.
//!
//! ```text
//! Document ─► BlockScanner ─► CodeBlockMatch ─► SnippetProcessor ─► SnippetExtractor
//!                                                  │ anchor         │ facts (document space)
//!                                                  ▼                ▼
//!                                          LocationTranslator     FactSink
//! ```
//!
//! Per document:
//!
//! 1. a `File` fact is emitted and one [`ExtractionScope`] is created;
//! 2. blocks are visited in document order, blank ones skipped;
//! 3. each block's content is extracted with a translator anchored at its
//!    first content line;
//! 4. the first parse error stops the document and is returned with its
//!    position in the document.
//!
//! Facts are buffered per document and reach the sink only once every block
//! has extracted, so a failing document leaves no facts behind.

pub mod error;
pub mod loc;
pub mod scope;
pub mod script;
pub mod snippet;
pub mod translator;

pub use self::error::{ExtractError, ParseError, SnippetError};
pub use self::loc::LocInfo;
pub use self::scope::ExtractionScope;
pub use self::script::{ExtractorConfig, ScriptExtractor};
pub use self::snippet::{MATCH_TO_CONTENT_LINES, Snippet, SnippetExtractor, SnippetProcessor, anchor_of};
pub use self::translator::LocationTranslator;

use mdscript_syntax::SourceType;

use crate::facts::{Fact, FactBuffer, FactSink};
use crate::models::{Document, SourceFile};

/// Extracts the JavaScript embedded in Markdown documents.
#[derive(Debug, Clone)]
pub struct MarkdownExtractor<E = ScriptExtractor> {
    extractor: E,
}

impl MarkdownExtractor<ScriptExtractor> {
    /// Snippets are always extracted with automatic source type detection,
    /// whatever `config` asks for.
    pub fn new(config: ExtractorConfig) -> Self {
        Self::with_extractor(ScriptExtractor::new(
            config.with_source_type(SourceType::Auto),
        ))
    }
}

impl Default for MarkdownExtractor<ScriptExtractor> {
    fn default() -> Self {
        Self::new(ExtractorConfig::default())
    }
}

impl<E: SnippetExtractor> MarkdownExtractor<E> {
    pub fn with_extractor(extractor: E) -> Self {
        Self { extractor }
    }

    pub fn extractor(&self) -> &E {
        &self.extractor
    }

    /// Extract every non-blank JavaScript block of `document`, summing their
    /// line counts. Stops at the first failing block, in which case nothing
    /// is written to `sink`.
    pub fn extract(&self, document: &Document, sink: &mut dyn FactSink) -> Result<LocInfo, ExtractError> {
        let mut buffer = FactBuffer::new(sink);
        let total = self.extract_into(document, &mut buffer)?;
        buffer.commit()?;
        Ok(total)
    }

    fn extract_into(&self, document: &Document, sink: &mut dyn FactSink) -> Result<LocInfo, ExtractError> {
        let file = sink.fresh_label();
        sink.emit(Fact::File {
            label: file,
            path: document.source().to_string(),
        })?;

        let processor = SnippetProcessor::new(&self.extractor, document, file);
        let mut scope = ExtractionScope::new();
        let mut total = LocInfo::default();
        let mut blocks = 0usize;

        for block in document.code_blocks() {
            if block.is_blank() {
                log::debug!(
                    "{}: skipping blank {} block at byte {}",
                    document.source(),
                    block.tag.as_str(),
                    block.start_offset
                );
                continue;
            }
            total += processor.process(&block, &mut scope, sink)?;
            blocks += 1;
        }

        log::debug!(
            "{}: {} block(s), {} lines of code, {} lines of comments",
            document.source(),
            blocks,
            total.lines_of_code,
            total.lines_of_comments
        );
        Ok(total)
    }

    /// Convenience wrapper around [`extract`](Self::extract) for raw text.
    pub fn extract_text(
        &self,
        source: SourceFile,
        text: &str,
        sink: &mut dyn FactSink,
    ) -> Result<LocInfo, ExtractError> {
        self.extract(&Document::new(source, text), sink)
    }
}
