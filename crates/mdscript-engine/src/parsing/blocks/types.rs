use crate::parsing::rope::span::Span;

use super::kinds::ScriptTag;

/// A fenced JavaScript block found by the scanner.
///
/// `content` is the text between the fence lines, exactly as it appears in
/// the document: internal newlines are kept and a non-empty content always
/// ends with the newline preceding the closing fence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlockMatch {
    /// Code text between the fences. May be empty.
    pub content: String,
    /// Byte offset of the first byte of `content` in the document.
    pub start_offset: usize,
    /// Byte offset of the newline the match begins with, i.e. the one ending
    /// the line before the opening fence. `None` when the opening fence
    /// starts the document.
    pub match_offset: Option<usize>,
    /// Opening fence line through closing fence line.
    pub span: Span,
    /// Which JavaScript tag the fence used.
    pub tag: ScriptTag,
    /// Full info string of the opening fence, metadata included.
    pub info: String,
}

impl CodeBlockMatch {
    /// Byte span of `content` in the document.
    pub fn content_span(&self) -> Span {
        Span::new(self.start_offset, self.start_offset + self.content.len())
    }

    /// Empty blocks, or blocks holding only ASCII control characters and
    /// spaces, are not worth extracting. Other Unicode whitespace such as
    /// U+00A0 counts as content.
    pub fn is_blank(&self) -> bool {
        self.content.trim_matches(|c: char| c <= ' ').is_empty()
    }
}
