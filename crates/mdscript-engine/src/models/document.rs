use xi_rope::Rope;

use crate::models::SourceFile;
use crate::parsing::blocks::{BlockScanner, scan_code_blocks};
use crate::position::Position;

/// A Markdown document held in an `xi_rope::Rope`.
///
/// The rope is the single source of truth: scanning, slicing and the
/// offset to line/column mapping all read from it. Documents are never
/// edited once built.
#[derive(Debug, Clone)]
pub struct Document {
    buffer: Rope,
    source: SourceFile,
}

impl Document {
    pub fn new(source: SourceFile, text: &str) -> Self {
        Self {
            buffer: Rope::from(text),
            source,
        }
    }

    /// Create a document from raw bytes, rejecting invalid UTF-8.
    pub fn from_bytes(source: SourceFile, bytes: &[u8]) -> anyhow::Result<Self> {
        let text = std::str::from_utf8(bytes)?;
        Ok(Self::new(source, text))
    }

    pub fn source(&self) -> &SourceFile {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.len() == 0
    }

    pub fn text(&self) -> String {
        self.buffer.slice_to_cow(..).into_owned()
    }

    /// Fresh scan over the document's JavaScript blocks.
    pub fn code_blocks(&self) -> BlockScanner<'_> {
        scan_code_blocks(&self.buffer)
    }

    /// One-based line of the byte at `offset`. Offsets past the end clamp to
    /// the last line.
    pub fn line_of(&self, offset: usize) -> u32 {
        let offset = offset.min(self.buffer.len());
        self.buffer.line_of_offset(offset) as u32 + 1
    }

    /// One-based `(line, column)` of `offset`, columns in characters.
    pub fn position_of(&self, offset: usize) -> Position {
        let offset = offset.min(self.buffer.len());
        let line = self.buffer.line_of_offset(offset);
        let line_start = self.buffer.offset_of_line(line);
        let column = self
            .buffer
            .slice_to_cow(line_start..offset)
            .chars()
            .count();
        Position::new(line as u32 + 1, column as u32 + 1)
    }
}
