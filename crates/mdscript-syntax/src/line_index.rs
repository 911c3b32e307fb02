//! Byte offset to line/column conversion for a single snippet.
//!
//! Line start offsets are computed once; each lookup is a binary search.
//!
//! ```text
//! "ab\ncd"   line_starts = [0, 3]
//! offset 4 → line index 1, column = chars in "c" + 1 = 2 → (2, 2)
//! ```

/// Pre-computed line starts for a source string.
#[derive(Debug, Clone)]
pub struct LineIndex<'a> {
    source: &'a str,
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    pub fn new(source: &'a str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(
            source
                .bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .map(|(i, _)| i + 1),
        );
        Self {
            source,
            line_starts,
        }
    }

    /// Number of lines, counting a trailing partial line. A source ending in
    /// `\n` has no extra empty line.
    pub fn line_count(&self) -> usize {
        let starts = self.line_starts.len();
        if starts > 1 && *self.line_starts.last().unwrap_or(&0) == self.source.len() {
            starts - 1
        } else {
            starts
        }
    }

    /// Zero-based line index of `offset`.
    pub fn line_of(&self, offset: usize) -> usize {
        match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next - 1,
        }
    }

    /// One-based `(line, column)` of `offset`, with the column counted in
    /// characters. Offsets past the end clamp to the end of the source.
    pub fn position(&self, offset: usize) -> (u32, u32) {
        let offset = offset.min(self.source.len());
        let line = self.line_of(offset);
        let start = self.line_starts[line];
        let column = self
            .source
            .get(start..offset)
            .map_or(offset - start, |prefix| prefix.chars().count());
        (line as u32 + 1, column as u32 + 1)
    }

    /// Text of the zero-based `line` without its terminator.
    pub fn line_text(&self, line: usize) -> &'a str {
        let start = self.line_starts[line];
        let end = self
            .line_starts
            .get(line + 1)
            .copied()
            .unwrap_or(self.source.len());
        self.source[start..end].trim_end_matches(['\r', '\n'])
    }

    /// Terminator of the zero-based `line` (`"\n"`, `"\r\n"` or `""`).
    pub fn line_terminator(&self, line: usize) -> &'a str {
        let start = self.line_starts[line];
        let end = self
            .line_starts
            .get(line + 1)
            .copied()
            .unwrap_or(self.source.len());
        let raw = &self.source[start..end];
        &raw[raw.trim_end_matches(['\r', '\n']).len()..]
    }
}
