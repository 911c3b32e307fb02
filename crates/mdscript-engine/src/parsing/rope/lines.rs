use xi_rope::Rope;

use super::span::Span;

/// A reference to a single line in the rope with its byte span.
#[derive(Debug, Clone)]
pub struct LineRef {
    /// Byte span of this line in the rope (includes newline if present).
    pub span: Span,
    /// The line text, terminator included.
    pub text: String,
}

impl LineRef {
    /// Whether the line ends with `\n`. Only the last line of a document can
    /// lack one.
    pub fn is_terminated(&self) -> bool {
        self.text.ends_with('\n')
    }
}

/// Owned iterator over the lines of a rope, boxed so scanners can hold it.
pub type Lines<'a> = Box<dyn Iterator<Item = LineRef> + 'a>;

/// Returns an iterator over lines with their byte spans.
///
/// Uses `lines_raw` to preserve newline characters, which keeps spans exact:
/// the spans of consecutive lines tile the whole document.
pub fn lines_with_spans(rope: &Rope) -> Lines<'_> {
    let mut offset = 0usize;
    Box::new(rope.lines_raw(..).map(move |line| {
        let start = offset;
        offset += line.len();
        LineRef {
            span: Span { start, end: offset },
            text: line.into_owned(),
        }
    }))
}
