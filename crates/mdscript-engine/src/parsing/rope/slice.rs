use xi_rope::Rope;

use super::span::Span;

/// Extracts the text for a span from the rope as an owned String.
///
/// This allocates; prefer working with spans where possible.
pub fn slice_to_string(rope: &Rope, sp: Span) -> String {
    rope.slice_to_cow(sp.start..sp.end).into_owned()
}

/// Extracts text for a span as a single log-friendly line: newlines are
/// escaped and the result is cut to `max` characters with a "..." suffix.
pub fn preview(rope: &Rope, sp: Span, max: usize) -> String {
    let text = rope.slice_to_cow(sp.start..sp.end);
    let mut out: String = text.chars().take(max).collect();
    if text.chars().nth(max).is_some() {
        out.push_str("...");
    }
    out.replace('\r', "\\r").replace('\n', "\\n")
}
