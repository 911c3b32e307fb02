use xi_rope::Rope;

use crate::parsing::{blocks::CodeBlockMatch, rope::slice::slice_to_string};

/// Validates scanner output invariants.
///
/// Asserts that:
/// - All block spans are within rope bounds
/// - Content spans are contained within their block spans
/// - Content is the exact rope text of its content span
/// - Blocks are in document order and never overlap
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(rope: &Rope, blocks: &[CodeBlockMatch]) {
    let n = rope.len();
    let mut previous_end = 0;
    for b in blocks {
        let content = b.content_span();
        assert!(
            b.span.start <= b.span.end && b.span.end <= n,
            "block span out of bounds: {:?} (rope len: {})",
            b.span,
            n
        );
        assert!(
            content.start >= b.span.start && content.end <= b.span.end,
            "content span not contained in block span: content {:?}, block {:?}",
            content,
            b.span
        );
        assert_eq!(
            slice_to_string(rope, content),
            b.content,
            "content differs from rope text at {content:?}"
        );
        assert!(
            b.span.start >= previous_end,
            "block {:?} overlaps or precedes the previous block ending at {}",
            b.span,
            previous_end
        );
        previous_end = b.span.end;
    }
}
