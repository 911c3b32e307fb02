use crate::parsing::rope::{lines::LineRef, span::Span};

use super::kinds::{CodeFence, FenceSig};

/// Classification of a single line containing only local facts.
///
/// Each line is classified independently; the scanner supplies the context
/// (whether a block is open).
#[derive(Debug, Clone)]
pub struct LineClass {
    /// Full byte span of this line in the rope.
    pub line: Span,
    /// Whether the line ends with `\n`. An opening fence needs one.
    pub is_terminated: bool,
    /// Set if the line starts with a backtick fence.
    pub fence_sig: Option<FenceSig>,
}

impl LineClass {
    /// An opening fence that declares JavaScript and is followed by more
    /// input.
    pub fn opens_script(&self) -> bool {
        self.is_terminated && self.fence_sig.as_ref().is_some_and(|s| s.script.is_some())
    }
}

/// Classifies individual lines for the block scanner.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`] containing local facts.
    pub fn classify(&self, lr: &LineRef) -> LineClass {
        LineClass {
            line: lr.span,
            is_terminated: lr.is_terminated(),
            fence_sig: CodeFence::sig(&lr.text),
        }
    }
}
