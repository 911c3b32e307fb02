use xi_rope::Rope;

use crate::parsing::rope::{Lines, lines_with_spans, preview, slice::slice_to_string, span::Span};

use super::{
    classify::{LineClass, MarkdownLineClassifier},
    kinds::{CodeFence, ScriptTag},
    types::CodeBlockMatch,
};

#[derive(Debug, Clone)]
enum ScanState {
    Outside,
    Fence {
        /// Opening fence line.
        opener: Span,
        tag: ScriptTag,
        info: String,
    },
}

/// Lazy scanner yielding every fenced JavaScript block of a document in
/// order.
///
/// Line-oriented state machine: an opening fence with a JavaScript tag
/// switches to `Fence`, the first later line starting with a backtick fence
/// closes the block and emits a match. An opening fence that is never closed
/// yields nothing. Scanning is strictly forward and non-overlapping; build a
/// new scanner to start over.
pub struct BlockScanner<'a> {
    rope: &'a Rope,
    lines: Lines<'a>,
    classifier: MarkdownLineClassifier,
    state: ScanState,
}

impl<'a> BlockScanner<'a> {
    pub fn new(rope: &'a Rope) -> Self {
        Self {
            rope,
            lines: lines_with_spans(rope),
            classifier: MarkdownLineClassifier,
            state: ScanState::Outside,
        }
    }

    /// Feeds one line; returns a match when the line closes a block.
    fn push(&mut self, c: LineClass) -> Option<CodeBlockMatch> {
        match std::mem::replace(&mut self.state, ScanState::Outside) {
            ScanState::Outside => {
                if c.opens_script()
                    && let Some(sig) = c.fence_sig
                    && let Some(tag) = sig.script
                {
                    self.state = ScanState::Fence {
                        opener: c.line,
                        tag,
                        info: sig.info,
                    };
                }
                None
            }
            ScanState::Fence { opener, tag, info } => {
                if CodeFence::closes(c.fence_sig.as_ref()) {
                    Some(self.emit(opener, c.line, tag, info))
                } else {
                    self.state = ScanState::Fence { opener, tag, info };
                    None
                }
            }
        }
    }

    fn emit(&self, opener: Span, closer: Span, tag: ScriptTag, info: String) -> CodeBlockMatch {
        let content_span = Span::new(opener.end, closer.start);
        let block = CodeBlockMatch {
            content: slice_to_string(self.rope, content_span),
            start_offset: content_span.start,
            match_offset: opener.start.checked_sub(1),
            span: opener.cover(closer),
            tag,
            info,
        };
        log::debug!(
            "matched {} block at bytes {}..{}: {}",
            tag.as_str(),
            content_span.start,
            content_span.end,
            preview(self.rope, content_span, 40)
        );
        block
    }
}

impl Iterator for BlockScanner<'_> {
    type Item = CodeBlockMatch;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(lr) = self.lines.next() {
            let c = self.classifier.classify(&lr);
            if let Some(block) = self.push(c) {
                return Some(block);
            }
        }
        if let ScanState::Fence { opener, .. } = &self.state {
            log::debug!("unterminated fence at byte {} ignored", opener.start);
            self.state = ScanState::Outside;
        }
        None
    }
}

/// Starts a fresh scan of `rope` from its first byte.
pub fn scan_code_blocks(rope: &Rope) -> BlockScanner<'_> {
    BlockScanner::new(rope)
}
