//! # Block Scanning
//!
//! Finds fenced JavaScript blocks in a Markdown document. Only backtick
//! fences at the start of a line are recognised; the rest of the Markdown
//! grammar is ignored.
//!
//! ## Scanning Phases
//!
//! 1. **Line Classification** (`classify`): Each line is classified into a `LineClass`
//!    containing local facts (fence signature, script tag, whether it is terminated)
//!
//! 2. **Block Scanning** (`scanner`): A `BlockScanner` walks the classified lines
//!    as a two-state machine and emits a `CodeBlockMatch` whenever a block closes
//!
//! ## Modules
//!
//! - **`types`**: `CodeBlockMatch`, the scanner's output
//! - **`kinds`**: `CodeFence` detection and `ScriptTag` recognition
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`scanner`**: `BlockScanner` state machine
//!
//! ## Key Invariants
//!
//! - Matches come out in document order, never overlapping
//! - `content` is the exact document text between the fence lines
//! - Unterminated fences produce no match

pub mod classify;
pub mod kinds;
pub mod scanner;
pub mod types;

pub use classify::{LineClass, MarkdownLineClassifier};
pub use kinds::{CodeFence, FenceSig, ScriptTag};
pub use scanner::{BlockScanner, scan_code_blocks};
pub use types::CodeBlockMatch;
