//! # Facts
//!
//! Everything extraction learns about a document is written as a stream of
//! [`Fact`]s into a [`FactSink`]. Facts refer to each other through
//! [`Label`]s handed out by the sink, so the facts of one snippet can never
//! collide with those of another snippet or of the host document.
//!
//! Sinks:
//!
//! - [`FactLog`]: keeps facts in memory
//! - [`JsonLinesWriter`]: one JSON object per line on any `io::Write`
//! - [`FactBuffer`]: holds a document's facts until it extracts cleanly

pub mod buffer;
pub mod jsonl;
pub mod log;

use std::fmt;
use std::io;

use serde::Serialize;

use crate::position::Location;

pub use self::buffer::FactBuffer;
pub use self::jsonl::JsonLinesWriter;
pub use self::log::FactLog;

/// Opaque identifier of a fact subject (file, top-level, variable, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Label(pub u64);

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Sequential label source; the first label is `#1`.
#[derive(Debug, Default)]
pub struct LabelAllocator {
    last: u64,
}

impl LabelAllocator {
    pub fn fresh(&mut self) -> Label {
        self.last += 1;
        Label(self.last)
    }
}

/// How a piece of script entered the extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TopLevelKind {
    /// A standalone script file.
    Script,
    /// Script embedded in another document, such as a Markdown code block.
    InlineScript,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Fact {
    File {
        label: Label,
        path: String,
    },
    TopLevel {
        label: Label,
        file: Label,
        toplevel_kind: TopLevelKind,
        is_module: bool,
        location: Location,
    },
    Line {
        label: Label,
        toplevel: Label,
        text: String,
        terminator: String,
        location: Location,
    },
    Comment {
        label: Label,
        toplevel: Label,
        text: String,
        location: Location,
    },
    Declaration {
        label: Label,
        toplevel: Label,
        variable: Label,
        name: String,
        declaration_kind: String,
        location: Location,
    },
}

/// Destination for extracted facts.
pub trait FactSink {
    /// A label never handed out before by this sink.
    fn fresh_label(&mut self) -> Label;

    fn emit(&mut self, fact: Fact) -> io::Result<()>;
}
