pub mod extract;
pub mod facts;
pub mod io;
pub mod models;
pub mod parsing;
pub mod position;


// Re-export key types for easier usage
pub use extract::{
    ExtractError, ExtractionScope, ExtractorConfig, LocInfo, LocationTranslator, MarkdownExtractor,
    ParseError, ScriptExtractor, Snippet, SnippetError, SnippetExtractor,
};
pub use facts::{Fact, FactBuffer, FactLog, FactSink, JsonLinesWriter, Label, TopLevelKind};
pub use io::*;
pub use models::{Document, SourceFile};
pub use parsing::blocks::{CodeBlockMatch, scan_code_blocks};
pub use position::{Location, Position};
pub use mdscript_syntax::SourceType;
