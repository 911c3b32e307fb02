pub mod document;
pub mod source_file;

pub use document::Document;
pub use source_file::SourceFile;
