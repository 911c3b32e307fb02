use std::fmt;
use std::path::Path;

use relative_path::{RelativePath, RelativePathBuf};

/// Identity of a Markdown document: the path it is reported under and a
/// display-friendly name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    relative_path: RelativePathBuf,
    display_name: String,
}

impl SourceFile {
    /// Create a new SourceFile from a relative path
    pub fn new(relative_path: RelativePathBuf) -> Self {
        let display_name = Self::extract_display_name(&relative_path);
        Self {
            relative_path,
            display_name,
        }
    }

    /// Create from a relative path string
    pub fn from_relative_str(path: &str) -> Self {
        Self::new(RelativePathBuf::from(path))
    }

    /// Path of `path` relative to `root`, falling back to the file name when
    /// `path` is not below `root` or no root is given.
    pub fn for_path(path: &Path, root: Option<&Path>) -> Self {
        let relative = root
            .and_then(|root| path.strip_prefix(root).ok())
            .or_else(|| path.is_relative().then_some(path))
            .and_then(|p| RelativePathBuf::from_path(p).ok());
        match relative {
            Some(relative) => Self::new(relative),
            None => Self::from_relative_str(
                &path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default(),
            ),
        }
    }

    /// Get the relative path
    pub fn relative_path(&self) -> &RelativePath {
        &self.relative_path
    }

    /// Get the display name (file name without its Markdown extension)
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    fn extract_display_name(path: &RelativePath) -> String {
        path.file_name()
            .map(|name| {
                name.strip_suffix(".md")
                    .or_else(|| name.strip_suffix(".markdown"))
                    .unwrap_or(name)
            })
            .unwrap_or("Untitled")
            .to_string()
    }
}

impl fmt::Display for SourceFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.relative_path.as_str())
    }
}

impl From<&str> for SourceFile {
    fn from(path: &str) -> Self {
        Self::from_relative_str(path)
    }
}
