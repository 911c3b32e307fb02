use std::fs;
use std::path::{Path, PathBuf};

use crate::models::{Document, SourceFile};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid input directory: {0}")]
    InvalidRoot(String),
    #[error("{0} is not valid UTF-8")]
    NotUtf8(PathBuf),
}

/// Extensions recognised as Markdown when scanning directories.
pub const MARKDOWN_EXTENSIONS: [&str; 2] = ["md", "markdown"];

/// Load `path` as a document, reported relative to `root` when given.
pub fn read_document(path: &Path, root: Option<&Path>) -> Result<Document, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let bytes = fs::read(path)?;
    Document::from_bytes(SourceFile::for_path(path, root), &bytes)
        .map_err(|_| IoError::NotUtf8(path.to_path_buf()))
}

/// Recursively find Markdown files below `root`, sorted by path.
pub fn scan_markdown_files(root: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !root.exists() {
        return Err(IoError::InvalidRoot(format!(
            "input directory not found: {}",
            root.display()
        )));
    }

    let mut files = Vec::new();
    scan_directory_recursive(root, &mut files)?;
    files.sort();
    Ok(files)
}

/// A Markdown file to extract, with the root it is reported relative to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFile {
    pub path: PathBuf,
    pub root: Option<PathBuf>,
}

impl InputFile {
    pub fn read(&self) -> Result<Document, IoError> {
        read_document(&self.path, self.root.as_deref())
    }
}

/// Expand command-line paths: directories are scanned for Markdown files,
/// files are taken as given whatever their extension.
pub fn collect_inputs(paths: &[PathBuf]) -> Result<Vec<InputFile>, IoError> {
    let mut inputs = Vec::new();
    for path in paths {
        if path.is_dir() {
            inputs.extend(scan_markdown_files(path)?.into_iter().map(|file| InputFile {
                path: file,
                root: Some(path.clone()),
            }));
        } else if path.exists() {
            inputs.push(InputFile {
                path: path.clone(),
                root: None,
            });
        } else {
            return Err(IoError::NotFound(path.clone()));
        }
    }
    Ok(inputs)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && MARKDOWN_EXTENSIONS.iter().any(|m| ext == *m)
        {
            files.push(path);
        }
    }

    Ok(())
}
