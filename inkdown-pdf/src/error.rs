use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while converting Markdown documents.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("invalid markdown: {0}")]
    InvalidMarkdown(String),
    #[error("style error: {0}")]
    Style(String),
    #[error("PDF rendering error: {0}")]
    Render(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
