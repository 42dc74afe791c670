use thiserror::Error;

/// Errors produced while converting a variables export.
#[derive(Error, Debug)]
pub enum TokenError {
    /// The expected nesting path to the token tree is absent or of the
    /// wrong shape. Reported once; no output is produced.
    #[error("unexpected document structure: {0}")]
    Structure(String),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
