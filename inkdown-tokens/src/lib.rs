//! Design-token export → Markdown table conversion
//!
//!     This crate flattens a nested design-token tree (the JSON export of a
//!     variables document) into one Markdown table per token group.
//!
//! Pipeline
//!
//!     JSON document → extract (locate the token tree for one mode)
//!                   → flatten (one table per group, pre-order, sorted keys)
//!                   → render  (### headings + two-column Markdown tables)
//!
//!     The whole structure is read-only input: parsed once, walked once, and
//!     discarded after the flattened tables are rendered. There is no
//!     streaming and no retry; a malformed document aborts the conversion
//!     with a [`TokenError::Structure`] before any output is written.
//!
//! The file structure :
//!     .
//!     ├── error.rs        # TokenError
//!     ├── extract.rs      # Locating the token tree inside the export
//!     ├── flatten.rs      # TokenTable, resolve_value, flatten
//!     └── render.rs       # Markdown rendering of flattened tables

pub mod error;
pub mod extract;
pub mod flatten;
pub mod render;

pub use error::TokenError;
pub use extract::{extract_root, RootPath};
pub use flatten::{flatten, resolve_value, TokenTable};
pub use render::render_markdown;

use std::fs;
use std::path::Path;

/// Convert a serialized variables document to a Markdown table document.
///
/// The token tree is located via `root`, flattened, and rendered. Identical
/// input always produces byte-identical output.
pub fn convert_document(source: &str, root: &RootPath) -> Result<String, TokenError> {
    let document: serde_json::Value = serde_json::from_str(source)?;
    let tree = extract_root(&document, root)?;
    let tables = flatten(tree, &[]);
    Ok(render_markdown(&tables))
}

/// Convert a variables export file on disk, writing the Markdown next to it.
///
/// Nothing is written when extraction fails.
pub fn convert_file(input: &Path, output: &Path, root: &RootPath) -> Result<(), TokenError> {
    let source = fs::read_to_string(input)?;
    let markdown = convert_document(&source, root)?;
    fs::write(output, markdown)?;
    log::info!(
        "flattened {} into {}",
        input.display(),
        output.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPORT: &str = r##"{
        "TailwindCSS": {
            "modes": {
                "Default": {
                    "color": { "primary": { "$value": "#ff0000" } }
                }
            }
        }
    }"##;

    #[test]
    fn converts_a_whole_document() {
        let markdown = convert_document(EXPORT, &RootPath::default()).unwrap();
        assert!(markdown.contains("### color"));
        assert!(markdown.contains("| primary | #ff0000 |"));
    }

    #[test]
    fn structure_error_on_missing_container() {
        let result = convert_document("{}", &RootPath::default());
        assert!(matches!(result, Err(TokenError::Structure(_))));
    }

    #[test]
    fn invalid_json_is_reported() {
        let result = convert_document("not json", &RootPath::default());
        assert!(matches!(result, Err(TokenError::Json(_))));
    }
}
