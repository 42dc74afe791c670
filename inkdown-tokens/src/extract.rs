//! Locating the token tree inside a variables export
//!
//! Exports wrap the actual token tree in a fixed nesting: a container entry
//! (named after the token collection) holds a `modes` object with one tree
//! per mode. Some exporters additionally wrap the whole document in a
//! one-element array.

use crate::error::TokenError;
use serde_json::Value;

const MODES_KEY: &str = "modes";

/// The fixed nesting path from the document root to the token tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootPath {
    /// Name of the container entry at the document root.
    pub container: String,
    /// Mode whose tree is flattened.
    pub mode: String,
}

impl RootPath {
    pub fn new(container: impl Into<String>, mode: impl Into<String>) -> Self {
        RootPath {
            container: container.into(),
            mode: mode.into(),
        }
    }
}

impl Default for RootPath {
    fn default() -> Self {
        RootPath::new("TailwindCSS", "Default")
    }
}

/// Descend to the token tree for the configured container and mode.
///
/// A missing key, a wrong type anywhere on the path, or an empty top-level
/// array is a [`TokenError::Structure`]; the conversion aborts and nothing
/// is written.
pub fn extract_root<'a>(document: &'a Value, path: &RootPath) -> Result<&'a Value, TokenError> {
    let document = match document {
        Value::Array(items) => items.first().ok_or_else(|| {
            TokenError::Structure("top-level array is empty".to_string())
        })?,
        other => other,
    };

    let container = lookup(document, &path.container, "the document root")?;
    let modes = lookup(container, MODES_KEY, &path.container)?;
    let tree = lookup(modes, &path.mode, MODES_KEY)?;
    if !tree.is_object() {
        return Err(TokenError::Structure(format!(
            "mode '{}' is not an object",
            path.mode
        )));
    }
    Ok(tree)
}

fn lookup<'a>(value: &'a Value, key: &str, context: &str) -> Result<&'a Value, TokenError> {
    value
        .as_object()
        .and_then(|map| map.get(key))
        .ok_or_else(|| TokenError::Structure(format!("missing key '{}' under {}", key, context)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn export() -> Value {
        json!({
            "TailwindCSS": {
                "modes": {
                    "Default": { "color": { "primary": { "$value": "#fff" } } },
                    "Dark": { "color": { "primary": { "$value": "#000" } } }
                }
            }
        })
    }

    #[test]
    fn extracts_the_default_mode_tree() {
        let document = export();
        let tree = extract_root(&document, &RootPath::default()).unwrap();
        assert!(tree.get("color").is_some());
    }

    #[test]
    fn extracts_a_named_mode() {
        let document = export();
        let tree = extract_root(&document, &RootPath::new("TailwindCSS", "Dark")).unwrap();
        assert_eq!(tree["color"]["primary"]["$value"], "#000");
    }

    #[test]
    fn unwraps_a_one_element_array_document() {
        let document = json!([export()]);
        let tree = extract_root(&document, &RootPath::default()).unwrap();
        assert!(tree.get("color").is_some());
    }

    #[test]
    fn empty_array_document_is_a_structure_error() {
        let document = json!([]);
        let err = extract_root(&document, &RootPath::default()).unwrap_err();
        assert!(matches!(err, TokenError::Structure(_)));
    }

    #[test]
    fn missing_container_is_a_structure_error() {
        let document = json!({ "Other": {} });
        let err = extract_root(&document, &RootPath::default()).unwrap_err();
        assert!(err.to_string().contains("TailwindCSS"));
    }

    #[test]
    fn missing_mode_is_a_structure_error() {
        let document = export();
        let err = extract_root(&document, &RootPath::new("TailwindCSS", "Compact")).unwrap_err();
        assert!(err.to_string().contains("Compact"));
    }

    #[test]
    fn non_object_mode_is_a_structure_error() {
        let document = json!({ "TailwindCSS": { "modes": { "Default": 3 } } });
        let err = extract_root(&document, &RootPath::default()).unwrap_err();
        assert!(matches!(err, TokenError::Structure(_)));
    }
}
