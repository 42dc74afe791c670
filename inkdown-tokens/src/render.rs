//! Markdown rendering of flattened token tables
//!
//! Each table becomes a level-3 heading followed by a two-column table:
//!
//!     ### color
//!
//!     | Name | Default |
//!     | :--- | :--- |
//!     | primary | #ff0000 |
//!
//! Tables are separated by blank lines and rendered in the order given.

use crate::flatten::TokenTable;

/// Heading used when the root level itself holds variables.
const ROOT_LABEL: &str = "Root Variables";

/// Render flattened tables as a single Markdown document.
///
/// A table with rows but an empty title gets the root fallback heading; a
/// table with neither title nor rows renders nothing. A titled table with
/// no rows still emits its heading.
pub fn render_markdown(tables: &[TokenTable]) -> String {
    let mut lines: Vec<String> = Vec::new();

    for table in tables {
        if table.title.is_empty() {
            if table.rows.is_empty() {
                continue;
            }
            lines.push(format!("### {}\n", ROOT_LABEL));
        } else {
            lines.push(format!("### {}\n", table.title));
        }

        if !table.rows.is_empty() {
            lines.push("| Name | Default |".to_string());
            lines.push("| :--- | :--- |".to_string());
            for (name, value) in &table.rows {
                lines.push(format!("| {} | {} |", name, value));
            }
            lines.push(String::new());
        }
    }

    lines.join("\n")
}
