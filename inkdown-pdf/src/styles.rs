//! Theme and CSS management
//!
//! Themes are fixed CSS strings used by the HTML preview; every non-default
//! theme is the default sheet with an override block merged on top. The PDF
//! path only looks at the theme *name* (see `pdf::page_style`), so the CSS
//! here never has to be interpreted.

use crate::error::ConvertError;
use std::fs;
use std::path::Path;

/// Available themes with their one-line descriptions, in display order.
pub const THEMES: &[(&str, &str)] = &[
    ("default", "Default monospace theme"),
    ("minimal", "Clean minimal theme"),
    ("academic", "Academic paper theme"),
    ("modern", "Modern colorful theme"),
];

/// CSS for a named theme. Unknown names are a style error listing the
/// available themes.
pub fn theme_css(name: &str) -> Result<String, ConvertError> {
    match name {
        "default" => Ok(DEFAULT_CSS.to_string()),
        "minimal" => Ok(merge_css(DEFAULT_CSS, MINIMAL_OVERRIDES)),
        "academic" => Ok(merge_css(DEFAULT_CSS, ACADEMIC_OVERRIDES)),
        "modern" => Ok(merge_css(DEFAULT_CSS, MODERN_OVERRIDES)),
        other => {
            let names: Vec<&str> = THEMES.iter().map(|(name, _)| *name).collect();
            Err(ConvertError::Style(format!(
                "theme '{}' not found; available themes: {}",
                other,
                names.join(", ")
            )))
        }
    }
}

/// Merge a base sheet with custom overrides. Later rules win, so the custom
/// block is appended.
pub fn merge_css(base: &str, custom: &str) -> String {
    format!("{}\n\n/* Custom Styles */\n{}", base, custom)
}

/// Read custom CSS from a file.
pub fn load_custom_css(path: &Path) -> Result<String, ConvertError> {
    fs::read_to_string(path)
        .map_err(|e| ConvertError::Style(format!("cannot read CSS file {}: {}", path.display(), e)))
}

const DEFAULT_CSS: &str = r#"@page {
    size: A4;
    margin: 2cm;
}

body {
    font-family: 'JetBrains Mono', 'Monaco', 'Consolas', monospace;
    line-height: 1.6;
    color: #333;
    max-width: 100%;
    font-size: 11pt;
}

h1, h2, h3, h4, h5, h6 {
    color: #2c3e50;
    margin-top: 1.5em;
    margin-bottom: 0.5em;
    font-weight: bold;
    page-break-after: avoid;
}

h1 {
    font-size: 2.2em;
    border-bottom: 3px solid #3498db;
    padding-bottom: 0.3em;
}

h2 {
    font-size: 1.8em;
    border-bottom: 2px solid #3498db;
    padding-bottom: 0.2em;
}

h3 {
    font-size: 1.4em;
    color: #34495e;
}

h4 {
    font-size: 1.2em;
    color: #34495e;
}

h5, h6 {
    font-size: 1em;
    color: #7f8c8d;
}

p {
    margin-bottom: 1em;
    text-align: justify;
    orphans: 2;
    widows: 2;
}

code {
    background-color: #f8f9fa;
    padding: 0.2em 0.4em;
    border-radius: 3px;
    font-size: 0.9em;
    color: #e74c3c;
}

pre {
    background-color: #f8f9fa;
    padding: 1em;
    border-radius: 5px;
    overflow-x: auto;
    border-left: 4px solid #3498db;
    margin: 1em 0;
    page-break-inside: avoid;
}

pre code {
    background-color: transparent;
    padding: 0;
    color: #333;
}

blockquote {
    border-left: 4px solid #3498db;
    margin: 1em 0;
    padding: 0.5em 1em;
    color: #666;
    font-style: italic;
    background-color: #f9f9f9;
    border-radius: 0 5px 5px 0;
}

table {
    border-collapse: collapse;
    width: 100%;
    margin: 1em 0;
    page-break-inside: avoid;
}

th, td {
    border: 1px solid #ddd;
    padding: 0.5em;
    text-align: left;
}

th {
    background-color: #f2f2f2;
    font-weight: bold;
    color: #2c3e50;
}

tr:nth-child(even) {
    background-color: #f9f9f9;
}

ul, ol {
    margin: 1em 0;
    padding-left: 2em;
}

li {
    margin-bottom: 0.5em;
}

a {
    color: #3498db;
    text-decoration: none;
}

img {
    max-width: 100%;
    height: auto;
    display: block;
    margin: 1em auto;
    page-break-inside: avoid;
}

hr {
    border: none;
    border-top: 2px solid #eee;
    margin: 2em 0;
}

.task-list-item {
    list-style-type: none;
}

.footnote {
    font-size: 0.9em;
    color: #666;
}
"#;

const MINIMAL_OVERRIDES: &str = r#"h1, h2, h3, h4, h5, h6 {
    color: #000;
    border-bottom: none;
}

h1 {
    font-size: 1.8em;
    margin-bottom: 1em;
}

h2 {
    font-size: 1.5em;
}

blockquote {
    border-left: 2px solid #ccc;
    background-color: transparent;
}

pre {
    border-left: none;
    background-color: #f5f5f5;
}
"#;

const ACADEMIC_OVERRIDES: &str = r#"body {
    font-family: 'Times New Roman', 'Times', serif;
    font-size: 12pt;
    line-height: 1.8;
}

h1, h2, h3, h4, h5, h6 {
    font-family: 'Times New Roman', 'Times', serif;
    color: #000;
}

h1 {
    text-align: center;
    border-bottom: none;
    font-size: 1.5em;
}

h2 {
    border-bottom: none;
    font-size: 1.3em;
}

p {
    text-indent: 1.5em;
}

blockquote {
    font-style: normal;
    margin-left: 2em;
    margin-right: 2em;
}
"#;

const MODERN_OVERRIDES: &str = r#"body {
    font-family: 'Segoe UI', 'Roboto', sans-serif;
}

h1 {
    background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
    color: white;
    padding: 1em;
    border-radius: 10px;
    border-bottom: none;
}

h2 {
    color: #667eea;
    border-bottom: 2px solid #667eea;
}

h3 {
    color: #764ba2;
}

blockquote {
    border-left: 4px solid #667eea;
    color: #333;
}

pre {
    border-left: 4px solid #764ba2;
}

code {
    background-color: #667eea;
    color: white;
}
"#;
