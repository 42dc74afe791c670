//! Markdown → HTML processing and document assembly

use comrak::{markdown_to_html, ComrakOptions};
use std::collections::BTreeMap;

/// Title used when a document has no heading to take one from.
pub const FALLBACK_TITLE: &str = "Markdown Document";

/// The toolchain's standard comrak options, shared by the HTML renderer and
/// the PDF block extractor so both see the same tree.
pub fn comrak_options() -> ComrakOptions<'static> {
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.extension.superscript = true;
    options.extension.front_matter_delimiter = Some("---".to_string());
    options
}

/// Convert Markdown to an HTML fragment.
pub fn to_html(markdown: &str) -> String {
    markdown_to_html(markdown, &comrak_options())
}

/// Wrap an HTML fragment in a complete document with inlined CSS.
pub fn complete_document(
    body: &str,
    title: &str,
    css: &str,
    meta_tags: &BTreeMap<String, String>,
) -> String {
    let mut meta_html = String::new();
    for (name, content) in meta_tags {
        meta_html.push_str(&format!(
            "    <meta name=\"{}\" content=\"{}\">\n",
            name, content
        ));
    }

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         \x20   <meta charset=\"UTF-8\">\n\
         \x20   <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         \x20   <title>{title}</title>\n\
         {meta_html}\
         \x20   <style>\n{css}\n    </style>\n\
         </head>\n\
         <body>\n\
         {body}\
         </body>\n\
         </html>\n"
    )
}

/// Extract a title from Markdown content: the text of the first ATX heading
/// of any level, or [`FALLBACK_TITLE`] when none exists.
pub fn extract_title(markdown: &str) -> String {
    for line in markdown.lines() {
        let line = line.trim();
        if line.starts_with('#') {
            let title = line.trim_start_matches('#').trim();
            if !title.is_empty() {
                return title.to_string();
            }
        }
    }
    FALLBACK_TITLE.to_string()
}

/// Whether the content opens with a `---` front-matter block.
pub fn has_front_matter(markdown: &str) -> bool {
    let content = markdown.trim_start_matches('\u{feff}');
    content.starts_with("---\n") || content.starts_with("---\r\n")
}

/// Extract `key: value` pairs from a leading front-matter block.
///
/// Returns an empty map when there is no front matter or the block is
/// unterminated.
pub fn extract_metadata(markdown: &str) -> BTreeMap<String, String> {
    let mut metadata = BTreeMap::new();
    if !has_front_matter(markdown) {
        return metadata;
    }

    let mut lines = markdown.lines();
    lines.next(); // opening delimiter
    for line in lines {
        if line.trim() == "---" {
            return metadata;
        }
        if let Some((key, value)) = line.split_once(':') {
            metadata.insert(key.trim().to_string(), value.trim().to_string());
        }
    }
    // No closing delimiter: not front matter after all.
    BTreeMap::new()
}
