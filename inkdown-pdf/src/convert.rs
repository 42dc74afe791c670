//! Converter facade
//!
//! Ties HTML processing, styling, and PDF rendering together behind one
//! entry point configured by [`ConvertOptions`].

use crate::discover::default_output_path;
use crate::error::ConvertError;
use crate::pdf::{render_pdf, PageSize};
use crate::{html, styles};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Options for a conversion run. The defaults match the toolchain's
/// built-in configuration.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Theme name; empty string means `default`.
    pub theme: String,
    /// Custom CSS appended after the theme sheet.
    pub custom_css: Option<String>,
    /// Custom CSS file merged before `custom_css`.
    pub custom_css_file: Option<PathBuf>,
    /// Extra meta tags for generated HTML documents.
    pub meta_tags: BTreeMap<String, String>,
    /// Page geometry for PDFs.
    pub page_size: PageSize,
    /// Explicit document title; taken from the first heading otherwise.
    pub title: Option<String>,
}

/// Markdown document converter.
pub struct Converter {
    options: ConvertOptions,
}

impl Converter {
    pub fn new(options: ConvertOptions) -> Self {
        Converter { options }
    }

    fn theme(&self) -> &str {
        if self.options.theme.is_empty() {
            "default"
        } else {
            &self.options.theme
        }
    }

    /// Convert a Markdown file to PDF, returning the output path.
    ///
    /// Without an explicit output the PDF lands next to the input. The
    /// styling is validated before anything is written, so a bad theme or
    /// unreadable CSS file aborts with no partial output.
    pub fn convert_file(
        &self,
        input: &Path,
        output: Option<&Path>,
    ) -> Result<PathBuf, ConvertError> {
        if !input.is_file() {
            return Err(ConvertError::FileNotFound(input.to_path_buf()));
        }
        let markdown = fs::read_to_string(input)
            .map_err(|e| ConvertError::InvalidMarkdown(format!("{}: {}", input.display(), e)))?;
        let output = output
            .map(Path::to_path_buf)
            .unwrap_or_else(|| default_output_path(input, "pdf"));
        self.convert_str(&markdown, &output)?;
        Ok(output)
    }

    /// Convert Markdown content to a PDF at the given path.
    pub fn convert_str(&self, markdown: &str, output: &Path) -> Result<(), ConvertError> {
        self.prepare_css()?;
        let title = self.title_for(markdown);
        render_pdf(markdown, &title, self.theme(), self.options.page_size, output)?;
        log::info!("wrote {} ({} theme)", output.display(), self.theme());
        Ok(())
    }

    /// Render a complete HTML document with the theme CSS inlined.
    ///
    /// Front-matter pairs become meta tags; explicitly configured tags win
    /// on conflicts.
    pub fn preview_html(&self, markdown: &str) -> Result<String, ConvertError> {
        let css = self.prepare_css()?;
        let body = html::to_html(markdown);
        let title = self.title_for(markdown);
        let mut meta = html::extract_metadata(markdown);
        for (name, content) in &self.options.meta_tags {
            meta.insert(name.clone(), content.clone());
        }
        Ok(html::complete_document(&body, &title, &css, &meta))
    }

    /// Theme CSS plus any custom layers, custom file first.
    fn prepare_css(&self) -> Result<String, ConvertError> {
        let mut css = styles::theme_css(self.theme())?;
        if let Some(path) = &self.options.custom_css_file {
            let file_css = styles::load_custom_css(path)?;
            css = styles::merge_css(&css, &file_css);
        }
        if let Some(custom) = &self.options.custom_css {
            css = styles::merge_css(&css, custom);
        }
        Ok(css)
    }

    fn title_for(&self, markdown: &str) -> String {
        self.options
            .title
            .clone()
            .unwrap_or_else(|| html::extract_title(markdown))
    }
}

impl Default for Converter {
    fn default() -> Self {
        Converter::new(ConvertOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const SAMPLE: &str = "# Sample Doc\n\nHello *world*.\n";

    #[test]
    fn converts_a_file_next_to_the_input() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("doc.md");
        fs::write(&input, SAMPLE).unwrap();

        let output = Converter::default().convert_file(&input, None).unwrap();
        assert_eq!(output, dir.path().join("doc.pdf"));
        assert!(fs::read(&output).unwrap().starts_with(b"%PDF"));
    }

    #[test]
    fn honors_an_explicit_output_path() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("doc.md");
        let output = dir.path().join("out").join("doc.pdf");
        fs::write(&input, SAMPLE).unwrap();

        let result = Converter::default()
            .convert_file(&input, Some(&output))
            .unwrap();
        assert_eq!(result, output);
        assert!(output.exists());
    }

    #[test]
    fn missing_input_is_reported_before_any_output() {
        let dir = tempdir().unwrap();
        let err = Converter::default()
            .convert_file(&dir.path().join("absent.md"), None)
            .unwrap_err();
        assert!(matches!(err, ConvertError::FileNotFound(_)));
    }

    #[test]
    fn bad_theme_aborts_without_writing() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("doc.md");
        let output = dir.path().join("doc.pdf");
        fs::write(&input, SAMPLE).unwrap();

        let converter = Converter::new(ConvertOptions {
            theme: "neon".to_string(),
            ..ConvertOptions::default()
        });
        let err = converter.convert_file(&input, Some(&output)).unwrap_err();
        assert!(matches!(err, ConvertError::Style(_)));
        assert!(!output.exists());
    }

    #[test]
    fn preview_embeds_theme_and_custom_css() {
        let converter = Converter::new(ConvertOptions {
            theme: "minimal".to_string(),
            custom_css: Some("p { color: green; }".to_string()),
            ..ConvertOptions::default()
        });
        let html = converter.preview_html(SAMPLE).unwrap();

        assert!(html.contains("<title>Sample Doc</title>"));
        assert!(html.contains("<h1>Sample Doc</h1>"));
        assert!(html.contains("/* Custom Styles */"));
        assert!(html.contains("p { color: green; }"));
    }

    #[test]
    fn front_matter_becomes_meta_tags_in_previews() {
        let html = Converter::default()
            .preview_html("---\nauthor: someone\n---\n\n# Doc\n")
            .unwrap();
        assert!(html.contains("<meta name=\"author\" content=\"someone\">"));
    }

    #[test]
    fn explicit_title_wins_over_the_heading() {
        let converter = Converter::new(ConvertOptions {
            title: Some("Override".to_string()),
            ..ConvertOptions::default()
        });
        let html = converter.preview_html(SAMPLE).unwrap();
        assert!(html.contains("<title>Override</title>"));
    }

    #[test]
    fn custom_css_file_is_merged() {
        let dir = tempdir().unwrap();
        let css_path = dir.path().join("extra.css");
        fs::write(&css_path, "h1 { border: 0; }").unwrap();

        let converter = Converter::new(ConvertOptions {
            custom_css_file: Some(css_path),
            ..ConvertOptions::default()
        });
        let html = converter.preview_html(SAMPLE).unwrap();
        assert!(html.contains("h1 { border: 0; }"));
    }
}
