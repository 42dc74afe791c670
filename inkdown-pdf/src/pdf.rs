//! PDF page rendering
//!
//! Converts Markdown to PDF by walking the comrak AST into a flat block
//! sequence (headings, paragraphs, code, list items, quotes, rules),
//! word-wrapping each block, and emitting the lines onto printpdf pages
//! with built-in fonts. The theme name selects fonts and spacing; CSS is
//! never interpreted here.

use crate::error::ConvertError;
use crate::html::comrak_options;
use comrak::nodes::{AstNode, ListType, NodeValue};
use comrak::{parse_document, Arena};
use printpdf::{
    BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference,
};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

const PT_TO_MM: f32 = 0.352_778;
const INDENT_STEP_MM: f32 = 5.0;

/// Page geometry for generated PDFs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSize {
    /// A4 portrait.
    Desktop,
    /// Narrow page for phone-width reading.
    Mobile,
}

impl PageSize {
    pub fn dimensions_mm(self) -> (f32, f32) {
        match self {
            PageSize::Desktop => (210.0, 297.0),
            PageSize::Mobile => (105.0, 186.0),
        }
    }
}

impl Default for PageSize {
    fn default() -> Self {
        PageSize::Desktop
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum BlockKind {
    Heading(u8),
    Paragraph,
    Code,
    ListItem,
    Quote,
    Rule,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Block {
    kind: BlockKind,
    text: String,
    indent: usize,
}

impl Block {
    fn new(kind: BlockKind, text: String, indent: usize) -> Self {
        Block { kind, text, indent }
    }
}

/// Fonts and spacing derived from a theme name.
struct PageStyle {
    body: BuiltinFont,
    bold: BuiltinFont,
    italic: BuiltinFont,
    body_size: f32,
    code_size: f32,
    margin_mm: f32,
    /// Average glyph advance as a fraction of the font size, used to
    /// estimate characters per line.
    char_width: f32,
}

impl PageStyle {
    fn heading_size(&self, level: u8) -> f32 {
        let factor = match level {
            1 => 2.0,
            2 => 1.6,
            3 => 1.35,
            4 => 1.15,
            _ => 1.0,
        };
        self.body_size * factor
    }
}

fn page_style(theme: &str) -> PageStyle {
    match theme {
        "academic" => PageStyle {
            body: BuiltinFont::TimesRoman,
            bold: BuiltinFont::TimesBold,
            italic: BuiltinFont::TimesItalic,
            body_size: 12.0,
            code_size: 9.5,
            margin_mm: 25.0,
            char_width: 0.5,
        },
        "minimal" | "modern" => PageStyle {
            body: BuiltinFont::Helvetica,
            bold: BuiltinFont::HelveticaBold,
            italic: BuiltinFont::HelveticaOblique,
            body_size: 11.0,
            code_size: 9.0,
            margin_mm: 20.0,
            char_width: 0.5,
        },
        // The default theme is monospace throughout.
        _ => PageStyle {
            body: BuiltinFont::Courier,
            bold: BuiltinFont::CourierBold,
            italic: BuiltinFont::CourierOblique,
            body_size: 10.0,
            code_size: 9.0,
            margin_mm: 20.0,
            char_width: 0.6,
        },
    }
}

/// Render a Markdown document to a PDF file.
pub fn render_pdf(
    markdown: &str,
    title: &str,
    theme: &str,
    size: PageSize,
    output: &Path,
) -> Result<(), ConvertError> {
    let blocks = collect_blocks(markdown);
    let style = page_style(theme);
    let (width, height) = size.dimensions_mm();

    let (doc, page, layer) = PdfDocument::new(title, Mm(width), Mm(height), "Layer 1");
    let body = add_font(&doc, style.body)?;
    let bold = add_font(&doc, style.bold)?;
    let italic = add_font(&doc, style.italic)?;
    let mono = add_font(&doc, BuiltinFont::Courier)?;

    {
        let mut writer = PageWriter {
            doc: &doc,
            layer: doc.get_page(page).get_layer(layer),
            width,
            height,
            margin: style.margin_mm,
            cursor: height - style.margin_mm,
        };

        for block in &blocks {
            let indent_mm = block.indent as f32 * INDENT_STEP_MM;
            match block.kind {
                BlockKind::Heading(level) => {
                    let size = style.heading_size(level);
                    writer.space(2.0);
                    for line in wrap(&block.text, writer.max_chars(size, style.char_width, indent_mm)) {
                        writer.write_line(&line, size, indent_mm, &bold);
                    }
                    writer.space(1.5);
                }
                BlockKind::Paragraph => {
                    let max = writer.max_chars(style.body_size, style.char_width, indent_mm);
                    for line in wrap(&block.text, max) {
                        writer.write_line(&line, style.body_size, indent_mm, &body);
                    }
                    writer.space(2.0);
                }
                BlockKind::ListItem => {
                    let max = writer.max_chars(style.body_size, style.char_width, indent_mm);
                    for line in wrap(&block.text, max) {
                        writer.write_line(&line, style.body_size, indent_mm, &body);
                    }
                    writer.space(0.8);
                }
                BlockKind::Quote => {
                    let max = writer.max_chars(style.body_size, style.char_width, indent_mm);
                    for line in wrap(&block.text, max) {
                        writer.write_line(&line, style.body_size, indent_mm, &italic);
                    }
                    writer.space(1.5);
                }
                BlockKind::Code => {
                    let max = writer.max_chars(style.code_size, 0.6, indent_mm);
                    writer.space(1.0);
                    for raw in block.text.lines() {
                        for line in hard_wrap(raw, max) {
                            writer.write_line(&line, style.code_size, indent_mm, &mono);
                        }
                    }
                    writer.space(1.5);
                }
                BlockKind::Rule => {
                    writer.space(1.0);
                    writer.write_line(&"-".repeat(40), style.body_size, indent_mm, &body);
                    writer.space(1.0);
                }
            }
        }
    }

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(output)?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|e| ConvertError::Render(e.to_string()))?;
    Ok(())
}

fn add_font(
    doc: &PdfDocumentReference,
    font: BuiltinFont,
) -> Result<IndirectFontRef, ConvertError> {
    doc.add_builtin_font(font)
        .map_err(|e| ConvertError::Render(e.to_string()))
}

struct PageWriter<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    width: f32,
    height: f32,
    margin: f32,
    /// Baseline of the next line, measured from the page bottom.
    cursor: f32,
}

impl PageWriter<'_> {
    fn max_chars(&self, font_size: f32, char_width: f32, indent_mm: f32) -> usize {
        let usable = self.width - 2.0 * self.margin - indent_mm;
        let char_mm = font_size * char_width * PT_TO_MM;
        (usable / char_mm).floor().max(8.0) as usize
    }

    fn write_line(&mut self, text: &str, font_size: f32, indent_mm: f32, font: &IndirectFontRef) {
        let line_height = font_size * 1.4 * PT_TO_MM;
        if self.cursor - line_height < self.margin {
            self.new_page();
        }
        self.layer
            .use_text(text, font_size, Mm(self.margin + indent_mm), Mm(self.cursor), font);
        self.cursor -= line_height;
    }

    fn space(&mut self, mm: f32) {
        self.cursor -= mm;
    }

    fn new_page(&mut self) {
        let (page, layer) = self
            .doc
            .add_page(Mm(self.width), Mm(self.height), "Layer 1");
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.cursor = self.height - self.margin;
    }
}

/// Parse Markdown and flatten the block structure for page layout.
fn collect_blocks(markdown: &str) -> Vec<Block> {
    let arena = Arena::new();
    let root = parse_document(&arena, markdown, &comrak_options());
    let mut blocks = Vec::new();
    collect_node(root, &mut blocks, 0);
    blocks
}

fn collect_node<'a>(node: &'a AstNode<'a>, blocks: &mut Vec<Block>, indent: usize) {
    let data = node.data.borrow();
    match &data.value {
        NodeValue::Document => {
            for child in node.children() {
                collect_node(child, blocks, indent);
            }
        }
        NodeValue::FrontMatter(_) => {}
        NodeValue::Heading(heading) => {
            blocks.push(Block::new(
                BlockKind::Heading(heading.level),
                inline_text(node),
                indent,
            ));
        }
        NodeValue::Paragraph => {
            let text = inline_text(node);
            if !text.is_empty() {
                blocks.push(Block::new(BlockKind::Paragraph, text, indent));
            }
        }
        NodeValue::CodeBlock(code) => {
            blocks.push(Block::new(BlockKind::Code, code.literal.clone(), indent));
        }
        NodeValue::BlockQuote => {
            for child in node.children() {
                let quoted = inline_text(child);
                if !quoted.is_empty() {
                    blocks.push(Block::new(BlockKind::Quote, quoted, indent + 1));
                }
            }
        }
        NodeValue::List(list) => {
            let mut number = (list.list_type == ListType::Ordered).then_some(list.start);
            for item in node.children() {
                collect_item(item, blocks, indent, number);
                if let Some(n) = number.as_mut() {
                    *n += 1;
                }
            }
        }
        NodeValue::ThematicBreak => {
            blocks.push(Block::new(BlockKind::Rule, String::new(), indent));
        }
        NodeValue::Table(_) => {
            for row in node.children() {
                let cells: Vec<String> = row.children().map(inline_text).collect();
                blocks.push(Block::new(BlockKind::Paragraph, cells.join(" | "), indent));
            }
        }
        _ => {
            for child in node.children() {
                collect_node(child, blocks, indent);
            }
        }
    }
}

fn collect_item<'a>(
    item: &'a AstNode<'a>,
    blocks: &mut Vec<Block>,
    indent: usize,
    number: Option<usize>,
) {
    let marker = match number {
        Some(n) => format!("{}. ", n),
        None => "- ".to_string(),
    };
    let mut used_marker = false;
    for child in item.children() {
        if matches!(child.data.borrow().value, NodeValue::Paragraph) {
            let text = inline_text(child);
            if text.is_empty() {
                continue;
            }
            let text = if used_marker {
                text
            } else {
                used_marker = true;
                format!("{}{}", marker, text)
            };
            blocks.push(Block::new(BlockKind::ListItem, text, indent));
        } else {
            collect_node(child, blocks, indent + 1);
        }
    }
}

/// Plain text of a node's inline content, with breaks collapsed to spaces.
fn inline_text<'a>(node: &'a AstNode<'a>) -> String {
    let mut out = String::new();
    collect_inline(node, &mut out);
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn collect_inline<'a>(node: &'a AstNode<'a>, out: &mut String) {
    for child in node.children() {
        match &child.data.borrow().value {
            NodeValue::Text(text) => out.push_str(text),
            NodeValue::Code(code) => out.push_str(&code.literal),
            NodeValue::SoftBreak | NodeValue::LineBreak => out.push(' '),
            _ => {}
        }
        collect_inline(child, out);
    }
}

/// Greedy word wrap; overlong words are hard-split.
fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let max = max_chars.max(8);
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current_len > 0 && current_len + 1 + word_len > max {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if word_len > max {
            for ch in word.chars() {
                if current_len == max {
                    lines.push(std::mem::take(&mut current));
                    current_len = 0;
                }
                current.push(ch);
                current_len += 1;
            }
        } else {
            if current_len > 0 {
                current.push(' ');
                current_len += 1;
            }
            current.push_str(word);
            current_len += word_len;
        }
    }
    if current_len > 0 {
        lines.push(current);
    }
    lines
}

/// Split a preformatted line at a fixed width, preserving leading spaces.
fn hard_wrap(line: &str, max_chars: usize) -> Vec<String> {
    let max = max_chars.max(8);
    if line.is_empty() {
        return vec![String::new()];
    }
    line.chars()
        .collect::<Vec<_>>()
        .chunks(max)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const SAMPLE: &str = "\
# Title

First paragraph with *emphasis*.

- one
- two

```text
let code = 1;
```

> quoted line
";

    #[test]
    fn blocks_follow_document_order() {
        let blocks = collect_blocks(SAMPLE);
        let kinds: Vec<&BlockKind> = blocks.iter().map(|b| &b.kind).collect();
        assert_eq!(
            kinds,
            vec![
                &BlockKind::Heading(1),
                &BlockKind::Paragraph,
                &BlockKind::ListItem,
                &BlockKind::ListItem,
                &BlockKind::Code,
                &BlockKind::Quote,
            ]
        );
        assert_eq!(blocks[0].text, "Title");
        assert_eq!(blocks[1].text, "First paragraph with emphasis.");
        assert_eq!(blocks[2].text, "- one");
    }

    #[test]
    fn ordered_lists_keep_their_numbering() {
        let blocks = collect_blocks("3. third\n4. fourth\n");
        assert_eq!(blocks[0].text, "3. third");
        assert_eq!(blocks[1].text, "4. fourth");
    }

    #[test]
    fn nested_lists_are_indented() {
        let blocks = collect_blocks("- outer\n  - inner\n");
        assert_eq!(blocks[0].indent, 0);
        assert_eq!(blocks[1].indent, 1);
        assert_eq!(blocks[1].text, "- inner");
    }

    #[test]
    fn front_matter_produces_no_blocks() {
        let blocks = collect_blocks("---\ntitle: x\n---\n\nBody.\n");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].text, "Body.");
    }

    #[test]
    fn table_rows_become_joined_lines() {
        let blocks = collect_blocks("| a | b |\n| - | - |\n| 1 | 2 |\n");
        assert_eq!(blocks[0].text, "a | b");
        assert_eq!(blocks[1].text, "1 | 2");
    }

    #[test]
    fn wrap_splits_at_word_boundaries() {
        let lines = wrap("alpha beta gamma delta", 11);
        assert_eq!(lines, vec!["alpha beta", "gamma delta"]);
    }

    #[test]
    fn wrap_hard_splits_overlong_words() {
        let lines = wrap("abcdefghijklmnop", 8);
        assert_eq!(lines, vec!["abcdefgh", "ijklmnop"]);
    }

    #[test]
    fn renders_a_pdf_file() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("sample.pdf");
        render_pdf(SAMPLE, "Title", "default", PageSize::Desktop, &out).unwrap();

        let bytes = std::fs::read(&out).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn long_documents_flow_onto_more_pages() {
        let mut markdown = String::new();
        for i in 0..300 {
            markdown.push_str(&format!("Paragraph number {} with some filler text.\n\n", i));
        }
        let dir = tempdir().unwrap();
        let out = dir.path().join("long.pdf");
        render_pdf(&markdown, "Long", "default", PageSize::Mobile, &out).unwrap();
        assert!(out.exists());
    }
}
