//! Markdown → PDF conversion
//!
//!     This crate converts Markdown documents to PDF files. Markdown parsing
//!     is delegated to comrak and PDF emission to printpdf; the scope here is
//!     plumbing: reading files, picking a theme, assembling the styled
//!     output, and writing the result.
//!
//! Pipeline
//!
//!     Markdown string → comrak AST → flat block sequence → word-wrapped
//!     lines → printpdf pages (built-in fonts chosen by theme).
//!
//!     For HTML previews the same source goes through comrak's HTML renderer
//!     instead and is wrapped in a complete document with the theme CSS
//!     inlined. CSS is carried for previews only; the PDF path derives its
//!     page style from the theme name, not from interpreting CSS.
//!
//! The file structure :
//!     .
//!     ├── error.rs        # ConvertError
//!     ├── html.rs         # comrak options, HTML document assembly, titles
//!     ├── styles.rs       # Theme table, CSS constants, merging
//!     ├── pdf.rs          # Block extraction, wrapping, page emission
//!     ├── convert.rs      # Converter facade tying the pieces together
//!     └── discover.rs     # Markdown file discovery for batch conversion

pub mod convert;
pub mod discover;
pub mod error;
pub mod html;
pub mod pdf;
pub mod styles;

pub use convert::{ConvertOptions, Converter};
pub use error::ConvertError;
pub use pdf::PageSize;
