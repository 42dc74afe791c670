//! Markdown file discovery for batch conversion

use crate::error::ConvertError;
use std::fs;
use std::path::{Path, PathBuf};

const MARKDOWN_EXTENSIONS: &[&str] = &["md", "markdown"];

/// Whether a path looks like a Markdown file, by extension.
pub fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            MARKDOWN_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Find Markdown files in a directory, sorted for deterministic batch order.
pub fn find_markdown_files(dir: &Path, recursive: bool) -> Result<Vec<PathBuf>, ConvertError> {
    let mut files = Vec::new();
    walk(dir, recursive, &mut files)?;
    files.sort();
    Ok(files)
}

fn walk(dir: &Path, recursive: bool, files: &mut Vec<PathBuf>) -> Result<(), ConvertError> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            if recursive {
                walk(&path, recursive, files)?;
            }
        } else if is_markdown_file(&path) {
            files.push(path);
        }
    }
    Ok(())
}

/// Default output path: the input with its extension replaced.
pub fn default_output_path(input: &Path, extension: &str) -> PathBuf {
    input.with_extension(extension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn recognizes_markdown_extensions() {
        assert!(is_markdown_file(Path::new("notes.md")));
        assert!(is_markdown_file(Path::new("notes.markdown")));
        assert!(is_markdown_file(Path::new("NOTES.MD")));
        assert!(!is_markdown_file(Path::new("notes.txt")));
        assert!(!is_markdown_file(Path::new("Makefile")));
    }

    #[test]
    fn finds_files_non_recursively() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("b.md"), "b").unwrap();
        fs::write(dir.path().join("a.md"), "a").unwrap();
        fs::write(dir.path().join("ignore.txt"), "x").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("c.md"), "c").unwrap();

        let files = find_markdown_files(dir.path(), false).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["a.md", "b.md"]);
    }

    #[test]
    fn finds_files_recursively() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.md"), "a").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("c.markdown"), "c").unwrap();

        let files = find_markdown_files(dir.path(), true).unwrap();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn default_output_swaps_the_extension() {
        assert_eq!(
            default_output_path(Path::new("docs/readme.md"), "pdf"),
            PathBuf::from("docs/readme.pdf")
        );
    }
}
