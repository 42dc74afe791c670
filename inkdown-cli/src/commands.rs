//! Subcommand handlers
//!
//! Each handler resolves its settings by layering CLI flags over the
//! shared configuration, runs the conversion, and reports progress on
//! stdout. Errors bubble up as strings and are printed once by `main`.

use clap::ArgMatches;
use inkdown_config::{InkdownConfig, Loader, PdfPageSize};
use inkdown_pdf::discover::find_markdown_files;
use inkdown_pdf::styles::THEMES;
use inkdown_pdf::{ConvertOptions, Converter, PageSize};
use inkdown_tokens::RootPath;
use std::path::{Path, PathBuf};

type CommandResult = Result<(), String>;

pub fn handle_tokens_command(matches: &ArgMatches) -> CommandResult {
    let config = load_config(matches)?;
    let input = flag_or(matches, "input", &config.tokens.input);
    let output = flag_or(matches, "output", &config.tokens.output);
    let container = flag_or(matches, "container", &config.tokens.container);
    let mode = flag_or(matches, "mode", &config.tokens.mode);

    let root = RootPath::new(container, mode);
    inkdown_tokens::convert_file(Path::new(&input), Path::new(&output), &root)
        .map_err(|e| e.to_string())?;
    println!("Markdown tables written to {}", output);
    Ok(())
}

pub fn handle_convert_command(matches: &ArgMatches) -> CommandResult {
    if matches.get_flag("preview") {
        return handle_preview_command(matches);
    }

    let config = load_config(matches)?;
    let input = required_path(matches, "input");
    let output = matches.get_one::<String>("output").map(PathBuf::from);

    let converter = Converter::new(convert_options(matches, &config));
    let written = converter
        .convert_file(&input, output.as_deref())
        .map_err(|e| e.to_string())?;
    println!("PDF generated: {}", written.display());
    Ok(())
}

pub fn handle_batch_command(matches: &ArgMatches) -> CommandResult {
    let config = load_config(matches)?;
    let directory = required_path(matches, "directory");
    if !directory.is_dir() {
        return Err(format!("not a directory: {}", directory.display()));
    }

    let recursive = matches.get_flag("recursive");
    let files = find_markdown_files(&directory, recursive).map_err(|e| e.to_string())?;
    if files.is_empty() {
        println!("No Markdown files found in {}", directory.display());
        return Ok(());
    }
    println!("Found {} Markdown file(s)", files.len());

    let output_dir = matches.get_one::<String>("output-dir").map(PathBuf::from);
    let converter = Converter::new(convert_options(matches, &config));

    let mut succeeded = 0usize;
    let mut failed = 0usize;
    for file in &files {
        let output = batch_output_path(file, &directory, output_dir.as_deref());
        match converter.convert_file(file, Some(&output)) {
            Ok(written) => {
                succeeded += 1;
                println!("  {} -> {}", file.display(), written.display());
            }
            Err(e) => {
                failed += 1;
                eprintln!("  failed: {}: {}", file.display(), e);
            }
        }
    }

    println!("Conversion complete: {} successful, {} failed", succeeded, failed);
    if failed > 0 {
        return Err(format!("{} conversion(s) failed", failed));
    }
    Ok(())
}

pub fn handle_preview_command(matches: &ArgMatches) -> CommandResult {
    let config = load_config(matches)?;
    let input = required_path(matches, "input");
    let markdown = std::fs::read_to_string(&input)
        .map_err(|e| format!("cannot read {}: {}", input.display(), e))?;

    let converter = Converter::new(convert_options(matches, &config));
    let html = converter.preview_html(&markdown).map_err(|e| e.to_string())?;

    let output = matches
        .get_one::<String>("output")
        .map(PathBuf::from)
        .unwrap_or_else(|| input.with_extension("html"));
    std::fs::write(&output, html)
        .map_err(|e| format!("cannot write {}: {}", output.display(), e))?;
    println!("HTML preview generated: {}", output.display());
    Ok(())
}

pub fn handle_themes_command() -> CommandResult {
    println!("Available themes:\n");
    for (name, description) in THEMES {
        println!("  {:<10} - {}", name, description);
    }
    Ok(())
}

fn load_config(matches: &ArgMatches) -> Result<InkdownConfig, String> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    loader
        .build()
        .map_err(|e| format!("configuration error: {}", e))
}

fn convert_options(matches: &ArgMatches, config: &InkdownConfig) -> ConvertOptions {
    ConvertOptions {
        theme: flag_or(matches, "theme", &config.convert.theme),
        custom_css: matches.get_one::<String>("custom-css").cloned(),
        custom_css_file: matches.get_one::<String>("css").map(PathBuf::from),
        page_size: match config.convert.pdf.size {
            PdfPageSize::Desktop => PageSize::Desktop,
            PdfPageSize::Mobile => PageSize::Mobile,
        },
        title: matches.get_one::<String>("title").cloned(),
        ..ConvertOptions::default()
    }
}

/// Output path for one file of a batch run. With an output directory the
/// input layout is mirrored underneath it.
fn batch_output_path(file: &Path, base: &Path, output_dir: Option<&Path>) -> PathBuf {
    match output_dir {
        Some(dir) => {
            let relative = file.strip_prefix(base).unwrap_or(file);
            dir.join(relative).with_extension("pdf")
        }
        None => file.with_extension("pdf"),
    }
}

fn flag_or(matches: &ArgMatches, id: &str, fallback: &str) -> String {
    matches
        .get_one::<String>(id)
        .cloned()
        .unwrap_or_else(|| fallback.to_string())
}

fn required_path(matches: &ArgMatches, id: &str) -> PathBuf {
    matches
        .get_one::<String>(id)
        .map(PathBuf::from)
        .expect("argument is required by clap")
}
