//! Command-line interface for inkdown
//! This binary converts design-token exports and Markdown documents into
//! publishable formats.
//!
//! Usage:
//!   inkdown tokens [input] [-o output]          - Flatten a token export to Markdown
//!   inkdown convert <input> [-t theme]          - Convert a Markdown file to PDF
//!   inkdown batch <directory> [--recursive]     - Convert every Markdown file in a directory
//!   inkdown preview <input> [-t theme]          - Render a styled HTML preview
//!   inkdown themes                              - List available themes

use clap::{Arg, ArgAction, Command};

mod commands;

fn main() {
    let matches = build_command().get_matches();

    init_logging(matches.get_flag("verbose"));

    let result = match matches.subcommand() {
        Some(("tokens", sub)) => commands::handle_tokens_command(sub),
        Some(("convert", sub)) => commands::handle_convert_command(sub),
        Some(("batch", sub)) => commands::handle_batch_command(sub),
        Some(("preview", sub)) => commands::handle_preview_command(sub),
        Some(("themes", _)) => commands::handle_themes_command(),
        _ => unreachable!("subcommand is required"),
    };

    if let Err(message) = result {
        eprintln!("Error: {}", message);
        std::process::exit(1);
    }
}

fn build_command() -> Command {
    Command::new("inkdown")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for converting design-token exports and Markdown documents")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_name("FILE")
                .help("Configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Enable informational logging"),
        )
        .subcommand(
            Command::new("tokens")
                .about("Flatten a design-token export into Markdown tables")
                .arg(
                    Arg::new("input")
                        .help("Variables export (JSON); defaults to the configured path")
                        .index(1),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_name("FILE")
                        .help("Output Markdown file"),
                )
                .arg(
                    Arg::new("container")
                        .long("container")
                        .value_name("NAME")
                        .help("Container entry at the export's root"),
                )
                .arg(
                    Arg::new("mode")
                        .long("mode")
                        .value_name("NAME")
                        .help("Mode whose token tree is flattened"),
                ),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a Markdown file to PDF")
                .arg(
                    Arg::new("input")
                        .help("Markdown file to convert")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_name("FILE")
                        .help("Output path (default: input with .pdf extension)"),
                )
                .arg(
                    Arg::new("preview")
                        .long("preview")
                        .action(ArgAction::SetTrue)
                        .help("Write a styled HTML preview instead of a PDF"),
                )
                .args(styling_args()),
        )
        .subcommand(
            Command::new("batch")
                .about("Convert every Markdown file in a directory")
                .arg(
                    Arg::new("directory")
                        .help("Directory to scan for Markdown files")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("output-dir")
                        .long("output-dir")
                        .short('o')
                        .value_name("DIR")
                        .help("Directory for the generated PDFs (mirrors the input layout)"),
                )
                .arg(
                    Arg::new("recursive")
                        .long("recursive")
                        .short('r')
                        .action(ArgAction::SetTrue)
                        .help("Descend into subdirectories"),
                )
                .args(styling_args()),
        )
        .subcommand(
            Command::new("preview")
                .about("Render a styled HTML preview of a Markdown file")
                .arg(
                    Arg::new("input")
                        .help("Markdown file to preview")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_name("FILE")
                        .help("Output path (default: input with .html extension)"),
                )
                .args(styling_args()),
        )
        .subcommand(Command::new("themes").about("List available themes"))
}

/// Styling flags shared by the conversion subcommands.
fn styling_args() -> Vec<Arg> {
    vec![
        Arg::new("theme")
            .long("theme")
            .short('t')
            .value_name("NAME")
            .help("Theme name (see `inkdown themes`)"),
        Arg::new("css")
            .long("css")
            .short('c')
            .value_name("FILE")
            .help("Custom CSS file appended after the theme sheet"),
        Arg::new("custom-css")
            .long("custom-css")
            .value_name("CSS")
            .help("Inline CSS appended after every other layer"),
        Arg::new("title")
            .long("title")
            .value_name("TITLE")
            .help("Document title (default: first heading)"),
    ]
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Info
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}
