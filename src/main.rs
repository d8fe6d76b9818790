//! CLI entry point for sift

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use sift::{
    ScanConfig, SortMode, output_file_name, print_summary, render_report, scan, write_report,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            // Respect FORCE_COLOR environment variable
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            // Respect TERM=dumb
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            // Check if stdout is a TTY
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "sift")]
#[command(about = "List every file in a directory tree by size and tally totals per extension")]
#[command(version)]
struct Args {
    /// Directory to scan
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Only list files with this extension (no leading dot)
    #[arg(short = 'e', long = "ext", visible_alias = "file-extension", value_name = "EXT")]
    ext: Option<String>,

    /// Delete every listed file after recording it
    #[arg(short = 'd', long = "delete", visible_alias = "del")]
    delete: bool,

    /// Report filename, written inside the scanned directory
    /// (a .txt suffix is appended if missing)
    #[arg(
        short = 'o',
        long = "output",
        visible_alias = "out",
        value_name = "FILE",
        default_value = "output.txt"
    )]
    output: String,

    /// Sort the listing by path instead of descending size
    #[arg(long = "organize", visible_alias = "org")]
    organize: bool,

    /// Also print the per-extension summary table to stdout
    #[arg(short = 'r', long = "report")]
    report: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

fn main() {
    let args = Args::parse();

    let config = ScanConfig {
        extension: args.ext.clone(),
        delete: args.delete,
        sort: if args.organize {
            SortMode::ByName
        } else {
            SortMode::BySize
        },
    };

    let catalog = match scan(&args.path, &config) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("sift: {}", e);
            process::exit(1);
        }
    };

    for warning in catalog.warnings() {
        eprintln!("sift: warning: {}", warning);
    }

    let report = render_report(&args.path, &catalog);
    let out_path = args.path.join(output_file_name(&args.output));
    if let Err(e) = write_report(&out_path, &report) {
        eprintln!("sift: {}", e);
        process::exit(1);
    }

    if args.report {
        if let Err(e) = print_summary(&catalog, should_use_color(args.color)) {
            eprintln!("sift: error writing output: {}", e);
            process::exit(1);
        }
    }

    println!("Report written to '{}'", out_path.display());
}
