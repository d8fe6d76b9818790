//! Report rendering and output.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::catalog::Catalog;
use crate::error::Error;
use crate::format::{center, format_size};

/// Width of every cell in the summary table.
const CELL_WIDTH: usize = 17;
/// Field the summary banner is centered in.
const BANNER_WIDTH: usize = 53;

const BANNER: &str = "*********** SUMMARY ***********";

/// Label used in the summary for files without an extension. The original
/// tool assumed such names are content hashes (e.g. git objects) and the
/// label stuck, even though it covers every extensionless file.
const NO_EXTENSION_LABEL: &str = "hash";

fn extension_label(extension: &str) -> &str {
    if extension.is_empty() {
        NO_EXTENSION_LABEL
    } else {
        extension
    }
}

/// A size rendered into the fixed 9-character listing column.
fn size_field(bytes: u64) -> String {
    format!("{:>9}", format_size(bytes))
}

/// Render the full report document.
///
/// Layout: a header naming the scanned root, one `<size> - <path>` line per
/// file in the catalog's current order, a centered SUMMARY banner, and a
/// pipe-separated table of per-extension totals sorted by descending size.
/// The summary's size cells center the 9-character listing form of the
/// size, preserving the original report's exact byte layout.
pub fn render_report(root: &Path, catalog: &Catalog) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "LIST OF ALL FILES INSIDE FOLDERS AND ITS SUBFOLDERS IN \"{}\".\n\n",
        root.display()
    ));

    for record in catalog.files() {
        out.push_str(&format!(
            "{} - {}\n",
            size_field(record.size_bytes),
            record.path.display()
        ));
    }

    out.push_str(&format!("\n\n{}\n\n", center(BANNER, BANNER_WIDTH)));
    out.push_str(&format!(
        "{}|{}|{}\n",
        center("TOTAL SIZE", CELL_WIDTH),
        center("NUMBER OF FILES", CELL_WIDTH),
        center("FILE", CELL_WIDTH)
    ));

    for (extension, tally) in catalog.tallies_by_size() {
        out.push_str(&format!(
            "{}|{}|{}\n",
            center(&size_field(tally.total_bytes), CELL_WIDTH),
            center(&tally.file_count.to_string(), CELL_WIDTH),
            center(extension_label(extension), CELL_WIDTH)
        ));
    }

    out
}

/// Normalize the report filename: append `.txt` unless already present.
pub fn output_file_name(name: &str) -> String {
    if name.ends_with(".txt") {
        name.to_string()
    } else {
        format!("{name}.txt")
    }
}

/// Write the rendered report to `path` in a single pass.
pub fn write_report(path: &Path, contents: &str) -> Result<(), Error> {
    fs::write(path, contents).map_err(|source| Error::OutputWrite {
        path: path.to_path_buf(),
        source,
    })
}

/// Print the per-extension summary table to stdout with optional color.
pub fn print_summary(catalog: &Catalog, use_color: bool) -> io::Result<()> {
    let color_choice = if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(color_choice);

    let mut bold = ColorSpec::new();
    bold.set_bold(true);
    stdout.set_color(&bold)?;
    writeln!(stdout, "{}", center(BANNER, BANNER_WIDTH).trim_end())?;
    stdout.reset()?;

    writeln!(
        stdout,
        "{}|{}|{}",
        center("TOTAL SIZE", CELL_WIDTH),
        center("NUMBER OF FILES", CELL_WIDTH),
        center("FILE", CELL_WIDTH)
    )?;

    let mut label_color = ColorSpec::new();
    label_color.set_fg(Some(Color::Cyan));

    for (extension, tally) in catalog.tallies_by_size() {
        write!(
            stdout,
            "{}|{}|",
            center(&size_field(tally.total_bytes), CELL_WIDTH),
            center(&tally.file_count.to_string(), CELL_WIDTH)
        )?;
        stdout.set_color(&label_color)?;
        write!(stdout, "{}", center(extension_label(extension), CELL_WIDTH))?;
        stdout.reset()?;
        writeln!(stdout)?;
    }

    Ok(())
}
