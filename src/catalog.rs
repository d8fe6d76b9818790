//! The per-run aggregate: file records, extension tallies, and warnings.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::ScanWarning;

/// One observed file, immutable once recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub path: PathBuf,
    /// Byte count at the time of observation.
    pub size_bytes: u64,
    /// Lowercased suffix after the last `.`; empty when there is none.
    pub extension: String,
}

/// Aggregate count and byte total for a single extension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtensionTally {
    pub file_count: u64,
    pub total_bytes: u64,
}

/// Ordering of the per-file listing in the report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortMode {
    /// Largest files first, ties broken by path ascending.
    #[default]
    BySize,
    /// Paths ascending, byte-lexical ("organize" mode).
    ByName,
}

/// Accumulates one run's records, tallies, and warnings.
///
/// Created fresh per run and threaded through the pipeline as a plain
/// value; there is no shared state between runs.
#[derive(Debug, Default)]
pub struct Catalog {
    files: Vec<FileRecord>,
    tallies: HashMap<String, ExtensionTally>,
    warnings: Vec<ScanWarning>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one observed file and update its extension's tally.
    pub fn record_file(&mut self, path: PathBuf, size_bytes: u64, extension: String) {
        let tally = self.tallies.entry(extension.clone()).or_default();
        tally.file_count += 1;
        tally.total_bytes += size_bytes;
        self.files.push(FileRecord {
            path,
            size_bytes,
            extension,
        });
    }

    /// Record a non-fatal per-file problem.
    pub fn push_warning(&mut self, warning: ScanWarning) {
        self.warnings.push(warning);
    }

    /// Sort the master list for the report.
    pub fn sort(&mut self, mode: SortMode) {
        match mode {
            SortMode::BySize => self.files.sort_by(|a, b| {
                b.size_bytes
                    .cmp(&a.size_bytes)
                    .then_with(|| path_order(&a.path, &b.path))
            }),
            SortMode::ByName => self.files.sort_by(|a, b| path_order(&a.path, &b.path)),
        }
    }

    pub fn files(&self) -> &[FileRecord] {
        &self.files
    }

    pub fn warnings(&self) -> &[ScanWarning] {
        &self.warnings
    }

    /// Tally rows ordered for the summary table: descending total size,
    /// ties broken by extension so the output is deterministic.
    pub fn tallies_by_size(&self) -> Vec<(&str, ExtensionTally)> {
        let mut rows: Vec<(&str, ExtensionTally)> = self
            .tallies
            .iter()
            .map(|(ext, tally)| (ext.as_str(), *tally))
            .collect();
        rows.sort_by(|a, b| {
            b.1.total_bytes
                .cmp(&a.1.total_bytes)
                .then_with(|| a.0.cmp(b.0))
        });
        rows
    }
}

/// Byte order over the whole path string, the same order the printed
/// paths sort in. `Path`'s own `Ord` is component-wise and would put
/// `foo/baz.txt` ahead of `foo-bar.txt`.
fn path_order(a: &Path, b: &Path) -> Ordering {
    a.as_os_str().cmp(b.as_os_str())
}

/// The lowercased suffix after the last `.` of the file name, or an empty
/// string when the name has no extension.
pub fn file_extension(path: &Path) -> String {
    path.extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}
