//! The scan pipeline: walk, filter, stat, record, optionally delete.

use std::fs;
use std::path::Path;

use crate::catalog::{Catalog, SortMode, file_extension};
use crate::error::{Error, ScanWarning};
use crate::filter::ExtensionFilter;
use crate::walker::FileWalker;

/// Configuration for one scan run.
#[derive(Debug, Clone, Default)]
pub struct ScanConfig {
    /// Only include files with exactly this extension (no leading dot).
    /// `None` or an empty string includes every file.
    pub extension: Option<String>,
    /// Delete each file from disk right after recording it.
    pub delete: bool,
    /// Ordering of the per-file listing.
    pub sort: SortMode,
}

/// Walk `root` and build the catalog of every matching regular file.
///
/// Files that cannot be statted (or deleted, when requested) are skipped
/// with a warning collected on the catalog; only a missing root aborts the
/// scan. The returned catalog is already sorted for the report.
pub fn scan(root: &Path, config: &ScanConfig) -> Result<Catalog, Error> {
    let filter = ExtensionFilter::new(config.extension.as_deref());
    let mut catalog = Catalog::new();

    for path in FileWalker::new(root)? {
        let extension = file_extension(&path);
        if !filter.matches(&extension) {
            continue;
        }

        // Stat can still fail even though the walk just listed the file,
        // e.g. it was removed in between.
        let size_bytes = match path.metadata() {
            Ok(meta) => meta.len(),
            Err(source) => {
                catalog.push_warning(ScanWarning::FileUnreadable { path, source });
                continue;
            }
        };

        catalog.record_file(path.clone(), size_bytes, extension);

        if config.delete {
            if let Err(source) = fs::remove_file(&path) {
                catalog.push_warning(ScanWarning::DeletionFailed { path, source });
            }
        }
    }

    catalog.sort(config.sort);
    Ok(catalog)
}
