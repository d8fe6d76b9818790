//! Sift - List every file in a directory tree by size and tally totals per extension

pub mod catalog;
pub mod error;
pub mod filter;
pub mod format;
pub mod report;
pub mod scan;
pub mod walker;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use catalog::{Catalog, ExtensionTally, FileRecord, SortMode, file_extension};
pub use error::{Error, ScanWarning};
pub use filter::ExtensionFilter;
pub use format::{center, format_size};
pub use report::{output_file_name, print_summary, render_report, write_report};
pub use scan::{ScanConfig, scan};
pub use walker::FileWalker;
