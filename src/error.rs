//! Error types for the scan and report pipeline.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors. Any of these aborts the whole run with a non-zero exit.
#[derive(Debug, Error)]
pub enum Error {
    /// The scan root does not exist or is not a directory.
    #[error("'{}' is not a directory", .0.display())]
    DirectoryNotFound(PathBuf),

    /// The report destination could not be created or written.
    #[error("cannot write report to '{}': {}", .path.display(), .source)]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Per-file conditions that are reported but never abort the run.
///
/// Warnings accumulate on the [`Catalog`](crate::Catalog) as the scan
/// progresses; the CLI prints them to stderr once the run finishes.
#[derive(Debug, Error)]
pub enum ScanWarning {
    /// The file's size could not be read, e.g. it was removed between the
    /// walk listing it and the stat call. The file is skipped.
    #[error("cannot read size of '{}': {}", .path.display(), .source)]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Deletion was requested but failed. The file stays in the report.
    #[error("cannot delete '{}': {}", .path.display(), .source)]
    DeletionFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_not_found_names_the_path() {
        let err = Error::DirectoryNotFound(PathBuf::from("/no/such/dir"));
        assert_eq!(err.to_string(), "'/no/such/dir' is not a directory");
    }

    #[test]
    fn warnings_name_the_file() {
        let warning = ScanWarning::FileUnreadable {
            path: PathBuf::from("gone.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        assert!(warning.to_string().starts_with("cannot read size of 'gone.txt'"));

        let warning = ScanWarning::DeletionFailed {
            path: PathBuf::from("stuck.tmp"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(warning.to_string().starts_with("cannot delete 'stuck.tmp'"));
    }
}
