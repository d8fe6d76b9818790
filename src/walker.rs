//! Recursive discovery of regular files under a root directory.

use std::path::{Path, PathBuf};

use ignore::{Walk, WalkBuilder};

use crate::error::Error;

/// Iterator over every regular file beneath a root, depth-first.
///
/// The walk sees exactly what is on disk: hidden files are visited like any
/// others and no ignore files are honored. Directories, symlinks, special
/// files, and entries that error while being read are skipped silently.
pub struct FileWalker {
    inner: Walk,
}

impl std::fmt::Debug for FileWalker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // `ignore::Walk` has no Debug impl, so the field is elided.
        f.debug_struct("FileWalker").finish_non_exhaustive()
    }
}

impl FileWalker {
    /// Start a walk rooted at `root`.
    ///
    /// Fails with [`Error::DirectoryNotFound`] if `root` does not exist or
    /// is not a directory.
    pub fn new(root: &Path) -> Result<FileWalker, Error> {
        if !root.is_dir() {
            return Err(Error::DirectoryNotFound(root.to_path_buf()));
        }

        let inner = WalkBuilder::new(root)
            .hidden(false)
            .ignore(false)
            .git_ignore(false)
            .git_global(false)
            .git_exclude(false)
            .parents(false)
            .follow_links(false)
            .build();

        Ok(FileWalker { inner })
    }
}

impl Iterator for FileWalker {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        for entry in self.inner.by_ref().flatten() {
            if entry.file_type().is_some_and(|t| t.is_file()) {
                return Some(entry.into_path());
            }
        }
        None
    }
}
