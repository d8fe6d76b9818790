//! Extension filtering for the scan.

/// Includes only files whose extension matches exactly.
///
/// The comparison is case-sensitive against the lowercased extension stored
/// on each record, with no leading dot: a filter of `"txt"` matches
/// `notes.txt` and `NOTES.TXT`, but `"TXT"` matches nothing. Files without
/// an extension never match a non-empty filter. `None` or an empty string
/// build a filter that includes everything.
#[derive(Debug, Clone)]
pub struct ExtensionFilter(Option<String>);

impl ExtensionFilter {
    pub fn new(ext: Option<&str>) -> Self {
        Self(ext.filter(|e| !e.is_empty()).map(str::to_owned))
    }

    /// Whether a file with `extension` passes the filter.
    pub fn matches(&self, extension: &str) -> bool {
        self.0.as_deref().is_none_or(|want| want == extension)
    }
}
