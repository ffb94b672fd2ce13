use std::path::{Path, PathBuf};

use log::{debug, trace};
use walkdir::WalkDir;

use crate::error::AnalysisError;

/// File collector for finding test files under a corpus root
#[derive(Debug, Clone)]
pub struct FileCollector {
    /// File name suffix that marks a test file, e.g. `Tests.swift`
    suffix: String,
}

impl FileCollector {
    /// Create a collector matching the given file name suffix
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
        }
    }

    /// Collect all test files under the root, sorted lexically so scan
    /// order never depends on directory iteration order.
    pub fn collect_files(&self, root: impl AsRef<Path>) -> Result<Vec<PathBuf>, AnalysisError> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(AnalysisError::DirectoryNotFound {
                path: root.to_path_buf(),
            });
        }
        debug!("Collecting *{} files from {}", self.suffix, root.display());

        let mut files = Vec::new();

        for entry in WalkDir::new(root)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
        {
            if self.matches(entry.path()) {
                trace!("Found test file: {}", entry.path().display());
                files.push(entry.path().to_owned());
            }
        }

        files.sort();
        debug!("Collected {} test files", files.len());
        Ok(files)
    }

    /// Check whether a path names a test file for this corpus
    pub fn matches(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.ends_with(&self.suffix))
    }

    /// Get the suffix this collector matches on
    pub fn suffix(&self) -> &str {
        &self.suffix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_only_suffixed_files() {
        let collector = FileCollector::new("Tests.swift");

        assert!(collector.matches(Path::new("Sources/AccountTests.swift")));
        assert!(!collector.matches(Path::new("Sources/Account.swift")));
        assert!(!collector.matches(Path::new("Sources/AccountTests.cs")));
        assert!(!collector.matches(Path::new("Tests.swift/README.md")));
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let collector = FileCollector::new("Tests.cs");
        let result = collector.collect_files("definitely/not/a/real/dir");

        assert!(
            matches!(result, Err(AnalysisError::DirectoryNotFound { .. })),
            "expected DirectoryNotFound for a nonexistent root"
        );
    }
}
