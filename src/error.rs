use std::path::PathBuf;

use thiserror::Error;

/// Failure taxonomy for an analysis run.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// A corpus root does not exist. The caller decides whether this is
    /// fatal or just a capability to skip.
    #[error("test directory not found: {}", .path.display())]
    DirectoryNotFound { path: PathBuf },

    /// One test file could not be read or decoded. Recovered by skipping
    /// the file; never aborts a scan.
    #[error("failed to extract test class from {}", .path.display())]
    Extraction {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    /// Neither corpus yielded a single test class, so there is nothing
    /// to compare or report on.
    #[error("no test classes found in either corpus")]
    EmptyCorpora,
}
