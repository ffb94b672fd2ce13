use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, info};

use crate::report::types::MappingReport;
use crate::utils::file_utils;

/// Report persistence as pretty-printed JSON
#[derive(Debug)]
pub struct ReportStorage {
    /// Path to the report file
    report_path: PathBuf,
}

impl ReportStorage {
    /// Create a new report storage with the given path
    pub fn new(report_path: impl AsRef<Path>) -> Self {
        Self {
            report_path: report_path.as_ref().to_path_buf(),
        }
    }

    /// Save the report to disk
    pub fn save(&self, report: &MappingReport) -> Result<()> {
        let path = &self.report_path;
        debug!("Saving report to {}", path.display());

        let content =
            serde_json::to_string_pretty(report).context("Failed to serialize report")?;
        file_utils::write_string_to_file(path, &content)?;

        info!(
            "Saved report with {} mappings to {}",
            report.detailed_mappings.len(),
            path.display()
        );
        Ok(())
    }

    /// Load a previously saved report from disk
    pub fn load(&self) -> Result<MappingReport> {
        let path = &self.report_path;
        debug!("Loading report from {}", path.display());

        let content = file_utils::read_file_to_string(path)?;
        let report: MappingReport = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse report file {}", path.display()))?;

        Ok(report)
    }

    /// Get the path to the report file
    pub fn path(&self) -> &Path {
        &self.report_path
    }
}
