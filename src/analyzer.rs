use std::path::PathBuf;

use anyhow::Result;
use log::{error, warn};

use crate::corpus::scanner::CorpusScanner;
use crate::corpus::types::{Corpus, Framework};
use crate::error::AnalysisError;
use crate::progress::AnalysisObserver;
use crate::report::builder::build_report;
use crate::report::storage::ReportStorage;
use crate::report::types::MappingReport;

/// Default file name for the JSON report, relative to the base path
pub const DEFAULT_REPORT_NAME: &str = "test-mapping-analysis.json";

/// C# tests live directly under the base path
pub const CSHARP_TESTS_DIR: &str = "tests";

/// Where a Swift reference checkout usually sits relative to the base
/// path, probed in order when no explicit path is given
pub const SWIFT_SEARCH_CANDIDATES: &[&str] = &[
    "../swift-reference/Tests",
    "../swift/Tests",
    "reference/swift-tests",
];

/// Where to look for the two corpora and where to write the report.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Root of the C# project under analysis
    pub base_path: PathBuf,

    /// Explicit Swift test directory, overriding the candidate search
    pub swift_path: Option<PathBuf>,

    /// Report file, joined onto the base path unless absolute
    pub output: PathBuf,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from("."),
            swift_path: None,
            output: PathBuf::from(DEFAULT_REPORT_NAME),
        }
    }
}

/// Result of a completed analysis run
#[derive(Debug)]
pub struct RunOutcome {
    pub report: MappingReport,
    /// Where the JSON report was written
    pub report_path: PathBuf,
}

/// Drives the scan, pair, report, save pipeline.
#[derive(Debug)]
pub struct TestMappingAnalyzer {
    config: AnalyzerConfig,
}

impl TestMappingAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// Run the full analysis and persist the report.
    ///
    /// A missing corpus root degrades to an empty corpus; the run only
    /// fails when both corpora are empty or the report cannot be saved.
    pub fn run(&self, observer: &dyn AnalysisObserver) -> Result<RunOutcome> {
        observer.run_started(&self.config.base_path);

        let swift = self.scan_swift(observer);
        let csharp = self.scan_csharp(observer);

        if swift.is_empty() && csharp.is_empty() {
            return Err(AnalysisError::EmptyCorpora.into());
        }

        let report = build_report(&swift, &csharp);
        observer.report_ready(&report);

        let report_path = self.config.base_path.join(&self.config.output);
        ReportStorage::new(&report_path).save(&report)?;
        observer.report_saved(&report_path);

        Ok(RunOutcome {
            report,
            report_path,
        })
    }

    fn scan_swift(&self, observer: &dyn AnalysisObserver) -> Corpus {
        let candidates = self.swift_candidates();
        let Some(root) = candidates.iter().find(|candidate| candidate.is_dir()) else {
            warn!("No Swift test directory found, comparing against an empty Swift corpus");
            observer.corpus_root_missing(Framework::Swift, &candidates);
            return Corpus::empty(Framework::Swift);
        };

        let scanner = CorpusScanner::for_framework(Framework::Swift);
        match scanner.scan(root, observer) {
            Ok(corpus) => corpus,
            Err(err) => {
                warn!("Swift corpus scan failed: {:#}", anyhow::Error::from(err));
                Corpus::empty(Framework::Swift)
            }
        }
    }

    /// The explicit path wins outright; the defaults are joined onto the
    /// base path.
    fn swift_candidates(&self) -> Vec<PathBuf> {
        match &self.config.swift_path {
            Some(explicit) => vec![explicit.clone()],
            None => SWIFT_SEARCH_CANDIDATES
                .iter()
                .map(|candidate| self.config.base_path.join(candidate))
                .collect(),
        }
    }

    fn scan_csharp(&self, observer: &dyn AnalysisObserver) -> Corpus {
        let root = self.config.base_path.join(CSHARP_TESTS_DIR);
        let scanner = CorpusScanner::for_framework(Framework::CSharp);
        match scanner.scan(&root, observer) {
            Ok(corpus) => corpus,
            Err(err) => {
                error!("C# corpus scan failed: {:#}", anyhow::Error::from(err));
                observer.corpus_root_missing(Framework::CSharp, &[root]);
                Corpus::empty(Framework::CSharp)
            }
        }
    }
}
