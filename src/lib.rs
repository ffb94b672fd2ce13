pub mod analyzer;
pub mod cli;
pub mod corpus;
pub mod error;
pub mod progress;
pub mod report;
pub mod utils;

// Re-export main types and functions for easier access
pub use analyzer::{AnalyzerConfig, RunOutcome, TestMappingAnalyzer};
pub use corpus::scanner::CorpusScanner;
pub use corpus::types::{Corpus, Framework, TestClass};
pub use error::AnalysisError;
pub use progress::{AnalysisObserver, ConsoleObserver, SilentObserver};

pub use report::builder::build_report;
pub use report::storage::ReportStorage;
pub use report::types::{ConversionMapping, ConversionStatus, MappingReport, CONVERSION_TARGET};

// Re-export utility functions
pub use utils::file_utils;
