mod csharp_parser;
mod file_collector;
mod parser;
mod swift_parser;

use std::path::Path;

use log::{info, warn};

use crate::corpus::types::{Corpus, Framework, TestClass};
use crate::error::AnalysisError;
use crate::progress::AnalysisObserver;
use crate::utils::file_utils;

// Re-export from submodules
pub use csharp_parser::CSharpTestParser;
pub use file_collector::FileCollector;
pub use parser::TestParser;
pub use swift_parser::SwiftTestParser;

/// Corpus scanner responsible for finding and extracting test classes
pub struct CorpusScanner {
    /// File collector matching the parser's suffix
    collector: FileCollector,

    /// Extraction strategy for this corpus's framework
    parser: Box<dyn TestParser>,
}

impl CorpusScanner {
    /// Create a scanner around an extraction strategy
    pub fn new(parser: Box<dyn TestParser>) -> Self {
        Self {
            collector: FileCollector::new(parser.file_suffix()),
            parser,
        }
    }

    /// Create a scanner for the given framework
    pub fn for_framework(framework: Framework) -> Self {
        match framework {
            Framework::Swift => Self::new(Box::new(SwiftTestParser::new())),
            Framework::CSharp => Self::new(Box::new(CSharpTestParser::new())),
        }
    }

    pub fn framework(&self) -> Framework {
        self.parser.framework()
    }

    /// Scan one corpus root, extracting a test class per file.
    ///
    /// Unreadable files are skipped with a warning and counted in the
    /// stats. The only error is a missing root directory.
    pub fn scan(
        &self,
        root: impl AsRef<Path>,
        observer: &dyn AnalysisObserver,
    ) -> Result<Corpus, AnalysisError> {
        let root = root.as_ref();
        let framework = self.framework();
        observer.corpus_scan_started(framework, root);

        let files = self.collector.collect_files(root)?;
        observer.files_collected(framework, files.len());

        let mut corpus = Corpus::empty(framework);
        corpus.stats.total_files = files.len();

        for file in &files {
            match self.extract_file(file) {
                Ok(class) => {
                    corpus.stats.total_classes += 1;
                    if class.test_methods.is_empty() {
                        corpus.stats.empty_files += 1;
                    }
                    observer.class_extracted(&class);
                    corpus.classes.push(class);
                }
                Err(err) => {
                    warn!(
                        "Skipping {}: {:#}",
                        file.display(),
                        anyhow::Error::from(err)
                    );
                    corpus.stats.skipped_files += 1;
                    corpus.stats.skipped_file_paths.push(file.clone());
                    observer.file_skipped(file);
                }
            }
        }

        info!(
            "Scanned {} corpus at {}: {} classes from {} files ({} skipped)",
            framework,
            root.display(),
            corpus.len(),
            corpus.stats.total_files,
            corpus.stats.skipped_files
        );
        observer.corpus_scanned(&corpus);
        Ok(corpus)
    }

    fn extract_file(&self, file: &Path) -> Result<TestClass, AnalysisError> {
        let content =
            file_utils::read_file_to_string(file).map_err(|source| AnalysisError::Extraction {
                path: file.to_path_buf(),
                source,
            })?;
        Ok(self.parser.parse_content(&content, file))
    }
}
