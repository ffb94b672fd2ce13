pub mod scanner;
pub mod types;

pub use scanner::{CSharpTestParser, CorpusScanner, FileCollector, SwiftTestParser, TestParser};
pub use types::{Corpus, CorpusScanStats, Framework, TestClass};
