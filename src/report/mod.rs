pub mod builder;
pub mod pairer;
pub mod storage;
pub mod types;

pub use builder::{assemble_report, build_report};
pub use pairer::{normalize_class_name, pair_corpora};
pub use storage::ReportStorage;
pub use types::{
    ConversionIssue, ConversionMapping, ConversionStatus, MappingReport, MissingFile,
    ReportSummary, CONVERSION_TARGET,
};
