use std::path::Path;

use crate::corpus::types::{Framework, TestClass};

/// A parser that extracts one test class from a source file's content.
///
/// Extraction is regex based and line oriented, so it never fails on odd
/// input. A file without a recognizable class declaration still yields a
/// class named after the file stem.
pub trait TestParser: Send + Sync {
    /// Framework this parser understands
    fn framework(&self) -> Framework;

    /// File name suffix for this framework's test files
    fn file_suffix(&self) -> &'static str;

    /// Extract the test class from file content
    fn parse_content(&self, content: &str, file_path: &Path) -> TestClass;
}

/// Fallback class identifier when no class declaration matches.
pub(crate) fn file_stem_identifier(path: &Path) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("unknown")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_stem_identifier_strips_extension() {
        assert_eq!(
            file_stem_identifier(Path::new("Tests/AccountTests.swift")),
            "AccountTests"
        );
        assert_eq!(
            file_stem_identifier(Path::new("WalletTests.cs")),
            "WalletTests"
        );
    }
}
