use std::path::Path;

use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::corpus::scanner::parser::{file_stem_identifier, TestParser};
use crate::corpus::types::{Framework, TestClass};

// Match XCTest class declarations like "class AccountTests: XCTestCase {"
static CLASS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"class\s+(\w+Tests?)\s*:").unwrap());

// Match test methods, which XCTest discovers by the "test" name prefix
static TEST_METHOD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"func\s+(test\w+)\s*\(").unwrap());

// Match module imports like "import XCTest"
static IMPORT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"import\s+(\w+)").unwrap());

/// Extracts XCTest classes from Swift test files
#[derive(Debug, Default)]
pub struct SwiftTestParser;

impl SwiftTestParser {
    pub fn new() -> Self {
        Self
    }
}

impl TestParser for SwiftTestParser {
    fn framework(&self) -> Framework {
        Framework::Swift
    }

    fn file_suffix(&self) -> &'static str {
        "Tests.swift"
    }

    fn parse_content(&self, content: &str, file_path: &Path) -> TestClass {
        let name = CLASS_RE
            .captures(content)
            .map(|cap| cap[1].to_string())
            .unwrap_or_else(|| file_stem_identifier(file_path));

        let mut class = TestClass::new(name, file_path.to_path_buf(), Framework::Swift);

        for cap in TEST_METHOD_RE.captures_iter(content) {
            class.test_methods.push(cap[1].to_string());
        }
        for cap in IMPORT_RE.captures_iter(content) {
            class.imports.push(cap[1].to_string());
        }

        trace!(
            "Extracted Swift class {} with {} test methods from {}",
            class.name,
            class.test_methods.len(),
            file_path.display()
        );
        class
    }
}
