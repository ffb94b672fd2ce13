use std::path::Path;

use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::corpus::scanner::parser::{file_stem_identifier, TestParser};
use crate::corpus::types::{Framework, TestClass};

// Match xUnit class declarations like "public class AccountTests"
static CLASS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"public\s+class\s+(\w+Tests?)").unwrap());

// Match [Fact] methods, sync or async
static FACT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[Fact\]\s*public\s+(?:async\s+Task|void)\s+(\w+)\s*\(").unwrap());

// Match [Theory] methods; (?s) lets the pattern cross the InlineData lines
// sitting between the attribute and the declaration
static THEORY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\[Theory\].*?public\s+(?:async\s+Task|void)\s+(\w+)\s*\(").unwrap());

// Match using directives, including dotted and aliased forms
static USING_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"using\s+([^;]+);").unwrap());

/// Extracts xUnit classes from C# test files
#[derive(Debug, Default)]
pub struct CSharpTestParser;

impl CSharpTestParser {
    pub fn new() -> Self {
        Self
    }
}

impl TestParser for CSharpTestParser {
    fn framework(&self) -> Framework {
        Framework::CSharp
    }

    fn file_suffix(&self) -> &'static str {
        "Tests.cs"
    }

    fn parse_content(&self, content: &str, file_path: &Path) -> TestClass {
        let name = CLASS_RE
            .captures(content)
            .map(|cap| cap[1].to_string())
            .unwrap_or_else(|| file_stem_identifier(file_path));

        let mut class = TestClass::new(name, file_path.to_path_buf(), Framework::CSharp);

        // Facts first, then theories, each group in file order
        for cap in FACT_RE.captures_iter(content) {
            class.test_methods.push(cap[1].to_string());
        }
        for cap in THEORY_RE.captures_iter(content) {
            class.test_methods.push(cap[1].to_string());
        }
        for cap in USING_RE.captures_iter(content) {
            class.imports.push(cap[1].trim().to_string());
        }

        trace!(
            "Extracted C# class {} with {} test methods from {}",
            class.name,
            class.test_methods.len(),
            file_path.display()
        );
        class
    }
}
