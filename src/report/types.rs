use std::collections::HashSet;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::corpus::types::TestClass;

/// Minimum overall conversion rate for a passing run, in percent
pub const CONVERSION_TARGET: f64 = 90.0;

/// How one Swift test class maps onto its C# counterpart.
///
/// Either side may be absent: a Swift class nobody converted yet, or a
/// C# class with no Swift origin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionMapping {
    /// Swift source file, if the mapping has a Swift side
    pub swift_file: Option<PathBuf>,

    /// C# source file, if the mapping has a C# side
    pub csharp_file: Option<PathBuf>,

    /// Swift test methods in file order, duplicates preserved
    pub swift_tests: Vec<String>,

    /// C# test methods in file order, duplicates preserved
    pub csharp_tests: Vec<String>,

    /// Swift methods with no C# counterpart, deduplicated in first
    /// occurrence order
    pub missing_tests: Vec<String>,

    /// C# methods with no Swift counterpart, deduplicated in first
    /// occurrence order
    pub extra_tests: Vec<String>,

    /// Percentage of unique Swift methods present on the C# side
    pub conversion_rate: f64,
}

impl ConversionMapping {
    /// Build the mapping for a matched, missing or extra class pair.
    pub fn new(swift: Option<&TestClass>, csharp: Option<&TestClass>) -> Self {
        let swift_tests: Vec<String> = swift.map(|c| c.test_methods.clone()).unwrap_or_default();
        let csharp_tests: Vec<String> = csharp.map(|c| c.test_methods.clone()).unwrap_or_default();

        let swift_set: HashSet<&str> = swift_tests.iter().map(String::as_str).collect();
        let csharp_set: HashSet<&str> = csharp_tests.iter().map(String::as_str).collect();

        let missing_tests = unique_difference(&swift_tests, &csharp_set);
        let extra_tests = unique_difference(&csharp_tests, &swift_set);

        let conversion_rate = if !swift_set.is_empty() {
            let matched = swift_set.iter().filter(|m| csharp_set.contains(*m)).count();
            (matched as f64 / swift_set.len() as f64) * 100.0
        } else if !csharp_set.is_empty() {
            // A class that exists only in C# has nothing left to convert
            100.0
        } else {
            0.0
        };

        Self {
            swift_file: swift.map(|c| c.file_path.clone()),
            csharp_file: csharp.map(|c| c.file_path.clone()),
            swift_tests,
            csharp_tests,
            missing_tests,
            extra_tests,
            conversion_rate,
        }
    }

    /// Classify this mapping for the summary counters
    pub fn status(&self) -> ConversionStatus {
        if self.swift_file.is_none() {
            ConversionStatus::ExtraCSharp
        } else if self.csharp_file.is_none() {
            ConversionStatus::MissingConversion
        } else if self.conversion_rate == 100.0 {
            ConversionStatus::FullyConverted
        } else {
            ConversionStatus::PartiallyConverted
        }
    }

    /// Count unique Swift methods that exist on the C# side
    pub fn matched_count(&self) -> usize {
        let swift: HashSet<&str> = self.swift_tests.iter().map(String::as_str).collect();
        let csharp: HashSet<&str> = self.csharp_tests.iter().map(String::as_str).collect();
        swift.intersection(&csharp).count()
    }
}

/// Preserve source order while dropping duplicates and excluded names
fn unique_difference(methods: &[String], exclude: &HashSet<&str>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut result = Vec::new();
    for method in methods {
        if !exclude.contains(method.as_str()) && seen.insert(method.as_str()) {
            result.push(method.clone());
        }
    }
    result
}

/// Aggregate state of one mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionStatus {
    /// Every unique Swift method has a C# counterpart
    FullyConverted,
    /// Some Swift methods are still missing on the C# side
    PartiallyConverted,
    /// The Swift class has no C# class at all
    MissingConversion,
    /// The C# class has no Swift origin
    ExtraCSharp,
}

/// Corpus-wide counters and the overall conversion rate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Swift test classes found
    pub swift_classes: usize,

    /// C# test classes found
    pub csharp_classes: usize,

    /// Mappings produced, one per test class on either side
    pub total_mappings: usize,

    pub fully_converted: usize,
    pub partially_converted: usize,
    pub missing_conversions: usize,
    pub extra_csharp: usize,

    /// Unique matched methods over all Swift methods, in percent
    pub overall_conversion_rate: f64,
}

impl ReportSummary {
    /// Whether the overall rate meets the conversion target
    pub fn meets_target(&self) -> bool {
        self.overall_conversion_rate >= CONVERSION_TARGET
    }
}

/// A Swift test file with no C# counterpart yet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissingFile {
    /// The unconverted Swift file
    pub swift_file: PathBuf,

    /// Where the converted file would live, same stem with a .cs extension
    pub expected_csharp_file: PathBuf,

    /// How many test methods the conversion would need to port
    pub test_count: usize,
}

/// A mapping whose C# side is missing at least one Swift test
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionIssue {
    /// The incomplete C# file, or null when no C# class exists
    pub csharp_file: Option<PathBuf>,

    /// Swift methods still missing, deduplicated in first occurrence order
    pub missing_tests: Vec<String>,
}

/// Full analysis output, serialized as the JSON report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MappingReport {
    pub summary: ReportSummary,

    /// One mapping per test class on either side
    pub detailed_mappings: Vec<ConversionMapping>,

    /// Swift files that have not been converted at all
    pub missing_files: Vec<MissingFile>,

    /// Mappings with missing tests, in mapping order
    pub conversion_issues: Vec<ConversionIssue>,
}
