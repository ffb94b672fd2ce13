use log::debug;

use crate::corpus::types::Corpus;
use crate::report::pairer::pair_corpora;
use crate::report::types::{
    ConversionIssue, ConversionMapping, ConversionStatus, MappingReport, MissingFile,
    ReportSummary,
};

/// Pair two corpora and assemble the full report.
///
/// Pure over its inputs, so the same corpora always produce the same
/// report.
pub fn build_report(swift: &Corpus, csharp: &Corpus) -> MappingReport {
    let mappings = pair_corpora(swift, csharp);
    assemble_report(swift.len(), csharp.len(), mappings)
}

/// Roll mappings up into summary counters, missing files and issues.
pub fn assemble_report(
    swift_classes: usize,
    csharp_classes: usize,
    mappings: Vec<ConversionMapping>,
) -> MappingReport {
    let mut fully_converted = 0;
    let mut partially_converted = 0;
    let mut missing_conversions = 0;
    let mut extra_csharp = 0;

    let mut total_swift_tests = 0;
    let mut total_matched = 0;

    let mut missing_files = Vec::new();
    let mut conversion_issues = Vec::new();

    for mapping in &mappings {
        match mapping.status() {
            ConversionStatus::FullyConverted => fully_converted += 1,
            ConversionStatus::PartiallyConverted => partially_converted += 1,
            ConversionStatus::MissingConversion => missing_conversions += 1,
            ConversionStatus::ExtraCSharp => extra_csharp += 1,
        }

        // Overall rate weighs classes by their raw method count
        if !mapping.swift_tests.is_empty() {
            total_swift_tests += mapping.swift_tests.len();
            total_matched += mapping.matched_count();
        }

        if let (Some(swift_file), None) = (&mapping.swift_file, &mapping.csharp_file) {
            missing_files.push(MissingFile {
                swift_file: swift_file.clone(),
                expected_csharp_file: swift_file.with_extension("cs"),
                test_count: mapping.swift_tests.len(),
            });
        }

        if !mapping.missing_tests.is_empty() {
            conversion_issues.push(ConversionIssue {
                csharp_file: mapping.csharp_file.clone(),
                missing_tests: mapping.missing_tests.clone(),
            });
        }
    }

    let overall_conversion_rate = if total_swift_tests > 0 {
        (total_matched as f64 / total_swift_tests as f64) * 100.0
    } else {
        0.0
    };

    debug!(
        "Assembled report: {} mappings, {} missing files, {} issues, rate {:.1}%",
        mappings.len(),
        missing_files.len(),
        conversion_issues.len(),
        overall_conversion_rate
    );

    MappingReport {
        summary: ReportSummary {
            swift_classes,
            csharp_classes,
            total_mappings: mappings.len(),
            fully_converted,
            partially_converted,
            missing_conversions,
            extra_csharp,
            overall_conversion_rate,
        },
        detailed_mappings: mappings,
        missing_files,
        conversion_issues,
    }
}
