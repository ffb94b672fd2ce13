use std::path::{Path, PathBuf};
use std::sync::Mutex;

use indicatif::{ProgressBar, ProgressStyle};

use crate::corpus::types::{Corpus, Framework, TestClass};
use crate::report::types::MappingReport;

/// How many issues and missing files the console summary lists
pub const TOP_ISSUES: usize = 5;

/// Minimum file count before a progress bar is worth drawing
pub const PROGRESS_BAR_THRESHOLD: usize = 10;

/// Hooks for observing an analysis run.
///
/// Every method has a no-op default, so observers implement only the
/// events they care about. The analyzer itself stays silent; all console
/// output goes through an observer.
pub trait AnalysisObserver {
    fn run_started(&self, _base_path: &Path) {}
    fn corpus_scan_started(&self, _framework: Framework, _root: &Path) {}
    fn corpus_root_missing(&self, _framework: Framework, _searched: &[PathBuf]) {}
    fn files_collected(&self, _framework: Framework, _count: usize) {}
    fn class_extracted(&self, _class: &TestClass) {}
    fn file_skipped(&self, _file: &Path) {}
    fn corpus_scanned(&self, _corpus: &Corpus) {}
    fn report_ready(&self, _report: &MappingReport) {}
    fn report_saved(&self, _path: &Path) {}
}

/// Observer that ignores every event, for library use and tests
#[derive(Debug, Default)]
pub struct SilentObserver;

impl AnalysisObserver for SilentObserver {}

/// Console observer with a progress bar for larger corpora
pub struct ConsoleObserver {
    bar: Mutex<Option<ProgressBar>>,
}

impl ConsoleObserver {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }
}

impl Default for ConsoleObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisObserver for ConsoleObserver {
    fn run_started(&self, base_path: &Path) {
        println!("Analyzing Swift to C# test conversion");
        println!("Base path: {}", base_path.display());
    }

    fn corpus_scan_started(&self, framework: Framework, root: &Path) {
        println!("\nScanning {} tests in {}", framework, root.display());
    }

    fn corpus_root_missing(&self, framework: Framework, searched: &[PathBuf]) {
        println!("No {} test directory found, looked in:", framework);
        for candidate in searched {
            println!("  {}", candidate.display());
        }
    }

    fn files_collected(&self, framework: Framework, count: usize) {
        println!("Found {} {} test files", count, framework);
        if count > PROGRESS_BAR_THRESHOLD {
            let pb = ProgressBar::new(count as u64);
            pb.set_style(ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({eta}) {msg}")
                .unwrap()
                .progress_chars("#>-"));
            if let Ok(mut bar) = self.bar.lock() {
                *bar = Some(pb);
            }
        }
    }

    fn class_extracted(&self, class: &TestClass) {
        if let Ok(bar) = self.bar.lock() {
            if let Some(pb) = bar.as_ref() {
                pb.set_message(class.name.clone());
                pb.inc(1);
                return;
            }
        }
        println!(
            "  found {} ({} test methods)",
            class.name,
            class.test_methods.len()
        );
    }

    fn file_skipped(&self, _file: &Path) {
        if let Ok(bar) = self.bar.lock() {
            if let Some(pb) = bar.as_ref() {
                pb.inc(1);
            }
        }
    }

    fn corpus_scanned(&self, corpus: &Corpus) {
        if let Ok(mut bar) = self.bar.lock() {
            if let Some(pb) = bar.take() {
                pb.finish_and_clear();
            }
        }
        println!("Found {} {} test classes", corpus.len(), corpus.framework);
    }

    fn report_ready(&self, report: &MappingReport) {
        print_summary(report);
    }

    fn report_saved(&self, path: &Path) {
        println!("\nDetailed analysis saved to: {}", path.display());
    }
}

/// Print the human-readable run summary
fn print_summary(report: &MappingReport) {
    let summary = &report.summary;

    println!("\n{}", "=".repeat(60));
    println!("CONVERSION ANALYSIS SUMMARY");
    println!("{}", "=".repeat(60));

    println!("\nTest files:");
    println!("  Swift test classes:  {}", summary.swift_classes);
    println!("  C# test classes:     {}", summary.csharp_classes);

    println!("\nConversion status:");
    println!("  Fully converted:     {}", summary.fully_converted);
    println!("  Partially converted: {}", summary.partially_converted);
    println!("  Missing conversions: {}", summary.missing_conversions);
    println!("  Extra C# classes:    {}", summary.extra_csharp);

    println!(
        "\nOverall conversion rate: {:.1}%",
        summary.overall_conversion_rate
    );

    if !report.conversion_issues.is_empty() {
        println!("\nTop conversion issues:");
        for issue in report.conversion_issues.iter().take(TOP_ISSUES) {
            let target = issue
                .csharp_file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "missing C# file".to_string());
            println!("  {}: {} missing tests", target, issue.missing_tests.len());
        }
    }

    if !report.missing_files.is_empty() {
        println!("\nMissing C# test files:");
        for missing in report.missing_files.iter().take(TOP_ISSUES) {
            println!(
                "  {} -> {} ({} tests)",
                missing.swift_file.display(),
                missing.expected_csharp_file.display(),
                missing.test_count
            );
        }
    }
}
