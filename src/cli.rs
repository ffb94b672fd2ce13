use std::path::PathBuf;

use clap::Parser;

use crate::analyzer::{AnalyzerConfig, DEFAULT_REPORT_NAME};

/// Measure how completely a Swift test suite has been ported to C#
#[derive(Debug, Parser)]
#[command(name = "test_mapper", version, about)]
pub struct Cli {
    /// Root of the C# project containing the tests directory
    #[arg(long, default_value = ".")]
    pub base_path: PathBuf,

    /// Swift test directory, skipping the default candidate search
    #[arg(long)]
    pub swift_path: Option<PathBuf>,

    /// Report file name, resolved against the base path
    #[arg(long, default_value = DEFAULT_REPORT_NAME)]
    pub output: PathBuf,
}

impl Cli {
    pub fn into_config(self) -> AnalyzerConfig {
        AnalyzerConfig {
            base_path: self.base_path,
            swift_path: self.swift_path,
            output: self.output,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["test_mapper"]);

        assert_eq!(cli.base_path, PathBuf::from("."));
        assert!(cli.swift_path.is_none());
        assert_eq!(cli.output, PathBuf::from(DEFAULT_REPORT_NAME));
    }

    #[test]
    fn test_cli_explicit_paths() {
        let cli = Cli::parse_from([
            "test_mapper",
            "--base-path",
            "csharp-port",
            "--swift-path",
            "/checkouts/swift/Tests",
            "--output",
            "coverage.json",
        ]);
        let config = cli.into_config();

        assert_eq!(config.base_path, PathBuf::from("csharp-port"));
        assert_eq!(
            config.swift_path,
            Some(PathBuf::from("/checkouts/swift/Tests"))
        );
        assert_eq!(config.output, PathBuf::from("coverage.json"));
    }
}
