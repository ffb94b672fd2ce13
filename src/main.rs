use std::process::ExitCode;

use clap::Parser;
use log::error;

use test_mapper::cli::Cli;
use test_mapper::progress::ConsoleObserver;
use test_mapper::TestMappingAnalyzer;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let analyzer = TestMappingAnalyzer::new(cli.into_config());

    match analyzer.run(&ConsoleObserver::new()) {
        Ok(outcome) => {
            if outcome.report.summary.meets_target() {
                println!("\nConversion analysis completed successfully");
                ExitCode::SUCCESS
            } else {
                println!("\nConversion analysis completed with issues to address");
                ExitCode::FAILURE
            }
        }
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
