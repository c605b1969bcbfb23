use crate::core::ExecutorConfig;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Execute a block of ledger transactions
#[derive(Parser, Debug)]
#[command(name = "block-executor")]
#[command(about = "Execute a block of ledger transactions deterministically", long_about = None)]
pub struct CliArgs {
    /// Input JSON file describing initial accounts and the block
    #[arg(value_name = "INPUT", help = "Path to the input block JSON file")]
    pub input_file: PathBuf,

    /// Execution strategy for the block
    #[arg(
        long = "strategy",
        value_name = "STRATEGY",
        default_value = "parallel",
        help = "Execution strategy: 'sequential' for in-order or 'parallel' for speculative"
    )]
    pub strategy: StrategyType,

    /// Worker pool size (parallel mode only)
    #[arg(
        long = "workers",
        value_name = "COUNT",
        help = "Number of worker threads (default: 5)"
    )]
    pub workers: Option<usize>,
}

/// Available execution strategies
#[derive(Clone, Debug, ValueEnum)]
pub enum StrategyType {
    Sequential,
    Parallel,
}

impl CliArgs {
    /// Create an ExecutorConfig from CLI arguments
    ///
    /// Uses the provided worker count if given, falling back to the default
    /// pool size otherwise. A zero worker count is rejected with a warning
    /// by `ExecutorConfig::new`.
    pub fn to_executor_config(&self) -> ExecutorConfig {
        match self.workers {
            Some(workers) => ExecutorConfig::new(workers),
            None => ExecutorConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DEFAULT_WORKERS;
    use rstest::rstest;

    #[rstest]
    #[case::default_strategy(&["program", "block.json"], StrategyType::Parallel)]
    #[case::explicit_sequential(&["program", "--strategy", "sequential", "block.json"], StrategyType::Sequential)]
    #[case::explicit_parallel(&["program", "--strategy", "parallel", "block.json"], StrategyType::Parallel)]
    fn test_strategy_parsing(#[case] args: &[&str], #[case] expected: StrategyType) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        match (&parsed.strategy, &expected) {
            (StrategyType::Sequential, StrategyType::Sequential) => (),
            (StrategyType::Parallel, StrategyType::Parallel) => (),
            _ => panic!("Expected {:?}, got {:?}", expected, parsed.strategy),
        }
    }

    #[rstest]
    #[case::workers(&["program", "--workers", "8", "block.json"], Some(8))]
    #[case::no_workers(&["program", "block.json"], None)]
    fn test_workers_option(#[case] args: &[&str], #[case] workers: Option<usize>) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.workers, workers);
    }

    #[rstest]
    #[case::default_pool(&["program", "block.json"], DEFAULT_WORKERS)]
    #[case::custom_pool(&["program", "--workers", "3", "block.json"], 3)]
    #[case::zero_falls_back(&["program", "--workers", "0", "block.json"], DEFAULT_WORKERS)]
    fn test_executor_config_conversion(#[case] args: &[&str], #[case] expected_workers: usize) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        let config = parsed.to_executor_config();

        assert_eq!(config.workers, expected_workers);
    }

    #[rstest]
    #[case::missing_input(&["program"])]
    #[case::invalid_strategy(&["program", "--strategy", "invalid", "block.json"])]
    #[case::non_numeric_workers(&["program", "--workers", "many", "block.json"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }
}
