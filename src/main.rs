//! Block Executor CLI
//!
//! Command-line interface for executing blocks of ledger transactions
//! described in JSON files.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- block.json
//! cargo run -- --strategy sequential block.json
//! cargo run -- --strategy parallel --workers 8 block.json
//! ```
//!
//! The program reads the initial accounts and the transaction block from the
//! input JSON file, executes the block using the selected strategy, and
//! writes the final account states to stdout as pretty-printed JSON, sorted
//! by account name. Log lines go to stderr and are controlled with
//! `RUST_LOG` (e.g. `RUST_LOG=block_executor=debug`).
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (missing arguments, file not found, malformed block file, etc.)

use block_executor::cli;
use block_executor::strategy;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    // Keep stdout clean for the JSON result; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Parse command-line arguments using clap
    let args = cli::parse_args();

    // Create the appropriate execution strategy based on CLI arguments
    let strategy = {
        let config = if matches!(args.strategy, cli::StrategyType::Parallel) {
            Some(args.to_executor_config())
        } else {
            None
        };
        strategy::create_strategy(args.strategy, config)
    };

    // Execute the block using the selected strategy; output goes to stdout
    let mut output = std::io::stdout();
    if let Err(e) = strategy.process(&args.input_file, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
