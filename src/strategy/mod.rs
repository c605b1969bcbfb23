//! Execution strategy module
//!
//! This module defines the Strategy pattern for complete block processing
//! pipelines, encompassing input parsing, state reset, block execution, and
//! final-state output. The sequential and parallel executors are selected at
//! runtime behind one trait.

use crate::cli::StrategyType;
use crate::core::ExecutorConfig;
use crate::types::ExecutorError;
use std::io::Write;
use std::path::Path;

pub mod parallel;
pub mod sequential;

pub use parallel::ParallelStrategy;
pub use sequential::SequentialStrategy;

/// Complete block processing pipeline
///
/// A strategy reads a block file, seeds the declared initial accounts,
/// executes the block, and writes the final account states to the output as
/// JSON. Per-transaction failures never surface here; only fatal input and
/// output problems return an error.
pub trait ExecutionStrategy: Send + Sync {
    /// Process the block file at `input_path` and write the final state
    ///
    /// # Errors
    ///
    /// Returns an error if the input file is missing or malformed, or if
    /// the output cannot be written. Per-transaction rejections and
    /// optimistic conflicts are absorbed during execution.
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), ExecutorError>;
}

/// Create an execution strategy for the given strategy type
///
/// The config applies to the parallel strategy only (pool sizing) and is
/// ignored for sequential execution.
pub fn create_strategy(
    strategy_type: StrategyType,
    config: Option<ExecutorConfig>,
) -> Box<dyn ExecutionStrategy> {
    match strategy_type {
        StrategyType::Sequential => Box::new(SequentialStrategy),
        StrategyType::Parallel => {
            let config = config.unwrap_or_default();
            Box::new(ParallelStrategy::new(config))
        }
    }
}
