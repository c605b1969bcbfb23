//! Parallel execution strategy
//!
//! Pipeline: read block file -> seed initial accounts -> speculative
//! parallel execution with in-order commit -> JSON output.

use crate::core::{ExecutorConfig, ParallelExecutor};
use crate::io::{read_block_file, write_accounts_json};
use crate::strategy::ExecutionStrategy;
use crate::types::ExecutorError;
use std::io::Write;
use std::path::Path;

/// Block pipeline backed by the optimistic-concurrency executor
#[derive(Debug, Clone)]
pub struct ParallelStrategy {
    config: ExecutorConfig,
}

impl ParallelStrategy {
    /// Create a parallel strategy with the given pool configuration
    pub fn new(config: ExecutorConfig) -> Self {
        ParallelStrategy { config }
    }
}

impl ExecutionStrategy for ParallelStrategy {
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), ExecutorError> {
        let (accounts, block) = read_block_file(input_path)?.into_parts();

        let executor = ParallelExecutor::new(self.config.clone());
        executor.reset_state(&accounts);
        let final_state = executor.execute_block(&block);

        write_accounts_json(&final_state, output)
    }
}
