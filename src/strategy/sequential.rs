//! Sequential execution strategy
//!
//! Same pipeline as the parallel strategy, driven by the in-order reference
//! executor. Useful for debugging and as the baseline the parallel results
//! are compared against.

use crate::core::SequentialExecutor;
use crate::io::{read_block_file, write_accounts_json};
use crate::strategy::ExecutionStrategy;
use crate::types::ExecutorError;
use std::io::Write;
use std::path::Path;

/// Block pipeline backed by the in-order executor
#[derive(Debug, Clone, Default)]
pub struct SequentialStrategy;

impl ExecutionStrategy for SequentialStrategy {
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), ExecutorError> {
        let (accounts, block) = read_block_file(input_path)?.into_parts();

        let executor = SequentialExecutor::new();
        executor.reset_state(&accounts);
        let final_state = executor.execute_block(&block);

        write_accounts_json(&final_state, output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    #[test]
    fn test_sequential_strategy_processes_block() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "accounts": [{{ "name": "X", "balance": 10 }}],
                "transactions": [
                    {{ "type": "deposit", "to": "Y", "amount": 5 }},
                    {{ "type": "withdraw", "from": "X", "amount": 7 }}
                ]
            }}"#
        )
        .unwrap();
        file.flush().unwrap();

        let strategy = SequentialStrategy;
        let mut output = Vec::new();

        strategy.process(file.path(), &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("\"name\": \"X\""));
        assert!(text.contains("\"balance\": 3"));
        assert!(text.contains("\"name\": \"Y\""));
        assert!(text.contains("\"balance\": 5"));
    }
}
