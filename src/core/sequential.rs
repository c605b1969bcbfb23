//! Sequential reference execution
//!
//! `SequentialExecutor` drives the same store, context, and commit step as
//! the parallel executor, but with a plain in-order loop: evaluate one
//! transaction, commit it, move on. With a single reader-committer there is
//! nothing for the version check to conflict with, so every attempt
//! finalizes on its first try.
//!
//! This is the semantic baseline the parallel executor is measured against:
//! for any block and any worker count, both produce identical final state.

use crate::core::commit::{try_commit, CommitOutcome, TxResult};
use crate::core::context::TxContext;
use crate::core::store::AccountStore;
use crate::types::{AccountValue, Block};
use tracing::{info, warn};

/// In-order single-threaded block executor
pub struct SequentialExecutor {
    store: AccountStore,
}

impl SequentialExecutor {
    /// Create an executor with an empty store
    pub fn new() -> Self {
        SequentialExecutor {
            store: AccountStore::new(),
        }
    }

    /// Discard all state and seed the given initial accounts at version 0
    pub fn reset_state(&self, initial: &[AccountValue]) {
        self.store.reset(initial);
    }

    /// Execute a block in order and return the final state, ascending by name
    pub fn execute_block(&self, block: &Block) -> Vec<AccountValue> {
        info!(transactions = block.len(), "executing block sequentially");

        for (idx, transaction) in block.transactions.iter().enumerate() {
            let context = TxContext::new(&self.store);
            let (updates, err) = match transaction.updates(&context) {
                Ok(updates) => (updates, None),
                Err(err) => (Vec::new(), Some(err)),
            };
            let result = TxResult {
                idx,
                updates,
                reads: context.into_read_set(),
                err,
            };

            if try_commit(&self.store, &result) == CommitOutcome::Conflict {
                warn!(idx, "unexpected conflict during sequential execution");
            }
        }

        self.store.snapshot_all()
    }
}

impl Default for SequentialExecutor {
    fn default() -> Self {
        SequentialExecutor::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::executor::{ExecutorConfig, ParallelExecutor};
    use crate::tx::{BatchTransfer, FeeSplit, Interest, Transfer};
    use crate::types::Transaction;
    use rstest::rstest;

    fn account(name: &str, balance: u64) -> AccountValue {
        AccountValue::new(name, balance)
    }

    /// Deterministically built mixed block: chained transfers, batch
    /// transfers, interest accruals, and fee splits over five accounts.
    fn mixed_block() -> Vec<Box<dyn Transaction>> {
        let mut transactions: Vec<Box<dyn Transaction>> = Vec::new();
        for i in 0..15 {
            let from = format!("acct-{}", i % 5);
            let to = format!("acct-{}", (i + 1) % 5);
            transactions.push(Box::new(Transfer::new(from, to, (i as u64 + 1) * 10)));
        }
        for i in 0..5u64 {
            transactions.push(Box::new(BatchTransfer::new(
                "acct-0",
                vec!["acct-1", "acct-2", "acct-3"],
                20 + i * 5,
            )));
        }
        for i in 0..5u64 {
            transactions.push(Box::new(Interest::new(
                vec!["acct-0", "acct-2", "acct-4"],
                5 + i,
            )));
        }
        for i in 0..5u64 {
            transactions.push(Box::new(FeeSplit::new(
                "acct-3",
                30 + i * 10,
                vec!["acct-0", "acct-1", "acct-2"],
            )));
        }
        transactions
    }

    fn mixed_initial() -> Vec<AccountValue> {
        (0..5)
            .map(|i| account(&format!("acct-{i}"), 1000))
            .collect()
    }

    #[test]
    fn test_sequential_matches_hand_computed_transfers() {
        let executor = SequentialExecutor::new();
        executor.reset_state(&[account("A", 20), account("B", 30), account("C", 40)]);

        let block = Block::new(vec![
            Box::new(Transfer::new("A", "B", 5)) as Box<dyn Transaction>,
            Box::new(Transfer::new("B", "C", 10)),
            Box::new(Transfer::new("B", "C", 30)),
        ]);

        assert_eq!(
            executor.execute_block(&block),
            vec![account("A", 15), account("B", 25), account("C", 50)]
        );
    }

    #[rstest]
    #[case::one_worker(1)]
    #[case::default_pool(5)]
    #[case::wide_pool(8)]
    fn test_parallel_agrees_with_sequential_on_mixed_block(#[case] workers: usize) {
        let sequential = SequentialExecutor::new();
        sequential.reset_state(&mixed_initial());
        let expected = sequential.execute_block(&Block::new(mixed_block()));

        let parallel = ParallelExecutor::new(ExecutorConfig::new(workers));
        parallel.reset_state(&mixed_initial());
        let got = parallel.execute_block(&Block::new(mixed_block()));

        assert_eq!(got, expected);
    }

    #[test]
    fn test_parallel_agrees_with_sequential_under_contention() {
        let build = || {
            let mut transactions: Vec<Box<dyn Transaction>> = Vec::new();
            for _ in 0..50 {
                transactions.push(Box::new(Transfer::new("hot", "cold", 1)));
                transactions.push(Box::new(Transfer::new("cold", "hot", 1)));
            }
            Block::new(transactions)
        };

        let sequential = SequentialExecutor::new();
        sequential.reset_state(&[account("hot", 100), account("cold", 0)]);
        let expected = sequential.execute_block(&build());

        let parallel = ParallelExecutor::default();
        parallel.reset_state(&[account("hot", 100), account("cold", 0)]);
        assert_eq!(parallel.execute_block(&build()), expected);
    }
}
