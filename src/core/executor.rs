//! Parallel block execution
//!
//! This module provides the `ParallelExecutor`, which evaluates the
//! transactions of a block speculatively on a pool of worker threads and
//! commits the results strictly in block order.
//!
//! # Pipeline
//!
//! ```text
//! ParallelExecutor
//!     ├── work queue   (indices; shared receiver, one sender + retries)
//!     ├── worker × N   (fresh TxContext per attempt, publishes TxResult)
//!     └── sequencer    (buffers out-of-order results, commits at cursor,
//!                       re-dispatches the cursor index on conflict)
//! ```
//!
//! Workers never commit and never hold more than one account lock at a time;
//! the sequencer is the sole committer. A conflict therefore only ever races
//! against speculative readers of later indices, which cannot change any
//! version, so a retried index converges once it re-reads committed state.

use crate::core::commit::{try_commit, CommitOutcome, TxResult};
use crate::core::context::TxContext;
use crate::core::store::AccountStore;
use crate::types::{AccountValue, Block};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use tracing::{error, info, warn};

/// Default worker pool size
pub const DEFAULT_WORKERS: usize = 5;

/// Configuration for parallel block execution
#[derive(Debug, Clone)]
pub struct ExecutorConfig {
    /// Number of worker threads evaluating transactions
    pub workers: usize,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        ExecutorConfig {
            workers: DEFAULT_WORKERS,
        }
    }
}

impl ExecutorConfig {
    /// Create a config with the given worker count
    ///
    /// A zero worker count is invalid; it falls back to the default with a
    /// logged warning.
    pub fn new(workers: usize) -> Self {
        let default = Self::default();

        let workers = if workers == 0 {
            warn!(
                "invalid workers ({}), using default ({})",
                workers, default.workers
            );
            default.workers
        } else {
            workers
        };

        ExecutorConfig { workers }
    }
}

/// Deterministic optimistic-concurrency block executor
///
/// Owns the account store for the duration of a block sequence. The final
/// state of `execute_block` is always identical to evaluating the block
/// strictly sequentially, regardless of the worker count.
pub struct ParallelExecutor {
    store: AccountStore,
    config: ExecutorConfig,
}

impl ParallelExecutor {
    /// Create an executor with an empty store
    pub fn new(config: ExecutorConfig) -> Self {
        ParallelExecutor {
            store: AccountStore::new(),
            config,
        }
    }

    /// Discard all state and seed the given initial accounts at version 0
    pub fn reset_state(&self, initial: &[AccountValue]) {
        self.store.reset(initial);
    }

    /// Execute a block and return the final state, ascending by name
    ///
    /// Per-transaction failures are absorbed: a transaction that errors or
    /// emits no updates is finalized as a no-op and the block proceeds.
    /// There is no error path; the returned state reflects exactly the
    /// transactions that committed.
    ///
    /// # Arguments
    ///
    /// * `block` - The ordered transactions to execute
    ///
    /// # Returns
    ///
    /// Every account seeded by `reset_state` or touched during the block,
    /// sorted ascending by name.
    pub fn execute_block(&self, block: &Block) -> Vec<AccountValue> {
        let total = block.len();
        let workers = self.config.workers.max(1);
        info!(transactions = total, workers, "executing block");

        if total == 0 {
            return self.store.snapshot_all();
        }

        let (work_tx, work_rx) = mpsc::channel::<usize>();
        let work_rx = Arc::new(Mutex::new(work_rx));
        let (result_tx, result_rx) = mpsc::channel::<TxResult>();

        thread::scope(|scope| {
            for _ in 0..workers {
                let work_rx = Arc::clone(&work_rx);
                let result_tx = result_tx.clone();
                let store = &self.store;
                scope.spawn(move || loop {
                    let received = work_rx.lock().recv();
                    let Ok(idx) = received else { break };

                    let context = TxContext::new(store);
                    let (updates, err) = match block.transactions[idx].updates(&context) {
                        Ok(updates) => (updates, None),
                        Err(err) => (Vec::new(), Some(err)),
                    };
                    let result = TxResult {
                        idx,
                        updates,
                        reads: context.into_read_set(),
                        err,
                    };
                    if result_tx.send(result).is_err() {
                        break;
                    }
                });
            }
            drop(result_tx);

            for idx in 0..total {
                let _ = work_tx.send(idx);
            }

            // Commit phase: strictly in block order. Results arriving early
            // are parked in `ready` until the cursor reaches them.
            let mut ready: HashMap<usize, TxResult> = HashMap::new();
            let mut cursor = 0;
            while cursor < total {
                let result = match ready.remove(&cursor) {
                    Some(result) => result,
                    None => match result_rx.recv() {
                        Ok(result) => {
                            ready.insert(result.idx, result);
                            continue;
                        }
                        Err(_) => {
                            error!("worker pool disconnected before block completed");
                            break;
                        }
                    },
                };

                match try_commit(&self.store, &result) {
                    CommitOutcome::Committed | CommitOutcome::TerminalFailure => cursor += 1,
                    CommitOutcome::Conflict => {
                        if work_tx.send(cursor).is_err() {
                            error!("work queue closed before block completed");
                            break;
                        }
                    }
                }
            }

            // Closing the queue releases the workers; buffered results for
            // indices past the cursor are discarded with the channel.
            drop(work_tx);
        });

        info!("block execution complete");
        self.store.snapshot_all()
    }
}

impl Default for ParallelExecutor {
    fn default() -> Self {
        ParallelExecutor::new(ExecutorConfig::default())
    }
}
