//! Block Executor Library
//! # Overview
//!
//! This library executes an ordered block of account-mutating transactions
//! in parallel while producing the exact same post-state as a strictly
//! sequential execution in block order.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (AccountValue, the Transaction capability, etc.)
//! - [`cli`] - CLI argument parsing
//! - [`core`] - Execution machinery:
//!   - [`core::store`] - Shared account store with per-account locking
//!   - [`core::context`] - Read-tracking evaluation context
//!   - [`core::commit`] - In-order commit validation and application
//!   - [`core::executor`] - Parallel worker pool and commit sequencer
//!   - [`core::sequential`] - In-order reference executor
//! - [`tx`] - Built-in transaction payloads
//! - [`io`] - Block file parsing and JSON output
//! - [`strategy`] - Runtime-selectable processing pipelines
//!
//! # Execution model
//!
//! Workers evaluate transactions speculatively against the live store,
//! recording the version of every account at its first read. A single
//! sequencer consumes the results strictly in block order: each candidate
//! commit locks its touched accounts in canonical name order, re-validates
//! the recorded read versions, and either applies the balance deltas or
//! reports a conflict, in which case the transaction is re-evaluated. A
//! transaction that returns an error or an empty update list is finalized
//! as a no-op; the block always runs to completion.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod strategy;
pub mod tx;
pub mod types;

pub use self::core::{
    AccountStore, CommitOutcome, ExecutorConfig, ParallelExecutor, SequentialExecutor,
    DEFAULT_WORKERS,
};
pub use io::{read_block_file, write_accounts_json, BlockFile, TxRecord};
pub use types::{
    AccountState, AccountUpdate, AccountValue, Block, ExecutorError, Transaction,
    TransactionError,
};
