//! Core execution machinery
//!
//! This module contains the optimistic-concurrency pipeline:
//! - `store` - shared account store with per-account locking
//! - `context` - read-tracking evaluation context
//! - `commit` - in-order commit validation and application
//! - `executor` - parallel worker pool and commit sequencer
//! - `sequential` - in-order reference executor over the same parts

pub mod commit;
pub mod context;
pub mod executor;
pub mod sequential;
pub mod store;

pub use commit::{try_commit, CommitOutcome, TxResult};
pub use context::TxContext;
pub use executor::{ExecutorConfig, ParallelExecutor, DEFAULT_WORKERS};
pub use sequential::SequentialExecutor;
pub use store::AccountStore;
