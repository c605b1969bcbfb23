//! Account-related types for the block executor
//!
//! This module defines the value types exchanged between transactions and
//! the executor: immutable account snapshots and balance deltas.

use serde::{Deserialize, Serialize};

/// Immutable `(name, balance)` snapshot of an account
///
/// Returned to transactions by [`AccountState::get_account`] and produced in
/// sorted order as the final state of a block execution. A snapshot never
/// reflects modifications made after it was taken.
///
/// [`AccountState::get_account`]: crate::types::AccountState::get_account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountValue {
    /// Account name, unique within the ledger
    pub name: String,

    /// Account balance; never negative
    pub balance: u64,
}

impl AccountValue {
    /// Create a snapshot for the given name and balance
    pub fn new(name: impl Into<String>, balance: u64) -> Self {
        AccountValue {
            name: name.into(),
            balance,
        }
    }
}

/// A single balance delta emitted by a transaction
///
/// Positive `change` credits the account, negative debits it. One update list
/// may name the same account several times; the deltas are applied additively
/// at commit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountUpdate {
    /// Target account name
    pub name: String,

    /// Signed balance change: positive credit, negative debit
    pub change: i64,
}

impl AccountUpdate {
    /// Create an update for the given account and signed delta
    pub fn new(name: impl Into<String>, change: i64) -> Self {
        AccountUpdate {
            name: name.into(),
            change,
        }
    }
}
