//! Transaction capability and block types
//!
//! The executor is agnostic to what a transaction does; it only requires the
//! [`Transaction`] capability. New transaction kinds plug in from outside the
//! core by implementing the trait.

use crate::types::{AccountUpdate, AccountValue, TransactionError};

/// Read interface handed to a transaction while it evaluates
///
/// All state access goes through [`get_account`]; a name that was never
/// written reads as balance 0. Implementations track which accounts were read
/// so the commit step can detect stale speculation. Transactions must not
/// retain the reader past the [`Transaction::updates`] call.
///
/// [`get_account`]: AccountState::get_account
pub trait AccountState {
    /// Return a snapshot of the named account, creating it lazily if absent
    fn get_account(&self, name: &str) -> AccountValue;
}

/// A transaction: reads account state, emits balance deltas
///
/// Given a reader, a transaction returns either the list of balance changes
/// it wants applied or an application-level error. Evaluation must be pure
/// with respect to the reader: no side effects other than `get_account`
/// calls, so the executor is free to evaluate speculatively and retry.
pub trait Transaction: Send + Sync {
    /// Evaluate the transaction against the given account state
    fn updates(&self, state: &dyn AccountState) -> Result<Vec<AccountUpdate>, TransactionError>;
}

/// An ordered sequence of transactions submitted as one unit
///
/// Block order is the canonical serialization order: whatever the executor
/// does internally, the final state equals applying the transactions one by
/// one in this order. Failure of one transaction does not abort the block.
pub struct Block {
    /// Transactions in canonical commit order
    pub transactions: Vec<Box<dyn Transaction>>,
}

impl Block {
    /// Create a block from an ordered list of transactions
    pub fn new(transactions: Vec<Box<dyn Transaction>>) -> Self {
        Block { transactions }
    }

    /// Number of transactions in the block
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Whether the block contains no transactions
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

impl Default for Block {
    fn default() -> Self {
        Block::new(Vec::new())
    }
}
