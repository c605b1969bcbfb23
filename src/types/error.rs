//! Error types for the block executor
//!
//! Two distinct failure domains exist and never mix:
//!
//! - **Transaction errors**: application-level rejections returned by a
//!   transaction payload (insufficient balance, zero amount, empty receiver
//!   list). These are absorbed by the executor: the transaction is finalized
//!   as a no-op and the block proceeds.
//! - **Executor errors**: fatal pipeline failures (file not found, I/O,
//!   malformed input). These abort the run and surface to the CLI.

use thiserror::Error;

/// Application-level rejection returned by a transaction payload
///
/// A transaction that returns one of these contributes no updates to the
/// block; the account state is untouched and execution continues with the
/// next transaction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransactionError {
    /// The debited account does not hold enough balance
    #[error("insufficient balance on {account}: {balance} available, {requested} requested")]
    InsufficientBalance {
        /// Account that would be overdrawn
        account: String,
        /// Balance observed at evaluation time
        balance: u64,
        /// Amount the transaction asked for
        requested: u64,
    },

    /// A deposit of zero is rejected
    #[error("deposit amount for {account} must be positive")]
    ZeroAmount {
        /// Intended credit target
        account: String,
    },

    /// A fee split with no receivers has nowhere to send the fee
    #[error("no receivers for fee split from {account}")]
    NoReceivers {
        /// Account the fee would have been taken from
        account: String,
    },
}

impl TransactionError {
    /// Create an InsufficientBalance error
    pub fn insufficient_balance(account: &str, balance: u64, requested: u64) -> Self {
        TransactionError::InsufficientBalance {
            account: account.to_string(),
            balance,
            requested,
        }
    }

    /// Create a ZeroAmount error
    pub fn zero_amount(account: &str) -> Self {
        TransactionError::ZeroAmount {
            account: account.to_string(),
        }
    }

    /// Create a NoReceivers error
    pub fn no_receivers(account: &str) -> Self {
        TransactionError::NoReceivers {
            account: account.to_string(),
        }
    }
}

/// Fatal pipeline error: reading, parsing, or writing block data
#[derive(Debug, Error)]
pub enum ExecutorError {
    /// Input file not found at the specified path
    #[error("file not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error while reading input or writing output
    #[error("I/O error: {message}")]
    Io {
        /// Description of the underlying failure
        message: String,
    },

    /// The block file is not valid JSON or has an unexpected shape
    #[error("invalid block file: {message}")]
    Parse {
        /// Description of the parse failure
        message: String,
    },
}

impl From<std::io::Error> for ExecutorError {
    fn from(error: std::io::Error) -> Self {
        ExecutorError::Io {
            message: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for ExecutorError {
    fn from(error: serde_json::Error) -> Self {
        ExecutorError::Parse {
            message: error.to_string(),
        }
    }
}
