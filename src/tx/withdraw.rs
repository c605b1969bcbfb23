//! Withdrawal from a single account

use crate::types::{AccountState, AccountUpdate, Transaction, TransactionError};

/// Debits `amount` from the `from` account
///
/// Rejected if the balance observed at evaluation time is below `amount`.
/// The balance check reads (and therefore lazily creates) the account even
/// when the withdrawal fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Withdraw {
    pub from: String,
    pub amount: u64,
}

impl Withdraw {
    pub fn new(from: impl Into<String>, amount: u64) -> Self {
        Withdraw {
            from: from.into(),
            amount,
        }
    }
}

impl Transaction for Withdraw {
    fn updates(&self, state: &dyn AccountState) -> Result<Vec<AccountUpdate>, TransactionError> {
        let from = state.get_account(&self.from);
        if from.balance < self.amount {
            return Err(TransactionError::insufficient_balance(
                &self.from,
                from.balance,
                self.amount,
            ));
        }
        Ok(vec![AccountUpdate::new(
            self.from.clone(),
            -(self.amount as i64),
        )])
    }
}
