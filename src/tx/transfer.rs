//! Value transfer between two accounts

use crate::types::{AccountState, AccountUpdate, Transaction, TransactionError};

/// Moves `value` from the `from` account to the `to` account
///
/// Rejected if the source balance observed at evaluation time is below
/// `value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transfer {
    pub from: String,
    pub to: String,
    pub value: u64,
}

impl Transfer {
    pub fn new(from: impl Into<String>, to: impl Into<String>, value: u64) -> Self {
        Transfer {
            from: from.into(),
            to: to.into(),
            value,
        }
    }
}

impl Transaction for Transfer {
    fn updates(&self, state: &dyn AccountState) -> Result<Vec<AccountUpdate>, TransactionError> {
        let from = state.get_account(&self.from);
        if from.balance < self.value {
            return Err(TransactionError::insufficient_balance(
                &self.from,
                from.balance,
                self.value,
            ));
        }
        Ok(vec![
            AccountUpdate::new(self.from.clone(), -(self.value as i64)),
            AccountUpdate::new(self.to.clone(), self.value as i64),
        ])
    }
}
