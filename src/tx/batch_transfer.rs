//! One-to-many transfer

use crate::types::{AccountState, AccountUpdate, Transaction, TransactionError};

/// Moves `amount` from the `from` account to every account in `tos`
///
/// The whole batch is funded up front: if the source balance is below
/// `len(tos) * amount` the transaction is rejected and nothing moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchTransfer {
    pub from: String,
    pub tos: Vec<String>,
    pub amount: u64,
}

impl BatchTransfer {
    pub fn new<S: Into<String>>(from: impl Into<String>, tos: Vec<S>, amount: u64) -> Self {
        BatchTransfer {
            from: from.into(),
            tos: tos.into_iter().map(Into::into).collect(),
            amount,
        }
    }
}

impl Transaction for BatchTransfer {
    fn updates(&self, state: &dyn AccountState) -> Result<Vec<AccountUpdate>, TransactionError> {
        let from = state.get_account(&self.from);
        let total = (self.tos.len() as u64).saturating_mul(self.amount);
        if from.balance < total {
            return Err(TransactionError::insufficient_balance(
                &self.from,
                from.balance,
                total,
            ));
        }

        let mut updates = Vec::with_capacity(self.tos.len() + 1);
        updates.push(AccountUpdate::new(self.from.clone(), -(total as i64)));
        for to in &self.tos {
            updates.push(AccountUpdate::new(to.clone(), self.amount as i64));
        }
        Ok(updates)
    }
}
