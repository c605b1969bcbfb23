//! Fee deduction split across receivers

use crate::types::{AccountState, AccountUpdate, Transaction, TransactionError};

/// Debits `fee` from `account` and credits `floor(fee / len(receivers))` to
/// each receiver
///
/// The division remainder is discarded: a fee of 10 split three ways burns
/// 1 unit. Rejected when the account cannot cover the fee or the receiver
/// list is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeeSplit {
    pub account: String,
    pub fee: u64,
    pub receivers: Vec<String>,
}

impl FeeSplit {
    pub fn new<S: Into<String>>(account: impl Into<String>, fee: u64, receivers: Vec<S>) -> Self {
        FeeSplit {
            account: account.into(),
            fee,
            receivers: receivers.into_iter().map(Into::into).collect(),
        }
    }
}

impl Transaction for FeeSplit {
    fn updates(&self, state: &dyn AccountState) -> Result<Vec<AccountUpdate>, TransactionError> {
        let account = state.get_account(&self.account);
        if account.balance < self.fee {
            return Err(TransactionError::insufficient_balance(
                &self.account,
                account.balance,
                self.fee,
            ));
        }
        if self.receivers.is_empty() {
            return Err(TransactionError::no_receivers(&self.account));
        }

        let share = self.fee / self.receivers.len() as u64;
        let mut updates = Vec::with_capacity(self.receivers.len() + 1);
        updates.push(AccountUpdate::new(self.account.clone(), -(self.fee as i64)));
        for receiver in &self.receivers {
            updates.push(AccountUpdate::new(receiver.clone(), share as i64));
        }
        Ok(updates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tx::testing::FixedState;

    #[test]
    fn test_fee_split_shares_truncated_fee() {
        let state = FixedState::new(&[("pool", 100)]);

        let updates = FeeSplit::new("pool", 10, vec!["a", "b", "c"])
            .updates(&state)
            .unwrap();

        assert_eq!(
            updates,
            vec![
                AccountUpdate::new("pool", -10),
                AccountUpdate::new("a", 3),
                AccountUpdate::new("b", 3),
                AccountUpdate::new("c", 3),
            ]
        );
        // The remainder (1 unit here) is burned.
        assert_eq!(updates.iter().map(|u| u.change).sum::<i64>(), -1);
    }

    #[test]
    fn test_fee_split_rejects_uncovered_fee() {
        let state = FixedState::new(&[("pool", 5)]);

        let err = FeeSplit::new("pool", 10, vec!["a"]).updates(&state).unwrap_err();

        assert_eq!(err, TransactionError::insufficient_balance("pool", 5, 10));
    }

    #[test]
    fn test_fee_split_rejects_empty_receiver_list() {
        let state = FixedState::new(&[("pool", 100)]);

        let err = FeeSplit::new("pool", 10, Vec::<String>::new())
            .updates(&state)
            .unwrap_err();

        assert_eq!(err, TransactionError::no_receivers("pool"));
    }
}
