//! Deposit into a single account

use crate::types::{AccountState, AccountUpdate, Transaction, TransactionError};

/// Credits `amount` to the `to` account
///
/// A zero amount is rejected before any account is read, so a failing
/// deposit never creates its target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deposit {
    pub to: String,
    pub amount: u64,
}

impl Deposit {
    pub fn new(to: impl Into<String>, amount: u64) -> Self {
        Deposit {
            to: to.into(),
            amount,
        }
    }
}

impl Transaction for Deposit {
    fn updates(&self, _state: &dyn AccountState) -> Result<Vec<AccountUpdate>, TransactionError> {
        if self.amount == 0 {
            return Err(TransactionError::zero_amount(&self.to));
        }
        Ok(vec![AccountUpdate::new(
            self.to.clone(),
            self.amount as i64,
        )])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tx::testing::FixedState;

    #[test]
    fn test_deposit_credits_target() {
        let state = FixedState::new(&[]);

        let updates = Deposit::new("A", 5).updates(&state).unwrap();

        assert_eq!(updates, vec![AccountUpdate::new("A", 5)]);
    }

    #[test]
    fn test_zero_deposit_rejected() {
        let state = FixedState::new(&[]);

        let err = Deposit::new("A", 0).updates(&state).unwrap_err();

        assert_eq!(err, TransactionError::zero_amount("A"));
    }
}
