//! Percentage interest accrual

use crate::types::{AccountState, AccountUpdate, Transaction, TransactionError};

/// Credits each listed account with `rate_percent` percent of its balance
///
/// The accrued amount is `floor(balance * rate / 100)` per account
/// (truncating integer division). Never fails; an account at balance 0
/// simply accrues 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interest {
    pub accounts: Vec<String>,
    pub rate_percent: u64,
}

impl Interest {
    pub fn new<S: Into<String>>(accounts: Vec<S>, rate_percent: u64) -> Self {
        Interest {
            accounts: accounts.into_iter().map(Into::into).collect(),
            rate_percent,
        }
    }
}

impl Transaction for Interest {
    fn updates(&self, state: &dyn AccountState) -> Result<Vec<AccountUpdate>, TransactionError> {
        let mut updates = Vec::with_capacity(self.accounts.len());
        for name in &self.accounts {
            let account = state.get_account(name);
            let accrued = (account.balance as u128 * self.rate_percent as u128 / 100) as i64;
            updates.push(AccountUpdate::new(name.clone(), accrued));
        }
        Ok(updates)
    }
}
