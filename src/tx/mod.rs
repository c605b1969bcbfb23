//! Built-in transaction payloads
//!
//! Canonical implementations of the [`Transaction`] capability. The executor
//! is agnostic to this enumeration; external crates can plug in their own
//! kinds by implementing the trait.
//!
//! [`Transaction`]: crate::types::Transaction

pub mod batch_transfer;
pub mod deposit;
pub mod fee_split;
pub mod interest;
pub mod transfer;
pub mod withdraw;

pub use batch_transfer::BatchTransfer;
pub use deposit::Deposit;
pub use fee_split::FeeSplit;
pub use interest::Interest;
pub use transfer::Transfer;
pub use withdraw::Withdraw;

#[cfg(test)]
pub(crate) mod testing {
    use crate::types::{AccountState, AccountValue};
    use std::collections::HashMap;

    /// Map-backed state for payload tests; absent names read as balance 0.
    pub struct FixedState(HashMap<String, u64>);

    impl FixedState {
        pub fn new(entries: &[(&str, u64)]) -> Self {
            FixedState(
                entries
                    .iter()
                    .map(|(name, balance)| (name.to_string(), *balance))
                    .collect(),
            )
        }
    }

    impl AccountState for FixedState {
        fn get_account(&self, name: &str) -> AccountValue {
            AccountValue::new(name, self.0.get(name).copied().unwrap_or(0))
        }
    }
}
