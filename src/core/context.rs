//! Read-tracking evaluation context
//!
//! Each speculative evaluation of a transaction runs against a fresh
//! `TxContext`. The context records, for every account the transaction
//! reads, the version observed at the *first* read; the commit step later
//! re-validates those versions to detect stale speculation.

use crate::core::store::AccountStore;
use crate::types::{AccountState, AccountValue};
use parking_lot::Mutex;
use std::collections::HashMap;

/// Balance and version captured at an account's first read
#[derive(Debug, Clone, Copy)]
struct ReadStamp {
    balance: u64,
    version: u64,
}

/// Per-attempt `AccountState` implementation with read tracking
///
/// Repeat reads of the same account return the snapshot taken at the first
/// read, so a transaction never observes two different values for one
/// account within a single attempt. If the underlying account moved in the
/// meantime, the version check at commit time rejects the attempt instead.
pub struct TxContext<'a> {
    store: &'a AccountStore,
    reads: Mutex<HashMap<String, ReadStamp>>,
}

impl<'a> TxContext<'a> {
    /// Create a fresh context with an empty read-set
    pub fn new(store: &'a AccountStore) -> Self {
        TxContext {
            store,
            reads: Mutex::new(HashMap::new()),
        }
    }

    /// Consume the context, yielding the finalized `name -> version` read-set
    pub fn into_read_set(self) -> HashMap<String, u64> {
        self.reads
            .into_inner()
            .into_iter()
            .map(|(name, stamp)| (name, stamp.version))
            .collect()
    }
}

impl AccountState for TxContext<'_> {
    fn get_account(&self, name: &str) -> AccountValue {
        let mut reads = self.reads.lock();
        if let Some(stamp) = reads.get(name) {
            return AccountValue::new(name, stamp.balance);
        }

        let acct = self.store.ensure(name);
        let state = *acct.lock();
        reads.insert(
            name.to_string(),
            ReadStamp {
                balance: state.balance,
                version: state.version,
            },
        );
        AccountValue::new(name, state.balance)
    }
}
