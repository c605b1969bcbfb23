//! Process-wide account store
//!
//! This module provides the `AccountStore`, the shared mapping from account
//! name to the live account entity used by every worker and the commit step.
//!
//! # Design
//!
//! The store uses `DashMap` for concurrent lookup and insert-if-absent, but
//! the per-account mutex lives outside the map: each entry is an
//! `Arc<Acct>`, so callers get a stable handle they can hold and lock long
//! after the map access is over. The commit step relies on this to lock many
//! accounts at once in a canonical order without touching the map shards.

use crate::types::AccountValue;
use dashmap::DashMap;
use parking_lot::{Mutex, MutexGuard};
use std::sync::Arc;

/// Mutable state of one account: balance plus commit counter
///
/// `version` starts at 0 and increases by exactly 1 for every update entry
/// applied to the account by a successful commit. It never decreases.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AcctState {
    /// Current balance; never negative
    pub balance: u64,

    /// Monotonically non-decreasing commit counter
    pub version: u64,
}

/// One account entity: its state behind a per-account mutex
///
/// Handles are shared (`Arc`) and stable for the lifetime of a block, which
/// makes them suitable as lock targets for the canonical locking discipline.
#[derive(Debug, Default)]
pub struct Acct {
    state: Mutex<AcctState>,
}

impl Acct {
    fn with_balance(balance: u64) -> Self {
        Acct {
            state: Mutex::new(AcctState {
                balance,
                version: 0,
            }),
        }
    }

    /// Lock the account state
    pub fn lock(&self) -> MutexGuard<'_, AcctState> {
        self.state.lock()
    }
}

/// Shared mapping from account name to account entity
///
/// Accounts are created lazily on first reference and persist for the rest
/// of the block. `reset` replaces the whole mapping between blocks.
#[derive(Debug, Default)]
pub struct AccountStore {
    accounts: DashMap<String, Arc<Acct>>,
}

impl AccountStore {
    /// Create an empty store
    pub fn new() -> Self {
        AccountStore {
            accounts: DashMap::new(),
        }
    }

    /// Return the handle for `name`, creating a zero-balance, zero-version
    /// entry if absent
    ///
    /// # Arguments
    ///
    /// * `name` - The account name to look up or create
    ///
    /// # Returns
    ///
    /// A stable shared handle to the account. Concurrent callers racing to
    /// create the same name all resolve to the same entity.
    pub fn ensure(&self, name: &str) -> Arc<Acct> {
        if let Some(existing) = self.accounts.get(name) {
            return Arc::clone(existing.value());
        }
        Arc::clone(
            self.accounts
                .entry(name.to_string())
                .or_default()
                .value(),
        )
    }

    /// Replace the mapping with the given initial accounts
    ///
    /// Every declared account starts at its declared balance and version 0.
    /// Idempotent: resetting twice with the same input yields the same state.
    pub fn reset(&self, initial: &[AccountValue]) {
        self.accounts.clear();
        for account in initial {
            self.accounts.insert(
                account.name.clone(),
                Arc::new(Acct::with_balance(account.balance)),
            );
        }
    }

    /// Snapshot every account, ascending by name (lexicographic byte order)
    pub fn snapshot_all(&self) -> Vec<AccountValue> {
        let mut all: Vec<AccountValue> = self
            .accounts
            .iter()
            .map(|entry| AccountValue::new(entry.key().clone(), entry.value().lock().balance))
            .collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        all
    }
}
