//! Commit validation and application
//!
//! The commit step takes the result of one speculative evaluation and either
//! applies it, finalizes it as a no-op, or rejects it for retry. It is the
//! only place account balances are written.
//!
//! # Locking discipline
//!
//! All accounts touched by the attempt (read or written) are locked in
//! ascending lexicographic name order before anything is checked. Workers
//! only ever hold a single account lock at a time and never call out to user
//! code while holding it, so the global ordering here is sufficient to rule
//! out deadlock.

use crate::core::store::{AccountStore, AcctState};
use crate::types::{AccountUpdate, TransactionError};
use parking_lot::MutexGuard;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use tracing::{info, warn};

/// Result of one speculative evaluation of a transaction
///
/// Produced by a worker, consumed by the sequencer. `reads` maps each
/// account name to the version observed at its first read; `err` carries an
/// application-level rejection, in which case `updates` is empty.
#[derive(Debug)]
pub struct TxResult {
    /// Position of the transaction in the block
    pub idx: usize,

    /// Balance deltas the transaction wants applied
    pub updates: Vec<AccountUpdate>,

    /// Versions observed at first read, per account
    pub reads: HashMap<String, u64>,

    /// Application-level rejection, if the transaction refused to run
    pub err: Option<TransactionError>,
}

/// What the commit step decided about an attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// Updates applied, versions bumped
    Committed,

    /// Finalized as a no-op: application error, empty update list, or an
    /// update that would overdraw or overflow a balance
    TerminalFailure,

    /// A read version moved since the attempt evaluated; retry required
    Conflict,
}

/// Validate and apply one attempt against the store
///
/// Locks the touched set in canonical order, re-validates every read
/// version, then either applies the updates or reports why it did not.
/// Locks are released before returning in every case.
///
/// # Arguments
///
/// * `store` - The shared account store the attempt evaluated against
/// * `result` - The attempt's updates, read-set, and error, if any
///
/// # Returns
///
/// * `Committed` - the deltas were applied and versions bumped
/// * `TerminalFailure` - the transaction is finalized as a no-op
/// * `Conflict` - a read version moved; the caller must re-evaluate
pub fn try_commit(store: &AccountStore, result: &TxResult) -> CommitOutcome {
    // Touched set: everything read plus everything written, sorted.
    let mut touched: BTreeSet<&str> = result.reads.keys().map(String::as_str).collect();
    for update in &result.updates {
        touched.insert(update.name.as_str());
    }

    let names: Vec<&str> = touched.into_iter().collect();
    let handles: Vec<Arc<_>> = names.iter().map(|name| store.ensure(name)).collect();
    let mut locked: HashMap<&str, MutexGuard<'_, AcctState>> =
        HashMap::with_capacity(names.len());
    for (&name, handle) in names.iter().zip(&handles) {
        locked.insert(name, handle.lock());
    }

    // Reject the attempt if any account it read has moved since.
    for (name, version) in &result.reads {
        let stale = locked
            .get(name.as_str())
            .is_none_or(|state| state.version != *version);
        if stale {
            warn!(idx = result.idx, account = %name, "stale read, retrying");
            return CommitOutcome::Conflict;
        }
    }

    // The attempt is current; an application error or an empty update list
    // finalizes the transaction as a no-op.
    if let Some(err) = &result.err {
        info!(idx = result.idx, error = %err, "transaction skipped");
        return CommitOutcome::TerminalFailure;
    }
    if result.updates.is_empty() {
        info!(idx = result.idx, "transaction emitted no updates, skipped");
        return CommitOutcome::TerminalFailure;
    }

    // Every delta must leave its account in u64 range.
    for update in &result.updates {
        if let Some(state) = locked.get(update.name.as_str()) {
            let next = state.balance as i128 + update.change as i128;
            if next < 0 {
                info!(
                    idx = result.idx,
                    account = %update.name,
                    "update would overdraw account, skipped"
                );
                return CommitOutcome::TerminalFailure;
            }
            if next > u64::MAX as i128 {
                info!(
                    idx = result.idx,
                    account = %update.name,
                    "update would overflow balance, skipped"
                );
                return CommitOutcome::TerminalFailure;
            }
        }
    }

    for update in &result.updates {
        if let Some(state) = locked.get_mut(update.name.as_str()) {
            state.balance = state.balance.wrapping_add_signed(update.change);
            state.version += 1;
        }
    }

    info!(idx = result.idx, "transaction committed");
    CommitOutcome::Committed
}
