//! Block file format handling
//!
//! This module centralizes the JSON format concerns, providing:
//! - `BlockFile` / `TxRecord` structures for deserialization
//! - Conversion from declared records to live transaction objects
//! - Final-state serialization
//!
//! All functions are pure (no I/O) for easy testing.

use crate::tx::{BatchTransfer, Deposit, FeeSplit, Interest, Transfer, Withdraw};
use crate::types::{AccountValue, Block, ExecutorError, Transaction};
use serde::Deserialize;
use std::io::Write;

/// Top-level structure of a block file
///
/// ```json
/// {
///   "accounts": [{ "name": "A", "balance": 20 }],
///   "transactions": [{ "type": "transfer", "from": "A", "to": "B", "value": 5 }]
/// }
/// ```
///
/// `accounts` declares the initial state and may be omitted for an empty
/// ledger; `transactions` is the block in canonical order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BlockFile {
    /// Initial accounts, each seeded at version 0
    #[serde(default)]
    pub accounts: Vec<AccountValue>,

    /// Transactions in block order
    pub transactions: Vec<TxRecord>,
}

impl BlockFile {
    /// Split the file into its initial accounts and an executable block
    pub fn into_parts(self) -> (Vec<AccountValue>, Block) {
        let block = Block::new(
            self.transactions
                .into_iter()
                .map(TxRecord::into_transaction)
                .collect(),
        );
        (self.accounts, block)
    }
}

/// One transaction as declared in a block file
///
/// The `type` tag selects the payload; the remaining fields are the
/// payload's own.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TxRecord {
    Transfer {
        from: String,
        to: String,
        value: u64,
    },
    Deposit {
        to: String,
        amount: u64,
    },
    Withdraw {
        from: String,
        amount: u64,
    },
    BatchTransfer {
        from: String,
        tos: Vec<String>,
        amount: u64,
    },
    Interest {
        accounts: Vec<String>,
        rate_percent: u64,
    },
    FeeSplit {
        account: String,
        fee: u64,
        receivers: Vec<String>,
    },
}

impl TxRecord {
    /// Convert the declared record into a live transaction object
    pub fn into_transaction(self) -> Box<dyn Transaction> {
        match self {
            TxRecord::Transfer { from, to, value } => Box::new(Transfer::new(from, to, value)),
            TxRecord::Deposit { to, amount } => Box::new(Deposit::new(to, amount)),
            TxRecord::Withdraw { from, amount } => Box::new(Withdraw::new(from, amount)),
            TxRecord::BatchTransfer { from, tos, amount } => {
                Box::new(BatchTransfer::new(from, tos, amount))
            }
            TxRecord::Interest {
                accounts,
                rate_percent,
            } => Box::new(Interest::new(accounts, rate_percent)),
            TxRecord::FeeSplit {
                account,
                fee,
                receivers,
            } => Box::new(FeeSplit::new(account, fee, receivers)),
        }
    }
}

/// Write the final account states as pretty-printed JSON
///
/// Accounts are sorted ascending by name so the output is deterministic
/// regardless of where the slice came from. A trailing newline is appended.
pub fn write_accounts_json(
    accounts: &[AccountValue],
    output: &mut dyn Write,
) -> Result<(), ExecutorError> {
    let mut sorted = accounts.to_vec();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));

    serde_json::to_writer_pretty(&mut *output, &sorted)?;
    writeln!(output)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_block_file_with_all_payload_kinds() {
        let json = r#"{
            "accounts": [{ "name": "A", "balance": 100 }],
            "transactions": [
                { "type": "transfer", "from": "A", "to": "B", "value": 5 },
                { "type": "deposit", "to": "B", "amount": 3 },
                { "type": "withdraw", "from": "A", "amount": 2 },
                { "type": "batch_transfer", "from": "A", "tos": ["B", "C"], "amount": 1 },
                { "type": "interest", "accounts": ["A", "B"], "rate_percent": 5 },
                { "type": "fee_split", "account": "A", "fee": 9, "receivers": ["B", "C"] }
            ]
        }"#;

        let file: BlockFile = serde_json::from_str(json).unwrap();

        assert_eq!(file.accounts, vec![AccountValue::new("A", 100)]);
        assert_eq!(file.transactions.len(), 6);
        assert_eq!(
            file.transactions[0],
            TxRecord::Transfer {
                from: "A".to_string(),
                to: "B".to_string(),
                value: 5
            }
        );
        assert_eq!(
            file.transactions[3],
            TxRecord::BatchTransfer {
                from: "A".to_string(),
                tos: vec!["B".to_string(), "C".to_string()],
                amount: 1
            }
        );
    }

    #[test]
    fn test_accounts_field_defaults_to_empty() {
        let json = r#"{ "transactions": [] }"#;

        let file: BlockFile = serde_json::from_str(json).unwrap();

        assert!(file.accounts.is_empty());
        assert!(file.transactions.is_empty());
    }

    #[test]
    fn test_unknown_transaction_type_fails_to_parse() {
        let json = r#"{ "transactions": [{ "type": "mint", "to": "A", "amount": 1 }] }"#;

        assert!(serde_json::from_str::<BlockFile>(json).is_err());
    }

    #[test]
    fn test_into_parts_preserves_order() {
        let json = r#"{
            "transactions": [
                { "type": "deposit", "to": "A", "amount": 1 },
                { "type": "withdraw", "from": "A", "amount": 1 }
            ]
        }"#;

        let file: BlockFile = serde_json::from_str(json).unwrap();
        let (accounts, block) = file.into_parts();

        assert!(accounts.is_empty());
        assert_eq!(block.len(), 2);
    }

    #[test]
    fn test_write_accounts_json_sorted_and_pretty() {
        let accounts = vec![AccountValue::new("b", 2), AccountValue::new("a", 1)];
        let mut output = Vec::new();

        write_accounts_json(&accounts, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        let expected = "[\n  {\n    \"name\": \"a\",\n    \"balance\": 1\n  },\n  {\n    \"name\": \"b\",\n    \"balance\": 2\n  }\n]\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_write_accounts_json_empty_list() {
        let mut output = Vec::new();

        write_accounts_json(&[], &mut output).unwrap();

        assert_eq!(String::from_utf8(output).unwrap(), "[]\n");
    }
}
