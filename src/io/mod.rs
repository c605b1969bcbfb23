//! I/O module
//!
//! Handles block file parsing and final-state output.
//!
//! # Components
//!
//! - `block_format` - JSON format handling (record conversion, output serialization)
//! - `reader` - block file loading with error mapping

pub mod block_format;
pub mod reader;

pub use block_format::{write_accounts_json, BlockFile, TxRecord};
pub use reader::read_block_file;
