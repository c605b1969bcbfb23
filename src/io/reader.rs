//! Block file loading

use crate::io::block_format::BlockFile;
use crate::types::ExecutorError;
use std::fs;
use std::path::Path;

/// Read and parse a block file from disk
///
/// Distinguishes a missing file from other I/O failures so the CLI can
/// report it precisely; parse failures carry serde's description.
pub fn read_block_file(path: &Path) -> Result<BlockFile, ExecutorError> {
    if !path.exists() {
        return Err(ExecutorError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let contents = fs::read_to_string(path)?;
    let file = serde_json::from_str(&contents)?;
    Ok(file)
}
