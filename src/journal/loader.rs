use serde_json::Value;
use std::path::Path;
use tracing::{info, warn};

use crate::error::{JournalError, Result};
use crate::journal::trade_record::{json_kind, TradeRecord};

/// Reads a JSON trade export. The file must hold an array; rows inside it
/// are parsed leniently and malformed ones are skipped.
pub fn load_trades(path: &Path) -> Result<Vec<TradeRecord>> {
    let raw = std::fs::read_to_string(path).map_err(|source| JournalError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let payload: Value = serde_json::from_str(&raw).map_err(|source| JournalError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let Value::Array(rows) = &payload else {
        return Err(JournalError::NotAnArray {
            path: path.to_path_buf(),
            found: json_kind(&payload),
        });
    };

    let records = TradeRecord::parse_lenient(&payload);
    let skipped = rows.len() - records.len();
    if skipped > 0 {
        warn!("Skipped {} malformed trade rows in {}", skipped, path.display());
    }
    info!("Loaded {} trades from {}", records.len(), path.display());

    Ok(records)
}
