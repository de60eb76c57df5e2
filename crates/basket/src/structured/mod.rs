//! Transaction extraction from parsed JSON.
//!
//! Supported shapes:
//!
//! - list of lists: `[["A", "B"], ["C"]]`
//! - list of objects: `[{"transaction_id": 1, "items": ["A", "B"]}]`
//! - object of lists or objects: `{"user1": ["A", "B"], "user2": {"products": ["C"]}}`
//! - scalars inside the outer list or object become single-item transactions
//!
//! Weighted variants such as `{"items": [...], "weights": [...]}` are
//! recognized, but only the items are kept.

mod object;
mod value;

pub use object::{ITEM_KEYS, RESERVED_KEYS, transaction_from_object};
pub use value::{is_truthy, shape_name, stringify, stringify_members};

use serde_json::Value;

use crate::dataset::Transaction;
use crate::error::IngestError;

/// Extract raw transactions from a parsed JSON document.
///
/// Empty transactions are dropped. Fails with
/// [`IngestError::UnrecognizedJsonShape`] if the top level is neither an
/// array nor an object.
pub fn extract_json(document: &Value) -> Result<Vec<Transaction>, IngestError> {
    let transactions: Vec<Transaction> = match document {
        Value::Array(elements) => elements.iter().map(transaction_from_entry).collect(),
        Value::Object(entries) => entries.values().map(transaction_from_entry).collect(),
        other => {
            return Err(IngestError::UnrecognizedJsonShape {
                found: shape_name(other),
            });
        }
    };

    let total = transactions.len();
    let transactions: Vec<Transaction> = transactions.into_iter().filter(|t| !t.is_empty()).collect();
    if transactions.len() < total {
        tracing::debug!(dropped = total - transactions.len(), "Dropped empty JSON transactions");
    }

    Ok(transactions)
}

/// One element of the outer array, or one value of the outer object.
fn transaction_from_entry(entry: &Value) -> Transaction {
    match entry {
        Value::Array(members) => stringify_members(members),
        Value::Object(object) => transaction_from_object(object),
        scalar => vec![stringify(scalar)],
    }
}
