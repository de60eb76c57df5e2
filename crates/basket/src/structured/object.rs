//! Locating the item list inside a JSON object.

use serde_json::{Map, Value};

use crate::dataset::Transaction;

use super::value::flatten;

/// Keys that hold a transaction's items, in priority order.
pub const ITEM_KEYS: &[&str] = &["items", "products", "events", "sequence", "data"];

/// Keys never treated as items by the fallback collection.
pub const RESERVED_KEYS: &[&str] = &["id", "transaction_id", "user_id", "weight", "weights"];

/// Extract one transaction from an object.
///
/// The first of [`ITEM_KEYS`] present wins, even when its value is a
/// scalar. Without any of them, the values of every non-reserved key are
/// concatenated in key order. Nested objects are stringified, not searched.
pub fn transaction_from_object(object: &Map<String, Value>) -> Transaction {
    if let Some(items) = ITEM_KEYS.iter().find_map(|key| object.get(*key)) {
        return flatten(items);
    }

    object
        .iter()
        .filter(|(key, _)| !RESERVED_KEYS.contains(&key.as_str()))
        .flat_map(|(_, value)| flatten(value))
        .collect()
}
