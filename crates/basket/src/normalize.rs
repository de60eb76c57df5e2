//! Item normalization.
//!
//! Every raw item token is canonicalized independently:
//!
//! 1. Surrounding whitespace is trimmed.
//! 2. Tokens that parse as a number are rendered canonically: whole values
//!    as plain integers (`"3.00"` -> `"3"`), others with exactly two
//!    decimals (`"3.14159"` -> `"3.14"`). A value that rounds to a whole
//!    number at two decimals is rendered as that integer (`"0.999"` -> `"1"`).
//! 3. Other tokens are lower-cased with spaces replaced by underscores.
//! 4. Empty results and sentinel values (`nan`, `null`, `none`) are dropped.
//!
//! # Rounding
//!
//! Two-decimal rendering uses Rust's float formatting, which rounds the
//! exact binary value of the number and breaks exact ties to even:
//! `0.125` -> `"0.12"`, `0.375` -> `"0.38"`. Values such as `2.675` are
//! stored slightly below the tie and therefore render as `"2.67"`.

use crate::dataset::{Dataset, Transaction};

/// Strings that mean "missing", compared case-insensitively.
const SENTINELS: &[&str] = &["nan", "null", "none"];

/// Check if a value is empty or a missing-value sentinel.
pub fn is_sentinel(value: &str) -> bool {
    value.is_empty() || SENTINELS.iter().any(|s| value.eq_ignore_ascii_case(s))
}

/// Normalize a single raw item. Returns `None` when the item is dropped.
pub fn normalize_item(raw: &str) -> Option<String> {
    let trimmed = raw.trim();

    let canonical = match trimmed.parse::<f64>() {
        Ok(value) => canonical_number(value),
        Err(_) => trimmed.to_lowercase().replace(' ', "_"),
    };

    if is_sentinel(&canonical) {
        None
    } else {
        Some(canonical)
    }
}

/// Render a parsed number in its canonical form.
///
/// Integrality is judged after rounding, so `0.999` becomes `"1"` rather
/// than `"1.00"`; otherwise a second pass would change the item.
fn canonical_number(value: f64) -> String {
    let rounded = format!("{value:.2}");
    match rounded.strip_suffix(".00") {
        Some("-0") => "0".to_string(),
        Some(whole) => whole.to_string(),
        None => rounded,
    }
}

/// Normalize one transaction, preserving item order.
pub fn normalize_transaction(transaction: &[String]) -> Transaction {
    transaction
        .iter()
        .filter_map(|item| normalize_item(item))
        .collect()
}

/// Normalize every item of every transaction.
///
/// Transaction order and per-transaction item order are preserved;
/// transactions left empty are dropped.
pub fn normalize_transactions<I>(transactions: I) -> Dataset
where
    I: IntoIterator<Item = Transaction>,
{
    let mut dropped = 0usize;
    let normalized: Vec<Transaction> = transactions
        .into_iter()
        .filter_map(|t| {
            let n = normalize_transaction(&t);
            if n.is_empty() {
                dropped += 1;
                None
            } else {
                Some(n)
            }
        })
        .collect();

    if dropped > 0 {
        tracing::debug!(dropped, "Dropped transactions left empty by normalization");
    }

    Dataset::new(normalized)
}
