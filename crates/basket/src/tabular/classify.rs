//! Header classification and column resolution.

use serde::{Deserialize, Serialize};

/// Transaction-id column names, in resolution order.
pub const TRANSACTION_ID_COLUMNS: &[&str] = &["transaction_id", "trans_id"];

/// Item column names, in resolution order.
pub const ITEM_COLUMNS: &[&str] = &["item", "product"];

/// Recognized layouts of a delimited file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TabularLayout {
    /// One `(transaction_id, item)` pair per row, grouped by id.
    LongForm,
    /// Columns name items; cells hold presence flags or weights.
    Matrix,
    /// One transaction per row, items comma-separated.
    Simple,
}

impl TabularLayout {
    pub fn as_str(&self) -> &'static str {
        match self {
            TabularLayout::LongForm => "long_form",
            TabularLayout::Matrix => "matrix",
            TabularLayout::Simple => "simple",
        }
    }
}

impl std::fmt::Display for TabularLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Header names trimmed and lower-cased for matching.
pub(crate) fn lowered_header(header: &[String]) -> Vec<String> {
    header.iter().map(|h| h.trim().to_lowercase()).collect()
}

/// Decide which layout a header row describes.
///
/// First match wins:
/// 1. both `transaction_id` and `item` columns present -> long-form
/// 2. more than two columns -> matrix
/// 3. otherwise -> simple
///
/// A matrix whose item names happen to include both `transaction_id` and
/// `item` is read as long-form; this is an accepted limitation of the
/// heuristic.
pub fn classify_header(header: &[String]) -> TabularLayout {
    let lowered = lowered_header(header);
    let has_column = |name: &str| lowered.iter().any(|h| h == name);

    if has_column(TRANSACTION_ID_COLUMNS[0]) && has_column(ITEM_COLUMNS[0]) {
        TabularLayout::LongForm
    } else if header.len() > 2 {
        TabularLayout::Matrix
    } else {
        TabularLayout::Simple
    }
}

/// Find the first candidate name present in a lowered header.
///
/// Falls back to `default_index` when no candidate matches.
pub fn resolve_column(lowered_header: &[String], candidates: &[&str], default_index: usize) -> usize {
    candidates
        .iter()
        .find_map(|name| lowered_header.iter().position(|h| h == name))
        .unwrap_or(default_index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_long_form_detected() {
        assert_eq!(
            classify_header(&header(&["transaction_id", "item"])),
            TabularLayout::LongForm
        );
    }

    #[test]
    fn test_long_form_ignores_case_and_whitespace() {
        assert_eq!(
            classify_header(&header(&[" Transaction_ID ", "ITEM", "weight"])),
            TabularLayout::LongForm
        );
    }

    #[test]
    fn test_long_form_wins_over_matrix() {
        assert_eq!(
            classify_header(&header(&["bread", "transaction_id", "milk", "item"])),
            TabularLayout::LongForm
        );
    }

    #[test]
    fn test_alternate_names_do_not_select_long_form() {
        // trans_id/product only matter once long-form has been chosen
        assert_eq!(
            classify_header(&header(&["trans_id", "product"])),
            TabularLayout::Simple
        );
        assert_eq!(
            classify_header(&header(&["trans_id", "product", "weight"])),
            TabularLayout::Matrix
        );
    }

    #[test]
    fn test_matrix_and_simple() {
        assert_eq!(
            classify_header(&header(&["bread", "milk", "eggs"])),
            TabularLayout::Matrix
        );
        assert_eq!(classify_header(&header(&["a", "b"])), TabularLayout::Simple);
        assert_eq!(classify_header(&header(&["a"])), TabularLayout::Simple);
        assert_eq!(classify_header(&[]), TabularLayout::Simple);
    }

    #[test]
    fn test_resolve_column_fallback_chain() {
        let lowered = lowered_header(&header(&["weight", "Product", "trans_id"]));
        assert_eq!(resolve_column(&lowered, TRANSACTION_ID_COLUMNS, 0), 2);
        assert_eq!(resolve_column(&lowered, ITEM_COLUMNS, 1), 1);

        let lowered = lowered_header(&header(&["a", "b", "c"]));
        assert_eq!(resolve_column(&lowered, TRANSACTION_ID_COLUMNS, 0), 0);
        assert_eq!(resolve_column(&lowered, ITEM_COLUMNS, 1), 1);
    }

    #[test]
    fn test_resolve_column_prefers_earlier_candidate() {
        let lowered = lowered_header(&header(&["trans_id", "transaction_id", "item"]));
        assert_eq!(resolve_column(&lowered, TRANSACTION_ID_COLUMNS, 0), 1);
    }
}
