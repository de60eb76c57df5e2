//! Extractors for the three tabular layouts.
//!
//! Extractors emit raw transactions; item normalization happens later.
//! Malformed rows are skipped rather than failing the load.

use indexmap::IndexMap;

use crate::dataset::Transaction;

use super::classify::{ITEM_COLUMNS, TRANSACTION_ID_COLUMNS, lowered_header, resolve_column};

/// Item values that mark a long-form row as empty (case-insensitive).
const MISSING_ITEMS: &[&str] = &["nan", "null"];

/// Non-numeric matrix cells that mean "absent" (after lower-casing).
const ABSENT_MARKERS: &[&str] = &["0", "false", "no", "", "nan"];

/// Group `(transaction_id, item)` rows into transactions.
///
/// Transactions appear in order of first appearance of their id, items in
/// row order. Rows too short to hold both columns are skipped, as are rows
/// whose item is empty, `nan` or `null`. Extra columns such as weights are
/// ignored.
pub fn extract_long_form(header: &[String], rows: &[Vec<String>]) -> Vec<Transaction> {
    let lowered = lowered_header(header);
    let trans_idx = resolve_column(&lowered, TRANSACTION_ID_COLUMNS, 0);
    let item_idx = resolve_column(&lowered, ITEM_COLUMNS, 1);
    let min_len = trans_idx.max(item_idx) + 1;

    tracing::debug!(trans_idx, item_idx, "Resolved long-form columns");

    let mut groups: IndexMap<String, Transaction> = IndexMap::new();
    let mut skipped = 0usize;

    for row in rows {
        if row.len() < min_len {
            skipped += 1;
            continue;
        }

        let item = row[item_idx].trim();
        if item.is_empty() || MISSING_ITEMS.iter().any(|m| item.eq_ignore_ascii_case(m)) {
            continue;
        }

        let trans_id = row[trans_idx].trim();
        groups
            .entry(trans_id.to_string())
            .or_default()
            .push(item.to_string());
    }

    if skipped > 0 {
        tracing::debug!(skipped, "Skipped short long-form rows");
    }

    groups.into_values().collect()
}

/// Read a presence/weight matrix whose header names the items.
///
/// A cell marks its column's item present when it parses as a number
/// greater than zero, or, failing that, when it is not one of the absent
/// markers. Rows with no present items are dropped.
pub fn extract_matrix(header: &[String], rows: &[Vec<String>]) -> Vec<Transaction> {
    let items: Vec<&str> = header.iter().map(|h| h.trim()).collect();

    rows.iter()
        .filter_map(|row| {
            let transaction: Transaction = row
                .iter()
                .take(items.len())
                .zip(&items)
                .filter(|(cell, _)| is_present(cell))
                .map(|(_, item)| item.to_string())
                .collect();

            if transaction.is_empty() {
                None
            } else {
                Some(transaction)
            }
        })
        .collect()
}

/// Check if a matrix cell marks its item as present.
fn is_present(cell: &str) -> bool {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return false;
    }

    match trimmed.parse::<f64>() {
        Ok(value) => value > 0.0,
        Err(_) => {
            let lowered = trimmed.to_lowercase();
            !ABSENT_MARKERS.contains(&lowered.as_str())
        }
    }
}

/// One transaction per row, items separated by commas.
///
/// Cells are rejoined with commas and split again, so a single cell
/// holding `"b,c"` yields two items. Every row is read, including the
/// first. Tokens are trimmed and empty ones dropped.
pub fn extract_simple(rows: &[Vec<String>]) -> Vec<Transaction> {
    rows.iter()
        .filter(|row| !row.is_empty())
        .filter_map(|row| {
            let line = row.join(",");
            let transaction: Transaction = line
                .split(',')
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .map(String::from)
                .collect();

            if transaction.is_empty() {
                None
            } else {
                Some(transaction)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| s.to_string()).collect()
    }

    fn tx(items: &[&str]) -> Transaction {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_long_form_groups_by_first_appearance() {
        let header = row(&["transaction_id", "item"]);
        let rows = vec![
            row(&["T1", "apple"]),
            row(&["T2", "banana"]),
            row(&["T1", "milk"]),
        ];

        assert_eq!(
            extract_long_form(&header, &rows),
            vec![tx(&["apple", "milk"]), tx(&["banana"])]
        );
    }

    #[test]
    fn test_long_form_skips_short_and_missing_rows() {
        let header = row(&["item", "weight", "transaction_id"]);
        let rows = vec![
            row(&["bread", "0.5", "1"]),
            row(&["milk", "0.2"]),
            row(&["NaN", "1.0", "1"]),
            row(&["  ", "1.0", "2"]),
            row(&["null", "1.0", "2"]),
            row(&[" eggs ", "1.0", " 2 "]),
        ];

        assert_eq!(
            extract_long_form(&header, &rows),
            vec![tx(&["bread"]), tx(&["eggs"])]
        );
    }

    #[test]
    fn test_long_form_trims_transaction_ids() {
        let header = row(&["transaction_id", "item"]);
        let rows = vec![row(&["T1 ", "a"]), row(&[" T1", "b"])];
        assert_eq!(extract_long_form(&header, &rows), vec![tx(&["a", "b"])]);
    }

    #[test]
    fn test_long_form_alternate_column_names() {
        let header = row(&["product", "trans_id"]);
        let rows = vec![row(&["x", "A"]), row(&["y", "B"]), row(&["z", "A"])];
        assert_eq!(
            extract_long_form(&header, &rows),
            vec![tx(&["x", "z"]), tx(&["y"])]
        );
    }

    #[test]
    fn test_matrix_presence_by_weight() {
        let header = row(&["bread", "milk", "eggs"]);
        let rows = vec![row(&["1", "0", "2.5"])];
        assert_eq!(extract_matrix(&header, &rows), vec![tx(&["bread", "eggs"])]);
    }

    #[test]
    fn test_matrix_string_cells() {
        let header = row(&["a", "b", "c", "d", "e"]);
        let rows = vec![row(&["yes", "No", "FALSE", "x", "off"])];
        assert_eq!(extract_matrix(&header, &rows), vec![tx(&["a", "d", "e"])]);
    }

    #[test]
    fn test_matrix_negative_and_nan_cells_absent() {
        let header = row(&["a", "b", "c"]);
        let rows = vec![row(&["-1", "nan", " 0.0 "]), row(&["", "  ", "3"])];
        assert_eq!(extract_matrix(&header, &rows), vec![tx(&["c"])]);
    }

    #[test]
    fn test_matrix_ignores_cells_beyond_header() {
        let header = row(&[" a ", "b", "c"]);
        let rows = vec![row(&["1", "0", "0", "1", "1"]), row(&["1"])];
        assert_eq!(extract_matrix(&header, &rows), vec![tx(&["a"]), tx(&["a"])]);
    }

    #[test]
    fn test_simple_rejoins_cells() {
        let rows = vec![row(&["a", "b,c"]), row(&[" d ", ""]), row(&["", " , "])];
        assert_eq!(
            extract_simple(&rows),
            vec![tx(&["a", "b", "c"]), tx(&["d"])]
        );
    }

    #[test]
    fn test_simple_keeps_first_row() {
        let rows = vec![row(&["bread", "milk"]), row(&["eggs"])];
        assert_eq!(
            extract_simple(&rows),
            vec![tx(&["bread", "milk"]), tx(&["eggs"])]
        );
    }
}
