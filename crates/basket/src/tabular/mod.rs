//! Delimited-file layouts: classification and extraction.

mod classify;
mod extract;

pub use classify::{
    ITEM_COLUMNS, TRANSACTION_ID_COLUMNS, TabularLayout, classify_header, resolve_column,
};
pub use extract::{extract_long_form, extract_matrix, extract_simple};

use crate::dataset::Transaction;
use crate::error::IngestError;

/// Classify the first row and extract raw transactions from all rows.
///
/// The first row is treated as the header for long-form and matrix files.
/// The simple layout reads every row, the first included.
pub fn extract_tabular(
    rows: &[Vec<String>],
) -> Result<(TabularLayout, Vec<Transaction>), IngestError> {
    let Some((header, body)) = rows.split_first() else {
        return Err(IngestError::EmptyData("No header row found".to_string()));
    };

    let layout = classify_header(header);
    tracing::debug!(%layout, columns = header.len(), "Classified tabular header");

    let transactions = match layout {
        TabularLayout::LongForm => extract_long_form(header, body),
        TabularLayout::Matrix => extract_matrix(header, body),
        TabularLayout::Simple => extract_simple(rows),
    };

    Ok((layout, transactions))
}
