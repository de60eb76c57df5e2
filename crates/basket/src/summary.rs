//! Aggregate statistics over a dataset.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::dataset::{Dataset, Transaction};

/// Number of transactions copied into the summary as samples.
pub const SAMPLE_SIZE: usize = 3;

/// Summary of a loaded dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DataSummary {
    /// The dataset has no transactions.
    NoData,
    /// Statistics for a non-empty dataset.
    Stats(DatasetStats),
}

impl DataSummary {
    pub fn is_empty(&self) -> bool {
        matches!(self, DataSummary::NoData)
    }

    pub fn stats(&self) -> Option<&DatasetStats> {
        match self {
            DataSummary::Stats(stats) => Some(stats),
            DataSummary::NoData => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetStats {
    pub total_transactions: usize,
    /// Distinct items across all transactions.
    pub unique_items: usize,
    /// Mean items per transaction, rounded to 2 decimals (ties to even).
    pub avg_transaction_length: f64,
    /// The first transactions, verbatim.
    pub sample_transactions: Vec<Transaction>,
}

/// Compute summary statistics. Never divides by zero.
pub fn summarize(dataset: &Dataset) -> DataSummary {
    if dataset.is_empty() {
        return DataSummary::NoData;
    }

    let total_transactions = dataset.len();
    let unique_items = dataset
        .iter()
        .flatten()
        .map(String::as_str)
        .collect::<HashSet<_>>()
        .len();
    let avg = dataset.item_count() as f64 / total_transactions as f64;

    DataSummary::Stats(DatasetStats {
        total_transactions,
        unique_items,
        avg_transaction_length: (avg * 100.0).round_ties_even() / 100.0,
        sample_transactions: dataset.iter().take(SAMPLE_SIZE).cloned().collect(),
    })
}
