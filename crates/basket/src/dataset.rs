//! Canonical transaction list.

use serde::{Deserialize, Serialize};

/// One basket: items in order of appearance.
pub type Transaction = Vec<String>;

/// Ordered sequence of non-empty transactions.
///
/// Built once per load and never mutated afterwards; summary statistics
/// are derived on demand with [`crate::summarize`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Transaction>", into = "Vec<Transaction>")]
pub struct Dataset {
    transactions: Vec<Transaction>,
}

impl Dataset {
    /// Build a dataset, dropping any empty transactions.
    pub fn new(transactions: Vec<Transaction>) -> Self {
        let transactions = transactions
            .into_iter()
            .filter(|t| !t.is_empty())
            .collect();
        Self { transactions }
    }

    /// Number of transactions.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Borrow the transactions in discovery order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Get a transaction by index.
    pub fn get(&self, index: usize) -> Option<&Transaction> {
        self.transactions.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.transactions.iter()
    }

    /// Total item occurrences across all transactions.
    pub fn item_count(&self) -> usize {
        self.transactions.iter().map(Vec::len).sum()
    }

    /// Consume the dataset, returning the owned transactions.
    pub fn into_transactions(self) -> Vec<Transaction> {
        self.transactions
    }
}

impl From<Vec<Transaction>> for Dataset {
    fn from(transactions: Vec<Transaction>) -> Self {
        Self::new(transactions)
    }
}

impl From<Dataset> for Vec<Transaction> {
    fn from(dataset: Dataset) -> Self {
        dataset.transactions
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.transactions.iter()
    }
}

impl IntoIterator for Dataset {
    type Item = Transaction;
    type IntoIter = std::vec::IntoIter<Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.transactions.into_iter()
    }
}
