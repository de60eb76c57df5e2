//! Basket: loads transactional datasets from files of unknown layout.
//!
//! Market-basket data arrives in many shapes: long-form `(transaction_id,
//! item)` tables, item-by-transaction matrices, comma-separated rows, and
//! assorted JSON layouts. Basket detects which layout a file uses, extracts
//! its transactions, and normalizes every item into a canonical string so
//! downstream pattern mining sees one representation.
//!
//! # Core Principles
//!
//! - **Best-effort detection**: Layouts are inferred from headers and shapes
//! - **Local recovery**: Malformed rows and cells are skipped, never fatal
//! - **Pure output**: A load returns an immutable [`Dataset`] and nothing else
//!
//! # Example
//!
//! ```no_run
//! use basket::{Loader, summarize};
//!
//! let dataset = Loader::new().load("orders.csv").unwrap();
//!
//! println!("Transactions: {}", dataset.len());
//! println!("Summary: {:?}", summarize(&dataset));
//! ```

pub mod error;
pub mod input;
pub mod normalize;
pub mod structured;
pub mod summary;
pub mod tabular;

mod dataset;
mod loader;

pub use dataset::{Dataset, Transaction};
pub use error::{BasketError, IngestError, Result};
pub use input::{DetectedLayout, SourceFormat, SourceMetadata, TabularConfig};
pub use loader::{Loader, LoaderConfig, load_dataset};
pub use normalize::{normalize_item, normalize_transactions};
pub use structured::{extract_json, transaction_from_object};
pub use summary::{DataSummary, DatasetStats, summarize};
pub use tabular::{TabularLayout, classify_header, extract_tabular};
