//! Loader façade: extension dispatch, extraction and normalization.

use std::path::Path;

use crate::dataset::{Dataset, Transaction};
use crate::error::{BasketError, IngestError, Result};
use crate::input::{
    DetectedLayout, SourceFormat, SourceMetadata, TabularConfig, parse_json, read_rows,
    read_source,
};
use crate::normalize::normalize_transactions;
use crate::structured::extract_json;
use crate::tabular::extract_tabular;

/// Configuration for loading datasets.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Tokenizer settings for `.csv` files.
    pub tabular: TabularConfig,
    /// Normalize items after extraction.
    pub normalize: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            tabular: TabularConfig::default(),
            normalize: true,
        }
    }
}

/// Loads transactional datasets from `.csv` and `.json` files.
///
/// Each call reads the file once and returns a fresh [`Dataset`]; the
/// loader holds no state between calls.
#[derive(Debug, Clone, Default)]
pub struct Loader {
    config: LoaderConfig,
}

impl Loader {
    /// Create a loader with default configuration.
    pub fn new() -> Self {
        Self::with_config(LoaderConfig::default())
    }

    /// Create a loader with custom configuration.
    pub fn with_config(config: LoaderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Load a file into a dataset.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Dataset> {
        self.load_with_source(path).map(|(dataset, _)| dataset)
    }

    /// Load a file, also returning metadata about the source.
    ///
    /// Unsupported extensions fail before the file is touched. Every later
    /// failure is reported as [`BasketError::Load`] with the cause attached.
    pub fn load_with_source(&self, path: impl AsRef<Path>) -> Result<(Dataset, SourceMetadata)> {
        let path = path.as_ref();

        let format = SourceFormat::from_path(path).ok_or_else(|| BasketError::UnsupportedFormat {
            path: path.to_path_buf(),
        })?;

        self.load_format(path, format)
            .map_err(|source| BasketError::Load {
                path: path.to_path_buf(),
                source,
            })
    }

    fn load_format(
        &self,
        path: &Path,
        format: SourceFormat,
    ) -> std::result::Result<(Dataset, SourceMetadata), IngestError> {
        let source = read_source(path)?;

        let (layout, raw) = match format {
            SourceFormat::Csv => {
                let rows = read_rows(source.without_bom(), &self.config.tabular)?;
                let (layout, transactions) = extract_tabular(&rows)?;
                (DetectedLayout::from(layout), transactions)
            }
            SourceFormat::Json => {
                let document = parse_json(source.without_bom())?;
                (DetectedLayout::Json, extract_json(&document)?)
            }
        };

        let dataset = self.finish(raw);

        tracing::info!(
            path = %path.display(),
            %layout,
            transactions = dataset.len(),
            "Loaded transactions"
        );

        let metadata = SourceMetadata::new(
            path.to_path_buf(),
            source.hash.clone(),
            source.size_bytes(),
            format,
            layout,
            dataset.len(),
        );

        Ok((dataset, metadata))
    }

    fn finish(&self, raw: Vec<Transaction>) -> Dataset {
        if self.config.normalize {
            normalize_transactions(raw)
        } else {
            Dataset::new(raw)
        }
    }
}

/// Load and normalize a file with the default configuration.
pub fn load_dataset(path: impl AsRef<Path>) -> Result<Dataset> {
    Loader::new().load(path)
}
