//! Source format detection and load metadata.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::tabular::TabularLayout;

/// File formats the loader accepts, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceFormat {
    Csv,
    Json,
}

impl SourceFormat {
    /// Detect the format from a case-sensitive `.csv` / `.json` suffix.
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.to_string_lossy();
        if name.ends_with(".csv") {
            Some(SourceFormat::Csv)
        } else if name.ends_with(".json") {
            Some(SourceFormat::Json)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceFormat::Csv => "csv",
            SourceFormat::Json => "json",
        }
    }
}

/// Layout the loader detected while extracting transactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectedLayout {
    LongForm,
    Matrix,
    Simple,
    Json,
}

impl DetectedLayout {
    pub fn as_str(&self) -> &'static str {
        match self {
            DetectedLayout::LongForm => "long_form",
            DetectedLayout::Matrix => "matrix",
            DetectedLayout::Simple => "simple",
            DetectedLayout::Json => "json",
        }
    }
}

impl From<TabularLayout> for DetectedLayout {
    fn from(layout: TabularLayout) -> Self {
        match layout {
            TabularLayout::LongForm => DetectedLayout::LongForm,
            TabularLayout::Matrix => DetectedLayout::Matrix,
            TabularLayout::Simple => DetectedLayout::Simple,
        }
    }
}

impl std::fmt::Display for DetectedLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata about a loaded source file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// File name without path.
    pub file: String,
    /// Full path to the file.
    pub path: PathBuf,
    /// SHA-256 hash of the file contents.
    pub hash: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Format chosen from the extension.
    pub format: SourceFormat,
    /// Layout detected from the contents.
    pub layout: DetectedLayout,
    /// Number of transactions in the loaded dataset.
    pub transaction_count: usize,
    /// When the file was loaded.
    pub loaded_at: DateTime<Utc>,
}

impl SourceMetadata {
    pub fn new(
        path: PathBuf,
        hash: String,
        size_bytes: u64,
        format: SourceFormat,
        layout: DetectedLayout,
        transaction_count: usize,
    ) -> Self {
        let file = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            file,
            path,
            hash,
            size_bytes,
            format,
            layout,
            transaction_count,
            loaded_at: Utc::now(),
        }
    }
}
