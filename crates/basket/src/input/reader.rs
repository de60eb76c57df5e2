//! File reading and tokenizing.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde_json::Value;
use sha2::{Digest, Sha256};

use crate::error::IngestError;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Tokenizer configuration for delimited files.
#[derive(Debug, Clone)]
pub struct TabularConfig {
    /// Field delimiter.
    pub delimiter: u8,
    /// Quote character.
    pub quote: u8,
    /// Maximum records to read after the first row (None = all).
    pub max_rows: Option<usize>,
}

impl Default for TabularConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            max_rows: None,
        }
    }
}

/// Raw file contents with their hash.
#[derive(Debug, Clone)]
pub struct SourceBytes {
    pub contents: Vec<u8>,
    pub hash: String,
}

impl SourceBytes {
    pub fn size_bytes(&self) -> u64 {
        self.contents.len() as u64
    }

    /// Contents with a leading UTF-8 byte order mark removed.
    pub fn without_bom(&self) -> &[u8] {
        self.contents
            .strip_prefix(UTF8_BOM)
            .unwrap_or(&self.contents)
    }
}

/// Read a whole file and hash its contents.
///
/// The handle is dropped before returning, on success or error.
pub fn read_source(path: &Path) -> Result<SourceBytes, IngestError> {
    let mut contents = Vec::new();
    File::open(path)?.read_to_end(&mut contents)?;

    let mut hasher = Sha256::new();
    hasher.update(&contents);
    let hash = format!("sha256:{:x}", hasher.finalize());

    Ok(SourceBytes { contents, hash })
}

/// Tokenize delimited bytes into rows of string cells.
///
/// Rows may have differing lengths; blank lines are skipped.
pub fn read_rows(bytes: &[u8], config: &TabularConfig) -> Result<Vec<Vec<String>>, IngestError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .quote(config.quote)
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);

    let limit = config
        .max_rows
        .map_or(usize::MAX, |max| max.saturating_add(1));

    let mut rows = Vec::new();
    for result in reader.records().take(limit) {
        let record = result?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(rows)
}

/// Parse bytes as a single JSON document.
pub fn parse_json(bytes: &[u8]) -> Result<Value, IngestError> {
    Ok(serde_json::from_slice(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_rows_flexible() {
        let data = b"a,b,c\n1,2\n\n\"x,y\",z\n";
        let rows = read_rows(data, &TabularConfig::default()).unwrap();
        assert_eq!(
            rows,
            vec![
                vec!["a", "b", "c"],
                vec!["1", "2"],
                vec!["x,y", "z"],
            ]
        );
    }

    #[test]
    fn test_read_rows_custom_delimiter() {
        let config = TabularConfig {
            delimiter: b';',
            ..TabularConfig::default()
        };
        let rows = read_rows(b"a;b\n1;2\n", &config).unwrap();
        assert_eq!(rows[1], vec!["1", "2"]);
    }

    #[test]
    fn test_read_rows_max_rows_excludes_first_row() {
        let config = TabularConfig {
            max_rows: Some(2),
            ..TabularConfig::default()
        };
        let rows = read_rows(b"h1,h2\n1,2\n3,4\n5,6\n", &config).unwrap();
        assert_eq!(rows.len(), 3);
    }

    #[test]
    fn test_read_rows_rejects_invalid_utf8() {
        let data = b"a,b\n\xff\xfe,c\n";
        let err = read_rows(data, &TabularConfig::default()).unwrap_err();
        assert!(matches!(err, IngestError::Csv(_)));
    }

    #[test]
    fn test_read_source_hash_and_bom() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"\xEF\xBB\xBFitem\n").unwrap();

        let source = read_source(file.path()).unwrap();
        assert!(source.hash.starts_with("sha256:"));
        assert_eq!(source.size_bytes(), 8);
        assert_eq!(source.without_bom(), b"item\n");
    }

    #[test]
    fn test_read_source_missing_file() {
        let err = read_source(Path::new("/nonexistent/baskets.csv")).unwrap_err();
        assert!(matches!(err, IngestError::Io(_)));
    }

    #[test]
    fn test_parse_json_error() {
        let err = parse_json(b"[1, 2").unwrap_err();
        assert!(matches!(err, IngestError::Json(_)));
    }
}
