//! Input reading and data source handling.

mod reader;
mod source;

pub use reader::{SourceBytes, TabularConfig, parse_json, read_rows, read_source};
pub use source::{DetectedLayout, SourceFormat, SourceMetadata};
