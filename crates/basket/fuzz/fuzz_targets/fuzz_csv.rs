//! Fuzz target for the tabular loading path.
//!
//! This fuzzer tests that CSV loading:
//! 1. Never panics on malformed input
//! 2. Handles every layout the header classifier can pick
//! 3. Never returns empty transactions

#![no_main]

use libfuzzer_sys::fuzz_target;
use basket::Loader;
use std::io::Write;

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    if let Ok(mut temp_file) = tempfile::NamedTempFile::with_suffix(".csv") {
        if temp_file.write_all(data).is_ok() {
            if let Ok(dataset) = Loader::new().load(temp_file.path()) {
                assert!(dataset.iter().all(|t| !t.is_empty()));
            }
        }
    }
});
