//! Fuzz target for JSON transaction extraction.
//!
//! Any document that parses must either extract cleanly or be rejected
//! as an unrecognized shape; extraction must never panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use basket::{extract_json, normalize_transactions};

fuzz_target!(|data: &[u8]| {
    if data.len() > 100_000 {
        return;
    }

    if let Ok(document) = serde_json::from_slice::<serde_json::Value>(data) {
        if let Ok(transactions) = extract_json(&document) {
            let dataset = normalize_transactions(transactions);
            assert!(dataset.iter().all(|t| !t.is_empty()));
        }
    }
});
