//! Fuzz target for item normalization.
//!
//! Checks that normalization never panics, never yields a sentinel and is
//! idempotent on arbitrary UTF-8 input.

#![no_main]

use libfuzzer_sys::fuzz_target;
use basket::normalize::{is_sentinel, normalize_item};

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        if let Some(item) = normalize_item(raw) {
            assert!(!is_sentinel(&item));
            assert_eq!(normalize_item(&item).as_deref(), Some(item.as_str()));
        }
    }
});
