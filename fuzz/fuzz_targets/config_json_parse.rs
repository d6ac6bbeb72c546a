//! Fuzz target for page configuration JSON parsing.
//!
//! This fuzzer feeds arbitrary byte sequences to the configuration parser
//! and resolves whatever parses, checking for panics, crashes, or hangs.

#![no_main]

use libfuzzer_sys::fuzz_target;
use linkmap::model::io_json::from_json_slice;
use linkmap::resolve::resolve_areas;

fuzz_target!(|data: &[u8]| {
    if data.len() > 10 * 1024 * 1024 {
        return;
    }

    if let Ok(config) = from_json_slice(data) {
        let _ = resolve_areas(&config);
    }
});
