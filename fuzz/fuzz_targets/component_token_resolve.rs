//! Fuzz target for color map component tokens.
//!
//! This fuzzer feeds arbitrary UTF-8 tokens through area resolution,
//! checking for panics, crashes, or hangs.

#![no_main]

use libfuzzer_sys::fuzz_target;
use linkmap::resolve::fuzz_resolve_token;

fuzz_target!(|data: &[u8]| {
    if data.len() > 1024 * 1024 {
        return;
    }

    let Ok(token) = std::str::from_utf8(data) else {
        return;
    };

    let _ = fuzz_resolve_token(token);
});
