#![no_main]

use gosp::{parser, reader};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Fuzz the reader
        if let Ok(datums) = reader::read(s) {
            // If reading succeeds, fuzz the analyzer form by form
            let _ = parser::parse_each(&datums, &gosp::ParseOptions::default());
        }
        // And the combined read + analyze entry point
        let _ = parser::parse_str("fuzz", s);
    }
});
