#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes through the whole pipeline: ZIP -> XML/JSON extractors
    let _ = threemf_analyzer::analyze_bytes(data);
});
