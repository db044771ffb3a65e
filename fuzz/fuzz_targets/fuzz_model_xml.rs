#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Model and settings documents straight into the XML scanners
    let _ = threemf_analyzer::parser::scan_mesh_stats(data);
    let _ = threemf_analyzer::parser::parse_print_settings(data);
});
