#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let tail = benchmd_domain::CONSOLE_TAIL_LINES;
        if let Some(summary) = benchmd_domain::console_summary(text, tail) {
            assert!(!summary.trim().is_empty());
        }
    }
});
