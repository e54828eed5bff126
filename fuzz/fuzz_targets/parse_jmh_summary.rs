#![no_main]

use benchmd_types::{JMH_SCHEMA_V1, JmhReport};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let result = benchmd_domain::parse_jmh_summary(&text);
    assert!(result.warning.is_none() || result.rows.is_empty());

    let report = JmhReport {
        schema: JMH_SCHEMA_V1.to_string(),
        generated_at: "1970-01-01T00:00:00Z".to_string(),
        result,
    };
    let _ = benchmd_app::render_jmh_markdown(&report);
});
