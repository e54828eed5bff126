#![no_main]

use benchmd_types::{GATLING_SCHEMA_V1, GatlingReport};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let summary = benchmd_domain::parse_gatling_log(data);
    let report = GatlingReport {
        schema: GATLING_SCHEMA_V1.to_string(),
        generated_at: "1970-01-01T00:00:00Z".to_string(),
        report_index: "/tmp/index.html".to_string(),
        artifact_name: None,
        console_summary: None,
        summary,
    };
    let md = benchmd_app::render_gatling_markdown(&report);
    assert!(md.contains("| Metric | Value |"));
});
