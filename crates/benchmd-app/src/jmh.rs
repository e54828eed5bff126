use crate::Clock;
use anyhow::Context;
use benchmd_adapters::SourceReader;
use benchmd_domain::parse_jmh_summary;
use benchmd_types::{JMH_SCHEMA_V1, JmhReport};
use std::path::PathBuf;

pub const JMH_TITLE: &str = "Benchmarks (JMH)";

#[derive(Debug, Clone)]
pub struct JmhReportRequest {
    /// Captured stdout of the JMH (or sbt-jmh) run.
    pub input: PathBuf,
}

pub struct JmhReportUseCase<S: SourceReader, C: Clock> {
    source: S,
    clock: C,
}

impl<S: SourceReader, C: Clock> JmhReportUseCase<S, C> {
    pub fn new(source: S, clock: C) -> Self {
        Self { source, clock }
    }

    pub fn execute(&self, req: JmhReportRequest) -> anyhow::Result<JmhReport> {
        let text = self
            .source
            .read_text(&req.input)
            .context("failed to read JMH output")?;
        let result = parse_jmh_summary(&text);

        tracing::info!(
            rows = result.rows.len(),
            header_found = result.warning.is_none(),
            "parsed JMH output"
        );

        Ok(JmhReport {
            schema: JMH_SCHEMA_V1.to_string(),
            generated_at: self.clock.now_rfc3339(),
            result,
        })
    }
}

pub fn render_jmh_markdown(report: &JmhReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("## {JMH_TITLE}\n"));
    out.push_str(&format!("Generated: {}\n\n", report.generated_at));

    if let Some(warning) = &report.result.warning {
        out.push_str(&format!("> {warning}\n\n"));
    }

    if report.result.rows.is_empty() {
        out.push_str("No benchmark rows parsed.\n");
        return out;
    }

    out.push_str("| Benchmark | Mode | Cnt | Score | Units |\n");
    out.push_str("|---|---:|---:|---:|---|\n");
    for row in &report.result.rows {
        out.push_str(&format!(
            "| {} | {} | {} | {} | {} |\n",
            row.benchmark, row.mode, row.count, row.score, row.units
        ));
    }

    out
}
