use crate::Clock;
use anyhow::Context;
use benchmd_adapters::SourceReader;
use benchmd_domain::{CONSOLE_TAIL_LINES, GatlingStatus, console_summary, parse_gatling_log};
use benchmd_types::{GATLING_SCHEMA_V1, GatlingReport};
use std::path::PathBuf;

pub const GATLING_TITLE: &str = "Gatling";

#[derive(Debug, Clone)]
pub struct GatlingReportRequest {
    /// `simulation.log`; the HTML report is expected next to it.
    pub log_path: PathBuf,

    /// Captured Gatling console output. Ignored when the file does not exist.
    pub console_out: Option<PathBuf>,

    /// CI artifact the HTML report was uploaded as.
    pub artifact_name: Option<String>,
}

pub struct GatlingReportUseCase<S: SourceReader, C: Clock> {
    source: S,
    clock: C,
}

impl<S: SourceReader, C: Clock> GatlingReportUseCase<S, C> {
    pub fn new(source: S, clock: C) -> Self {
        Self { source, clock }
    }

    pub fn execute(&self, req: GatlingReportRequest) -> anyhow::Result<GatlingReport> {
        let bytes = self
            .source
            .read_bytes(&req.log_path)
            .context("failed to read gatling simulation log")?;
        let summary = parse_gatling_log(&bytes);

        let report_dir = self
            .source
            .report_dir(&req.log_path)
            .context("failed to locate gatling report directory")?;

        let console_summary = match req.console_out.as_deref() {
            Some(path) if !path.as_os_str().is_empty() && self.source.exists(path) => {
                let text = self
                    .source
                    .read_text(path)
                    .context("failed to read gatling console output")?;
                console_summary(&text, CONSOLE_TAIL_LINES)
            }
            Some(path) => {
                tracing::debug!(path = %path.display(), "console output not found, skipping");
                None
            }
            None => None,
        };

        let status = GatlingStatus::from_summary(&summary);
        if status.is_failure() {
            tracing::info!(?status, "gatling run reported failed requests");
        }

        Ok(GatlingReport {
            schema: GATLING_SCHEMA_V1.to_string(),
            generated_at: self.clock.now_rfc3339(),
            report_index: report_dir.join("index.html").display().to_string(),
            artifact_name: req.artifact_name.filter(|a| !a.is_empty()),
            console_summary,
            summary,
        })
    }
}

pub fn render_gatling_markdown(report: &GatlingReport) -> String {
    let summary = &report.summary;
    let mut out = String::new();

    out.push_str(&format!("## {GATLING_TITLE}\n"));
    out.push_str(&format!("Generated: {}\n\n", report.generated_at));

    if let Some(class) = &summary.simulation_class {
        out.push_str(&format!("Simulation: `{class}`\n\n"));
    }

    match GatlingStatus::from_summary(summary) {
        GatlingStatus::Pass => out.push_str("Status: PASS\n\n"),
        GatlingStatus::Fail { ko } => out.push_str(&format!("Status: FAIL (KO={ko})\n\n")),
        GatlingStatus::Unavailable => out.push_str(
            "Status: Completed (KO/OK summary unavailable from binary simulation.log)\n\n",
        ),
    }

    if let Some(console) = report
        .console_summary
        .as_deref()
        .filter(|c| !c.trim().is_empty())
    {
        out.push_str("Console summary:\n\n");
        out.push_str("```\n");
        out.push_str(console.trim_end());
        out.push_str("\n```\n\n");
    }

    out.push_str("| Metric | Value |\n");
    out.push_str("|---|---:|\n");
    if let Some(n) = summary.total_requests {
        out.push_str(&format!("| Total requests | {n} |\n"));
    }
    if let Some(n) = summary.ok_count {
        out.push_str(&format!("| OK | {n} |\n"));
    }
    if let Some(n) = summary.ko_count {
        out.push_str(&format!("| KO | {n} |\n"));
    }
    out.push('\n');

    out.push_str(&format!(
        "Report (artifact path): `{}`\n",
        report.report_index
    ));
    if let Some(artifact) = &report.artifact_name {
        out.push_str(&format!(
            "Artifact: `{artifact}` (download from this workflow run)\n"
        ));
    }

    out
}
