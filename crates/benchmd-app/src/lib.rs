//! Application layer for benchmd.
//!
//! The app layer coordinates adapters and domain logic.
//! It does not parse CLI flags and it does not write anywhere; renderers
//! return strings and the binaries decide where they go.

mod gatling;
mod jmh;

pub use gatling::{
    GATLING_TITLE, GatlingReportRequest, GatlingReportUseCase, render_gatling_markdown,
};
pub use jmh::{JMH_TITLE, JmhReportRequest, JmhReportUseCase, render_jmh_markdown};

pub trait Clock: Send + Sync {
    fn now_rfc3339(&self) -> String;
}

#[derive(Debug, Default, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_rfc3339(&self) -> String {
        use time::format_description::well_known::Rfc3339;
        time::OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .unwrap_or_else(|_| "1970-01-01T00:00:00Z".to_string())
    }
}

/// Pretty JSON with a trailing newline, for `--format json`.
pub fn render_json<T: serde::Serialize>(value: &T) -> anyhow::Result<String> {
    let mut out = serde_json::to_string_pretty(value)?;
    out.push('\n');
    Ok(out)
}
