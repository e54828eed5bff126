use crate::{split_lines, strip_ansi};
use benchmd_types::GatlingSummary;
use regex::Regex;
use std::sync::LazyLock;

/// How many trailing console lines are searched for the run summary.
pub const CONSOLE_TAIL_LINES: usize = 200;

/// A console line is kept if it contains any of these.
pub const CONSOLE_KEYWORDS: &[&str] = &[
    "Requests",
    "OK",
    "KO",
    "Global:",
    "Simulation",
    "Reports generated",
];

static OK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^>\s+OK\s+([0-9]+)").expect("OK pattern is valid"));
static KO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^>\s+KO\s+([0-9]+)").expect("KO pattern is valid"));
static REQUEST_COUNT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^>\s+request count\s+\|\s+([0-9]+)").expect("request count pattern is valid")
});
static SIMULATION_CLASS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"simulations\.[A-Za-z0-9_$.]+").expect("simulation class pattern is valid")
});

/// Extract what we can from a Gatling `simulation.log`.
///
/// The log is binary for Gatling 3.14+, so this works on the bytes decoded
/// lossily as UTF-8 and only recovers fields whose text happens to be embedded.
/// The OK/KO/request-count lines only exist when console output was captured
/// into the same file; the simulation class is usually present either way.
pub fn parse_gatling_log(bytes: &[u8]) -> GatlingSummary {
    let text = String::from_utf8_lossy(bytes);
    let lines = split_lines(&text);

    let ok_count = first_count(&lines, &OK_RE);
    let ko_count = first_count(&lines, &KO_RE);
    let total_requests = first_count(&lines, &REQUEST_COUNT_RE);
    let simulation_class = SIMULATION_CLASS_RE
        .find(&text)
        .map(|m| m.as_str().to_string());

    tracing::debug!(
        lines = lines.len(),
        ?ok_count,
        ?ko_count,
        ?total_requests,
        ?simulation_class,
        "extracted gatling summary"
    );

    GatlingSummary {
        ok_count,
        ko_count,
        total_requests,
        assertions: Vec::new(),
        simulation_class,
        simulation_id: None,
    }
}

/// Number captured by the first line matching `re`.
///
/// Only the first match counts. The capture is always a non-empty digit run,
/// so the parse can only fail on overflow; such counts saturate at `u64::MAX`.
fn first_count(lines: &[&str], re: &Regex) -> Option<u64> {
    let digits = lines
        .iter()
        .find_map(|&line| re.captures(line).and_then(|c| c.get(1)))?;
    Some(digits.as_str().parse().unwrap_or(u64::MAX))
}

/// Outcome line shown at the top of the Gatling report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatlingStatus {
    Pass,
    Fail { ko: u64 },
    /// KO count could not be recovered (binary log without console text).
    Unavailable,
}

impl GatlingStatus {
    /// A present KO count is never downgraded to `Unavailable`; an
    /// overflowing count has already saturated and still reads as a failure.
    pub fn from_summary(summary: &GatlingSummary) -> Self {
        match summary.ko_count {
            Some(0) => GatlingStatus::Pass,
            Some(ko) => GatlingStatus::Fail { ko },
            None => GatlingStatus::Unavailable,
        }
    }

    pub fn is_failure(self) -> bool {
        matches!(self, GatlingStatus::Fail { .. })
    }
}

/// Pull the end-of-run summary out of a captured Gatling console transcript.
///
/// Looks at the last `tail_lines` lines only. Returns `None` when nothing
/// but whitespace survives the keyword filter.
pub fn console_summary(text: &str, tail_lines: usize) -> Option<String> {
    let clean = strip_ansi(text);
    let lines = split_lines(&clean);
    let tail = &lines[lines.len().saturating_sub(tail_lines)..];

    let kept: Vec<&str> = tail
        .iter()
        .copied()
        .filter(|line| CONSOLE_KEYWORDS.iter().any(|k| line.contains(k)))
        .collect();

    tracing::debug!(
        total = lines.len(),
        tail = tail.len(),
        kept = kept.len(),
        "filtered console transcript"
    );

    let joined = kept.join("\n");
    if joined.trim().is_empty() {
        None
    } else {
        Some(joined)
    }
}
