use crate::{split_lines, strip_ansi};
use benchmd_types::{JmhParseResult, JmhRow};
use regex::Regex;
use std::sync::LazyLock;

pub const MISSING_TABLE_WARNING: &str =
    "Could not find JMH summary table (Benchmark Mode Cnt Score Error Units).";

static SBT_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[info\]\s+Benchmark\s+Mode\s+").expect("sbt header pattern is valid")
});
static HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Benchmark\s+Mode\s+").expect("header pattern is valid"));
static INFO_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[info\][\s\x{FEFF}]+").expect("info prefix pattern is valid")
});
static COLUMN_GAP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s\x{FEFF}]{2,}").expect("column gap pattern is valid"));

/// Parse the final JMH summary table out of console output.
///
/// Expected shape (optionally `[info]`-prefixed and colored by sbt):
///
/// ```text
/// Benchmark                     Mode  Cnt   Score   Error  Units
/// BlobBenchmarks.blobSizeCheck  avgt    5   0,767 ± 0,012  ns/op
/// ```
///
/// Columns are separated by two or more whitespace characters.
pub fn parse_jmh_summary(text: &str) -> JmhParseResult {
    let clean = strip_ansi(text);
    let lines = split_lines(&clean);

    let Some(header_idx) = lines.iter().position(|line| is_header(trim_line(line))) else {
        tracing::warn!(lines = lines.len(), "no JMH summary header found");
        return JmhParseResult {
            rows: Vec::new(),
            warning: Some(MISSING_TABLE_WARNING.to_string()),
        };
    };

    let mut rows = Vec::new();
    for raw in &lines[header_idx + 1..] {
        let line = INFO_PREFIX_RE.replace(trim_line(raw), "");
        if line.is_empty() {
            continue;
        }

        // Any bracketed log line after the table means the table is over.
        if line.starts_with('[') {
            break;
        }

        let fields: Vec<&str> = COLUMN_GAP_RE
            .split(&line)
            .filter(|f| !f.is_empty())
            .collect();

        match row_from_fields(&fields) {
            Some(row) => rows.push(row),
            None => tracing::debug!(line = %line, "skipping short JMH row"),
        }
    }

    tracing::debug!(header_idx, rows = rows.len(), "parsed JMH summary");

    JmhParseResult {
        rows,
        warning: None,
    }
}

/// `str::trim` plus U+FEFF, which editors and PowerShell redirects leave at
/// the start of files and which is not Unicode whitespace.
fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

fn is_header(line: &str) -> bool {
    SBT_HEADER_RE.is_match(line) || HEADER_RE.is_match(line)
}

fn row_from_fields(fields: &[&str]) -> Option<JmhRow> {
    let n = fields.len();
    if n < 4 {
        return None;
    }

    let (count, score, units) = if n >= 6 {
        // Benchmark, Mode, Cnt, Score, Error, Units
        (fields[2], fields[3], fields[5])
    } else {
        // Cnt and/or Error missing or collapsed into a neighbour; read from the right.
        let count = if n >= 5 { fields[2] } else { "" };
        (count, fields[n - 2], fields[n - 1])
    };

    Some(JmhRow {
        benchmark: fields[0].to_string(),
        mode: fields[1].to_string(),
        count: count.to_string(),
        score: score.to_string(),
        units: units.to_string(),
    })
}
