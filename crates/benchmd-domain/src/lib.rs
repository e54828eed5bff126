//! Domain logic for benchmd.
//!
//! This crate is intentionally I/O-free: it takes text (or raw bytes) and
//! returns the extracted report model. Nothing here can fail; a pattern that
//! does not match simply leaves the corresponding field empty.

mod gatling;
mod jmh;

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

pub use gatling::{
    CONSOLE_KEYWORDS, CONSOLE_TAIL_LINES, GatlingStatus, console_summary, parse_gatling_log,
};
pub use jmh::{MISSING_TABLE_WARNING, parse_jmh_summary};

static ANSI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[a-zA-Z]").expect("ANSI pattern is valid"));

/// Remove SGR-style ANSI escape sequences (`ESC [ 1;32 m` and friends).
///
/// Returns the input borrowed when there is nothing to strip.
pub fn strip_ansi(text: &str) -> Cow<'_, str> {
    ANSI_RE.replace_all(text, "")
}

/// Split on `\r?\n`.
///
/// A trailing newline produces a trailing empty line, and a `\r` that is not
/// followed by `\n` stays part of its line.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}
