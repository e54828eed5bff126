//! Plumbing shared by the `gatling-to-md` and `jmh-to-md` binaries.

use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Markdown, suitable for `$GITHUB_STEP_SUMMARY` or a PR comment
    #[default]
    Md,
    /// The extracted data as pretty-printed JSON
    Json,
}

/// Log to stderr so stdout stays pure Markdown/JSON.
///
/// Defaults to `warn`; override with `RUST_LOG`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Map the outcome of a run to the process exit code.
///
/// Usage errors never get here: clap exits with 2 on its own.
pub fn exit_code(result: anyhow::Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::from(1)
        }
    }
}
