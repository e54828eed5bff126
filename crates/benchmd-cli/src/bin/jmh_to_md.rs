use benchmd_adapters::StdSourceReader;
use benchmd_app::{JmhReportRequest, JmhReportUseCase, SystemClock, render_jmh_markdown, render_json};
use benchmd_cli::{OutputFormat, exit_code, init_tracing};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "jmh-to-md",
    version,
    about = "Render the JMH summary table from console output as Markdown"
)]
struct Cli {
    /// File holding the captured stdout of a JMH or sbt-jmh run
    jmh_stdout: PathBuf,

    #[arg(long, value_enum, default_value_t = OutputFormat::Md)]
    format: OutputFormat,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();
    exit_code(real_main(cli))
}

fn real_main(cli: Cli) -> anyhow::Result<()> {
    let usecase = JmhReportUseCase::new(StdSourceReader, SystemClock);
    let report = usecase.execute(JmhReportRequest {
        input: cli.jmh_stdout,
    })?;

    let out = match cli.format {
        OutputFormat::Md => render_jmh_markdown(&report),
        OutputFormat::Json => render_json(&report)?,
    };
    print!("{out}");

    Ok(())
}
