use benchmd_adapters::StdSourceReader;
use benchmd_app::{
    GatlingReportRequest, GatlingReportUseCase, SystemClock, render_gatling_markdown, render_json,
};
use benchmd_cli::{OutputFormat, exit_code, init_tracing};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "gatling-to-md",
    version,
    about = "Summarize a Gatling simulation.log as Markdown for CI"
)]
struct Cli {
    /// Gatling simulation.log (text or binary); the HTML report is expected next to it
    simulation_log: PathBuf,

    /// Captured Gatling console output to excerpt in the summary
    #[arg(long, env = "GATLING_CONSOLE_OUT")]
    console_out: Option<PathBuf>,

    /// Name of the CI artifact holding the HTML report
    #[arg(long, env = "GATLING_ARTIFACT_NAME")]
    artifact_name: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Md)]
    format: OutputFormat,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();
    exit_code(real_main(cli))
}

fn real_main(cli: Cli) -> anyhow::Result<()> {
    tracing::debug!(?cli, "gatling-to-md");

    let usecase = GatlingReportUseCase::new(StdSourceReader, SystemClock);
    let report = usecase.execute(GatlingReportRequest {
        log_path: cli.simulation_log,
        console_out: cli.console_out,
        artifact_name: cli.artifact_name,
    })?;

    let out = match cli.format {
        OutputFormat::Md => render_gatling_markdown(&report),
        OutputFormat::Json => render_json(&report)?,
    };
    print!("{out}");

    Ok(())
}
