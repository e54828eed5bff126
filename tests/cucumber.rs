//! BDD test runner using cucumber for the benchmd reporters.
//!
//! Feature files live in `features/`. Steps write inputs into a temporary
//! directory and drive the app-layer use cases with the std filesystem adapter
//! and a fixed clock, so rendered reports are deterministic.

use benchmd_adapters::StdSourceReader;
use benchmd_app::{
    Clock, GatlingReportRequest, GatlingReportUseCase, JmhReportRequest, JmhReportUseCase,
    render_gatling_markdown, render_jmh_markdown,
};
use cucumber::gherkin::Step;
use cucumber::{World, given, then, when};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

struct FixedClock;

impl Clock for FixedClock {
    fn now_rfc3339(&self) -> String {
        "2026-01-02T03:04:05Z".to_string()
    }
}

/// World struct that holds state across BDD scenario steps.
#[derive(Debug, Default, World)]
pub struct BenchmdWorld {
    /// Temporary directory for test inputs
    temp_dir: Option<TempDir>,
    /// Path to the Gatling simulation log
    simulation_log: Option<PathBuf>,
    /// Path to the Gatling console transcript
    console_out: Option<PathBuf>,
    /// Path to the captured JMH output
    jmh_output: Option<PathBuf>,
    /// Markdown produced by the last render
    report: String,
}

impl BenchmdWorld {
    /// Write `contents` to `name` inside the scenario's temp dir.
    fn write_input(&mut self, name: &str, contents: &[u8]) -> PathBuf {
        let dir = self
            .temp_dir
            .get_or_insert_with(|| TempDir::new().expect("Failed to create temp directory"));
        let path = dir.path().join(name);
        fs::write(&path, contents).expect("Failed to write input file");
        path
    }
}

fn docstring(step: &Step) -> String {
    step.docstring
        .as_ref()
        .expect("Step requires a docstring")
        .trim_start_matches('\n')
        .to_string()
}

// ============================================================================
// GIVEN STEPS
// ============================================================================

#[given("a simulation log containing:")]
async fn given_simulation_log(world: &mut BenchmdWorld, step: &Step) {
    let text = docstring(step);
    world.simulation_log = Some(world.write_input("simulation.log", text.as_bytes()));
}

#[given(expr = "a binary simulation log naming {string}")]
async fn given_binary_simulation_log(world: &mut BenchmdWorld, class: String) {
    let mut bytes = vec![0x00, 0x00, 0x00, 0x01, 0x03];
    bytes.extend_from_slice(class.as_bytes());
    bytes.extend_from_slice(&[0x00, 0xff, 0xfe, 0x8b]);
    world.simulation_log = Some(world.write_input("simulation.log", &bytes));
}

#[given("a console transcript containing:")]
async fn given_console_transcript(world: &mut BenchmdWorld, step: &Step) {
    let text = docstring(step);
    world.console_out = Some(world.write_input("console.txt", text.as_bytes()));
}

#[given("JMH output containing:")]
async fn given_jmh_output(world: &mut BenchmdWorld, step: &Step) {
    let text = docstring(step);
    world.jmh_output = Some(world.write_input("jmh.txt", text.as_bytes()));
}

// ============================================================================
// WHEN STEPS
// ============================================================================

#[when("I render the Gatling report")]
async fn when_render_gatling(world: &mut BenchmdWorld) {
    let log_path = world
        .simulation_log
        .clone()
        .expect("Simulation log not set");

    let usecase = GatlingReportUseCase::new(StdSourceReader, FixedClock);
    let report = usecase
        .execute(GatlingReportRequest {
            log_path,
            console_out: world.console_out.clone(),
            artifact_name: None,
        })
        .expect("Gatling report should render");
    world.report = render_gatling_markdown(&report);
}

#[when("I render the JMH report")]
async fn when_render_jmh(world: &mut BenchmdWorld) {
    let input = world.jmh_output.clone().expect("JMH output not set");

    let usecase = JmhReportUseCase::new(StdSourceReader, FixedClock);
    let report = usecase
        .execute(JmhReportRequest { input })
        .expect("JMH report should render");
    world.report = render_jmh_markdown(&report);
}

// ============================================================================
// THEN STEPS
// ============================================================================

#[then(expr = "the report should contain {string}")]
async fn then_report_contains(world: &mut BenchmdWorld, expected: String) {
    assert!(
        world.report.contains(&expected),
        "Expected report to contain {:?}. Got:\n{}",
        expected,
        world.report
    );
}

#[then(expr = "the report should not contain {string}")]
async fn then_report_not_contains(world: &mut BenchmdWorld, unexpected: String) {
    assert!(
        !world.report.contains(&unexpected),
        "Expected report not to contain {:?}. Got:\n{}",
        unexpected,
        world.report
    );
}

// ============================================================================
// MAIN FUNCTION
// ============================================================================

#[tokio::main]
async fn main() {
    BenchmdWorld::run("features/").await;
}
