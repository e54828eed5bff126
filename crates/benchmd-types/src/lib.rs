//! Shared types for benchmd.
//!
//! Design goal: plain, explicit, boring.
//! Both reporters build one of these per invocation and hand it to a renderer.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const GATLING_SCHEMA_V1: &str = "benchmd.gatling.v1";
pub const JMH_SCHEMA_V1: &str = "benchmd.jmh.v1";

/// Best-effort summary recovered from a Gatling `simulation.log`.
///
/// Every extracted field is optional: recent Gatling versions write a binary
/// log and only some human-readable strings survive inside it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct GatlingSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ok_count: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ko_count: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_requests: Option<u64>,

    /// Reserved. Never populated by the current extractor.
    #[serde(default)]
    pub assertions: Vec<String>,

    /// Fully qualified class, e.g. `simulations.com.example.LoadTest`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simulation_class: Option<String>,

    /// Reserved. Never populated by the current extractor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simulation_id: Option<String>,
}

/// One row of the JMH summary table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct JmhRow {
    pub benchmark: String,
    pub mode: String,

    /// Empty when the source table has no `Cnt` column.
    #[serde(default)]
    pub count: String,

    pub score: String,
    pub units: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct JmhParseResult {
    pub rows: Vec<JmhRow>,

    /// Set only when no header row was found; `rows` is empty in that case.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// JSON envelope written by `gatling-to-md --format json`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct GatlingReport {
    pub schema: String,
    pub generated_at: String,

    /// Absolute path of the HTML report Gatling writes next to the log.
    pub report_index: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifact_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub console_summary: Option<String>,

    pub summary: GatlingSummary,
}

/// JSON envelope written by `jmh-to-md --format json`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct JmhReport {
    pub schema: String,
    pub generated_at: String,
    pub result: JmhParseResult,
}
