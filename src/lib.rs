//! benchmd workspace-level test utilities.
//!
//! This crate exists solely to support workspace-level integration tests,
//! particularly the BDD/cucumber tests in `tests/cucumber.rs`.
//!
//! The actual functionality is in the workspace member crates:
//! - `benchmd-types`: Report contracts and JSON schemas
//! - `benchmd-domain`: Pure Gatling/JMH text extraction
//! - `benchmd-adapters`: Filesystem adapters
//! - `benchmd-app`: Report use cases and renderers
//! - `benchmd-cli`: The `gatling-to-md` and `jmh-to-md` binaries
