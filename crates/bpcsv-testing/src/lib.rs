//! Testing infrastructure for bpcsv integration tests.
//!
//! - `TestWorld`: isolated temp directory plus CLI execution
//! - `fixtures`: synthetic health data export documents

pub mod fixtures;
pub mod world;

pub use fixtures::ExportDocument;
pub use world::{CliResult, TestWorld};
