//! bpcsv - paired blood pressure readings from a health data export
//!
//! Reads the `export.xml` produced by the Health app's "Export All Health
//! Data", keeps every item that holds both a systolic and a diastolic
//! reading, and writes them as CSV rows:
//!
//! ```text
//! 2023-05-10 08:00:00-07:00,82,2023-05-10 08:00:00-07:00,130
//! ```
//!
//! The file is streamed, so exports of any size run in constant memory.

mod args;
mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod paths;

pub use args::{Cli, LogLevel};
pub use commands::run;
pub use error::Failure;
