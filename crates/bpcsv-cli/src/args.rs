use clap::{Parser, ValueEnum};
use std::fmt;

#[derive(Parser, Debug)]
#[command(name = "bpcsv")]
#[command(
    about = "Extract paired blood pressure readings from a health data export as CSV",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Exported health data document (export.xml)
    #[arg(value_name = "XML_FILE")]
    pub xml_file: Option<String>,

    /// Only keep readings dated after this day (YYYY-MM-DD)
    #[arg(value_name = "MINIMUM_DATE")]
    pub min_date: Option<String>,

    /// Write CSV to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<String>,

    /// Start the CSV with a header row
    #[arg(long)]
    pub header: bool,

    /// TOML config file
    #[arg(long, env = "BPCSV_CONFIG", value_name = "PATH")]
    pub config: Option<String>,

    /// Print row counts to stderr when done
    #[arg(long)]
    pub summary: bool,

    #[arg(long, default_value = "warn")]
    pub log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}
