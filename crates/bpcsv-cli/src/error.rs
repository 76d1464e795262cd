use std::path::Path;
use thiserror::Error;

/// Why a run failed. Both kinds exit with status 1.
#[derive(Error, Debug)]
pub enum Failure {
    /// Bad invocation: missing file name, missing file, unreadable date
    #[error("{message}")]
    Usage {
        message: String,
        detail: Option<String>,
    },

    /// Failure while reading the export or writing the CSV
    #[error(transparent)]
    Runtime(#[from] anyhow::Error),
}

impl Failure {
    pub fn usage(message: impl Into<String>) -> Self {
        Failure::Usage {
            message: message.into(),
            detail: None,
        }
    }

    /// Text written to stderr for this failure; `argv` is the full command line
    pub fn report(&self, argv: &[String]) -> String {
        match self {
            Failure::Usage { message, detail } => {
                let program = argv
                    .first()
                    .and_then(|arg0| Path::new(arg0).file_name())
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "bpcsv".to_string());

                let mut out = String::new();
                if let Some(detail) = detail {
                    out.push_str(detail);
                    out.push('\n');
                }
                out.push_str(&format!("Error:  {}\n", message));
                out.push_str(&format!("  Cmdline: {}\n", argv.join(" ")));
                out.push_str(&format!(
                    "  Usage:  {} <xml file> [<minimum date>]",
                    program
                ));
                out
            }
            Failure::Runtime(err) => format!("Error: {:#}", err),
        }
    }
}
