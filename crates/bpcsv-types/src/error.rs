use std::fmt;

/// Result type for bpcsv-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug)]
pub enum Error {
    /// An entry's start timestamp did not match `YYYY-MM-DD HH:MM:SS ±HHMM`
    Timestamp {
        input: String,
        source: chrono::ParseError,
    },

    /// The minimum date argument was not a real `YYYY-MM-DD` date
    MinDate(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Timestamp { input, .. } => write!(f, "Invalid start date '{}'", input),
            Error::MinDate(input) => {
                write!(f, "Invalid minimum date '{}': expected YYYY-MM-DD", input)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Timestamp { source, .. } => Some(source),
            Error::MinDate(_) => None,
        }
    }
}
