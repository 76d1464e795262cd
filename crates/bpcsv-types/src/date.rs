use crate::{Error, Result};
use chrono::{DateTime, FixedOffset, NaiveDate};
use std::fmt;
use std::str::FromStr;

/// Layout of the `startDate` attribute in the export, e.g. `2023-05-10 08:00:00 -0700`
pub const START_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// Layout of timestamps written to the CSV, e.g. `2023-05-10 08:00:00-07:00`
pub const OUTPUT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%:z";

/// Parse an entry's `startDate` attribute
pub fn parse_start_date(input: &str) -> Result<DateTime<FixedOffset>> {
    DateTime::parse_from_str(input, START_DATE_FORMAT).map_err(|source| Error::Timestamp {
        input: input.to_string(),
        source,
    })
}

/// Render a timestamp the way it appears in the CSV output
pub fn format_timestamp(ts: &DateTime<FixedOffset>) -> String {
    ts.format(OUTPUT_TIMESTAMP_FORMAT).to_string()
}

/// Lower bound for exported observations.
///
/// An observation passes only when its calendar date is strictly after the
/// bound; the time of day is not considered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MinimumDate(NaiveDate);

impl MinimumDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Whether `date` is strictly after this bound
    pub fn admits(&self, date: NaiveDate) -> bool {
        date > self.0
    }

    /// Parse the optional command-line argument. An absent or empty
    /// argument means no lower bound.
    pub fn from_arg(arg: Option<&str>) -> Result<Option<Self>> {
        match arg {
            None | Some("") => Ok(None),
            Some(s) => s.parse().map(Some),
        }
    }
}

impl FromStr for MinimumDate {
    type Err = Error;

    /// Accepts exactly `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self> {
        if !is_iso_date_shape(s) {
            return Err(Error::MinDate(s.to_string()));
        }
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Self)
            .map_err(|_| Error::MinDate(s.to_string()))
    }
}

impl fmt::Display for MinimumDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

fn is_iso_date_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}
