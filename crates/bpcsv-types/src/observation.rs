use crate::date::format_timestamp;
use chrono::{DateTime, FixedOffset, NaiveDate};

/// A systolic and diastolic value found in the same export record.
///
/// Values are carried exactly as they appear in the export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairedObservation {
    /// Start date of the systolic entry
    pub timestamp: DateTime<FixedOffset>,
    pub diastolic: String,
    pub systolic: String,
}

impl PairedObservation {
    /// Calendar date of the reading in its own UTC offset
    pub fn observation_date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }

    /// CSV columns: diastolic time, diastolic, systolic time, systolic
    pub fn to_row(&self) -> [String; 4] {
        let ts = format_timestamp(&self.timestamp);
        [
            ts.clone(),
            self.diastolic.clone(),
            ts,
            self.systolic.clone(),
        ]
    }
}
