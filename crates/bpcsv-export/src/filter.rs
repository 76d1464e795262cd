use bpcsv_types::{MinimumDate, PairedObservation};

/// Date filter applied to paired observations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportFilter {
    pub min_date: Option<MinimumDate>,
}

impl ExportFilter {
    pub fn new(min_date: Option<MinimumDate>) -> Self {
        Self { min_date }
    }

    /// Compares calendar dates only; the time of day is dropped first.
    pub fn admits(&self, observation: &PairedObservation) -> bool {
        match self.min_date {
            Some(min) => min.admits(observation.observation_date()),
            None => true,
        }
    }
}
