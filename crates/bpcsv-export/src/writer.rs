use crate::{Error, Result};
use bpcsv_types::PairedObservation;
use std::io::Write;

/// Column names written when a header row is requested
pub const HEADER: [&str; 4] = ["diastolic_date", "diastolic", "systolic_date", "systolic"];

/// CSV sink for paired observations, one row per observation.
pub struct ObservationWriter<W: Write> {
    inner: csv::Writer<W>,
}

impl<W: Write> ObservationWriter<W> {
    /// Writer without a header row
    pub fn new(out: W) -> Self {
        let inner = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(out);
        Self { inner }
    }

    /// Writer that starts with the [`HEADER`] row
    pub fn with_header(out: W) -> Result<Self> {
        let mut writer = Self::new(out);
        writer.inner.write_record(HEADER)?;
        Ok(writer)
    }

    pub fn write(&mut self, observation: &PairedObservation) -> Result<()> {
        self.inner.write_record(observation.to_row())?;
        Ok(())
    }

    /// Flush buffered rows and hand back the underlying stream
    pub fn finish(self) -> Result<W> {
        self.inner
            .into_inner()
            .map_err(|e| Error::Io(e.into_error()))
    }
}
