use crate::filter::ExportFilter;
use crate::item::ExportItem;
use crate::matcher::{RecordMatch, match_record};
use crate::writer::ObservationWriter;
use crate::Result;
use bpcsv_types::TypeIdentifiers;
use std::io::Write;

/// Counters collected over one export run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub items_scanned: usize,
    pub rows_written: usize,
    /// Pairs dropped by the minimum date
    pub rows_filtered: usize,
    /// Items holding only one half of a reading
    pub items_incomplete: usize,
}

/// Match, filter and write every item in document order.
///
/// Stops at the first error; rows written before it stay written.
pub fn export_observations<I, W>(
    items: I,
    ids: &TypeIdentifiers,
    filter: &ExportFilter,
    writer: &mut ObservationWriter<W>,
) -> Result<ExportSummary>
where
    I: IntoIterator<Item = Result<ExportItem>>,
    W: Write,
{
    let mut summary = ExportSummary::default();

    for item in items {
        let item = item?;
        summary.items_scanned += 1;

        match match_record(&item, ids)? {
            RecordMatch::Paired(observation) => {
                if filter.admits(&observation) {
                    writer.write(&observation)?;
                    summary.rows_written += 1;
                } else {
                    summary.rows_filtered += 1;
                }
            }
            RecordMatch::Incomplete => summary.items_incomplete += 1,
            RecordMatch::Unrelated => {}
        }
    }

    tracing::debug!(
        items_scanned = summary.items_scanned,
        rows_written = summary.rows_written,
        rows_filtered = summary.rows_filtered,
        items_incomplete = summary.items_incomplete,
        "export finished"
    );

    Ok(summary)
}
