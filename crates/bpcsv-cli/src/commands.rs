use crate::args::Cli;
use crate::config::Config;
use crate::error::Failure;
use crate::paths::expand_tilde;
use anyhow::{Context, Result};
use bpcsv_export::{
    ExportFilter, ExportItem, ExportSummary, ObservationWriter, RecordStream, export_observations,
};
use bpcsv_types::{MinimumDate, TypeIdentifiers};
use std::fs::File;
use std::io::{BufWriter, Write};

pub fn run(cli: Cli) -> std::result::Result<(), Failure> {
    let Some(xml_file) = cli.xml_file.as_deref() else {
        return Err(Failure::usage("Filename required"));
    };

    let path = expand_tilde(xml_file);
    if !path.exists() {
        return Err(Failure::usage(format!("'{}' not found", path.display())));
    }

    let min_date = MinimumDate::from_arg(cli.min_date.as_deref()).map_err(|err| {
        Failure::Usage {
            message: format!(
                "Error parsing date '{}'",
                cli.min_date.as_deref().unwrap_or_default()
            ),
            detail: Some(err.to_string()),
        }
    })?;

    let config = Config::load(cli.config.as_deref())?;
    let header = cli.header || config.output.header;
    let filter = ExportFilter::new(min_date);
    tracing::debug!(min_date = ?min_date.map(|d| d.to_string()), "built filter");

    let items = RecordStream::open(&path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    tracing::debug!(path = %path.display(), header, "opened export");

    let summary = match cli.output.as_deref() {
        Some(output) => {
            let output_path = expand_tilde(output);
            let file = File::create(&output_path)
                .with_context(|| format!("Failed to create {}", output_path.display()))?;
            let summary = write_csv(items, BufWriter::new(file), header, &config.identifiers, &filter)?;
            tracing::info!(
                path = %output_path.display(),
                rows = summary.rows_written,
                "wrote CSV"
            );
            summary
        }
        None => {
            let stdout = std::io::stdout();
            write_csv(items, stdout.lock(), header, &config.identifiers, &filter)?
        }
    };

    if cli.summary {
        eprintln!(
            "{} rows written ({} before minimum date, {} incomplete)",
            summary.rows_written, summary.rows_filtered, summary.items_incomplete
        );
    }

    Ok(())
}

fn write_csv<I, W>(
    items: I,
    out: W,
    header: bool,
    ids: &TypeIdentifiers,
    filter: &ExportFilter,
) -> Result<ExportSummary>
where
    I: IntoIterator<Item = bpcsv_export::Result<ExportItem>>,
    W: Write,
{
    let mut writer = if header {
        ObservationWriter::with_header(out)?
    } else {
        ObservationWriter::new(out)
    };

    let result = export_observations(items, ids, filter, &mut writer);
    // Rows emitted before a failure still reach the output
    let mut out = writer.finish()?;
    out.flush()?;
    Ok(result?)
}
